use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("two table definitions claim the name '{table}'")]
    TableCollision { table: String },

    #[error("two enum type definitions claim the name '{type_name}'")]
    EnumCollision { type_name: String },

    #[error("column '{column}' of table '{table}' references unknown enum type '{type_name}'")]
    UnknownEnumType {
        table: String,
        column: String,
        type_name: String,
    },

    #[error("'{name}' is not a valid identifier for {context}")]
    InvalidIdentifier { name: String, context: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
