use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnType, is_valid_identifier};
use crate::error::{Result, SchemaError};
use crate::table::TableDef;

/// A named enumerated type with its ordered member labels.
///
/// Member order is significant: it is part of the wire contract (PostgreSQL
/// sorts enum values by declaration order) and must survive into DDL
/// exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTypeDef {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumTypeDef {
    pub fn new(name: impl Into<String>, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

/// The immutable schema catalog: every enum type and table definition the
/// registry knows about, in registration order.
///
/// Built once at startup by [`CatalogBuilder`] and passed by reference to
/// anything that renders or inspects it. There is no ambient global
/// registry; the catalog is an explicit dependency.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaCatalog {
    enum_types: Vec<EnumTypeDef>,
    tables: Vec<TableDef>,
}

impl SchemaCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn enum_types(&self) -> &[EnumTypeDef] {
        &self.enum_types
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumTypeDef> {
        self.enum_types.iter().find(|e| e.name == name)
    }

    /// The registered table names as a sorted set.
    ///
    /// This is the self-report accessor the verification harness uses when
    /// it runs without re-parsing model sources.
    pub fn table_names(&self) -> BTreeSet<String> {
        self.tables.iter().map(|table| table.name.clone()).collect()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn enum_type_count(&self) -> usize {
        self.enum_types.len()
    }
}

/// Collects definitions and validates them as a whole.
///
/// `build()` is the single gate: name collisions, dangling enum references,
/// and malformed identifiers all fail here, before any catalog value
/// exists.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    enum_types: Vec<EnumTypeDef>,
    tables: Vec<TableDef>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn register_enum(mut self, enum_type: EnumTypeDef) -> Self {
        self.enum_types.push(enum_type);
        self
    }

    #[must_use]
    pub fn register_table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }

    pub fn build(self) -> Result<SchemaCatalog> {
        let mut enum_names = BTreeSet::new();
        for enum_type in &self.enum_types {
            if !is_valid_identifier(&enum_type.name) {
                return Err(SchemaError::InvalidIdentifier {
                    name: enum_type.name.clone(),
                    context: "an enum type name".to_string(),
                });
            }
            if enum_type.members.is_empty() {
                return Err(SchemaError::InvalidIdentifier {
                    name: enum_type.name.clone(),
                    context: "an enum type with at least one member".to_string(),
                });
            }
            if !enum_names.insert(enum_type.name.as_str()) {
                return Err(SchemaError::EnumCollision {
                    type_name: enum_type.name.clone(),
                });
            }
        }

        let mut table_names = BTreeSet::new();
        for table in &self.tables {
            if !is_valid_identifier(&table.name) {
                return Err(SchemaError::InvalidIdentifier {
                    name: table.name.clone(),
                    context: "a table name".to_string(),
                });
            }
            if !table_names.insert(table.name.as_str()) {
                return Err(SchemaError::TableCollision {
                    table: table.name.clone(),
                });
            }
            for column in &table.columns {
                if !is_valid_identifier(&column.name) {
                    return Err(SchemaError::InvalidIdentifier {
                        name: column.name.clone(),
                        context: format!("a column of table '{}'", table.name),
                    });
                }
                if let ColumnType::Enum(type_name) = &column.column_type
                    && !enum_names.contains(type_name.as_str())
                {
                    return Err(SchemaError::UnknownEnumType {
                        table: table.name.clone(),
                        column: column.name.clone(),
                        type_name: type_name.clone(),
                    });
                }
            }
        }

        Ok(SchemaCatalog {
            enum_types: self.enum_types,
            tables: self.tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    #[test]
    fn duplicate_table_name_is_a_collision() {
        let result = SchemaCatalog::builder()
            .register_table(TableDef::new("patient").column(Column::big_serial("id").primary_key()))
            .register_table(TableDef::new("patient").column(Column::big_serial("id").primary_key()))
            .build();
        match result {
            Err(SchemaError::TableCollision { table }) => assert_eq!(table, "patient"),
            other => panic!("expected a table collision, got {other:?}"),
        }
    }

    #[test]
    fn enum_reference_must_resolve() {
        let result = SchemaCatalog::builder()
            .register_table(
                TableDef::new("consent")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::enumerated("consent_type", "consent_type")),
            )
            .build();
        assert!(matches!(
            result,
            Err(SchemaError::UnknownEnumType { type_name, .. }) if type_name == "consent_type"
        ));
    }

    #[test]
    fn registration_order_is_preserved() {
        let catalog = SchemaCatalog::builder()
            .register_table(TableDef::new("patient").column(Column::big_serial("id").primary_key()))
            .register_table(TableDef::new("hospital").column(Column::big_serial("id").primary_key()))
            .build()
            .expect("catalog builds");
        let names: Vec<&str> = catalog.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["patient", "hospital"]);
        assert_eq!(
            catalog.table_names().into_iter().collect::<Vec<_>>(),
            ["hospital", "patient"]
        );
    }
}
