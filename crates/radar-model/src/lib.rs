pub mod catalog;
pub mod column;
pub mod error;
pub mod table;

pub use catalog::{CatalogBuilder, EnumTypeDef, SchemaCatalog};
pub use column::{Column, ColumnType, is_valid_identifier};
pub use error::{Result, SchemaError};
pub use table::{CheckConstraint, ForeignKey, TableDef, UniqueConstraint};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trips_through_builder() {
        let catalog = SchemaCatalog::builder()
            .register_enum(EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"]))
            .register_table(
                TableDef::new("consent")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::text("consent_code"))
                    .column(Column::enumerated("consent_type", "consent_type")),
            )
            .build()
            .expect("catalog builds");
        assert_eq!(catalog.table_count(), 1);
        assert_eq!(catalog.enum_type_count(), 1);
        let consent = catalog.table("consent").expect("consent registered");
        assert_eq!(consent.primary_key_columns(), ["id"]);
    }

    #[test]
    fn catalog_serializes() {
        let catalog = SchemaCatalog::builder()
            .register_table(
                TableDef::new("specialty")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::text("specialty").unique()),
            )
            .build()
            .expect("catalog builds");
        let json = serde_json::to_value(&catalog).expect("serialize catalog");
        assert_eq!(json["tables"][0]["name"], "specialty");
    }
}
