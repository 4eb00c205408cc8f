//! Renders a [`radar_model::SchemaCatalog`] to literal PostgreSQL DDL text.
//!
//! Rendering is pure string construction: no connection, no driver, no
//! running database. The output is the exact `CREATE TYPE` / `CREATE TABLE`
//! statements a driver would send, which is what the verification harness
//! matches against.

mod dialect;
mod render;

pub use dialect::PgDialect;
pub use render::{render_catalog, render_enum_type, render_table, table_statement_head};

#[cfg(test)]
mod tests {
    use radar_model::{Column, EnumTypeDef, SchemaCatalog, TableDef};

    use super::*;

    #[test]
    fn renders_a_table_with_constraints() {
        let table = TableDef::new("patient_consent")
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("consent_id"))
            .column(Column::date("signed_on_date"))
            .column(Column::date("withdrawn_on_date").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("consent_id", "consent", "id");
        let rendered = render_table(&PgDialect, &table);
        insta::assert_snapshot!(rendered, @r"
        CREATE TABLE patient_consent (
            id BIGSERIAL NOT NULL,
            patient_id BIGINT NOT NULL,
            consent_id BIGINT NOT NULL,
            signed_on_date DATE NOT NULL,
            withdrawn_on_date DATE,
            PRIMARY KEY (id),
            FOREIGN KEY (patient_id) REFERENCES patient (id),
            FOREIGN KEY (consent_id) REFERENCES consent (id)
        );
        ");
    }

    #[test]
    fn enum_members_render_in_declaration_order() {
        let enum_type = EnumTypeDef::new(
            "observation_value_type",
            &["ENUM", "INTEGER", "REAL", "STRING"],
        );
        assert_eq!(
            render_enum_type(&PgDialect, &enum_type),
            "CREATE TYPE observation_value_type AS ENUM ('ENUM', 'INTEGER', 'REAL', 'STRING');"
        );
    }

    #[test]
    fn reordered_members_render_differently() {
        let declared = EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"]);
        let reordered = EnumTypeDef::new("consent_type", &["INFORMATION_SHEET", "FORM"]);
        assert_ne!(
            render_enum_type(&PgDialect, &declared),
            render_enum_type(&PgDialect, &reordered)
        );
    }

    #[test]
    fn catalog_renders_enums_before_tables() {
        let catalog = SchemaCatalog::builder()
            .register_enum(EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"]))
            .register_table(
                TableDef::new("consent")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::text("consent_code"))
                    .column(Column::enumerated("consent_type", "consent_type"))
                    .column(Column::boolean("is_retired").default_expr("false")),
            )
            .build()
            .expect("catalog builds");
        let rendered = render_catalog(&PgDialect, &catalog);
        let type_pos = rendered
            .find("CREATE TYPE consent_type")
            .expect("enum rendered");
        let table_pos = rendered
            .find("CREATE TABLE consent (")
            .expect("table rendered");
        assert!(type_pos < table_pos);
        assert!(rendered.contains("consent_type consent_type NOT NULL"));
        assert!(rendered.contains("is_retired BOOLEAN NOT NULL DEFAULT false"));
    }

    #[test]
    fn unsafe_table_names_are_quoted_in_the_statement_head() {
        assert_eq!(table_statement_head(&PgDialect, "patient"), "CREATE TABLE patient (");
        assert_eq!(
            table_statement_head(&PgDialect, "user"),
            "CREATE TABLE \"user\" ("
        );
    }

    #[test]
    fn unique_and_check_clauses_render() {
        let table = TableDef::new("code")
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("coding_system"))
            .column(Column::text("code"))
            .unique(&["coding_system", "code"])
            .check("code_nonempty", "code <> ''");
        let rendered = render_table(&PgDialect, &table);
        assert!(rendered.contains("    UNIQUE (coding_system, code)"));
        assert!(rendered.contains("    CONSTRAINT code_nonempty CHECK (code <> '')"));
    }
}
