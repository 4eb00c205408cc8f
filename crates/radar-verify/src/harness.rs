//! Cross-checks the schema catalog's rendered DDL against the table names
//! the model declares and the enum types the registry expects.

use std::collections::BTreeSet;

use radar_ddl::{PgDialect, render_catalog, render_enum_type, table_statement_head};
use radar_model::{CatalogBuilder, EnumTypeDef, SchemaCatalog};

use crate::error::Result;
use crate::extract::extract_table_names;
use crate::report::{VerifyIssue, VerifyReport};

/// Verify that every table name declared in `source` has a `CREATE TABLE`
/// statement in the catalog's rendered DDL.
///
/// # Errors
///
/// Fails fatally only when `source` does not parse; missing tables are
/// collected into the report, not raised.
pub fn verify_tables(source: &str, catalog: &SchemaCatalog) -> Result<VerifyReport> {
    let expected = extract_table_names(source)?;
    Ok(check_tables(&expected, catalog))
}

/// Build the catalog and verify it against `source` in one step.
///
/// Failure order follows the pipeline: an unparseable source is fatal
/// first (nothing to check), then a catalog build failure such as two
/// definitions colliding on one table name is fatal and names the
/// colliding identifier. Only after both gates do missing names accumulate
/// into the report.
pub fn build_and_verify(builder: CatalogBuilder, source: &str) -> Result<VerifyReport> {
    let expected = extract_table_names(source)?;
    let catalog = builder.build()?;
    Ok(check_tables(&expected, &catalog))
}

/// Self-report variant: expected names come from the catalog itself rather
/// than from re-parsing model source. Confirms the renderer emits a
/// statement for everything the catalog registered.
pub fn verify_catalog_names(catalog: &SchemaCatalog) -> VerifyReport {
    check_tables(&catalog.table_names(), catalog)
}

fn check_tables(expected: &BTreeSet<String>, catalog: &SchemaCatalog) -> VerifyReport {
    let dialect = PgDialect;
    let ddl = render_catalog(&dialect, catalog);
    let mut report = VerifyReport::new();
    report.checked_tables = expected.len();
    for name in expected {
        let head = table_statement_head(&dialect, name);
        if !ddl.contains(&head) {
            report.push(VerifyIssue::missing_table(name));
        }
    }
    report
}

/// Verify that each expected enum type renders as a `CREATE TYPE … AS ENUM`
/// statement with exactly the expected members in exactly the expected
/// order. Member order is part of the wire contract, so a reordering is a
/// miss, not a cosmetic difference.
pub fn verify_enum_types(expected: &[EnumTypeDef], catalog: &SchemaCatalog) -> VerifyReport {
    let dialect = PgDialect;
    let ddl = render_catalog(&dialect, catalog);
    let mut report = VerifyReport::new();
    report.checked_enums = expected.len();
    for enum_type in expected {
        match catalog.enum_type(&enum_type.name) {
            None => report.push(VerifyIssue::missing_enum(&enum_type.name)),
            Some(registered) => {
                let statement = render_enum_type(&dialect, enum_type);
                if !ddl.contains(&statement) {
                    report.push(VerifyIssue::enum_order_mismatch(
                        &enum_type.name,
                        &enum_type.members,
                        &registered.members,
                    ));
                }
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use radar_model::{Column, TableDef};

    use super::*;

    fn two_table_catalog() -> SchemaCatalog {
        SchemaCatalog::builder()
            .register_table(
                TableDef::new("patient")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::text("patient_comment").nullable()),
            )
            .register_table(
                TableDef::new("hospital")
                    .column(Column::big_serial("id").primary_key())
                    .column(Column::text("hospital_name")),
            )
            .build()
            .expect("catalog builds")
    }

    const TWO_TABLE_SOURCE: &str = r#"
        pub struct Patient;

        impl Patient {
            pub const TABLE_NAME: &'static str = "patient";
        }

        pub struct Hospital;

        impl Hospital {
            pub const TABLE_NAME: &'static str = "hospital";
        }
    "#;

    #[test]
    fn passes_when_every_declared_table_renders() {
        let report = verify_tables(TWO_TABLE_SOURCE, &two_table_catalog())
            .expect("source parses");
        assert!(report.is_pass());
        assert_eq!(report.checked_tables, 2);
    }

    #[test]
    fn reports_exactly_the_missing_table() {
        let catalog = SchemaCatalog::builder()
            .register_table(
                TableDef::new("patient").column(Column::big_serial("id").primary_key()),
            )
            .build()
            .expect("catalog builds");
        let report = verify_tables(TWO_TABLE_SOURCE, &catalog).expect("source parses");
        assert!(!report.is_pass());
        assert_eq!(
            report.missing_tables().into_iter().collect::<Vec<_>>(),
            ["hospital"]
        );
    }

    #[test]
    fn accumulates_all_missing_names() {
        let catalog = SchemaCatalog::builder().build().expect("empty catalog builds");
        let report = verify_tables(TWO_TABLE_SOURCE, &catalog).expect("source parses");
        assert_eq!(report.error_count(), 2);
        assert_eq!(
            report.missing_tables().into_iter().collect::<Vec<_>>(),
            ["hospital", "patient"]
        );
    }

    #[test]
    fn self_report_mode_checks_every_registered_table() {
        let report = verify_catalog_names(&two_table_catalog());
        assert!(report.is_pass());
        assert_eq!(report.checked_tables, 2);
    }

    #[test]
    fn parse_failure_is_fatal() {
        let result = verify_tables("]]] nope", &two_table_catalog());
        assert!(result.is_err());
    }

    #[test]
    fn collision_during_build_is_fatal_and_names_the_identifier() {
        let builder = SchemaCatalog::builder()
            .register_table(
                TableDef::new("patient").column(Column::big_serial("id").primary_key()),
            )
            .register_table(
                TableDef::new("patient").column(Column::big_serial("id").primary_key()),
            );
        let error = build_and_verify(builder, TWO_TABLE_SOURCE)
            .expect_err("colliding catalog must not verify");
        assert!(error.to_string().contains("'patient'"));
    }

    #[test]
    fn parse_failure_wins_over_build_failure() {
        let builder = SchemaCatalog::builder()
            .register_table(
                TableDef::new("patient").column(Column::big_serial("id").primary_key()),
            )
            .register_table(
                TableDef::new("patient").column(Column::big_serial("id").primary_key()),
            );
        let error = build_and_verify(builder, "]]] nope").expect_err("unparseable source");
        assert!(matches!(error, crate::VerifyError::Parse { .. }));
    }
}
