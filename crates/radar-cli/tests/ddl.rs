//! End-to-end checks of the DDL the tool prints.

use radar_ddl::{PgDialect, render_catalog, render_table};
use radar_schema::build_catalog;
use radar_schema::lookups::Specialty;

#[test]
fn full_catalog_ddl_contains_core_tables() {
    let catalog = build_catalog().expect("catalog builds");
    let ddl = render_catalog(&PgDialect, &catalog);
    for head in [
        "CREATE TABLE patient (",
        "CREATE TABLE hospital (",
        "CREATE TABLE cohort (",
        "CREATE TABLE transplant (",
        "CREATE TABLE result (",
    ] {
        assert!(ddl.contains(head), "expected '{head}' in rendered DDL");
    }
    assert!(ddl.contains("CREATE TYPE consent_type AS ENUM ('FORM', 'INFORMATION_SHEET');"));
    assert!(ddl.contains(
        "CREATE TYPE observation_value_type AS ENUM ('ENUM', 'INTEGER', 'REAL', 'STRING');"
    ));
}

#[test]
fn specialty_statement_renders_exactly() {
    let rendered = render_table(&PgDialect, &Specialty::table());
    insta::assert_snapshot!(rendered, @r"
    CREATE TABLE specialty (
        id BIGSERIAL NOT NULL,
        specialty TEXT NOT NULL UNIQUE,
        PRIMARY KEY (id)
    );
    ");
}

#[test]
fn enum_types_render_before_any_table() {
    let catalog = build_catalog().expect("catalog builds");
    let ddl = render_catalog(&PgDialect, &catalog);
    let first_table = ddl.find("CREATE TABLE").expect("tables rendered");
    let last_type = ddl.rfind("CREATE TYPE").expect("types rendered");
    assert!(last_type < first_table);
}
