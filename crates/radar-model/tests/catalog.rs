//! Tests for radar-model catalog construction.

use radar_model::{Column, EnumTypeDef, SchemaCatalog, SchemaError, TableDef};

fn lookup_table(name: &str, label_column: &str) -> TableDef {
    TableDef::new(name)
        .column(Column::big_serial("id").primary_key())
        .column(Column::text(label_column))
}

#[test]
fn builder_accepts_a_small_model() {
    let catalog = SchemaCatalog::builder()
        .register_table(lookup_table("specialty", "specialty"))
        .register_table(
            TableDef::new("consultant")
                .column(Column::big_serial("id").primary_key())
                .column(Column::big_int("specialty_id"))
                .column(Column::text("first_name"))
                .column(Column::text("last_name"))
                .column(Column::text("email").nullable())
                .foreign_key("specialty_id", "specialty", "id"),
        )
        .build()
        .expect("catalog builds");

    assert_eq!(catalog.table_count(), 2);
    let consultant = catalog.table("consultant").expect("consultant registered");
    assert_eq!(consultant.foreign_keys[0].references_table, "specialty");
    assert!(consultant.column_by_name("email").expect("email column").nullable);
    assert!(catalog.table("nonexistent").is_none());
}

#[test]
fn table_names_are_sorted_and_deduplicated_by_construction() {
    let catalog = SchemaCatalog::builder()
        .register_table(lookup_table("relation", "relationship"))
        .register_table(lookup_table("drug", "drug_name"))
        .register_table(lookup_table("biomarker", "biomarker_name"))
        .build()
        .expect("catalog builds");
    let names: Vec<String> = catalog.table_names().into_iter().collect();
    assert_eq!(names, ["biomarker", "drug", "relation"]);
}

#[test]
fn collision_reports_the_offending_name() {
    let err = SchemaCatalog::builder()
        .register_table(lookup_table("diagnosis", "diagnosis_name"))
        .register_table(lookup_table("diagnosis", "diagnosis_name"))
        .build()
        .expect_err("duplicate table must not build");
    assert_eq!(
        err.to_string(),
        "two table definitions claim the name 'diagnosis'"
    );
}

#[test]
fn duplicate_enum_type_is_a_collision() {
    let err = SchemaCatalog::builder()
        .register_enum(EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"]))
        .register_enum(EnumTypeDef::new("consent_type", &["FORM"]))
        .build()
        .expect_err("duplicate enum must not build");
    assert!(matches!(
        err,
        SchemaError::EnumCollision { type_name } if type_name == "consent_type"
    ));
}

#[test]
fn invalid_identifiers_are_rejected() {
    let err = SchemaCatalog::builder()
        .register_table(lookup_table("Patient", "comment"))
        .build()
        .expect_err("uppercase table name must not build");
    assert!(matches!(err, SchemaError::InvalidIdentifier { name, .. } if name == "Patient"));

    let err = SchemaCatalog::builder()
        .register_table(
            TableDef::new("patient").column(Column::text("patient comment")),
        )
        .build()
        .expect_err("column name with a space must not build");
    assert!(matches!(err, SchemaError::InvalidIdentifier { name, .. } if name == "patient comment"));
}

#[test]
fn enum_members_keep_declaration_order() {
    let catalog = SchemaCatalog::builder()
        .register_enum(EnumTypeDef::new(
            "observation_value_type",
            &["ENUM", "INTEGER", "REAL", "STRING"],
        ))
        .build()
        .expect("catalog builds");
    let value_type = catalog
        .enum_type("observation_value_type")
        .expect("enum registered");
    assert_eq!(value_type.members, ["ENUM", "INTEGER", "REAL", "STRING"]);
}
