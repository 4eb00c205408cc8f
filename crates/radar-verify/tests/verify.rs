//! End-to-end verification tests, including the real registry model.

use radar_model::{Column, EnumTypeDef, SchemaCatalog, TableDef};
use radar_verify::{
    IssueCategory, extract_table_names, verify_catalog_names, verify_enum_types, verify_tables,
};

/// The registry model sources, exactly as compiled into `radar-schema`.
const MODEL_SOURCES: &[&str] = &[
    include_str!("../../radar-schema/src/assessments.rs"),
    include_str!("../../radar-schema/src/cohorts.rs"),
    include_str!("../../radar-schema/src/consent.rs"),
    include_str!("../../radar-schema/src/diagnoses.rs"),
    include_str!("../../radar-schema/src/imaging.rs"),
    include_str!("../../radar-schema/src/lookups.rs"),
    include_str!("../../radar-schema/src/nurture.rs"),
    include_str!("../../radar-schema/src/observations.rs"),
    include_str!("../../radar-schema/src/people.rs"),
    include_str!("../../radar-schema/src/pregnancy.rs"),
    include_str!("../../radar-schema/src/questionnaires.rs"),
    include_str!("../../radar-schema/src/rituximab.rs"),
    include_str!("../../radar-schema/src/samples.rs"),
    include_str!("../../radar-schema/src/treatment.rs"),
];

#[test]
fn every_declared_table_in_the_model_sources_renders() {
    let catalog = radar_schema::build_catalog().expect("catalog builds");
    let mut total_checked = 0;
    for source in MODEL_SOURCES {
        let report = verify_tables(source, &catalog).expect("model source parses");
        assert!(
            report.is_pass(),
            "missing tables: {:?}",
            report.missing_tables()
        );
        total_checked += report.checked_tables;
    }
    assert_eq!(total_checked, catalog.table_count());
}

#[test]
fn expected_enums_match_the_built_catalog() {
    let catalog = radar_schema::build_catalog().expect("catalog builds");
    let report = verify_enum_types(&radar_schema::expected_enums(), &catalog);
    assert!(report.is_pass(), "enum issues: {:?}", report.issues);
}

#[test]
fn catalog_self_report_mode_passes_on_the_full_model() {
    let catalog = radar_schema::build_catalog().expect("catalog builds");
    let report = verify_catalog_names(&catalog);
    assert!(report.is_pass());
    assert_eq!(report.checked_tables, 121);
}

#[test]
fn extraction_is_idempotent_on_real_sources() {
    for source in MODEL_SOURCES {
        let first = extract_table_names(source).expect("source parses");
        let second = extract_table_names(source).expect("source parses");
        assert_eq!(first, second);
    }
}

#[test]
fn extracted_names_appear_verbatim_in_source() {
    for source in MODEL_SOURCES {
        for name in extract_table_names(source).expect("source parses") {
            assert!(
                source.contains(&format!("\"{name}\"")),
                "'{name}' not found as a literal in its source"
            );
        }
    }
}

#[test]
fn enum_reordering_fails_the_check() {
    let catalog = SchemaCatalog::builder()
        .register_enum(EnumTypeDef::new("severity_grade", &["A", "C", "B"]))
        .build()
        .expect("catalog builds");
    let expected = [EnumTypeDef::new("severity_grade", &["A", "B", "C"])];
    let report = verify_enum_types(&expected, &catalog);
    assert!(!report.is_pass());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].category, IssueCategory::EnumOrderMismatch);
    assert!(report.issues[0].message.contains("A, B, C"));
    assert!(report.issues[0].message.contains("A, C, B"));
}

#[test]
fn unregistered_enum_is_reported_missing() {
    let catalog = SchemaCatalog::builder().build().expect("empty catalog builds");
    let expected = [EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"])];
    let report = verify_enum_types(&expected, &catalog);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].category, IssueCategory::MissingEnum);
    assert_eq!(
        report.missing_enums().into_iter().collect::<Vec<_>>(),
        ["consent_type"]
    );
}

#[test]
fn combined_reports_merge_counts_and_issues() {
    let catalog = SchemaCatalog::builder()
        .register_table(TableDef::new("patient").column(Column::big_serial("id").primary_key()))
        .build()
        .expect("catalog builds");
    let mut report = verify_catalog_names(&catalog);
    report.merge(verify_enum_types(
        &[EnumTypeDef::new("consent_type", &["FORM"])],
        &catalog,
    ));
    assert_eq!(report.checked_tables, 1);
    assert_eq!(report.checked_enums, 1);
    assert_eq!(report.error_count(), 1);
}
