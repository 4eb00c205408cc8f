//! Spot checks on the declared registry model.

use radar_model::ColumnType;
use radar_schema::{build_catalog, expected_enums};

#[test]
fn patient_is_thin_with_flag_defaults() {
    let catalog = build_catalog().expect("catalog builds");
    let patient = catalog.table("patient").expect("patient registered");
    let names: Vec<&str> = patient.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "patient_comment", "is_test", "is_control"]);
    assert_eq!(patient.primary_key_columns(), ["id"]);
    assert_eq!(
        patient
            .column_by_name("is_test")
            .and_then(|c| c.default.as_deref()),
        Some("false")
    );
    assert!(patient.column_by_name("patient_comment").expect("comment").nullable);
}

#[test]
fn consent_uses_the_consent_type_enum() {
    let catalog = build_catalog().expect("catalog builds");
    let consent = catalog.table("consent").expect("consent registered");
    let consent_type = consent.column_by_name("consent_type").expect("typed column");
    assert_eq!(
        consent_type.column_type,
        ColumnType::Enum("consent_type".to_string())
    );
    let enum_type = catalog.enum_type("consent_type").expect("enum registered");
    assert_eq!(enum_type.members, ["FORM", "INFORMATION_SHEET"]);
}

#[test]
fn observation_carries_value_domain_checks() {
    let catalog = build_catalog().expect("catalog builds");
    let observation = catalog.table("observation").expect("observation registered");
    assert_eq!(
        observation
            .column_by_name("value_type")
            .map(|c| c.column_type.clone()),
        Some(ColumnType::Enum("observation_value_type".to_string()))
    );
    assert_eq!(
        observation
            .column_by_name("options")
            .map(|c| c.column_type.clone()),
        Some(ColumnType::TextArray)
    );
    let check_names: Vec<&str> = observation
        .check_constraints
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert!(check_names.contains(&"observation_min_max_check"));
    assert!(check_names.contains(&"observation_options_pairing_check"));
}

#[test]
fn code_pairs_are_unique() {
    let catalog = build_catalog().expect("catalog builds");
    let code = catalog.table("code").expect("code registered");
    assert_eq!(code.unique_constraints.len(), 1);
    assert_eq!(code.unique_constraints[0].columns, ["coding_system", "code"]);
}

#[test]
fn table_name_constants_match_definitions() {
    use radar_schema::people::{Hospital, Patient};
    use radar_schema::treatment::Transplant;

    assert_eq!(Patient::table().name, Patient::TABLE_NAME);
    assert_eq!(Hospital::table().name, Hospital::TABLE_NAME);
    assert_eq!(Transplant::table().name, Transplant::TABLE_NAME);
}

#[test]
fn expected_enum_list_is_stable() {
    let names: Vec<String> = expected_enums().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["consent_type", "observation_value_type"]);
}

#[test]
fn transplant_references_hospital_twice() {
    let catalog = build_catalog().expect("catalog builds");
    let transplant = catalog.table("transplant").expect("transplant registered");
    let hospital_refs = transplant
        .foreign_keys
        .iter()
        .filter(|fk| fk.references_table == "hospital")
        .count();
    assert_eq!(hospital_refs, 2);
}
