//! Cohorts and cohort membership.

use radar_model::{Column, TableDef};

/// A recruitment cohort (one per rare-disease group).
pub struct Cohort;

impl Cohort {
    pub const TABLE_NAME: &'static str = "cohort";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("cohort_code"))
            .column(Column::text("cohort_name"))
            .column(Column::text("cohort_short_name"))
    }
}

pub struct CohortPatient;

impl CohortPatient {
    pub const TABLE_NAME: &'static str = "cohort_patient";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("cohort_id"))
            .column(Column::big_int("patient_id"))
            .column(Column::date("recruited_date"))
            .column(Column::date("removed_date").nullable())
            .foreign_key("cohort_id", "cohort", "id")
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Diagnoses a cohort recruits for; `diagnosis_type` points at the option
/// list distinguishing primary from secondary eligibility.
pub struct CohortDiagnosis;

impl CohortDiagnosis {
    pub const TABLE_NAME: &'static str = "cohort_diagnosis";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("cohort_id"))
            .column(Column::big_int("diagnosis_id"))
            .column(Column::big_int("diagnosis_type"))
            .foreign_key("cohort_id", "cohort", "id")
            .foreign_key("diagnosis_id", "diagnosis", "id")
            .foreign_key("diagnosis_type", "option", "id")
    }
}

/// Observations a cohort collects, weighted for display order.
pub struct CohortObservation;

impl CohortObservation {
    pub const TABLE_NAME: &'static str = "cohort_observation";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("cohort_id"))
            .column(Column::big_int("observation_id"))
            .column(Column::integer("weight").default_expr("9999"))
            .foreign_key("cohort_id", "cohort", "id")
            .foreign_key("observation_id", "observation", "id")
            .check("cohort_observation_weight_check", "weight >= 0")
    }
}
