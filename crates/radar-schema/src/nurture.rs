//! NURTuRE biobank study tables.

use radar_model::{Column, TableDef};

pub struct NurtureFamilyHistory;

impl NurtureFamilyHistory {
    pub const TABLE_NAME: &'static str = "nurture_family_history";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::boolean("eskd"))
            .column(Column::integer("eskd_relative_1"))
            .column(Column::integer("eskd_relative_2"))
            .column(Column::integer("eskd_relative_3"))
            .column(Column::boolean("chd"))
            .column(Column::integer("chd_relative_1"))
            .column(Column::integer("chd_relative_2"))
            .column(Column::integer("chd_relative_3"))
            .column(Column::boolean("diabetes"))
            .column(Column::integer("diabetes_relative_1"))
            .column(Column::integer("diabetes_relative_2"))
            .column(Column::integer("diabetes_relative_3"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Study-level bookkeeping: sign-off state and which follow-up elements the
/// patient refused.
pub struct NurtureMetadata;

impl NurtureMetadata {
    pub const TABLE_NAME: &'static str = "nurture_metadata";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("signed_off_state"))
            .column(Column::date("follow_up_refused_date"))
            .column(Column::boolean("blood_tests"))
            .column(Column::date("blood_refused_date"))
            .column(Column::boolean("interviews"))
            .column(Column::date("interviews_refused_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct NurtureVisit;

impl NurtureVisit {
    pub const TABLE_NAME: &'static str = "nurture_visit";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("visit_date"))
            .column(Column::integer("visit"))
            .column(Column::integer("comorbidities"))
            .column(Column::boolean("vaccination_flu"))
            .column(Column::boolean("vaccination_pneumococcal"))
            .column(Column::boolean("admission"))
            .column(Column::integer("admission_number"))
            .column(Column::integer("admission_emergency"))
            .column(Column::integer("admission_planned"))
            .column(Column::integer("admission_days"))
            .column(Column::integer("admission_antibiotics"))
            .column(Column::integer("paracetamol_tablets"))
            .column(Column::integer("paracetamol_years"))
            .column(Column::integer("cocodamol_tablets"))
            .column(Column::integer("cocodamol_years"))
            .column(Column::integer("ibuprofen_tablets"))
            .column(Column::integer("ibuprofen_years"))
            .foreign_key("patient_id", "patient", "id")
    }
}
