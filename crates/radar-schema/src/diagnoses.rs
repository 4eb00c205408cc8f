//! Patient diagnoses, family history, genetics, and death records.

use radar_model::{Column, TableDef};

pub struct DiagnosisCode;

impl DiagnosisCode {
    pub const TABLE_NAME: &'static str = "diagnosis_code";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("diagnosis_id"))
            .column(Column::big_int("code_id"))
            .foreign_key("diagnosis_id", "diagnosis", "id")
            .foreign_key("code_id", "code", "id")
    }
}

/// A diagnosis made for a patient, with the evidence trail (gene test,
/// biochemistry, biopsy) that supports it.
pub struct PatientDiagnosis;

impl PatientDiagnosis {
    pub const TABLE_NAME: &'static str = "patient_diagnosis";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("diagnosis_id"))
            .column(Column::text("diagnosis_text"))
            .column(Column::date("symptoms_date"))
            .column(Column::date("from_date").nullable())
            .column(Column::date("to_date").nullable())
            .column(Column::date("snapshot_date").nullable())
            .column(Column::boolean("gene_test"))
            .column(Column::boolean("biochemistry"))
            .column(Column::boolean("assessment"))
            .column(Column::boolean("biopsy"))
            .column(Column::integer("biopsy_diagnosis"))
            .column(Column::text("comments"))
            .column(Column::boolean("prenatal"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("diagnosis_id", "diagnosis", "id")
    }
}

/// Whether a named relative of the patient shares a condition.
pub struct FamilyHistory;

impl FamilyHistory {
    pub const TABLE_NAME: &'static str = "family_history";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("diagnosis_id"))
            .column(Column::big_int("relation_patient_id"))
            .column(Column::boolean("has_condition"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("diagnosis_id", "diagnosis", "id")
            .foreign_key("relation_patient_id", "patient", "id")
    }
}

pub struct FamilyHistoryRelation;

impl FamilyHistoryRelation {
    pub const TABLE_NAME: &'static str = "family_history_relation";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("family_history_id"))
            .column(Column::big_int("relation_id"))
            .foreign_key("family_history_id", "family_history", "id")
            .foreign_key("relation_id", "relation", "id")
    }
}

/// Links a family-history relation to the relative's own patient record
/// when the relative is also registered.
pub struct FamilyHistoryRelationPatient;

impl FamilyHistoryRelationPatient {
    pub const TABLE_NAME: &'static str = "family_history_relation_patient";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("family_history_relation_id"))
            .column(Column::big_int("patient_id"))
            .foreign_key("family_history_relation_id", "family_history_relation", "id")
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct ParentalConsanguinity;

impl ParentalConsanguinity {
    pub const TABLE_NAME: &'static str = "parental_consanguinity";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::boolean("consanguinity"))
            .column(Column::text("consanguinity_details"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// A genetics lab request and its outcome for a cohort patient.
pub struct Genetics;

impl Genetics {
    pub const TABLE_NAME: &'static str = "genetics";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("cohort_id"))
            .column(Column::timestamp("date_sent"))
            .column(Column::text("laboratory"))
            .column(Column::text("reference_number").nullable())
            .column(Column::integer("karyotype").nullable())
            .column(Column::text("results").nullable())
            .column(Column::text("summary").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("cohort_id", "cohort", "id")
    }
}

pub struct Death;

impl Death {
    pub const TABLE_NAME: &'static str = "death";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_death"))
            .column(Column::text("cause_of_death").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}
