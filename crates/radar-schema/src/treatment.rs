//! Treatment history: medication, dialysis, plasmapheresis, transplants,
//! surgery, nutrition, and hospital admissions.

use radar_model::{Column, TableDef};

pub struct Medication;

impl Medication {
    pub const TABLE_NAME: &'static str = "medication";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("drug_id"))
            .column(Column::date("snapshot_date").nullable())
            .column(Column::date("start_date").nullable())
            .column(Column::date("finish_date").nullable())
            .column(Column::double("dose_quantity").nullable())
            .column(Column::text("dose_unit"))
            .column(Column::text("frequency"))
            .column(Column::text("route"))
            .column(Column::text("drug_text"))
            .column(Column::text("dose_text"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("drug_id", "drug", "id")
    }
}

/// A dialysis timeline entry; `modality` is the registry's numeric
/// treatment-modality code.
pub struct Dialysis;

impl Dialysis {
    pub const TABLE_NAME: &'static str = "dialysis";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("timeline_start"))
            .column(Column::date("timeline_end").nullable())
            .column(Column::integer("modality"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct Plasmapheresis;

impl Plasmapheresis {
    pub const TABLE_NAME: &'static str = "plasmapheresis";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("from_date"))
            .column(Column::date("to_date"))
            .column(Column::text("schedule"))
            .column(Column::text("response"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

/// A kidney transplant; `transplant_hospital_id` is the centre that
/// performed the graft, which may differ from the patient's home hospital.
pub struct Transplant;

impl Transplant {
    pub const TABLE_NAME: &'static str = "transplant";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("transplant_hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("transplant_date"))
            .column(Column::integer("modality"))
            .column(Column::date("date_of_recurrence"))
            .column(Column::date("date_of_failure"))
            .column(Column::boolean("recurrence"))
            .column(Column::date("date_of_cmv_infection"))
            .column(Column::text("donor_hla"))
            .column(Column::text("recipient_hla"))
            .column(Column::text("graft_loss_cause"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("transplant_hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct TransplantBiopsy;

impl TransplantBiopsy {
    pub const TABLE_NAME: &'static str = "transplant_biopsy";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("transplant_id"))
            .column(Column::date("biopsy_date"))
            .column(Column::boolean("recurrence"))
            .foreign_key("transplant_id", "transplant", "id")
    }
}

pub struct TransplantRejection;

impl TransplantRejection {
    pub const TABLE_NAME: &'static str = "transplant_rejection";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("transplant_id"))
            .column(Column::date("rejection_date"))
            .foreign_key("transplant_id", "transplant", "id")
    }
}

pub struct LiverTransplant;

impl LiverTransplant {
    pub const TABLE_NAME: &'static str = "liver_transplant";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("transplant_group_id"))
            .column(Column::date("registration_date"))
            .column(Column::date("transplant_date"))
            .column(Column::text("other_indications"))
            .column(Column::text("first_graft_source"))
            .column(Column::text("loss_reason"))
            .column(Column::text("other_loss_reason"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("transplant_group_id", "hospital", "id")
    }
}

pub struct LiverTransplantIndicator;

impl LiverTransplantIndicator {
    pub const TABLE_NAME: &'static str = "liver_transplant_indicator";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("liver_transplant_id"))
            .column(Column::big_int("indicator_id"))
            .foreign_key("liver_transplant_id", "liver_transplant", "id")
            .foreign_key("indicator_id", "indicator", "id")
    }
}

pub struct Nephrectomy;

impl Nephrectomy {
    pub const TABLE_NAME: &'static str = "nephrectomy";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("kidney_side"))
            .column(Column::text("kidney_type"))
            .column(Column::text("entry_type"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct SurgicalProcedure;

impl SurgicalProcedure {
    pub const TABLE_NAME: &'static str = "procedure";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::text("procedure"))
            .column(Column::text("other_procedure"))
            .column(Column::date("date_of_procedure"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct Nutrition;

impl Nutrition {
    pub const TABLE_NAME: &'static str = "nutrition";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::text("feeding_type"))
            .column(Column::date("from_date"))
            .column(Column::date("to_date"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct Hospitalisation;

impl Hospitalisation {
    pub const TABLE_NAME: &'static str = "hospitalisation";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("date_of_admission"))
            .column(Column::date("date_of_discharge").nullable())
            .column(Column::text("reason_of_admission").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}
