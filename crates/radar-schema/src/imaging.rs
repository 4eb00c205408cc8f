//! Imaging, pathology, and disease-progression records.

use radar_model::{Column, TableDef};

pub struct RenalImaging;

impl RenalImaging {
    pub const TABLE_NAME: &'static str = "renal_imaging";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::timestamp("assessment_date"))
            .column(Column::text("imaging_type"))
            .column(Column::boolean("right_present"))
            .column(Column::text("right_type"))
            .column(Column::integer("right_length"))
            .column(Column::integer("right_volume"))
            .column(Column::boolean("right_cysts"))
            .column(Column::boolean("right_stones"))
            .column(Column::boolean("right_calcification"))
            .column(Column::boolean("right_nephrocalcinosis"))
            .column(Column::boolean("right_nephrolithiasis"))
            .column(Column::text("right_other_malformation"))
            .column(Column::boolean("left_present"))
            .column(Column::text("left_type"))
            .column(Column::integer("left_length"))
            .column(Column::integer("left_volume"))
            .column(Column::boolean("left_cysts"))
            .column(Column::boolean("left_stones"))
            .column(Column::boolean("left_calcification"))
            .column(Column::boolean("left_nephrocalcinosis"))
            .column(Column::boolean("left_nephrolithiasis"))
            .column(Column::text("left_other_malformation"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct LiverImaging;

impl LiverImaging {
    pub const TABLE_NAME: &'static str = "liver_imaging";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("imaging_date"))
            .column(Column::text("imaging_type"))
            .column(Column::double("liver_size").nullable())
            .column(Column::boolean("hepatic_fibrosis").nullable())
            .column(Column::boolean("hepatic_cysts").nullable())
            .column(Column::boolean("bile_duct_cysts").nullable())
            .column(Column::boolean("dilated_bile_ducts").nullable())
            .column(Column::boolean("cholangitis").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

/// Liver disease findings, each paired with its onset date.
pub struct LiverDisease;

impl LiverDisease {
    pub const TABLE_NAME: &'static str = "liver_disease";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::boolean("portal_hypertension").nullable())
            .column(Column::date("portal_hypertension_date").nullable())
            .column(Column::boolean("ascites").nullable())
            .column(Column::date("ascites_date").nullable())
            .column(Column::boolean("oesophageal").nullable())
            .column(Column::date("oesophageal_date").nullable())
            .column(Column::boolean("oesophageal_bleeding").nullable())
            .column(Column::date("oesophageal_bleeding_date").nullable())
            .column(Column::boolean("gastric").nullable())
            .column(Column::date("gastric_date").nullable())
            .column(Column::boolean("gastric_bleeding").nullable())
            .column(Column::date("gastric_bleeding_date").nullable())
            .column(Column::boolean("anorectal").nullable())
            .column(Column::date("anorectal_date").nullable())
            .column(Column::boolean("anorectal_bleeding").nullable())
            .column(Column::date("anorectal_bleeding_date").nullable())
            .column(Column::boolean("cholangitis_acute").nullable())
            .column(Column::date("cholangitis_acute_date").nullable())
            .column(Column::boolean("cholangitis_recurrent").nullable())
            .column(Column::date("cholangitis_recurrent_date").nullable())
            .column(Column::boolean("spleen_palpable").nullable())
            .column(Column::date("spleen_palpable_date").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct Pathology;

impl Pathology {
    pub const TABLE_NAME: &'static str = "pathology";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("report_date"))
            .column(Column::text("kidney_type"))
            .column(Column::text("kidney_side"))
            .column(Column::text("reference_number"))
            .column(Column::text("image_url"))
            .column(Column::text("histological_summary"))
            .column(Column::text("em_findings"))
            .column(Column::date("report_cleaned_date"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

/// Milestone dates of chronic kidney disease progression.
pub struct RenalProgression;

impl RenalProgression {
    pub const TABLE_NAME: &'static str = "renal_progression";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("onset_date"))
            .column(Column::date("esrf_date"))
            .column(Column::date("ckd5_date"))
            .column(Column::date("ckd4_date"))
            .column(Column::date("ckd3a_date"))
            .column(Column::date("ckd3b_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct FetalAnomalyScan;

impl FetalAnomalyScan {
    pub const TABLE_NAME: &'static str = "fetal_anomaly_scan";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("date_of_scan"))
            .column(Column::integer("gestational_age"))
            .column(Column::boolean("oligohydramnios"))
            .column(Column::text("right_anomaly_details").nullable())
            .column(Column::text("right_ultrasound_details").nullable())
            .column(Column::text("left_anomaly_details").nullable())
            .column(Column::text("left_ultrasound_details").nullable())
            .column(Column::boolean("hypoplasia").nullable())
            .column(Column::boolean("echogenicity").nullable())
            .column(Column::boolean("hepatic_abnormalities").nullable())
            .column(Column::text("hepatic_abnormality_details").nullable())
            .column(Column::boolean("lung_abnormalities").nullable())
            .column(Column::text("lung_abnormality_details").nullable())
            .column(Column::boolean("amnioinfusion").nullable())
            .column(Column::integer("amnioinfusion_count").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct FetalUltrasound;

impl FetalUltrasound {
    pub const TABLE_NAME: &'static str = "fetal_ultrasound";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("date_of_scan"))
            .column(Column::text("fetal_identifier").nullable())
            .column(Column::integer("gestational_age"))
            .column(Column::integer("head_centile").nullable())
            .column(Column::integer("abdomen_centile").nullable())
            .column(Column::boolean("uterine_artery_notched").nullable())
            .column(Column::text("liquor_volume").nullable())
            .column(Column::text("fetal_ultrasound_comment").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}
