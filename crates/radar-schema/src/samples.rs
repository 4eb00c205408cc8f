//! Biomarker samples, barcodes, results, and the sample inventory.

use radar_model::{Column, TableDef};

pub struct Biomarker;

impl Biomarker {
    pub const TABLE_NAME: &'static str = "biomarker";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("biomarker_name"))
            .column(Column::text("biomarker_type"))
    }
}

/// A barcoded collection event for a patient.
pub struct BiomarkerBarcode;

impl BiomarkerBarcode {
    pub const TABLE_NAME: &'static str = "biomarker_barcode";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::text("barcode"))
            .column(Column::timestamp("sample_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct BiomarkerSample;

impl BiomarkerSample {
    pub const TABLE_NAME: &'static str = "biomarker_sample";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("barcode_id"))
            .column(Column::text("biomarker_sample_label"))
            .foreign_key("barcode_id", "biomarker_barcode", "id")
    }
}

pub struct BiomarkerResult;

impl BiomarkerResult {
    pub const TABLE_NAME: &'static str = "biomarker_result";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("biomarker_id"))
            .column(Column::big_int("biomarker_sample_id"))
            .column(Column::double("biomarker_result_value"))
            .column(Column::text("measure_unit"))
            .foreign_key("biomarker_id", "biomarker", "id")
            .foreign_key("biomarker_sample_id", "biomarker_sample", "id")
    }
}

/// What sample material is banked for a patient and when it was taken.
pub struct SampleInventory;

impl SampleInventory {
    pub const TABLE_NAME: &'static str = "sample_inventory";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("sample_date"))
            .column(Column::boolean("urine"))
            .column(Column::date("urine_date"))
            .column(Column::text("urine_volume"))
            .column(Column::boolean("serum"))
            .column(Column::date("serum_date"))
            .column(Column::text("serum_volume"))
            .column(Column::boolean("plasma"))
            .column(Column::date("plasma_date"))
            .column(Column::text("plasma_volume"))
            .column(Column::boolean("dna"))
            .column(Column::date("dna_date"))
            .column(Column::boolean("sputum"))
            .column(Column::date("sputum_date"))
            .column(Column::boolean("faeces"))
            .column(Column::date("faeces_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct TubeSample;

impl TubeSample {
    pub const TABLE_NAME: &'static str = "tube_sample";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("sample_date"))
            .column(Column::text("barcode"))
            .column(Column::integer("ins_state"))
            .foreign_key("patient_id", "patient", "id")
    }
}
