//! Observation definitions and observed results.

use radar_model::{Column, TableDef};

/// Defines one observable quantity: its sample type, value domain, bounds,
/// and units. For `ENUM`-valued observations the legal values live in
/// `options` as label/value pairs, hence the pairing check.
pub struct Observation;

impl Observation {
    pub const TABLE_NAME: &'static str = "observation";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("sample_type_id"))
            .column(Column::text("name"))
            .column(Column::text("short_name"))
            .column(Column::enumerated("value_type", "observation_value_type"))
            .column(Column::integer("min_value").nullable())
            .column(Column::integer("max_value").nullable())
            .column(Column::text("units").nullable())
            .column(Column::text_array("options").nullable())
            .foreign_key("sample_type_id", "sample_type", "id")
            .check(
                "observation_min_max_check",
                "min_value IS NULL OR max_value IS NULL OR max_value >= min_value",
            )
            .check(
                "observation_options_value_type_check",
                "(value_type = 'ENUM' AND options IS NOT NULL) OR (value_type <> 'ENUM' AND options IS NULL)",
            )
            .check(
                "observation_options_pairing_check",
                "options IS NULL OR (COALESCE(array_length(options, 1), 0) > 0 AND array_length(options, 1) % 2 = 0)",
            )
    }
}

pub struct ObservationCode;

impl ObservationCode {
    pub const TABLE_NAME: &'static str = "observation_code";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("observation_id"))
            .column(Column::big_int("code_id"))
            .foreign_key("observation_id", "observation", "id")
            .foreign_key("code_id", "code", "id")
    }
}

pub struct ObservationOption;

impl ObservationOption {
    pub const TABLE_NAME: &'static str = "observation_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("observation_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("observation_id", "observation", "id")
            .foreign_key("option_id", "option", "id")
    }
}

/// An observed value for a patient. Values arrive as text (`sent_value`)
/// and are kept alongside the cleaned `result_value`.
pub struct ObservationResult;

impl ObservationResult {
    pub const TABLE_NAME: &'static str = "result";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::timestamp("result_date"))
            .column(Column::text("qualifier"))
            .column(Column::text("result_value"))
            .column(Column::text("sent_value"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}
