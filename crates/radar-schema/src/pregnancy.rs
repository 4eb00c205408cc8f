//! Pregnancy records.

use radar_model::{Column, TableDef};

pub struct Pregnancy;

impl Pregnancy {
    pub const TABLE_NAME: &'static str = "pregnancy";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("pregnancy_number"))
            .column(Column::date("date_of_lmp"))
            .column(Column::integer("gravidity"))
            .column(Column::integer("parity1"))
            .column(Column::integer("parity2"))
            .column(Column::text("outcome"))
            .column(Column::integer("birth_weight"))
            .column(Column::integer("centile_weight"))
            .column(Column::integer("gestational_age"))
            .column(Column::text("delivery_method"))
            .column(Column::boolean("neonatal_intensive_care"))
            .column(Column::text("pre_eclampsia"))
            .foreign_key("patient_id", "patient", "id")
    }
}
