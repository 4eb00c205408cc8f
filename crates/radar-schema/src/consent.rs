//! Consent artefacts and per-patient consent tracking.

use radar_model::{Column, TableDef};

/// A consent artefact patients can sign: versioned form or information
/// sheet, retired when superseded.
pub struct Consent;

impl Consent {
    pub const TABLE_NAME: &'static str = "consent";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("consent_code"))
            .column(Column::text("consent_label").nullable())
            .column(Column::enumerated("consent_type", "consent_type"))
            .column(Column::boolean("is_paediatric").default_expr("false"))
            .column(Column::date("release_date"))
            .column(Column::text("consent_url"))
            .column(Column::boolean("is_retired").default_expr("false"))
    }
}

pub struct PatientConsent;

impl PatientConsent {
    pub const TABLE_NAME: &'static str = "patient_consent";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("consent_id"))
            .column(Column::date("signed_on_date"))
            .column(Column::date("withdrawn_on_date").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("consent_id", "consent", "id")
    }
}

/// Tracks re-consent rounds when a consent artefact is superseded.
pub struct PatientReconsent;

impl PatientReconsent {
    pub const TABLE_NAME: &'static str = "patient_reconsent";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("sent_date"))
            .column(Column::date("response_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}
