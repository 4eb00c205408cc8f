//! Patients, their demographics and identifiers, and the hospitals and
//! consultants who look after them.

use radar_model::{Column, TableDef};

/// The core patient record. Deliberately thin: everything identifying or
/// clinical hangs off it through the other tables, so a patient row can
/// exist before any demographics are captured.
pub struct Patient;

impl Patient {
    pub const TABLE_NAME: &'static str = "patient";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("patient_comment").nullable())
            .column(Column::boolean("is_test").default_expr("false"))
            .column(Column::boolean("is_control").default_expr("false"))
    }
}

/// Demographics as reported by a data source; a patient may have one row
/// per source, reconciled downstream.
pub struct PatientDemographic;

impl PatientDemographic {
    pub const TABLE_NAME: &'static str = "patient_demographic";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("ethnicity_id"))
            .column(Column::big_int("country_of_birth"))
            .column(Column::text("first_name"))
            .column(Column::text("last_name"))
            .column(Column::date("date_of_birth"))
            .column(Column::integer("gender"))
            .column(Column::text("mobile_number"))
            .column(Column::text("email_address"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("ethnicity_id", "ethnicity", "id")
            .foreign_key("country_of_birth", "country", "id")
    }
}

pub struct PatientAddress;

impl PatientAddress {
    pub const TABLE_NAME: &'static str = "patient_address";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("country_id"))
            .column(Column::date("from_date"))
            .column(Column::date("to_date"))
            .column(Column::text("address1"))
            .column(Column::text("address2"))
            .column(Column::text("address3"))
            .column(Column::text("address4"))
            .column(Column::text("postcode"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("country_id", "country", "id")
    }
}

pub struct PatientAlias;

impl PatientAlias {
    pub const TABLE_NAME: &'static str = "patient_alias";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::text("first_name"))
            .column(Column::text("last_name"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

/// An external identifier (NHS number, CHI number, local hospital number)
/// held for a patient by a given source.
pub struct PatientIdentifier;

impl PatientIdentifier {
    pub const TABLE_NAME: &'static str = "patient_identifier";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::big_int("identifier_id"))
            .column(Column::text("identifier"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("data_source_id", "data_source", "id")
            .foreign_key("identifier_id", "identifier", "id")
    }
}

pub struct PatientNationality;

impl PatientNationality {
    pub const TABLE_NAME: &'static str = "patient_nationality";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("nationality_id"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("nationality_id", "nationality", "id")
    }
}

pub struct Consultant;

impl Consultant {
    pub const TABLE_NAME: &'static str = "consultant";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("specialty_id"))
            .column(Column::text("first_name"))
            .column(Column::text("last_name"))
            .column(Column::text("email").nullable())
            .column(Column::text("telephone_number").nullable())
            .column(Column::integer("gmc_number").nullable())
            .foreign_key("specialty_id", "specialty", "id")
    }
}

pub struct Hospital;

impl Hospital {
    pub const TABLE_NAME: &'static str = "hospital";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("hospital_code"))
            .column(Column::text("hospital_name"))
            .column(Column::text("hospital_short_name"))
            .column(Column::boolean("is_transplant_centre").default_expr("false"))
    }
}

pub struct HospitalConsultant;

impl HospitalConsultant {
    pub const TABLE_NAME: &'static str = "hospital_consultant";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("consultant_id"))
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("consultant_id", "consultant", "id")
    }
}

/// A patient's episode of care at a hospital, bounded by first-seen and
/// discharge dates.
pub struct HospitalPatient;

impl HospitalPatient {
    pub const TABLE_NAME: &'static str = "hospital_patient";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("patient_id"))
            .column(Column::date("first_seen_date"))
            .column(Column::date("discharged_date").nullable())
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct PatientConsultant;

impl PatientConsultant {
    pub const TABLE_NAME: &'static str = "patient_consultant";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("consultant_id"))
            .column(Column::date("from_date"))
            .column(Column::date("to_date").nullable())
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("consultant_id", "consultant", "id")
    }
}
