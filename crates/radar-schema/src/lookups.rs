//! Reference and lookup tables: coding systems, geography, drugs,
//! diagnoses, and the generic option/identifier/indicator lists that
//! clinical tables point into.

use radar_model::{Column, TableDef};

/// A clinical code drawn from an external coding system (ICD, SNOMED CT,
/// ERA-EDTA PRD). `(coding_system, code)` pairs are unique.
pub struct Code;

impl Code {
    pub const TABLE_NAME: &'static str = "code";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("coding_system"))
            .column(Column::text("code_describes"))
            .column(Column::text("code"))
            .column(Column::text("code_label"))
            .unique(&["coding_system", "code"])
    }
}

pub struct Country;

impl Country {
    pub const TABLE_NAME: &'static str = "country";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("country_name"))
            .column(Column::text("country_code"))
    }
}

pub struct CountryEthnicity;

impl CountryEthnicity {
    pub const TABLE_NAME: &'static str = "country_ethnicity";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("ethnicity_id"))
            .column(Column::big_int("country_id"))
            .foreign_key("ethnicity_id", "ethnicity", "id")
            .foreign_key("country_id", "country", "id")
    }
}

pub struct CountryNationality;

impl CountryNationality {
    pub const TABLE_NAME: &'static str = "country_nationality";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("nationality_id"))
            .column(Column::big_int("country_id"))
            .foreign_key("nationality_id", "nationality", "id")
            .foreign_key("country_id", "country", "id")
    }
}

/// Where a row of clinical data came from (feed, manual entry, migration).
pub struct DataSource;

impl DataSource {
    pub const TABLE_NAME: &'static str = "data_source";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("data_source_name"))
    }
}

pub struct Diagnosis;

impl Diagnosis {
    pub const TABLE_NAME: &'static str = "diagnosis";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("diagnosis_name"))
    }
}

pub struct Drug;

impl Drug {
    pub const TABLE_NAME: &'static str = "drug";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("drug_name"))
            .column(Column::big_int("drug_group_id").nullable())
            .foreign_key("drug_group_id", "drug_group", "id")
    }
}

/// Drug classification; groups nest via `parent_drug_group_id`.
pub struct DrugGroup;

impl DrugGroup {
    pub const TABLE_NAME: &'static str = "drug_group";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("drug_group").nullable().unique())
            .column(Column::big_int("parent_drug_group_id").nullable())
            .foreign_key("parent_drug_group_id", "drug_group", "id")
    }
}

pub struct Ethnicity;

impl Ethnicity {
    pub const TABLE_NAME: &'static str = "ethnicity";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("ethnicity_code"))
            .column(Column::text("ethnicity_label"))
    }
}

/// Pre-computed counts shown on the registry landing page.
pub struct FrontPageStat;

impl FrontPageStat {
    pub const TABLE_NAME: &'static str = "front_page_stats";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("label"))
            .column(Column::text("stat"))
    }
}

pub struct Identifier;

impl Identifier {
    pub const TABLE_NAME: &'static str = "identifier";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("identifier_label"))
    }
}

pub struct Indicator;

impl Indicator {
    pub const TABLE_NAME: &'static str = "indicator";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("indicator_label"))
    }
}

pub struct Nationality;

impl Nationality {
    pub const TABLE_NAME: &'static str = "nationality";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("nationality_label"))
    }
}

/// A selectable option in a named option group. Assessment tables link to
/// these through their `*_option` join tables.
pub struct OptionItem;

impl OptionItem {
    pub const TABLE_NAME: &'static str = "option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("option_group"))
            .column(Column::text("display_label"))
            .column(Column::text("store_value"))
    }
}

/// Registry news post shown to users.
pub struct Post;

impl Post {
    pub const TABLE_NAME: &'static str = "post";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("post_title"))
            .column(Column::timestamp("published_date"))
            .column(Column::text("body"))
    }
}

pub struct Relation;

impl Relation {
    pub const TABLE_NAME: &'static str = "relation";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("relationship"))
    }
}

pub struct SampleType;

impl SampleType {
    pub const TABLE_NAME: &'static str = "sample_type";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("sample_type_label").unique())
    }
}

pub struct Specialty;

impl Specialty {
    pub const TABLE_NAME: &'static str = "specialty";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::text("specialty").unique())
    }
}
