//! Patient-reported outcome instruments and generic assessment
//! questionnaires.

use radar_model::{Column, TableDef};

/// EQ-5D-5L health questionnaire, adult version.
pub struct AdultEq5d5l;

impl AdultEq5d5l {
    pub const TABLE_NAME: &'static str = "adult_eq5d5l";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::integer("age"))
            .column(Column::integer("gender"))
            .column(Column::integer("mobility"))
            .column(Column::integer("self_care"))
            .column(Column::integer("usual_activities"))
            .column(Column::integer("pain_discomfort"))
            .column(Column::integer("anxiety_depression"))
            .column(Column::integer("health"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// EQ-5D-Y, the youth version of the instrument.
pub struct Eq5dY;

impl Eq5dY {
    pub const TABLE_NAME: &'static str = "eq_5d_y";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("age"))
            .column(Column::integer("gender"))
            .column(Column::integer("mobility"))
            .column(Column::integer("self_care"))
            .column(Column::integer("usual_activities"))
            .column(Column::integer("pain_discomfort"))
            .column(Column::integer("anxiety_depression"))
            .column(Column::integer("health"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Anthropometric measurements plus a triplet of blood-pressure readings.
pub struct Anthropometric;

impl Anthropometric {
    pub const TABLE_NAME: &'static str = "anthropometric";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::integer("height"))
            .column(Column::double("weight"))
            .column(Column::double("bmi"))
            .column(Column::double("hip"))
            .column(Column::double("waist"))
            .column(Column::double("arm"))
            .column(Column::double("up_and_go"))
            .column(Column::double("grip_dominant"))
            .column(Column::double("grip_non_dominant"))
            .column(Column::integer("karnofsky"))
            .column(Column::integer("systolic_one"))
            .column(Column::integer("diastolic_one"))
            .column(Column::integer("systolic_two"))
            .column(Column::integer("diastolic_two"))
            .column(Column::integer("systolic_three"))
            .column(Column::integer("diastolic_three"))
            .column(Column::integer("systolic_mean"))
            .column(Column::integer("diastolic_mean"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct ClinicalLetters;

impl ClinicalLetters {
    pub const TABLE_NAME: &'static str = "clinical_letters";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("letter_date"))
            .column(Column::text("comments"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct EthnicOrigin;

impl EthnicOrigin {
    pub const TABLE_NAME: &'static str = "ethnic_origin";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("country_of_birth"))
            .column(Column::integer("year_of_emigration"))
            .column(Column::text("ethnic_origin"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Hospital Anxiety and Depression Scale: seven anxiety and seven
/// depression items.
pub struct Hads;

impl Hads {
    pub const TABLE_NAME: &'static str = "hads";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::integer("a1"))
            .column(Column::integer("d1"))
            .column(Column::integer("a2"))
            .column(Column::integer("d2"))
            .column(Column::integer("a3"))
            .column(Column::integer("d3"))
            .column(Column::integer("a4"))
            .column(Column::integer("d4"))
            .column(Column::integer("a5"))
            .column(Column::integer("d5"))
            .column(Column::integer("a6"))
            .column(Column::integer("d6"))
            .column(Column::integer("a7"))
            .column(Column::integer("d7"))
            .column(Column::integer("anxiety_score"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Integrated Palliative care Outcome Scale.
pub struct Ipos;

impl Ipos {
    pub const TABLE_NAME: &'static str = "ipos";

    pub fn table() -> TableDef {
        let mut table = TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"));
        for index in 1..=17 {
            table = table.column(Column::integer(format!("score_{index}")));
        }
        table = table
            .column(Column::text("question_1"))
            .column(Column::integer("score_18"))
            .column(Column::text("question_2"))
            .column(Column::integer("score_19"))
            .column(Column::text("question_3"))
            .column(Column::integer("score_20"))
            .column(Column::text("question_4"))
            .column(Column::text("question_5"))
            .column(Column::integer("score"));
        table.foreign_key("patient_id", "patient", "id")
    }
}

/// Child Health Utility 9D, paediatric quality-of-life instrument.
pub struct PaedsChu9d;

impl PaedsChu9d {
    pub const TABLE_NAME: &'static str = "paeds_chu9d";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::integer("worried"))
            .column(Column::integer("sad"))
            .column(Column::integer("pain"))
            .column(Column::integer("tired"))
            .column(Column::integer("annoyed"))
            .column(Column::integer("school"))
            .column(Column::integer("sleep"))
            .column(Column::integer("routine"))
            .column(Column::integer("activities"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Patient Activation Measure, thirteen items.
pub struct Pam;

impl Pam {
    pub const TABLE_NAME: &'static str = "pam";

    pub fn table() -> TableDef {
        let mut table = TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"));
        for index in 1..=13 {
            table = table.column(Column::integer(format!("q{index}")));
        }
        table.foreign_key("patient_id", "patient", "id")
    }
}

/// Six-item Cognitive Impairment Test.
pub struct SixCit;

impl SixCit {
    pub const TABLE_NAME: &'static str = "six_cit";

    pub fn table() -> TableDef {
        let mut table = TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("completed_date"));
        for index in 1..=7 {
            table = table.column(Column::integer(format!("q{index}")));
        }
        table
            .column(Column::integer("score"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct SocioEconomic;

impl SocioEconomic {
    pub const TABLE_NAME: &'static str = "socioeconomic";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::integer("education"))
            .column(Column::integer("employment_status"))
            .column(Column::text("first_language"))
            .column(Column::text("martial_status"))
            .column(Column::integer("smoking"))
            .column(Column::integer("cigarettes_per_day"))
            .column(Column::boolean("alcohol"))
            .column(Column::integer("beer_pints"))
            .column(Column::integer("cider_pints"))
            .column(Column::integer("red_wine"))
            .column(Column::integer("white_wine"))
            .column(Column::integer("spirits"))
            .column(Column::integer("cocktails"))
            .column(Column::integer("units_per_week"))
            .column(Column::integer("literacy"))
            .column(Column::text("literacy_help"))
            .column(Column::integer("diet"))
            .column(Column::text("other_diet"))
            .foreign_key("patient_id", "patient", "id")
    }
}
