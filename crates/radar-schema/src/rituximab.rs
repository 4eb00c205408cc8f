//! Rituximab treatment study: baseline, eligibility criteria, follow-up,
//! and toxicity tracking.

use radar_model::{Column, TableDef};

pub struct RituximabBaselineAssessment;

impl RituximabBaselineAssessment {
    pub const TABLE_NAME: &'static str = "rituximab_baseline_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("nephropathy"))
            .column(Column::boolean("steroids"))
            .column(Column::text("other_previous_treatment"))
            .column(Column::boolean("past_remission"))
            .column(Column::integer("performance_status"))
            .column(Column::boolean("comorbidities"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

pub struct RituximabBaselineAssessmentOption;

impl RituximabBaselineAssessmentOption {
    pub const TABLE_NAME: &'static str = "rituximab_baseline_assessment_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("rituximab_baseline_assessment_id"))
            .column(Column::big_int("option_id"))
            .foreign_key(
                "rituximab_baseline_assessment_id",
                "rituximab_baseline_assessment",
                "id",
            )
            .foreign_key("option_id", "option", "id")
    }
}

pub struct RituximabBaselinePreviousTreatment;

impl RituximabBaselinePreviousTreatment {
    pub const TABLE_NAME: &'static str = "rituximab_baseline_previous_treatment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::big_int("hospital_id"))
            .column(Column::big_int("data_source_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("nephropathy"))
            .column(Column::boolean("steroids"))
            .column(Column::text("other_previous_treatment"))
            .column(Column::boolean("past_remission"))
            .column(Column::integer("performance_status"))
            .column(Column::boolean("comorbidities"))
            .foreign_key("patient_id", "patient", "id")
            .foreign_key("hospital_id", "hospital", "id")
            .foreign_key("data_source_id", "data_source", "id")
    }
}

/// Eligibility criteria checklist for rituximab treatment.
pub struct RituximabCriteria;

impl RituximabCriteria {
    pub const TABLE_NAME: &'static str = "rituximab_criteria";

    pub fn table() -> TableDef {
        let mut table = TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"));
        for index in 1..=7 {
            table = table.column(Column::boolean(format!("criteria{index}")));
        }
        table
            .column(Column::boolean("alkylating_complication"))
            .column(Column::boolean("alkylating_failure_monitoring_requirements"))
            .column(Column::boolean("cancer"))
            .column(Column::boolean("cni_failure_monitoring_requirements"))
            .column(Column::boolean("cni_therapy_complication"))
            .column(Column::boolean("diabetes"))
            .column(Column::boolean("drug_associated_toxicity"))
            .column(Column::boolean("fall_in_egfr"))
            .column(Column::boolean("hypersensitivity"))
            .column(Column::boolean("risk_factors"))
            .column(Column::boolean("ongoing_severe_disease"))
            .column(Column::boolean("threatened_fertility"))
            .column(Column::boolean("mood_disturbance"))
            .column(Column::boolean("osteoporosis_osteopenia"))
            .column(Column::boolean("previous_hospitalization"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct RituximabFollowUpAssessment;

impl RituximabFollowUpAssessment {
    pub const TABLE_NAME: &'static str = "rituximab_follow_up_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("visit_date"))
            .column(Column::text("visit"))
            .column(Column::text("performance"))
            .column(Column::text("transplant"))
            .column(Column::text("haemodialysis"))
            .column(Column::text("peritoneal_dialysis"))
            .column(Column::text("immunosuppression"))
            .column(Column::date("ciclosporin_administered"))
            .column(Column::date("tacrolimus_administered"))
            .column(Column::date("cyclophosphamide_administered"))
            .column(Column::date("chlorambucil_administered"))
            .column(Column::date("prednisolone_administered"))
            .column(Column::date("rituximab_administered"))
            .column(Column::text("immunosuppression_comments"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct RituximabFollowUpAssessmentOption;

impl RituximabFollowUpAssessmentOption {
    pub const TABLE_NAME: &'static str = "rituximab_follow_up_assessment_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("rituximab_follow_up_assessment_id"))
            .column(Column::big_int("option_id"))
            .foreign_key(
                "rituximab_follow_up_assessment_id",
                "rituximab_follow_up_assessment",
                "id",
            )
            .foreign_key("option_id", "option", "id")
    }
}

pub struct RituximabToxicity;

impl RituximabToxicity {
    pub const TABLE_NAME: &'static str = "rituximab_toxicity";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("drug_name"))
            .column(Column::text("other_drug"))
            .column(Column::double("dose").nullable())
            .column(Column::text("retreatment"))
            .column(Column::text("toxicity").nullable())
            .column(Column::text("other_toxicity").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct RituximabToxicityOption;

impl RituximabToxicityOption {
    pub const TABLE_NAME: &'static str = "rituximab_toxicity_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("rituximab_toxicity_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("rituximab_toxicity_id", "rituximab_toxicity", "id")
            .foreign_key("option_id", "option", "id")
    }
}
