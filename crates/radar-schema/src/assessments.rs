//! Condition-specific clinical assessments. Most cohorts carry their own
//! assessment table; multi-select answers live in the sibling `*_option`
//! join tables.

use radar_model::{Column, TableDef};

/// Adverse event review, including the event dates and causality flags.
pub struct AdverseEvent;

impl AdverseEvent {
    pub const TABLE_NAME: &'static str = "adverse_event";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("review_date"))
            .column(Column::boolean("hospitalisation"))
            .column(Column::boolean("adverse_event"))
            .column(Column::date("new_onset_cancer"))
            .column(Column::boolean("cancer_cause"))
            .column(Column::date("thromboembolism"))
            .column(Column::integer("caused_venous_thrombo_embolism"))
            .column(Column::date("myocardial_infarction"))
            .column(Column::integer("caused_acute_myocardial_infarction"))
            .column(Column::date("stroke"))
            .column(Column::integer("caused_stroke"))
            .column(Column::date("ischaemic_attack"))
            .column(Column::integer("caused_ischaemic_attack"))
            .column(Column::date("other_adverse_event"))
            .column(Column::text("other_toxicity"))
            .column(Column::integer("caused_other"))
            .column(Column::date("date_of_death"))
            .column(Column::text("cause_of_death"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct AlportAssessment;

impl AlportAssessment {
    pub const TABLE_NAME: &'static str = "alport_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_picture"))
            .column(Column::integer("deafness_index"))
            .column(Column::date("deafness_date").nullable())
            .column(Column::date("hearing_aid_date").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct CalciphylaxisAssessment;

impl CalciphylaxisAssessment {
    pub const TABLE_NAME: &'static str = "calciphylaxis_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::boolean("lesion"))
            .column(Column::text("lesion_location"))
            .column(Column::boolean("infection"))
            .column(Column::text("infection_location"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct CalciphylaxisAssessmentOption;

impl CalciphylaxisAssessmentOption {
    pub const TABLE_NAME: &'static str = "calciphylaxis_assessment_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("calciphylaxis_assessment_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("calciphylaxis_assessment_id", "calciphylaxis_assessment", "id")
            .foreign_key("option_id", "option", "id")
    }
}

/// Tumour record with TNM staging categories.
pub struct CancerTumour;

impl CancerTumour {
    pub const TABLE_NAME: &'static str = "cancer_tumour";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::text("tumour_type"))
            .column(Column::text("other_tumour_name"))
            .column(Column::date("diagnosis_date"))
            .column(Column::integer("tumour_count"))
            .column(Column::text("cns_image"))
            .column(Column::date("progression_date"))
            .column(Column::text("t_cat"))
            .column(Column::text("n_cat"))
            .column(Column::text("m_cat"))
            .column(Column::text("radiologic_tumor_size"))
            .column(Column::text("pathologic_tumor_size"))
            .column(Column::text("tumor_location"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct CkdAfricaGenetic;

impl CkdAfricaGenetic {
    pub const TABLE_NAME: &'static str = "ckd_africa_genetic";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("sickle_cell"))
            .column(Column::text("other_sickle_cell"))
            .column(Column::text("apol_1"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct CkdAfricaRiskFactor;

impl CkdAfricaRiskFactor {
    pub const TABLE_NAME: &'static str = "ckd_africa_risk_factor";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("preterm_birth"))
            .column(Column::text("low_birth_weight"))
            .column(Column::text("malnutrition"))
            .column(Column::text("hospital_malnutrition"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Cystinosis clinic visit, adult protocol. The long tail of columns
/// follows the case report form section by section.
pub struct CystinosisAdultVisit;

impl CystinosisAdultVisit {
    pub const TABLE_NAME: &'static str = "cystinosis_adult_visit";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("visit"))
            .column(Column::date("visit_date"))
            .column(Column::text("urine_measurement"))
            .column(Column::double("urine_output"))
            .column(Column::text("voiding_overnight"))
            .column(Column::text("continent_day"))
            .column(Column::double("fluid_intake"))
            .column(Column::integer("admission_dehydration"))
            .column(Column::text("constipation"))
            .column(Column::text("diarrhea"))
            .column(Column::text("nausea"))
            .column(Column::text("vomiting"))
            .column(Column::text("rickets"))
            .column(Column::text("kyphoscoliosis"))
            .column(Column::text("fractures"))
            .column(Column::text("muscle_strength"))
            .column(Column::double("ankle_strength"))
            .column(Column::double("elbow_strength"))
            .column(Column::double("hand_strength"))
            .column(Column::double("hip_strength"))
            .column(Column::double("knee_strength"))
            .column(Column::double("shoulder_strength"))
            .column(Column::double("wrist_strength"))
            .column(Column::text("swallowing_difficulties"))
            .column(Column::text("swallowing_difficulties_detail"))
            .column(Column::text("joint_surgery"))
            .column(Column::text("visual_impairment"))
            .column(Column::text("photophobia"))
            .column(Column::text("photophobia_grade"))
            .column(Column::date("keratoplasty_date"))
            .column(Column::text("acuity"))
            .column(Column::text("gahl_score"))
            .column(Column::text("intraocular_pressure_r"))
            .column(Column::text("intraocular_pressure_l"))
            .column(Column::double("fev1"))
            .column(Column::double("vc"))
            .column(Column::double("snip"))
            .column(Column::text("seizure"))
            .column(Column::text("headache"))
            .column(Column::text("muscle_weakness"))
            .column(Column::text("learning_difficulties"))
            .column(Column::text("cognitive_difficulties"))
            .column(Column::text("cognitive_difficulties_score"))
            .column(Column::text("movement_disorder"))
            .column(Column::text("intracranial_hypertension"))
            .column(Column::text("diabetes"))
            .column(Column::text("thyroid"))
            .column(Column::text("hypothyroidism"))
            .column(Column::text("tanner_stage"))
            .column(Column::double("wc_cystine"))
            .column(Column::date("wc_cystine_date"))
            .column(Column::text("wc_cystine_time"))
            .column(Column::integer("cysteamine_last_dose"))
            .column(Column::text("cysteamine_effects"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Cystinosis clinic visit, paediatric protocol.
pub struct CystinosisPaedVisit;

impl CystinosisPaedVisit {
    pub const TABLE_NAME: &'static str = "cystinosis_paed_visit";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("visit"))
            .column(Column::date("visit_date"))
            .column(Column::double("height"))
            .column(Column::double("weight"))
            .column(Column::text("urine_measurement"))
            .column(Column::double("urine_output"))
            .column(Column::text("voiding_overnight"))
            .column(Column::text("continence_day"))
            .column(Column::double("fluid_intake"))
            .column(Column::integer("admission_dehydration"))
            .column(Column::text("constipation"))
            .column(Column::text("diarrhea"))
            .column(Column::text("nausea"))
            .column(Column::text("vomiting"))
            .column(Column::text("failure_to_thrive"))
            .column(Column::text("enteral_feeding"))
            .column(Column::date("feeding_start_date_1"))
            .column(Column::date("feeding_end_date_1"))
            .column(Column::date("feeding_start_date_2"))
            .column(Column::date("feeding_end_date_2"))
            .column(Column::date("feeding_start_date_3"))
            .column(Column::date("feeding_end_date_3"))
            .column(Column::text("normal_food_orally"))
            .column(Column::text("supplements"))
            .column(Column::text("growth_hormone_treatment"))
            .column(Column::text("rickets"))
            .column(Column::text("kyphoscoliosis"))
            .column(Column::text("fractures"))
            .column(Column::text("joint_surgery"))
            .column(Column::text("muscle_strength"))
            .column(Column::text("swallowing_difficulties"))
            .column(Column::text("nose_snoring"))
            .column(Column::date("tonsillectomy_date"))
            .column(Column::text("sight_impairment"))
            .column(Column::text("severe_sight_impairment"))
            .column(Column::text("photophobia"))
            .column(Column::text("photophobia_grade"))
            .column(Column::date("keratoplasty_date"))
            .column(Column::text("acuity"))
            .column(Column::text("gahl_score"))
            .column(Column::text("intraocular_pressure_r"))
            .column(Column::text("intraocular_pressure_l"))
            .column(Column::double("fev1"))
            .column(Column::double("vc"))
            .column(Column::double("snip"))
            .column(Column::text("seizure"))
            .column(Column::text("headache"))
            .column(Column::text("muscle_weakness"))
            .column(Column::text("learning_difficulties"))
            .column(Column::text("cognitive_difficulties"))
            .column(Column::text("movement_disorder"))
            .column(Column::text("intracranial_hypertension"))
            .column(Column::text("diabetes"))
            .column(Column::text("thyroid"))
            .column(Column::text("hypothyroidism"))
            .column(Column::text("tanner_stage"))
            .column(Column::double("wc_cystine"))
            .column(Column::date("wc_cystine_date"))
            .column(Column::text("wc_cystine_time"))
            .column(Column::integer("cysteamine_last_dose"))
            .column(Column::text("cysteamine_effects"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct CystinosisPaedVisitOption;

impl CystinosisPaedVisitOption {
    pub const TABLE_NAME: &'static str = "cystinosis_paed_visit_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("cystinosis_paeds_visit_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("cystinosis_paeds_visit_id", "cystinosis_paed_visit", "id")
            .foreign_key("option_id", "option", "id")
    }
}

pub struct DentAndLoweAssessment;

impl DentAndLoweAssessment {
    pub const TABLE_NAME: &'static str = "dent_and_lowe_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::text("aetiology"))
            .column(Column::text("causative_agent"))
            .column(Column::text("other_agent"))
            .column(Column::text("extra_involvement"))
            .column(Column::text("other_extra_involvement"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct DentAndLoweAssessmentOption;

impl DentAndLoweAssessmentOption {
    pub const TABLE_NAME: &'static str = "dent_and_lowe_assessment_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("dent_and_lowe_assessment_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("dent_and_lowe_assessment_id", "dent_and_lowe_assessment", "id")
            .foreign_key("option_id", "option", "id")
    }
}

pub struct DiabeticComplication;

impl DiabeticComplication {
    pub const TABLE_NAME: &'static str = "diabetic_complication";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::integer("retinopathy"))
            .column(Column::boolean("laser_treatment"))
            .column(Column::boolean("peripheral_neuropathy"))
            .column(Column::boolean("foot_ulcer"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Familial uromodulin-associated nephropathy clinical picture.
pub struct FuanAssessment;

impl FuanAssessment {
    pub const TABLE_NAME: &'static str = "fuan_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("picture_date"))
            .column(Column::boolean("gout"))
            .column(Column::date("gout_date").nullable())
            .column(Column::boolean("family_gout").nullable())
            .column(Column::text("thp").nullable())
            .column(Column::boolean("uti").nullable())
            .column(Column::text("comments").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct Hnf1bAssessment;

impl Hnf1bAssessment {
    pub const TABLE_NAME: &'static str = "hnf1b_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_picture"))
            .column(Column::boolean("single_kidney"))
            .column(Column::boolean("hyperuricemia_gout"))
            .column(Column::boolean("genital_malformation"))
            .column(Column::text("genital_malformation_details"))
            .column(Column::boolean("familial_cystic_disease"))
            .column(Column::boolean("hypertension"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Henoch-Schönlein purpura assessment with MEST-C biopsy scores.
pub struct HspAssessment;

impl HspAssessment {
    pub const TABLE_NAME: &'static str = "hsp_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .column(Column::boolean("haematuria"))
            .column(Column::boolean("nephrotic"))
            .column(Column::text("m"))
            .column(Column::text("e"))
            .column(Column::text("s"))
            .column(Column::text("t"))
            .column(Column::text("c"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct IgaResearch;

impl IgaResearch {
    pub const TABLE_NAME: &'static str = "iga_research";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct IgaResearchOptions;

impl IgaResearchOptions {
    pub const TABLE_NAME: &'static str = "iga_research_options";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("iga_research_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("iga_research_id", "iga_research", "id")
            .foreign_key("option_id", "option", "id")
    }
}

/// Idiopathic nephrotic syndrome clinical picture.
pub struct InsAssessment;

impl InsAssessment {
    pub const TABLE_NAME: &'static str = "ins_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_picture"))
            .column(Column::boolean("oedema").nullable())
            .column(Column::boolean("hypovoloemia").nullable())
            .column(Column::boolean("fever").nullable())
            .column(Column::boolean("thrombosis").nullable())
            .column(Column::boolean("peritonitis").nullable())
            .column(Column::boolean("pulmonary_oedema").nullable())
            .column(Column::boolean("hypertension").nullable())
            .column(Column::boolean("rash").nullable())
            .column(Column::text("rash_details").nullable())
            .column(Column::boolean("infection").nullable())
            .column(Column::text("infection_details").nullable())
            .column(Column::boolean("ophthalmoscopy").nullable())
            .column(Column::text("ophthalmoscopy_details").nullable())
            .column(Column::text("comments").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

/// A nephrotic syndrome relapse episode, from trigger through remission.
pub struct InsRelapse;

impl InsRelapse {
    pub const TABLE_NAME: &'static str = "ins_relapse";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_relapse"))
            .column(Column::text("kidney_type").nullable())
            .column(Column::text("viral_trigger").nullable())
            .column(Column::text("immunisation_trigger").nullable())
            .column(Column::text("other_trigger").nullable())
            .column(Column::boolean("high_dose_oral_prednisolone").nullable())
            .column(Column::boolean("iv_methyl_prednisolone").nullable())
            .column(Column::date("date_of_remission"))
            .column(Column::text("remission_type").nullable())
            .column(Column::double("peak_acr").nullable())
            .column(Column::double("peak_pcr").nullable())
            .column(Column::double("remission_acr").nullable())
            .column(Column::double("remission_pcr").nullable())
            .column(Column::text("peak_protein_dipstick").nullable())
            .column(Column::text("remission_protein_dipstick").nullable())
            .column(Column::boolean("relapse_sample_taken").nullable())
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct MpgnAssessment;

impl MpgnAssessment {
    pub const TABLE_NAME: &'static str = "mpgn_assessment";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("date_of_picture"))
            .column(Column::boolean("oedema"))
            .column(Column::boolean("hypertension"))
            .column(Column::boolean("urticaria"))
            .column(Column::boolean("partial_lipodystrophy"))
            .column(Column::boolean("infection"))
            .column(Column::text("infection_details"))
            .column(Column::boolean("ophthalmoscopy"))
            .column(Column::text("ophthalmoscopy_details"))
            .column(Column::text("comments"))
            .foreign_key("patient_id", "patient", "id")
    }
}

/// Genes screened in the renal cancer panel, one test/variant/status
/// triplet per gene.
const RENAL_CANCER_GENES: &[&str] = &[
    "bap1", "fh", "flcn", "met", "mitf", "pten", "sdha", "sdhb", "sdhc", "sdhd", "vhl",
];

pub struct RenalCancerGenetics;

impl RenalCancerGenetics {
    pub const TABLE_NAME: &'static str = "renal_cancer_genetics";

    pub fn table() -> TableDef {
        let mut table = TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::date("assessment_date"));
        for gene in RENAL_CANCER_GENES {
            table = table
                .column(Column::boolean(format!("{gene}_test")))
                .column(Column::text(format!("{gene}_variant")))
                .column(Column::text(format!("{gene}_variant_status")));
        }
        table
            .column(Column::boolean("other_test"))
            .column(Column::text("other_test_name"))
            .column(Column::text("other_variant"))
            .column(Column::text("other_variant_status"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct RenalCancerGeneticsOption;

impl RenalCancerGeneticsOption {
    pub const TABLE_NAME: &'static str = "renal_cancer_genetics_option";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("renal_cancer_genetics_id"))
            .column(Column::big_int("option_id"))
            .foreign_key("renal_cancer_genetics_id", "renal_cancer_genetics", "id")
            .foreign_key("option_id", "option", "id")
    }
}

pub struct RenalCancerTumour;

impl RenalCancerTumour {
    pub const TABLE_NAME: &'static str = "renal_cancer_tumour";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::text("tumor_type"))
            .column(Column::date("assessment_date"))
            .column(Column::text("cns_imaging_method"))
            .column(Column::date("progression_date"))
            .column(Column::text("t_cat"))
            .column(Column::text("n_cat"))
            .column(Column::text("m_cat"))
            .column(Column::text("rt_size"))
            .column(Column::text("pt_size"))
            .column(Column::text("t_loc"))
            .foreign_key("patient_id", "patient", "id")
    }
}

pub struct SaltWastingClinicalFeature;

impl SaltWastingClinicalFeature {
    pub const TABLE_NAME: &'static str = "salt_wasting_clinical_feature";

    pub fn table() -> TableDef {
        TableDef::new(Self::TABLE_NAME)
            .column(Column::big_serial("id").primary_key())
            .column(Column::big_int("patient_id"))
            .column(Column::boolean("normal_pregnancy"))
            .column(Column::text("abnormal_pregnancy_text"))
            .column(Column::boolean("neurological_problems"))
            .column(Column::boolean("seizures"))
            .column(Column::boolean("abnormal_gait"))
            .column(Column::boolean("deafness"))
            .column(Column::boolean("other_neurological_problem"))
            .column(Column::text("other_neurological_problem_text"))
            .column(Column::boolean("joint_problems"))
            .column(Column::integer("joint_problems_age"))
            .column(Column::boolean("x_ray_abnormalities"))
            .column(Column::boolean("chondrocalcinosis"))
            .column(Column::boolean("other_x_ray_abnormality"))
            .column(Column::text("other_x_ray_abnormality_text"))
            .foreign_key("patient_id", "patient", "id")
    }
}
