//! The rare-disease registry data model.
//!
//! Every table the registry declares lives here as an explicit
//! [`radar_model::TableDef`] built in ordinary code: one unit struct per
//! table carrying its `TABLE_NAME` constant and a `table()` constructor.
//! [`build_catalog`] assembles the lot into an immutable
//! [`radar_model::SchemaCatalog`].

pub mod assessments;
pub mod cohorts;
pub mod consent;
pub mod diagnoses;
pub mod enums;
pub mod imaging;
pub mod lookups;
pub mod nurture;
pub mod observations;
pub mod people;
pub mod pregnancy;
pub mod questionnaires;
pub mod rituximab;
pub mod samples;
pub mod treatment;

pub use enums::expected_enums;

use radar_model::{Result, SchemaCatalog, TableDef};

/// Every table definition in the model, in registration order (reference
/// data first, so foreign-key targets precede the tables that point at
/// them).
pub fn all_tables() -> Vec<TableDef> {
    vec![
        // Reference and lookup tables
        lookups::Code::table(),
        lookups::Country::table(),
        lookups::CountryEthnicity::table(),
        lookups::CountryNationality::table(),
        lookups::DataSource::table(),
        lookups::Diagnosis::table(),
        lookups::Drug::table(),
        lookups::DrugGroup::table(),
        lookups::Ethnicity::table(),
        lookups::FrontPageStat::table(),
        lookups::Identifier::table(),
        lookups::Indicator::table(),
        lookups::Nationality::table(),
        lookups::OptionItem::table(),
        lookups::Post::table(),
        lookups::Relation::table(),
        lookups::SampleType::table(),
        lookups::Specialty::table(),
        // Patients, hospitals, consultants
        people::Patient::table(),
        people::PatientDemographic::table(),
        people::PatientAddress::table(),
        people::PatientAlias::table(),
        people::PatientIdentifier::table(),
        people::PatientNationality::table(),
        people::Consultant::table(),
        people::Hospital::table(),
        people::HospitalConsultant::table(),
        people::HospitalPatient::table(),
        people::PatientConsultant::table(),
        // Consent
        consent::Consent::table(),
        consent::PatientConsent::table(),
        consent::PatientReconsent::table(),
        // Cohorts
        cohorts::Cohort::table(),
        cohorts::CohortPatient::table(),
        cohorts::CohortDiagnosis::table(),
        cohorts::CohortObservation::table(),
        // Diagnoses and family history
        diagnoses::DiagnosisCode::table(),
        diagnoses::PatientDiagnosis::table(),
        diagnoses::FamilyHistory::table(),
        diagnoses::FamilyHistoryRelation::table(),
        diagnoses::FamilyHistoryRelationPatient::table(),
        diagnoses::ParentalConsanguinity::table(),
        diagnoses::Genetics::table(),
        diagnoses::Death::table(),
        // Observations and results
        observations::Observation::table(),
        observations::ObservationCode::table(),
        observations::ObservationOption::table(),
        observations::ObservationResult::table(),
        // Samples
        samples::Biomarker::table(),
        samples::BiomarkerBarcode::table(),
        samples::BiomarkerSample::table(),
        samples::BiomarkerResult::table(),
        samples::SampleInventory::table(),
        samples::TubeSample::table(),
        // Treatment
        treatment::Medication::table(),
        treatment::Dialysis::table(),
        treatment::Plasmapheresis::table(),
        treatment::Transplant::table(),
        treatment::TransplantBiopsy::table(),
        treatment::TransplantRejection::table(),
        treatment::LiverTransplant::table(),
        treatment::LiverTransplantIndicator::table(),
        treatment::Nephrectomy::table(),
        treatment::SurgicalProcedure::table(),
        treatment::Nutrition::table(),
        treatment::Hospitalisation::table(),
        // Imaging and pathology
        imaging::RenalImaging::table(),
        imaging::LiverImaging::table(),
        imaging::LiverDisease::table(),
        imaging::Pathology::table(),
        imaging::RenalProgression::table(),
        imaging::FetalAnomalyScan::table(),
        imaging::FetalUltrasound::table(),
        // Pregnancy
        pregnancy::Pregnancy::table(),
        // Questionnaires
        questionnaires::AdultEq5d5l::table(),
        questionnaires::Eq5dY::table(),
        questionnaires::Anthropometric::table(),
        questionnaires::ClinicalLetters::table(),
        questionnaires::EthnicOrigin::table(),
        questionnaires::Hads::table(),
        questionnaires::Ipos::table(),
        questionnaires::PaedsChu9d::table(),
        questionnaires::Pam::table(),
        questionnaires::SixCit::table(),
        questionnaires::SocioEconomic::table(),
        // NURTuRE study
        nurture::NurtureFamilyHistory::table(),
        nurture::NurtureMetadata::table(),
        nurture::NurtureVisit::table(),
        // Rituximab study
        rituximab::RituximabBaselineAssessment::table(),
        rituximab::RituximabBaselineAssessmentOption::table(),
        rituximab::RituximabBaselinePreviousTreatment::table(),
        rituximab::RituximabCriteria::table(),
        rituximab::RituximabFollowUpAssessment::table(),
        rituximab::RituximabFollowUpAssessmentOption::table(),
        rituximab::RituximabToxicity::table(),
        rituximab::RituximabToxicityOption::table(),
        // Condition-specific assessments
        assessments::AdverseEvent::table(),
        assessments::AlportAssessment::table(),
        assessments::CalciphylaxisAssessment::table(),
        assessments::CalciphylaxisAssessmentOption::table(),
        assessments::CancerTumour::table(),
        assessments::CkdAfricaGenetic::table(),
        assessments::CkdAfricaRiskFactor::table(),
        assessments::CystinosisAdultVisit::table(),
        assessments::CystinosisPaedVisit::table(),
        assessments::CystinosisPaedVisitOption::table(),
        assessments::DentAndLoweAssessment::table(),
        assessments::DentAndLoweAssessmentOption::table(),
        assessments::DiabeticComplication::table(),
        assessments::FuanAssessment::table(),
        assessments::Hnf1bAssessment::table(),
        assessments::HspAssessment::table(),
        assessments::IgaResearch::table(),
        assessments::IgaResearchOptions::table(),
        assessments::InsAssessment::table(),
        assessments::InsRelapse::table(),
        assessments::MpgnAssessment::table(),
        assessments::RenalCancerGenetics::table(),
        assessments::RenalCancerGeneticsOption::table(),
        assessments::RenalCancerTumour::table(),
        assessments::SaltWastingClinicalFeature::table(),
    ]
}

/// Build the full registry catalog: enum types first, then every table.
///
/// Fails if any two declarations collide on a name, if a column references
/// an unregistered enum type, or if any identifier is malformed.
pub fn build_catalog() -> Result<SchemaCatalog> {
    let mut builder = SchemaCatalog::builder();
    for enum_type in expected_enums() {
        builder = builder.register_enum(enum_type);
    }
    for table in all_tables() {
        builder = builder.register_table(table);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds() {
        let catalog = build_catalog().expect("registry catalog builds");
        assert_eq!(catalog.table_count(), 121);
        assert_eq!(catalog.enum_type_count(), 2);
    }

    #[test]
    fn every_foreign_key_resolves() {
        let catalog = build_catalog().expect("registry catalog builds");
        for table in catalog.tables() {
            for foreign_key in &table.foreign_keys {
                let target = catalog.table(&foreign_key.references_table).unwrap_or_else(|| {
                    panic!(
                        "{}.{} references missing table '{}'",
                        table.name, foreign_key.column, foreign_key.references_table
                    )
                });
                assert!(
                    target.column_by_name(&foreign_key.references_column).is_some(),
                    "{}.{} references missing column '{}.{}'",
                    table.name,
                    foreign_key.column,
                    foreign_key.references_table,
                    foreign_key.references_column
                );
                assert!(
                    table.column_by_name(&foreign_key.column).is_some(),
                    "{} declares a foreign key on missing column '{}'",
                    table.name,
                    foreign_key.column
                );
            }
        }
    }
}
