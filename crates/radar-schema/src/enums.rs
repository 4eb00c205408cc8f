//! Enumerated types carried by the registry schema.
//!
//! Member order is part of the wire contract (PostgreSQL sorts enum values
//! by declaration order), so the lists below are ordered exactly as the
//! database declares them.

use radar_model::EnumTypeDef;

/// Kind of consent artefact a patient can sign.
pub fn consent_type() -> EnumTypeDef {
    EnumTypeDef::new("consent_type", &["FORM", "INFORMATION_SHEET"])
}

/// Value domain of an observation definition.
pub fn observation_value_type() -> EnumTypeDef {
    EnumTypeDef::new(
        "observation_value_type",
        &["ENUM", "INTEGER", "REAL", "STRING"],
    )
}

/// The statically known enum list used by the verification harness's
/// secondary check.
pub fn expected_enums() -> Vec<EnumTypeDef> {
    vec![consent_type(), observation_value_type()]
}
