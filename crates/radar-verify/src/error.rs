use thiserror::Error;

/// Fatal verification failures.
///
/// Missing tables and enum mismatches are not errors; they are data in the
/// [`crate::VerifyReport`]. Only conditions that make the rest of the run
/// meaningless land here.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The model source is not parseable; nothing can be extracted.
    #[error("failed to parse model source: {message}")]
    Parse { message: String },

    /// The catalog itself failed to build (name collision, dangling enum
    /// reference), so there is no DDL to check against.
    #[error(transparent)]
    Schema(#[from] radar_model::SchemaError),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
