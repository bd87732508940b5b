use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Invalid(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Message returned by the auth provider, kept verbatim.
    #[error("{0}")]
    AuthProvider(String),

    #[error("Remote store error")]
    StoreError,

    #[error("Failed to process image")]
    OcrFailed,

    #[error("Failed to analyze")]
    AnalysisFailed,

    #[error("Please add at least one allergy first")]
    NoAllergies,

    #[error("Please select an image to scan")]
    MissingImage,

    #[error("Internal server error")]
    InternalServerError,
}
