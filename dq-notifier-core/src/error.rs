// dq-notifier-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

/// Fixed message every failed invocation is reported with.
pub const PROCESSING_FAILURE: &str =
    "ERROR - ran into error while parsing ruleset or publishing to SNS";

#[derive(Error, Debug)]
pub enum NotifierError {
    // --- ERREURS DU DOMAINE (Event shape, timestamps) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (Glue, SNS, IO, Config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for NotifierError {
    fn from(err: std::io::Error) -> Self {
        NotifierError::Infrastructure(InfrastructureError::Io(err))
    }
}

/// The only error an invocation surfaces: a fixed message plus the original cause.
#[derive(Error, Debug)]
#[error("{}: {}", PROCESSING_FAILURE, .source)]
pub struct ProcessingError {
    #[source]
    source: NotifierError,
}

impl ProcessingError {
    pub fn new(source: NotifierError) -> Self {
        Self { source }
    }

    pub fn cause(&self) -> &NotifierError {
        &self.source
    }
}

impl From<NotifierError> for ProcessingError {
    fn from(source: NotifierError) -> Self {
        Self::new(source)
    }
}
