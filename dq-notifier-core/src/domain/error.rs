// dq-notifier-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Malformed data quality event: {0}")]
    #[diagnostic(
        code(dq_notifier::domain::event),
        help("The event must carry a 'detail' object with 'context.contextType' and 'resultId'.")
    )]
    MalformedEvent(#[from] serde_json::Error),

    #[error("Missing field '{0}'")]
    #[diagnostic(code(dq_notifier::domain::missing_field))]
    MissingField(String),

    #[error("Invalid timestamp: {0}")]
    #[diagnostic(
        code(dq_notifier::domain::timestamp),
        help("Use RFC 3339 (2024-01-01T00:00:00Z), a naive ISO-8601 UTC value or epoch seconds.")
    )]
    InvalidTimestamp(String),
}
