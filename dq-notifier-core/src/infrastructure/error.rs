// dq-notifier-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- AWS SERVICES ---
    #[error("Data quality result lookup failed for '{result_id}': {source}")]
    #[diagnostic(
        code(dq_notifier::infra::glue),
        help("Check that the result exists and that the role allows glue:GetDataQualityResult.")
    )]
    QualityLookup {
        result_id: String,
        #[source]
        source: BoxError,
    },

    #[error("Publishing to topic '{topic}' failed: {source}")]
    #[diagnostic(
        code(dq_notifier::infra::sns),
        help("Check the topic ARN and that the role allows sns:Publish.")
    )]
    Publish {
        topic: String,
        #[source]
        source: BoxError,
    },

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dq_notifier::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / SERIALIZATION ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dq_notifier::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(dq_notifier::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(dq_notifier::infra::config),
        help("Set ENVIRONMENT and SNS_TOPIC_ARN, or pass --environment / --topic-arn.")
    )]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(dq_notifier::infra::config_missing))]
    ConfigNotFound(String),
}
