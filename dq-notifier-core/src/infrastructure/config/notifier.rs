// dq-notifier-core/src/infrastructure/config/notifier.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Settings the formatter is constructed with.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct NotifierConfig {
    /// Deployment label shown upper-cased in the subject (e.g. `prod` -> `[PROD]`).
    #[validate(length(min = 1, message = "environment cannot be empty"))]
    pub environment: String,

    /// Destination topic of the notification.
    #[validate(length(min = 1, message = "topic-arn cannot be empty"))]
    pub topic_arn: String,
}

/// Partial settings: every layer may leave a value unset.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub environment: Option<String>,
    pub topic_arn: Option<String>,
}

impl ConfigOverrides {
    /// Values set in `other` win.
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            environment: other.environment.or(self.environment),
            topic_arn: other.topic_arn.or(self.topic_arn),
        }
    }

    /// Reads `ENVIRONMENT` / `SNS_TOPIC_ARN` through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup(ENVIRONMENT_VAR),
            topic_arn: lookup(TOPIC_ARN_VAR),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn into_config(self) -> Result<NotifierConfig, InfrastructureError> {
        let config = NotifierConfig {
            environment: self
                .environment
                .ok_or_else(|| unset("environment", ENVIRONMENT_VAR))?,
            topic_arn: self
                .topic_arn
                .ok_or_else(|| unset("topic-arn", TOPIC_ARN_VAR))?,
        };

        config
            .validate()
            .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

fn unset(key: &str, var: &str) -> InfrastructureError {
    InfrastructureError::ConfigError(format!("'{}' is not set (env {})", key, var))
}

pub fn load_config_file(path: &Path) -> Result<ConfigOverrides, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

// --- LOADER ---

/// Resolves the configuration: file, then environment, then explicit `cli` values.
#[instrument(skip(cli))]
pub fn load_config(
    file: Option<&Path>,
    cli: ConfigOverrides,
) -> Result<NotifierConfig, InfrastructureError> {
    load_config_with(file, ConfigOverrides::from_env(), cli)
}

pub fn load_config_with(
    file: Option<&Path>,
    env: ConfigOverrides,
    cli: ConfigOverrides,
) -> Result<NotifierConfig, InfrastructureError> {
    let base = match file {
        Some(path) => {
            info!(path = ?path, "Loading notifier configuration file");
            load_config_file(path)?
        }
        None => ConfigOverrides::default(),
    };

    let config = base.merge(env).merge(cli).into_config()?;
    info!(
        environment = %config.environment,
        topic = %config.topic_arn,
        "Notifier configuration resolved"
    );
    Ok(config)
}
