// dq-notifier/src/commands/mod.rs

pub mod invoke;
pub mod serve;

use anyhow::Context;
use dq_notifier_core::NotifierConfig;
use dq_notifier_core::infrastructure::config::{ConfigOverrides, load_config};

use crate::cli::ConfigArgs;

/// File, then ENVIRONMENT / SNS_TOPIC_ARN, then command-line flags.
pub fn resolve_config(args: ConfigArgs) -> anyhow::Result<NotifierConfig> {
    let cli = ConfigOverrides {
        environment: args.environment,
        topic_arn: args.topic_arn,
    };
    load_config(args.config.as_deref(), cli).context("Failed to resolve notifier configuration")
}
