// dq-notifier/src/commands/invoke.rs
//
// USE CASE: Process one event file outside Lambda (debugging, replaying a run).

use std::path::PathBuf;

use anyhow::Context;
use dq_notifier_core::NotificationFormatter;
use dq_notifier_core::infrastructure::adapters::{
    GlueResultSource, JsonFileResultSource, LocalPublisher, RenderFormat, SnsPublisher,
    load_aws_config,
};
use dq_notifier_core::ports::{NotificationPublisher, QualityResultSource};
use serde_json::Value;

use super::resolve_config;
use crate::cli::{ConfigArgs, FormatCli};

pub struct InvokeOptions {
    pub event: PathBuf,
    pub result_file: Option<PathBuf>,
    pub dry_run: bool,
    pub output: Option<PathBuf>,
    pub format: FormatCli,
}

pub async fn execute(options: InvokeOptions, args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;

    let raw = std::fs::read_to_string(&options.event)
        .with_context(|| format!("Failed to read event file {:?}", options.event))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Event file {:?} is not valid JSON", options.event))?;

    // AWS credentials are only resolved when a real service is involved
    let needs_aws = options.result_file.is_none() || !options.dry_run;
    let aws = if needs_aws {
        Some(load_aws_config().await)
    } else {
        None
    };

    let results: Box<dyn QualityResultSource> = match (&options.result_file, &aws) {
        (Some(path), _) => Box::new(JsonFileResultSource::new(path)),
        (None, Some(aws)) => Box::new(GlueResultSource::new(aws)),
        (None, None) => anyhow::bail!("No quality result source available"),
    };

    let render = match options.format {
        FormatCli::Text => RenderFormat::Text,
        FormatCli::Json => RenderFormat::Json,
    };
    let publisher: Box<dyn NotificationPublisher> = match (options.dry_run, &aws) {
        (true, _) => {
            let local = match options.output {
                Some(path) => LocalPublisher::to_file(path),
                None => LocalPublisher::stdout(),
            };
            Box::new(local.with_format(render))
        }
        (false, Some(aws)) => Box::new(SnsPublisher::new(aws)),
        (false, None) => anyhow::bail!("No publisher available"),
    };

    let formatter = NotificationFormatter::new(config, results, publisher);
    // The message already carries the cause
    let response = formatter
        .handle(&payload)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
