// dq-notifier/src/commands/serve.rs
//
// USE CASE: Run as the Lambda function handler.

use std::sync::Arc;

use dq_notifier_core::infrastructure::adapters::{GlueResultSource, SnsPublisher, load_aws_config};
use dq_notifier_core::{InvocationResponse, NotificationFormatter};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

use super::resolve_config;
use crate::cli::ConfigArgs;

pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;

    let aws = load_aws_config().await;
    let formatter = Arc::new(NotificationFormatter::new(
        config,
        Box::new(GlueResultSource::new(&aws)),
        Box::new(SnsPublisher::new(&aws)),
    ));
    info!("Lambda runtime starting");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let formatter = Arc::clone(&formatter);
        async move { handle_event(&formatter, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime stopped: {}", e))
}

async fn handle_event(
    formatter: &NotificationFormatter,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Data quality event received");

    // ProcessingError goes back to the runtime as the invocation error
    Ok(formatter.handle(&payload).await?)
}
