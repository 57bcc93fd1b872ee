// dq-notifier-core/src/application/formatter.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::event::IncomingEvent;
use crate::domain::report::NotificationDraft;
use crate::error::{NotifierError, ProcessingError};
use crate::infrastructure::config::NotifierConfig;
use crate::ports::publisher::NotificationPublisher;
use crate::ports::quality_source::QualityResultSource;

const PUBLISHED_BODY: &str = "Message published to SNS topic";

/// What the Lambda runtime receives back on success.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    /// JSON-encoded confirmation string.
    pub body: String,
}

impl InvocationResponse {
    pub fn published() -> Result<Self, NotifierError> {
        let body = serde_json::to_string(PUBLISHED_BODY)
            .map_err(|e| NotifierError::InternalError(e.to_string()))?;
        Ok(Self {
            status_code: 200,
            body,
        })
    }
}

/// Turns a "ruleset run completed" event into one published notification.
pub struct NotificationFormatter {
    config: NotifierConfig,
    results: Box<dyn QualityResultSource>,
    publisher: Box<dyn NotificationPublisher>,
}

impl NotificationFormatter {
    pub fn new(
        config: NotifierConfig,
        results: Box<dyn QualityResultSource>,
        publisher: Box<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            config,
            results,
            publisher,
        }
    }

    /// Processes one event. Every failure comes back as a single [`ProcessingError`]
    /// and nothing is published unless all previous steps succeeded.
    #[instrument(skip_all, fields(environment = %self.config.environment))]
    pub async fn handle(&self, payload: &Value) -> Result<InvocationResponse, ProcessingError> {
        let start = Instant::now();

        match self.process(payload).await {
            Ok(response) => {
                debug!("Invocation finished in {:.2?}", start.elapsed());
                Ok(response)
            }
            Err(e) => {
                error!("Invocation failed after {:.2?}: {}", start.elapsed(), e);
                Err(ProcessingError::new(e))
            }
        }
    }

    async fn process(&self, payload: &Value) -> Result<InvocationResponse, NotifierError> {
        // 1. Event shape + header
        let event = IncomingEvent::from_value(payload)?;
        let detail = &event.detail;
        let draft = NotificationDraft::begin(detail, &self.config.environment)?;
        if !detail.is_data_catalog() {
            warn!(
                context_type = %detail.context.context_type,
                "Event is not from a Data Catalog run: no header, empty subject"
            );
        }

        // 2. Quality details
        info!(event_id = ?event.id, result_id = %detail.result_id, "Fetching data quality result");
        let result = self.results.fetch_result(&detail.result_id).await?;

        // 3. Report
        let message = draft.complete(&result);
        debug!(rules = message.rules.len(), subject = %message.subject, "Notification formatted");

        // 4. Publish (single call, whole message)
        let receipt = self
            .publisher
            .publish(&self.config.topic_arn, &message)
            .await?;
        info!(message_id = ?receipt.message_id, topic = %self.config.topic_arn, "Notification published");

        InvocationResponse::published()
    }
}
