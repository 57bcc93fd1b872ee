// dq-notifier-core/src/infrastructure/adapters/sns.rs

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;
use tracing::{info, instrument};

use crate::domain::report::NotificationMessage;
use crate::error::NotifierError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::publisher::{NotificationPublisher, PublishReceipt};

pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationPublisher for SnsPublisher {
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    async fn publish(
        &self,
        topic: &str,
        message: &NotificationMessage,
    ) -> Result<PublishReceipt, NotifierError> {
        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message.body.as_str())
            .set_subject(subject_attribute(message).map(str::to_string))
            .send()
            .await
            .map_err(|e| InfrastructureError::Publish {
                topic: topic.to_string(),
                source: Box::new(aws_sdk_sns::Error::from(e)),
            })?;

        let receipt = PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        };
        info!(message_id = ?receipt.message_id, "Message published to SNS topic");
        Ok(receipt)
    }
}

/// SNS rejects an empty Subject, so it is only sent when there is one.
fn subject_attribute(message: &NotificationMessage) -> Option<&str> {
    Some(message.subject.as_str()).filter(|subject| !subject.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(subject: &str) -> NotificationMessage {
        NotificationMessage {
            subject: subject.into(),
            body: "Ruleset execution time: 45 seconds\n".into(),
            rules: vec![],
        }
    }

    #[test]
    fn test_catalog_subject_is_sent() {
        let message = message("[PROD] Glue DQ Ruleset - myRuleset run details");
        assert_eq!(
            subject_attribute(&message),
            Some("[PROD] Glue DQ Ruleset - myRuleset run details")
        );
    }

    #[test]
    fn test_empty_subject_is_omitted() {
        assert_eq!(subject_attribute(&message("")), None);
    }
}
