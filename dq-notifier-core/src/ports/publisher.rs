// dq-notifier-core/src/ports/publisher.rs

use crate::domain::report::NotificationMessage;
use crate::error::NotifierError;
use async_trait::async_trait;

/// Acknowledgment returned by the notification service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
}

#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    async fn publish(
        &self,
        topic: &str,
        message: &NotificationMessage,
    ) -> Result<PublishReceipt, NotifierError>;
}
