// dq-notifier-core/src/ports/mod.rs

pub mod publisher;
pub mod quality_source;

pub use publisher::{NotificationPublisher, PublishReceipt};
pub use quality_source::QualityResultSource;
