// dq-notifier-core/src/infrastructure/adapters/mod.rs

pub mod glue;
pub mod local;
pub mod sns;

pub use glue::GlueResultSource;
pub use local::{JsonFileResultSource, LocalPublisher, RenderFormat};
pub use sns::SnsPublisher;

use aws_config::{BehaviorVersion, SdkConfig};

/// Region and credentials from the default provider chain (env, profile, Lambda role).
pub async fn load_aws_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}
