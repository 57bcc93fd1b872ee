// dq-notifier-core/src/ports/quality_source.rs

// What the formatter needs from the data quality service, without knowing
// whether the answer comes from Glue or from a file on disk.

use crate::domain::quality::QualityResult;
use crate::error::NotifierError;
use async_trait::async_trait;

#[async_trait]
pub trait QualityResultSource: Send + Sync {
    /// Fetches the detailed evaluation of one ruleset run.
    async fn fetch_result(&self, result_id: &str) -> Result<QualityResult, NotifierError>;
}
