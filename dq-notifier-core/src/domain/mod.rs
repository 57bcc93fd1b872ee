pub mod duration;
pub mod error;
pub mod event;
pub mod quality;
pub mod report;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use duration::{ExecutionTime, format_execution_time};
pub use error::DomainError;
pub use event::{GLUE_DATA_CATALOG, IncomingEvent, QualityRunDetail, RunContext};
pub use quality::{QualityResult, RuleResult};
pub use report::{NotificationDraft, NotificationMessage, RuleSummary};
