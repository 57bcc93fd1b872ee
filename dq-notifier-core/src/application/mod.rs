// dq-notifier-core/src/application/mod.rs

pub mod formatter;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use dq_notifier_core::application::NotificationFormatter;`
pub use formatter::{InvocationResponse, NotificationFormatter};
