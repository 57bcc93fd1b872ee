// dq-notifier-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Capabilities the formatter is given: quality result lookup, publishing.
pub mod ports;

// 2. Domain (Cœur du métier)
// Event shape, quality results, duration and report formatting.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Glue, SNS, local files, configuration loading.
pub mod infrastructure;

// 4. Application (Use Cases)
// The notification formatter: parse -> fetch -> format -> publish.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{InvocationResponse, NotificationFormatter};
pub use error::{NotifierError, ProcessingError};
pub use infrastructure::config::NotifierConfig;
