// dq-notifier-core/src/domain/event.rs

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::error::DomainError;

/// Context type emitted by Glue when a ruleset ran against a Data Catalog table.
pub const GLUE_DATA_CATALOG: &str = "GLUE_DATA_CATALOG";

/// EventBridge envelope of a "Data Quality Evaluation Results Available" event.
/// Only `detail` is required, the rest of the envelope is ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IncomingEvent {
    #[serde(default)]
    pub id: Option<String>,
    pub detail: QualityRunDetail,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QualityRunDetail {
    pub context: RunContext,
    pub result_id: String,

    // Header-only fields: checked when the header is rendered
    #[serde(default)]
    pub ruleset_names: Vec<String>,
    pub state: Option<String>,
    pub score: Option<Number>,
    pub num_rules_succeeded: Option<u64>,
    pub num_rules_failed: Option<u64>,
    pub num_rules_skipped: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RunContext {
    pub context_type: String,
    pub table_name: Option<String>,
    pub database_name: Option<String>,
    pub run_id: Option<String>,
}

/// Borrowed view over every field the catalog header prints.
#[derive(Debug, Clone, Copy)]
pub struct CatalogHeader<'a> {
    pub ruleset_name: &'a str,
    pub table_name: &'a str,
    pub database_name: &'a str,
    pub run_id: &'a str,
    pub result_id: &'a str,
    pub state: &'a str,
    pub score: &'a Number,
    pub num_rules_succeeded: u64,
    pub num_rules_failed: u64,
    pub num_rules_skipped: u64,
}

impl IncomingEvent {
    /// Parses the raw invocation payload.
    pub fn from_value(payload: &Value) -> Result<Self, DomainError> {
        Ok(Self::deserialize(payload)?)
    }
}

impl QualityRunDetail {
    pub fn is_data_catalog(&self) -> bool {
        self.context.context_type == GLUE_DATA_CATALOG
    }

    pub fn ruleset_name(&self) -> Result<&str, DomainError> {
        self.ruleset_names
            .first()
            .map(String::as_str)
            .ok_or_else(|| missing("detail.rulesetNames[0]"))
    }

    pub fn catalog_header(&self) -> Result<CatalogHeader<'_>, DomainError> {
        Ok(CatalogHeader {
            ruleset_name: self.ruleset_name()?,
            table_name: required(&self.context.table_name, "detail.context.tableName")?,
            database_name: required(&self.context.database_name, "detail.context.databaseName")?,
            run_id: required(&self.context.run_id, "detail.context.runId")?,
            result_id: &self.result_id,
            state: required(&self.state, "detail.state")?,
            score: self.score.as_ref().ok_or_else(|| missing("detail.score"))?,
            num_rules_succeeded: self
                .num_rules_succeeded
                .ok_or_else(|| missing("detail.numRulesSucceeded"))?,
            num_rules_failed: self
                .num_rules_failed
                .ok_or_else(|| missing("detail.numRulesFailed"))?,
            num_rules_skipped: self
                .num_rules_skipped
                .ok_or_else(|| missing("detail.numRulesSkipped"))?,
        })
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, DomainError> {
    value.as_deref().ok_or_else(|| missing(field))
}

fn missing(field: &str) -> DomainError {
    DomainError::MissingField(field.to_string())
}
