// dq-notifier-core/src/domain/report.rs

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::domain::duration::format_execution_time;
use crate::domain::error::DomainError;
use crate::domain::event::{CatalogHeader, QualityRunDetail};
use crate::domain::quality::{QualityResult, RuleResult};

/// Subject and body handed to the publisher in a single call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub rules: Vec<RuleSummary>,
}

/// Structured copy of a rule line, `evaluation_message` empty when Glue sent none.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RuleSummary {
    pub name: String,
    pub result: String,
    pub description: String,
    pub evaluation_message: String,
}

impl From<&RuleResult> for RuleSummary {
    fn from(rule: &RuleResult) -> Self {
        Self {
            name: rule.name.clone(),
            result: rule.result.clone(),
            description: rule.description.clone(),
            evaluation_message: rule.evaluation_message.clone().unwrap_or_default(),
        }
    }
}

impl NotificationMessage {
    /// Plain-text rendering used by the local publisher.
    pub fn render_text(&self) -> String {
        format!("Subject: {}\n\n{}\n", self.subject, self.body)
    }
}

/// Message under construction: header first, quality details once fetched.
#[derive(Debug, Clone, Default)]
pub struct NotificationDraft {
    subject: String,
    body: String,
}

impl NotificationDraft {
    /// Starts the message. Only Data Catalog runs get a header and a subject.
    pub fn begin(detail: &QualityRunDetail, environment: &str) -> Result<Self, DomainError> {
        if !detail.is_data_catalog() {
            return Ok(Self::default());
        }

        let header = detail.catalog_header()?;
        Ok(Self {
            subject: subject_line(environment, header.ruleset_name),
            body: header_block(&header),
        })
    }

    pub fn complete(mut self, result: &QualityResult) -> NotificationMessage {
        let execution_time = format_execution_time(result.started_on, result.completed_on);
        let _ = writeln!(self.body, "Ruleset execution time: {}", execution_time);
        self.body
            .push_str("\n\nRuleset details evaluation steps results:\n\n");

        for rule in &result.rule_results {
            self.body.push('\n');
            self.body.push_str(&rule_line(rule));
        }

        NotificationMessage {
            subject: self.subject,
            body: self.body,
            rules: result.rule_results.iter().map(RuleSummary::from).collect(),
        }
    }
}

pub fn subject_line(environment: &str, ruleset_name: &str) -> String {
    format!(
        "[{}] Glue DQ Ruleset - {} run details",
        environment.to_uppercase(),
        ruleset_name
    )
}

pub fn header_block(header: &CatalogHeader<'_>) -> String {
    let mut block = String::from("Glue Data Quality run details:\n");
    let fields: [(&str, String); 10] = [
        ("Ruleset Name", header.ruleset_name.to_string()),
        ("Glue Table Name", header.table_name.to_string()),
        ("Glue Database Name", header.database_name.to_string()),
        ("Run ID", header.run_id.to_string()),
        ("Result ID", header.result_id.to_string()),
        ("State", header.state.to_string()),
        ("Score", header.score.to_string()),
        ("No of rules succeeded", header.num_rules_succeeded.to_string()),
        ("No of rules failed", header.num_rules_failed.to_string()),
        ("No of rules skipped", header.num_rules_skipped.to_string()),
    ];
    for (label, value) in fields {
        let _ = writeln!(block, "{}: {}", label, value);
    }
    block
}

pub fn rule_line(rule: &RuleResult) -> String {
    let mut line = format!(
        "Name: {}\t\tResult: {}\t\tDescription: \t{}",
        rule.name, rule.result, rule.description
    );
    if let Some(message) = &rule.evaluation_message {
        let _ = write!(line, "\t\tEvaluationMessage: {}", message);
    }
    line
}
