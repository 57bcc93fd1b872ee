// dq-notifier-core/src/infrastructure/adapters/local.rs
//
// Offline adapters: a quality result read from a JSON file and a publisher
// that renders the message instead of sending it.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::quality::QualityResult;
use crate::domain::report::NotificationMessage;
use crate::error::NotifierError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::publisher::{NotificationPublisher, PublishReceipt};
use crate::ports::quality_source::QualityResultSource;

/// Serves a `GetDataQualityResult` response saved to disk (e.g. with the AWS CLI).
pub struct JsonFileResultSource {
    path: PathBuf,
}

impl JsonFileResultSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QualityResultSource for JsonFileResultSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_result(&self, result_id: &str) -> Result<QualityResult, NotifierError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let result: QualityResult =
            serde_json::from_str(&content).map_err(InfrastructureError::JsonError)?;

        if let Some(stored) = &result.result_id
            && stored != result_id
        {
            warn!(stored = %stored, "Result file belongs to another result id");
        }
        Ok(result)
    }
}

/// How the dry-run publisher renders a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// `Subject: ...`, blank line, body
    #[default]
    Text,
    /// The whole message, rule summaries included
    Json,
}

/// Dry-run publisher: writes the rendered message to `output`, or stdout when unset.
#[derive(Debug, Default)]
pub struct LocalPublisher {
    output: Option<PathBuf>,
    format: RenderFormat,
}

impl LocalPublisher {
    pub fn stdout() -> Self {
        Self::default()
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    fn render(&self, message: &NotificationMessage) -> Result<String, InfrastructureError> {
        match self.format {
            RenderFormat::Text => Ok(message.render_text()),
            RenderFormat::Json => Ok(serde_json::to_string_pretty(message)? + "\n"),
        }
    }
}

#[async_trait]
impl NotificationPublisher for LocalPublisher {
    async fn publish(
        &self,
        topic: &str,
        message: &NotificationMessage,
    ) -> Result<PublishReceipt, NotifierError> {
        let rendered = self.render(message)?;

        match &self.output {
            Some(path) => {
                write_atomically(path, rendered.as_bytes())?;
                info!(topic, path = %path.display(), "Dry run: message written to file");
            }
            None => {
                print_rendered(&rendered)?;
                info!(topic, "Dry run: message printed");
            }
        }

        Ok(PublishReceipt::default())
    }
}

fn print_rendered(rendered: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()
}

/// The target ends up either untouched or fully written, never truncated.
fn write_atomically(path: &Path, content: &[u8]) -> Result<(), InfrastructureError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content)?;
    staged.persist(path).map_err(|e| InfrastructureError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::report::RuleSummary;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_source_reads_glue_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("result.json");
        fs::write(
            &path,
            r#"{
                "ResultId": "dqresult-456",
                "StartedOn": "2024-01-01T00:00:00",
                "CompletedOn": "2024-01-01T00:00:45",
                "RuleResults": [
                    { "Name": "Rule_1", "Result": "PASS", "Description": "RowCount > 0" }
                ]
            }"#,
        )?;

        let source = JsonFileResultSource::new(&path);
        let result = source.fetch_result("dqresult-456").await?;
        assert_eq!(result.rule_results.len(), 1);
        assert_eq!((result.completed_on - result.started_on).num_seconds(), 45);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let source = JsonFileResultSource::new("/definitely/not/here.json");
        let err = source.fetch_result("r-1").await.unwrap_err();
        assert!(matches!(
            err,
            NotifierError::Infrastructure(InfrastructureError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_publisher_writes_file_in_new_directory() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("message.txt");
        let message = NotificationMessage {
            subject: "[DEV] Glue DQ Ruleset - rs run details".into(),
            body: "Ruleset execution time: 45 seconds\n".into(),
            rules: vec![],
        };

        let receipt = LocalPublisher::to_file(&path)
            .publish("arn:aws:sns:eu-west-1:123456789012:dq", &message)
            .await?;

        assert_eq!(receipt.message_id, None);
        assert_eq!(
            fs::read_to_string(&path)?,
            "Subject: [DEV] Glue DQ Ruleset - rs run details\n\nRuleset execution time: 45 seconds\n\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_publisher_json_format_keeps_rule_summaries() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("message.json");
        let message = NotificationMessage {
            subject: String::new(),
            body: "Ruleset execution time: \n".into(),
            rules: vec![RuleSummary {
                name: "Rule_1".into(),
                result: "PASS".into(),
                description: "RowCount > 0".into(),
                evaluation_message: String::new(),
            }],
        };

        LocalPublisher::to_file(&path)
            .with_format(RenderFormat::Json)
            .publish("topic", &message)
            .await?;

        let written: NotificationMessage = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(written, message);
        Ok(())
    }

    #[test]
    fn test_write_atomically_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("message.txt");

        write_atomically(&path, b"first")?;
        write_atomically(&path, b"second")?;

        assert_eq!(fs::read_to_string(path)?, "second");
        Ok(())
    }
}
