use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const TOPIC: &str = "arn:aws:sns:eu-west-1:123456789012:dq-alerts";

/// Event + quality result files for one local invocation.
struct InvokeFixture {
    tmp: TempDir,
    event: PathBuf,
    result: PathBuf,
}

impl InvokeFixture {
    fn new(context_type: &str) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let event = tmp.path().join("event.json");
        let result = tmp.path().join("result.json");

        fs::write(
            &event,
            format!(
                r#"{{
                    "version": "0",
                    "id": "evt-1",
                    "detail-type": "Data Quality Evaluation Results Available",
                    "source": "aws.glue-dataquality",
                    "detail": {{
                        "context": {{
                            "contextType": "{}",
                            "runId": "dqrun-123",
                            "databaseName": "sales",
                            "tableName": "orders"
                        }},
                        "resultId": "dqresult-456",
                        "rulesetNames": ["myRuleset"],
                        "state": "SUCCEEDED",
                        "score": 0.5,
                        "numRulesSucceeded": 1,
                        "numRulesFailed": 1,
                        "numRulesSkipped": 0
                    }}
                }}"#,
                context_type
            ),
        )?;

        fs::write(
            &result,
            r#"{
                "ResultId": "dqresult-456",
                "StartedOn": "2024-01-01T00:00:00",
                "CompletedOn": "2024-01-03T02:05:09",
                "RuleResults": [
                    { "Name": "Rule_1", "Result": "PASS", "Description": "RowCount > 0" },
                    {
                        "Name": "Rule_2",
                        "Result": "FAIL",
                        "Description": "IsComplete \"email\"",
                        "EvaluationMessage": "Value: 0.9 does not meet the constraint requirement!"
                    }
                ]
            }"#,
        )?;

        Ok(Self { tmp, event, result })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    fn invoke(&self, result_file: &Path) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dq-notifier"));
        cmd.env_remove("ENVIRONMENT")
            .env_remove("SNS_TOPIC_ARN")
            .arg("invoke")
            .arg("--event")
            .arg(&self.event)
            .arg("--result-file")
            .arg(result_file)
            .arg("--dry-run");
        cmd
    }
}

#[test]
fn test_dry_run_prints_message_and_response() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;

    fixture
        .invoke(&fixture.result)
        .args(["--environment", "prod", "--topic-arn", TOPIC])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Subject: [PROD] Glue DQ Ruleset - myRuleset run details",
        ))
        .stdout(predicate::str::contains(
            "Ruleset execution time: 2 days 2 hours 5 minutes 9 seconds",
        ))
        .stdout(predicate::str::contains(
            "\tEvaluationMessage: Value: 0.9 does not meet the constraint requirement!",
        ))
        .stdout(predicate::str::contains("\"statusCode\": 200"));
    Ok(())
}

#[test]
fn test_dry_run_to_file_uses_env_config() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;
    let output = fixture.path("out/message.txt");

    fixture
        .invoke(&fixture.result)
        .env("ENVIRONMENT", "staging")
        .env("SNS_TOPIC_ARN", TOPIC)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject:").not());

    let message = fs::read_to_string(&output)?;
    assert!(message.starts_with("Subject: [STAGING] Glue DQ Ruleset - myRuleset run details\n\n"));
    assert!(message.contains("Name: Rule_1\t\tResult: PASS\t\tDescription: \tRowCount > 0\n"));
    Ok(())
}

#[test]
fn test_config_file_is_layered_under_flags() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;
    let config = fixture.path("notifier.yaml");
    fs::write(&config, format!("environment: dev\ntopic-arn: {}\n", TOPIC))?;

    fixture
        .invoke(&fixture.result)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: [DEV] Glue DQ Ruleset"));

    fixture
        .invoke(&fixture.result)
        .arg("--config")
        .arg(&config)
        .args(["--environment", "qa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: [QA] Glue DQ Ruleset"));
    Ok(())
}

#[test]
fn test_dry_run_json_exposes_rule_summaries() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;

    fixture
        .invoke(&fixture.result)
        .args(["--environment", "prod", "--topic-arn", TOPIC, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rules\": ["))
        .stdout(predicate::str::contains("\"evaluation_message\": \"\""))
        .stdout(predicate::str::contains("\"result\": \"FAIL\""));
    Ok(())
}

#[test]
fn test_non_catalog_event_has_empty_subject() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_JOB")?;

    fixture
        .invoke(&fixture.result)
        .args(["--environment", "prod", "--topic-arn", TOPIC])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: \n\nRuleset execution time:"));
    Ok(())
}

#[test]
fn test_lookup_failure_is_reported_with_prefix() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;
    let missing = fixture.path("missing.json");

    fixture
        .invoke(&missing)
        .args(["--environment", "prod", "--topic-arn", TOPIC])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Subject:").not())
        .stderr(predicate::str::contains(
            "Error: ERROR - ran into error while parsing ruleset or publishing to SNS: File System Error",
        ))
        .stderr(predicate::str::contains("Caused by").not());
    Ok(())
}

#[test]
fn test_missing_configuration_fails_fast() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;

    fixture
        .invoke(&fixture.result)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ENVIRONMENT"));
    Ok(())
}

#[test]
fn test_format_without_dry_run_is_rejected() -> Result<()> {
    let fixture = InvokeFixture::new("GLUE_DATA_CATALOG")?;

    Command::new(assert_cmd::cargo::cargo_bin!("dq-notifier"))
        .arg("invoke")
        .arg("--event")
        .arg(&fixture.event)
        .args(["--environment", "prod", "--topic-arn", TOPIC, "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dry-run"));
    Ok(())
}

#[test]
fn test_bare_binary_needs_a_command_outside_lambda() {
    Command::new(assert_cmd::cargo::cargo_bin!("dq-notifier"))
        .env_remove("AWS_LAMBDA_RUNTIME_API")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing command"));
}

#[test]
fn test_bare_binary_serves_under_lambda() {
    // Serve resolves its configuration before contacting the runtime API
    Command::new(assert_cmd::cargo::cargo_bin!("dq-notifier"))
        .env("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001")
        .env_remove("ENVIRONMENT")
        .env_remove("SNS_TOPIC_ARN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve notifier configuration"));
}
