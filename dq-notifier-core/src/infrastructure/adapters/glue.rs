// dq-notifier-core/src/infrastructure/adapters/glue.rs

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_glue::Client;
use aws_sdk_glue::operation::get_data_quality_result::GetDataQualityResultOutput;
use aws_sdk_glue::primitives::DateTime as AwsDateTime;
use aws_sdk_glue::types::DataQualityRuleResult;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::quality::{QualityResult, RuleResult};
use crate::error::NotifierError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::quality_source::QualityResultSource;

/// `glue:GetDataQualityResult` behind the lookup port.
pub struct GlueResultSource {
    client: Client,
}

impl GlueResultSource {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QualityResultSource for GlueResultSource {
    #[instrument(skip(self))]
    async fn fetch_result(&self, result_id: &str) -> Result<QualityResult, NotifierError> {
        let output = self
            .client
            .get_data_quality_result()
            .result_id(result_id)
            .send()
            .await
            .map_err(|e| InfrastructureError::QualityLookup {
                result_id: result_id.to_string(),
                source: Box::new(aws_sdk_glue::Error::from(e)),
            })?;

        let result = to_quality_result(&output)?;
        debug!(rules = result.rule_results.len(), "Glue returned rule results");
        Ok(result)
    }
}

fn to_quality_result(output: &GetDataQualityResultOutput) -> Result<QualityResult, DomainError> {
    let rule_results = output
        .rule_results()
        .iter()
        .enumerate()
        .map(|(index, rule)| to_rule_result(index, rule))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QualityResult {
        result_id: output.result_id().map(str::to_string),
        started_on: to_utc("StartedOn", output.started_on())?,
        completed_on: to_utc("CompletedOn", output.completed_on())?,
        rule_results,
    })
}

fn to_utc(field: &str, value: Option<&AwsDateTime>) -> Result<DateTime<Utc>, DomainError> {
    let value = value.ok_or_else(|| DomainError::MissingField(field.to_string()))?;
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
        .ok_or_else(|| DomainError::InvalidTimestamp(format!("{} out of range: {:?}", field, value)))
}

fn to_rule_result(index: usize, rule: &DataQualityRuleResult) -> Result<RuleResult, DomainError> {
    let missing = |field: &str| DomainError::MissingField(format!("RuleResults[{}].{}", index, field));

    Ok(RuleResult {
        name: rule.name().ok_or_else(|| missing("Name"))?.to_string(),
        result: rule
            .result()
            .map(|status| status.as_str().to_string())
            .ok_or_else(|| missing("Result"))?,
        description: rule
            .description()
            .ok_or_else(|| missing("Description"))?
            .to_string(),
        evaluation_message: rule.evaluation_message().map(str::to_string),
    })
}
