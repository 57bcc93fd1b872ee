// dq-notifier/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dq-notifier")]
#[command(about = "Formats Glue Data Quality ruleset results and publishes them to SNS", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `serve` inside a Lambda custom runtime (`bootstrap` gets no arguments)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Set by the Lambda service in every function environment.
pub const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

impl Cli {
    /// The explicit subcommand, else `serve` when running under Lambda.
    pub fn resolve_command(self, runtime_api: Option<String>) -> Option<Commands> {
        match (self.command, runtime_api) {
            (Some(command), _) => Some(command),
            (None, Some(_)) => Some(Commands::Serve {
                config: ConfigArgs::default(),
            }),
            (None, None) => None,
        }
    }
}

/// Dry-run rendering, mirrors the core `RenderFormat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatCli {
    Text,
    Json,
}

/// Settings shared by every command; unset values fall back to ENVIRONMENT / SNS_TOPIC_ARN.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Optional YAML file with `environment` and `topic-arn`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Deployment label shown in the subject (ex: "prod")
    #[arg(long)]
    pub environment: Option<String>,

    /// Notification topic ARN
    #[arg(long)]
    pub topic_arn: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the Lambda runtime loop (Glue lookup + SNS publish)
    Serve {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// 🧪 Processes a single event file locally
    Invoke {
        /// Event JSON file (EventBridge "Data Quality Evaluation Results Available")
        #[arg(long, short)]
        event: PathBuf,

        /// Read the quality result from this JSON file instead of calling Glue
        #[arg(long)]
        result_file: Option<PathBuf>,

        /// Render the message instead of publishing it to SNS
        #[arg(long, default_value = "false")]
        dry_run: bool,

        /// With --dry-run: write the rendered message to this file instead of stdout
        #[arg(long, requires = "dry_run")]
        output: Option<PathBuf>,

        /// With --dry-run: how the message is rendered
        #[arg(long, value_enum, default_value = "text", requires = "dry_run")]
        format: FormatCli,

        #[command(flatten)]
        config: ConfigArgs,
    },
}
