pub mod cli;

use crate::domain::model::{DataErrorPolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::reports;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "perf-report")]
#[command(about = "Employee performance reports over CSV data")]
pub struct CliConfig {
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub files: Vec<String>,

    #[arg(long)]
    pub report: String,

    #[arg(long, default_value = "table")]
    pub format: String,

    #[arg(long, default_value = "skip", help = "skip or fail on malformed records")]
    pub on_data_error: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn files(&self) -> &[String] {
        &self.files
    }

    fn report(&self) -> &str {
        &self.report
    }

    fn output_format(&self) -> OutputFormat {
        match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }

    fn data_error_policy(&self) -> DataErrorPolicy {
        match self.on_data_error.as_str() {
            "fail" => DataErrorPolicy::Fail,
            _ => DataErrorPolicy::Skip,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("files", &self.files)?;
        validation::validate_non_empty_string("report", &self.report)?;
        validation::validate_one_of("format", &self.format, &["table", "json"])?;
        validation::validate_one_of("on-data-error", &self.on_data_error, &["skip", "fail"])?;

        // 報告名稱必須已註冊；錯誤訊息會列出所有可用的報告
        reports::resolve(&self.report)?;
        Ok(())
    }
}
