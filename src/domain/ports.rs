use crate::domain::model::{ComputeResult, DataErrorPolicy, OutputFormat, Record};
use crate::utils::error::Result;
use std::path::Path;

pub trait Report {
    fn compute(&self, records: &[Record], policy: DataErrorPolicy) -> Result<ComputeResult>;
}

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn files(&self) -> &[String];
    fn report(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn data_error_policy(&self) -> DataErrorPolicy;
}

pub trait Pipeline {
    fn gather(&self) -> Result<Vec<Record>>;
    fn compute(&self, records: Vec<Record>) -> Result<ComputeResult>;
    fn render(&self, result: ComputeResult) -> Result<String>;
}
