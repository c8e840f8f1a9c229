pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ComputeResult, Record, ReportRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Report, Storage};
pub use crate::utils::error::Result;
