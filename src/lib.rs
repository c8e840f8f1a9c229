pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod reports;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::ReportEngine, pipeline::CsvPipeline};
pub use utils::error::{ReportError, Result};
