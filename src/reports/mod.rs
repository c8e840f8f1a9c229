pub mod average_performance;

pub use average_performance::AveragePerformance;

use crate::domain::ports::Report;
use crate::utils::error::{ReportError, Result};
use std::collections::BTreeMap;
use std::sync::LazyLock;

type ReportCtor = fn() -> Box<dyn Report>;

/// 已註冊的報告表。新增報告時在這裡掛上名字與建構子即可。
static REPORTS: LazyLock<BTreeMap<&'static str, ReportCtor>> = LazyLock::new(|| {
    let mut reports: BTreeMap<&'static str, ReportCtor> = BTreeMap::new();
    reports.insert("average-performance", || Box::new(AveragePerformance));
    reports
});

/// 依名字建立對應的報告，名字沒註冊就回報所有可用的選項
pub fn resolve(name: &str) -> Result<Box<dyn Report>> {
    match REPORTS.get(name) {
        Some(ctor) => Ok(ctor()),
        None => Err(ReportError::UnknownReportError {
            name: name.to_string(),
            available: available_names().join(", "),
        }),
    }
}

pub fn available_names() -> Vec<&'static str> {
    REPORTS.keys().copied().collect()
}
