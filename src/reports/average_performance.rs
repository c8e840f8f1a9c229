use crate::domain::model::{ComputeResult, DataErrorPolicy, Record, ReportRow};
use crate::domain::ports::Report;
use crate::utils::error::{ReportError, Result};
use std::collections::HashMap;

const GROUP_FIELD: &str = "position";
const VALUE_FIELD: &str = "performance";

/// 平均效率報告：依 position 分組，取 performance 的平均值。
pub struct AveragePerformance;

impl Report for AveragePerformance {
    fn compute(&self, records: &[Record], policy: DataErrorPolicy) -> Result<ComputeResult> {
        let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
        // 記錄分組首次出現的順序，排序同分時才能保持這個順序
        let mut order: Vec<String> = Vec::new();
        let mut skipped = 0usize;

        for (idx, record) in records.iter().enumerate() {
            let (position, value) = match parse_record(record, idx + 1) {
                Ok(parsed) => parsed,
                Err(err) => match policy {
                    DataErrorPolicy::Skip => {
                        tracing::debug!("Skipping record: {}", err);
                        skipped += 1;
                        continue;
                    }
                    DataErrorPolicy::Fail => return Err(err),
                },
            };

            let entry = totals.entry(position.to_string()).or_insert_with(|| {
                order.push(position.to_string());
                (0.0, 0)
            });
            entry.0 += value;
            entry.1 += 1;
        }

        let rows = order
            .into_iter()
            .map(|position| {
                let (sum, count) = totals[&position];
                ReportRow {
                    position,
                    performance: quantize(sum / count as f64),
                }
            })
            .collect();

        Ok(ComputeResult { rows, skipped })
    }
}

fn parse_record<'a>(record: &'a Record, row: usize) -> Result<(&'a str, f64)> {
    let position = record
        .get(GROUP_FIELD)
        .ok_or_else(|| missing_field(row, GROUP_FIELD))?;
    let raw = record
        .get(VALUE_FIELD)
        .ok_or_else(|| missing_field(row, VALUE_FIELD))?;

    // 數值欄位容許前後空白，分組鍵則一律保持原樣
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ReportError::DataError {
            row,
            field: VALUE_FIELD.to_string(),
            message: format!("'{}' is not a number", raw),
        })?;

    Ok((position, value))
}

fn missing_field(row: usize, field: &str) -> ReportError {
    ReportError::DataError {
        row,
        field: field.to_string(),
        message: "required field is missing".to_string(),
    }
}

// 捨入到最接近的 0.05 一格，不是兩位小數：4.815 -> 4.80
// 剛好落在格線中間時取偶數格：4.625 -> 4.60，4.875 -> 4.90
fn quantize(mean: f64) -> f64 {
    (mean * 20.0).round_ties_even() / 20.0
}
