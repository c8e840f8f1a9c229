use crate::domain::model::{ComputeResult, OutputFormat, Record};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::render::table;
use crate::reports;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::valid_files;

pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_csv(&self, data: &[u8]) -> Result<Vec<Record>> {
        // 標題列決定欄位名稱；列長不齊時缺的欄位就是缺
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let fields = headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            records.push(Record { fields });
        }
        Ok(records)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    fn gather(&self) -> Result<Vec<Record>> {
        // 找不到的檔案只發警告，一個有效檔案都不剩才算錯誤
        let files = valid_files(self.config.files());
        if files.is_empty() {
            return Err(ReportError::NoValidFilesError);
        }

        let mut records = Vec::new();
        for path in &files {
            let data = self.storage.read_file(path)?;
            let mut file_records = self.parse_csv(&data)?;
            tracing::debug!(
                "Read {} record(s) from {}",
                file_records.len(),
                path.display()
            );
            records.append(&mut file_records);
        }
        Ok(records)
    }

    fn compute(&self, records: Vec<Record>) -> Result<ComputeResult> {
        let report = reports::resolve(self.config.report())?;
        let result = report.compute(&records, self.config.data_error_policy())?;
        if result.skipped > 0 {
            tracing::warn!("Skipped {} malformed record(s)", result.skipped);
        }
        Ok(result)
    }

    fn render(&self, result: ComputeResult) -> Result<String> {
        let mut rows = result.rows;
        table::sort_rows(&mut rows);

        match self.config.output_format() {
            OutputFormat::Table => Ok(table::render_table(&rows)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        }
    }
}
