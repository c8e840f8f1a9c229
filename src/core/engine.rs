use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting report run");

        // Gather
        let records = self.pipeline.gather()?;
        tracing::info!("Gathered {} record(s)", records.len());

        // Compute
        let result = self.pipeline.compute(records)?;
        tracing::info!("Computed {} row(s)", result.rows.len());

        // Render
        let output = self.pipeline.render(result)?;

        Ok(output)
    }
}
