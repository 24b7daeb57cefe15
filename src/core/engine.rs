use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through extract, transform and load, logging each
/// stage. Returns the path the results were written to.
pub struct CalcEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CalcEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading expressions...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());

        tracing::info!("Evaluating...");
        let result = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Evaluated {} lines ({} invalid input, {} invalid operator)",
            result.stats.evaluated,
            result.stats.invalid_input,
            result.stats.invalid_operator
        );

        tracing::info!("Writing results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
