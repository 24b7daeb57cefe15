use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult, TransformStats};
use crate::domain::eval::Expression;
use crate::domain::model::LineError;
use crate::domain::words::spell_out;
use crate::utils::error::Result;

/// The file-level loop: reads expressions from the input file, evaluates
/// each line independently, writes one output line per input line in the
/// original order.
pub struct CalcPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CalcPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CalcPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading expressions from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;

        let text = String::from_utf8_lossy(&raw);
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

        // Blank trailing lines are not expressions.
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let mut rendered = Vec::with_capacity(lines.len());
        let mut stats = TransformStats::default();

        for (index, line) in lines.iter().enumerate() {
            let output = match Expression::parse(line) {
                Ok(expression) => {
                    stats.evaluated += 1;
                    spell_out(expression.evaluate())
                }
                Err(error) => {
                    match error {
                        LineError::Malformed => stats.invalid_input += 1,
                        LineError::UnknownOperator => stats.invalid_operator += 1,
                    }
                    tracing::debug!("Line {}: {} ({:?})", index + 1, error, line);
                    error.to_string()
                }
            };
            rendered.push(output);
        }

        Ok(TransformResult {
            lines: rendered,
            stats,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut content = String::new();
        for line in &result.lines {
            content.push_str(line);
            content.push('\n');
        }

        tracing::debug!(
            "Writing {} lines to: {}",
            result.lines.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), content.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
