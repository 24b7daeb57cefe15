pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman-words")]
#[command(about = "Evaluates Roman-numeral expressions and spells the results in English")]
pub struct CliConfig {
    /// File with one `<roman> <operator> <roman>` expression per line.
    #[arg(long, default_value = "Input.txt")]
    pub input: String,

    /// Where the results are written, one line per input line.
    #[arg(long, default_value = "Output.txt")]
    pub output: String,

    /// TOML pipeline configuration; its paths replace --input/--output.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str, output: &str) -> CliConfig {
        CliConfig {
            input: input.to_string(),
            output: output.to_string(),
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn default_paths_validate() {
        assert!(config("Input.txt", "Output.txt").validate().is_ok());
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert!(config("", "Output.txt").validate().is_err());
        assert!(config("Input.txt", "").validate().is_err());
    }
}
