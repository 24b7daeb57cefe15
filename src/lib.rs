pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{engine::CalcEngine, pipeline::CalcPipeline};
pub use crate::utils::error::{CalcError, Result};
