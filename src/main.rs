use clap::Parser;
use roman_words::domain::ports::ConfigProvider;
use roman_words::utils::{logger, validation::Validate};
use roman_words::{CalcEngine, CalcPipeline, CliConfig, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting roman-words");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(config_path) = cli.config.clone() {
        let config = match TomlConfig::from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config file '{}': {}", config_path, e);
                eprintln!("{}", e.user_friendly_message());
                eprintln!("Suggestion: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        };
        tracing::info!("Loaded pipeline '{}' from {}", config.pipeline.name, config_path);
        run(config).await
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        run(cli).await
    }
}

async fn run<C>(config: C) -> Result<(), Box<dyn std::error::Error>>
where
    C: ConfigProvider + 'static,
{
    let storage = LocalStorage::new(".");
    let pipeline = CalcPipeline::new(storage, config);
    let engine = CalcEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Check {}", output_path);
            Ok(())
        }
        Err(e) => {
            // Per-line problems never reach here; this is a failure to
            // read the input or write the output.
            tracing::error!("Processing failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
