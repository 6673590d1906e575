use anyhow::Context;
use clap::Parser;
use modimage::utils::{logger, validation::Validate};
use modimage::{CliConfig, ImageBuildEngine, JsonDirWriter, LayoutConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting modimage");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let layout = LayoutConfig::from_file(&config.layout)
        .with_context(|| format!("failed to load layout {}", config.layout))?;

    if let Err(e) = layout.validate() {
        tracing::error!("Layout validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let classifier = layout.classifier();
    let aggregator = layout.aggregator();

    let writer = JsonDirWriter::new(&config.output_path);
    let mut engine = ImageBuildEngine::new(writer);

    let sections = engine
        .run(&classifier, &aggregator)
        .context("image build failed")?;

    tracing::info!(
        "Wrote {} tier section(s) to {}",
        sections,
        config.output_path
    );

    Ok(())
}
