use clap::Parser;
use mccems_etl::config::catalog::CatalogConfig;
use mccems_etl::utils::{logger, validation::Validate};
use mccems_etl::{CliConfig, EtlEngine, LocalStorage, ScrapePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mccems-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog {
        Some(path) => CatalogConfig::from_toml_file(path)?,
        None => CatalogConfig::builtin(),
    };
    if let Err(e) = catalog.validate() {
        tracing::error!("Catalog validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ScrapePipeline::new(storage, config, catalog)?;
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ Programas extraídos: {}", summary.program_count);
            println!("💾 Archivo generado: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("Catalog build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
