//! Static-catalog generator: builds `programas_sep.json` from the program
//! templates instead of scraping, for subjects without a published PDF.

use std::path::PathBuf;

use clap::Parser;
use mccems_etl::config::templates::{self, SubjectList, TemplateSet};
use mccems_etl::utils::logger;
use mccems_etl::{EtlEngine, LocalStorage, TemplatePipeline};

#[derive(Debug, Parser)]
#[command(name = "generate_catalog")]
#[command(about = "Generates the curriculum catalog from subject templates")]
struct GenerateConfig {
    /// TOML file with [[subjects]] tuples; builtin list when omitted.
    #[arg(long)]
    subjects: Option<PathBuf>,

    /// TOML file with per-area templates; builtin set when omitted.
    #[arg(long)]
    templates: Option<PathBuf>,

    #[arg(long, default_value = "./data")]
    output_path: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GenerateConfig::parse();

    logger::init_cli_logger(config.verbose);

    let subjects = match &config.subjects {
        Some(path) => SubjectList::from_toml_file(path)?.subjects,
        None => templates::builtin_subjects(),
    };
    let template_set = match &config.templates {
        Some(path) => TemplateSet::from_toml_file(path)?,
        None => TemplateSet::builtin(),
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TemplatePipeline::new(storage, config.output_path, template_set, subjects);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ Programas generados: {}", summary.program_count);
            println!("💾 Archivo generado: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("Catalog generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
