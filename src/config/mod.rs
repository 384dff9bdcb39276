pub mod catalog;
pub mod cli;
pub mod templates;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};

/// Identifies the extractor to the DGB portal.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (EDUPLANMX Data Extraction Bot)";

#[derive(Debug, Clone, Parser)]
#[command(name = "mccems-etl")]
#[command(about = "Builds the MCCEMS curriculum catalog from official PDF programs")]
pub struct CliConfig {
    /// TOML file with the subject/URL catalog; builtin catalog when omitted.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "./data/sep_downloads")]
    pub download_dir: String,

    #[arg(long, default_value = "./data")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("download_dir", &self.download_dir)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        Ok(())
    }
}
