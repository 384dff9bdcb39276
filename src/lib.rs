pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod fetch;
pub mod pdf;
pub mod utils;

pub use crate::config::{catalog::CatalogConfig, cli::LocalStorage, CliConfig};
pub use crate::core::etl::EtlEngine;
pub use crate::core::scrape_pipeline::ScrapePipeline;
pub use crate::core::template_pipeline::TemplatePipeline;
pub use crate::domain::model::CurriculumProgram;
pub use crate::utils::error::{EtlError, Result};
