pub mod etl;
pub mod scrape_pipeline;
pub mod template_pipeline;

use crate::domain::model::CurriculumProgram;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub use crate::domain::ports::{ConfigProvider, Pipeline};

/// File name of the generated catalog inside the output directory.
pub const CATALOG_FILE: &str = "programas_sep.json";

/// Local timestamp stamped on each record at assembly time.
pub(crate) fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Serializes the catalog as one pretty-printed JSON array (UTF-8 kept
/// verbatim, serde_json never escapes non-ASCII) and writes it through the
/// given storage.
pub(crate) async fn write_catalog<S: Storage>(
    storage: &S,
    output_path: &str,
    programs: &[CurriculumProgram],
) -> Result<String> {
    let json = serde_json::to_string_pretty(programs)?;
    storage.write_file(CATALOG_FILE, json.as_bytes()).await?;
    Ok(format!("{}/{}", output_path, CATALOG_FILE))
}
