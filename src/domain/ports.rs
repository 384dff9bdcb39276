use crate::domain::model::CurriculumProgram;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn download_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

/// Extract / transform / load stages of a catalog build. `Raw` is whatever
/// the extract stage hands to transform: fetched documents for the scraping
/// pipeline, subject tuples for the template pipeline.
#[async_trait]
pub trait Pipeline: Send + Sync {
    type Raw: Send;

    async fn extract(&self) -> Result<Vec<Self::Raw>>;
    async fn transform(&self, raw: Vec<Self::Raw>) -> Result<Vec<CurriculumProgram>>;
    async fn load(&self, programs: Vec<CurriculumProgram>) -> Result<String>;
}
