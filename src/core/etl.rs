use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RunSummary {
    pub program_count: usize,
    pub output_path: String,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting catalog build");

        let raw = self.pipeline.extract().await?;
        tracing::info!("Prepared {} subjects", raw.len());

        let programs = self.pipeline.transform(raw).await?;
        tracing::info!("Assembled {} programs", programs.len());

        let program_count = programs.len();
        let output_path = self.pipeline.load(programs).await?;
        tracing::info!("Catalog written to: {}", output_path);

        Ok(RunSummary {
            program_count,
            output_path,
        })
    }
}
