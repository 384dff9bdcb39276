//! Scraping variant: download each program document, recognize its fields
//! and assemble the catalog record.
//!
//! Per-subject failures never abort the run. A failed download drops the
//! subject from the output; a failed recognition routine leaves its field
//! category at the empty default while the rest of the record survives.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::catalog::{CatalogConfig, SubjectSource};
use crate::core::{now_timestamp, write_catalog};
use crate::domain::model::{
    CurricularOrganizer, CurriculumProgram, ProgramMetadata, Recognition,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::extract;
use crate::fetch::DocumentFetcher;
use crate::pdf::PdfDocument;
use crate::utils::error::Result;

pub struct FetchedDocument {
    pub subject: SubjectSource,
    pub path: PathBuf,
}

pub struct ScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: CatalogConfig,
    fetcher: DocumentFetcher,
}

impl<S: Storage, C: ConfigProvider> ScrapePipeline<S, C> {
    pub fn new(storage: S, config: C, catalog: CatalogConfig) -> Result<Self> {
        let fetcher = DocumentFetcher::new(
            config.download_dir(),
            config.user_agent(),
            config.timeout_secs(),
        )?;
        Ok(Self {
            storage,
            config,
            catalog,
            fetcher,
        })
    }

    fn assemble(&self, subject: &SubjectSource, path: &Path) -> CurriculumProgram {
        let (metadata, organizer, progressions) = match PdfDocument::load(path) {
            Ok(pdf) => (
                extract::header_metadata(&pdf),
                extract::curricular_organizer(&pdf),
                extract::progression_entries(&pdf),
            ),
            Err(e) => {
                let reason = e.to_string();
                (
                    Recognition::Failed(reason.clone()),
                    Recognition::Failed(reason.clone()),
                    Recognition::Failed(reason),
                )
            }
        };

        let progressions = progressions.resolve_or("progresiones", Vec::new());
        tracing::info!(
            "{}: {} progressions recognized",
            subject.name,
            progressions.len()
        );

        CurriculumProgram {
            subject: subject.name.clone(),
            semester: subject.semester,
            metadata: metadata.resolve_or("metadata", ProgramMetadata::default()),
            organizer: organizer.resolve_or("organizador_curricular", CurricularOrganizer::default()),
            progressions,
            source_url: subject.url.clone(),
            extracted_at: now_timestamp(),
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<S, C> {
    type Raw = FetchedDocument;

    /// Downloads every subject with a known URL, in declaration order.
    /// Pending entries and failed downloads are skipped.
    async fn extract(&self) -> Result<Vec<FetchedDocument>> {
        let mut fetched = Vec::new();

        for subject in &self.catalog.subjects {
            if subject.is_pending() {
                tracing::debug!("Skipping {} (URL pending)", subject.name);
                continue;
            }

            match self.fetcher.fetch(&subject.url, &subject.name).await {
                Ok(path) => fetched.push(FetchedDocument {
                    subject: subject.clone(),
                    path,
                }),
                Err(e) => {
                    tracing::error!("Download failed for {}: {}", subject.name, e);
                }
            }
        }

        Ok(fetched)
    }

    async fn transform(&self, raw: Vec<FetchedDocument>) -> Result<Vec<CurriculumProgram>> {
        Ok(raw
            .iter()
            .map(|doc| self.assemble(&doc.subject, &doc.path))
            .collect())
    }

    async fn load(&self, programs: Vec<CurriculumProgram>) -> Result<String> {
        write_catalog(&self.storage, self.config.output_path(), &programs).await
    }
}
