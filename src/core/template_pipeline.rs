//! Static-catalog variant: no network, no PDFs. Records come straight from
//! the per-area templates combined with the configured subject tuples.

use async_trait::async_trait;

use crate::config::templates::{SubjectSpec, TemplateSet};
use crate::core::{now_timestamp, write_catalog};
use crate::domain::model::{CurriculumProgram, ProgramMetadata};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::Result;

pub struct TemplatePipeline<S: Storage> {
    storage: S,
    output_path: String,
    templates: TemplateSet,
    subjects: Vec<SubjectSpec>,
}

impl<S: Storage> TemplatePipeline<S> {
    pub fn new(
        storage: S,
        output_path: String,
        templates: TemplateSet,
        subjects: Vec<SubjectSpec>,
    ) -> Self {
        Self {
            storage,
            output_path,
            templates,
            subjects,
        }
    }

    fn assemble(&self, spec: &SubjectSpec) -> CurriculumProgram {
        let template = self.templates.for_area(&spec.area);
        let (organizer, progressions) = template.instantiate(&spec.name);

        CurriculumProgram {
            subject: spec.name.clone(),
            semester: spec.semester,
            metadata: ProgramMetadata {
                title: Some(spec.name.to_uppercase()),
                semester: Some(spec.semester),
                credits: Some(spec.credits),
                weekly_hours: Some(spec.weekly_hours),
            },
            organizer,
            progressions,
            source_url: String::new(),
            extracted_at: now_timestamp(),
        }
    }
}

#[async_trait]
impl<S: Storage> Pipeline for TemplatePipeline<S> {
    type Raw = SubjectSpec;

    async fn extract(&self) -> Result<Vec<SubjectSpec>> {
        Ok(self.subjects.clone())
    }

    async fn transform(&self, raw: Vec<SubjectSpec>) -> Result<Vec<CurriculumProgram>> {
        Ok(raw.iter().map(|spec| self.assemble(spec)).collect())
    }

    async fn load(&self, programs: Vec<CurriculumProgram>) -> Result<String> {
        write_catalog(&self.storage, &self.output_path, &programs).await
    }
}
