//! Field recognition over extracted page text.
//!
//! Three independent best-effort routines: cover-page metadata, curricular
//! organizer tables and numbered learning progressions. Each routine catches
//! its own failures at the boundary and reports them through
//! [`Recognition`]; a failure in one never blocks the others.

pub mod header;
pub mod organizer;
pub mod progressions;

use crate::domain::model::{CurricularOrganizer, ProgramMetadata, ProgressionEntry, Recognition};
use crate::pdf::PdfDocument;

/// Zero-based page window holding the organizer tables. The official
/// programs place them between the fourth and seventh page.
const ORGANIZER_PAGES: (usize, usize) = (3, 7);

/// Zero-based page from which progression listings start.
const PROGRESSIONS_FROM: usize = 5;

/// Cover-page metadata: title line plus semester/credits/weekly-hours
/// numbers, all recognized from the first page only.
pub fn header_metadata(doc: &PdfDocument) -> Recognition<ProgramMetadata> {
    match doc.page_text(0) {
        Ok(Some(text)) => Recognition::Found(header::recognize(&text)),
        Ok(None) => Recognition::Missing,
        Err(e) => Recognition::Failed(e.to_string()),
    }
}

/// Organizer table contents from the fixed page window, clamped to the
/// document length.
pub fn curricular_organizer(doc: &PdfDocument) -> Recognition<CurricularOrganizer> {
    match doc.texts_in_range(ORGANIZER_PAGES.0, ORGANIZER_PAGES.1) {
        Ok(pages) => {
            let organizer = organizer::recognize(&pages);
            if organizer.is_empty() {
                Recognition::Missing
            } else {
                Recognition::Found(organizer)
            }
        }
        Err(e) => Recognition::Failed(e.to_string()),
    }
}

/// Numbered progressions from page six onward, concatenated in page order.
pub fn progression_entries(doc: &PdfDocument) -> Recognition<Vec<ProgressionEntry>> {
    match doc.texts_in_range(PROGRESSIONS_FROM, doc.page_count()) {
        Ok(pages) => {
            let entries = progressions::recognize(&pages);
            if entries.is_empty() {
                Recognition::Missing
            } else {
                Recognition::Found(entries)
            }
        }
        Err(e) => Recognition::Failed(e.to_string()),
    }
}
