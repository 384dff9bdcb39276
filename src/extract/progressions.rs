//! Numbered-progression recognition.
//!
//! Segments page text at numbered-list markers: a "N. " marker opens an
//! entry that runs until the next marker sitting right after a newline, or
//! the end of the page. Results from consecutive pages are concatenated as
//! is; a list spanning a page boundary is misparsed, and ids are taken
//! verbatim from the markers with no uniqueness guarantee.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::ProgressionEntry;

static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\.\s+").expect("marker pattern"));

// "Meta:", "Metas:", "Meta 3:" — goal statements embedded in a description.
static GOAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Metas?\s*\d*:?\s*([^\n]+)").expect("goal pattern"));

pub fn recognize(pages: &[String]) -> Vec<ProgressionEntry> {
    let mut entries = Vec::new();
    for text in pages {
        entries.extend(recognize_page(text));
    }
    entries
}

pub fn recognize_page(text: &str) -> Vec<ProgressionEntry> {
    // (description start, id) per accepted marker. The first marker may sit
    // anywhere; later ones count only when directly preceded by a newline,
    // so a stray "5." inside a sentence stays part of its description.
    let mut markers: Vec<(usize, usize, u32)> = Vec::new();
    for caps in MARKER.captures_iter(text) {
        let whole = caps.get(0).expect("whole match");
        if !markers.is_empty() && !text[..whole.start()].ends_with('\n') {
            continue;
        }
        let Ok(id) = caps[1].parse::<u32>() else {
            continue;
        };
        markers.push((whole.start(), whole.end(), id));
    }

    let mut entries = Vec::new();
    for (i, &(_, body_start, id)) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map_or(text.len(), |next| next.0);
        let description = text[body_start..body_end].trim();
        if description.is_empty() {
            continue;
        }

        let goals = GOAL
            .captures_iter(description)
            .map(|caps| caps[1].to_string())
            .collect();

        entries.push(ProgressionEntry {
            id,
            description: description.to_string(),
            goals,
            topics: None,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_entries_in_order() {
        let entries = recognize_page("1. Primera progresión.\n2. Segunda progresión.");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].description, "Primera progresión.");
        assert_eq!(entries[1].id, 2);
        assert_eq!(entries[1].description, "Segunda progresión.");
    }

    #[test]
    fn test_no_markers_yield_nothing() {
        assert!(recognize_page("Texto sin lista numerada alguna.").is_empty());
    }

    #[test]
    fn test_multiline_description() {
        let entries =
            recognize_page("3. Analiza datos categóricos\ny cuantitativos.\n4. Siguiente.");

        assert_eq!(entries[0].id, 3);
        assert_eq!(
            entries[0].description,
            "Analiza datos categóricos\ny cuantitativos."
        );
    }

    #[test]
    fn test_inline_number_is_not_a_boundary() {
        let entries = recognize_page("1. Aplica la progresión 2. del plan anterior.\n2. Otra.");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Aplica la progresión 2. del plan anterior.");
        assert_eq!(entries[1].id, 2);
    }

    #[test]
    fn test_ids_taken_verbatim() {
        // Non-contiguous and repeated markers are preserved as found.
        let entries = recognize_page("4. Cuarta.\n4. Repetida.\n9. Novena.");
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 4, 9]);
    }

    #[test]
    fn test_goals_extracted_from_description() {
        let entries = recognize_page(
            "1. Reconoce la variabilidad.\nMeta 1: Describe fenómenos aleatorios\nMeta 2: Usa simulaciones\n2. Otra progresión.",
        );

        assert_eq!(entries[0].goals.len(), 2);
        assert_eq!(entries[0].goals[0], "Describe fenómenos aleatorios");
        assert_eq!(entries[0].goals[1], "Usa simulaciones");
        assert!(entries[1].goals.is_empty());
    }

    #[test]
    fn test_pages_concatenated_without_merging() {
        let pages = vec![
            "14. Última de la página.".to_string(),
            "1. Primera de la siguiente.".to_string(),
        ];
        let entries = recognize(&pages);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 14);
        assert_eq!(entries[1].id, 1);
    }
}
