//! Curricular organizer recognition.
//!
//! Pages carrying one of the section markers are walked row by row; rows
//! with at least three cells feed category, subcategory and learning goal.
//! The three lists are filled independently and carry no positional
//! correspondence to one another.

use crate::domain::model::CurricularOrganizer;
use crate::pdf::tables;

const SECTION_MARKERS: [&str; 2] = ["ORGANIZADOR CURRICULAR", "CATEGORÍAS"];

pub fn recognize(pages: &[String]) -> CurricularOrganizer {
    let mut organizer = CurricularOrganizer::default();

    for text in pages {
        if !SECTION_MARKERS.iter().any(|marker| text.contains(marker)) {
            continue;
        }

        // The first full-width row on a page is the table header; narrow
        // rows are surrounding prose and never table content.
        let mut header_seen = false;
        for row in tables::rows(text) {
            if row.len() < 3 {
                continue;
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            push_non_empty(&mut organizer.categories, &row[0]);
            push_non_empty(&mut organizer.subcategories, &row[1]);
            push_non_empty(&mut organizer.learning_goals, &row[2]);
        }
    }

    organizer
}

fn push_non_empty(list: &mut Vec<String>, cell: &str) {
    let trimmed = cell.trim();
    if !trimmed.is_empty() {
        list.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_rows_feed_three_lists() {
        let page = "ORGANIZADOR CURRICULAR\n\
                    Categoría\tSubcategoría\tMetas de aprendizaje\n\
                    Procedural\tConteo\tElige una técnica de conteo\n\
                    Intuición\tIncertidumbre\tIdentifica la variabilidad";
        let organizer = recognize(&pages(&[page]));

        assert_eq!(organizer.categories, vec!["Procedural", "Intuición"]);
        assert_eq!(organizer.subcategories, vec!["Conteo", "Incertidumbre"]);
        assert_eq!(
            organizer.learning_goals,
            vec!["Elige una técnica de conteo", "Identifica la variabilidad"]
        );
    }

    #[test]
    fn test_pages_without_marker_are_skipped() {
        let page = "Texto introductorio\nuno\tdos\ttres";
        let organizer = recognize(&pages(&[page]));
        assert!(organizer.is_empty());
    }

    #[test]
    fn test_short_rows_ignored() {
        let page = "CATEGORÍAS\nencabezado\nsolo una celda\ndos\tceldas";
        let organizer = recognize(&pages(&[page]));
        assert!(organizer.is_empty());
    }

    #[test]
    fn test_empty_cells_not_appended() {
        // A continuation row: category cell empty, goal present.
        let page = "ORGANIZADOR CURRICULAR\n\
                    Categoría\tSubcategoría\tMetas\n\
                    \t\tMeta adicional al margen";
        let organizer = recognize(&pages(&[page]));

        assert!(organizer.categories.is_empty());
        assert!(organizer.subcategories.is_empty());
        assert_eq!(organizer.learning_goals, vec!["Meta adicional al margen"]);
    }

    #[test]
    fn test_lists_may_diverge_in_length() {
        let page = "CATEGORÍAS\n\
                    encabezado\tx\ty\n\
                    Cat A\tSub A\tMeta A\n\
                    Cat B\t\tMeta B";
        let organizer = recognize(&pages(&[page]));

        assert_eq!(organizer.categories.len(), 2);
        assert_eq!(organizer.subcategories.len(), 1);
        assert_eq!(organizer.learning_goals.len(), 2);
    }
}
