//! Cover-page recognition.
//!
//! The patterns mirror the layout of the official program PDFs. Policy is
//! first match wins, not best match: an ambiguous cover page can yield a
//! wrong number, and that is accepted rather than second-guessed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::ProgramMetadata;

// The UAC name is usually an uppercase line containing one of the subject
// area keywords. Deliberately case-sensitive.
static TITLE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(PENSAMIENTO|MATEMÁTICO|LENGUA|COMUNICACIÓN|CULTURA)").expect("title pattern")
});

static SEMESTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SEMESTRE\s*(\d+)").expect("semester pattern"));

static CREDITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CRÉDITOS?:?\s*(\d+)").expect("credits pattern"));

static WEEKLY_HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)HORAS?\s+SEMANALES?:?\s*(\d+)").expect("hours pattern"));

pub fn recognize(first_page: &str) -> ProgramMetadata {
    let title = first_page
        .lines()
        .find(|line| TITLE_KEYWORDS.is_match(line))
        .map(|line| line.trim().to_string());

    ProgramMetadata {
        title,
        semester: first_number(&SEMESTER, first_page),
        credits: first_number(&CREDITS, first_page),
        weekly_hours: first_number(&WEEKLY_HOURS, first_page),
    }
}

fn first_number<T: std::str::FromStr>(pattern: &Regex, text: &str) -> Option<T> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_recognized() {
        let meta = recognize("PROGRAMA DE ESTUDIO\nSEMESTRE 3\n");
        assert_eq!(meta.semester, Some(3));
    }

    #[test]
    fn test_semester_unset_when_absent() {
        let meta = recognize("PROGRAMA DE ESTUDIO\nsin numeración\n");
        assert_eq!(meta.semester, None);
    }

    #[test]
    fn test_first_match_wins() {
        // Two plausible matches; the first one is taken even if wrong.
        let meta = recognize("SEMESTRE 2\nTercer periodo, SEMESTRE 3\n");
        assert_eq!(meta.semester, Some(2));
    }

    #[test]
    fn test_credits_and_hours() {
        let meta = recognize("CRÉDITOS: 8\nHORAS SEMANALES: 4\n");
        assert_eq!(meta.credits, Some(8));
        assert_eq!(meta.weekly_hours, Some(4));

        // Case-insensitive, singular, no colon.
        let meta = recognize("Crédito 6 con 3 hora semanal");
        assert_eq!(meta.credits, Some(6));
        assert_eq!(meta.weekly_hours, Some(3));
    }

    #[test]
    fn test_title_line() {
        let page = "Dirección General del Bachillerato\nPENSAMIENTO MATEMÁTICO I\nSEMESTRE 1";
        let meta = recognize(page);
        assert_eq!(meta.title.as_deref(), Some("PENSAMIENTO MATEMÁTICO I"));
    }

    #[test]
    fn test_title_keywords_are_case_sensitive() {
        let meta = recognize("pensamiento matemático en minúsculas\n");
        assert_eq!(meta.title, None);
    }
}
