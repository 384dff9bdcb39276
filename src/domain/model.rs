use serde::{Deserialize, Serialize};

/// One curriculum program (UAC) as emitted in the output catalog.
///
/// JSON key names follow the official catalog format (`programas_sep.json`),
/// hence the Spanish renames. Only `materia` and `semestre` are guaranteed;
/// everything else may be empty or null when recognition fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumProgram {
    #[serde(rename = "materia")]
    pub subject: String,

    /// Semester 1-6, or 0 for transversal programs.
    #[serde(rename = "semestre")]
    pub semester: u8,

    pub metadata: ProgramMetadata,

    #[serde(rename = "organizador_curricular")]
    pub organizer: CurricularOrganizer,

    #[serde(rename = "progresiones")]
    pub progressions: Vec<ProgressionEntry>,

    #[serde(rename = "url_fuente", default, skip_serializing_if = "String::is_empty")]
    pub source_url: String,

    #[serde(rename = "fecha_extraccion")]
    pub extracted_at: String,
}

/// Cover-page metadata. Each field is independently optional because
/// recognition over the PDF text is best-effort.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramMetadata {
    #[serde(rename = "nombre_uac")]
    pub title: Option<String>,

    #[serde(rename = "semestre")]
    pub semester: Option<u8>,

    #[serde(rename = "creditos")]
    pub credits: Option<u32>,

    #[serde(rename = "horas_semanales")]
    pub weekly_hours: Option<u32>,
}

/// The category / subcategory / learning-goal structure of a program.
///
/// The three lists are populated independently from table cells; their
/// lengths need not match and no positional correspondence is implied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurricularOrganizer {
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,

    #[serde(rename = "subcategorias")]
    pub subcategories: Vec<String>,

    #[serde(rename = "metas_aprendizaje")]
    pub learning_goals: Vec<String>,
}

impl CurricularOrganizer {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.subcategories.is_empty() && self.learning_goals.is_empty()
    }
}

/// A numbered learning progression. The id comes straight from the numbered
/// marker in the source text and is not guaranteed unique or contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub id: u32,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "metas", default)]
    pub goals: Vec<String>,

    #[serde(rename = "tematicas", default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// Outcome of a single recognition routine, so that callers can tell
/// "pattern not present" apart from "routine errored out".
///
/// Both non-`Found` cases collapse to the empty default when the record is
/// assembled; `Failed` is additionally logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition<T> {
    Found(T),
    Missing,
    Failed(String),
}

impl<T> Recognition<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Recognition::Found(v) => Some(v),
            Recognition::Missing | Recognition::Failed(_) => None,
        }
    }

    /// Resolves to a value, logging the failure reason when the routine
    /// errored and falling back to `default` in every non-`Found` case.
    pub fn resolve_or(self, field: &str, default: T) -> T {
        match self {
            Recognition::Found(v) => v,
            Recognition::Missing => default,
            Recognition::Failed(reason) => {
                tracing::warn!("Recognition of {} failed: {}", field, reason);
                default
            }
        }
    }
}
