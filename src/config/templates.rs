//! Program templates for the static-catalog variant.
//!
//! Subjects without a scrapeable source get a record generated from a
//! per-area template: fixed organizer content plus progression skeletons
//! with the subject name interpolated. Unknown area tags fall back to the
//! default template instead of failing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::{CurricularOrganizer, ProgressionEntry};
use crate::utils::error::Result;

/// Placeholder replaced by the subject name when a template is applied.
const NAME_PLACEHOLDER: &str = "{materia}";

/// One subject to generate: name, area tag and cover-page numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSpec {
    pub name: String,
    pub area: String,
    pub semester: u8,
    pub credits: u32,
    pub weekly_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramTemplate {
    pub categories: Vec<String>,
    pub learning_goals: Vec<String>,
    pub progressions: Vec<TemplateProgression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateProgression {
    pub description: String,
    pub topics: Vec<String>,
}

/// TOML wrapper for a subject list file (`[[subjects]]` entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectList {
    pub subjects: Vec<SubjectSpec>,
}

impl SubjectList {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let list: SubjectList = toml::from_str(&raw)?;
        Ok(list)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    pub areas: BTreeMap<String, ProgramTemplate>,
    pub default: ProgramTemplate,
}

impl TemplateSet {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let set: TemplateSet = toml::from_str(&raw)?;
        Ok(set)
    }

    /// The template for `area`, or the default one when the tag is unknown.
    pub fn for_area(&self, area: &str) -> &ProgramTemplate {
        self.areas.get(area).unwrap_or(&self.default)
    }

    pub fn builtin() -> Self {
        let mut areas = BTreeMap::new();

        areas.insert(
            "matematicas".to_string(),
            ProgramTemplate {
                categories: vec![
                    "Procedural".to_string(),
                    "Procesos de intuición y razonamiento".to_string(),
                ],
                learning_goals: vec![
                    format!("Desarrollar el razonamiento matemático a través de {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![
                    TemplateProgression {
                        description: format!("Bases y fundamentos de {}.", NAME_PLACEHOLDER),
                        topics: vec!["Fundamentos".to_string()],
                    },
                    TemplateProgression {
                        description: format!(
                            "Análisis y aplicación de los principios de {} en contextos reales.",
                            NAME_PLACEHOLDER
                        ),
                        topics: vec!["Aplicaciones".to_string(), "Análisis".to_string()],
                    },
                ],
            },
        );

        areas.insert(
            "comunicacion".to_string(),
            ProgramTemplate {
                categories: vec![
                    "Atender y entender".to_string(),
                    "La exploración del mundo a través de la lectura".to_string(),
                ],
                learning_goals: vec![
                    format!("Fortalecer la expresión oral y escrita mediante {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![
                    TemplateProgression {
                        description: format!(
                            "Inicio de la exploración de los conceptos base de {}.",
                            NAME_PLACEHOLDER
                        ),
                        topics: vec!["Introducción".to_string(), "Conceptos básicos".to_string()],
                    },
                    TemplateProgression {
                        description: format!("Composición de textos propios de {}.", NAME_PLACEHOLDER),
                        topics: vec!["Composición de textos".to_string()],
                    },
                ],
            },
        );

        areas.insert(
            "digital".to_string(),
            ProgramTemplate {
                categories: vec![
                    "Ciudadanía digital".to_string(),
                    "Herramientas digitales".to_string(),
                ],
                learning_goals: vec![
                    format!("Usar herramientas digitales con responsabilidad en {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![
                    TemplateProgression {
                        description: format!("Fundamentos digitales de {}.", NAME_PLACEHOLDER),
                        topics: vec!["Herramientas de productividad".to_string()],
                    },
                    TemplateProgression {
                        description: format!(
                            "Pensamiento computacional aplicado a {}.",
                            NAME_PLACEHOLDER
                        ),
                        topics: vec!["Algoritmos".to_string(), "Resolución de problemas".to_string()],
                    },
                ],
            },
        );

        areas.insert(
            "humanidades".to_string(),
            ProgramTemplate {
                categories: vec!["Experiencia de sí".to_string(), "Vivir aquí y ahora".to_string()],
                learning_goals: vec![
                    format!("Cuestionar la propia experiencia desde {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![TemplateProgression {
                    description: format!("Exploración filosófica de {}.", NAME_PLACEHOLDER),
                    topics: vec!["El cuestionamiento".to_string()],
                }],
            },
        );

        areas.insert(
            "sociales".to_string(),
            ProgramTemplate {
                categories: vec![
                    "El Estado y los agentes sociales".to_string(),
                    "Organización social".to_string(),
                ],
                learning_goals: vec![
                    format!("Analizar fenómenos sociales a través de {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![TemplateProgression {
                    description: format!("Análisis social desde {}.", NAME_PLACEHOLDER),
                    topics: vec!["Agentes sociales".to_string()],
                }],
            },
        );

        areas.insert(
            "naturales".to_string(),
            ProgramTemplate {
                categories: vec![
                    "La materia y sus interacciones".to_string(),
                    "Experimentación".to_string(),
                ],
                learning_goals: vec![
                    format!("Explicar fenómenos naturales mediante {}.", NAME_PLACEHOLDER),
                ],
                progressions: vec![TemplateProgression {
                    description: format!("Fenómenos y procesos centrales de {}.", NAME_PLACEHOLDER),
                    topics: vec!["Indagación científica".to_string()],
                }],
            },
        );

        let default = ProgramTemplate {
            categories: vec!["Contenido Central".to_string(), "Prácticas sugeridas".to_string()],
            learning_goals: vec![
                "Desarrollar comprensión profunda de los temas curriculares.".to_string(),
            ],
            progressions: vec![
                TemplateProgression {
                    description: format!(
                        "Inicio de la exploración de los conceptos base de {}.",
                        NAME_PLACEHOLDER
                    ),
                    topics: vec!["Introducción".to_string(), "Conceptos básicos".to_string()],
                },
                TemplateProgression {
                    description: format!(
                        "Análisis y aplicación de los principios fundamentales de {} en contextos reales.",
                        NAME_PLACEHOLDER
                    ),
                    topics: vec!["Aplicaciones".to_string(), "Análisis".to_string()],
                },
            ],
        };

        TemplateSet { areas, default }
    }
}

impl ProgramTemplate {
    /// Materializes the template for one subject, interpolating its name.
    pub fn instantiate(&self, subject_name: &str) -> (CurricularOrganizer, Vec<ProgressionEntry>) {
        let fill = |text: &str| text.replace(NAME_PLACEHOLDER, subject_name);

        let organizer = CurricularOrganizer {
            categories: self.categories.iter().map(|c| fill(c)).collect(),
            subcategories: Vec::new(),
            learning_goals: self.learning_goals.iter().map(|g| fill(g)).collect(),
        };

        let progressions = self
            .progressions
            .iter()
            .enumerate()
            .map(|(i, template)| ProgressionEntry {
                id: (i + 1) as u32,
                description: fill(&template.description),
                goals: Vec::new(),
                topics: Some(template.topics.clone()),
            })
            .collect();

        (organizer, progressions)
    }
}

/// Builtin subject list for the static variant: the catalog entries that
/// have no scrapeable program document yet.
pub fn builtin_subjects() -> Vec<SubjectSpec> {
    let subjects = [
        ("Ciencias Sociales I", "sociales", 1, 4, 2),
        ("Pensamiento Matemático II", "matematicas", 2, 8, 4),
        ("Lengua y Comunicación II", "comunicacion", 2, 6, 3),
        ("Cultura Digital II", "digital", 2, 4, 2),
        ("Humanidades II", "humanidades", 2, 6, 3),
        ("Ciencias Sociales II", "sociales", 2, 4, 2),
        ("Ecosistemas, interacciones, energía y dinámica CNEYT III", "naturales", 3, 8, 4),
        ("Humanidades III", "humanidades", 3, 6, 3),
        ("Lengua y Comunicación III", "comunicacion", 3, 6, 3),
        ("Pensamiento Matemático III", "matematicas", 3, 8, 4),
        ("Conciencia Histórica I", "sociales", 4, 4, 2),
        ("Reacciones químicas: conservación de la materia CNEYT IV", "naturales", 4, 8, 4),
        ("Temas Selectos de Matemáticas I", "matematicas", 5, 4, 3),
        ("Pensamiento Literario", "comunicacion", 5, 4, 3),
        ("Taller de Cultura Digital", "digital", 5, 4, 3),
        // Extended-curriculum subjects without an area template of their own.
        ("Derecho y Sociedad I", "derecho", 5, 4, 3),
        ("Fundamentos de Administración I", "administracion", 5, 4, 3),
        ("Salud Integral I", "salud", 5, 4, 3),
    ];

    subjects
        .into_iter()
        .map(|(name, area, semester, credits, weekly_hours)| SubjectSpec {
            name: name.to_string(),
            area: area.to_string(),
            semester,
            credits,
            weekly_hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_area_falls_back_to_default() {
        let set = TemplateSet::builtin();
        let template = set.for_area("astronomia");
        assert_eq!(template.categories, set.default.categories);
        assert!(!template.categories.is_empty());
    }

    #[test]
    fn test_instantiate_interpolates_subject_name() {
        let set = TemplateSet::builtin();
        let (organizer, progressions) = set.for_area("matematicas").instantiate("Temas Selectos");

        assert!(organizer.learning_goals[0].contains("Temas Selectos"));
        assert!(progressions[0].description.contains("Temas Selectos"));
        assert_eq!(progressions[0].id, 1);
        assert_eq!(progressions[1].id, 2);
        assert!(progressions[0].topics.is_some());
    }

    #[test]
    fn test_builtin_subjects_reference_known_and_unknown_areas() {
        let set = TemplateSet::builtin();
        let subjects = builtin_subjects();
        assert!(subjects.iter().any(|s| set.areas.contains_key(&s.area)));
        assert!(subjects.iter().any(|s| !set.areas.contains_key(&s.area)));
    }
}
