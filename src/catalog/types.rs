//! Catalog type definitions

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{AssessmentError, Result};

/// A single yes/no prompt with the gap it reveals when answered "no"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown to the user
    pub prompt: String,

    /// Missing capability surfaced as a recommendation on a "no" answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl Question {
    /// Create question with a gap description
    pub fn new(prompt: impl Into<String>, gap: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            gap: Some(gap.into()),
        }
    }

    /// Create question that never produces a recommendation
    pub fn without_gap(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            gap: None,
        }
    }
}

/// Named group of questions scored as one maturity dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Number of questions in this section
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sections: Vec<Section>,
}

/// Ordered, validated question catalog
///
/// Guarantees:
/// - at least one section
/// - every section has at least one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Build catalog, rejecting empty catalogs and empty sections
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(AssessmentError::EmptyCatalog);
        }

        if let Some(section) = sections.iter().find(|s| s.is_empty()) {
            return Err(AssessmentError::EmptySection {
                title: section.title.clone(),
            });
        }

        Ok(Self { sections })
    }

    /// Parse catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| AssessmentError::CatalogError(format!("Failed to parse catalog: {}", e)))?;
        Self::new(file.sections)
    }

    /// Load catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AssessmentError::CatalogError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            sections = catalog.len(),
            questions = catalog.total_questions(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get section by index
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Get question by (section, question) position
    pub fn question(&self, section: usize, question: usize) -> Option<&Question> {
        self.sections.get(section)?.questions.get(question)
    }

    /// Check if position addresses a question in this catalog
    pub fn contains(&self, section: usize, question: usize) -> bool {
        self.question(section, question).is_some()
    }

    /// Total number of questions across all sections
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Iterate sections in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// All sections in catalog order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
