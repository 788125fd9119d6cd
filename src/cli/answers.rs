//! Answers file for non-interactive evaluation
//!
//! ```toml
//! [[answers]]
//! section = 1
//! question = 2
//! value = true
//! ```
//!
//! Indices are 1-based, as shown in the questionnaire.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::AssessmentSession;
use crate::errors::{AssessmentError, Result};

/// One recorded answer, 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub section: usize,
    pub question: usize,
    pub value: bool,
}

#[derive(Debug, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    answers: Vec<AnswerEntry>,
}

/// Parse answers TOML text
pub fn parse_answers(contents: &str) -> Result<Vec<AnswerEntry>> {
    let file: AnswersFile = toml::from_str(contents)
        .map_err(|e| AssessmentError::AnswersError(format!("Failed to parse answers: {}", e)))?;
    Ok(file.answers)
}

/// Load answers from a TOML file
pub fn load_answers(path: &Path) -> Result<Vec<AnswerEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AssessmentError::AnswersError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_answers(&contents)
}

/// Record entries into a session in file order (later entries win)
pub fn apply_answers(session: &mut AssessmentSession, entries: &[AnswerEntry]) -> Result<()> {
    for entry in entries {
        if entry.section == 0 || entry.question == 0 {
            return Err(AssessmentError::AnswersError(format!(
                "Positions are 1-based, got section {} question {}",
                entry.section, entry.question
            )));
        }
        session.record_answer(entry.section - 1, entry.question - 1, entry.value)?;
    }
    Ok(())
}
