//! Assessment engine type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Response to a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    /// No response recorded
    #[default]
    Unanswered,
}

impl Answer {
    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn is_no(self) -> bool {
        matches!(self, Answer::No)
    }

    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    /// Label shown next to a question
    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Да",
            Answer::No => "Нет",
            Answer::Unanswered => "—",
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a question in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswerKey {
    pub section: usize,
    pub question: usize,
}

impl AnswerKey {
    pub fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Answers may be recorded
    Answering,
    /// Report generated, answers frozen
    Submitted,
}

/// Completion percentage of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    /// Section title
    pub name: String,

    /// Rounded percentage of "yes" answers (0 to 100)
    pub value: u8,
}

/// Yes/no counts over recorded answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,

    /// Catalog questions with no recorded answer
    pub unanswered: usize,
}

impl Tally {
    /// Number of recorded answers
    pub fn recorded(&self) -> usize {
        self.yes + self.no
    }
}
