//! Questionnaire state for the REPL
//!
//! Wraps an [`AssessmentSession`] with a cursor on the question currently
//! shown to the user. The cursor walks the catalog in order; `None` means
//! the user has moved past the last question.

use std::sync::Arc;

use crate::catalog::{Catalog, Question, Section};
use crate::engine::{Answer, AnswerKey, AssessmentSession};
use crate::errors::{AssessmentError, Result};

/// Question currently under the cursor
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    pub key: AnswerKey,
    pub section: &'a Section,
    pub question: &'a Question,
    pub answer: Answer,
}

/// Session manager maintaining REPL questionnaire state
pub struct SessionManager {
    assessment: AssessmentSession,
    cursor: Option<AnswerKey>,
}

impl SessionManager {
    /// Create manager over a catalog, cursor on the first question
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::from_assessment(AssessmentSession::new(catalog))
    }

    /// Wrap an existing assessment session
    pub fn from_assessment(assessment: AssessmentSession) -> Self {
        let cursor = if assessment.total_questions() > 0 {
            Some(AnswerKey::new(0, 0))
        } else {
            None
        };
        Self { assessment, cursor }
    }

    pub fn assessment(&self) -> &AssessmentSession {
        &self.assessment
    }

    pub fn catalog(&self) -> &Catalog {
        self.assessment.catalog()
    }

    /// Cursor position (0-based)
    pub fn cursor(&self) -> Option<AnswerKey> {
        self.cursor
    }

    /// Question under the cursor
    pub fn current(&self) -> Option<CurrentQuestion<'_>> {
        let key = self.cursor?;
        let section = self.catalog().section(key.section)?;
        let question = section.questions.get(key.question)?;
        Some(CurrentQuestion {
            key,
            section,
            question,
            answer: self.assessment.answer(key.section, key.question),
        })
    }

    /// Answer the current question and advance
    pub fn answer_current(&mut self, answer: Answer) -> Result<AnswerKey> {
        if self.assessment.is_submitted() {
            return Err(AssessmentError::AlreadySubmitted);
        }
        let key = self.cursor.ok_or_else(|| {
            AssessmentError::Generic("No current question; use /goto or /submit".to_string())
        })?;
        self.assessment.record(key.section, key.question, answer)?;
        self.advance();
        Ok(key)
    }

    /// Clear the answer of the current question
    pub fn clear_current(&mut self) -> Result<Option<AnswerKey>> {
        match self.cursor {
            Some(key) => {
                self.assessment.record(key.section, key.question, Answer::Unanswered)?;
                Ok(Some(key))
            }
            None => Ok(None),
        }
    }

    /// Move to the next question; past the last one the cursor becomes `None`
    pub fn advance(&mut self) {
        self.cursor = self.cursor.and_then(|key| self.next_key(key));
    }

    /// Move to the previous question; from `None` goes to the last question
    pub fn back(&mut self) {
        self.cursor = match self.cursor {
            Some(key) => Some(self.prev_key(key).unwrap_or(key)),
            None => self.last_key(),
        };
    }

    /// Jump to a 1-based position
    pub fn goto(&mut self, section: usize, question: usize) -> Result<AnswerKey> {
        if section == 0 || question == 0 {
            return Err(AssessmentError::Generic(format!(
                "Positions are 1-based, got {}.{}",
                section, question
            )));
        }

        let key = AnswerKey::new(section - 1, question - 1);
        if !self.catalog().contains(key.section, key.question) {
            return Err(AssessmentError::OutOfRange {
                section: key.section,
                question: key.question,
            });
        }
        self.cursor = Some(key);
        Ok(key)
    }

    /// Jump to the first unanswered question, if any
    pub fn next_unanswered(&mut self) -> Option<AnswerKey> {
        let found = self.positions().find(|k| {
            !self
                .assessment
                .answer(k.section, k.question)
                .is_answered()
        });
        if found.is_some() {
            self.cursor = found;
        }
        found
    }

    /// Submit the assessment
    pub fn submit(&mut self) -> bool {
        let submitted = self.assessment.submit();
        if submitted {
            self.cursor = None;
        }
        submitted
    }

    pub fn is_submitted(&self) -> bool {
        self.assessment.is_submitted()
    }

    /// Start over with an empty assessment over the same catalog
    pub fn reset(&mut self) {
        *self = Self::new(self.assessment.catalog_handle());
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (
            self.assessment.answered_count(),
            self.assessment.total_questions(),
        )
    }

    fn positions(&self) -> impl Iterator<Item = AnswerKey> + '_ {
        self.catalog()
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.len()).map(move |q| AnswerKey::new(s, q)))
    }

    fn next_key(&self, key: AnswerKey) -> Option<AnswerKey> {
        let section = self.catalog().section(key.section)?;
        if key.question + 1 < section.len() {
            Some(AnswerKey::new(key.section, key.question + 1))
        } else if key.section + 1 < self.catalog().len() {
            Some(AnswerKey::new(key.section + 1, 0))
        } else {
            None
        }
    }

    fn prev_key(&self, key: AnswerKey) -> Option<AnswerKey> {
        if key.question > 0 {
            Some(AnswerKey::new(key.section, key.question - 1))
        } else if key.section > 0 {
            let prev = self.catalog().section(key.section - 1)?;
            Some(AnswerKey::new(key.section - 1, prev.len() - 1))
        } else {
            None
        }
    }

    fn last_key(&self) -> Option<AnswerKey> {
        let last = self.catalog().len().checked_sub(1)?;
        let section = self.catalog().section(last)?;
        Some(AnswerKey::new(last, section.len() - 1))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
