//! Assessment engine
//!
//! Owns the answer set for one questionnaire run and exposes pure queries
//! over it: per-section scores, the overall yes/no tally and generated
//! recommendations. Derived values are recomputed on every call.
//!
//! Lifecycle: `Answering` -> `Submitted`. The transition is one-way; once
//! submitted, answers are frozen and every query returns the same result.

pub mod recommendations;
pub mod scoring;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::errors::{AssessmentError, Result};

pub use recommendations::{format_recommendation, ALL_PRACTICES_PRESENT, GAP_MARKER};
pub use types::{Answer, AnswerKey, SectionScore, SessionPhase, Tally};

/// One user's questionnaire run
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: Arc<Catalog>,
    answers: HashMap<AnswerKey, Answer>,
    phase: SessionPhase,
}

impl AssessmentSession {
    /// Create empty session over a catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            answers: HashMap::new(),
            phase: SessionPhase::Answering,
        }
    }

    /// Create empty session over the built-in catalog
    pub fn with_builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    /// Record a yes/no answer (last write wins)
    pub fn record_answer(&mut self, section: usize, question: usize, value: bool) -> Result<()> {
        self.record(section, question, Answer::from(value))
    }

    /// Record a tri-state answer; `Unanswered` clears any previous entry
    pub fn record(&mut self, section: usize, question: usize, answer: Answer) -> Result<()> {
        if self.phase == SessionPhase::Submitted {
            tracing::warn!(section, question, "answer rejected: session already submitted");
            return Err(AssessmentError::AlreadySubmitted);
        }

        if !self.catalog.contains(section, question) {
            return Err(AssessmentError::OutOfRange { section, question });
        }

        let key = AnswerKey::new(section, question);
        match answer {
            Answer::Unanswered => {
                self.answers.remove(&key);
            }
            recorded => {
                self.answers.insert(key, recorded);
            }
        }

        tracing::debug!(section, question, answer = ?answer, "answer recorded");
        Ok(())
    }

    /// Freeze answers and move to the submitted phase
    ///
    /// Returns false if the session was already submitted.
    pub fn submit(&mut self) -> bool {
        if self.phase == SessionPhase::Submitted {
            return false;
        }

        self.phase = SessionPhase::Submitted;
        tracing::debug!(
            answered = self.answers.len(),
            total = self.catalog.total_questions(),
            "assessment submitted"
        );
        true
    }

    /// Per-section completion percentages in catalog order
    pub fn section_scores(&self) -> Vec<SectionScore> {
        scoring::section_scores(&self.catalog, &self.answers)
    }

    /// Yes/no counts over recorded answers
    pub fn overall_tally(&self) -> Tally {
        scoring::overall_tally(&self.catalog, &self.answers)
    }

    /// Recommendation lines for explicit "no" answers, or the fallback
    pub fn recommendations(&self) -> Vec<String> {
        recommendations::generate(&self.catalog, &self.answers)
    }

    /// Current answer for a position (`Unanswered` if none or out of range)
    pub fn answer(&self, section: usize, question: usize) -> Answer {
        self.answers
            .get(&AnswerKey::new(section, question))
            .copied()
            .unwrap_or_default()
    }

    /// Number of recorded answers
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.total_questions()
    }

    /// Check if every catalog question has an answer
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.total_questions()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SessionPhase::Submitted
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared catalog handle, for starting a fresh session
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = AssessmentSession::with_builtin();
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.phase(), SessionPhase::Answering);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_record_and_overwrite() {
        let mut session = AssessmentSession::with_builtin();
        session.record_answer(0, 0, true).unwrap();
        assert_eq!(session.answer(0, 0), Answer::Yes);

        session.record_answer(0, 0, false).unwrap();
        assert_eq!(session.answer(0, 0), Answer::No);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_record_unanswered_clears() {
        let mut session = AssessmentSession::with_builtin();
        session.record_answer(1, 2, false).unwrap();
        session.record(1, 2, Answer::Unanswered).unwrap();
        assert_eq!(session.answer(1, 2), Answer::Unanswered);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut session = AssessmentSession::with_builtin();
        let err = session.record_answer(0, 6, true).unwrap_err();
        assert!(matches!(err, AssessmentError::OutOfRange { section: 0, question: 6 }));

        let err = session.record_answer(4, 0, true).unwrap_err();
        assert!(matches!(err, AssessmentError::OutOfRange { section: 4, question: 0 }));
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_submit_is_one_way() {
        let mut session = AssessmentSession::with_builtin();
        assert!(session.submit());
        assert!(session.is_submitted());
        assert!(!session.submit());
        assert!(session.is_submitted());
    }

    #[test]
    fn test_record_after_submit_rejected() {
        let mut session = AssessmentSession::with_builtin();
        session.record_answer(0, 0, true).unwrap();
        session.submit();

        let before = session.section_scores();
        let err = session.record_answer(0, 1, true).unwrap_err();
        assert!(matches!(err, AssessmentError::AlreadySubmitted));
        assert_eq!(session.section_scores(), before);
        assert_eq!(session.answer(0, 1), Answer::Unanswered);
    }

    #[test]
    fn test_empty_session_outputs() {
        let session = AssessmentSession::with_builtin();
        assert!(session.section_scores().iter().all(|s| s.value == 0));

        let tally = session.overall_tally();
        assert_eq!((tally.yes, tally.no), (0, 0));
        assert_eq!(tally.unanswered, 31);

        assert_eq!(session.recommendations(), vec![ALL_PRACTICES_PRESENT.to_string()]);
    }

    #[test]
    fn test_full_section_scores_100() {
        let mut session = AssessmentSession::with_builtin();
        for q in 0..6 {
            session.record_answer(0, q, true).unwrap();
        }
        assert_eq!(session.section_scores()[0].value, 100);
    }

    #[test]
    fn test_unanswered_not_recommended() {
        let mut session = AssessmentSession::with_builtin();
        session.record_answer(2, 3, false).unwrap();

        let recs = session.recommendations();
        assert_eq!(recs.len(), 1);
        assert_eq!(
            recs[0],
            "🔸 Не хватает: покрытия требований тестами. Это указывает на пробел в зрелости процесса (Квалификация команды тестирования)."
        );
    }

    #[test]
    fn test_is_complete() {
        let mut session = AssessmentSession::with_builtin();
        let positions: Vec<(usize, usize)> = session
            .catalog()
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.len()).map(move |q| (s, q)))
            .collect();

        for (s, q) in positions {
            session.record_answer(s, q, true).unwrap();
        }
        assert!(session.is_complete());
        assert!(session.section_scores().iter().all(|s| s.value == 100));
    }
}
