//! Recommendation generation from explicit "no" answers

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::engine::types::{Answer, AnswerKey};

/// Marker glyph prefixed to every gap recommendation
pub const GAP_MARKER: &str = "🔸";

/// Returned when no gap was surfaced
pub const ALL_PRACTICES_PRESENT: &str =
    "✅ Все ключевые практики присутствуют. Проект демонстрирует высокий уровень зрелости.";

/// Format one recommendation line
pub fn format_recommendation(gap: &str, section_title: &str) -> String {
    format!(
        "{} Не хватает: {}. Это указывает на пробел в зрелости процесса ({}).",
        GAP_MARKER, gap, section_title
    )
}

/// Generate recommendations in catalog order
///
/// Only questions answered exactly `No` with a gap description produce a
/// line; unanswered questions are never flagged. Yields exactly one
/// fallback message when nothing was flagged.
pub fn generate(catalog: &Catalog, answers: &HashMap<AnswerKey, Answer>) -> Vec<String> {
    let mut recs: Vec<String> = catalog
        .iter()
        .enumerate()
        .flat_map(|(s, section)| {
            section
                .questions
                .iter()
                .enumerate()
                .filter(move |(q, _)| {
                    answers
                        .get(&AnswerKey::new(s, *q))
                        .is_some_and(|a| a.is_no())
                })
                .filter_map(move |(_, question)| {
                    question
                        .gap
                        .as_deref()
                        .map(|gap| format_recommendation(gap, &section.title))
                })
        })
        .collect();

    if recs.is_empty() {
        recs.push(ALL_PRACTICES_PRESENT.to_string());
    }

    recs
}
