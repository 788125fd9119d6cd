//! Section scores and overall tally

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::engine::types::{Answer, AnswerKey, SectionScore, Tally};

/// Rounded percentage `part / total`, half away from zero
///
/// Integer arithmetic keeps exact halves exact: 1/8 -> 13, 2/3 -> 67.
/// `total` must be non-zero; catalog sections are never empty.
pub fn percentage(part: usize, total: usize) -> u8 {
    debug_assert!(total > 0, "percentage of an empty section");
    debug_assert!(part <= total);
    ((200 * part + total) / (2 * total)) as u8
}

/// Score every section in catalog order
pub fn section_scores(catalog: &Catalog, answers: &HashMap<AnswerKey, Answer>) -> Vec<SectionScore> {
    catalog
        .iter()
        .enumerate()
        .map(|(s, section)| {
            let yes = (0..section.len())
                .filter(|&q| {
                    answers
                        .get(&AnswerKey::new(s, q))
                        .is_some_and(|a| a.is_yes())
                })
                .count();

            SectionScore {
                name: section.title.clone(),
                value: percentage(yes, section.len()),
            }
        })
        .collect()
}

/// Count recorded yes/no answers across all sections
pub fn overall_tally(catalog: &Catalog, answers: &HashMap<AnswerKey, Answer>) -> Tally {
    let yes = answers.values().filter(|a| a.is_yes()).count();
    let no = answers.values().filter(|a| a.is_no()).count();

    Tally {
        yes,
        no,
        unanswered: catalog.total_questions().saturating_sub(yes + no),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Question, Section};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Section::new(
                "Процессы",
                vec![
                    Question::new("1?", "g1"),
                    Question::new("2?", "g2"),
                    Question::new("3?", "g3"),
                ],
            ),
            Section::new("Риски", vec![Question::new("r?", "gr")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(7, 7), 100);
    }

    #[test]
    fn test_section_scores_two_of_three() {
        let mut answers = HashMap::new();
        answers.insert(AnswerKey::new(0, 0), Answer::Yes);
        answers.insert(AnswerKey::new(0, 1), Answer::No);
        answers.insert(AnswerKey::new(0, 2), Answer::Yes);

        let scores = section_scores(&catalog(), &answers);
        assert_eq!(scores[0].name, "Процессы");
        assert_eq!(scores[0].value, 67);
        assert_eq!(scores[1].value, 0);
    }

    #[test]
    fn test_tally_counts_only_recorded() {
        let mut answers = HashMap::new();
        answers.insert(AnswerKey::new(0, 0), Answer::Yes);
        answers.insert(AnswerKey::new(1, 0), Answer::No);

        let tally = overall_tally(&catalog(), &answers);
        assert_eq!(tally, Tally { yes: 1, no: 1, unanswered: 2 });
    }
}
