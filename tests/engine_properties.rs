//! Property tests for the assessment engine over the built-in catalog

use maturity::engine::ALL_PRACTICES_PRESENT;
use maturity::{AssessmentSession, Catalog};
use quickcheck_macros::quickcheck;

/// Map arbitrary triples onto valid catalog positions and record them
fn session_from(raw: &[(u8, u8, bool)]) -> AssessmentSession {
    let catalog = Catalog::builtin();
    let mut session = AssessmentSession::new(catalog.clone());
    for &(s, q, value) in raw {
        let s = s as usize % catalog.len();
        let q = q as usize % catalog.section(s).unwrap().len();
        session.record_answer(s, q, value).unwrap();
    }
    session
}

#[quickcheck]
fn scores_stay_within_bounds(raw: Vec<(u8, u8, bool)>) -> bool {
    session_from(&raw)
        .section_scores()
        .iter()
        .all(|score| score.value <= 100)
}

#[quickcheck]
fn tally_counts_recorded_answers(raw: Vec<(u8, u8, bool)>) -> bool {
    let session = session_from(&raw);
    let tally = session.overall_tally();
    tally.yes + tally.no == session.answered_count()
        && tally.unanswered == session.total_questions() - session.answered_count()
}

#[quickcheck]
fn one_recommendation_per_explicit_no(raw: Vec<(u8, u8, bool)>) -> bool {
    let session = session_from(&raw);
    let no_count = session.overall_tally().no;
    let recs = session.recommendations();

    if no_count == 0 {
        recs == vec![ALL_PRACTICES_PRESENT.to_string()]
    } else {
        // Every built-in question has a gap description
        recs.len() == no_count && recs.iter().all(|r| r.starts_with("🔸"))
    }
}

#[quickcheck]
fn out_of_range_never_mutates(section: usize, question: usize, value: bool) -> bool {
    let mut session = AssessmentSession::with_builtin();
    let in_range = session.catalog().contains(section, question);
    let result = session.record_answer(section, question, value);

    if in_range {
        result.is_ok() && session.answered_count() == 1
    } else {
        result.is_err() && session.answered_count() == 0
    }
}

#[quickcheck]
fn submit_freezes_every_view(raw: Vec<(u8, u8, bool)>, late: Vec<(u8, u8, bool)>) -> bool {
    let mut session = session_from(&raw);
    session.submit();

    let scores = session.section_scores();
    let tally = session.overall_tally();
    let recs = session.recommendations();

    for (s, q, value) in late {
        let _ = session.record_answer(s as usize % 4, q as usize % 6, value);
    }

    session.section_scores() == scores
        && session.overall_tally() == tally
        && session.recommendations() == recs
}
