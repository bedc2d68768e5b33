use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{Question, QuestionKind};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Canonical form used for enumeration/identification comparison: internal
/// whitespace runs collapse to a single space, surrounding whitespace is
/// trimmed, everything is lowercased.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// Decide whether `submitted_text` answers `question` correctly.
///
/// Pure function of its inputs — no storage, no clock, no errors. Comparison
/// policy by variant:
/// - MCQ: the submitted value is one of the option strings verbatim; only
///   surrounding whitespace is forgiven, case matters.
/// - Enumeration / identification: both sides are normalized before
///   comparison, so the two variants grade identically.
/// - Unknown variants never grade correct.
pub fn grade(question: &Question, submitted_text: &str) -> bool {
    match &question.kind {
        QuestionKind::Mcq { correct_answer, .. } => {
            submitted_text.trim() == correct_answer.trim()
        }
        QuestionKind::Enumeration { correct_answer }
        | QuestionKind::Identification { correct_answer } => {
            normalize(submitted_text) == normalize(correct_answer)
        }
        QuestionKind::Unknown => false,
    }
}
