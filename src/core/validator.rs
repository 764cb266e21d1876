//! Answer checking.

use super::question::Question;

/// True when `selected` is the question's correct option.
///
/// No bounds check: an index past the last option is simply not equal to
/// the correct one and yields `false`.
pub fn is_correct(question: &Question, selected: usize) -> bool {
    question.correct_index() == selected
}
