//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::bank::QuestionBank;
use crate::core::curve::DifficultyCurve;
use crate::core::pool::QuestionPool;
use crate::core::question::Question;
use crate::core::sequencer::GameSequencer;

/// A question with placeholder text.
pub fn question(id: u32, correct_index: usize, difficulty: u8) -> Question {
    Question::new(
        id,
        format!("Question {id}?"),
        ["A", "B", "C", "D"].map(String::from),
        correct_index,
        difficulty,
    )
    .unwrap()
}

pub fn test_bank() -> QuestionBank {
    QuestionBank::standard().unwrap()
}

/// Pool over the standard bank with a fixed seed.
pub fn seeded_pool(seed: u64) -> QuestionPool {
    QuestionPool::new(Arc::new(test_bank()), StdRng::seed_from_u64(seed))
}

/// Pool over a two-question bank: one at level 4, one at level 1.
pub fn small_pool() -> QuestionPool {
    let bank = QuestionBank::from_questions(vec![question(1, 0, 4), question(2, 1, 1)]).unwrap();
    QuestionPool::new(Arc::new(bank), StdRng::seed_from_u64(0))
}

/// Sequencer over the standard bank, 15 questions to win.
pub fn test_sequencer(seed: u64) -> GameSequencer {
    GameSequencer::new(seeded_pool(seed), DifficultyCurve::default())
}

/// Select the correct option for the current question and reveal it.
pub fn answer_correctly(game: &mut GameSequencer) -> bool {
    let correct = game
        .state()
        .current_question
        .as_ref()
        .map(|q| q.correct_index())
        .unwrap();
    game.select_answer(correct);
    game.reveal()
}
