//! # Question Pool
//!
//! The working set of questions for one game. Starts as a full copy of the
//! bank and shrinks as questions are consumed.
//!
//! Drawing and removing are separate steps: `draw` only picks, `remove`
//! commits. `take` does both for the common case.
//!
//! The random source is injected so tests can seed it.

use std::sync::Arc;

use log::debug;
use rand::RngCore;
use rand::seq::SliceRandom;

use super::bank::QuestionBank;
use super::question::{Question, QuestionId};

pub struct QuestionPool {
    bank: Arc<QuestionBank>,
    remaining: Vec<Question>,
    rng: Box<dyn RngCore + Send>,
}

impl QuestionPool {
    /// Create a pool holding every question of `bank`.
    pub fn new(bank: Arc<QuestionBank>, rng: impl RngCore + Send + 'static) -> Self {
        let remaining = bank.questions().to_vec();
        Self {
            bank,
            remaining,
            rng: Box::new(rng),
        }
    }

    /// Pick a random remaining question at `difficulty` without removing it.
    pub fn draw(&mut self, difficulty: u8) -> Option<Question> {
        let candidates: Vec<&Question> = self
            .remaining
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .collect();
        let chosen = candidates.choose(&mut *self.rng).map(|q| (*q).clone());
        debug!(
            "Pool draw at difficulty {}: {} candidates, chose {:?}",
            difficulty,
            candidates.len(),
            chosen.as_ref().map(Question::id)
        );
        chosen
    }

    /// Drop the question with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: QuestionId) {
        self.remaining.retain(|q| q.id() != id);
    }

    /// Draw and remove in one step.
    pub fn take(&mut self, difficulty: u8) -> Option<Question> {
        let question = self.draw(difficulty)?;
        self.remove(question.id());
        Some(question)
    }

    /// Restore the pool to a full copy of the bank.
    pub fn reset(&mut self) {
        self.remaining = self.bank.questions().to_vec();
        debug!("Pool reset to {} questions", self.remaining.len());
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn remaining_at(&self, difficulty: u8) -> usize {
        self.remaining
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .count()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.remaining.iter().any(|q| q.id() == id)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}
