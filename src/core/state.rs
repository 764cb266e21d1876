//! # Game State
//!
//! The snapshot the presentation layer renders from. Only the sequencer
//! mutates it; everyone else gets `&GameState`.
//!
//! ```text
//! GameState
//! ├── player_name: String            // empty while waiting
//! ├── current_question: Option       // None outside of play
//! ├── question_number: u32           // 1-based ordinal, 0 while waiting
//! ├── selected_answer: Option<usize> // chosen option before reveal
//! ├── answer_revealed: bool
//! ├── is_correct: Option<bool>       // None until revealed
//! ├── status: GameStatus             // waiting → playing → finished
//! ├── score: u32                     // +1 per correct answer
//! └── has_won: bool
//! ```

use super::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Waiting,
    Playing,
    Finished,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub player_name: String,
    pub current_question: Option<Question>,
    pub question_number: u32,
    pub selected_answer: Option<usize>,
    pub answer_revealed: bool,
    pub is_correct: Option<bool>,
    pub status: GameStatus,
    pub score: u32,
    pub has_won: bool,
}

impl GameState {
    /// Questions still to answer after the current one.
    pub fn questions_remaining(&self, questions_to_win: u32) -> u32 {
        questions_to_win.saturating_sub(self.question_number)
    }

    /// Clear per-question fields ahead of showing `question`.
    pub(crate) fn show_question(&mut self, question: Question, number: u32) {
        self.current_question = Some(question);
        self.question_number = number;
        self.selected_answer = None;
        self.answer_revealed = false;
        self.is_correct = None;
    }
}
