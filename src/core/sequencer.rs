//! # Game Sequencer
//!
//! Turn-by-turn state machine tying pool, curve and validator together.
//!
//! ```text
//!            start(name)               advance() after a miss,
//! waiting ───────────────▶ playing ───────────────────────────▶ finished
//!    ▲                      │  ▲     past the last question,
//!    │                      │  │     or no question left at the level
//!    │                      └──┘
//!    │     select / reveal / advance to next question
//!    │
//!    └──────────────────── return_to_menu() ◀───────────────── (any)
//! ```
//!
//! Every call resolves to a defined state. Out-of-sequence calls are no-ops.

use log::{debug, info, warn};

use super::curve::DifficultyCurve;
use super::pool::QuestionPool;
use super::state::{GameState, GameStatus};
use super::validator;

pub struct GameSequencer {
    pool: QuestionPool,
    curve: DifficultyCurve,
    state: GameState,
}

impl GameSequencer {
    pub fn new(pool: QuestionPool, curve: DifficultyCurve) -> Self {
        Self {
            pool,
            curve,
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn questions_to_win(&self) -> u32 {
        self.curve.questions_to_win()
    }

    pub fn remaining_in_pool(&self) -> usize {
        self.pool.remaining_count()
    }

    /// Begin a new game for `player_name` with a full pool.
    ///
    /// If the pool has nothing at the first level the game ends immediately
    /// as a loss with no question shown.
    pub fn start(&mut self, player_name: impl Into<String>) {
        self.pool.reset();
        let player_name = player_name.into();
        let difficulty = self.curve.level(1);

        self.state = GameState {
            player_name,
            question_number: 1,
            status: GameStatus::Playing,
            ..Default::default()
        };

        match self.pool.take(difficulty) {
            Some(question) => {
                info!(
                    "Game started for '{}': question 1 (id={}, difficulty={})",
                    self.state.player_name,
                    question.id(),
                    difficulty
                );
                self.state.show_question(question, 1);
            }
            None => {
                warn!(
                    "No question available at difficulty {} on start; finishing game",
                    difficulty
                );
                self.state.status = GameStatus::Finished;
                self.state.has_won = false;
            }
        }
    }

    /// Record the chosen option. Ignored once the answer is revealed.
    pub fn select_answer(&mut self, index: usize) {
        if self.state.status != GameStatus::Playing || self.state.answer_revealed {
            debug!("select_answer({}) ignored in {}", index, self.state.status.label());
            return;
        }
        self.state.selected_answer = Some(index);
    }

    /// Check the selected option and score it. Returns whether it was correct.
    ///
    /// Without a question or a selection this returns `false` and changes
    /// nothing. Revealing twice returns the stored result without re-scoring.
    pub fn reveal(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }
        if self.state.answer_revealed {
            return self.state.is_correct.unwrap_or(false);
        }
        let (Some(question), Some(selected)) =
            (self.state.current_question.as_ref(), self.state.selected_answer)
        else {
            debug!("reveal ignored: no question or no selection");
            return false;
        };

        let correct = validator::is_correct(question, selected);
        info!(
            "Question {} (id={}) answered {}: selected {}, correct {}",
            self.state.question_number,
            question.id(),
            if correct { "correctly" } else { "wrongly" },
            selected,
            question.correct_index()
        );

        self.state.answer_revealed = true;
        self.state.is_correct = Some(correct);
        if correct {
            self.state.score += 1;
        }
        correct
    }

    /// Move past a revealed answer: finish on a miss, on the last question,
    /// or when the pool has nothing left at the next level; otherwise show
    /// the next question.
    pub fn advance(&mut self) {
        if self.state.status != GameStatus::Playing || !self.state.answer_revealed {
            debug!("advance ignored: status {:?}, revealed {}", self.state.status, self.state.answer_revealed);
            return;
        }

        if self.state.is_correct == Some(false) {
            self.finish(false);
            return;
        }

        let next = self.state.question_number + 1;
        if next > self.curve.questions_to_win() {
            self.finish(true);
            return;
        }

        let difficulty = self.curve.level(next);
        match self.pool.take(difficulty) {
            Some(question) => {
                debug!(
                    "Question {} (id={}, difficulty={})",
                    next,
                    question.id(),
                    difficulty
                );
                self.state.show_question(question, next);
            }
            None => {
                // Running out of content counts as a win.
                warn!(
                    "Pool exhausted at difficulty {} before question {}",
                    difficulty, next
                );
                self.finish(true);
            }
        }
    }

    /// Start again with the same player.
    pub fn restart(&mut self) {
        let name = std::mem::take(&mut self.state.player_name);
        self.start(name);
    }

    /// Back to the initial waiting state, forgetting the player.
    pub fn return_to_menu(&mut self) {
        self.pool.reset();
        self.state = GameState::default();
        info!("Returned to menu");
    }

    fn finish(&mut self, won: bool) {
        self.state.status = GameStatus::Finished;
        self.state.has_won = won;
        info!(
            "Game finished for '{}': {} with score {}/{}",
            self.state.player_name,
            if won { "won" } else { "lost" },
            self.state.score,
            self.curve.questions_to_win()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::DifficultyCurve;
    use crate::test_support::{answer_correctly, seeded_pool, small_pool, test_sequencer};

    #[test]
    fn test_start_enters_playing_with_level_one_question() {
        let mut game = test_sequencer(1);
        game.start("Ana");
        let s = game.state();
        assert_eq!(s.status, GameStatus::Playing);
        assert_eq!(s.player_name, "Ana");
        assert_eq!(s.question_number, 1);
        assert_eq!(s.score, 0);
        assert_eq!(s.selected_answer, None);
        assert!(!s.answer_revealed);
        assert_eq!(s.current_question.as_ref().map(|q| q.difficulty()), Some(1));
        assert_eq!(game.remaining_in_pool(), 29);
    }

    #[test]
    fn test_select_records_index_without_transition() {
        let mut game = test_sequencer(2);
        game.start("Ana");
        game.select_answer(3);
        assert_eq!(game.state().selected_answer, Some(3));
        assert_eq!(game.state().status, GameStatus::Playing);
    }

    #[test]
    fn test_select_while_waiting_is_noop() {
        let mut game = test_sequencer(2);
        game.select_answer(1);
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn test_reveal_without_selection_is_noop() {
        let mut game = test_sequencer(3);
        game.start("Ana");
        let before = game.state().clone();
        assert!(!game.reveal());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_reveal_correct_scores() {
        let mut game = test_sequencer(4);
        game.start("Ana");
        assert!(answer_correctly(&mut game));
        assert_eq!(game.state().score, 1);
        assert_eq!(game.state().is_correct, Some(true));
        assert!(game.state().answer_revealed);
    }

    #[test]
    fn test_second_reveal_does_not_rescore() {
        let mut game = test_sequencer(4);
        game.start("Ana");
        answer_correctly(&mut game);
        assert!(game.reveal());
        assert_eq!(game.state().score, 1);
    }

    #[test]
    fn test_select_after_reveal_is_ignored() {
        let mut game = test_sequencer(5);
        game.start("Ana");
        let correct = game.state().current_question.as_ref().unwrap().correct_index();
        game.select_answer(correct);
        game.reveal();
        game.select_answer((correct + 1) % 4);
        assert_eq!(game.state().selected_answer, Some(correct));
    }

    #[test]
    fn test_wrong_answer_ends_game() {
        let mut game = test_sequencer(6);
        game.start("Ana");
        let correct = game.state().current_question.as_ref().unwrap().correct_index();
        game.select_answer((correct + 1) % 4);
        assert!(!game.reveal());
        assert_eq!(game.state().score, 0);
        game.advance();
        assert_eq!(game.state().status, GameStatus::Finished);
        assert!(!game.state().has_won);
    }

    #[test]
    fn test_advance_before_reveal_is_noop() {
        let mut game = test_sequencer(7);
        game.start("Ana");
        let before = game.state().clone();
        game.advance();
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_advance_follows_curve() {
        let mut game = test_sequencer(8);
        game.start("Ana");
        for n in 1..15 {
            answer_correctly(&mut game);
            game.advance();
            let s = game.state();
            assert_eq!(s.question_number, n + 1);
            assert_eq!(
                s.current_question.as_ref().map(|q| q.difficulty()),
                Some(crate::core::curve::level(n + 1, 15))
            );
        }
    }

    #[test]
    fn test_perfect_game_wins() {
        let mut game = test_sequencer(9);
        game.start("Ana");
        for _ in 0..15 {
            answer_correctly(&mut game);
            game.advance();
        }
        let s = game.state();
        assert_eq!(s.status, GameStatus::Finished);
        assert!(s.has_won);
        assert_eq!(s.score, 15);
        assert_eq!(s.question_number, 15);
    }

    #[test]
    fn test_no_repeats_within_a_game() {
        let mut game = test_sequencer(10);
        game.start("Ana");
        let mut seen = std::collections::HashSet::new();
        while game.state().status == GameStatus::Playing {
            let id = game.state().current_question.as_ref().unwrap().id();
            assert!(seen.insert(id), "question {id} shown twice");
            answer_correctly(&mut game);
            game.advance();
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_exhaustion_counts_as_win() {
        // With three to win, questions 1 and 2 map to levels 4 and 7.
        // The small bank has nothing at level 7.
        let mut game = GameSequencer::new(small_pool(), DifficultyCurve::new(3));
        game.start("Ana");
        answer_correctly(&mut game);
        game.advance();
        let s = game.state();
        assert_eq!(s.status, GameStatus::Finished);
        assert!(s.has_won);
        assert_eq!(s.score, 1);
        assert_eq!(s.question_number, 1);
    }

    #[test]
    fn test_empty_first_level_finishes_without_question() {
        // With one to win, question 1 maps to level 10, absent from the small bank.
        let mut game = GameSequencer::new(small_pool(), DifficultyCurve::new(1));
        game.start("Ana");
        let s = game.state();
        assert_eq!(s.status, GameStatus::Finished);
        assert!(!s.has_won);
        assert!(s.current_question.is_none());
    }

    #[test]
    fn test_restart_keeps_player_and_resets_pool() {
        let mut game = test_sequencer(11);
        game.start("Ana");
        for _ in 0..4 {
            answer_correctly(&mut game);
            game.advance();
        }
        game.restart();
        let s = game.state();
        assert_eq!(s.player_name, "Ana");
        assert_eq!(s.question_number, 1);
        assert_eq!(s.score, 0);
        assert_eq!(s.status, GameStatus::Playing);
        assert_eq!(game.remaining_in_pool(), 29);
    }

    #[test]
    fn test_return_to_menu_clears_everything() {
        let mut game = test_sequencer(12);
        game.start("Ana");
        answer_correctly(&mut game);
        game.return_to_menu();
        assert_eq!(game.state(), &GameState::default());
        assert_eq!(game.remaining_in_pool(), 30);
    }

    #[test]
    fn test_questions_to_win_accessor() {
        let game = GameSequencer::new(seeded_pool(1), DifficultyCurve::new(12));
        assert_eq!(game.questions_to_win(), 12);
    }
}
