use crate::core::state::{GameState, GameStatus};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EndScreen, GameScreen, StartScreen};

use ratatui::Frame;

/// Render exactly one of the three views, picked by `state.status`.
pub fn draw_ui(frame: &mut Frame, state: &GameState, questions_to_win: u32, tui: &mut TuiState) {
    let area = frame.area();
    match state.status {
        GameStatus::Waiting => StartScreen::new(&mut tui.name_input).render(frame, area),
        GameStatus::Playing => GameScreen::new(state, questions_to_win).render(frame, area),
        GameStatus::Finished => EndScreen::new(state, questions_to_win).render(frame, area),
    }
}
