//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view for
//! the current game status, and translates keyboard events into
//! core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Auto-advance
//!
//! A reveal returns `Effect::ScheduleAdvance`. The loop records a deadline
//! `reveal_delay` in the future and dispatches `Action::Advance` exactly
//! once when it passes. Input is polled with a timeout no longer than the
//! time left, so the advance fires on schedule without busy-waiting.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::sequencer::GameSequencer;
use crate::core::state::{GameState, GameStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::{NameEvent, NameInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop sleeps waiting for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub name_input: NameInput,
    /// When to dispatch the pending `Advance`, if a reveal is showing.
    pub advance_at: Option<Instant>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_input: NameInput::new(),
            advance_at: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Option index for an answer key: `a`-`d` (either case) or `1`-`4`.
fn answer_index(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        c @ 'a'..='d' => Some(c as usize - 'a' as usize),
        c @ '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

/// Map a key to a core action for the playing and finished views.
/// The waiting view is driven by `NameInput` instead.
pub fn key_action(state: &GameState, event: &TuiEvent) -> Option<Action> {
    match (state.status, event) {
        (_, TuiEvent::ForceQuit | TuiEvent::Escape) => Some(Action::Quit),
        (GameStatus::Playing, _) if state.answer_revealed => None,
        (GameStatus::Playing, TuiEvent::InputChar(c)) => answer_index(*c).map(Action::SelectAnswer),
        (GameStatus::Playing, TuiEvent::Submit) => Some(Action::Reveal),
        (GameStatus::Finished, TuiEvent::InputChar('r' | 'R')) => Some(Action::Restart),
        (GameStatus::Finished, TuiEvent::InputChar('m' | 'M')) => Some(Action::ReturnToMenu),
        _ => None,
    }
}

/// Turn one terminal event into an action, feeding the name box while waiting.
fn event_action(state: &GameState, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if state.status == GameStatus::Waiting
        && !matches!(event, TuiEvent::ForceQuit | TuiEvent::Escape)
    {
        return match tui.name_input.handle_event(event) {
            Some(NameEvent::Submit(name)) => Some(Action::Start(name)),
            _ => None,
        };
    }
    key_action(state, event)
}

/// Apply an action and act on its effect. Returns true when the app should quit.
fn dispatch(game: &mut GameSequencer, tui: &mut TuiState, action: Action, reveal_delay: Duration) -> bool {
    let was_waiting = game.state().status == GameStatus::Waiting;
    let effect = update(game, action);
    match effect {
        Effect::Quit => return true,
        Effect::ScheduleAdvance => {
            tui.advance_at = Some(Instant::now() + reveal_delay);
        }
        Effect::None => {}
    }
    if game.state().status != GameStatus::Playing {
        tui.advance_at = None;
    }
    // Start from an empty name box next time we land on the menu.
    if was_waiting != (game.state().status == GameStatus::Waiting) {
        tui.name_input.clear();
    }
    false
}

pub fn run(mut game: GameSequencer, reveal_delay: Duration) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            let questions_to_win = game.questions_to_win();
            terminal.draw(|f| ui::draw_ui(f, game.state(), questions_to_win, &mut tui))?;
            needs_redraw = false;
        }

        // Fire a due auto-advance before waiting for input again
        if let Some(deadline) = tui.advance_at {
            if Instant::now() >= deadline {
                tui.advance_at = None;
                debug!("Reveal delay elapsed, advancing");
                should_quit = dispatch(&mut game, &mut tui, Action::Advance, reveal_delay);
                needs_redraw = true;
                continue;
            }
        }

        let timeout = tui
            .advance_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL);
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = event_action(game.state(), &mut tui, &event) {
                if dispatch(&mut game, &mut tui, action, reveal_delay) {
                    should_quit = true;
                    break;
                }
            }
        }
    }

    info!("Quitting");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_sequencer;

    fn playing(revealed: bool) -> GameState {
        GameState {
            status: GameStatus::Playing,
            answer_revealed: revealed,
            ..Default::default()
        }
    }

    #[test]
    fn test_answer_keys() {
        assert_eq!(answer_index('a'), Some(0));
        assert_eq!(answer_index('D'), Some(3));
        assert_eq!(answer_index('1'), Some(0));
        assert_eq!(answer_index('4'), Some(3));
        assert_eq!(answer_index('e'), None);
        assert_eq!(answer_index('5'), None);
    }

    #[test]
    fn test_playing_keys() {
        let state = playing(false);
        assert_eq!(
            key_action(&state, &TuiEvent::InputChar('c')),
            Some(Action::SelectAnswer(2))
        );
        assert_eq!(key_action(&state, &TuiEvent::Submit), Some(Action::Reveal));
        assert_eq!(key_action(&state, &TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_input_ignored_while_revealed_except_quit() {
        let state = playing(true);
        assert_eq!(key_action(&state, &TuiEvent::InputChar('a')), None);
        assert_eq!(key_action(&state, &TuiEvent::Submit), None);
        assert_eq!(key_action(&state, &TuiEvent::Escape), Some(Action::Quit));
    }

    #[test]
    fn test_finished_keys() {
        let state = GameState {
            status: GameStatus::Finished,
            ..Default::default()
        };
        assert_eq!(key_action(&state, &TuiEvent::InputChar('r')), Some(Action::Restart));
        assert_eq!(
            key_action(&state, &TuiEvent::InputChar('M')),
            Some(Action::ReturnToMenu)
        );
        assert_eq!(key_action(&state, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_waiting_routes_to_name_input() {
        let state = GameState::default();
        let mut tui = TuiState::new();
        assert_eq!(event_action(&state, &mut tui, &TuiEvent::InputChar('A')), None);
        assert_eq!(event_action(&state, &mut tui, &TuiEvent::InputChar('r')), None);
        assert_eq!(tui.name_input.buffer, "Ar");
        assert_eq!(
            event_action(&state, &mut tui, &TuiEvent::Submit),
            Some(Action::Start("Ar".to_string()))
        );
        assert_eq!(
            event_action(&state, &mut tui, &TuiEvent::Escape),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_reveal_schedules_single_advance() {
        let mut game = test_sequencer(1);
        let mut tui = TuiState::new();
        let delay = Duration::from_millis(500);
        dispatch(&mut game, &mut tui, Action::Start("Ana".into()), delay);
        assert!(tui.advance_at.is_none());

        let correct = game.state().current_question.as_ref().unwrap().correct_index();
        dispatch(&mut game, &mut tui, Action::SelectAnswer(correct), delay);
        dispatch(&mut game, &mut tui, Action::Reveal, delay);
        assert!(tui.advance_at.is_some());

        // A second reveal does not push the deadline back
        let deadline = tui.advance_at;
        dispatch(&mut game, &mut tui, Action::Reveal, delay);
        assert_eq!(tui.advance_at, deadline);

        dispatch(&mut game, &mut tui, Action::Advance, delay);
        assert_eq!(game.state().question_number, 2);
    }

    #[test]
    fn test_finishing_clears_pending_advance_and_menu_clears_name() {
        let mut game = test_sequencer(2);
        let mut tui = TuiState::new();
        let delay = Duration::ZERO;
        tui.name_input.buffer = "Ana".to_string();
        dispatch(&mut game, &mut tui, Action::Start("Ana".into()), delay);
        assert!(tui.name_input.buffer.is_empty());

        let correct = game.state().current_question.as_ref().unwrap().correct_index();
        dispatch(&mut game, &mut tui, Action::SelectAnswer((correct + 1) % 4), delay);
        dispatch(&mut game, &mut tui, Action::Reveal, delay);
        dispatch(&mut game, &mut tui, Action::Advance, delay);
        assert_eq!(game.state().status, GameStatus::Finished);
        assert!(tui.advance_at.is_none());

        dispatch(&mut game, &mut tui, Action::ReturnToMenu, delay);
        assert_eq!(game.state().status, GameStatus::Waiting);
        assert!(dispatch(&mut game, &mut tui, Action::Quit, delay));
    }
}
