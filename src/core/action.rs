//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! Player types a name and hits Enter? That's `Action::Start(name)`.
//! Reveal timer fires? That's `Action::Advance`.
//!
//! `update()` applies an action to the sequencer and returns an `Effect`
//! telling the adapter what to do next. No I/O or timers here.
//!
//! ```text
//! Sequencer + Action  →  update()  →  Effect
//! ```

use log::debug;

use super::sequencer::GameSequencer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start(String),
    SelectAnswer(usize),
    Reveal,
    Advance,
    Restart,
    ReturnToMenu,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An answer was just revealed; call `Advance` once after the reveal delay.
    ScheduleAdvance,
    Quit,
}

pub fn update(game: &mut GameSequencer, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Start(name) => {
            game.start(name);
            Effect::None
        }
        Action::SelectAnswer(index) => {
            game.select_answer(index);
            Effect::None
        }
        Action::Reveal => {
            if game.state().answer_revealed {
                return Effect::None;
            }
            game.reveal();
            if game.state().answer_revealed {
                Effect::ScheduleAdvance
            } else {
                Effect::None
            }
        }
        Action::Advance => {
            game.advance();
            Effect::None
        }
        Action::Restart => {
            game.restart();
            Effect::None
        }
        Action::ReturnToMenu => {
            game.return_to_menu();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
