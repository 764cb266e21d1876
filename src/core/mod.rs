//! # Core Game Logic
//!
//! This module contains the trivia engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Bank → Pool          │
//!                    │  • Curve, Validator     │
//!                    │  • Sequencer + update() │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`question`]: The immutable `Question` value and its construction errors
//! - [`bank`]: The compiled-in `QuestionBank`
//! - [`pool`]: The shrinking per-game `QuestionPool`
//! - [`curve`]: Question number → difficulty level
//! - [`validator`]: Answer checking
//! - [`state`]: The `GameState` snapshot the UI renders
//! - [`sequencer`]: The `GameSequencer` state machine
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod bank;
pub mod config;
pub mod curve;
pub mod pool;
pub mod question;
pub mod sequencer;
pub mod state;
pub mod validator;
