//! # TUI Components
//!
//! One file per component, each holding its state, events, rendering and
//! tests.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: player, progress and score line
//! - `GameScreen`: the current question and its options
//! - `EndScreen`: final result
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NameInput`: player name box, emits `NameEvent::Submit`
//! - `StartScreen`: borrows the `NameInput` for one frame
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── name_input.rs    (Player name box)
//! ├── start_screen.rs  (waiting)
//! ├── game_screen.rs   (playing)
//! └── end_screen.rs    (finished)
//! ```

pub mod end_screen;
pub mod game_screen;
pub mod name_input;
pub mod start_screen;
pub mod title_bar;

pub use end_screen::EndScreen;
pub use game_screen::GameScreen;
pub use name_input::{NameEvent, NameInput};
pub use start_screen::StartScreen;
pub use title_bar::TitleBar;
