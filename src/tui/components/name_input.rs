//! # NameInput Component
//!
//! Single-line text box for the player name on the start screen.
//!
//! The buffer is internal state. Editing happens at the end of the line
//! only: typed characters append, backspace removes the last character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Longest name accepted, in characters.
pub const MAX_NAME_CHARS: usize = 32;

/// High-level events emitted by the NameInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    /// Enter pressed with a non-blank name (already trimmed)
    Submit(String),
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct NameInput {
    pub buffer: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Append `text`, skipping control characters and stopping at the length cap.
    fn push_text(&mut self, text: &str) -> bool {
        let mut changed = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            if self.buffer.chars().count() >= MAX_NAME_CHARS {
                break;
            }
            self.buffer.push(c);
            changed = true;
        }
        changed
    }
}

impl Component for NameInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Enter your name");
        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for NameInput {
    type Event = NameEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self
                .push_text(c.encode_utf8(&mut [0; 4]))
                .then_some(NameEvent::ContentChanged),
            TuiEvent::Paste(text) => self.push_text(text).then_some(NameEvent::ContentChanged),
            TuiEvent::Backspace => self.buffer.pop().map(|_| NameEvent::ContentChanged),
            TuiEvent::Submit => {
                let name = self.buffer.trim();
                if name.is_empty() {
                    None
                } else {
                    Some(NameEvent::Submit(name.to_string()))
                }
            }
            _ => None,
        }
    }
}
