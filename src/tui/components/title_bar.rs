//! # TitleBar Component
//!
//! Top status line during play: player, progress and score.
//!
//! Stateless: all three values are props copied from `GameState` each frame.
//!
//! ```text
//! Trivia | Player: Ana | Question 3 of 15 | Score: 2
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub player_name: String,
    pub question_number: u32,
    pub questions_to_win: u32,
    pub score: u32,
}

impl TitleBar {
    pub fn new(player_name: String, question_number: u32, questions_to_win: u32, score: u32) -> Self {
        Self {
            player_name,
            question_number,
            questions_to_win,
            score,
        }
    }

    fn text(&self) -> String {
        format!(
            "Trivia | Player: {} | Question {} of {} | Score: {}",
            self.player_name, self.question_number, self.questions_to_win, self.score
        )
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
