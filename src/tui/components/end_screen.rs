//! # End Screen
//!
//! Shown once the game is finished: win/loss title, player, final score
//! and the two ways out (restart or back to the menu).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::GameState;
use crate::tui::component::Component;

pub struct EndScreen<'a> {
    state: &'a GameState,
    questions_to_win: u32,
}

impl<'a> EndScreen<'a> {
    pub fn new(state: &'a GameState, questions_to_win: u32) -> Self {
        Self {
            state,
            questions_to_win,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let (title, message, color) = if self.state.has_won {
            (
                "You win!",
                "You answered every question. Well played!",
                Color::Green,
            )
        } else {
            (
                "Game over",
                "One wrong answer ends the game. Try again!",
                Color::Red,
            )
        };

        vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.state.player_name.clone()),
            Line::from(format!(
                "Your score: {} / {}",
                self.state.score, self.questions_to_win
            )),
            Line::default(),
            Line::from(Span::styled(message, Style::default().fg(color))),
            Line::default(),
            Line::from(Span::styled(
                "r Play again · m Main menu · Esc Quit",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for EndScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let height = (lines.len() as u16 + 2).min(area.height);
        let width = 50u16.min(area.width);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [card_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(card, card_area);
    }
}
