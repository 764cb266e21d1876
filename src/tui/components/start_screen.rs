//! # Start Screen
//!
//! Shown while the game is waiting: title, welcome line and the name box.
//!
//! Follows the persistent state + transient wrapper pattern: the
//! `NameInput` lives in `TuiState`, `StartScreen` borrows it for one frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::name_input::NameInput;

/// Width of the name box, clamped to the terminal.
const INPUT_WIDTH: u16 = 40;

pub struct StartScreen<'a> {
    input: &'a mut NameInput,
}

impl<'a> StartScreen<'a> {
    pub fn new(input: &'a mut NameInput) -> Self {
        Self { input }
    }
}

impl Component for StartScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = vec![
            Line::from(Span::styled(
                "Trivia",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Welcome!",
                Style::default().fg(Color::Gray),
            )),
        ];
        let hint = Line::from(Span::styled(
            "Enter to start · Esc to quit",
            Style::default().fg(Color::DarkGray),
        ));

        let [heading_area, _, input_row, hint_area] = Layout::vertical([
            Constraint::Length(heading.len() as u16),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [input_area] = Layout::horizontal([Constraint::Length(INPUT_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(input_row);

        frame.render_widget(
            Paragraph::new(heading).alignment(Alignment::Center),
            heading_area,
        );
        self.input.render(frame, input_area);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
    }
}
