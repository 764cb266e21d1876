//! # Game Screen
//!
//! Shown while playing: title bar, progress line, the prompt and the four
//! options labelled A–D.
//!
//! ```text
//! before reveal                 after reveal
//! ─────────────                 ────────────
//!   A  London                     A  London
//! ▶ B  Paris      (selected)      B  Paris   ✓   (correct, green)
//!   C  Madrid                     C  Madrid  ✗   (wrong pick, red)
//!   D  Berlin                     D  Berlin
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::question::Question;
use crate::core::state::GameState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

/// How an option line should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionMark {
    Plain,
    Selected,
    Correct,
    Wrong,
}

fn option_mark(state: &GameState, question: &Question, index: usize) -> OptionMark {
    let selected = state.selected_answer == Some(index);
    if state.answer_revealed {
        if index == question.correct_index() {
            OptionMark::Correct
        } else if selected {
            OptionMark::Wrong
        } else {
            OptionMark::Plain
        }
    } else if selected {
        OptionMark::Selected
    } else {
        OptionMark::Plain
    }
}

/// "A", "B", ... for option `index`.
pub fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn option_line(label: char, text: &str, mark: OptionMark) -> Line<'static> {
    let (pointer, suffix, style) = match mark {
        OptionMark::Plain => ("  ", "", Style::default()),
        OptionMark::Selected => (
            "▶ ",
            "",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        OptionMark::Correct => (
            "  ",
            "  ✓",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        OptionMark::Wrong => ("  ", "  ✗", Style::default().fg(Color::Red)),
    };
    Line::from(vec![
        Span::styled(format!("{pointer}{label}  "), style),
        Span::styled(text.to_string(), style),
        Span::styled(suffix, style),
    ])
}

fn remaining_text(remaining: u32) -> String {
    match remaining {
        0 => "Last question!".to_string(),
        1 => "1 question to go after this one".to_string(),
        n => format!("{n} questions to go after this one"),
    }
}

pub struct GameScreen<'a> {
    state: &'a GameState,
    questions_to_win: u32,
}

impl<'a> GameScreen<'a> {
    pub fn new(state: &'a GameState, questions_to_win: u32) -> Self {
        Self {
            state,
            questions_to_win,
        }
    }

    fn footer(&self) -> Line<'static> {
        let (text, color) = match (self.state.answer_revealed, self.state.is_correct) {
            (true, Some(true)) => ("Correct!", Color::Green),
            (true, _) => ("Wrong answer!", Color::Red),
            (false, _) if self.state.selected_answer.is_some() => {
                ("Enter to confirm · A-D to change", Color::DarkGray)
            }
            (false, _) => ("Choose A-D (or 1-4) · Esc to quit", Color::DarkGray),
        };
        Line::from(Span::styled(text, Style::default().fg(color)))
    }
}

impl Component for GameScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, progress_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        TitleBar::new(
            self.state.player_name.clone(),
            self.state.question_number,
            self.questions_to_win,
            self.state.score,
        )
        .render(frame, title_area);

        let Some(question) = self.state.current_question.as_ref() else {
            let empty = Paragraph::new("No questions available")
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(empty, body_area);
            return;
        };

        let remaining = self.state.questions_remaining(self.questions_to_win);
        frame.render_widget(
            Line::from(Span::styled(
                remaining_text(remaining),
                Style::default().fg(Color::DarkGray),
            )),
            progress_area,
        );

        let mut lines = vec![
            Line::from(Span::styled(
                question.prompt().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(question.options().iter().enumerate().map(|(i, text)| {
            option_line(option_label(i), text, option_mark(self.state, question, i))
        }));

        let card = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" Difficulty {} ", question.difficulty()))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(card, body_area);
        frame.render_widget(self.footer(), footer_area);
    }
}
