//! The terminal side of the view boundary: what a page looks like and how it reacts to keys.

use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use std::rc::Rc;

/// What a key press asks the application to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The view handled the key itself.
    Noop,
    Back,
    Home,
    Quit,
}

/// A rendered page bound to one route.
pub trait View {
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Returns `Ok(None)` when the key is not for this view.
    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>>;
}

pub type ViewRef = Rc<dyn View>;

/// Draw a bordered page with a body and a list of key hints.
pub fn render_page(frame: &mut Frame, area: Rect, title: &str, body: Vec<Line<'static>>, keys: &[(&str, &str)]) {
    let mut lines = body;
    lines.push(Line::from(""));
    for (key, label) in keys {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {key} "),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {label}")),
        ]));
    }

    let page = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(page, area);
}

/// Shown whenever a router has no route or no view resolves for it.
pub fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(placeholder, area);
}
