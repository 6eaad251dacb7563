//! Root component: the shell's status bar, the current page and the key hints.

use crate::application::AppContext;
use crate::pages;
use crate::shell::Shell;
use crate::view::{render_placeholder, Action, ViewRef};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{RouteViewHost, RouterHost};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use std::rc::Rc;

pub struct App {
    shell: Rc<Shell>,
    content: RouteViewHost<ViewRef>,
    last_error: Option<String>,
}

impl App {
    pub fn new(shell: Rc<Shell>) -> Self {
        let content = RouteViewHost::with_locator(pages::views());
        content.set_router(Some(Rc::clone(shell.router())));
        Self {
            shell,
            content,
            last_error: None,
        }
    }

    /// Redraw whenever the shell's router moves, whoever moved it.
    pub fn on_init(&mut self, cx: &AppContext) {
        let cx = cx.clone();
        self.shell.router().on_changed(move |_, _| cx.refresh());
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let status = self.shell.status();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" rat-router ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(format!("│ route: {} ", status.route.as_deref().unwrap_or("-"))),
            Span::raw(format!(
                "│ stack: {}/{}",
                status.stack_size,
                self.shell.router().stack_capacity()
            )),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(header, chunks[0]);

        match self.content.content().view() {
            Some(view) => view.render(frame, chunks[1]),
            None => render_placeholder(frame, chunks[1], "No view for the current route"),
        }

        let footer = match &self.last_error {
            Some(err) => Paragraph::new(format!(" {err} "))
                .style(Style::default().bg(Color::Red).fg(Color::White)),
            None => {
                let back = if self.shell.router().can_go_back() { "Esc Back │ " } else { "" };
                Paragraph::new(format!(" {back}H Home │ Q Quit "))
                    .style(Style::default().bg(Color::Cyan).fg(Color::Black))
            }
        };
        frame.render_widget(footer.alignment(Alignment::Center), chunks[2]);
    }

    /// Offer the key to the current page first, then to the global bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let content = self.content.content();
        let handled = match content.view() {
            Some(view) => view.handle_key(key),
            None => Ok(None),
        };

        let action = match handled {
            Ok(Some(action)) => action,
            Ok(None) => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Action::Back,
                KeyCode::Char('h') => Action::Home,
                KeyCode::Char('q') => Action::Quit,
                _ => return None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "navigation failed");
                self.last_error = Some(err.to_string());
                return None;
            }
        };
        self.last_error = None;

        match action {
            Action::Noop => None,
            Action::Back => {
                self.shell.navigate_back();
                None
            }
            Action::Home => {
                if let Err(err) = self.shell.reset_to_page1() {
                    tracing::warn!(error = %err, "reset to Page 1 failed");
                    self.last_error = Some(err.to_string());
                }
                None
            }
            Action::Quit => Some(Action::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{NestedViewModel, Page1ViewModel, Page2ViewModel, RogueViewModel};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        App::new(Shell::new(10).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key(KeyEvent::from(code))
    }

    fn current_is<T: rat_router::Route>(app: &App) -> bool {
        app.shell.router().current().is_some_and(|route| route.is::<T>())
    }

    #[test]
    fn test_walkthrough() {
        let mut app = app();
        assert!(current_is::<Page1ViewModel>(&app));

        press(&mut app, KeyCode::Char('2'));
        assert!(current_is::<Page2ViewModel>(&app));
        press(&mut app, KeyCode::Char('g'));
        assert!(current_is::<RogueViewModel>(&app));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.shell.status().stack_size, 4);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Backspace);
        assert!(current_is::<Page2ViewModel>(&app));
        press(&mut app, KeyCode::Char('n'));
        assert!(current_is::<NestedViewModel>(&app));

        press(&mut app, KeyCode::Char('h'));
        assert!(current_is::<Page1ViewModel>(&app));
        assert_eq!(app.shell.status().stack_size, 1);
    }

    #[test]
    fn test_back_on_first_page_keeps_it() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(current_is::<Page1ViewModel>(&app));
        assert!(!app.content.is_default());
    }

    #[test]
    fn test_reset_to_page2_from_page1() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert!(current_is::<Page2ViewModel>(&app));
        assert_eq!(app.shell.status().stack_size, 1);
    }

    #[test]
    fn test_failed_navigation_is_reported_and_cleared() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.last_error.as_deref().is_some_and(|err| err.contains("RogueViewModel")));
        assert_eq!(app.shell.status().stack_size, 3);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(&mut app, KeyCode::Char('?')), None);
    }

    #[test]
    fn test_render_shows_status() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Page1ViewModel"));
        assert!(text.contains("Page 1"));
    }
}
