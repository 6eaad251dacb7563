//! Terminal setup and the event loop.

use crate::app::App;
use crate::view::Action;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::sync::mpsc;

/// Handle for asking the event loop to redraw.
#[derive(Clone)]
pub struct AppContext {
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Take over the terminal and run `app` until it asks to quit.
    pub async fn run(self, mut app: App) -> anyhow::Result<()> {
        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let cx = AppContext { re_render_tx };
        app.on_init(&cx);

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app_loop(&cx, &mut terminal, &mut app, re_render_rx).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app_loop(
        &self,
        cx: &AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut App,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        // Initial render
        cx.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| app.render(frame))?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        match event::read()? {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                let action = app.handle_key(key);
                                cx.refresh();
                                if action == Some(Action::Quit) {
                                    tracing::info!("quit requested");
                                    return Ok(());
                                }
                            }
                            CrosstermEvent::Resize(..) => cx.refresh(),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}
