use super::{navigate, Page2ViewModel};
use crate::view::{render_page, Action, View};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{params, Route, RouteRef, WeakHost};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;
use std::rc::Rc;

#[derive(Route)]
pub struct Page1ViewModel {
    #[route(host)]
    host: WeakHost,
}

impl Page1ViewModel {
    pub fn new(host: WeakHost) -> Self {
        Self { host }
    }

    /// Push a Page 2 built right here.
    pub fn navigate_to_page2(&self) -> rat_router::Result<()> {
        let page: RouteRef = Rc::new(Page2ViewModel::new(self.host.clone()));
        navigate(&self.host, |router| router.navigate_to_route(page))
    }

    /// Let the factory build Page 2 and make it the only entry in the stack.
    pub fn reset_to_page2(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_with_and_reset::<Page2ViewModel>(params![self.host.clone()])
        })
    }
}

pub struct Page1View {
    vm: Rc<Page1ViewModel>,
}

impl Page1View {
    pub fn new(vm: Rc<Page1ViewModel>) -> Self {
        Self { vm }
    }
}

impl View for Page1View {
    fn render(&self, frame: &mut Frame, area: Rect) {
        render_page(
            frame,
            area,
            "Page 1",
            vec![
                Line::from(" The first page. The shell resets to it on start."),
                Line::from(format!(" Route: {}", self.vm.route_name())),
            ],
            &[("2", "navigate to Page 2"), ("r", "reset to Page 2")],
        );
    }

    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>> {
        match key.code {
            KeyCode::Char('2') => self.vm.navigate_to_page2()?,
            KeyCode::Char('r') => self.vm.reset_to_page2()?,
            _ => return Ok(None),
        }
        Ok(Some(Action::Noop))
    }
}
