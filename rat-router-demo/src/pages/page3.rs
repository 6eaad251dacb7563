use super::navigate;
use crate::view::{render_page, render_placeholder, Action, View};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{params, Route, RouteKindId, RouteRef, WeakHost};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

/// The page shown inside the nested router.
#[derive(Route)]
pub struct Page3ViewModel {
    #[route(host)]
    host: WeakHost,
    number: u32,
}

impl Page3ViewModel {
    pub fn new(host: WeakHost, number: u32) -> Self {
        Self {
            host,
            number: number + 1,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn navigate_to_next(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_with::<Page3ViewModel>(params![self.host.clone(), self.number])
        })
    }

    pub fn navigate_to_next_by_kind(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_kind(
                RouteKindId::of::<Page3ViewModel>(),
                params![self.host.clone(), self.number],
            )
        })
    }
}

pub struct Page3View {
    route: RouteRef,
}

impl Page3View {
    pub fn new(route: RouteRef) -> Self {
        Self { route }
    }
}

impl View for Page3View {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(vm) = self.route.downcast_ref::<Page3ViewModel>() else {
            render_placeholder(frame, area, "Not a Page 3 route");
            return;
        };
        render_page(
            frame,
            area,
            &format!("Page 3 #{}", vm.number()),
            vec![Line::from(" Lives in the nested router; the shell's stack does not move.")],
            &[("n", "next Page 3 (typed)"), ("t", "next Page 3 (by kind)")],
        );
    }

    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>> {
        let Some(vm) = self.route.downcast_ref::<Page3ViewModel>() else {
            return Ok(None);
        };
        match key.code {
            KeyCode::Char('n') => vm.navigate_to_next()?,
            KeyCode::Char('t') => vm.navigate_to_next_by_kind()?,
            _ => return Ok(None),
        }
        Ok(Some(Action::Noop))
    }
}
