use super::navigate;
use crate::view::{render_page, render_placeholder, Action, View};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{params, Route, RouteKindId, RouteRef, WeakHost};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

/// A page that keeps pushing copies of itself, each one numbered.
#[derive(Route)]
pub struct RogueViewModel {
    #[route(host)]
    host: WeakHost,
    number: u32,
}

impl RogueViewModel {
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
            router.navigate_to_with::<RogueViewModel>(params![self.host.clone(), self.number])
        })
    }

    pub fn navigate_to_next_by_kind(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_kind(
                RouteKindId::of::<RogueViewModel>(),
                params![self.host.clone(), self.number],
            )
        })
    }

    /// Ask for a rogue without its number; the factory refuses.
    pub fn navigate_without_number(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_with::<RogueViewModel>(params![self.host.clone()])
        })
    }
}

/// Bound by view name, so it holds the route untyped.
pub struct RogueView {
    route: RouteRef,
}

impl RogueView {
    pub fn new(route: RouteRef) -> Self {
        Self { route }
    }

    fn vm(&self) -> Option<&RogueViewModel> {
        self.route.downcast_ref::<RogueViewModel>()
    }
}

impl View for RogueView {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(vm) = self.vm() else {
            render_placeholder(frame, area, "Not a rogue route");
            return;
        };
        render_page(
            frame,
            area,
            &format!("Rogue #{}", vm.number()),
            vec![Line::from(format!(" Rogue number {}.", vm.number()))],
            &[
                ("n", "next rogue (typed)"),
                ("t", "next rogue (by kind)"),
                ("x", "next rogue without a number"),
            ],
        );
    }

    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>> {
        let Some(vm) = self.vm() else {
            return Ok(None);
        };
        match key.code {
            KeyCode::Char('n') => vm.navigate_to_next()?,
            KeyCode::Char('t') => vm.navigate_to_next_by_kind()?,
            KeyCode::Char('x') => vm.navigate_without_number()?,
            _ => return Ok(None),
        }
        Ok(Some(Action::Noop))
    }
}
