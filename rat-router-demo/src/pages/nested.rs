use super::{Page3View, Page3ViewModel};
use crate::shell::RouteStatus;
use crate::view::{render_placeholder, Action, View, ViewRef};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{
    Content, Route, RouteKind, RouteRef, RouteRegistry, RouteViewHost, Router, RouterHost,
    ViewTable, WeakHost,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::rc::Rc;

/// A route that is itself a router host, with a navigation stack of its own.
#[derive(Route)]
pub struct NestedViewModel {
    #[route(host)]
    host: WeakHost,
    me: WeakHost,
    router: Rc<Router>,
    status: RouteStatus,
}

impl NestedViewModel {
    pub fn new(host: WeakHost) -> Rc<Self> {
        let mut routes = RouteRegistry::new();
        routes.register::<Page3ViewModel>(|p| Ok(Page3ViewModel::new(p.cloned(0)?, *p.get::<u32>(1)?)));
        let router = Rc::new(Router::new(routes));
        let status = RouteStatus::track(&router);

        Rc::new_cyclic(|me| Self {
            host,
            me: WeakHost::from_weak(me.clone()),
            router,
            status,
        })
    }

    /// Start the nested stack over at the first Page 3.
    pub fn reset_to_page3(&self) -> rat_router::Result<()> {
        let page: RouteRef = Rc::new(Page3ViewModel::new(self.me.clone(), 0));
        self.router.navigate_to_route_and_reset(page)
    }

    pub fn navigate_back(&self) -> bool {
        if !self.router.can_go_back() {
            return false;
        }
        self.router.navigate_back().is_some()
    }
}

impl RouterHost for NestedViewModel {
    fn router(&self) -> &Rc<Router> {
        &self.router
    }
}

pub struct NestedView {
    vm: Rc<NestedViewModel>,
    content: RouteViewHost<ViewRef>,
}

impl NestedView {
    pub fn new(vm: Rc<NestedViewModel>) -> Self {
        let mut views: ViewTable<ViewRef> = ViewTable::new();
        views.register_named(Page3ViewModel::VIEW, |route: &RouteRef| -> ViewRef {
            Rc::new(Page3View::new(Rc::clone(route)))
        });
        let content = RouteViewHost::with_locator(views);
        content.set_router(Some(Rc::clone(vm.router())));
        Self { vm, content }
    }
}

impl View for NestedView {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let status = self.vm.status.get();
        let line = Line::from(vec![
            Span::styled(" nested ", Style::default().fg(Color::Black).bg(Color::Magenta)),
            Span::raw(format!(
                " {} │ stack {} │ z reset │ b back",
                status.route.as_deref().unwrap_or("-"),
                status.stack_size,
            )),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);

        match self.content.content() {
            Content::View(view) => view.render(frame, chunks[1]),
            _ => render_placeholder(frame, chunks[1], "Nested router is empty. Press z to start at Page 3."),
        }
    }

    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>> {
        let content = self.content.content();
        if let Some(view) = content.view() {
            if let Some(action) = view.handle_key(key)? {
                return Ok(Some(action));
            }
        }
        match key.code {
            KeyCode::Char('z') => self.vm.reset_to_page3()?,
            // Only consume `b` when the nested stack can actually go back.
            KeyCode::Char('b') if self.vm.navigate_back() => {}
            _ => return Ok(None),
        }
        Ok(Some(Action::Noop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;
    use rat_router::params;

    fn nested(shell: &Rc<Shell>) -> Rc<NestedViewModel> {
        let route = shell
            .router()
            .navigate_to_with::<NestedViewModel>(params![shell.host()])
            .unwrap();
        rat_router::downcast_rc::<NestedViewModel>(&route).unwrap()
    }

    fn press(view: &NestedView, c: char) -> Option<Action> {
        view.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap()
    }

    #[test]
    fn test_nested_router_is_independent() {
        let shell = Shell::new(10).unwrap();
        let vm = nested(&shell);
        let view = NestedView::new(Rc::clone(&vm));
        assert!(vm.router().current().is_none());
        assert!(view.content.is_default());

        assert_eq!(press(&view, 'z'), Some(Action::Noop));
        assert_eq!(press(&view, 'n'), Some(Action::Noop));
        assert_eq!(press(&view, 't'), Some(Action::Noop));

        let current = vm.router().current().unwrap();
        assert_eq!(current.downcast_ref::<Page3ViewModel>().unwrap().number(), 3);
        assert_eq!(vm.status.get().stack_size, 3);
        assert_eq!(shell.status().stack_size, 2);
        assert!(shell.router().current().unwrap().is::<NestedViewModel>());
    }

    #[test]
    fn test_page3_routes_point_at_nested_host() {
        let shell = Shell::new(10).unwrap();
        let vm = nested(&shell);
        vm.reset_to_page3().unwrap();

        let page = vm.router().current().unwrap();
        let host = page.router_host().unwrap();
        assert!(Rc::ptr_eq(host.router(), vm.router()));
        assert!(vm.router_host().is_some());
    }

    #[test]
    fn test_back_key_falls_through_on_first_page() {
        let shell = Shell::new(10).unwrap();
        let view = NestedView::new(nested(&shell));

        assert_eq!(press(&view, 'b'), None);
        press(&view, 'z');
        assert_eq!(press(&view, 'b'), None);
        press(&view, 'n');
        assert_eq!(press(&view, 'b'), Some(Action::Noop));
        assert!(view.vm.router().current().is_some());
    }

    #[test]
    fn test_dropping_view_unsubscribes() {
        let shell = Shell::new(10).unwrap();
        let vm = nested(&shell);
        let before = vm.router().subscriber_count();
        let view = NestedView::new(Rc::clone(&vm));
        assert_eq!(vm.router().subscriber_count(), before + 1);
        drop(view);
        assert_eq!(vm.router().subscriber_count(), before);
    }
}
