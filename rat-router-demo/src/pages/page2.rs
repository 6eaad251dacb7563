use super::{navigate, NestedViewModel, Page1ViewModel, RogueViewModel};
use crate::view::{render_page, Action, View};
use crossterm::event::{KeyCode, KeyEvent};
use rat_router::{params, Route, RouteKindId, RouteRef, WeakHost};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;
use std::rc::Rc;

#[derive(Route)]
pub struct Page2ViewModel {
    #[route(host)]
    host: WeakHost,
}

impl Page2ViewModel {
    pub fn new(host: WeakHost) -> Self {
        Self { host }
    }

    /// Go to Page 1 by kind id, the way a menu built from data would.
    pub fn navigate_to_page1(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_kind(RouteKindId::of::<Page1ViewModel>(), params![self.host.clone()])
        })
    }

    pub fn navigate_to_rogue(&self) -> rat_router::Result<()> {
        let rogue: RouteRef = Rc::new(RogueViewModel::new(self.host.clone(), 0));
        navigate(&self.host, |router| router.navigate_to_route(rogue))
    }

    pub fn navigate_to_nested(&self) -> rat_router::Result<()> {
        navigate(&self.host, |router| {
            router.navigate_to_with::<NestedViewModel>(params![self.host.clone()])
        })
    }
}

pub struct Page2View {
    vm: Rc<Page2ViewModel>,
}

impl Page2View {
    pub fn new(vm: Rc<Page2ViewModel>) -> Self {
        Self { vm }
    }
}

impl View for Page2View {
    fn render(&self, frame: &mut Frame, area: Rect) {
        render_page(
            frame,
            area,
            "Page 2",
            vec![Line::from(" Every key here pushes a new route onto the stack.")],
            &[
                ("1", "navigate to Page 1 (by kind)"),
                ("g", "navigate to Rogue"),
                ("n", "open the nested router"),
            ],
        );
    }

    fn handle_key(&self, key: KeyEvent) -> rat_router::Result<Option<Action>> {
        match key.code {
            KeyCode::Char('1') => self.vm.navigate_to_page1()?,
            KeyCode::Char('g') => self.vm.navigate_to_rogue()?,
            KeyCode::Char('n') => self.vm.navigate_to_nested()?,
            _ => return Ok(None),
        }
        Ok(Some(Action::Noop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;
    use rat_router::RouterHost;

    fn on_page2(shell: &Rc<Shell>) -> Rc<Page2ViewModel> {
        let page = shell
            .router()
            .navigate_to_with::<Page2ViewModel>(params![shell.host()])
            .unwrap();
        rat_router::downcast_rc::<Page2ViewModel>(&page).unwrap()
    }

    #[test]
    fn test_page2_navigations_push() {
        let shell = Shell::new(10).unwrap();
        let page2 = on_page2(&shell);

        page2.navigate_to_page1().unwrap();
        assert!(shell.router().current().unwrap().is::<Page1ViewModel>());
        page2.navigate_to_rogue().unwrap();
        let rogue = shell.router().current().unwrap();
        assert_eq!(rogue.downcast_ref::<RogueViewModel>().unwrap().number(), 1);
        page2.navigate_to_nested().unwrap();
        assert!(shell.router().current().unwrap().is::<NestedViewModel>());
        assert_eq!(shell.status().stack_size, 5);
    }

    #[test]
    fn test_unhandled_key_is_passed_up() {
        let shell = Shell::new(10).unwrap();
        let view = Page2View::new(on_page2(&shell));
        assert_eq!(view.handle_key(KeyEvent::from(KeyCode::Char('x'))).unwrap(), None);
        assert_eq!(
            view.handle_key(KeyEvent::from(KeyCode::Char('g'))).unwrap(),
            Some(Action::Noop)
        );
    }
}
