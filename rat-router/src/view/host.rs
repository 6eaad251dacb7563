//! A toolkit-agnostic host that follows a router and tracks what to display.

use super::{Content, ViewLocator};
use crate::route::RouteRef;
use crate::router::{Router, SubscriptionId};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct HostState<V> {
    router: Option<Rc<Router>>,
    subscription: Option<SubscriptionId>,
    locator: Option<Box<dyn ViewLocator<V>>>,
    content: Content<V>,
}

/// Displays whatever route a router currently points at.
///
/// Attach a router with `set_router`; from then on every "changed"
/// notification re-resolves the content:
/// - no router or no route: `Content::Default`
/// - no locator: `Content::Route` with the route itself
/// - otherwise the locator's view, or `Content::Default` if it has none
///
/// # Example
/// ```ignore
/// let host = RouteViewHost::with_locator(views);
/// host.set_router(Some(Rc::clone(shell.router())));
/// match host.content() {
///     Content::View(view) => view.render(frame, area),
///     _ => frame.render_widget(placeholder, area),
/// }
/// ```
pub struct RouteViewHost<V: 'static> {
    state: Rc<RefCell<HostState<V>>>,
}

impl<V: 'static> RouteViewHost<V> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                router: None,
                subscription: None,
                locator: None,
                content: Content::Default,
            })),
        }
    }

    pub fn with_locator(locator: impl ViewLocator<V> + 'static) -> Self {
        let host = Self::new();
        host.state.borrow_mut().locator = Some(Box::new(locator));
        host
    }

    /// Replace the locator. Takes effect on the next navigation.
    pub fn set_locator(&self, locator: Option<Box<dyn ViewLocator<V>>>) {
        self.state.borrow_mut().locator = locator;
    }

    pub fn router(&self) -> Option<Rc<Router>> {
        self.state.borrow().router.clone()
    }

    /// Follow `router`, or detach with `None`.
    ///
    /// The previous router's subscription is dropped and the content is
    /// resolved right away from the new router's current route.
    pub fn set_router(&self, router: Option<Rc<Router>>) {
        self.detach();
        let Some(router) = router else {
            Self::show(&self.state, None);
            return;
        };

        let weak: Weak<RefCell<HostState<V>>> = Rc::downgrade(&self.state);
        let subscription = router.on_changed(move |_, event| {
            if let Some(state) = weak.upgrade() {
                Self::show(&state, event.next());
            }
        });
        let current = router.current();
        {
            let mut state = self.state.borrow_mut();
            state.router = Some(router);
            state.subscription = Some(subscription);
        }
        Self::show(&self.state, current.as_ref());
    }

    /// Check whether the current content is the placeholder.
    pub fn is_default(&self) -> bool {
        self.state.borrow().content.is_default()
    }

    /// Borrow the current content for the duration of `f`.
    ///
    /// Do not navigate from inside `f`; the notification that follows
    /// would need to replace the content being borrowed. Use `content()`
    /// to take a copy instead.
    pub fn with_content<R>(&self, f: impl FnOnce(&Content<V>) -> R) -> R {
        f(&self.state.borrow().content)
    }

    fn detach(&self) {
        let (router, subscription) = {
            let mut state = self.state.borrow_mut();
            (state.router.take(), state.subscription.take())
        };
        if let (Some(router), Some(id)) = (router, subscription) {
            router.unsubscribe(id);
        }
    }

    fn show(state: &RefCell<HostState<V>>, route: Option<&RouteRef>) {
        let mut state = state.borrow_mut();
        let content = match (&state.router, route, &state.locator) {
            (None, _, _) => {
                tracing::debug!("no router attached, showing default content");
                Content::Default
            }
            (Some(_), None, _) => {
                tracing::debug!("no current route, showing default content");
                Content::Default
            }
            (Some(_), Some(route), None) => Content::Route(Rc::clone(route)),
            (Some(_), Some(route), Some(locator)) => {
                let content = locator.build(Some(route));
                if content.is_default() {
                    tracing::debug!(
                        route = route.route_name(),
                        "no view resolved, showing default content"
                    );
                }
                content
            }
        };
        state.content = content;
    }
}

impl<V: Clone + 'static> RouteViewHost<V> {
    /// A copy of the current content.
    pub fn content(&self) -> Content<V> {
        self.state.borrow().content.clone()
    }
}

impl<V: 'static> Default for RouteViewHost<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static> Drop for RouteViewHost<V> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<V: 'static> fmt::Debug for RouteViewHost<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RouteViewHost")
            .field("attached", &state.router.is_some())
            .field("content", &state.content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::RouteRegistry;
    use crate::route::WeakHost;
    use crate::testing::{detached_route, MockRoute, MockRouteWithParams};
    use crate::view::ViewTable;

    fn views() -> ViewTable<String> {
        let mut views = ViewTable::new();
        views.register(|_route: Rc<MockRoute>| "mock view".to_string());
        views
    }

    fn router() -> Rc<Router> {
        Rc::new(Router::new(RouteRegistry::new()))
    }

    #[test]
    fn test_default_without_router() {
        let host: RouteViewHost<String> = RouteViewHost::with_locator(views());
        assert!(host.is_default());
        host.set_router(None);
        assert!(host.is_default());
    }

    #[test]
    fn test_follows_changed_notifications() {
        let router = router();
        let host = RouteViewHost::with_locator(views());
        host.set_router(Some(Rc::clone(&router)));
        assert!(host.is_default());

        router.navigate_to_route(detached_route()).unwrap();
        assert_eq!(host.content().view().map(String::as_str), Some("mock view"));

        let unresolved: RouteRef = Rc::new(MockRouteWithParams::new(WeakHost::detached(), 1, String::new()));
        router.navigate_to_route(unresolved).unwrap();
        assert!(host.is_default());

        router.navigate_back();
        assert!(!host.is_default());
    }

    #[test]
    fn test_syncs_with_current_route_on_attach() {
        let router = router();
        router.navigate_to_route(detached_route()).unwrap();

        let host = RouteViewHost::with_locator(views());
        host.set_router(Some(router));
        assert!(host.with_content(|content| content.view().is_some()));
    }

    #[test]
    fn test_without_locator_shows_route() {
        let router = router();
        let route = detached_route();
        let host: RouteViewHost<String> = RouteViewHost::new();
        host.set_router(Some(Rc::clone(&router)));

        router.navigate_to_route(route.clone()).unwrap();
        let content = host.content();
        assert!(crate::same_route(content.route().unwrap(), &route));
    }

    #[test]
    fn test_detach_and_drop_unsubscribe() {
        let router = router();
        let host = RouteViewHost::with_locator(views());
        host.set_router(Some(Rc::clone(&router)));
        assert_eq!(router.subscriber_count(), 1);

        host.set_router(None);
        assert_eq!(router.subscriber_count(), 0);
        assert!(host.router().is_none());

        host.set_router(Some(Rc::clone(&router)));
        drop(host);
        assert_eq!(router.subscriber_count(), 0);
    }

    #[test]
    fn test_switching_routers() {
        let (first, second) = (router(), router());
        let host = RouteViewHost::with_locator(views());
        host.set_router(Some(Rc::clone(&first)));
        host.set_router(Some(Rc::clone(&second)));

        first.navigate_to_route(detached_route()).unwrap();
        assert!(host.is_default());
        second.navigate_to_route(detached_route()).unwrap();
        assert!(!host.is_default());
    }
}
