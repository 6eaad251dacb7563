//! View resolution for hosts that display the current route.
//!
//! Nothing in the router depends on this module; a UI layer uses it to turn
//! the route announced by a "changed" notification into something it can draw.

pub mod host;

pub use host::RouteViewHost;

use crate::route::{downcast_rc, AsAny, Route, RouteRef};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// What a view host should display.
#[derive(Clone)]
pub enum Content<V> {
    /// Nothing routed, or the route could not be resolved: show the placeholder.
    Default,
    /// No locator configured: show the route itself.
    Route(RouteRef),
    /// A resolved view.
    View(V),
}

impl<V> Content<V> {
    pub fn is_default(&self) -> bool {
        matches!(self, Content::Default)
    }

    pub fn view(&self) -> Option<&V> {
        match self {
            Content::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn route(&self) -> Option<&RouteRef> {
        match self {
            Content::Route(route) => Some(route),
            _ => None,
        }
    }
}

impl<V> fmt::Debug for Content<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Default => f.write_str("Default"),
            Content::Route(route) => f.debug_tuple("Route").field(route).finish(),
            Content::View(_) => f.write_str("View(..)"),
        }
    }
}

/// Resolves routes to views of type `V`.
pub trait ViewLocator<V> {
    /// Whether this locator handles `route` at all.
    fn matches(&self, route: &dyn Route) -> bool {
        let _ = route;
        true
    }

    /// Build the view for `route`, or `None` if there is none.
    fn resolve(&self, route: &RouteRef) -> Option<V>;

    /// Resolve `route`, falling back to `Content::Default`.
    fn build(&self, route: Option<&RouteRef>) -> Content<V> {
        let Some(route) = route else {
            return Content::Default;
        };
        if !self.matches(&**route) {
            return Content::Default;
        }
        self.resolve(route).map_or(Content::Default, Content::View)
    }
}

type TypedView<V> = Box<dyn Fn(&RouteRef) -> Option<V>>;
type NamedView<V> = Box<dyn Fn(&RouteRef) -> V>;

/// A `ViewLocator` backed by lookup tables.
///
/// Explicit per-type registrations win. Routes without one fall back to the
/// view registered under their `view_name()`, which `#[derive(Route)]` fills
/// in at compile time (`SettingsViewModel` -> `SettingsView`).
///
/// # Example
/// ```ignore
/// let mut views = ViewTable::new();
/// views.register(|vm: Rc<MenuViewModel>| MenuView::new(vm));
/// views.register_named("SettingsView", |route| SettingsView::new(route.clone()));
/// ```
pub struct ViewTable<V> {
    typed: HashMap<TypeId, TypedView<V>>,
    named: HashMap<String, NamedView<V>>,
}

impl<V: 'static> ViewTable<V> {
    pub fn new() -> Self {
        Self {
            typed: HashMap::new(),
            named: HashMap::new(),
        }
    }

    /// Register the view for routes of type `T`.
    pub fn register<T: Route>(&mut self, build: impl Fn(Rc<T>) -> V + 'static) -> &mut Self {
        let typed: TypedView<V> = Box::new(move |route: &RouteRef| downcast_rc::<T>(route).map(&build));
        self.typed.insert(TypeId::of::<T>(), typed);
        self
    }

    /// Register the view for routes whose `view_name()` is `name`.
    pub fn register_named(
        &mut self,
        name: impl Into<String>,
        build: impl Fn(&RouteRef) -> V + 'static,
    ) -> &mut Self {
        self.named.insert(name.into(), Box::new(build));
        self
    }

    pub fn len(&self) -> usize {
        self.typed.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.typed.is_empty() && self.named.is_empty()
    }
}

impl<V: 'static> Default for ViewTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ViewLocator<V> for ViewTable<V> {
    fn resolve(&self, route: &RouteRef) -> Option<V> {
        let type_id = Any::type_id(AsAny::as_any(&**route));
        if let Some(view) = self.typed.get(&type_id).and_then(|build| build(route)) {
            return Some(view);
        }
        let name = route.view_name()?;
        self.named.get(name).map(|build| build(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::WeakHost;
    use crate::testing::{detached_route, MockRoute, MockRouteWithParams};

    fn with_params(p1: i32) -> RouteRef {
        Rc::new(MockRouteWithParams::new(WeakHost::detached(), p1, String::new()))
    }

    #[test]
    fn test_typed_registration_wins() {
        let mut views = ViewTable::new();
        views
            .register(|route: Rc<MockRouteWithParams>| format!("typed {}", route.p1))
            .register_named("MockRouteWithParamsView", |_| "named".to_string());

        let content = views.build(Some(&with_params(7)));
        assert_eq!(content.view().map(String::as_str), Some("typed 7"));
    }

    #[test]
    fn test_falls_back_to_view_name() {
        let mut views = ViewTable::new();
        views.register_named("MockRouteView", |route| format!("named {}", route.route_name()));

        let content = views.build(Some(&detached_route()));
        assert_eq!(content.view().map(String::as_str), Some("named MockRoute"));
    }

    #[test]
    fn test_unresolved_is_default() {
        let views: ViewTable<String> = ViewTable::new();
        assert!(views.build(Some(&detached_route())).is_default());
        assert!(views.build(None).is_default());
    }

    struct OnlyMockRoute;

    impl ViewLocator<&'static str> for OnlyMockRoute {
        fn matches(&self, route: &dyn Route) -> bool {
            route.is::<MockRoute>()
        }

        fn resolve(&self, _route: &RouteRef) -> Option<&'static str> {
            Some("mock")
        }
    }

    #[test]
    fn test_non_matching_route_is_default() {
        let locator = OnlyMockRoute;
        assert_eq!(locator.build(Some(&detached_route())).view(), Some(&"mock"));
        assert!(locator.build(Some(&with_params(1))).is_default());
    }
}
