//! The router state machine.

use super::config::{RouterBuilder, RouterConfig};
use super::events::{ListenerList, RouteChanged, RouteChanging, SubscriptionId};
use crate::error::{FactoryError, InvalidArgumentSnafu, Result, RouteCreationFailedSnafu};
use crate::factory::{Params, RouteFactory};
use crate::route::{RouteKind, RouteKindId, RouteRef};
use snafu::{OptionExt, ResultExt};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Navigation {
    current: Option<RouteRef>,
    stack: VecDeque<RouteRef>,
}

/// A router that owns one bounded navigation stack.
///
/// Every operation is synchronous and takes `&self`: the state lives in a
/// `RefCell` that is never borrowed across a factory or listener call, so
/// handlers may navigate re-entrantly. The router is `!Send`; callers sharing
/// it between threads must serialize access themselves.
///
/// # Example
/// ```ignore
/// let router = Router::new(registry);
/// router.on_changed(|_, e| println!("now at {:?}", e.next()));
///
/// router.navigate_to::<MenuViewModel>()?;
/// router.navigate_to_with::<DetailViewModel>(params![host, 42])?;
/// assert!(router.can_go_back());
/// router.navigate_back();
/// ```
pub struct Router {
    factory: Box<dyn RouteFactory>,
    config: RouterConfig,
    state: RefCell<Navigation>,
    changing: ListenerList<RouteChanging>,
    changed: ListenerList<RouteChanged>,
    next_subscription: Cell<u64>,
}

impl Router {
    /// Create a router with the default configuration.
    pub fn new(factory: impl RouteFactory + 'static) -> Self {
        Self::from_parts(Box::new(factory), RouterConfig::default())
    }

    /// Start building a router with custom configuration.
    pub fn builder(factory: impl RouteFactory + 'static) -> RouterBuilder {
        RouterBuilder::new(Box::new(factory))
    }

    pub(crate) fn from_parts(factory: Box<dyn RouteFactory>, config: RouterConfig) -> Self {
        Self {
            factory,
            config,
            state: RefCell::new(Navigation::default()),
            changing: ListenerList::new(),
            changed: ListenerList::new(),
            next_subscription: Cell::new(1),
        }
    }

    /// Get the current route.
    pub fn current(&self) -> Option<RouteRef> {
        self.state.borrow().current.clone()
    }

    /// Copy of the navigation stack, oldest first.
    pub fn stack(&self) -> Vec<RouteRef> {
        self.state.borrow().stack.iter().cloned().collect()
    }

    pub fn stack_len(&self) -> usize {
        self.state.borrow().stack.len()
    }

    /// Check if `navigate_back` would land on a previous route.
    pub fn can_go_back(&self) -> bool {
        self.stack_len() > 1
    }

    pub fn stack_capacity(&self) -> usize {
        self.config.stack_capacity
    }

    /// Subscribe to notifications fired before a navigation commits.
    pub fn on_changing(&self, handler: impl Fn(&Router, &RouteChanging) + 'static) -> SubscriptionId {
        let id = self.next_subscription_id();
        self.changing.push(id, Rc::new(handler));
        id
    }

    /// Subscribe to notifications fired after a navigation commits.
    pub fn on_changed(&self, handler: impl Fn(&Router, &RouteChanged) + 'static) -> SubscriptionId {
        let id = self.next_subscription_id();
        self.changed.push(id, Rc::new(handler));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changing.remove(id) || self.changed.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changing.len() + self.changed.len()
    }

    /// Create a `T` through the factory with no parameters and navigate to it.
    pub fn navigate_to<T: RouteKind>(&self) -> Result<RouteRef> {
        self.navigate_to_kind(RouteKindId::of::<T>(), Params::new())
    }

    /// Create a `T` through the factory and navigate to it.
    pub fn navigate_to_with<T: RouteKind>(&self, params: Params) -> Result<RouteRef> {
        self.navigate_to_kind(RouteKindId::of::<T>(), params)
    }

    /// Create a route of `kind` through the factory and navigate to it.
    pub fn navigate_to_kind(&self, kind: RouteKindId, params: Params) -> Result<RouteRef> {
        let route = self.create_route(kind, &params)?;
        Ok(self.commit(route, false))
    }

    /// Navigate to an existing route. Fails with `InvalidArgument` on `None`.
    pub fn navigate_to_route(&self, route: impl Into<Option<RouteRef>>) -> Result<()> {
        let route = Self::require_route(route.into())?;
        self.commit(route, false);
        Ok(())
    }

    /// Like `navigate_to`, but the stack is left holding only the new route.
    pub fn navigate_to_and_reset<T: RouteKind>(&self) -> Result<RouteRef> {
        self.navigate_to_kind_and_reset(RouteKindId::of::<T>(), Params::new())
    }

    /// Like `navigate_to_with`, but the stack is left holding only the new route.
    pub fn navigate_to_with_and_reset<T: RouteKind>(&self, params: Params) -> Result<RouteRef> {
        self.navigate_to_kind_and_reset(RouteKindId::of::<T>(), params)
    }

    /// Like `navigate_to_kind`, but the stack is left holding only the new route.
    pub fn navigate_to_kind_and_reset(&self, kind: RouteKindId, params: Params) -> Result<RouteRef> {
        let route = self.create_route(kind, &params)?;
        Ok(self.commit(route, true))
    }

    /// Like `navigate_to_route`, but the stack is left holding only the new route.
    pub fn navigate_to_route_and_reset(&self, route: impl Into<Option<RouteRef>>) -> Result<()> {
        let route = Self::require_route(route.into())?;
        self.commit(route, true);
        Ok(())
    }

    /// Go back to the previous route.
    ///
    /// With one route or none on the stack there is nowhere to go: the stack
    /// is cleared, the current route becomes `None`, no notification fires,
    /// and `None` is returned.
    ///
    /// "changing" handlers still see the stack as it was. If one of them
    /// navigates, the route being left is removed wherever it now sits and
    /// the top of the stack becomes current, so the handler's route is kept.
    pub fn navigate_back(&self) -> Option<RouteRef> {
        let (leaving, previous, next) = {
            let mut state = self.state.borrow_mut();
            let len = state.stack.len();
            if len <= 1 {
                state.stack.clear();
                state.current = None;
                tracing::debug!(depth = len, "navigate back with no previous route, stack cleared");
                return None;
            }
            (
                Rc::clone(&state.stack[len - 1]),
                state.current.clone(),
                Rc::clone(&state.stack[len - 2]),
            )
        };

        self.changing
            .emit(self, &RouteChanging::new(previous, Some(next)));
        let current = {
            let mut state = self.state.borrow_mut();
            let position = state.stack.iter().rposition(|route| Rc::ptr_eq(route, &leaving));
            if let Some(index) = position {
                state.stack.remove(index);
            }
            state.current = state.stack.back().cloned();
            tracing::debug!(
                route = ?state.current,
                depth = state.stack.len(),
                "navigated back"
            );
            state.current.clone()
        };
        self.changed.emit(self, &RouteChanged::new(current.clone()));
        current
    }

    fn next_subscription_id(&self) -> SubscriptionId {
        let raw = self.next_subscription.get();
        self.next_subscription.set(raw + 1);
        SubscriptionId::new(raw)
    }

    fn require_route(route: Option<RouteRef>) -> Result<RouteRef> {
        route.context(InvalidArgumentSnafu {
            name: "route",
            reason: "a destination route is required",
        })
    }

    fn create_route(&self, kind: RouteKindId, params: &Params) -> Result<RouteRef> {
        let created = self
            .factory
            .create(kind, params)
            .and_then(|route| route.ok_or(FactoryError::NoRoute));
        created
            .inspect_err(|err| {
                tracing::debug!(kind = kind.name(), params = params.len(), error = %err, "route factory failed");
            })
            .context(RouteCreationFailedSnafu { kind: kind.name() })
    }

    /// Shared forward-navigation path.
    ///
    /// Navigating to the current route is a no-op, apart from a reset
    /// collapsing the stack to that route. Otherwise "changing" fires, then
    /// the current route and stack are updated together, then "changed" fires.
    fn commit(&self, route: RouteRef, reset: bool) -> RouteRef {
        let previous = self.current();
        if previous.as_ref().is_some_and(|current| Rc::ptr_eq(current, &route)) {
            if reset {
                let mut state = self.state.borrow_mut();
                state.stack.clear();
                state.stack.push_back(Rc::clone(&route));
            }
            tracing::trace!(route = route.route_name(), reset, "already current, navigation skipped");
            return route;
        }

        self.changing
            .emit(self, &RouteChanging::new(previous, Some(Rc::clone(&route))));
        {
            let mut state = self.state.borrow_mut();
            if reset {
                state.stack.clear();
            }
            state.current = Some(Rc::clone(&route));
            state.stack.push_back(Rc::clone(&route));
            if state.stack.len() > self.config.stack_capacity {
                if let Some(evicted) = state.stack.pop_front() {
                    tracing::trace!(route = evicted.route_name(), "evicted oldest route from stack");
                }
            }
            tracing::debug!(
                route = route.route_name(),
                depth = state.stack.len(),
                reset,
                "navigated"
            );
        }
        self.changed
            .emit(self, &RouteChanged::new(Some(Rc::clone(&route))));
        route
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Router")
            .field("current", &state.current)
            .field("stack_len", &state.stack.len())
            .field("stack_capacity", &self.config.stack_capacity)
            .finish()
    }
}
