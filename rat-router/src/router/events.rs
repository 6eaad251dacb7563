//! Change notification payloads and the ordered listener lists behind them.

use super::Router;
use crate::route::RouteRef;
use std::cell::RefCell;
use std::rc::Rc;

/// Emitted before a navigation commits.
#[derive(Debug, Clone)]
pub struct RouteChanging {
    previous: Option<RouteRef>,
    next: Option<RouteRef>,
}

impl RouteChanging {
    pub(crate) fn new(previous: Option<RouteRef>, next: Option<RouteRef>) -> Self {
        Self { previous, next }
    }

    /// The route that is current when the notification fires.
    pub fn previous(&self) -> Option<&RouteRef> {
        self.previous.as_ref()
    }

    /// The route about to become current.
    pub fn next(&self) -> Option<&RouteRef> {
        self.next.as_ref()
    }
}

/// Emitted after a navigation commits.
#[derive(Debug, Clone)]
pub struct RouteChanged {
    next: Option<RouteRef>,
}

impl RouteChanged {
    pub(crate) fn new(next: Option<RouteRef>) -> Self {
        Self { next }
    }

    /// The route that is now current.
    pub fn next(&self) -> Option<&RouteRef> {
        self.next.as_ref()
    }
}

/// Handle returned by `Router::on_changing` / `Router::on_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

type Handler<E> = Rc<dyn Fn(&Router, &E)>;

/// Subscribers of one channel, notified in subscription order.
pub(crate) struct ListenerList<E> {
    entries: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
}

impl<E> ListenerList<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn push(&self, id: SubscriptionId, handler: Handler<E>) {
        self.entries.borrow_mut().push((id, handler));
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Notify every subscriber registered when the call starts.
    ///
    /// The list is snapshotted first, so handlers may subscribe, unsubscribe
    /// or navigate without tripping over the borrow.
    pub(crate) fn emit(&self, router: &Router, event: &E) {
        let snapshot: Vec<Handler<E>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler(router, event);
        }
    }
}
