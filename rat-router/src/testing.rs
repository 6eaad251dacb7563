//! Shared fixtures for unit tests.

use crate::{Route, RouteRef, Router, RouteRegistry, RouterHost, WeakHost};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) struct TestHost {
    router: Rc<Router>,
}

impl TestHost {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            router: Rc::new(Router::new(RouteRegistry::new())),
        })
    }
}

impl RouterHost for TestHost {
    fn router(&self) -> &Rc<Router> {
        &self.router
    }
}

#[derive(Route)]
pub(crate) struct MockRoute {
    #[route(host)]
    host: WeakHost,
}

impl MockRoute {
    pub(crate) fn new(host: WeakHost) -> Self {
        Self { host }
    }
}

#[derive(Route)]
#[route(name = "MockRoute")]
pub(crate) struct MockRouteWithParams {
    #[route(host)]
    host: WeakHost,
    pub(crate) p1: i32,
    pub(crate) p2: String,
}

impl MockRouteWithParams {
    pub(crate) fn new(host: WeakHost, p1: i32, p2: String) -> Self {
        Self { host, p1, p2 }
    }
}

/// A fresh route with its own identity and no host.
pub(crate) fn detached_route() -> RouteRef {
    Rc::new(MockRoute::new(WeakHost::detached()))
}

/// Records notifications as `"changing:<prev>-><next>"` / `"changed:<next>"`,
/// with routes labelled by their position in `routes`.
pub(crate) struct EventLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl EventLog {
    pub(crate) fn attach(router: &Router, routes: &[RouteRef]) -> Self {
        let entries = Rc::new(RefCell::new(Vec::new()));

        let label = {
            let routes = routes.to_vec();
            move |route: Option<&RouteRef>| match route {
                None => "none".to_string(),
                Some(route) => routes
                    .iter()
                    .position(|r| Rc::ptr_eq(r, route))
                    .map_or_else(|| "?".to_string(), |i| format!("r{i}")),
            }
        };

        let log = Rc::clone(&entries);
        let changing_label = label.clone();
        router.on_changing(move |_, e| {
            log.borrow_mut().push(format!(
                "changing:{}->{}",
                changing_label(e.previous()),
                changing_label(e.next())
            ));
        });
        let log = Rc::clone(&entries);
        router.on_changed(move |_, e| {
            log.borrow_mut().push(format!("changed:{}", label(e.next())));
        });

        Self { entries }
    }

    pub(crate) fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}
