//! The root router host.

use crate::pages::{self, Page1ViewModel};
use rat_router::{Router, RouteRef, RouterHost, WeakHost};
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of where a router currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub route: Option<String>,
    pub stack_size: usize,
}

/// Keeps a `Status` in sync with a router through its "changed" notifications.
#[derive(Debug, Clone, Default)]
pub struct RouteStatus(Rc<RefCell<Status>>);

impl RouteStatus {
    pub fn track(router: &Router) -> Self {
        let status = Self::default();
        let cell = Rc::clone(&status.0);
        router.on_changed(move |router, event| {
            let mut status = cell.borrow_mut();
            status.route = event.next().map(|route| route.route_name().to_string());
            status.stack_size = router.stack_len();
        });
        status
    }

    pub fn get(&self) -> Status {
        self.0.borrow().clone()
    }
}

/// Owns the application's top-level router.
pub struct Shell {
    router: Rc<Router>,
    me: WeakHost,
    status: RouteStatus,
}

impl Shell {
    /// Build the shell and reset it to Page 1.
    pub fn new(stack_capacity: usize) -> rat_router::Result<Rc<Self>> {
        let router = Rc::new(
            Router::builder(pages::routes())
                .stack_capacity(stack_capacity)
                .build()?,
        );
        let status = RouteStatus::track(&router);
        let shell = Rc::new_cyclic(|me| Shell {
            router,
            me: WeakHost::from_weak(me.clone()),
            status,
        });
        shell.reset_to_page1()?;
        Ok(shell)
    }

    pub fn host(&self) -> WeakHost {
        self.me.clone()
    }

    pub fn status(&self) -> Status {
        self.status.get()
    }

    pub fn reset_to_page1(&self) -> rat_router::Result<()> {
        let page: RouteRef = Rc::new(Page1ViewModel::new(self.host()));
        self.router.navigate_to_route_and_reset(page)
    }

    /// Go back one page. Does nothing on the first page.
    pub fn navigate_back(&self) -> bool {
        if !self.router.can_go_back() {
            return false;
        }
        self.router.navigate_back().is_some()
    }
}

impl RouterHost for Shell {
    fn router(&self) -> &Rc<Router> {
        &self.router
    }
}
