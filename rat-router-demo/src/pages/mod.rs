//! Demo pages. Each file holds a view-model (the route) and the view that draws it.

mod nested;
mod page1;
mod page2;
mod page3;
mod rogue;

pub use nested::{NestedView, NestedViewModel};
pub use page1::{Page1View, Page1ViewModel};
pub use page2::{Page2View, Page2ViewModel};
pub use page3::{Page3View, Page3ViewModel};
pub use rogue::{RogueView, RogueViewModel};

use crate::view::ViewRef;
use rat_router::{RouteKind, RouteRef, RouteRegistry, Router, ViewTable, WeakHost};
use std::rc::Rc;

/// Routes the shell's router can build from a kind plus `(host, ...)` parameters.
pub fn routes() -> RouteRegistry {
    let mut routes = RouteRegistry::new();
    routes
        .register::<Page1ViewModel>(|p| Ok(Page1ViewModel::new(p.cloned(0)?)))
        .register::<Page2ViewModel>(|p| Ok(Page2ViewModel::new(p.cloned(0)?)))
        .register::<RogueViewModel>(|p| Ok(RogueViewModel::new(p.cloned(0)?, *p.get::<u32>(1)?)))
        .register_rc::<NestedViewModel>(|p| Ok(NestedViewModel::new(p.cloned(0)?)));
    routes
}

/// Views for the shell's routes. Page 1, Page 2 and the nested host are
/// bound by type; the rest are found through their derived view names.
pub fn views() -> ViewTable<ViewRef> {
    let mut views = ViewTable::new();
    views
        .register(|vm: Rc<Page1ViewModel>| -> ViewRef { Rc::new(Page1View::new(vm)) })
        .register(|vm: Rc<Page2ViewModel>| -> ViewRef { Rc::new(Page2View::new(vm)) })
        .register(|vm: Rc<NestedViewModel>| -> ViewRef { Rc::new(NestedView::new(vm)) })
        .register_named(RogueViewModel::VIEW, |route: &RouteRef| -> ViewRef {
            Rc::new(RogueView::new(Rc::clone(route)))
        });
    views
}

/// Run a navigation against the router behind `host`.
///
/// A host that has already gone away is logged and otherwise ignored.
fn navigate<R>(host: &WeakHost, f: impl FnOnce(&Router) -> rat_router::Result<R>) -> rat_router::Result<()> {
    match host.with_router(f) {
        Some(result) => result.map(drop),
        None => {
            tracing::warn!("router host is gone, navigation ignored");
            Ok(())
        }
    }
}
