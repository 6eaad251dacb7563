//! Stack-based view-model navigation for terminal and GUI front ends.
//!
//! A `Router` tracks the current route, keeps a bounded history stack, and
//! notifies subscribers before and after every navigation. Routes are created
//! by a caller-supplied `RouteFactory` (usually a `RouteRegistry`) or handed in
//! directly. The `view` module resolves routes to views for a host UI.

extern crate self as rat_router;

pub mod error;
pub mod factory;
pub mod route;
pub mod router;
pub mod view;

#[cfg(test)]
mod testing;

pub use error::{Error, FactoryError, Result};

// Re-export common types for convenience
pub use factory::{factory_fn, Params, RouteFactory, RouteRegistry};
pub use rat_router_macros::Route;
pub use route::{
    downcast_rc, same_route, AsAny, Route, RouteKind, RouteKindId, RouteRef, RouterHost, WeakHost,
};
pub use router::{
    RouteChanged, RouteChanging, Router, RouterBuilder, RouterConfig, SubscriptionId,
    DEFAULT_STACK_CAPACITY,
};
pub use view::{Content, RouteViewHost, ViewLocator, ViewTable};
