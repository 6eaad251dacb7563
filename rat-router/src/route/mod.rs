//! Route module.
//!
//! Provides the `Route` trait every navigable view-model implements, the
//! `RouteKind` token used by factories, and the host handle routes use to
//! request further navigation.

pub mod host;
pub mod traits;

pub use host::{RouterHost, WeakHost};
pub use traits::{downcast_rc, same_route, AsAny, Route, RouteKind, RouteKindId, RouteRef};
