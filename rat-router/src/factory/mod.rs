//! Route factories.
//!
//! A factory maps a `RouteKindId` plus untyped construction parameters to a
//! new route. `RouteRegistry` is the usual implementation: one typed builder
//! per route kind, selected when the router is constructed.

pub mod params;
pub mod registry;

pub use params::Params;
pub use registry::RouteRegistry;

use crate::error::FactoryError;
use crate::route::{RouteKindId, RouteRef};

/// Creates routes on behalf of a router.
///
/// Returning `Ok(None)` means the factory does not know how to build `kind`.
/// Parameter validation is the factory's job; mismatches should come back as
/// a `FactoryError`.
pub trait RouteFactory {
    fn create(&self, kind: RouteKindId, params: &Params) -> Result<Option<RouteRef>, FactoryError>;
}

impl<F> RouteFactory for F
where
    F: Fn(RouteKindId, &Params) -> Result<Option<RouteRef>, FactoryError>,
{
    fn create(&self, kind: RouteKindId, params: &Params) -> Result<Option<RouteRef>, FactoryError> {
        self(kind, params)
    }
}

/// Pin a closure to the `RouteFactory` signature so its argument types are inferred.
///
/// # Example
/// ```ignore
/// let router = Router::new(factory_fn(|kind, _params| {
///     Ok(kind.is::<HomeViewModel>().then(|| home.clone()))
/// }));
/// ```
pub fn factory_fn<F>(f: F) -> F
where
    F: Fn(RouteKindId, &Params) -> Result<Option<RouteRef>, FactoryError>,
{
    f
}
