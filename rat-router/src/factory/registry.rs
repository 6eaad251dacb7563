//! Polymorphic constructor registry.

use super::{Params, RouteFactory};
use crate::error::FactoryError;
use crate::route::{RouteKind, RouteKindId, RouteRef};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

type Builder = Box<dyn Fn(&Params) -> Result<RouteRef, FactoryError>>;

/// A `RouteFactory` backed by one typed builder per route kind.
///
/// # Example
/// ```ignore
/// let mut registry = RouteRegistry::new();
/// registry.register(|params| Ok(CounterViewModel::new(params.cloned::<WeakHost>(0)?)));
/// let router = Router::new(registry);
/// router.navigate_to_with::<CounterViewModel>(params![host])?;
/// ```
#[derive(Default)]
pub struct RouteRegistry {
    builders: HashMap<RouteKindId, Builder>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register the builder for route kind `T`, replacing any previous one.
    pub fn register<T: RouteKind>(
        &mut self,
        build: impl Fn(&Params) -> Result<T, FactoryError> + 'static,
    ) -> &mut Self {
        self.register_rc::<T>(move |params| build(params).map(Rc::new))
    }

    /// Register a builder that hands back an already shared route, for routes
    /// that need `Rc::new_cyclic` (e.g. routes hosting a nested router).
    pub fn register_rc<T: RouteKind>(
        &mut self,
        build: impl Fn(&Params) -> Result<Rc<T>, FactoryError> + 'static,
    ) -> &mut Self {
        let builder: Builder = Box::new(move |params: &Params| {
            let route: RouteRef = build(params)?;
            Ok(route)
        });
        self.builders.insert(RouteKindId::of::<T>(), builder);
        self
    }

    /// Builder-style `register`.
    pub fn with<T: RouteKind>(
        mut self,
        build: impl Fn(&Params) -> Result<T, FactoryError> + 'static,
    ) -> Self {
        self.register(build);
        self
    }

    pub fn contains<T: RouteKind>(&self) -> bool {
        self.builders.contains_key(&RouteKindId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl RouteFactory for RouteRegistry {
    fn create(&self, kind: RouteKindId, params: &Params) -> Result<Option<RouteRef>, FactoryError> {
        match self.builders.get(&kind) {
            Some(build) => build(params).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.builders.keys()).finish()
    }
}
