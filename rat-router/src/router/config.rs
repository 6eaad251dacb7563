//! Router configuration.

use super::Router;
use crate::error::{InvalidArgumentSnafu, Result};
use crate::factory::RouteFactory;
use snafu::ensure;

/// Number of routes kept in the navigation stack unless configured otherwise.
pub const DEFAULT_STACK_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Maximum stack length; the oldest entries are evicted past this.
    pub stack_capacity: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

/// Builder for a `Router` with non-default configuration.
///
/// # Example
/// ```ignore
/// let router = Router::builder(registry).stack_capacity(10).build()?;
/// ```
pub struct RouterBuilder {
    factory: Box<dyn RouteFactory>,
    config: RouterConfig,
}

impl RouterBuilder {
    pub(crate) fn new(factory: Box<dyn RouteFactory>) -> Self {
        Self {
            factory,
            config: RouterConfig::default(),
        }
    }

    pub fn stack_capacity(mut self, capacity: usize) -> Self {
        self.config.stack_capacity = capacity;
        self
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the router. Fails with `InvalidArgument` if the capacity is zero.
    pub fn build(self) -> Result<Router> {
        ensure!(
            self.config.stack_capacity > 0,
            InvalidArgumentSnafu {
                name: "stack_capacity",
                reason: "must be greater than zero",
            }
        );
        Ok(Router::from_parts(self.factory, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::RouteRegistry;
    use crate::Error;

    #[test]
    fn test_default_capacity() {
        let router = Router::new(RouteRegistry::new());
        assert_eq!(router.stack_capacity(), DEFAULT_STACK_CAPACITY);
        assert_eq!(RouterConfig::default().stack_capacity, 50);
    }

    #[test]
    fn test_custom_capacity() {
        let router = Router::builder(RouteRegistry::new())
            .stack_capacity(3)
            .build()
            .unwrap();
        assert_eq!(router.stack_capacity(), 3);

        let router = Router::builder(RouteRegistry::new())
            .config(RouterConfig { stack_capacity: 7 })
            .build()
            .unwrap();
        assert_eq!(router.stack_capacity(), 7);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Router::builder(RouteRegistry::new())
            .stack_capacity(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "stack_capacity", .. }));
    }
}
