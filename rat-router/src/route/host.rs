//! Router hosts and the weak handle routes keep back to them.

use crate::router::Router;
use std::fmt;
use std::rc::{Rc, Weak};

/// Anything that owns a router: an application shell, or a route that hosts
/// a nested navigation stack.
pub trait RouterHost {
    fn router(&self) -> &Rc<Router>;
}

/// A weak handle to a router host.
///
/// Routes hold one of these instead of a strong reference so that
/// route -> host -> router -> route never forms an ownership cycle.
#[derive(Clone, Default)]
pub struct WeakHost {
    inner: Option<Weak<dyn RouterHost>>,
}

impl WeakHost {
    /// Create a handle to a live host.
    pub fn new<H: RouterHost + 'static>(host: &Rc<H>) -> Self {
        Self::from_weak(Rc::downgrade(host))
    }

    /// Create a handle from a weak pointer, e.g. inside `Rc::new_cyclic`.
    pub fn from_weak<H: RouterHost + 'static>(weak: Weak<H>) -> Self {
        let weak: Weak<dyn RouterHost> = weak;
        Self { inner: Some(weak) }
    }

    /// A handle that never resolves to a host.
    pub fn detached() -> Self {
        Self { inner: None }
    }

    /// Upgrade to a strong handle, if the host is still alive.
    pub fn upgrade(&self) -> Option<Rc<dyn RouterHost>> {
        self.inner.as_ref().and_then(Weak::upgrade)
    }

    /// Check whether the host is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Run `f` against the host's router if the host is still alive.
    pub fn with_router<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Router) -> R,
    {
        self.upgrade().map(|host| f(host.router()))
    }
}

impl fmt::Debug for WeakHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHost")
            .field("alive", &self.is_alive())
            .finish()
    }
}
