//! Route trait definitions.

use super::host::RouterHost;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Shared handle to a route. The router compares these by identity, never by value.
pub type RouteRef = Rc<dyn Route>;

/// Upcasting helper so `dyn Route` can be downcast to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

/// A unit of navigation state, usually a view-model for one screen.
///
/// Most implementations come from `#[derive(Route)]`.
pub trait Route: AsAny {
    /// Human-readable name of the route kind.
    fn route_name(&self) -> &str;

    /// The host that created this route, if it is still alive.
    fn router_host(&self) -> Option<Rc<dyn RouterHost>>;

    /// Name of the view this route is displayed with, used by `ViewTable`.
    fn view_name(&self) -> Option<&str> {
        None
    }
}

impl dyn Route {
    /// Returns true if the route is a `T`.
    pub fn is<T: Route>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    /// Borrow the route as its concrete type.
    pub fn downcast_ref<T: Route>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({})", self.route_name())
    }
}

/// Recover a typed `Rc<T>` sharing the same allocation as `route`.
pub fn downcast_rc<T: Route>(route: &RouteRef) -> Option<Rc<T>> {
    AsAny::into_any_rc(Rc::clone(route)).downcast::<T>().ok()
}

/// Identity comparison of two routes.
pub fn same_route(a: &RouteRef, b: &RouteRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Compile-time description of a concrete route type.
pub trait RouteKind: Route + Sized {
    /// Route name, also returned by `Route::route_name`.
    const KIND: &'static str;
    /// View name derived from the type name (`FooViewModel` -> `FooView`).
    const VIEW: &'static str;
}

/// Opaque token naming a route kind, passed to route factories.
#[derive(Clone, Copy)]
pub struct RouteKindId {
    type_id: TypeId,
    name: &'static str,
}

impl RouteKindId {
    pub fn of<T: RouteKind>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::KIND,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn is<T: RouteKind>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for RouteKindId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for RouteKindId {}

impl Hash for RouteKindId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for RouteKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteKindId({})", self.name)
    }
}

impl fmt::Display for RouteKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
