//! Router module.
//!
//! Provides the `Router` state machine, its configuration, and the
//! changing/changed notification payloads.

pub mod config;
pub mod events;
pub mod state;

pub use config::{RouterBuilder, RouterConfig, DEFAULT_STACK_CAPACITY};
pub use events::{RouteChanged, RouteChanging, SubscriptionId};
pub use state::Router;
