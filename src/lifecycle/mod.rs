//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies in `run(context)`:
//!
//! - menu actor: `Context = ChangeNotifier`
//! - order actor: `Context = OrderContext { menu: MenuClient, notifier, numbers }`
//!
//! The dependency graph is acyclic (orders read the menu, never the other way round), so
//! closing the channels is enough to shut down; see [`OrderSystem::shutdown`].
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`](self::tracing) module.

pub mod order_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use order_system::*;
