//! # Order Actor
//!
//! Owns every placed order, its line snapshots and its status history.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction::Advance`], the only way an order changes after placement
//! - [`numbering`] - per-restaurant order numbers
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with an [`OrderContext`]: the table client (to confirm the diner's table is
//! registered), the menu client (to confirm ordered items are still on offer), the change
//! notifier and the order-number counters.
//!
//! ## Concurrency
//!
//! The actor applies one request at a time. An advance carries the status the caller last
//! saw; when two staff members race on the same order, the first one wins and the second
//! gets [`OrderError::ConcurrentModification`] instead of silently skipping a status. An
//! advance also names the caller's restaurant; another restaurant's order answers `NotFound`.

pub mod actions;
pub mod entity;
pub mod error;
pub mod numbering;

pub use actions::*;
pub use error::*;
pub use numbering::{OrderNumbers, FIRST_ORDER_NUMBER, LAST_ORDER_NUMBER};

use crate::clients::{MenuClient, OrderClient, TableClient};
use crate::model::Order;
use crate::notify::ChangeNotifier;
use actor_framework::ResourceActor;

/// Dependencies injected into the Order actor's `run()`.
#[derive(Debug)]
pub struct OrderContext {
    pub menu: MenuClient,
    pub tables: TableClient,
    pub notifier: ChangeNotifier,
    pub numbers: OrderNumbers,
}

impl OrderContext {
    pub fn new(
        menu: MenuClient,
        tables: TableClient,
        notifier: ChangeNotifier,
        numbers: OrderNumbers,
    ) -> Self {
        Self {
            menu,
            tables,
            notifier,
            numbers,
        }
    }
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(inner))
}
