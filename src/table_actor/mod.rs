//! # Table Actor
//!
//! Owns the dining tables each restaurant has registered. Staff add, relabel and remove
//! tables through a [`TableClient`]; the order actor looks the table up before accepting
//! an order for it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`DiningTable`]
//! - [`labels`] - [`TableLabels`], the actor's context, keeping labels unique per restaurant
//! - [`error`] - [`TableError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use table_order::model::{RestaurantId, TableCreate};
//! use table_order::table_actor::{self, TableLabels};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = table_actor::new(8);
//!     tokio::spawn(actor.run(TableLabels::default()));
//!
//!     let bistro = RestaurantId::new("bistro");
//!     client.register(TableCreate::new(bistro.clone(), "12")).await?;
//!     assert!(client.register(TableCreate::new(bistro.clone(), " 12 ")).await.is_err());
//!     assert!(client.find(bistro, "12".into()).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod labels;

pub use error::*;
pub use labels::TableLabels;

use crate::clients::TableClient;
use crate::model::DiningTable;
use actor_framework::ResourceActor;

/// Creates a new Table actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DiningTable>, TableClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, TableClient::new(inner))
}
