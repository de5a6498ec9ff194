//! # Menu Actor
//!
//! Owns every restaurant's menu items. Staff add, edit, price and toggle items through a
//! [`MenuClient`]; the order actor reads them back to check that what a diner ordered is
//! still on offer.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`actions`] - [`MenuAction`] (availability toggling)
//! - [`error`] - [`MenuError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use table_order::menu_actor;
//! use table_order::model::{Cents, MenuItemCreate, RestaurantId};
//! use table_order::notify::ChangeNotifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(32);
//!     // Context is the change notifier
//!     tokio::spawn(actor.run(ChangeNotifier::new(16)));
//!
//!     let bistro = RestaurantId::new("bistro");
//!     let soup = client
//!         .create_item(MenuItemCreate::new(bistro.clone(), "Miso soup", Cents(450)))
//!         .await?;
//!     client.set_availability(soup.id, false).await?;
//!     assert!(client.available_items(bistro).await?.is_empty());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(inner))
}
