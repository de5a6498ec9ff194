//! # Category Actor
//!
//! Owns the menu headings of every restaurant. Categories only decide how a menu is laid
//! out: [`MenuClient::sections`](crate::clients::MenuClient::sections) groups items under
//! them in `sort_order`. Failures are reported as [`MenuError`](crate::menu_actor::MenuError).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`MenuCategory`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;

use crate::clients::CategoryClient;
use crate::model::MenuCategory;
use actor_framework::ResourceActor;

/// Creates a new Category actor and its client. The actor runs with `()` as context.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuCategory>, CategoryClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(inner))
}
