//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio. Each resource type (a menu item,
//! an order) is owned by exactly one [`ResourceActor`] task that keeps the records in memory
//! and serves create / get / list / update / delete / action requests sent through a
//! cloneable [`ResourceClient`].
//!
//! ## Why actors for records?
//!
//! - **Isolated state**: the store belongs to one task, so no locks guard it.
//! - **Sequential processing**: requests for a resource type are applied one at a time, which
//!   gives every operation a single, well-defined "before" state. Compare-and-swap style
//!   preconditions (e.g. "advance only if the status is still X") are therefore exact.
//! - **Uniform API**: the same CRUD + Action + List surface for every resource.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - record type, payloads, hooks and query matching
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)` rather than `new()`. All actors can be
//! constructed first, then started with the clients of the actors they depend on.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32, price: u64 }
//! #[derive(Debug)] struct DishCreate(u64);
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Query = (); type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, DishError> {
//!         Ok(Self { id, price: p.0 })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), DishError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), DishError> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Bill { id: u32, dish: u32, total: u64 }
//! #[derive(Debug)] struct BillCreate { dish: u32, quantity: u64 }
//! #[derive(Debug, thiserror::Error)]
//! enum BillError {
//!     #[error("unknown dish {0}")]
//!     UnknownDish(u32),
//!     #[error("{0}")]
//!     Lookup(String),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Bill {
//!     type Id = u32; type Create = BillCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Query = ();
//!     // The bill actor reads dishes through the dish client
//!     type Context = ResourceClient<Dish>;
//!     type Error = BillError;
//!
//!     fn from_create_params(id: u32, p: BillCreate) -> Result<Self, BillError> {
//!         Ok(Self { id, dish: p.dish, total: p.quantity })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_create(&mut self, dishes: &ResourceClient<Dish>) -> Result<(), BillError> {
//!         let dish = dishes.get(self.dish).await.map_err(|e| BillError::Lookup(e.to_string()))?;
//!         let dish = dish.ok_or(BillError::UnknownDish(self.dish))?;
//!         self.total *= dish.price;
//!         Ok(())
//!     }
//!     async fn on_update(&mut self, _: (), _: &ResourceClient<Dish>) -> Result<(), BillError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &ResourceClient<Dish>) -> Result<(), BillError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (dish_actor, dish_client) = ResourceActor::<Dish>::new(10);
//!     let (bill_actor, bill_client) = ResourceActor::<Bill>::new(10);
//!
//!     tokio::spawn(dish_actor.run(()));
//!     tokio::spawn(bill_actor.run(dish_client.clone()));
//!
//!     dish_client.create(DishCreate(850)).await.unwrap();
//!     let bill = bill_client.create(BillCreate { dish: 1, quantity: 2 }).await.unwrap();
//!     assert_eq!(bill.total, 1700);
//! }
//! ```
//!
//! ## Errors
//!
//! Entity hooks return the entity's own error type. The actor boxes it into
//! [`FrameworkError::EntityError`]; clients recover it with
//! [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, so an actor can be
//! tested with its dependencies mocked.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
