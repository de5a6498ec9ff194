//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored and served by a [`ResourceActor`].
//! Associated types fix the identifier, the create/update payloads, the custom actions, the
//! query filter used for listing, the injected context and the error type.
//!
//! Hooks run inside the owning actor's task, one request at a time. `on_update` and
//! `handle_action` operate on a working copy; the stored record is only replaced when the
//! hook returns `Ok`, so a failed hook never leaves a half-applied change behind.
//!
//! [`ResourceActor`]: crate::ResourceActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` value is handed to `run()`
/// and passed by reference into every hook, which lets dependencies (other clients, a change
/// notifier) be wired after all actors are constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `List` requests (e.g. "orders for restaurant X").
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message: callers match on a single type,
    /// at the cost of every operation sharing the union of failure cases.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record belongs in the result of `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the record is stored.
    /// Returning an error discards the record.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to a working copy of the record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action on a working copy of the record.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
