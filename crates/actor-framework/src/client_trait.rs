//! # ActorClient Trait
//!
//! Shared read/delete operations for resource-specific client wrappers, with framework errors
//! translated into the wrapper's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors provide the inner `ResourceClient` and an error mapping; `get`, `list` and
/// `delete` come for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Table { id: u32, seats: u8 }
/// #[derive(Debug)] struct TableCreate(u8);
/// #[derive(Debug, thiserror::Error)]
/// enum TableError {
///     #[error("{0}")]
///     Communication(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Update = ();
///     type Action = ();
///     type ActionResult = ();
///     type Query = u8;
///     type Context = ();
///     type Error = TableError;
///
///     fn from_create_params(id: u32, params: TableCreate) -> Result<Self, TableError> {
///         Ok(Self { id, seats: params.0 })
///     }
///     fn matches(&self, min_seats: &u8) -> bool { self.seats >= *min_seats }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), TableError> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), TableError> { Ok(()) }
/// }
///
/// struct TableClient { inner: ResourceClient<Table> }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///     fn inner(&self) -> &ResourceClient<Table> { &self.inner }
///     fn map_error(e: FrameworkError) -> TableError { TableError::Communication(e.to_string()) }
/// }
///
/// async fn large_tables(client: &TableClient) -> Result<Vec<Table>, TableError> {
///     // list() is provided by the trait
///     client.list(6).await
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
