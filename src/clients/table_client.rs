//! # Table Client
//!
//! High-level API for the Table actor: registering, relabelling and looking up a
//! restaurant's dining tables.
use crate::model::{
    DiningTable, RestaurantId, TableCreate, TableId, TableNumber, TablePatch, TableQuery,
};
use crate::table_actor::TableError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Table actor.
#[derive(Clone, Debug)]
pub struct TableClient {
    inner: ResourceClient<DiningTable>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<DiningTable>) -> Self {
        Self { inner }
    }

    /// Registers a table. Fails with `Validation` if the label is blank or already taken at
    /// that restaurant.
    #[instrument(skip(self), fields(restaurant_id = %params.restaurant_id))]
    pub async fn register(&self, params: TableCreate) -> Result<DiningTable, TableError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(TableError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_table(
        &self,
        id: TableId,
        patch: TablePatch,
    ) -> Result<DiningTable, TableError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(TableError::from)
    }

    /// A restaurant's tables, ordered by label.
    pub async fn tables_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<DiningTable>, TableError> {
        let mut tables = self.list(TableQuery::Restaurant(restaurant_id)).await?;
        tables.sort_by(|a, b| a.table_number.cmp(&b.table_number));
        Ok(tables)
    }

    /// The table a diner's QR code points at, if the restaurant has registered it.
    pub async fn find(
        &self,
        restaurant_id: RestaurantId,
        table_number: TableNumber,
    ) -> Result<Option<DiningTable>, TableError> {
        let tables = self
            .list(TableQuery::Number(restaurant_id, table_number))
            .await?;
        Ok(tables.into_iter().next())
    }
}

#[async_trait]
impl ActorClient<DiningTable> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<DiningTable> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TableError::from(e)
    }
}
