/// A dining table registered by a restaurant. Orders can only be placed for registered tables.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for DiningTable`](#impl-ActorEntity-for-DiningTable) for details on:
/// - Creation parameters ([`TableCreate`])
/// - Update parameters ([`TablePatch`])
use crate::model::{RestaurantId, TableId, TableNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: TableId,
    pub restaurant_id: RestaurantId,
    /// Unique within the restaurant, stored trimmed.
    pub table_number: TableNumber,
    /// Link printed on the table's QR code. Stored as given, never generated here.
    pub qr_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub restaurant_id: RestaurantId,
    pub table_number: TableNumber,
    pub qr_url: Option<String>,
}

impl TableCreate {
    pub fn new(restaurant_id: RestaurantId, table_number: impl Into<TableNumber>) -> Self {
        Self {
            restaurant_id,
            table_number: table_number.into(),
            qr_url: None,
        }
    }

    pub fn with_qr_url(mut self, qr_url: impl Into<String>) -> Self {
        self.qr_url = Some(qr_url.into());
        self
    }
}

/// `None` fields are left untouched. An empty `qr_url` clears the link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablePatch {
    pub table_number: Option<TableNumber>,
    pub qr_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableQuery {
    Restaurant(RestaurantId),
    /// The table with this label, compared after trimming.
    Number(RestaurantId, TableNumber),
}
