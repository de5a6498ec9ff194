//! [`ActorEntity`] implementation for [`DiningTable`].
//!
//! Labels are trimmed before they are stored or compared, so "12" and " 12 " are the same
//! table.

use super::error::TableError;
use super::labels::TableLabels;
use crate::model::{DiningTable, TableCreate, TableId, TableNumber, TablePatch, TableQuery};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

fn checked_number(number: &TableNumber) -> Result<TableNumber, TableError> {
    if number.is_blank() {
        return Err(TableError::Validation(
            "table number is required".to_string(),
        ));
    }
    Ok(number.trimmed())
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl ActorEntity for DiningTable {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TablePatch;
    type Action = ();
    type ActionResult = ();
    type Query = TableQuery;
    type Context = TableLabels;
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            table_number: checked_number(&params.table_number)?,
            qr_url: params.qr_url.and_then(non_blank),
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &TableQuery) -> bool {
        match query {
            TableQuery::Restaurant(restaurant_id) => &self.restaurant_id == restaurant_id,
            TableQuery::Number(restaurant_id, number) => {
                &self.restaurant_id == restaurant_id
                    && self.table_number.as_str() == number.as_str().trim()
            }
        }
    }

    async fn on_create(&mut self, labels: &TableLabels) -> Result<(), TableError> {
        if !labels.claim(&self.restaurant_id, &self.table_number) {
            return Err(TableError::Validation(format!(
                "table {} already exists at {}",
                self.table_number, self.restaurant_id
            )));
        }
        info!(id = %self.id, table_number = %self.table_number, "Table registered");
        Ok(())
    }

    /// Renaming claims the new label before giving up the old one.
    async fn on_update(
        &mut self,
        patch: TablePatch,
        labels: &TableLabels,
    ) -> Result<(), TableError> {
        if let Some(number) = patch.table_number {
            let number = checked_number(&number)?;
            if number != self.table_number {
                if !labels.claim(&self.restaurant_id, &number) {
                    return Err(TableError::Validation(format!(
                        "table {} already exists at {}",
                        number, self.restaurant_id
                    )));
                }
                labels.release(&self.restaurant_id, &self.table_number);
                self.table_number = number;
            }
        }
        if let Some(qr_url) = patch.qr_url {
            self.qr_url = non_blank(qr_url);
        }
        Ok(())
    }

    async fn on_delete(&self, labels: &TableLabels) -> Result<(), TableError> {
        labels.release(&self.restaurant_id, &self.table_number);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _labels: &TableLabels,
    ) -> Result<(), TableError> {
        Ok(())
    }
}
