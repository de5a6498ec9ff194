//! [`ActorEntity`] implementation for [`MenuCategory`].

use crate::menu_actor::MenuError;
use crate::model::{CategoryCreate, CategoryId, CategoryPatch, CategoryQuery, MenuCategory};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn checked_name(name: &str) -> Result<String, MenuError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MenuError::Validation(
            "category name must not be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for MenuCategory {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryPatch;
    type Action = ();
    type ActionResult = ();
    type Query = CategoryQuery;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, MenuError> {
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: checked_name(&params.name)?,
            sort_order: params.sort_order,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &CategoryQuery) -> bool {
        match query {
            CategoryQuery::Restaurant(restaurant_id) => &self.restaurant_id == restaurant_id,
        }
    }

    async fn on_update(&mut self, patch: CategoryPatch, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = patch.name {
            self.name = checked_name(&name)?;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}
