//! # Menu Client
//!
//! High-level API for the Menu actor. Wraps a `ResourceClient<MenuItem>`; `get`, `list` and
//! `delete` come from [`ActorClient`].
use crate::clients::CategoryClient;
use crate::menu_actor::{MenuAction, MenuError};
use crate::model::{
    group_into_sections, CategoryId, CategoryQuery, MenuItem, MenuItemCreate, MenuItemId,
    MenuItemPatch, MenuQuery, MenuSection, RestaurantId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone, Debug)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds an item to a restaurant's menu.
    #[instrument(skip(self), fields(restaurant_id = %params.restaurant_id))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(MenuError::from)
    }

    /// Marks an item as orderable or sold out and returns it as stored.
    #[instrument(skip(self))]
    pub async fn set_availability(
        &self,
        id: MenuItemId,
        is_available: bool,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, MenuAction::SetAvailability(is_available))
            .await
            .map_err(MenuError::from)
    }

    /// The whole menu of a restaurant, sorted by name.
    pub async fn items_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let items = self.list(MenuQuery::Restaurant(restaurant_id)).await?;
        Ok(sorted_by_name(items))
    }

    /// What diners can order right now, sorted by name.
    pub async fn available_items(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let items = self.list(MenuQuery::Available(restaurant_id)).await?;
        Ok(sorted_by_name(items))
    }

    pub async fn items_in_category(
        &self,
        restaurant_id: RestaurantId,
        category_id: CategoryId,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let items = self
            .list(MenuQuery::Category(restaurant_id, category_id))
            .await?;
        Ok(sorted_by_name(items))
    }

    /// The diner's menu: available items grouped under the restaurant's categories in
    /// `sort_order`, each group sorted by name. Items without a known category come last.
    pub async fn sections(
        &self,
        restaurant_id: RestaurantId,
        categories: &CategoryClient,
    ) -> Result<Vec<MenuSection>, MenuError> {
        let items = self.available_items(restaurant_id.clone()).await?;
        let categories = categories
            .list(CategoryQuery::Restaurant(restaurant_id))
            .await?;
        Ok(group_into_sections(categories, items))
    }
}

fn sorted_by_name(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.sort_by_cached_key(|item| (item.name.to_lowercase(), item.id));
    items
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}
