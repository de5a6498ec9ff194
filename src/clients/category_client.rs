//! # Category Client
//!
//! High-level API for the Category actor. Errors are [`MenuError`]s, since categories are part
//! of the menu.
use crate::menu_actor::MenuError;
use crate::model::{
    sort_categories, CategoryCreate, CategoryId, CategoryPatch, CategoryQuery, MenuCategory,
    RestaurantId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct CategoryClient {
    inner: ResourceClient<MenuCategory>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<MenuCategory>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self), fields(restaurant_id = %params.restaurant_id))]
    pub async fn create_category(
        &self,
        params: CategoryCreate,
    ) -> Result<MenuCategory, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> Result<MenuCategory, MenuError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(MenuError::from)
    }

    /// A restaurant's categories in menu order (`sort_order`, then name).
    pub async fn categories_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuCategory>, MenuError> {
        let mut categories = self.list(CategoryQuery::Restaurant(restaurant_id)).await?;
        sort_categories(&mut categories);
        Ok(categories)
    }
}

#[async_trait]
impl ActorClient<MenuCategory> for CategoryClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuCategory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    fn category(id: u32, name: &str, sort_order: i32) -> MenuCategory {
        MenuCategory {
            id: CategoryId(id),
            restaurant_id: "bistro".into(),
            name: name.to_string(),
            sort_order,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_categories_in_menu_order() {
        let mut mock = MockClient::<MenuCategory>::new();
        mock.expect_list().return_ok(vec![
            category(1, "Drinks", 9),
            category(2, "starters", 0),
            category(3, "Mains", 0),
        ]);
        let client = CategoryClient::new(mock.client());

        let names: Vec<String> = client
            .categories_for_restaurant("bistro".into())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Mains", "starters", "Drinks"]);
        mock.verify();
    }
}
