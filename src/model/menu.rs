/// A dish or drink on a restaurant's menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemPatch`])
/// - Custom actions ([`MenuAction`](crate::menu_actor::MenuAction))
use crate::model::{CategoryId, Cents, MenuItemId, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: Cents,
    /// Opaque reference to an uploaded picture.
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Creates an available, uncategorized item stamped with the current time.
    pub fn new(
        id: MenuItemId,
        restaurant_id: RestaurantId,
        name: impl Into<String>,
        price_cents: Cents,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            restaurant_id,
            category_id: None,
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for adding an item to a menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: Cents,
    pub image_url: Option<String>,
    pub is_available: bool,
}

impl MenuItemCreate {
    pub fn new(restaurant_id: RestaurantId, name: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            restaurant_id,
            category_id: None,
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
            is_available: true,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of a menu item; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<Cents>,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Filters for listing menu items. Every filter is scoped to one restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuQuery {
    Restaurant(RestaurantId),
    /// Items diners can currently order.
    Available(RestaurantId),
    Category(RestaurantId, CategoryId),
}
