/// A heading on a restaurant's menu ("Starters", "Noodles").
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuCategory`](#impl-ActorEntity-for-MenuCategory) for details on:
/// - Creation parameters ([`CategoryCreate`])
/// - Update parameters ([`CategoryPatch`])
use crate::model::{CategoryId, MenuItem, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: CategoryId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    /// Position on the menu, lowest first. Ties are broken by name.
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub sort_order: i32,
}

impl CategoryCreate {
    pub fn new(restaurant_id: RestaurantId, name: impl Into<String>, sort_order: i32) -> Self {
        Self {
            restaurant_id,
            name: name.into(),
            sort_order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryQuery {
    Restaurant(RestaurantId),
}

/// One category and its items, as a menu page lists them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSection {
    /// `None` for items without a category, or whose category was removed.
    pub category: Option<MenuCategory>,
    pub items: Vec<MenuItem>,
}

/// Sorts categories by `sort_order`, then name.
pub fn sort_categories(categories: &mut [MenuCategory]) {
    categories.sort_by_cached_key(|c| (c.sort_order, c.name.to_lowercase(), c.id));
}

/// Groups `items` under `categories`.
///
/// Sections follow the category order and keep the item order they were given. Categories
/// without items are left out. Uncategorized items come last.
pub fn group_into_sections(
    mut categories: Vec<MenuCategory>,
    items: Vec<MenuItem>,
) -> Vec<MenuSection> {
    sort_categories(&mut categories);

    let mut sections: Vec<MenuSection> = categories
        .into_iter()
        .map(|category| MenuSection {
            category: Some(category),
            items: Vec::new(),
        })
        .collect();
    let mut uncategorized = Vec::new();

    for item in items {
        let slot = sections
            .iter_mut()
            .find(|section| section.category.as_ref().map(|c| c.id) == item.category_id);
        match slot {
            Some(section) => section.items.push(item),
            None => uncategorized.push(item),
        }
    }

    sections.retain(|section| !section.items.is_empty());
    if !uncategorized.is_empty() {
        sections.push(MenuSection {
            category: None,
            items: uncategorized,
        });
    }
    sections
}
