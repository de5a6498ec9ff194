//! [`ActorEntity`] implementation for [`MenuItem`].
//!
//! The menu actor's context is the [`ChangeNotifier`]; every committed change is published
//! from the hook that makes it.

use super::actions::MenuAction;
use super::error::MenuError;
use crate::model::{Cents, MenuItem, MenuItemCreate, MenuItemId, MenuItemPatch, MenuQuery};
use crate::notify::{ChangeEvent, ChangeNotifier};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

fn checked_name(name: &str) -> Result<String, MenuError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MenuError::Validation("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn checked_price(price: Cents) -> Result<Cents, MenuError> {
    if price.is_zero() {
        return Err(MenuError::Validation(
            "price must be greater than zero".to_string(),
        ));
    }
    if price > Cents::MAX_PRICE {
        return Err(MenuError::Validation(format!(
            "price may not exceed {}",
            Cents::MAX_PRICE
        )));
    }
    Ok(price)
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemPatch;
    type Action = MenuAction;
    type ActionResult = MenuItem;
    type Query = MenuQuery;
    type Context = ChangeNotifier;
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        let name = checked_name(&params.name)?;
        let price = checked_price(params.price_cents)?;

        let mut item = MenuItem::new(id, params.restaurant_id, name, price);
        item.category_id = params.category_id;
        item.description = params.description.and_then(non_blank);
        item.image_url = params.image_url.and_then(non_blank);
        item.is_available = params.is_available;
        Ok(item)
    }

    fn matches(&self, query: &MenuQuery) -> bool {
        match query {
            MenuQuery::Restaurant(restaurant_id) => &self.restaurant_id == restaurant_id,
            MenuQuery::Available(restaurant_id) => {
                &self.restaurant_id == restaurant_id && self.is_available
            }
            MenuQuery::Category(restaurant_id, category_id) => {
                &self.restaurant_id == restaurant_id
                    && self.category_id.as_ref() == Some(category_id)
            }
        }
    }

    async fn on_create(&mut self, notifier: &ChangeNotifier) -> Result<(), MenuError> {
        notifier.publish(ChangeEvent::MenuItemChanged(self.clone()));
        Ok(())
    }

    /// Applies the set fields of the patch. Name and price are checked like on create.
    async fn on_update(
        &mut self,
        patch: MenuItemPatch,
        notifier: &ChangeNotifier,
    ) -> Result<(), MenuError> {
        if let Some(name) = patch.name {
            self.name = checked_name(&name)?;
        }
        if let Some(price) = patch.price_cents {
            self.price_cents = checked_price(price)?;
        }
        if let Some(description) = patch.description {
            self.description = non_blank(description);
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = non_blank(image_url);
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
        self.updated_at = Utc::now();

        notifier.publish(ChangeEvent::MenuItemChanged(self.clone()));
        Ok(())
    }

    async fn on_delete(&self, notifier: &ChangeNotifier) -> Result<(), MenuError> {
        notifier.publish(ChangeEvent::MenuItemRemoved {
            restaurant_id: self.restaurant_id.clone(),
            id: self.id,
        });
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        notifier: &ChangeNotifier,
    ) -> Result<MenuItem, MenuError> {
        match action {
            MenuAction::SetAvailability(is_available) => {
                if self.is_available == is_available {
                    debug!(id = %self.id, is_available, "Availability unchanged");
                    return Ok(self.clone());
                }
                self.is_available = is_available;
                self.updated_at = Utc::now();
                notifier.publish(ChangeEvent::MenuItemChanged(self.clone()));
                Ok(self.clone())
            }
        }
    }
}
