//! # Cart
//!
//! A diner's selection before checkout. One `Cart` per session, owned by that session and
//! never shared, so it carries no locks. It is never persisted: on checkout
//! [`OrderCreate::from_cart`](crate::model::OrderCreate::from_cart) takes a snapshot and the
//! cart is cleared.
//!
//! Each line copies the name and unit price of the menu item at the moment it was added.
//! Totals are integer sums over those copies.
//!
//! ```rust
//! use table_order::cart::Cart;
//! use table_order::model::{Cents, MenuItem, MenuItemId, RestaurantId};
//!
//! let bistro = RestaurantId::new("bistro");
//! let ramen = MenuItem::new(MenuItemId(1), bistro.clone(), "Ramen", Cents(850));
//!
//! let mut cart = Cart::new(bistro);
//! cart.add_item(&ramen).unwrap();
//! cart.add_item(&ramen).unwrap();
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.total_price(), Cents(1700));
//! ```

pub mod error;

pub use error::*;

use crate::model::{Cents, MenuItem, MenuItemId, RestaurantId};
use serde::{Deserialize, Serialize};

/// Largest quantity a single line may hold unless configured otherwise.
pub const DEFAULT_MAX_LINE_QUANTITY: u32 = 99;

/// One menu item in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: Cents,
    pub quantity: u32,
}

impl CartLine {
    /// Quantity times unit price, or `None` if it does not fit in `Cents`.
    pub fn line_total(&self) -> Option<Cents> {
        self.unit_price.checked_mul(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    restaurant_id: RestaurantId,
    /// Insertion order, at most one line per menu item. The total of all lines never exceeds
    /// `Cents::MAX_ORDER_TOTAL`.
    lines: Vec<CartLine>,
    max_line_quantity: u32,
}

impl Cart {
    pub fn new(restaurant_id: RestaurantId) -> Self {
        Self::with_line_limit(restaurant_id, DEFAULT_MAX_LINE_QUANTITY)
    }

    /// A cart whose lines are capped at `max_line_quantity` (at least 1).
    pub fn with_line_limit(restaurant_id: RestaurantId, max_line_quantity: u32) -> Self {
        Self {
            restaurant_id,
            lines: Vec::new(),
            max_line_quantity: max_line_quantity.max(1),
        }
    }

    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    /// Adds one unit of `item`, inserting a new line if needed.
    ///
    /// # Errors
    /// `CartError::Validation` if the item is unavailable, belongs to another restaurant,
    /// has no price or a price above `Cents::MAX_PRICE`, the line is already at the cap, or
    /// the cart total would pass `Cents::MAX_ORDER_TOTAL`.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), CartError> {
        if !item.is_available {
            return Err(CartError::Validation(format!(
                "{} is currently unavailable",
                item.name
            )));
        }
        if item.restaurant_id != self.restaurant_id {
            return Err(CartError::Validation(format!(
                "{} is not on the menu of {}",
                item.name, self.restaurant_id
            )));
        }
        if item.price_cents.is_zero() {
            return Err(CartError::Validation(format!(
                "{} has no price",
                item.name
            )));
        }
        if item.price_cents > Cents::MAX_PRICE {
            return Err(CartError::Validation(format!(
                "{} costs more than {}",
                item.name,
                Cents::MAX_PRICE
            )));
        }

        let Some(index) = self.position(item.id) else {
            self.ensure_total_within_limit(item.id, item.price_cents, 1)?;
            self.lines.push(CartLine {
                menu_item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price_cents,
                quantity: 1,
            });
            return Ok(());
        };

        let max = self.max_line_quantity;
        let line = &self.lines[index];
        if line.quantity >= max {
            return Err(CartError::Validation(format!(
                "at most {max} of {} per order",
                line.name
            )));
        }
        self.ensure_total_within_limit(item.id, line.unit_price, line.quantity + 1)?;
        self.lines[index].quantity += 1;
        Ok(())
    }

    /// Sets a line's quantity. Zero or less removes the line.
    ///
    /// # Errors
    /// - `CartError::NotFound` for a positive quantity on an item not in the cart
    /// - `CartError::Validation` if `quantity` exceeds the per-line cap or would push the
    ///   cart total past `Cents::MAX_ORDER_TOTAL`
    pub fn update_quantity(&mut self, id: MenuItemId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove_item(id);
            return Ok(());
        }
        let max = self.max_line_quantity;
        let index = self.position(id).ok_or(CartError::NotFound(id))?;
        let line = &self.lines[index];
        let quantity = match u32::try_from(quantity) {
            Ok(quantity) if quantity <= max => quantity,
            _ => {
                return Err(CartError::Validation(format!(
                    "at most {max} of {} per order",
                    line.name
                )))
            }
        };
        self.ensure_total_within_limit(id, line.unit_price, quantity)?;
        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Drops the line for `id`, if any.
    pub fn remove_item(&mut self, id: MenuItemId) {
        self.lines.retain(|line| line.menu_item_id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.menu_item_id == id)
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }

    /// Sum of quantity times unit price over all lines.
    pub fn total_price(&self) -> Cents {
        // Every edit is checked against MAX_ORDER_TOTAL, so the sum always fits.
        self.total_with(None, Cents::ZERO)
            .unwrap_or(Cents::MAX_ORDER_TOTAL)
    }

    fn position(&self, id: MenuItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.menu_item_id == id)
    }

    /// Cart total with the line for `replaced` (if any) swapped for `amount`.
    fn total_with(&self, replaced: Option<MenuItemId>, amount: Cents) -> Option<Cents> {
        self.lines
            .iter()
            .filter(|line| Some(line.menu_item_id) != replaced)
            .try_fold(amount, |total, line| total.checked_add(line.line_total()?))
    }

    fn ensure_total_within_limit(
        &self,
        id: MenuItemId,
        unit_price: Cents,
        quantity: u32,
    ) -> Result<(), CartError> {
        let total = unit_price
            .checked_mul(quantity)
            .and_then(|amount| self.total_with(Some(id), amount));
        match total {
            Some(total) if total <= Cents::MAX_ORDER_TOTAL => Ok(()),
            _ => Err(CartError::Validation(format!(
                "order total may not exceed {}",
                Cents::MAX_ORDER_TOTAL
            ))),
        }
    }
}
