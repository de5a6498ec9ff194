/// A submitted order and its lifecycle.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
///
/// The lifecycle rules themselves ([`Order::place`], [`Order::advance`]) are plain
/// functions on the record and do no I/O.
use crate::cart::{Cart, CartLine};
use crate::model::{Cents, CustomerId, MenuItemId, OrderId, RestaurantId, StaffId, TableNumber};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// Where an order is in the kitchen pipeline.
///
/// The chain is strictly linear: every status except `Finished` has exactly one successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending = 0,
    Received = 1,
    Preparing = 2,
    Finished = 3,
}

impl OrderStatus {
    /// The pipeline, in order. `next()` and `step()` are both read from this table.
    pub const SEQUENCE: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Finished,
    ];

    /// Position in [`Self::SEQUENCE`], 0..=3. Used for progress display.
    pub fn step(self) -> usize {
        self as usize
    }

    /// The only legal successor, or `None` for `Finished`.
    pub fn next(self) -> Option<OrderStatus> {
        Self::SEQUENCE.get(self.step() + 1).copied()
    }

    /// Still on its way to the table.
    pub fn is_active(self) -> bool {
        self.next().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Finished => "finished",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who caused a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EventActor {
    Customer(CustomerId),
    Staff(StaffId),
}

/// Snapshot of one cart line at checkout. Never recomputed from menu data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    /// Traceability only; the item may since have changed or been removed.
    pub menu_item_id: MenuItemId,
    pub name_snapshot: String,
    pub price_cents_snapshot: Cents,
    pub quantity: u32,
}

impl OrderLine {
    /// `None` only for a line that was never validated by [`Order::place`].
    pub fn line_total(&self) -> Option<Cents> {
        self.price_cents_snapshot.checked_mul(self.quantity)
    }
}

/// Append-only history entry: the status the order entered, and who moved it there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub actor: EventActor,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    pub table_number: TableNumber,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub comment: Option<String>,
    pub subtotal_cents: Cents,
    /// Equal to the subtotal; no tax or service fee is modeled.
    pub total_cents: Cents,
    /// Human-facing 5-digit number, assigned by the order actor.
    pub order_number: u32,
    pub lines: Vec<OrderLine>,
    pub events: Vec<OrderEvent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Checkout payload: an immutable snapshot of a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub restaurant_id: RestaurantId,
    pub table_number: TableNumber,
    pub customer_id: CustomerId,
    pub comment: Option<String>,
    pub lines: Vec<CartLine>,
}

impl OrderCreate {
    /// Snapshots `cart` for checkout. The cart itself is left untouched.
    ///
    /// # Errors
    /// `OrderError::Validation` if the cart is empty or the table number is blank.
    pub fn from_cart(
        cart: &Cart,
        table_number: TableNumber,
        customer_id: CustomerId,
        comment: Option<String>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::Validation("cart is empty".to_string()));
        }
        if table_number.is_blank() {
            return Err(OrderError::Validation(
                "table number is required".to_string(),
            ));
        }
        Ok(Self {
            restaurant_id: cart.restaurant_id().clone(),
            table_number,
            customer_id,
            comment: comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            lines: cart.lines().to_vec(),
        })
    }

    /// Exact sum of the line totals.
    ///
    /// # Errors
    /// `OrderError::Validation` if the sum passes `Cents::MAX_ORDER_TOTAL`.
    pub fn subtotal(&self) -> Result<Cents, OrderError> {
        let subtotal = self
            .lines
            .iter()
            .try_fold(Cents::ZERO, |total, line| total.checked_add(line.line_total()?));
        match subtotal {
            Some(subtotal) if subtotal <= Cents::MAX_ORDER_TOTAL => Ok(subtotal),
            _ => Err(OrderError::Validation(format!(
                "order total may not exceed {}",
                Cents::MAX_ORDER_TOTAL
            ))),
        }
    }
}

/// Filters for listing orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    Restaurant(RestaurantId),
    /// Not yet finished.
    Active(RestaurantId),
    /// One diner's orders at one restaurant.
    Customer(RestaurantId, CustomerId),
}

impl Order {
    /// Builds a `pending` order from a checkout snapshot.
    ///
    /// The first history entry records `pending` by the submitting customer. The order number
    /// is left at 0 for the caller to assign.
    ///
    /// # Errors
    /// `OrderError::Validation` for an empty snapshot, a blank table, a zero quantity, a unit
    /// price outside `0.01..=Cents::MAX_PRICE`, the same menu item on two lines, or a total
    /// above `Cents::MAX_ORDER_TOTAL`.
    pub fn place(id: OrderId, params: OrderCreate, now: DateTime<Utc>) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::Validation("order has no lines".to_string()));
        }
        if params.table_number.is_blank() {
            return Err(OrderError::Validation(
                "table number is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for line in &params.lines {
            if line.quantity == 0 {
                return Err(OrderError::Validation(format!(
                    "quantity for {} must be at least 1",
                    line.menu_item_id
                )));
            }
            if line.unit_price.is_zero() || line.unit_price > Cents::MAX_PRICE {
                return Err(OrderError::Validation(format!(
                    "price of {} must be between 0.01 and {}",
                    line.name,
                    Cents::MAX_PRICE
                )));
            }
            if !seen.insert(line.menu_item_id) {
                return Err(OrderError::Validation(format!(
                    "{} appears on more than one line",
                    line.menu_item_id
                )));
            }
        }

        let subtotal = params.subtotal()?;
        let lines = params
            .lines
            .into_iter()
            .map(|line| OrderLine {
                order_id: id,
                menu_item_id: line.menu_item_id,
                name_snapshot: line.name,
                price_cents_snapshot: line.unit_price,
                quantity: line.quantity,
            })
            .collect();
        let first_event = OrderEvent {
            order_id: id,
            status: OrderStatus::Pending,
            actor: EventActor::Customer(params.customer_id.clone()),
            created_at: now,
        };

        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            table_number: params.table_number,
            customer_id: params.customer_id,
            status: OrderStatus::Pending,
            comment: params.comment,
            subtotal_cents: subtotal,
            total_cents: subtotal,
            order_number: 0,
            lines,
            events: vec![first_event],
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves the order to its successor status, provided it is still at `expected`.
    ///
    /// Appends one history entry and bumps `updated_at`. On error nothing changes.
    ///
    /// # Errors
    /// - `ConcurrentModification` if the status is no longer `expected`
    /// - `InvalidTransition` if the order is already finished
    pub fn advance(
        &mut self,
        expected: OrderStatus,
        actor: EventActor,
        now: DateTime<Utc>,
    ) -> Result<OrderStatus, OrderError> {
        if self.status != expected {
            return Err(OrderError::ConcurrentModification {
                expected,
                actual: self.status,
            });
        }
        let next = self
            .status
            .next()
            .ok_or(OrderError::InvalidTransition {
                status: self.status,
            })?;

        self.status = next;
        self.updated_at = now;
        self.events.push(OrderEvent {
            order_id: self.id,
            status: next,
            actor,
            created_at: now,
        });
        Ok(next)
    }

    pub fn current_step(&self) -> usize {
        self.status.step()
    }

    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }
}
