//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are placed and advanced, never edited or deleted: the line snapshots and the event
//! history must survive whatever happens to the menu afterwards.

use super::actions::OrderAction;
use super::error::OrderError;
use super::OrderContext;
use crate::model::{
    EventActor, Order, OrderCreate, OrderId, OrderLine, OrderQuery, OrderStatus, RestaurantId,
    TableNumber,
};
use crate::notify::ChangeEvent;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Query = OrderQuery;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Order::place(id, params, Utc::now())
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::Restaurant(restaurant_id) => &self.restaurant_id == restaurant_id,
            OrderQuery::Active(restaurant_id) => {
                &self.restaurant_id == restaurant_id && self.status.is_active()
            }
            OrderQuery::Customer(restaurant_id, customer_id) => {
                &self.restaurant_id == restaurant_id && &self.customer_id == customer_id
            }
        }
    }

    /// Checks the table and every line against the live records, then numbers and announces
    /// the order.
    ///
    /// The snapshot prices are kept even when the menu price has moved since the item was
    /// put in the cart.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        check_table(&self.restaurant_id, &self.table_number, ctx).await?;
        for line in &self.lines {
            check_orderable(line, &self.restaurant_id, ctx).await?;
        }

        self.order_number = ctx.numbers.next(&self.restaurant_id).ok_or_else(|| {
            warn!(restaurant_id = %self.restaurant_id, "Every order number is in use");
            OrderError::Validation("too many active orders; finish some first".to_string())
        })?;
        info!(
            id = %self.id,
            order_number = self.order_number,
            total = %self.total_cents,
            "Order placed"
        );
        ctx.notifier.publish(ChangeEvent::OrderChanged(self.clone()));
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::Validation(
            "placed orders cannot be edited".to_string(),
        ))
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::Validation(
            "orders are kept with their history".to_string(),
        ))
    }

    /// A finished order gives its number back.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::Advance {
                restaurant_id,
                expected,
                by,
            } => {
                if restaurant_id != self.restaurant_id {
                    warn!(id = %self.id, %restaurant_id, "Advance from another restaurant");
                    return Err(OrderError::NotFound(self.id.to_string()));
                }
                let next = self.advance(expected, EventActor::Staff(by), Utc::now())?;
                if next == OrderStatus::Finished {
                    ctx.numbers.release(&self.restaurant_id, self.order_number);
                }
                info!(id = %self.id, from = %expected, to = %next, "Order advanced");
                ctx.notifier.publish(ChangeEvent::OrderChanged(self.clone()));
                Ok(self.clone())
            }
        }
    }
}

async fn check_table(
    restaurant_id: &RestaurantId,
    table_number: &TableNumber,
    ctx: &OrderContext,
) -> Result<(), OrderError> {
    let table = ctx
        .tables
        .find(restaurant_id.clone(), table_number.clone())
        .await
        .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
    if table.is_none() {
        debug!(%table_number, "Unregistered table");
        return Err(OrderError::Validation(format!(
            "table {table_number} is not registered at {restaurant_id}"
        )));
    }
    Ok(())
}

async fn check_orderable(
    line: &OrderLine,
    restaurant_id: &RestaurantId,
    ctx: &OrderContext,
) -> Result<(), OrderError> {
    let item = ctx
        .menu
        .get(line.menu_item_id)
        .await
        .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
    let Some(item) = item else {
        debug!(menu_item_id = %line.menu_item_id, "Ordered item missing from menu");
        return Err(OrderError::Validation(format!(
            "{} is no longer on the menu",
            line.name_snapshot
        )));
    };
    if &item.restaurant_id != restaurant_id {
        return Err(OrderError::Validation(format!(
            "{} is not on the menu of {}",
            line.name_snapshot, restaurant_id
        )));
    }
    if !item.is_available {
        return Err(OrderError::Validation(format!(
            "{} is sold out",
            line.name_snapshot
        )));
    }
    Ok(())
}
