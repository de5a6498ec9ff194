//! # Order Client
//!
//! High-level API for the Order actor: checkout from a cart, staff advancing orders, and
//! the dashboard and tracking queries. It wraps a `ResourceClient<Order>`.
use crate::cart::Cart;
use crate::model::{
    CustomerId, Order, OrderCreate, OrderEvent, OrderId, OrderLine, OrderQuery, OrderStats,
    RestaurantId, StaffId, TableNumber,
};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Menu checks, numbering and publication happen in the actor's `on_create` hook.
#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Checks out `cart` and returns the stored order.
    ///
    /// The cart is cleared only when the order was accepted; on any error it is left as it
    /// was so the diner can fix it and retry.
    #[instrument(skip(self, cart), fields(restaurant_id = %cart.restaurant_id()))]
    pub async fn submit(
        &self,
        cart: &mut Cart,
        table_number: TableNumber,
        customer_id: CustomerId,
        comment: Option<String>,
    ) -> Result<Order, OrderError> {
        debug!(items = cart.total_items(), "submit called");
        let params = OrderCreate::from_cart(cart, table_number, customer_id, comment)?;
        let order = self.place(params).await?;
        cart.clear();
        Ok(order)
    }

    /// Stores an already snapshotted order. Only `submit` builds snapshots.
    #[instrument(skip(self, params))]
    pub(crate) async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        info!("Sending place to actor");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    /// Moves `order` one status forward, provided nobody else has moved it since it was read.
    ///
    /// `restaurant_id` is the staff member's restaurant; another restaurant's order is
    /// `NotFound`.
    #[instrument(skip(self, order), fields(id = %order.id, status = %order.status))]
    pub async fn advance(
        &self,
        restaurant_id: RestaurantId,
        order: &Order,
        staff: StaffId,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(
                order.id,
                OrderAction::Advance {
                    restaurant_id,
                    expected: order.status,
                    by: staff,
                },
            )
            .await
            .map_err(OrderError::from)
    }

    /// Reads the order and advances it from whatever status it is in now.
    #[instrument(skip(self))]
    pub async fn advance_to_next(
        &self,
        restaurant_id: RestaurantId,
        id: OrderId,
        staff: StaffId,
    ) -> Result<Order, OrderError> {
        let order = self.require(&restaurant_id, id).await?;
        self.advance(restaurant_id, &order, staff).await
    }

    /// All orders of a restaurant, newest first.
    pub async fn orders_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list(OrderQuery::Restaurant(restaurant_id)).await?;
        orders.reverse();
        Ok(orders)
    }

    /// Unfinished orders of a restaurant, oldest first (the kitchen queue).
    pub async fn active_orders(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        self.list(OrderQuery::Active(restaurant_id)).await
    }

    /// One diner's orders at a restaurant, newest first.
    pub async fn orders_for_customer(
        &self,
        restaurant_id: RestaurantId,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self
            .list(OrderQuery::Customer(restaurant_id, customer_id))
            .await?;
        orders.reverse();
        Ok(orders)
    }

    pub async fn lines_for_order(
        &self,
        restaurant_id: RestaurantId,
        id: OrderId,
    ) -> Result<Vec<OrderLine>, OrderError> {
        Ok(self.require(&restaurant_id, id).await?.lines)
    }

    /// Status history of an order, oldest first.
    pub async fn events_for_order(
        &self,
        restaurant_id: RestaurantId,
        id: OrderId,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        Ok(self.require(&restaurant_id, id).await?.events)
    }

    /// Dashboard figures for a restaurant. `today` is a UTC date.
    pub async fn stats(
        &self,
        restaurant_id: RestaurantId,
        today: NaiveDate,
    ) -> Result<OrderStats, OrderError> {
        let orders = self.list(OrderQuery::Restaurant(restaurant_id)).await?;
        Ok(OrderStats::from_orders(&orders, today))
    }

    /// The order, if it exists and belongs to `restaurant_id`.
    async fn require(
        &self,
        restaurant_id: &RestaurantId,
        id: OrderId,
    ) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .filter(|order| &order.restaurant_id == restaurant_id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
