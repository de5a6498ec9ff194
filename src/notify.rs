//! # Change Notification
//!
//! Actors publish every committed change of an order or menu item to a [`ChangeNotifier`].
//! Observers (a staff dashboard, a diner's order tracker) subscribe with a filter and receive
//! only the events that concern them.
//!
//! The notifier is an ordinary value created by
//! [`OrderSystem`](crate::lifecycle::OrderSystem) and injected into the actors' context;
//! there is no process-wide registry. Delivery is best effort: a subscriber that falls
//! more than the channel capacity behind skips the missed events.

use crate::model::{CustomerId, MenuItem, MenuItemId, Order, RestaurantId};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// A committed change.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// An order was placed or moved to a new status. Carries the new state.
    OrderChanged(Order),
    /// A menu item was added or edited.
    MenuItemChanged(MenuItem),
    MenuItemRemoved {
        restaurant_id: RestaurantId,
        id: MenuItemId,
    },
}

/// Cloneable publishing handle.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    /// `capacity` is how many events a slow subscriber may fall behind (at least 1).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sends `event` to all current subscribers and returns how many there were.
    /// Publishing with nobody listening is fine.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(receivers, "Change published");
                receivers
            }
            Err(_) => 0,
        }
    }

    /// Placed and advanced orders of one restaurant (staff dashboard).
    pub fn subscribe_restaurant_orders(&self, restaurant_id: RestaurantId) -> Subscription {
        self.subscribe(Filter::RestaurantOrders(restaurant_id))
    }

    /// One diner's orders at one restaurant (order tracking page).
    pub fn subscribe_customer_orders(
        &self,
        restaurant_id: RestaurantId,
        customer_id: CustomerId,
    ) -> Subscription {
        self.subscribe(Filter::CustomerOrders(restaurant_id, customer_id))
    }

    /// Menu edits of one restaurant.
    pub fn subscribe_menu(&self, restaurant_id: RestaurantId) -> Subscription {
        self.subscribe(Filter::Menu(restaurant_id))
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn subscribe(&self, filter: Filter) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
            filter,
        }
    }
}

#[derive(Debug, Clone)]
enum Filter {
    RestaurantOrders(RestaurantId),
    CustomerOrders(RestaurantId, CustomerId),
    Menu(RestaurantId),
}

impl Filter {
    fn accepts(&self, event: &ChangeEvent) -> bool {
        match (self, event) {
            (Filter::RestaurantOrders(r), ChangeEvent::OrderChanged(order)) => {
                &order.restaurant_id == r
            }
            (Filter::CustomerOrders(r, c), ChangeEvent::OrderChanged(order)) => {
                &order.restaurant_id == r && &order.customer_id == c
            }
            (Filter::Menu(r), ChangeEvent::MenuItemChanged(item)) => &item.restaurant_id == r,
            (Filter::Menu(r), ChangeEvent::MenuItemRemoved { restaurant_id, .. }) => {
                restaurant_id == r
            }
            _ => false,
        }
    }
}

/// A filtered stream of [`ChangeEvent`]s. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<ChangeEvent>,
    filter: Filter,
}

impl Subscription {
    /// Waits for the next matching event.
    ///
    /// Returns `None` once every notifier handle has been dropped and the backlog is drained.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, filter = ?self.filter, "Subscriber lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next matching event that is already queued, without waiting.
    pub fn try_recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, filter = ?self.filter, "Subscriber lagged, events dropped");
                }
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::model::{Cents, OrderCreate, OrderId};
    use chrono::Utc;

    fn dish(id: u32, restaurant: &str) -> MenuItem {
        MenuItem::new(MenuItemId(id), restaurant.into(), "Soup", Cents(400))
    }

    fn order(id: u32, restaurant: &str, customer: &str) -> Order {
        let mut cart = Cart::new(restaurant.into());
        cart.add_item(&dish(1, restaurant)).unwrap();
        let params = OrderCreate::from_cart(&cart, "4".into(), customer.into(), None).unwrap();
        Order::place(OrderId(id), params, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_customer_subscription_is_scoped_to_restaurant() {
        let notifier = ChangeNotifier::new(16);
        let mut ana = notifier.subscribe_customer_orders("bistro".into(), "ana".into());

        notifier.publish(ChangeEvent::OrderChanged(order(1, "diner", "ana")));
        notifier.publish(ChangeEvent::OrderChanged(order(2, "bistro", "ben")));
        notifier.publish(ChangeEvent::OrderChanged(order(3, "bistro", "ana")));

        match ana.recv().await {
            Some(ChangeEvent::OrderChanged(order)) => assert_eq!(order.id, OrderId(3)),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(ana.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_menu_subscription_filters_by_restaurant() {
        let notifier = ChangeNotifier::new(16);
        let mut bistro = notifier.subscribe_menu("bistro".into());

        notifier.publish(ChangeEvent::MenuItemChanged(dish(1, "diner")));
        notifier.publish(ChangeEvent::MenuItemChanged(dish(2, "bistro")));
        notifier.publish(ChangeEvent::MenuItemRemoved {
            restaurant_id: "bistro".into(),
            id: MenuItemId(2),
        });

        match bistro.recv().await {
            Some(ChangeEvent::MenuItemChanged(item)) => assert_eq!(item.id, MenuItemId(2)),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            bistro.recv().await,
            Some(ChangeEvent::MenuItemRemoved { id: MenuItemId(2), .. })
        ));
        assert!(bistro.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let notifier = ChangeNotifier::new(4);
        assert_eq!(notifier.publish(ChangeEvent::MenuItemChanged(dish(1, "bistro"))), 0);
    }

    #[tokio::test]
    async fn test_recv_ends_when_notifier_dropped() {
        let notifier = ChangeNotifier::new(4);
        let mut sub = notifier.subscribe_menu("bistro".into());
        notifier.publish(ChangeEvent::MenuItemChanged(dish(1, "bistro")));
        drop(notifier);

        assert!(sub.recv().await.is_some());
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_lagged_subscriber_skips_ahead() {
        let notifier = ChangeNotifier::new(2);
        let mut sub = notifier.subscribe_menu("bistro".into());
        for id in 1..=5 {
            notifier.publish(ChangeEvent::MenuItemChanged(dish(id, "bistro")));
        }
        match sub.recv().await {
            Some(ChangeEvent::MenuItemChanged(item)) => assert_eq!(item.id, MenuItemId(4)),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
