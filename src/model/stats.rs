//! Dashboard figures derived from a restaurant's orders.

use crate::model::{Cents, Order, OrderStatus};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    /// Pending, received or preparing.
    pub active_orders: usize,
    pub pending_orders: usize,
    /// Sum of `total_cents` over orders created on the given UTC date.
    pub today_revenue: Cents,
}

impl OrderStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>, today: NaiveDate) -> Self {
        orders.into_iter().fold(Self::default(), |mut stats, order| {
            stats.total_orders += 1;
            if order.status.is_active() {
                stats.active_orders += 1;
            }
            if order.status == OrderStatus::Pending {
                stats.pending_orders += 1;
            }
            if order.created_at.date_naive() == today {
                stats.today_revenue = stats.today_revenue.saturating_add(order.total_cents);
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::model::{EventActor, MenuItemId, OrderCreate, OrderId, StaffId};
    use chrono::{TimeZone, Utc};

    fn order(id: u32, price: u64, created: chrono::DateTime<Utc>) -> Order {
        let params = OrderCreate {
            restaurant_id: "bistro".into(),
            table_number: "1".into(),
            customer_id: "guest".into(),
            comment: None,
            lines: vec![CartLine {
                menu_item_id: MenuItemId(1),
                name: "Soup".to_string(),
                unit_price: Cents(price),
                quantity: 1,
            }],
        };
        Order::place(OrderId(id), params, created).unwrap()
    }

    #[test]
    fn test_counts_and_today_revenue() {
        let today = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();

        let pending = order(1, 500, today);
        let mut finished = order(2, 700, today);
        for _ in 0..3 {
            let status = finished.status;
            finished
                .advance(status, EventActor::Staff(StaffId::new("kim")), today)
                .unwrap();
        }
        let old = order(3, 900, yesterday);

        let stats = OrderStats::from_orders(&[pending, finished, old], today.date_naive());
        assert_eq!(
            stats,
            OrderStats {
                total_orders: 3,
                active_orders: 2,
                pending_orders: 2,
                today_revenue: Cents(1200),
            }
        );
    }

    #[test]
    fn test_empty_is_zero() {
        let orders: Vec<Order> = Vec::new();
        let stats = OrderStats::from_orders(&orders, Utc::now().date_naive());
        assert_eq!(stats, OrderStats::default());
    }
}
