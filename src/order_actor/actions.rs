//! Custom actions for the Order actor.

use crate::model::{OrderStatus, RestaurantId, StaffId};

/// Operations on a placed [`Order`](crate::model::Order).
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order to the successor of `expected`, provided it is still at `expected`.
    /// Answers with the order as stored afterwards.
    ///
    /// Staff of another restaurant get `NotFound`, as if the order did not exist.
    Advance {
        restaurant_id: RestaurantId,
        expected: OrderStatus,
        by: StaffId,
    },
}
