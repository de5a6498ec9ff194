//! Table labels in use, per restaurant.

use crate::model::{RestaurantId, TableNumber};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// The Table actor's context. Only the actor's hooks touch it, one request at a time.
#[derive(Debug, Default)]
pub struct TableLabels {
    taken: Mutex<HashSet<(RestaurantId, TableNumber)>>,
}

impl TableLabels {
    /// Reserves `number` at `restaurant_id`. Returns `false` if it is already taken.
    pub fn claim(&self, restaurant_id: &RestaurantId, number: &TableNumber) -> bool {
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((restaurant_id.clone(), number.clone()))
    }

    pub fn release(&self, restaurant_id: &RestaurantId, number: &TableNumber) {
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(restaurant_id.clone(), number.clone()));
    }
}
