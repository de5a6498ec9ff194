//! Human-facing order numbers.
//!
//! Each restaurant gets its own counter over a 5-digit range. Numbers go up by one and wrap
//! from `last` back to `first`. A number stays held while its order is active and is only
//! handed out again after that order has finished, so two active orders of a restaurant
//! never share a number.

use crate::model::RestaurantId;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

/// Lowest order number.
pub const FIRST_ORDER_NUMBER: u32 = 10_000;
/// Highest order number.
pub const LAST_ORDER_NUMBER: u32 = 99_999;

#[derive(Debug)]
struct Counter {
    cursor: u32,
    held: HashSet<u32>,
}

#[derive(Debug)]
pub struct OrderNumbers {
    first: u32,
    last: u32,
    counters: Mutex<HashMap<RestaurantId, Counter>>,
}

impl Default for OrderNumbers {
    fn default() -> Self {
        Self::new(FIRST_ORDER_NUMBER, LAST_ORDER_NUMBER)
    }
}

impl OrderNumbers {
    /// Counter over `first..=last`, clamped to the 5-digit range. A `last` below `first` is
    /// raised to `first`.
    pub fn new(first: u32, last: u32) -> Self {
        let first = first.clamp(FIRST_ORDER_NUMBER, LAST_ORDER_NUMBER);
        Self {
            first,
            last: last.clamp(first, LAST_ORDER_NUMBER),
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Hands out the next free number for `restaurant_id` and holds it.
    ///
    /// Returns `None` when every number in the range is held by an active order.
    pub fn next(&self, restaurant_id: &RestaurantId) -> Option<u32> {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let counter = counters
            .entry(restaurant_id.clone())
            .or_insert_with(|| Counter {
                cursor: self.first,
                held: HashSet::new(),
            });

        for _ in self.first..=self.last {
            let candidate = counter.cursor;
            counter.cursor = if candidate >= self.last {
                self.first
            } else {
                candidate + 1
            };
            if counter.held.insert(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Frees `number` once its order has finished.
    pub fn release(&self, restaurant_id: &RestaurantId, number: u32) {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(counter) = counters.get_mut(restaurant_id) {
            counter.held.remove(&number);
        }
    }
}
