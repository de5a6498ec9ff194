//! Integer minor-currency amounts.
//!
//! `Cents` has no arithmetic operators. Every sum and product goes through the `checked_*`
//! methods, so an amount is either exact or rejected, never wrapped.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An amount in cents. Prices, line totals and order totals are all `Cents`; there is no
/// floating point anywhere in pricing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Highest unit price a menu item or cart line may carry (10000.00).
    pub const MAX_PRICE: Cents = Cents(1_000_000);

    /// Highest total a single cart or order may reach (1000000.00).
    pub const MAX_ORDER_TOTAL: Cents = Cents(100_000_000);

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Cents)
    }

    /// Unit price times quantity.
    pub fn checked_mul(self, quantity: u32) -> Option<Cents> {
        self.0.checked_mul(u64::from(quantity)).map(Cents)
    }

    /// Sum of `amounts`, or `None` if it does not fit.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Cents>) -> Option<Cents> {
        amounts
            .into_iter()
            .try_fold(Cents::ZERO, |total, amount| total.checked_add(amount))
    }

    /// For reporting figures only; order and cart totals use the checked forms.
    pub fn saturating_add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
