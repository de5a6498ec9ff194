//! Typed identifiers.
//!
//! Record ids (`MenuItemId`, `CategoryId`, `OrderId`, `TableId`) are issued by the owning actor
//! from its counter.
//! Tenant and identity values are opaque strings handed in by the host application.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

record_id!(
    /// Type-safe identifier for menu items.
    MenuItemId,
    "item"
);
record_id!(
    /// Type-safe identifier for menu categories.
    CategoryId,
    "category"
);
record_id!(
    /// Type-safe identifier for orders.
    OrderId,
    "order"
);
record_id!(
    /// Type-safe identifier for registered dining tables.
    TableId,
    "table"
);

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// The tenant every cart, menu item and order belongs to.
    RestaurantId
);
opaque_id!(
    /// Diner session identity.
    CustomerId
);
opaque_id!(
    /// Staff member who moves an order along.
    StaffId
);
opaque_id!(
    /// Table label printed on the QR code (e.g. "12" or "Patio 3").
    TableNumber
);

impl TableNumber {
    /// True when the label is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The label without surrounding whitespace.
    pub fn trimmed(&self) -> TableNumber {
        TableNumber(self.0.trim().to_string())
    }
}
