//! Custom actions for the Menu actor.

/// Operations on a [`MenuItem`](crate::model::MenuItem) beyond plain patching.
///
/// Every action answers with the item as stored afterwards.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Mark the item as orderable or sold out. Setting the current value again is a no-op
    /// and publishes nothing.
    SetAvailability(bool),
}
