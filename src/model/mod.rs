//! Plain data records. `MenuItem`, `MenuCategory`, `DiningTable` and `Order` implement
//! [`ActorEntity`](actor_framework::ActorEntity) in their actor modules.

pub mod category;
pub mod ids;
pub mod menu;
pub mod money;
pub mod order;
pub mod stats;
pub mod table;

pub use category::*;
pub use ids::*;
pub use menu::*;
pub use money::*;
pub use order::*;
pub use stats::*;
pub use table::*;
