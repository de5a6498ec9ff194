//! Typed client wrappers around each actor's `ResourceClient`.

pub mod category_client;
pub mod menu_client;
pub mod order_client;
pub mod table_client;

pub use category_client::CategoryClient;
pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use table_client::TableClient;
