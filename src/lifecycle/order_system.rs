use crate::cart::Cart;
use crate::clients::{CategoryClient, MenuClient, OrderClient, TableClient};
use crate::config::SystemConfig;
use crate::model::RestaurantId;
use crate::notify::ChangeNotifier;
use crate::order_actor::{OrderContext, OrderNumbers};
use crate::table_actor::TableLabels;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] JoinError),
}

/// The running table-ordering system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the menu, category, table and order actors
/// - **Dependency Wiring**: the order actor reads the menu through a `MenuClient` and the
///   registered tables through a `TableClient`
/// - **Shared Resources**: one [`ChangeNotifier`] for the menu and order actors and all
///   observers
///
/// # Example
///
/// ```rust
/// use table_order::config::SystemConfig;
/// use table_order::lifecycle::OrderSystem;
/// use table_order::model::{Cents, MenuItemCreate, RestaurantId, TableCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(SystemConfig::default());
///     let bistro = RestaurantId::new("bistro");
///     system
///         .table_client
///         .register(TableCreate::new(bistro.clone(), "12"))
///         .await?;
///
///     let ramen = system
///         .menu_client
///         .create_item(MenuItemCreate::new(bistro.clone(), "Ramen", Cents(850)))
///         .await?;
///
///     let mut cart = system.new_cart(bistro);
///     cart.add_item(&ramen)?;
///     let order = system
///         .order_client
///         .submit(&mut cart, "12".into(), "guest".into(), None)
///         .await?;
///     assert_eq!(order.order_number, 10_000);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub menu_client: MenuClient,
    pub category_client: CategoryClient,
    pub table_client: TableClient,
    pub order_client: OrderClient,
    notifier: ChangeNotifier,
    max_line_quantity: u32,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the actors. Must be called from within a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        let notifier = ChangeNotifier::new(config.notification_capacity);

        // 1. Create actors (no dependencies yet)
        let (menu_actor, menu_client) = crate::menu_actor::new(config.channel_buffer);
        let (category_actor, category_client) = crate::category_actor::new(config.channel_buffer);
        let (table_actor, table_client) = crate::table_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(notifier.clone()));
        let category_handle = tokio::spawn(category_actor.run(()));
        let table_handle = tokio::spawn(table_actor.run(TableLabels::default()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext::new(
            menu_client.clone(),
            table_client.clone(),
            notifier.clone(),
            OrderNumbers::new(config.order_number_first, config.order_number_last),
        )));

        info!(?config, "System started");
        Self {
            menu_client,
            category_client,
            table_client,
            order_client,
            notifier,
            max_line_quantity: config.max_line_quantity,
            // The order actor goes first: it holds the menu and table clients
            handles: vec![order_handle, menu_handle, table_handle, category_handle],
        }
    }

    /// Handle for subscribing to order and menu changes.
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// An empty cart with the configured per-line cap.
    pub fn new_cart(&self, restaurant_id: RestaurantId) -> Cart {
        Cart::with_line_limit(restaurant_id, self.max_line_quantity)
    }

    /// Stops every actor and waits for them.
    ///
    /// Dropping the clients closes the actors' channels. The order actor exits first and
    /// releases its `MenuClient` and `TableClient`, then the other actors exit. Clones of
    /// the clients held elsewhere keep their actor alive, so drop those before calling this.
    /// Open subscriptions see `None` once the menu and order actors are gone.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.table_client);
        drop(self.category_client);
        drop(self.notifier);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
