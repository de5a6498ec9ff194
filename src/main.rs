//! Walks one diner and one staff member through a full order: menu set-up, checkout, and
//! the kitchen advancing the order to `finished`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use chrono::Utc;
use std::error::Error;
use table_order::config::SystemConfig;
use table_order::lifecycle::{setup_tracing, OrderSystem};
use table_order::model::{
    CategoryCreate, Cents, MenuItemCreate, OrderStatus, RestaurantId, StaffId, TableCreate,
};
use table_order::notify::ChangeEvent;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = SystemConfig::load()?;
    let system = OrderSystem::new(config);
    let bistro = RestaurantId::new("bistro");

    // Staff dashboard listens before anything happens
    let mut dashboard = system.notifier().subscribe_restaurant_orders(bistro.clone());
    let dashboard_task = tokio::spawn(
        async move {
            while let Some(ChangeEvent::OrderChanged(order)) = dashboard.recv().await {
                info!(
                    order_number = order.order_number,
                    status = %order.status,
                    "Dashboard update"
                );
            }
        }
        .instrument(tracing::info_span!("dashboard")),
    );

    let (ramen, gyoza) = async {
        system
            .table_client
            .register(TableCreate::new(bistro.clone(), "12"))
            .await?;
        let starters = system
            .category_client
            .create_category(CategoryCreate::new(bistro.clone(), "Starters", 0))
            .await?;
        let mains = system
            .category_client
            .create_category(CategoryCreate::new(bistro.clone(), "Mains", 1))
            .await?;

        let ramen = system
            .menu_client
            .create_item(
                MenuItemCreate::new(bistro.clone(), "Shoyu ramen", Cents(850))
                    .in_category(mains.id),
            )
            .await?;
        let gyoza = system
            .menu_client
            .create_item(
                MenuItemCreate::new(bistro.clone(), "Gyoza", Cents(300)).in_category(starters.id),
            )
            .await?;

        for section in system
            .menu_client
            .sections(bistro.clone(), &system.category_client)
            .await?
        {
            let heading = section.category.map_or("Other".to_string(), |c| c.name);
            info!(%heading, items = section.items.len(), "Menu section");
        }
        Ok::<_, Box<dyn Error>>((ramen, gyoza))
    }
    .instrument(tracing::info_span!("menu_setup"))
    .await?;

    let order = async {
        let mut cart = system.new_cart(bistro.clone());
        cart.add_item(&ramen)?;
        cart.add_item(&ramen)?;
        cart.add_item(&gyoza)?;
        info!(items = cart.total_items(), total = %cart.total_price(), "Cart ready");

        let order = system
            .order_client
            .submit(&mut cart, "12".into(), "guest-42".into(), Some("No scallions".into()))
            .await?;
        Ok::<_, Box<dyn Error>>(order)
    }
    .instrument(tracing::info_span!("checkout"))
    .await?;

    let staff = StaffId::new("kim");
    let mut current = order;
    async {
        while current.status != OrderStatus::Finished {
            current = system
                .order_client
                .advance(bistro.clone(), &current, staff.clone())
                .await?;
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("kitchen"))
    .await?;

    let stats = system
        .order_client
        .stats(bistro.clone(), Utc::now().date_naive())
        .await?;
    info!(?stats, "Dashboard stats");
    println!("{}", serde_json::to_string_pretty(&current)?);

    system.shutdown().await?;
    dashboard_task.await?;

    info!("Application completed successfully");
    Ok(())
}
