use actor_framework::ActorClient;
use chrono::Utc;
use table_order::cart::CartError;
use table_order::config::SystemConfig;
use table_order::lifecycle::OrderSystem;
use table_order::menu_actor::MenuError;
use table_order::model::{
    CategoryCreate, Cents, EventActor, MenuItem, MenuItemCreate, MenuItemId, MenuItemPatch, Order,
    OrderStatus, RestaurantId, StaffId, TableCreate,
};
use table_order::notify::ChangeEvent;
use table_order::order_actor::OrderError;
use table_order::table_actor::TableError;

fn bistro() -> RestaurantId {
    RestaurantId::new("bistro")
}

fn diner() -> RestaurantId {
    RestaurantId::new("diner")
}

/// A running system where both restaurants have registered tables 1 to 12.
async fn start(config: SystemConfig) -> OrderSystem {
    let system = OrderSystem::new(config);
    for restaurant in [bistro(), diner()] {
        for table in 1..=12 {
            system
                .table_client
                .register(TableCreate::new(restaurant.clone(), table.to_string()))
                .await
                .unwrap();
        }
    }
    system
}

async fn add_dish(
    system: &OrderSystem,
    restaurant: &RestaurantId,
    name: &str,
    price: u64,
) -> MenuItem {
    system
        .menu_client
        .create_item(MenuItemCreate::new(restaurant.clone(), name, Cents(price)))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_checkout_example_totals_2000() {
    let system = start(SystemConfig::default()).await;
    let a = add_dish(&system, &bistro(), "Ramen", 850).await;
    let b = add_dish(&system, &bistro(), "Gyoza", 300).await;

    let mut cart = system.new_cart(bistro());
    cart.add_item(&a).unwrap();
    cart.add_item(&a).unwrap();
    cart.add_item(&b).unwrap();

    let order = system
        .order_client
        .submit(&mut cart, "12".into(), "guest".into(), None)
        .await
        .unwrap();

    assert!(cart.is_empty());
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.subtotal_cents, Cents(2000));
    assert_eq!(order.total_cents, Cents(2000));

    let lines = system
        .order_client
        .lines_for_order(bistro(), order.id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line_total(), Some(Cents(1700)));
    assert_eq!(lines[1].line_total(), Some(Cents(300)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_survives_menu_price_change() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;

    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "4".into(), "guest".into(), None)
        .await
        .unwrap();

    let repriced = system
        .menu_client
        .update_item(
            soup.id,
            MenuItemPatch {
                price_cents: Some(Cents(700)),
                name: Some("Daily soup".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(repriced.price_cents, Cents(700));

    let lines = system
        .order_client
        .lines_for_order(bistro(), order.id)
        .await
        .unwrap();
    assert_eq!(lines[0].price_cents_snapshot, Cents(500));
    assert_eq!(lines[0].name_snapshot, "Soup");

    let stored = system.order_client.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored.total_cents, Cents(500));
}

#[tokio::test]
async fn test_cart_price_is_kept_when_menu_moves_before_checkout() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;

    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    system
        .menu_client
        .update_item(
            soup.id,
            MenuItemPatch {
                price_cents: Some(Cents(700)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let order = system
        .order_client
        .submit(&mut cart, "4".into(), "guest".into(), None)
        .await
        .unwrap();
    assert_eq!(order.total_cents, Cents(500));
}

#[tokio::test]
async fn test_empty_cart_never_produces_order() {
    let system = start(SystemConfig::default()).await;
    let mut cart = system.new_cart(bistro());

    let err = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
    assert!(system
        .order_client
        .orders_for_restaurant(bistro())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_three_advances_then_invalid_transition() {
    let system = start(SystemConfig::default()).await;
    let tea = add_dish(&system, &bistro(), "Tea", 250).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&tea).unwrap();
    let mut order = system
        .order_client
        .submit(&mut cart, "7".into(), "guest".into(), None)
        .await
        .unwrap();

    for expected in [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Finished,
    ] {
        order = system
            .order_client
            .advance(bistro(), &order, StaffId::new("kim"))
            .await
            .unwrap();
        assert_eq!(order.status, expected);
    }
    assert_eq!(order.current_step(), 3);

    let err = system
        .order_client
        .advance(bistro(), &order, StaffId::new("kim"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            status: OrderStatus::Finished
        }
    );

    let events = system
        .order_client
        .events_for_order(bistro(), order.id)
        .await
        .unwrap();
    let statuses: Vec<OrderStatus> = events.iter().map(|e| e.status).collect();
    assert_eq!(statuses, OrderStatus::SEQUENCE.to_vec());
    assert_eq!(events[0].actor, EventActor::Customer("guest".into()));
    assert!(events[1..]
        .iter()
        .all(|e| e.actor == EventActor::Staff(StaffId::new("kim"))));
}

#[tokio::test]
async fn test_racing_advances_one_wins() {
    let system = start(SystemConfig::default()).await;
    let tea = add_dish(&system, &bistro(), "Tea", 250).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&tea).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "7".into(), "guest".into(), None)
        .await
        .unwrap();

    let first = system.order_client.clone();
    let second = system.order_client.clone();
    let (a, b) = (order.clone(), order.clone());
    let (r1, r2) = tokio::join!(
        tokio::spawn(async move { first.advance(bistro(), &a, StaffId::new("kim")).await }),
        tokio::spawn(async move { second.advance(bistro(), &b, StaffId::new("lee")).await }),
    );
    let results = [r1.unwrap(), r2.unwrap()];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(OrderError::ConcurrentModification {
            expected: OrderStatus::Pending,
            actual: OrderStatus::Received,
        })
    )));

    let events = system
        .order_client
        .events_for_order(bistro(), order.id)
        .await
        .unwrap();
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn test_advance_to_next_reads_current_status() {
    let system = start(SystemConfig::default()).await;
    let tea = add_dish(&system, &bistro(), "Tea", 250).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&tea).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "7".into(), "guest".into(), None)
        .await
        .unwrap();

    system
        .order_client
        .advance_to_next(bistro(), order.id, "kim".into())
        .await
        .unwrap();
    let moved = system
        .order_client
        .advance_to_next(bistro(), order.id, "kim".into())
        .await
        .unwrap();
    assert_eq!(moved.status, OrderStatus::Preparing);
}

#[tokio::test]
async fn test_unavailable_or_removed_items_are_rejected() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let pie = add_dish(&system, &bistro(), "Pie", 400).await;

    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    system.menu_client.set_availability(soup.id, false).await.unwrap();

    let err = system
        .order_client
        .submit(&mut cart, "2".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
    assert_eq!(cart.total_items(), 1, "rejected checkout keeps the cart");

    let mut cart = system.new_cart(bistro());
    cart.add_item(&pie).unwrap();
    system.menu_client.delete(pie.id).await.unwrap();
    let err = system
        .order_client
        .submit(&mut cart, "2".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    assert!(system
        .order_client
        .orders_for_restaurant(bistro())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_order_numbers_per_restaurant() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let pie = add_dish(&system, &diner(), "Pie", 400).await;

    let mut numbers = Vec::new();
    for (restaurant, item) in [(bistro(), &soup), (bistro(), &soup), (diner(), &pie)] {
        let mut cart = system.new_cart(restaurant);
        cart.add_item(item).unwrap();
        let order = system
            .order_client
            .submit(&mut cart, "1".into(), "guest".into(), None)
            .await
            .unwrap();
        numbers.push(order.order_number);
    }
    assert_eq!(numbers, vec![10_000, 10_001, 10_000]);
}

#[tokio::test]
async fn test_wrapped_numbers_skip_active_orders() {
    let config = SystemConfig {
        order_number_first: 99_998,
        order_number_last: 99_999,
        ..SystemConfig::default()
    };
    let system = start(config).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;

    let mut placed = Vec::new();
    for _ in 0..2 {
        let mut cart = system.new_cart(bistro());
        cart.add_item(&soup).unwrap();
        placed.push(
            system
                .order_client
                .submit(&mut cart, "1".into(), "guest".into(), None)
                .await
                .unwrap(),
        );
    }
    let numbers: Vec<u32> = placed.iter().map(|o| o.order_number).collect();
    assert_eq!(numbers, vec![99_998, 99_999]);

    // Both numbers are held by active orders
    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let err = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::Validation("too many active orders; finish some first".to_string())
    );
    assert!(!cart.is_empty());

    let mut first = placed[0].clone();
    while first.status != OrderStatus::Finished {
        first = system
            .order_client
            .advance(bistro(), &first, "kim".into())
            .await
            .unwrap();
    }
    let order = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap();
    assert_eq!(order.order_number, 99_998);
}

#[tokio::test]
async fn test_subscriptions_only_see_their_orders() {
    let system = start(SystemConfig::default()).await;
    let mut bistro_orders = system.notifier().subscribe_restaurant_orders(bistro());
    let mut alice = system
        .notifier()
        .subscribe_customer_orders(diner(), "alice".into());

    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let pie = add_dish(&system, &diner(), "Pie", 400).await;

    let mut cart = system.new_cart(diner());
    cart.add_item(&pie).unwrap();
    system
        .order_client
        .submit(&mut cart, "1".into(), "alice".into(), None)
        .await
        .unwrap();

    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let bob_order = system
        .order_client
        .submit(&mut cart, "2".into(), "bob".into(), None)
        .await
        .unwrap();
    system
        .order_client
        .advance(bistro(), &bob_order, "kim".into())
        .await
        .unwrap();

    let mut seen = Vec::new();
    while let Some(ChangeEvent::OrderChanged(order)) = bistro_orders.try_recv() {
        seen.push((order.customer_id.to_string(), order.status));
    }
    assert_eq!(
        seen,
        vec![
            ("bob".to_string(), OrderStatus::Pending),
            ("bob".to_string(), OrderStatus::Received),
        ]
    );

    match alice.try_recv() {
        Some(ChangeEvent::OrderChanged(order)) => assert_eq!(order.restaurant_id, diner()),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(alice.try_recv().is_none());
}

#[tokio::test]
async fn test_menu_queries_and_validation() {
    let system = start(SystemConfig::default()).await;
    let mut menu_changes = system.notifier().subscribe_menu(bistro());

    let noodles = system
        .category_client
        .create_category(CategoryCreate::new(bistro(), "Noodles", 1))
        .await
        .unwrap();
    let starters = system
        .category_client
        .create_category(CategoryCreate::new(bistro(), "Starters", 0))
        .await
        .unwrap();
    for (name, category) in [("udon", &noodles), ("Edamame", &starters), ("Ramen", &noodles)] {
        system
            .menu_client
            .create_item(MenuItemCreate::new(bistro(), name, Cents(600)).in_category(category.id))
            .await
            .unwrap();
    }
    add_dish(&system, &diner(), "Apple pie", 400).await;

    let names = |items: Vec<MenuItem>| items.into_iter().map(|i| i.name).collect::<Vec<_>>();

    let all = system.menu_client.items_for_restaurant(bistro()).await.unwrap();
    let udon = all[2].id;
    assert_eq!(names(all), vec!["Edamame", "Ramen", "udon"]);

    let in_noodles = system
        .menu_client
        .items_in_category(bistro(), noodles.id)
        .await
        .unwrap();
    assert_eq!(names(in_noodles), vec!["Ramen", "udon"]);

    system.menu_client.set_availability(udon, false).await.unwrap();
    let available = system.menu_client.available_items(bistro()).await.unwrap();
    assert_eq!(names(available), vec!["Edamame", "Ramen"]);

    let err = system
        .menu_client
        .create_item(MenuItemCreate::new(bistro(), "Free lunch", Cents(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::Validation(_)));

    // Three creates and one availability change for this restaurant; categories are silent
    let mut count = 0;
    while menu_changes.try_recv().is_some() {
        count += 1;
    }
    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_active_orders_and_stats() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;

    let mut placed = Vec::new();
    for table in ["1", "2", "3"] {
        let mut cart = system.new_cart(bistro());
        cart.add_item(&soup).unwrap();
        placed.push(
            system
                .order_client
                .submit(&mut cart, table.into(), "guest".into(), None)
                .await
                .unwrap(),
        );
    }

    // Finish the first, start the second
    let mut first = placed[0].clone();
    for _ in 0..3 {
        first = system
            .order_client
            .advance(bistro(), &first, "kim".into())
            .await
            .unwrap();
    }
    system
        .order_client
        .advance(bistro(), &placed[1], "kim".into())
        .await
        .unwrap();

    let active: Vec<_> = system
        .order_client
        .active_orders(bistro())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, vec![placed[1].id, placed[2].id]);

    let newest_first: Vec<_> = system
        .order_client
        .orders_for_customer(bistro(), "guest".into())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(newest_first, vec![placed[2].id, placed[1].id, placed[0].id]);

    let stats = system
        .order_client
        .stats(bistro(), Utc::now().date_naive())
        .await
        .unwrap();
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.active_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.today_revenue, Cents(1500));
}

#[tokio::test]
async fn test_orders_cannot_be_deleted() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap();

    let err = system.order_client.delete(order.id).await.unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
    assert!(system.order_client.get(order.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_shutdown_closes_subscriptions() {
    let system = start(SystemConfig::default()).await;
    let mut menu_changes = system.notifier().subscribe_menu(bistro());
    add_dish(&system, &bistro(), "Soup", 500).await;

    system.shutdown().await.unwrap();

    assert!(matches!(
        menu_changes.recv().await,
        Some(ChangeEvent::MenuItemChanged(_))
    ));
    assert!(menu_changes.recv().await.is_none());
}

#[tokio::test]
async fn test_other_restaurant_cannot_touch_an_order() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "3".into(), "guest".into(), None)
        .await
        .unwrap();

    let not_found: Result<Order, OrderError> = Err(OrderError::NotFound(order.id.to_string()));
    assert_eq!(
        system
            .order_client
            .advance(diner(), &order, "mallory".into())
            .await,
        not_found
    );
    assert_eq!(
        system
            .order_client
            .advance_to_next(diner(), order.id, "mallory".into())
            .await,
        not_found
    );
    assert!(system
        .order_client
        .lines_for_order(diner(), order.id)
        .await
        .is_err());

    let events = system
        .order_client
        .events_for_order(bistro(), order.id)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_customer_orders_are_scoped_to_restaurant() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let pie = add_dish(&system, &diner(), "Pie", 400).await;

    let mut placed = Vec::new();
    for (restaurant, item) in [(bistro(), &soup), (diner(), &pie)] {
        let mut cart = system.new_cart(restaurant);
        cart.add_item(item).unwrap();
        placed.push(
            system
                .order_client
                .submit(&mut cart, "5".into(), "guest".into(), None)
                .await
                .unwrap(),
        );
    }

    let at_bistro: Vec<_> = system
        .order_client
        .orders_for_customer(bistro(), "guest".into())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(at_bistro, vec![placed[0].id]);
}

#[tokio::test]
async fn test_orders_need_a_registered_table() {
    let system = start(SystemConfig::default()).await;
    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();

    let err = system
        .order_client
        .submit(&mut cart, "Patio 1".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::Validation("table Patio 1 is not registered at bistro".to_string())
    );

    system
        .table_client
        .register(TableCreate::new(bistro(), "Patio 1"))
        .await
        .unwrap();
    let order = system
        .order_client
        .submit(&mut cart, " Patio 1 ".into(), "guest".into(), None)
        .await
        .unwrap();
    assert_eq!(order.order_number, 10_000);

    let err = system
        .table_client
        .register(TableCreate::new(bistro(), "Patio 1"))
        .await
        .unwrap_err();
    assert!(matches!(err, TableError::Validation(_)));
    assert_eq!(
        system
            .table_client
            .tables_for_restaurant(bistro())
            .await
            .unwrap()
            .len(),
        13
    );
}

#[tokio::test]
async fn test_sections_follow_category_sort_order() {
    let system = start(SystemConfig::default()).await;
    let mut ids = Vec::new();
    for (name, sort_order) in [("Drinks", 2), ("Mains", 1), ("Starters", 0), ("Desserts", 3)] {
        let category = system
            .category_client
            .create_category(CategoryCreate::new(bistro(), name, sort_order))
            .await
            .unwrap();
        ids.push(category.id);
    }
    for (name, category) in [("Tea", ids[0]), ("Ramen", ids[1]), ("Gyoza", ids[2])] {
        system
            .menu_client
            .create_item(MenuItemCreate::new(bistro(), name, Cents(500)).in_category(category))
            .await
            .unwrap();
    }
    add_dish(&system, &bistro(), "Chef's special", 900).await;

    let headings: Vec<Option<String>> = system
        .menu_client
        .sections(bistro(), &system.category_client)
        .await
        .unwrap()
        .into_iter()
        .map(|section| section.category.map(|c| c.name))
        .collect();
    assert_eq!(
        headings,
        vec![
            Some("Starters".to_string()),
            Some("Mains".to_string()),
            Some("Drinks".to_string()),
            None,
        ]
    );
}

#[tokio::test]
async fn test_oversized_prices_leave_the_system_running() {
    let system = start(SystemConfig::default()).await;

    let err = system
        .menu_client
        .create_item(MenuItemCreate::new(bistro(), "Gold leaf", Cents(u64::MAX)))
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::Validation(_)));

    let huge = Cents(u64::MAX / 2 + 1);
    let mut forged = MenuItem::new(MenuItemId(77), bistro(), "Gold leaf", huge);
    let mut cart = system.new_cart(bistro());
    assert!(matches!(cart.add_item(&forged), Err(CartError::Validation(_))));
    forged.price_cents = Cents::MAX_PRICE;
    cart.add_item(&forged).unwrap();

    // The actor only knows real menu items, so the forged line is refused there
    let err = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    let soup = add_dish(&system, &bistro(), "Soup", 500).await;
    let mut cart = system.new_cart(bistro());
    cart.add_item(&soup).unwrap();
    let order = system
        .order_client
        .submit(&mut cart, "1".into(), "guest".into(), None)
        .await
        .unwrap();
    assert_eq!(order.total_cents, Cents(500));
}
