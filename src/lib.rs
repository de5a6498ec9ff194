//! # Table Order
//!
//! > **The ordering core of a restaurant table-service app.**
//!
//! Diners at a registered table put menu items in a cart and submit it as an order. Staff move
//! each order through `pending → received → preparing → finished` and manage the menu, its
//! categories and the tables. Each of these lives in a resource actor; observers follow order
//! and menu changes through a [`ChangeNotifier`](notify::ChangeNotifier).
//!
//! ## 🏗️ Design
//!
//! ### Pure core
//! [`cart`] and the lifecycle rules in [`model::order`] do no I/O and never log. Prices are
//! integer cents ([`model::Cents`]); an order keeps a snapshot of every line's name and price
//! and is never repriced from the menu.
//!
//! ### One actor per resource
//! Menu items, categories, tables and orders each belong to one `ResourceActor` task from the
//! `actor-framework` crate. Requests are applied one at a time, which is what makes
//! [`OrderClient::advance`](clients::OrderClient::advance) a compare-and-swap: it carries the
//! status the caller saw, and the loser of a race gets
//! [`OrderError::ConcurrentModification`](order_actor::OrderError::ConcurrentModification).
//!
//! ### Explicit tenant
//! Carts, menu items, categories, tables, orders, every query and every status change carry a
//! [`RestaurantId`](model::RestaurantId). Nothing is inferred from the environment, and an
//! order is invisible to the staff of another restaurant.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - records: ids, money, menu items, categories, tables, orders, stats
//! - [`cart`] - the diner's cart
//! - [`menu_actor`] / [`category_actor`] / [`table_actor`] / [`order_actor`] - entity
//!   implementations, actions and errors
//! - [`clients`] - one typed client per actor
//! - [`notify`] - filtered change subscriptions
//! - [`config`] - [`SystemConfig`](config::SystemConfig)
//! - [`lifecycle`] - [`OrderSystem`](lifecycle::OrderSystem) and tracing setup
//!
//! ## 🧪 Testing
//!
//! Unit tests sit next to the code. `tests/` drives the full system, and runs the real order
//! actor against mocked menu and table actors with
//! [`actor_framework::mock::MockClient`].

pub mod cart;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod table_actor;
