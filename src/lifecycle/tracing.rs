//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! Actors log each request with an `entity_type` field (`MenuItem`, `Order`) instead of the
//! module path, so the target is hidden. Client methods open a span per call.
//!
//! ```bash
//! RUST_LOG=info cargo run      # placements, advances, actor start/stop
//! RUST_LOG=debug cargo run     # full request payloads and published changes
//! ```
//!
//! With `RUST_LOG=info` a diner checkout followed by a staff advance reads:
//!
//! ```text
//! INFO MenuItem: Actor started
//! INFO Order: Actor started
//! INFO submit:place: Sending place to actor
//! INFO Order placed id=order_1 order_number=10000 total=20.00
//! INFO Created entity_type="Order" size=1
//! INFO advance: Order advanced id=order_1 from=pending to=received
//! INFO Action ok entity_type="Order" id=order_1
//! ```

/// Initialise the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
