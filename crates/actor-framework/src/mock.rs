//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Use it to test an actor whose
//! hooks call *other* actors: the actor under test is real, its dependencies are mocks.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | In-memory | Spawns a task |
//! | **State** | Scripted responses | Real store |
//! | **Error Injection** | `return_err` | Requires reaching the failing state |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic**: mock the only actor a client talks to.
//! 2. **Actor with mocked dependencies**: run the real actor, inject mock clients into its
//!    context (see `tests/order_actor_test.rs` in the application crate).
//! 3. **Full system**: every actor real, driven through the public clients.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32, price: u64 }
//! #[derive(Debug)] struct DishCreate;
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Query = (); type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, DishError> {
//!         Ok(Self { id, price: 0 })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), DishError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), DishError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_get(7).return_ok(Some(Dish { id: 7, price: 850 }));
//!     mock.expect_get(8).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap().unwrap().price, 850);
//!     assert!(matches!(client.get(8).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! (wrong kind or wrong id) aborts the mock task, which the caller observes as
//! `FrameworkError::ActorDropped`, and leaves the expectation in place so `verify()` fails.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// A scripted response for one request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut pending = lock(&queue);
                let Some(expectation) = pending.pop_front() else {
                    tracing::error!("Unexpected request: no expectations left");
                    return;
                };

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Expectation::Get { id: want, response })
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Expectation::List { response }) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Expectation::Create { response }) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Expectation::Update { id: want, response },
                    ) if id == want => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Expectation::Delete { id: want, response },
                    ) if id == want => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Expectation::Action { id: want, response },
                    ) if id == want => {
                        let _ = respond_to.send(response);
                    }
                    (_, expectation) => {
                        tracing::error!("Request does not match the next expectation");
                        pending.push_front(expectation);
                        return;
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation (any query).
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        assert!(
            remaining == 0,
            "Not all expectations were met. {remaining} remaining"
        );
    }
}

/// Completes an expectation with the response the mock will send back.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answer with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answer with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        lock(&self.expectations).push_back((self.make)(response));
    }
}

/// Creates a client and the raw receiver its requests arrive on.
///
/// Lower level than [`MockClient`]: the test inspects each request itself and answers through
/// the request's `respond_to` channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}
