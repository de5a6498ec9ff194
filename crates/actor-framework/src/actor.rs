//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests strictly one
//! after another. This is what makes per-record operations linearizable: two clients racing
//! to change the same record are served in arrival order, and the second one observes the
//! first one's result.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor is the "server" half: it owns the store and the receiving end of the channel.
/// Each instance runs in its own Tokio task, so the store needs no lock.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and a cloneable client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug)] enum NoteAction { Shout }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = String;
///     type Query = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.0 })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         self.text = update.0;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<String, NoteError> {
///         self.text = self.text.to_uppercase();
///         Ok(self.text.clone())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     let loud = client.perform_action(note.id, NoteAction::Shout).await.unwrap();
///     assert_eq!(loud, "HELLO");
///     assert_eq!(client.list(()).await.unwrap().len(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocates the next `u32` id, builds the record with
///   `T::from_create_params`, runs `on_create`, stores it and returns the stored record.
/// * **Get**: returns a clone of the record, or `None`.
/// * **List**: returns clones of all records matching the query, in creation order.
/// * **Update** / **Action**: run the hook on a working copy and commit it only on success.
/// * **Delete**: runs `on_delete`, then removes the record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids in creation order; backs the ordering guarantee of `List`.
    created: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` bounds the request channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            created: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "table_order::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .created
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = match self.store.get(&id) {
                        Some(current) => {
                            let mut draft = current.clone();
                            match draft.on_update(update, &context).await {
                                Ok(()) => {
                                    self.store.insert(id.clone(), draft.clone());
                                    info!(entity_type, %id, "Updated");
                                    Ok(draft)
                                }
                                Err(e) => {
                                    warn!(entity_type, %id, error = %e, "Update failed");
                                    Err(FrameworkError::EntityError(Box::new(e)))
                                }
                            }
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.get(&id) {
                        Some(item) => match item.on_delete(&context).await {
                            Ok(()) => {
                                self.store.remove(&id);
                                self.created.retain(|existing| existing != &id);
                                info!(entity_type, %id, size = self.store.len(), "Deleted");
                                Ok(())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get(&id) {
                        Some(current) => {
                            let mut draft = current.clone();
                            match draft.handle_action(action, &context).await {
                                Ok(outcome) => {
                                    self.store.insert(id.clone(), draft);
                                    info!(entity_type, %id, "Action ok");
                                    Ok(outcome)
                                }
                                Err(e) => {
                                    warn!(entity_type, %id, error = %e, "Action failed");
                                    Err(FrameworkError::EntityError(Box::new(e)))
                                }
                            }
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        // Ids of rejected creates are not reused.
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.store.insert(id.clone(), item.clone());
        self.created.push(id);
        Ok(item)
    }
}
