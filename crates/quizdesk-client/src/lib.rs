//! Client state store and async actions for the Quizdesk API.
//!
//! A [`QuizdeskClient`] pairs one [`Transport`] with one [`Store`]. Each call
//! dispatches a `pending` action, talks to the API, then dispatches the
//! server-confirmed outcome:
//!
//! - [`QuizdeskClient::fetch_all`] replaces a collection and drives `loading`
//!   and `error`;
//! - [`QuizdeskClient::add`], [`QuizdeskClient::update`] and
//!   [`QuizdeskClient::delete`] merge confirmed writes.
//!
//! Each request runs on a spawned tokio task, so calls must be made from
//! within a tokio runtime.
//!
//! The presentation layer reads [`Store::state`] and re-renders on
//! [`Store::subscribe`] notifications.

mod action;
mod config;
mod payload;
mod reducer;
mod slice;
mod store;
pub mod thunk;
pub mod transport;

use std::sync::Arc;

use quizdesk_model::DocumentId;

pub use action::{Action, Lifecycle, ResourceAction};
pub use config::ClientSettings;
pub use payload::ListPayload;
pub use reducer::{ResourceState, RootState, reduce, reduce_resource};
pub use slice::Slice;
pub use store::Store;
pub use thunk::Rejection;
pub use transport::{HttpTransport, Transport, TransportError};

/// Facade binding a transport to a store.
#[derive(Clone)]
pub struct QuizdeskClient {
    transport: Arc<dyn Transport>,
    store: Arc<Store>,
}

impl QuizdeskClient {
    /// Pair `transport` with an empty store.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            store: Arc::new(Store::new()),
        }
    }

    /// Build an HTTP-backed client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(settings.base_url(), settings.timeout())?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// The store this client dispatches into.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetch every `D`; see [`thunk::fetch_all`].
    ///
    /// # Errors
    ///
    /// Returns the dispatched [`Rejection`].
    pub async fn fetch_all<D: Slice>(&self) -> Result<Vec<D>, Rejection> {
        thunk::fetch_all::<D>(&self.store, &self.transport).await
    }

    /// Create a `D`; see [`thunk::add`].
    ///
    /// # Errors
    ///
    /// Returns the dispatched [`Rejection`].
    pub async fn add<D: Slice>(&self, draft: &D::Draft) -> Result<D, Rejection> {
        thunk::add::<D>(&self.store, &self.transport, draft).await
    }

    /// Replace the `D` addressed by `id`; see [`thunk::update`].
    ///
    /// # Errors
    ///
    /// Returns the dispatched [`Rejection`].
    pub async fn update<D: Slice>(
        &self,
        id: &DocumentId,
        draft: &D::Draft,
    ) -> Result<D, Rejection> {
        thunk::update::<D>(&self.store, &self.transport, id, draft).await
    }

    /// Delete the `D` addressed by `id`; see [`thunk::delete`].
    ///
    /// # Errors
    ///
    /// Returns the dispatched [`Rejection`].
    pub async fn delete<D: Slice>(&self, id: &DocumentId) -> Result<DocumentId, Rejection> {
        thunk::delete::<D>(&self.store, &self.transport, id).await
    }
}
