//! Async actions coordinating the transport with the store.
//!
//! Every call dispatches `pending` before the request is sent, then exactly
//! one of `fulfilled` or `rejected` once it settles. The terminal outcome is
//! also returned so callers can react to failures the reducer ignores.
//!
//! Requests run on a detached tokio task, so a caller that stops waiting
//! (a timeout, `select!`, an aborted task) leaves the request in flight and
//! the store still settles.

use std::sync::Arc;

use quizdesk_model::{DocumentId, Resource};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::action::{Lifecycle, ResourceAction};
use crate::payload::ListPayload;
use crate::slice::Slice;
use crate::store::Store;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Terminal failure of an async action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Rejection {
    status: Option<u16>,
    reason: String,
}

impl Rejection {
    /// Human-readable, never empty.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// HTTP status when a response arrived; `None` for network faults.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    FetchAll,
    Add,
    Update,
    Delete,
}

impl Operation {
    fn fallback<D: Resource>(self) -> String {
        match self {
            Self::FetchAll => format!("Failed to fetch {}", D::NAMES.plural),
            Self::Add => format!("Failed to add {}", D::NAMES.singular),
            Self::Update => format!("Failed to update {}", D::NAMES.singular),
            Self::Delete => format!("Failed to delete {}", D::NAMES.singular),
        }
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Pick the reason reported for a failed response.
fn response_reason(response: &ApiResponse) -> Option<String> {
    let message = non_empty(response.body.as_ref().and_then(|body| body.get("message")));
    let detail = non_empty(response.body.as_ref().and_then(|body| body.get("error")));
    match (message, detail) {
        (Some(message), Some(detail)) => Some(format!("{message}: {detail}")),
        (Some(text), None) | (None, Some(text)) => Some(text.to_owned()),
        (None, None) if !response.is_success() => Some(format!(
            "Request failed with status code {}",
            response.status
        )),
        (None, None) => None,
    }
}

fn pending<D>(operation: Operation) -> ResourceAction<D> {
    match operation {
        Operation::FetchAll => ResourceAction::FetchAll(Lifecycle::Pending),
        Operation::Add => ResourceAction::Add(Lifecycle::Pending),
        Operation::Update => ResourceAction::Update(Lifecycle::Pending),
        Operation::Delete => ResourceAction::Delete(Lifecycle::Pending),
    }
}

fn rejected<D>(operation: Operation, reason: String) -> ResourceAction<D> {
    match operation {
        Operation::FetchAll => ResourceAction::FetchAll(Lifecycle::Rejected(reason)),
        Operation::Add => ResourceAction::Add(Lifecycle::Rejected(reason)),
        Operation::Update => ResourceAction::Update(Lifecycle::Rejected(reason)),
        Operation::Delete => ResourceAction::Delete(Lifecycle::Rejected(reason)),
    }
}

fn reject<D: Slice>(
    store: &Store,
    operation: Operation,
    status: Option<u16>,
    reason: Option<String>,
) -> Rejection {
    let reason = reason
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| operation.fallback::<D>());
    warn!(
        resource = D::NAMES.plural,
        operation = ?operation,
        status,
        reason = %reason,
        "async action rejected"
    );
    store.dispatch(D::wrap(rejected(operation, reason.clone())));
    Rejection { status, reason }
}

/// Success body of a create or update; `data` must be present.
#[derive(Deserialize)]
struct Confirmed<D> {
    data: D,
}

/// Send the request and decode a successful body.
///
/// Any failure is dispatched as `rejected` before it is returned.
async fn exchange<D: Slice, T: DeserializeOwned>(
    store: &Store,
    transport: &dyn Transport,
    operation: Operation,
    request: ApiRequest,
) -> Result<T, Rejection> {
    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(err) => return Err(reject::<D>(store, operation, None, Some(err.to_string()))),
    };

    let envelope_failed = response
        .body
        .as_ref()
        .and_then(|body| body.get("success"))
        .and_then(Value::as_bool)
        == Some(false);
    if !response.is_success() || envelope_failed {
        let reason = response_reason(&response);
        return Err(reject::<D>(store, operation, Some(response.status), reason));
    }

    let status = response.status;
    serde_json::from_value(response.body.unwrap_or(Value::Null)).map_err(|err| {
        let reason = format!("{}: {err}", operation.fallback::<D>());
        reject::<D>(store, operation, Some(status), Some(reason))
    })
}

/// Dispatch `pending`, then settle the request on a detached task.
///
/// The task owns its handles, so dropping the returned future does not
/// cancel the request: the store still receives `fulfilled` or `rejected`.
/// `settle` turns the decoded body into the `fulfilled` action and the value
/// handed back to the caller.
async fn run<D, T, O, F>(
    store: &Arc<Store>,
    transport: &Arc<dyn Transport>,
    operation: Operation,
    request: ApiRequest,
    draft: Option<&D::Draft>,
    settle: F,
) -> Result<O, Rejection>
where
    D: Slice,
    T: DeserializeOwned + Send + 'static,
    O: Send + 'static,
    F: FnOnce(T) -> (ResourceAction<D>, O) + Send + 'static,
{
    store.dispatch(D::wrap(pending(operation)));

    let request = match draft.map(serde_json::to_value).transpose() {
        Ok(Some(body)) => request.with_body(body),
        Ok(None) => request,
        Err(err) => return Err(reject::<D>(store, operation, None, Some(err.to_string()))),
    };

    let task_store = Arc::clone(store);
    let transport = Arc::clone(transport);
    let task = tokio::spawn(async move {
        let body = exchange::<D, T>(&task_store, transport.as_ref(), operation, request).await?;
        let (fulfilled, output) = settle(body);
        task_store.dispatch(D::wrap(fulfilled));
        Ok(output)
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => Err(reject::<D>(store, operation, None, Some(err.to_string()))),
    }
}

fn document_path<D: Resource>(id: &DocumentId) -> String {
    format!("{}/{id}", D::NAMES.path)
}

/// Fetch every `D` and replace the store's copy.
///
/// # Errors
///
/// Returns the [`Rejection`] dispatched when the request fails.
pub async fn fetch_all<D: Slice>(
    store: &Arc<Store>,
    transport: &Arc<dyn Transport>,
) -> Result<Vec<D>, Rejection> {
    run::<D, ListPayload<D>, _, _>(
        store,
        transport,
        Operation::FetchAll,
        ApiRequest::new(Method::Get, D::NAMES.path),
        None,
        |payload| {
            let items = payload.into_items();
            let fulfilled =
                ResourceAction::FetchAll(Lifecycle::Fulfilled(ListPayload::Bare(items.clone())));
            (fulfilled, items)
        },
    )
    .await
}

/// Create a `D` from `draft` and append the server's copy.
///
/// # Errors
///
/// Returns the [`Rejection`] dispatched when the request fails.
pub async fn add<D: Slice>(
    store: &Arc<Store>,
    transport: &Arc<dyn Transport>,
    draft: &D::Draft,
) -> Result<D, Rejection> {
    run::<D, Confirmed<D>, _, _>(
        store,
        transport,
        Operation::Add,
        ApiRequest::new(Method::Post, D::NAMES.path),
        Some(draft),
        |Confirmed { data }| (ResourceAction::Add(Lifecycle::Fulfilled(data.clone())), data),
    )
    .await
}

/// Replace the `D` addressed by `id` with `draft`.
///
/// # Errors
///
/// Returns the [`Rejection`] dispatched when the request fails.
pub async fn update<D: Slice>(
    store: &Arc<Store>,
    transport: &Arc<dyn Transport>,
    id: &DocumentId,
    draft: &D::Draft,
) -> Result<D, Rejection> {
    run::<D, Confirmed<D>, _, _>(
        store,
        transport,
        Operation::Update,
        ApiRequest::new(Method::Put, document_path::<D>(id)),
        Some(draft),
        |Confirmed { data }| (ResourceAction::Update(Lifecycle::Fulfilled(data.clone())), data),
    )
    .await
}

/// Delete the `D` addressed by `id` and drop it from the store.
///
/// # Errors
///
/// Returns the [`Rejection`] dispatched when the request fails.
pub async fn delete<D: Slice>(
    store: &Arc<Store>,
    transport: &Arc<dyn Transport>,
    id: &DocumentId,
) -> Result<DocumentId, Rejection> {
    let id = *id;
    run::<D, Value, _, _>(
        store,
        transport,
        Operation::Delete,
        ApiRequest::new(Method::Delete, document_path::<D>(&id)),
        None,
        move |_| (ResourceAction::Delete(Lifecycle::Fulfilled(id)), id),
    )
    .await
}

#[cfg(test)]
#[path = "thunk_tests.rs"]
mod tests;
