//! Pure state transitions for the client state store.
//!
//! Only fetch actions touch `loading` and `error`. Mutation failures reach
//! the caller through the returned rejection and leave state untouched.

use quizdesk_model::{Announcement, Quiz, Resource};

use crate::action::{Action, Lifecycle, ResourceAction};

/// Client copy of one resource collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<D> {
    /// Documents as last fetched or merged after a write.
    pub items: Vec<D>,
    /// True exactly while a fetch is in flight.
    pub loading: bool,
    /// Reason of the most recent fetch rejection.
    pub error: Option<String>,
}

impl<D> Default for ResourceState<D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Every collection held by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    /// Quiz collection.
    pub quizzes: ResourceState<Quiz>,
    /// Announcement collection.
    pub announcements: ResourceState<Announcement>,
}

/// Apply one resource action to its collection.
///
/// # Examples
/// ```
/// use quizdesk_client::{Lifecycle, ResourceAction, ResourceState, reduce_resource};
/// use quizdesk_model::Quiz;
///
/// let state = reduce_resource(
///     ResourceState::<Quiz>::default(),
///     ResourceAction::FetchAll(Lifecycle::Pending),
/// );
/// assert!(state.loading);
/// ```
#[must_use]
pub fn reduce_resource<D: Resource>(
    mut state: ResourceState<D>,
    action: ResourceAction<D>,
) -> ResourceState<D> {
    match action {
        ResourceAction::FetchAll(Lifecycle::Pending) => {
            state.loading = true;
            state.error = None;
        }
        ResourceAction::FetchAll(Lifecycle::Fulfilled(payload)) => {
            state.loading = false;
            state.items = payload.into_items();
        }
        ResourceAction::FetchAll(Lifecycle::Rejected(reason)) => {
            state.loading = false;
            state.error = Some(reason);
        }
        ResourceAction::Add(Lifecycle::Fulfilled(document)) => state.items.push(document),
        ResourceAction::Update(Lifecycle::Fulfilled(document)) => {
            let id = document.id();
            if let Some(slot) = state.items.iter_mut().find(|item| item.id() == id) {
                *slot = document;
            }
        }
        ResourceAction::Delete(Lifecycle::Fulfilled(id)) => {
            state.items.retain(|item| item.id() != id);
        }
        ResourceAction::Add(_) | ResourceAction::Update(_) | ResourceAction::Delete(_) => {}
    }
    state
}

/// Route an action to the collection it belongs to.
#[must_use]
pub fn reduce(mut state: RootState, action: Action) -> RootState {
    match action {
        Action::Quizzes(action) => {
            state.quizzes = reduce_resource(state.quizzes, action);
        }
        Action::Announcements(action) => {
            state.announcements = reduce_resource(state.announcements, action);
        }
    }
    state
}
