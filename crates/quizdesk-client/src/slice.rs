//! Binding between resource kinds and their place in the store.

use quizdesk_model::{Announcement, Quiz, Resource};

use crate::action::{Action, ResourceAction};
use crate::reducer::{ResourceState, RootState};

/// A resource with its own collection in [`RootState`].
pub trait Slice: Resource {
    /// Tag a resource action with this collection.
    fn wrap(action: ResourceAction<Self>) -> Action;

    /// This collection's state.
    fn select(state: &RootState) -> &ResourceState<Self>;
}

impl Slice for Quiz {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Quizzes(action)
    }

    fn select(state: &RootState) -> &ResourceState<Self> {
        &state.quizzes
    }
}

impl Slice for Announcement {
    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Announcements(action)
    }

    fn select(state: &RootState) -> &ResourceState<Self> {
        &state.announcements
    }
}
