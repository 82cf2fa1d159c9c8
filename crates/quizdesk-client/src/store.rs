//! Observable container for [`RootState`].

use tokio::sync::watch;
use tracing::debug;

use crate::action::Action;
use crate::reducer::{RootState, reduce};
use crate::slice::Slice;

/// Holds the client state; actions are the only way to change it.
///
/// Subscribers receive a notification after every dispatch.
///
/// # Examples
/// ```
/// use quizdesk_client::{Action, Lifecycle, ResourceAction, Store};
///
/// let store = Store::new();
/// let changes = store.subscribe();
/// store.dispatch(Action::Quizzes(ResourceAction::FetchAll(Lifecycle::Pending)));
/// assert!(changes.has_changed().expect("store alive"));
/// assert!(store.state().quizzes.loading);
/// ```
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<RootState>,
}

impl Store {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    /// A store seeded with `state`.
    #[must_use]
    pub fn with_state(state: RootState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { state: sender }
    }

    /// Reduce `action` into the current state and notify subscribers.
    pub fn dispatch(&self, action: Action) {
        debug!(action = %action, "dispatching action");
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    /// Snapshot of the whole state.
    #[must_use]
    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Snapshot of the collection holding `D`.
    #[must_use]
    pub fn items<D: Slice>(&self) -> Vec<D> {
        D::select(&self.state.borrow()).items.clone()
    }

    /// Receiver notified after every dispatch.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
