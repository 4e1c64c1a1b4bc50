//! Fetch lifecycle for the user list screen.
//!
//! The controller is the single writer of a `watch` channel holding
//! [`UsersState`]; the screen (or any other reader) subscribes to it.
//! Every `load_users()` publishes `Loading` before any async work starts and
//! supersedes whatever fetch was still running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{FetchError, UserSource};
use crate::ui::mvi::Reducer;
use crate::ui::users::{UsersIntent, UsersReducer, UsersState};

/// Shown when a failure has nothing to say for itself.
pub const DEFAULT_ERROR_MESSAGE: &str = "unknown error while loading users";

pub struct UserListController {
    source: Arc<dyn UserSource>,
    runtime: Handle,
    shared: Arc<Shared>,
    /// Task of the current load. Locked for the whole of `load_users` so
    /// generation order and task order agree.
    in_flight: Mutex<Option<JoinHandle<()>>>,
    started: AtomicBool,
}

struct Shared {
    state: watch::Sender<UsersState>,
    /// Generation of the latest load; only its result may be published.
    generation: Mutex<u64>,
}

impl Shared {
    fn dispatch(&self, intent: UsersIntent) {
        self.state.send_modify(|state| {
            *state = UsersReducer::reduce(std::mem::take(state), intent);
        });
    }

    fn begin(&self) -> u64 {
        let mut generation = self.generation.lock();
        *generation += 1;
        self.dispatch(UsersIntent::LoadRequested);
        *generation
    }

    fn complete(&self, generation: u64, intent: UsersIntent) -> bool {
        let current = self.generation.lock();
        if *current != generation {
            return false;
        }
        self.dispatch(intent);
        true
    }
}

impl UserListController {
    /// Creates an idle controller in the `Loading` state.
    ///
    /// Nothing is fetched until [`start`](Self::start) or
    /// [`load_users`](Self::load_users) is called. Fetches run on `runtime`.
    pub fn new(source: Arc<dyn UserSource>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(UsersState::default());
        Self {
            source,
            runtime,
            shared: Arc::new(Shared {
                state,
                generation: Mutex::new(0),
            }),
            in_flight: Mutex::new(None),
            started: AtomicBool::new(false),
        }
    }

    /// Performs the initial load. Only the first call has an effect.
    pub fn start(&self) {
        if !self.started.swap(true, Ordering::SeqCst) {
            self.load_users();
        }
    }

    /// Starts a fresh load, replacing any load still in flight.
    ///
    /// `Loading` is visible to readers by the time this returns.
    pub fn load_users(&self) {
        let mut in_flight = self.in_flight.lock();
        let generation = self.shared.begin();
        tracing::info!(generation, "Loading users");

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let task = self.runtime.spawn(async move {
            let intent = match source.fetch_users().await {
                Ok(users) => UsersIntent::Loaded(users),
                Err(err) => UsersIntent::Failed(error_message(&err)),
            };
            if !shared.complete(generation, intent) {
                tracing::debug!(generation, "Discarding result of superseded load");
            }
        });

        if let Some(previous) = in_flight.replace(task) {
            previous.abort();
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UsersState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UsersState> {
        self.shared.state.subscribe()
    }

    /// True while a load has been started and not yet finished.
    pub fn in_flight(&self) -> bool {
        self.in_flight
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Waits until the current load settles into `Success` or `Error`.
    pub async fn wait_settled(&self) -> UsersState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

impl Drop for UserListController {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.get_mut().take() {
            task.abort();
        }
    }
}

/// Display text for a failed fetch.
pub fn error_message(err: &FetchError) -> String {
    err.description()
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
