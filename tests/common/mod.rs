//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use userlist::api::{FetchError, User, UserSource};
use userlist::ui::users::UsersState;

pub fn ana() -> User {
    User::new(1, "Ana", "ana@x.com", "123")
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Leanne Graham", "Sincere@april.biz", "1-770-736-8031 x56442"),
        User::new(2, "Ervin Howell", "Shanna@melissa.tv", "010-692-6593 x09125"),
        User::new(3, "Clementine Bauch", "Nathan@yesenia.net", "1-463-123-4447"),
    ]
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// One scripted answer of [`ScriptedSource`].
pub struct Scripted {
    result: Result<Vec<User>, FetchError>,
    gate: Option<oneshot::Receiver<()>>,
}

impl Scripted {
    pub fn users(users: Vec<User>) -> Self {
        Self {
            result: Ok(users),
            gate: None,
        }
    }

    pub fn failure(err: FetchError) -> Self {
        Self {
            result: Err(err),
            gate: None,
        }
    }

    /// Holds the answer back until the returned sender fires (or is dropped).
    pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.gate = Some(rx);
        (self, tx)
    }
}

/// User source answering from a queue; an empty queue answers `[]`.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn push(&self, scripted: Scripted) {
        self.script.lock().push_back(scripted);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for ScriptedSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        let Some(scripted) = next else {
            return Ok(Vec::new());
        };
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}

/// Waits (bounded) until the state satisfies `predicate`.
pub async fn wait_for_state(
    rx: &mut watch::Receiver<UsersState>,
    predicate: impl FnMut(&UsersState) -> bool,
) -> UsersState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("controller dropped")
        .clone()
}
