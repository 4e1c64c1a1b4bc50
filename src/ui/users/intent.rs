use crate::api::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// A load (first load, reload or retry) has started.
    LoadRequested,
    /// The fetch resolved with the server's users.
    Loaded(Vec<User>),
    /// The fetch failed; carries the message to display.
    Failed(String),
}

impl Intent for UsersIntent {}
