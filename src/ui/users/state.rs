use crate::api::User;
use crate::ui::mvi::UiState;

/// What the user list screen should currently show.
///
/// Exactly one case is active; every transition replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsersState {
    #[default]
    Loading,
    /// Users in server order.
    Success(Vec<User>),
    Error(String),
}

impl UiState for UsersState {}

impl UsersState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Success(users) => Some(users),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
