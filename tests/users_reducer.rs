use userlist::api::User;
use userlist::ui::mvi::Reducer;
use userlist::ui::users::{UsersIntent, UsersReducer, UsersState};

fn ana() -> User {
    User::new(1, "Ana", "ana@x.com", "123")
}

#[test]
fn initial_state_is_loading() {
    assert_eq!(UsersState::default(), UsersState::Loading);
}

#[test]
fn loaded_while_loading_becomes_success() {
    let state = UsersReducer::reduce(UsersState::Loading, UsersIntent::Loaded(vec![ana()]));
    assert_eq!(state, UsersState::Success(vec![ana()]));
}

#[test]
fn loaded_empty_list_is_still_success() {
    let state = UsersReducer::reduce(UsersState::Loading, UsersIntent::Loaded(vec![]));
    assert_eq!(state, UsersState::Success(vec![]));
    assert_eq!(state.users(), Some(&[][..]));
}

#[test]
fn failed_while_loading_becomes_error() {
    let state = UsersReducer::reduce(
        UsersState::Loading,
        UsersIntent::Failed("timeout".to_string()),
    );
    assert_eq!(state, UsersState::Error("timeout".to_string()));
    assert_eq!(state.error_message(), Some("timeout"));
}

#[test]
fn load_requested_replaces_success() {
    let state = UsersReducer::reduce(
        UsersState::Success(vec![ana()]),
        UsersIntent::LoadRequested,
    );
    assert_eq!(state, UsersState::Loading);
}

#[test]
fn load_requested_replaces_error() {
    let state = UsersReducer::reduce(
        UsersState::Error("boom".to_string()),
        UsersIntent::LoadRequested,
    );
    assert_eq!(state, UsersState::Loading);
}

#[test]
fn load_requested_while_loading_stays_loading() {
    let state = UsersReducer::reduce(UsersState::Loading, UsersIntent::LoadRequested);
    assert!(state.is_loading());
}

#[test]
fn results_without_pending_load_are_ignored() {
    let success = UsersState::Success(vec![ana()]);
    let state = UsersReducer::reduce(success.clone(), UsersIntent::Failed("late".to_string()));
    assert_eq!(state, success);

    let error = UsersState::Error("boom".to_string());
    let state = UsersReducer::reduce(error.clone(), UsersIntent::Loaded(vec![]));
    assert_eq!(state, error);
}

#[test]
fn success_keeps_server_order_and_duplicates() {
    let users = vec![
        User::new(2, "B", "b@x.com", "2"),
        User::new(1, "A", "a@x.com", "1"),
        User::new(2, "B", "b@x.com", "2"),
    ];
    let state = UsersReducer::reduce(UsersState::Loading, UsersIntent::Loaded(users.clone()));
    assert_eq!(state.users(), Some(users.as_slice()));
}
