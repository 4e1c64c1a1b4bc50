use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::LoadRequested => UsersState::Loading,
            // Results only land on a pending load
            UsersIntent::Loaded(users) => match state {
                UsersState::Loading => UsersState::Success(users),
                other => other,
            },
            UsersIntent::Failed(message) => match state {
                UsersState::Loading => UsersState::Error(message),
                other => other,
            },
        }
    }
}
