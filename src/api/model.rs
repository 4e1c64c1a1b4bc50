use serde::{Deserialize, Serialize};

/// One entry of the remote user directory.
///
/// Fields are matched by name; anything else the server sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
