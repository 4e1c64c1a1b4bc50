//! Data access for the remote user directory.

mod client;
mod error;
mod model;

use async_trait::async_trait;

pub use client::{users_endpoint, ApiClient};
pub use error::{ClientBuildError, FetchError, FetchErrorKind};
pub use model::User;

/// Anything that can produce the user directory.
///
/// Implementations perform a single attempt per call: no retries, no caching.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}
