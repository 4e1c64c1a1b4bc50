use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::api::error::{ClientBuildError, FetchError};
use crate::api::model::User;
use crate::api::UserSource;
use crate::config::ApiConfig;

const USER_AGENT: &str = concat!("userlist/", env!("CARGO_PKG_VERSION"));

/// Reqwest-backed user source for one fixed endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientBuildError> {
        let endpoint = users_endpoint(&config.base_url, &config.users_path)?;
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for ApiClient {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let url = self.endpoint.to_string();
        tracing::debug!(%url, "Fetching users");

        let result = self.do_fetch(&url).await;
        match &result {
            Ok(users) => tracing::debug!(%url, count = users.len(), "Fetched users"),
            Err(err) => tracing::warn!(%url, error = %err, "User fetch failed"),
        }
        result
    }
}

impl ApiClient {
    async fn do_fetch(&self, url: &str) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_slice::<Vec<User>>(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

/// Joins the resource path onto the base URL.
///
/// The base is treated as a directory whether or not it ends in `/`.
pub fn users_endpoint(base_url: &str, users_path: &str) -> Result<Url, ClientBuildError> {
    let invalid = |reason: String| ClientBuildError::InvalidEndpoint {
        endpoint: format!("{}{}", base_url, users_path),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let path = users_path.trim().trim_start_matches('/');
    if path.is_empty() {
        return Err(invalid("users path is empty".to_string()));
    }

    base.join(path).map_err(|e| invalid(e.to_string()))
}
