//! HTTP client for the users API.
//!
//! One call per operation; errors are returned to the caller unchanged.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::models::{UpdateUserRequest, User, UserDraft};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The five operations the directory UI needs
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<User>>;

    async fn get(&self, id: i64) -> ClientResult<User>;

    async fn create(&self, draft: UserDraft) -> ClientResult<User>;

    /// Sends the draft together with `id` so the server can check they agree.
    async fn update(&self, id: i64, draft: UserDraft) -> ClientResult<()>;

    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// `reqwest` implementation of [`UserApi`].
///
/// `base_url` is the collection URL, e.g. `http://localhost:8080/api/users`.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turns any non-2xx response into [`ClientError::Status`].
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, %body, "Request rejected by server");
        Err(ClientError::Status { status, body })
    }
}

#[async_trait]
impl UserApi for UserClient {
    async fn list(&self) -> ClientResult<Vec<User>> {
        let response = self.http.get(&self.base_url).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn get(&self, id: i64) -> ClientResult<User> {
        let response = self.http.get(self.item_url(id)).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn create(&self, draft: UserDraft) -> ClientResult<User> {
        let response = self.http.post(&self.base_url).json(&draft).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn update(&self, id: i64, draft: UserDraft) -> ClientResult<()> {
        let body = UpdateUserRequest {
            id: Some(id),
            draft,
        };
        let response = self.http.put(self.item_url(id)).json(&body).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = UserClient::new("http://localhost:8080/api/users/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/users");
        assert_eq!(client.item_url(4), "http://localhost:8080/api/users/4");
    }

    #[test]
    fn test_status_error_exposes_status() {
        let err = ClientError::Status {
            status: StatusCode::CONFLICT,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    }
}
