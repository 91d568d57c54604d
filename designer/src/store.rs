//! The persistence interface the serializer talks to, plus the HTTP client
//! implementation speaking the screendesigner REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a persisted application.
pub type ApplicationId = Uuid;

/// Identity of a persisted screen.
pub type ScreenId = Uuid;

/// A screen as persisted by the backing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRecord {
    pub id: ScreenId,
    pub application_id: ApplicationId,
    pub name: String,
    /// The serialized layout document.
    pub layout_json: String,
}

/// Lightweight screen listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSummary {
    pub id: ScreenId,
    pub name: String,
}

/// Failure talking to the persistence service. Surfaced to the user with the
/// underlying message; never retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("screen not found: {0}")]
    NotFound(ScreenId),
    #[error("network error: {0}")]
    Network(String),
    #[error("the persistence service rejected the request: {0}")]
    Rejected(String),
}

/// Request/response interface to the screen persistence service.
///
/// Implemented over HTTP in production ([`HttpScreenStore`]) and in memory
/// for tests. All calls are asynchronous and non-blocking; a failed call
/// leaves whatever the caller holds untouched.
#[async_trait]
pub trait ScreenStore: Send + Sync {
    /// Persist a new screen under an application; the service assigns the id.
    async fn create(
        &self,
        application_id: ApplicationId,
        name: &str,
        layout_json: &str,
    ) -> Result<ScreenRecord, StoreError>;

    /// Overwrite an existing screen's name and layout.
    async fn update(&self, id: ScreenId, name: &str, layout_json: &str) -> Result<ScreenRecord, StoreError>;

    /// Fetch one persisted screen.
    async fn get(&self, id: ScreenId) -> Result<ScreenRecord, StoreError>;

    /// List an application's screens, newest first.
    async fn list(&self, application_id: ApplicationId) -> Result<Vec<ScreenSummary>, StoreError>;

    /// Delete a persisted screen.
    async fn delete(&self, id: ScreenId) -> Result<(), StoreError>;
}

/// `ScreenStore` speaking the `/api/screens` REST endpoints.
pub struct HttpScreenStore {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateScreenBody<'a> {
    application_id: ApplicationId,
    name: &'a str,
    layout_json: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateScreenBody<'a> {
    name: &'a str,
    layout_json: &'a str,
}

impl HttpScreenStore {
    /// Client against a server base URL such as `http://localhost:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client: reqwest::Client::new() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        missing: Option<ScreenId>,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND
            && let Some(id) = missing
        {
            return Err(StoreError::NotFound(id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {body}")));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))
    }
}

fn network(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

#[async_trait]
impl ScreenStore for HttpScreenStore {
    async fn create(
        &self,
        application_id: ApplicationId,
        name: &str,
        layout_json: &str,
    ) -> Result<ScreenRecord, StoreError> {
        let response = self
            .client
            .post(self.url("/api/screens"))
            .json(&CreateScreenBody { application_id, name, layout_json })
            .send()
            .await
            .map_err(network)?;
        Self::read_json(response, None).await
    }

    async fn update(&self, id: ScreenId, name: &str, layout_json: &str) -> Result<ScreenRecord, StoreError> {
        let response = self
            .client
            .put(self.url(&format!("/api/screens/{id}")))
            .json(&UpdateScreenBody { name, layout_json })
            .send()
            .await
            .map_err(network)?;
        Self::read_json(response, Some(id)).await
    }

    async fn get(&self, id: ScreenId) -> Result<ScreenRecord, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/api/screens/{id}")))
            .send()
            .await
            .map_err(network)?;
        Self::read_json(response, Some(id)).await
    }

    async fn list(&self, application_id: ApplicationId) -> Result<Vec<ScreenSummary>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/api/screens/application/{application_id}")))
            .send()
            .await
            .map_err(network)?;
        Self::read_json(response, None).await
    }

    async fn delete(&self, id: ScreenId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/screens/{id}")))
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{status}: {body}")));
        }
        Ok(())
    }
}
