//! Synchronous HTTP enrichment against the auth and patients services.
//!
//! Reminder events carry record IDs, not recipients. The client and pet
//! records behind those IDs are fetched on demand at send time, never
//! cached. Lookup failures of any sort (network, non-success status,
//! undecodable body) are logged and surfaced as an absence, so the caller
//! decides what a missing record means for the event.

use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::error;

#[cfg(test)]
use mockall::automock;

/// Endpoints of the sibling services that own client and pet records.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the auth service (owns user accounts).
    pub auth_base_url: String,
    /// Base URL of the patients service (owns pet records).
    pub patients_base_url: String,
    /// Per-request timeout. `None` lets requests wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl DirectoryConfig {
    pub fn new(auth_base_url: impl Into<String>, patients_base_url: impl Into<String>) -> Self {
        Self {
            auth_base_url: auth_base_url.into(),
            patients_base_url: patients_base_url.into(),
            request_timeout: None,
        }
    }

    /// Builder method to bound each lookup request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl FromEnv for DirectoryConfig {
    /// Load from `AUTH_SERVICE_URL` and `PATIENTS_SERVICE_URL`, defaulting
    /// to the docker-compose service addresses.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            env_or_default("AUTH_SERVICE_URL", "http://auth-service:3000"),
            env_or_default("PATIENTS_SERVICE_URL", "http://patients-service:3001"),
        ))
    }
}

/// Client record projected from the auth service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub email: String,
    pub fullname: String,
}

/// Pet record projected from the patients service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub pet_name: String,
    /// ID of the owning client in the auth service.
    pub owner: String,
}

/// Both services wrap their responses in a `data` envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Lookup capability for the records reminder events reference by ID.
///
/// Implementations return `None` for any failed lookup; callers promote
/// absence to an error when the recipient cannot be resolved without it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    async fn fetch_client(&self, client_id: &str) -> Option<ClientRecord>;

    async fn fetch_pet(&self, pet_id: &str) -> Option<PetRecord>;
}

/// HTTP-backed [`Directory`] talking to the real sibling services.
pub struct HttpDirectory {
    client: reqwest::Client,
    config: DirectoryConfig,
}

impl HttpDirectory {
    pub fn new(config: DirectoryConfig) -> NotificationResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NotificationError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        let envelope = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiEnvelope<T>>()
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn fetch_client(&self, client_id: &str) -> Option<ClientRecord> {
        let url = format!("{}/api/users/{}", self.config.auth_base_url, client_id);
        match self.fetch_json(&url).await {
            Ok(record) => Some(record),
            Err(err) => {
                error!(client_id, error = %err, "Failed to fetch client data");
                None
            }
        }
    }

    async fn fetch_pet(&self, pet_id: &str) -> Option<PetRecord> {
        let url = format!("{}/api/patients/{}", self.config.patients_base_url, pet_id);
        match self.fetch_json(&url).await {
            Ok(record) => Some(record),
            Err(err) => {
                error!(pet_id, error = %err, "Failed to fetch pet data");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn directory_for(base: &str) -> HttpDirectory {
        HttpDirectory::new(
            DirectoryConfig::new(base, base).with_timeout(Duration::from_secs(2)),
        )
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(["AUTH_SERVICE_URL", "PATIENTS_SERVICE_URL"], || {
            let config = DirectoryConfig::from_env().unwrap();
            assert_eq!(config.auth_base_url, "http://auth-service:3000");
            assert_eq!(config.patients_base_url, "http://patients-service:3001");
            assert!(config.request_timeout.is_none());
        });
    }

    #[test]
    fn test_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("AUTH_SERVICE_URL", Some("http://localhost:3000")),
                ("PATIENTS_SERVICE_URL", Some("http://localhost:3001")),
            ],
            || {
                let config = DirectoryConfig::from_env().unwrap();
                assert_eq!(config.auth_base_url, "http://localhost:3000");
                assert_eq!(config.patients_base_url, "http://localhost:3001");
            },
        );
    }

    #[tokio::test]
    async fn test_fetch_client_unwraps_data_envelope() {
        let router = Router::new().route(
            "/api/users/{id}",
            get(|| async {
                Json(json!({
                    "data": {
                        "email": "carlos@example.com",
                        "fullname": "Carlos Ruiz",
                        "phone": "555-0101"
                    }
                }))
            }),
        );
        let base = spawn_stub(router).await;

        let client = directory_for(&base).fetch_client("c1").await.unwrap();
        assert_eq!(client.email, "carlos@example.com");
        assert_eq!(client.fullname, "Carlos Ruiz");
    }

    #[tokio::test]
    async fn test_fetch_pet_reads_camel_case_fields() {
        let router = Router::new().route(
            "/api/patients/{id}",
            get(|| async {
                Json(json!({
                    "data": { "petName": "Luna", "owner": "c1", "species": "cat" }
                }))
            }),
        );
        let base = spawn_stub(router).await;

        let pet = directory_for(&base).fetch_pet("p1").await.unwrap();
        assert_eq!(pet.pet_name, "Luna");
        assert_eq!(pet.owner, "c1");
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_error_status() {
        let router = Router::new()
            .route(
                "/api/users/{id}",
                get(|| async {
                    (
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "message": "boom" })),
                    )
                }),
            )
            .route(
                "/api/patients/{id}",
                get(|| async {
                    (
                        axum::http::StatusCode::NOT_FOUND,
                        Json(json!({ "message": "not found" })),
                    )
                }),
            );
        let base = spawn_stub(router).await;
        let directory = directory_for(&base);

        assert!(directory.fetch_client("c1").await.is_none());
        assert!(directory.fetch_pet("p1").await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_missing_envelope() {
        let router = Router::new().route(
            "/api/users/{id}",
            get(|| async { Json(json!({ "email": "carlos@example.com" })) }),
        );
        let base = spawn_stub(router).await;

        assert!(directory_for(&base).fetch_client("c1").await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_when_service_is_down() {
        // Bind then drop a listener so the port is known to refuse connections
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        assert!(directory_for(&base).fetch_client("c1").await.is_none());
    }
}
