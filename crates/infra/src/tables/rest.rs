//! REST client for the hosted table layer
//!
//! Speaks the backend's PostgREST-flavored dialect: single-object reads via
//! the `Accept: application/vnd.pgrst.object+json` header (zero rows comes
//! back as the distinguished `PGRST116` error code), inserts with
//! `Prefer: return=representation`, and updates filtered by column equality.

use std::time::Duration;

use painel_domain::constants::{NO_ROWS_CODE, TABLES_PATH, UNIQUE_VIOLATION_CODE};
use painel_domain::{PainelError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Accept header value for single-object reads
const OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Configuration for the table client
#[derive(Debug, Clone)]
pub struct TableClientConfig {
    /// Service base URL (no trailing slash)
    pub base_url: String,
    /// Public API key sent as both `apikey` and bearer credential
    pub anon_key: String,
    /// Timeout for table requests
    pub timeout: Duration,
}

impl TableClientConfig {
    /// Build a config with the default 30 second timeout
    #[must_use]
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self { base_url, anon_key, timeout: Duration::from_secs(30) }
    }
}

/// Error response body from the table layer
#[derive(Debug, Clone, Default, Deserialize)]
struct TableApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl TableApiError {
    fn detail(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .unwrap_or_else(|| "unknown table error".to_string())
    }
}

/// HTTP client for the hosted table endpoints
pub struct TableClient {
    http: Client,
    config: TableClientConfig,
}

impl TableClient {
    /// Create a new table client
    ///
    /// # Errors
    /// Returns `PainelError::Config` if the HTTP client cannot be built.
    pub fn new(config: TableClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| PainelError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }

    /// Read a single row by column equality
    ///
    /// The backend's zero-rows error code is mapped to `Ok(None)`; it is the
    /// distinguished not-found condition, not a failure.
    ///
    /// # Errors
    /// Returns `PainelError::Network` on transport failures and
    /// `PainelError::Storage` on any other error response.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Option<T>> {
        let url = self.table_url(table);
        let response = self
            .http
            .get(url)
            .query(&[(column, format!("eq.{value}")), ("select", "*".to_string())])
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(reqwest::header::ACCEPT, OBJECT_ACCEPT)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            let row = response
                .json::<T>()
                .await
                .map_err(|err| PainelError::Storage(format!("malformed table row: {err}")))?;
            return Ok(Some(row));
        }

        let status = response.status();
        let error = Self::error_body(response).await;
        if error.code.as_deref() == Some(NO_ROWS_CODE) {
            debug!(table, column, "no row matched");
            return Ok(None);
        }

        Err(map_api_error(status, &error))
    }

    /// Insert a row and return the stored representation
    ///
    /// # Errors
    /// Returns `PainelError::Conflict` on a unique violation, otherwise as
    /// [`select_single`](Self::select_single).
    pub async fn insert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.table_url(table);
        let response = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(reqwest::header::ACCEPT, OBJECT_ACCEPT)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| PainelError::Storage(format!("malformed table row: {err}")));
        }

        let status = response.status();
        let error = Self::error_body(response).await;
        Err(map_api_error(status, &error))
    }

    /// Update rows matched by column equality
    ///
    /// # Errors
    /// As [`insert`](Self::insert).
    pub async fn update<B: Serialize + Sync>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.table_url(table);
        let response = self
            .http
            .patch(url)
            .query(&[(column, format!("eq.{value}"))])
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let error = Self::error_body(response).await;
        Err(map_api_error(status, &error))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.config.base_url, TABLES_PATH, table)
    }

    async fn error_body(response: Response) -> TableApiError {
        response.json().await.unwrap_or_else(|err| {
            warn!(error = %err, "table error body was not JSON");
            TableApiError::default()
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> PainelError {
    PainelError::Network(format!("table request failed: {err}"))
}

fn map_api_error(status: StatusCode, error: &TableApiError) -> PainelError {
    if error.code.as_deref() == Some(UNIQUE_VIOLATION_CODE) || status == StatusCode::CONFLICT {
        return PainelError::Conflict(error.detail());
    }
    PainelError::Storage(format!("table error ({status}): {}", error.detail()))
}
