use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::PlatformConfig;
use crate::error::{PlatformError, PlatformResult};

/// A raw record as returned by the platform API
pub type PlatformRecord = serde_json::Map<String, serde_json::Value>;

/// Annotation preference so choice and lookup columns carry their display values
const ANNOTATIONS_PREFERENCE: &str =
    "odata.include-annotations=\"OData.Community.Display.V1.FormattedValue\"";

/// OData list envelope
#[derive(Debug, Deserialize)]
struct ListResponse {
    value: Vec<PlatformRecord>,
}

/// Client for the hosted data platform's REST API
#[derive(Clone)]
pub struct PlatformClient {
    http_client: Client,
    config: PlatformConfig,
}

impl PlatformClient {
    /// Create a new platform client
    pub fn new(config: PlatformConfig) -> PlatformResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// URL of the idea table collection
    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_path.trim_matches('/'),
            self.config.table
        )
    }

    /// URL of a single record
    fn record_url(&self, id: &str) -> String {
        format!("{}({})", self.table_url(), id)
    }

    /// Get authorization header value
    fn auth_header(&self) -> PlatformResult<String> {
        match &self.config.token {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err(PlatformError::config("No platform token configured")),
        }
    }

    /// List all idea records, newest first
    pub async fn list_records(&self) -> PlatformResult<Vec<PlatformRecord>> {
        let url = self.table_url();
        debug!("Listing records from {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.auth_header()?)
            .header("Accept", "application/json")
            .header("Prefer", ANNOTATIONS_PREFERENCE)
            .query(&[(
                "$orderby",
                format!("{} desc", self.config.schema.created),
            )])
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let list: ListResponse = response
                    .json()
                    .await
                    .map_err(|e| PlatformError::invalid(e.to_string()))?;
                Ok(list.value)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PlatformError::TokenExpired),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(PlatformError::Http(error_text))
            }
        }
    }

    /// Get a single record by id
    pub async fn get_record(&self, id: &str) -> PlatformResult<PlatformRecord> {
        let url = self.record_url(id);
        debug!("Fetching record {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.auth_header()?)
            .header("Accept", "application/json")
            .header("Prefer", ANNOTATIONS_PREFERENCE)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<PlatformRecord>()
                .await
                .map_err(|e| PlatformError::invalid(e.to_string())),
            StatusCode::NOT_FOUND => Err(PlatformError::NotFound(id.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PlatformError::TokenExpired),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(PlatformError::Http(error_text))
            }
        }
    }

    /// Create a record and return the stored representation
    pub async fn create_record(&self, body: &PlatformRecord) -> PlatformResult<PlatformRecord> {
        let url = self.table_url();
        debug!("Creating record at {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.auth_header()?)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => response
                .json::<PlatformRecord>()
                .await
                .map_err(|e| PlatformError::invalid(e.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PlatformError::TokenExpired),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(PlatformError::Http(error_text))
            }
        }
    }

    /// Partially update a record and return the stored representation
    pub async fn update_record(
        &self,
        id: &str,
        body: &PlatformRecord,
    ) -> PlatformResult<PlatformRecord> {
        let url = self.record_url(id);
        debug!("Updating record {}", url);

        let response = self
            .http_client
            .patch(&url)
            .header("Authorization", self.auth_header()?)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("If-Match", "*")
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<PlatformRecord>()
                .await
                .map_err(|e| PlatformError::invalid(e.to_string())),
            StatusCode::NOT_FOUND => Err(PlatformError::NotFound(id.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PlatformError::TokenExpired),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(PlatformError::Http(error_text))
            }
        }
    }
}
