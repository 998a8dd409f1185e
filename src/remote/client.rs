use crate::errors::{AppError, AppResult};
use crate::models::scanned_code::ScannedCode;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A code as exchanged with the remote `/codigos` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub data: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

fn default_type() -> String {
    "qr".to_string()
}

impl From<&ScannedCode> for RemoteCode {
    /// Body of `POST /codigos`: the local id is not sent.
    fn from(code: &ScannedCode) -> Self {
        Self {
            id: None,
            data: code.data.clone(),
            kind: code.kind.clone(),
            timestamp: Some(code.timestamp),
        }
    }
}

pub struct RemoteClient {
    base_url: String,
    client: Client,
}

impl RemoteClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/codigos", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/codigos/{}", self.base_url, id)
    }

    /// `GET /codigos`
    pub fn list(&self) -> AppResult<Vec<RemoteCode>> {
        let response = self.client.get(self.collection_url()).send()?;
        let response = check_status(response)?;
        Ok(response.json()?)
    }

    /// `GET /codigos/:id`; a 400/404 answer means the code does not exist.
    pub fn get(&self, id: &str) -> AppResult<Option<RemoteCode>> {
        let response = self.client.get(self.item_url(id)).send()?;
        if is_missing(response.status()) {
            return Ok(None);
        }
        let response = check_status(response)?;
        Ok(Some(response.json()?))
    }

    /// `POST /codigos` with `{data, type, timestamp}`.
    pub fn create(&self, code: &ScannedCode) -> AppResult<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&RemoteCode::from(code))
            .send()?;
        check_status(response)?;
        Ok(())
    }

    /// `DELETE /codigos/:id`; returns false when the server does not know it.
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let response = self.client.delete(self.item_url(id)).send()?;
        if is_missing(response.status()) {
            return Ok(false);
        }
        check_status(response)?;
        Ok(true)
    }
}

fn is_missing(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST
}

fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(AppError::Network(format!(
        "{} {}",
        status,
        body.trim()
    )))
}
