//! Typed client for the Student Rating System backend.
//!
//! Every endpoint gets an explicit request/response schema parsed at this
//! boundary; callers never touch raw JSON. A non-2xx status is a uniform
//! failure and the body is not inspected for detail.

use crate::types::{
    AnalysisResult, CsvUploadSummary, FeedbackRecord, HealthStatus, PerformanceMetrics,
    PerformanceResponse, StudentMetrics,
};
use std::fmt;

/// Failure of a backend call: either the transport broke or the server
/// answered with a non-success status.
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {}", e),
            ApiError::Status(code) => write!(f, "server returned HTTP {}", code.as_u16()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/analyze
    pub async fn analyze(&self, metrics: &StudentMetrics) -> Result<AnalysisResult, ApiError> {
        let response = self
            .http
            .post(self.url("/api/analyze"))
            .json(metrics)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// POST /api/feedback. The success body is unused.
    pub async fn submit_feedback(&self, record: &FeedbackRecord) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/feedback"))
            .json(record)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// POST /api/upload-csv, file bytes as multipart field "file"
    pub async fn upload_csv(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<CsvUploadSummary, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/upload-csv"))
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// GET /api/performance
    pub async fn performance(&self) -> Result<PerformanceMetrics, ApiError> {
        let response = self.http.get(self.url("/api/performance")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let payload: PerformanceResponse = response.json().await?;
        Ok(payload.metrics)
    }
}

/// GET /api/health from a plain thread. Used once at startup, advisory only.
pub fn check_health_blocking(base_url: &str) -> Result<HealthStatus, ApiError> {
    let url = format!("{}/api/health", base_url.trim_end_matches('/'));
    let response = reqwest::blocking::get(&url)?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/api/analyze"), "http://localhost:8000/api/analyze");
    }

    #[test]
    fn status_error_is_human_readable() {
        let err = ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "server returned HTTP 500");
    }
}
