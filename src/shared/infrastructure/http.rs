//! Common HTTP plumbing shared by the REST and enrichment clients.

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::shared::errors::{AppError, AppResult};

pub const USER_AGENT: &str = "Miteru-App/1.0";

/// Builds the reqwest client used by every outbound API. No request
/// timeout is configured: a hung request hangs only the operation that
/// issued it.
pub fn create_http_client(user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Extracts the collaborator's `{ "message": … }` error payload from a
/// non-2xx response, falling back to a generic message when the body does
/// not parse.
pub async fn error_from_response(response: Response, fallback: &str) -> AppError {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.message.is_empty() => AppError::ApiError(body.message),
        _ => AppError::ApiError(format!("{} (HTTP {})", fallback, status.as_u16())),
    }
}
