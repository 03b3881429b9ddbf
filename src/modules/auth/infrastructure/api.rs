//! Remote authentication endpoint client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::http::{create_http_client, USER_AGENT};

/// Identity payload returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub profile_img: Option<String>,
    pub token: String,
    /// Session lifetime in milliseconds, relative to now.
    #[serde(rename = "maxAge")]
    pub max_age: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Non-success responses surface as a generic invalid-credentials
    /// failure; the body is not inspected.
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginUser>;
    /// Best-effort server-side session invalidation.
    async fn logout(&self) -> AppResult<()>;
}

pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: create_http_client(USER_AGENT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginUser> {
        let response = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.user)
    }

    async fn logout(&self) -> AppResult<()> {
        self.client
            .post(format!("{}/api/auth/logout", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
