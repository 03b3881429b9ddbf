//! REST client for the user-series relationship collection.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::modules::nexo::domain::{NewNexo, Nexo, NexoPatch};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::http::{create_http_client, error_from_response, USER_AGENT};
use crate::shared::infrastructure::storage::{KeyValueStore, KEY_AUTH_TOKEN};

#[async_trait]
pub trait NexoApi: Send + Sync {
    /// The collaborator returns every user's records; callers filter by
    /// user locally.
    async fn list(&self) -> AppResult<Vec<Nexo>>;
    async fn create(&self, nexo: &NewNexo) -> AppResult<Nexo>;
    async fn update(&self, id: i64, patch: &NexoPatch) -> AppResult<Nexo>;
}

pub struct HttpNexoApi {
    client: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl HttpNexoApi {
    pub fn new(base_url: &str, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        Ok(Self {
            client: create_http_client(USER_AGENT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get(KEY_AUTH_TOKEN) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/api/nexos{}", self.base_url, suffix)
    }
}

#[async_trait]
impl NexoApi for HttpNexoApi {
    async fn list(&self) -> AppResult<Vec<Nexo>> {
        let response = self
            .authorized(self.client.get(self.url("")))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, nexo: &NewNexo) -> AppResult<Nexo> {
        let response = self
            .authorized(self.client.post(self.url("")))
            .json(nexo)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to create the nexo").await);
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: i64, patch: &NexoPatch) -> AppResult<Nexo> {
        let response = self
            .authorized(self.client.put(self.url(&format!("/{}", id))))
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to update the nexo").await);
        }
        Ok(response.json().await?)
    }
}
