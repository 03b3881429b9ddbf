//! REST client for the series collection.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::modules::series::domain::{NewSeries, Series, SeriesPatch};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::http::{create_http_client, error_from_response, USER_AGENT};
use crate::shared::infrastructure::storage::{KeyValueStore, KEY_AUTH_TOKEN};

#[async_trait]
pub trait SeriesApi: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Series>>;
    async fn get(&self, id: i64) -> AppResult<Series>;
    async fn create(&self, series: &NewSeries) -> AppResult<Series>;
    async fn update(&self, id: i64, patch: &SeriesPatch) -> AppResult<Series>;
}

pub struct HttpSeriesApi {
    client: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl HttpSeriesApi {
    pub fn new(base_url: &str, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        Ok(Self {
            client: create_http_client(USER_AGENT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// The bearer token is read from durable storage at call time, so a
    /// fresh login is picked up without rebuilding the client.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get(KEY_AUTH_TOKEN) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/api/series{}", self.base_url, suffix)
    }
}

#[async_trait]
impl SeriesApi for HttpSeriesApi {
    async fn list(&self) -> AppResult<Vec<Series>> {
        let response = self
            .authorized(self.client.get(self.url("")))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: i64) -> AppResult<Series> {
        let response = self
            .authorized(self.client.get(self.url(&format!("/{}", id))))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create(&self, series: &NewSeries) -> AppResult<Series> {
        let response = self
            .authorized(self.client.post(self.url("")))
            .json(series)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to create the series").await);
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: i64, patch: &SeriesPatch) -> AppResult<Series> {
        // The collaborator expects status forced back to 1 on every update.
        let mut body = patch.clone();
        body.status = Some(1);

        let response = self
            .authorized(self.client.put(self.url(&format!("/{}", id))))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to update the series").await);
        }
        Ok(response.json().await?)
    }
}
