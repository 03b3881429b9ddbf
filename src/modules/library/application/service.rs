//! Orchestrates the data loads behind the listing, dashboard and detail
//! views.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::dashboard::DashboardStats;
use super::listing::{build_library, ListingState};
use crate::modules::enrichment::{Enrichment, JikanClient};
use crate::modules::library::domain::LibraryEntry;
use crate::modules::nexo::domain::Nexo;
use crate::modules::nexo::infrastructure::NexoApi;
use crate::modules::series::domain::Series;
use crate::modules::series::infrastructure::SeriesApi;
use crate::shared::application::PaginatedResult;
use crate::shared::errors::AppResult;
use crate::log_error;

/// Everything the detail view needs: the catalog entry, the user's
/// optional viewing record and the optional Jikan enrichment.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesDetail {
    pub series: Series,
    pub nexo: Option<Nexo>,
    pub enrichment: Option<Enrichment>,
}

pub struct LibraryService {
    series_api: Arc<dyn SeriesApi>,
    nexo_api: Arc<dyn NexoApi>,
    jikan: Arc<JikanClient>,
}

impl LibraryService {
    pub fn new(
        series_api: Arc<dyn SeriesApi>,
        nexo_api: Arc<dyn NexoApi>,
        jikan: Arc<JikanClient>,
    ) -> Self {
        Self {
            series_api,
            nexo_api,
            jikan,
        }
    }

    /// Fetches both collections concurrently. Callers only ever see the
    /// pair together — partial results are never exposed, and abandoning
    /// the returned future discards whatever had already arrived.
    pub async fn load_collections(&self) -> AppResult<(Vec<Series>, Vec<Nexo>)> {
        match futures::try_join!(self.series_api.list(), self.nexo_api.list()) {
            Ok(collections) => Ok(collections),
            Err(err) => {
                log_error!("Failed to load collections: {}", err);
                Err(err)
            }
        }
    }

    /// One page of the listing view for the current user.
    pub async fn listing_page(
        &self,
        user_id: i64,
        state: &ListingState,
    ) -> AppResult<PaginatedResult<LibraryEntry>> {
        let (series, nexos) = self.load_collections().await?;
        let entries = build_library(&series, &nexos, user_id, state.search());
        Ok(PaginatedResult::paginate(entries, &state.params()))
    }

    /// The dashboard statistics for the current user.
    pub async fn dashboard(&self, user_id: i64) -> AppResult<DashboardStats> {
        let (series, nexos) = self.load_collections().await?;
        Ok(DashboardStats::calculate(&series, &nexos, user_id))
    }

    /// Assembles the detail view: the series and the nexo collection are
    /// fetched concurrently, then the enrichment lookup runs best-effort
    /// under the caller's cancellation token.
    pub async fn series_detail(
        &self,
        series_id: i64,
        user_id: i64,
        cancel: &CancellationToken,
    ) -> AppResult<SeriesDetail> {
        let (series, nexos) = match futures::try_join!(
            self.series_api.get(series_id),
            self.nexo_api.list()
        ) {
            Ok(pair) => pair,
            Err(err) => {
                log_error!("Failed to load series {}: {}", series_id, err);
                return Err(err);
            }
        };

        let nexo = Nexo::find_for(&nexos, user_id, series_id).cloned();
        let enrichment = self.jikan.lookup(&series.name, cancel).await;

        Ok(SeriesDetail {
            series,
            nexo,
            enrichment,
        })
    }
}
