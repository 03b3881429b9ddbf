//! Catalog management: the composite flows behind the add and edit views.

use std::sync::Arc;

use crate::modules::nexo::domain::{NewNexo, Nexo, NexoPatch, WatchState};
use crate::modules::nexo::infrastructure::NexoApi;
use crate::modules::series::domain::{NewSeries, Series, SeriesPatch};
use crate::modules::series::infrastructure::SeriesApi;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct CatalogService {
    series_api: Arc<dyn SeriesApi>,
    nexo_api: Arc<dyn NexoApi>,
}

impl CatalogService {
    pub fn new(series_api: Arc<dyn SeriesApi>, nexo_api: Arc<dyn NexoApi>) -> Self {
        Self {
            series_api,
            nexo_api,
        }
    }

    pub async fn get_series(&self, id: i64) -> AppResult<Series> {
        self.series_api.get(id).await
    }

    /// Creates a catalog entry and the current user's viewing record for
    /// it, in that order. A nexo failure after a successful series
    /// creation surfaces the error; the series is not rolled back.
    pub async fn add_to_collection(
        &self,
        series: NewSeries,
        user_id: i64,
        state: WatchState,
        seen: i32,
        stars: i32,
    ) -> AppResult<(Series, Nexo)> {
        Validator::validate_series_name(&series.name)?;
        Validator::validate_episode_count(series.episodes)?;
        Validator::validate_progress(seen, series.episodes)?;
        Validator::validate_stars(stars)?;

        log_debug!("Creating series '{}' for user {}", series.name, user_id);
        let created = self.series_api.create(&series).await?;

        let nexo = self
            .nexo_api
            .create(&NewNexo {
                series_id: created.id,
                users_id: user_id,
                state,
                seen,
                stars,
            })
            .await?;

        log_info!(
            "Added series {} ('{}') to user {}'s collection",
            created.id,
            created.name,
            user_id
        );
        Ok((created, nexo))
    }

    /// Updates a catalog entry and, when the user has a viewing record for
    /// it, that record too. The series update forces status back to 1 on
    /// the wire.
    pub async fn update_entry(
        &self,
        series_id: i64,
        patch: SeriesPatch,
        nexo_update: Option<(i64, NexoPatch)>,
    ) -> AppResult<(Series, Option<Nexo>)> {
        if let Some(name) = patch.name.as_deref() {
            Validator::validate_series_name(name)?;
        }
        if let Some(episodes) = patch.episodes {
            Validator::validate_episode_count(episodes)?;
        }
        if let Some((_, nexo_patch)) = &nexo_update {
            if let Some(stars) = nexo_patch.stars {
                Validator::validate_stars(stars)?;
            }
            if let (Some(seen), Some(episodes)) = (nexo_patch.seen, patch.episodes) {
                Validator::validate_progress(seen, episodes)?;
            }
        }

        let updated = self.series_api.update(series_id, &patch).await?;

        let nexo = match nexo_update {
            Some((nexo_id, nexo_patch)) => {
                Some(self.nexo_api.update(nexo_id, &nexo_patch).await?)
            }
            None => None,
        };

        log_info!("Updated series {}", series_id);
        Ok((updated, nexo))
    }
}
