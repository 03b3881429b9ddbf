/// Catalog service tests - the composite add/edit flows
///
/// Tests cover:
/// - Series-then-nexo creation order and payloads
/// - Validation short-circuiting before any network call
/// - Partial failure surfacing after the series is created
mod utils;

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use miteru::modules::nexo::domain::{NewNexo, Nexo, NexoPatch, WatchState};
use miteru::modules::nexo::infrastructure::NexoApi;
use miteru::modules::series::domain::{NewSeries, Season, Series, SeriesPatch};
use miteru::modules::series::infrastructure::SeriesApi;
use miteru::modules::series::CatalogService;
use miteru::shared::errors::{AppError, AppResult};
use utils::factories::{NexoFactory, SeriesFactory};

mock! {
    pub SeriesApiMock {}

    #[async_trait]
    impl SeriesApi for SeriesApiMock {
        async fn list(&self) -> AppResult<Vec<Series>>;
        async fn get(&self, id: i64) -> AppResult<Series>;
        async fn create(&self, series: &NewSeries) -> AppResult<Series>;
        async fn update(&self, id: i64, patch: &SeriesPatch) -> AppResult<Series>;
    }
}

mock! {
    pub NexoApiMock {}

    #[async_trait]
    impl NexoApi for NexoApiMock {
        async fn list(&self) -> AppResult<Vec<Nexo>>;
        async fn create(&self, nexo: &NewNexo) -> AppResult<Nexo>;
        async fn update(&self, id: i64, patch: &NexoPatch) -> AppResult<Nexo>;
    }
}

fn new_series(name: &str, episodes: i32) -> NewSeries {
    NewSeries {
        name: name.to_string(),
        episodes,
        studio: "Madhouse".to_string(),
        genre: "Fantasy".to_string(),
        genre2: String::new(),
        genre3: String::new(),
        year: 2023,
        season: Season::Fall,
        img: "a.jpg".to_string(),
        img2: "b.jpg".to_string(),
        splash: "c.jpg".to_string(),
    }
}

#[tokio::test]
async fn add_to_collection_creates_the_series_then_the_nexo() {
    let mut series_api = MockSeriesApiMock::new();
    series_api
        .expect_create()
        .withf(|s: &NewSeries| s.name == "Frieren")
        .times(1)
        .returning(|_| Ok(SeriesFactory::new().with_id(42).with_name("Frieren").build()));

    let mut nexo_api = MockNexoApiMock::new();
    nexo_api
        .expect_create()
        .withf(|n: &NewNexo| {
            n.series_id == 42 && n.users_id == 7 && n.state == WatchState::Airing && n.seen == 8
        })
        .times(1)
        .returning(|_| {
            Ok(NexoFactory::new()
                .with_id(100)
                .for_series(42)
                .for_user(7)
                .with_state(WatchState::Airing)
                .with_seen(8)
                .build())
        });

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let (series, nexo) = service
        .add_to_collection(new_series("Frieren", 28), 7, WatchState::Airing, 8, 0)
        .await
        .unwrap();

    assert_eq!(series.id, 42);
    assert_eq!(nexo.series_id, 42);
    assert_eq!(nexo.users_id, 7);
}

#[tokio::test]
async fn invalid_progress_short_circuits_before_any_call() {
    let mut series_api = MockSeriesApiMock::new();
    series_api.expect_create().times(0);
    let mut nexo_api = MockNexoApiMock::new();
    nexo_api.expect_create().times(0);

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let result = service
        .add_to_collection(new_series("Frieren", 12), 7, WatchState::Airing, 13, 0)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let mut series_api = MockSeriesApiMock::new();
    series_api.expect_create().times(0);
    let mut nexo_api = MockNexoApiMock::new();
    nexo_api.expect_create().times(0);

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let result = service
        .add_to_collection(new_series("  ", 12), 7, WatchState::Airing, 0, 0)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn nexo_failure_surfaces_after_the_series_was_created() {
    let mut series_api = MockSeriesApiMock::new();
    series_api
        .expect_create()
        .times(1)
        .returning(|_| Ok(SeriesFactory::new().with_id(42).build()));

    let mut nexo_api = MockNexoApiMock::new();
    nexo_api
        .expect_create()
        .times(1)
        .returning(|_| Err(AppError::ApiError("nexo rejected".to_string())));

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let result = service
        .add_to_collection(new_series("Frieren", 28), 7, WatchState::Airing, 0, 0)
        .await;

    // The series is not rolled back; the error still reaches the caller.
    assert!(matches!(result, Err(AppError::ApiError(_))));
}

#[tokio::test]
async fn update_entry_touches_the_series_and_the_nexo() {
    let mut series_api = MockSeriesApiMock::new();
    series_api
        .expect_update()
        .with(eq(3), eq(SeriesPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        }))
        .times(1)
        .returning(|_, _| Ok(SeriesFactory::new().with_id(3).with_name("Renamed").build()));

    let mut nexo_api = MockNexoApiMock::new();
    nexo_api
        .expect_update()
        .with(eq(9), eq(NexoPatch {
            seen: Some(12),
            ..Default::default()
        }))
        .times(1)
        .returning(|_, _| {
            Ok(NexoFactory::new()
                .with_id(9)
                .for_series(3)
                .with_seen(12)
                .build())
        });

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let patch = SeriesPatch {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let nexo_patch = NexoPatch {
        seen: Some(12),
        ..Default::default()
    };

    let (series, nexo) = service
        .update_entry(3, patch, Some((9, nexo_patch)))
        .await
        .unwrap();
    assert_eq!(series.name, "Renamed");
    assert_eq!(nexo.unwrap().seen, 12);
}

#[tokio::test]
async fn update_entry_without_a_nexo_only_touches_the_series() {
    let mut series_api = MockSeriesApiMock::new();
    series_api
        .expect_update()
        .times(1)
        .returning(|_, _| Ok(SeriesFactory::new().with_id(3).build()));

    let mut nexo_api = MockNexoApiMock::new();
    nexo_api.expect_update().times(0);

    let service = CatalogService::new(Arc::new(series_api), Arc::new(nexo_api));
    let (_, nexo) = service
        .update_entry(3, SeriesPatch::default(), None)
        .await
        .unwrap();
    assert!(nexo.is_none());
}
