//! Application bootstrap: wires configuration, durable storage, the
//! session, the API clients and the navigation table into one context a
//! rendering shell can drive.

use std::sync::Arc;

use crate::log_info;
use crate::modules::auth::infrastructure::AuthApi;
use crate::modules::auth::{AuthService, HttpAuthApi};
use crate::modules::enrichment::JikanClient;
use crate::modules::library::LibraryService;
use crate::modules::navigation::{app_routes, build_routes, find_route, BuiltRoute, Outcome};
use crate::modules::nexo::infrastructure::{HttpNexoApi, NexoApi};
use crate::modules::series::infrastructure::{HttpSeriesApi, SeriesApi};
use crate::modules::series::CatalogService;
use crate::shared::config::AppConfig;
use crate::shared::domain::value_objects::Theme;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::{FileStore, KeyValueStore};
use crate::shared::utils::logger;

pub struct App {
    pub config: AppConfig,
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub library: Arc<LibraryService>,
    store: Arc<dyn KeyValueStore>,
    theme: Theme,
    routes: Vec<BuiltRoute>,
}

impl App {
    /// Full startup: `.env`, logging, environment configuration, then the
    /// service graph.
    pub fn bootstrap() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        logger::init_logger();
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.session_file)?);

        let auth_api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(&config.api_base_url)?);
        let auth = Arc::new(AuthService::restore(auth_api, Arc::clone(&store)));

        let series_api: Arc<dyn SeriesApi> =
            Arc::new(HttpSeriesApi::new(&config.api_base_url, Arc::clone(&store))?);
        let nexo_api: Arc<dyn NexoApi> =
            Arc::new(HttpNexoApi::new(&config.api_base_url, Arc::clone(&store))?);
        let jikan = Arc::new(JikanClient::new(&config.jikan_base_url)?);

        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&series_api),
            Arc::clone(&nexo_api),
        ));
        let library = Arc::new(LibraryService::new(series_api, nexo_api, jikan));

        let theme = Theme::restore(store.as_ref());
        let routes = build_routes(app_routes());

        log_info!(
            "Application core ready (authenticated: {})",
            auth.is_authenticated()
        );

        Ok(Self {
            config,
            auth,
            catalog,
            library,
            store,
            theme,
            routes,
        })
    }

    /// The built navigation structure, for shells that walk it directly.
    pub fn routes(&self) -> &[BuiltRoute] {
        &self.routes
    }

    /// Resolves a concrete path through the route table and its guards
    /// against the live session.
    pub fn navigate(&self, path: &str) -> Option<Outcome> {
        find_route(&self.routes, path)
            .map(|route| route.element.resolve(self.auth.is_authenticated()))
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.auth.current_user().map(|user| user.id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        self.theme = self.theme.toggled();
        self.theme.persist(self.store.as_ref())?;
        Ok(self.theme)
    }
}
