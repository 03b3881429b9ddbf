pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CatalogService;
pub use domain::{NewSeries, Season, Series, SeriesPatch};
pub use infrastructure::{HttpSeriesApi, SeriesApi};
