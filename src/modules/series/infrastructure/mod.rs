pub mod api;

pub use api::{HttpSeriesApi, SeriesApi};
