pub mod season;
pub mod series;

pub use season::Season;
pub use series::{NewSeries, Series, SeriesPatch};
