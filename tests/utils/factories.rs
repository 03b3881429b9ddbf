/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{TimeZone, Utc};
use miteru::modules::nexo::domain::{Nexo, WatchState};
use miteru::modules::series::domain::{Season, Series};

#[allow(dead_code)]
pub struct SeriesFactory {
    id: i64,
    name: String,
    episodes: i32,
    studio: String,
    genres: [String; 3],
    year: i32,
    season: Season,
}

impl Default for SeriesFactory {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Test Series".to_string(),
            episodes: 12,
            studio: "Test Studio".to_string(),
            genres: ["Action".to_string(), String::new(), String::new()],
            year: 2020,
            season: Season::Winter,
        }
    }
}

#[allow(dead_code)]
impl SeriesFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_episodes(mut self, episodes: i32) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_studio(mut self, studio: &str) -> Self {
        self.studio = studio.to_string();
        self
    }

    pub fn with_genres(mut self, genres: [&str; 3]) -> Self {
        self.genres = genres.map(|g| g.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    pub fn build(self) -> Series {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let [genre, genre2, genre3] = self.genres;
        Series {
            id: self.id,
            name: self.name,
            episodes: self.episodes,
            studio: self.studio,
            genre,
            genre2,
            genre3,
            year: self.year,
            season: self.season,
            img: "img.jpg".to_string(),
            img2: "img2.jpg".to_string(),
            splash: "splash.jpg".to_string(),
            status: 1,
            created_at: ts,
            updated_at: ts,
        }
    }
}

#[allow(dead_code)]
pub struct NexoFactory {
    id: i64,
    series_id: i64,
    users_id: i64,
    state: WatchState,
    seen: i32,
    stars: i32,
}

impl Default for NexoFactory {
    fn default() -> Self {
        Self {
            id: 1,
            series_id: 1,
            users_id: 1,
            state: WatchState::Airing,
            seen: 0,
            stars: 0,
        }
    }
}

#[allow(dead_code)]
impl NexoFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn for_series(mut self, series_id: i64) -> Self {
        self.series_id = series_id;
        self
    }

    pub fn for_user(mut self, users_id: i64) -> Self {
        self.users_id = users_id;
        self
    }

    pub fn with_state(mut self, state: WatchState) -> Self {
        self.state = state;
        self
    }

    pub fn with_seen(mut self, seen: i32) -> Self {
        self.seen = seen;
        self
    }

    pub fn with_stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    pub fn build(self) -> Nexo {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Nexo {
            id: self.id,
            series_id: self.series_id,
            users_id: self.users_id,
            state: self.state,
            seen: self.seen,
            stars: self.stars,
            created_at: ts,
            updated_at: ts,
        }
    }
}
