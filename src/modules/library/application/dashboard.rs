//! Read-only statistics over the user's collection.
//!
//! Everything is derived from the in-memory collections on each call; no
//! caching between recomputations.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::listing::join_library;
use crate::modules::library::domain::LibraryEntry;
use crate::modules::nexo::domain::{Nexo, WatchState};
use crate::modules::series::domain::Series;

/// Estimated runtime of one episode, in minutes.
pub const EPISODE_MINUTES: i64 = 24;

const TOP_TAGS: usize = 5;
const TOP_RATED: usize = 10;

/// Years outside this open interval are treated as data-entry noise and
/// left out of the histogram.
const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchTime {
    pub minutes: i64,
    pub hours: f64,
    pub days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateCounts {
    pub airing: usize,
    pub finished: usize,
    pub completed: usize,
}

/// A tag (genre or studio) with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_series: usize,
    pub episodes_seen: i64,
    pub watch_time: WatchTime,
    /// Mean of the nonzero star ratings; 0 when nothing is rated.
    pub average_rating: f64,
    pub state_counts: StateCounts,
    pub top_genres: Vec<TagCount>,
    pub top_rated: Vec<LibraryEntry>,
    pub year_histogram: BTreeMap<i32, usize>,
    pub top_studios: Vec<TagCount>,
}

impl DashboardStats {
    pub fn calculate(series: &[Series], nexos: &[Nexo], user_id: i64) -> Self {
        let entries = join_library(series, nexos, user_id);

        let total_series = entries.len();
        let episodes_seen: i64 = entries.iter().map(|e| e.nexo.seen as i64).sum();

        let minutes = episodes_seen * EPISODE_MINUTES;
        let hours = minutes as f64 / 60.0;
        let watch_time = WatchTime {
            minutes,
            hours,
            days: hours / 24.0,
        };

        let rated: Vec<i32> = entries
            .iter()
            .filter(|e| e.nexo.is_rated())
            .map(|e| e.stars())
            .collect();
        let average_rating = if rated.is_empty() {
            0.0
        } else {
            rated.iter().sum::<i32>() as f64 / rated.len() as f64
        };

        let state_counts = StateCounts {
            airing: entries
                .iter()
                .filter(|e| e.state() == WatchState::Airing)
                .count(),
            finished: entries
                .iter()
                .filter(|e| e.state() == WatchState::Finished)
                .count(),
            completed: entries
                .iter()
                .filter(|e| e.state() == WatchState::Completed)
                .count(),
        };

        let mut genre_counts: HashMap<String, usize> = HashMap::new();
        for entry in &entries {
            for genre in entry.series.genres() {
                *genre_counts.entry(genre.to_string()).or_default() += 1;
            }
        }
        let top_genres = top_counts(genre_counts, TOP_TAGS);

        let mut studio_counts: HashMap<String, usize> = HashMap::new();
        for entry in &entries {
            if !entry.series.studio.is_empty() {
                *studio_counts.entry(entry.series.studio.clone()).or_default() += 1;
            }
        }
        let top_studios = top_counts(studio_counts, TOP_TAGS);

        // Stable sort: equal ratings keep the collection's original order.
        let mut top_rated = entries.clone();
        top_rated.sort_by(|a, b| b.stars().cmp(&a.stars()));
        top_rated.truncate(TOP_RATED);

        let mut year_histogram: BTreeMap<i32, usize> = BTreeMap::new();
        for entry in &entries {
            let year = entry.year();
            if year > YEAR_MIN && year < YEAR_MAX {
                *year_histogram.entry(year).or_default() += 1;
            }
        }

        Self {
            total_series,
            episodes_seen,
            watch_time,
            average_rating,
            state_counts,
            top_genres,
            top_rated,
            year_histogram,
            top_studios,
        }
    }
}

/// Orders by count descending, name ascending on ties, and keeps the
/// first `limit`.
fn top_counts(counts: HashMap<String, usize>, limit: usize) -> Vec<TagCount> {
    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount { name, count })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tags.truncate(limit);
    tags
}
