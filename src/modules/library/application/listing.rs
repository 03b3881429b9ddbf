//! The listing pipeline: join the two collections for one user, filter by
//! title, order, paginate.

use std::collections::HashMap;

use crate::modules::library::domain::LibraryEntry;
use crate::modules::nexo::domain::Nexo;
use crate::modules::series::domain::Series;
use crate::shared::application::{PaginationParams, PAGE_SIZE};

/// Joins every series that has a viewing record for `user_id`, in the
/// series collection's original order. Series without a record are
/// dropped: a series enters "my collection" only once a nexo exists.
///
/// Duplicate records for one series overwrite each other in the lookup
/// (last write wins); which one is meaningful is undefined product
/// behavior, see DESIGN.md.
pub fn join_library(series: &[Series], nexos: &[Nexo], user_id: i64) -> Vec<LibraryEntry> {
    let mut by_series: HashMap<i64, &Nexo> = HashMap::new();
    for nexo in nexos.iter().filter(|n| n.belongs_to(user_id)) {
        by_series.insert(nexo.series_id, nexo);
    }

    series
        .iter()
        .filter_map(|s| {
            by_series.get(&s.id).map(|nexo| LibraryEntry {
                series: s.clone(),
                nexo: (*nexo).clone(),
            })
        })
        .collect()
}

/// The full listing pipeline: join, case-insensitive title filter (empty
/// search matches everything), then the fixed three-key ordering — watch
/// state priority ascending, release year descending, season descending.
pub fn build_library(
    series: &[Series],
    nexos: &[Nexo],
    user_id: i64,
    search: &str,
) -> Vec<LibraryEntry> {
    let needle = search.to_lowercase();

    let mut entries: Vec<LibraryEntry> = join_library(series, nexos, user_id)
        .into_iter()
        .filter(|entry| needle.is_empty() || entry.series.name.to_lowercase().contains(&needle))
        .collect();

    entries.sort_by(|a, b| {
        a.state()
            .sort_rank()
            .cmp(&b.state().sort_rank())
            .then_with(|| b.year().cmp(&a.year()))
            .then_with(|| b.season().sort_rank().cmp(&a.season().sort_rank()))
    });

    entries
}

/// Search and pagination state of the listing view. Changing the search
/// string always snaps back to the first page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    search: String,
    page: u32,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn params(&self) -> PaginationParams {
        PaginationParams::new(self.page(), PAGE_SIZE)
    }
}
