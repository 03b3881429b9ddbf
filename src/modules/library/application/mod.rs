pub mod dashboard;
pub mod listing;
pub mod service;

pub use dashboard::{DashboardStats, StateCounts, TagCount, WatchTime, EPISODE_MINUTES};
pub use listing::{build_library, join_library, ListingState};
pub use service::{LibraryService, SeriesDetail};
