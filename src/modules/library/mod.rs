pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{
    build_library, join_library, DashboardStats, LibraryService, ListingState, SeriesDetail,
};
pub use domain::LibraryEntry;
