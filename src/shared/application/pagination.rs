/// Pagination support for derived collections
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

/// Fixed page size of the listing view.
pub const PAGE_SIZE: u32 = 24;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Offset of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) * self.page_size) as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    /// Slices one page out of an in-memory collection.
    pub fn paginate(mut all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let total_pages = ((total_count as f64) / (params.page_size as f64)).ceil() as u32;

        let offset = params.offset().min(all.len());
        let mut items: Vec<T> = all.split_off(offset);
        items.truncate(params.limit());

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }
}
