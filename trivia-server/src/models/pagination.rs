//! Pagination types

use serde::Deserialize;

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page selection (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    /// Create pagination; page is clamped to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Window of `items` for this page; empty when out of range.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as a string so a non-numeric value falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}
