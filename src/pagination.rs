use serde::Serialize;

/// Page size used for the activity log when nothing else is configured.
pub const DEFAULT_LOGS_PER_PAGE: usize = 5;

/// Largest page size a client may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// 1-based page selector applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Build a selector, normalizing page 0 to 1 and clamping `per_page`.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    /// Number of rows skipped before this page.
    ///
    /// Saturates at `i64::MAX` for pages too far out to address, which
    /// yields an empty page.
    pub fn offset(&self) -> i64 {
        let skipped_pages = i64::try_from(self.page.max(1) - 1).unwrap_or(i64::MAX);
        skipped_pages.saturating_mul(self.limit())
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// One page of results together with the totals needed to navigate.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: usize) -> Self {
        Self {
            items,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages: total.div_ceil(pagination.per_page),
        }
    }
}
