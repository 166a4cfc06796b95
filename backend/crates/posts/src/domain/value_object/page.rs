//! Pagination
//!
//! Page numbers are 1-based. Requesting a page past the end is not an
//! error: it yields an empty page with correct totals, so a stale link
//! never breaks.

use serde::Serialize;

/// Default number of posts per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a page request, clamping nonsense input
    ///
    /// Page 0 (or a missing page) becomes page 1; a zero page size
    /// becomes the default.
    pub fn new(page: Option<u32>, per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: if per_page == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                per_page
            },
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// SQL LIMIT for this request
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// SQL OFFSET for this request
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results with navigation metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Assemble a page from a result slice and the total row count
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let per_page = request.per_page() as u64;
        let total_pages = total_items.div_ceil(per_page) as u32;
        let page = request.page();

        Self {
            items,
            page,
            per_page: request.per_page(),
            total_items,
            total_pages,
            has_prev: page > 1 && total_pages > 0,
            has_next: page < total_pages,
        }
    }

    /// Map page items, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }
}
