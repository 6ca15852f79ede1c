use crate::{DEFAULT_PAGE_SIZE, DeadlineOrder, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// One page of a (possibly ordered) scan over the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based
    pub page_index: u32,
    pub page_size: u32,
    pub order: DeadlineOrder,
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32, order: DeadlineOrder) -> Self {
        Self {
            page_index,
            page_size,
            order,
        }
    }

    /// Build a request from raw caller input.
    ///
    /// Page size is clamped into `MIN_PAGE_SIZE..=MAX_PAGE_SIZE` and a negative
    /// page index is treated as the first page. Neither is an error.
    pub fn clamped(page_index: i64, page_size: i64, order: DeadlineOrder) -> Self {
        Self::new(clamp_page_index(page_index), clamp_page_size(page_size), order)
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    /// Pure arithmetic check against the total, no look-ahead.
    pub fn has_more(&self, total: u64) -> bool {
        (u64::from(self.page_index) + 1).saturating_mul(u64::from(self.page_size)) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, DeadlineOrder::Natural)
    }
}

pub fn clamp_page_size(requested: i64) -> u32 {
    if requested > i64::from(MAX_PAGE_SIZE) {
        MAX_PAGE_SIZE
    } else if requested < i64::from(MIN_PAGE_SIZE) {
        MIN_PAGE_SIZE
    } else {
        requested as u32
    }
}

pub fn clamp_page_index(requested: i64) -> u32 {
    requested.clamp(0, i64::from(u32::MAX)) as u32
}
