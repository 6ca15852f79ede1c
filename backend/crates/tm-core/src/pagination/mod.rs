//! Paging and deadline ordering over an in-memory sequence of projects.
//!
//! The SQLite repository expresses the same contract in SQL; both must agree
//! on tie-breaking (insertion order) and on `has_more` being a pure
//! `(page_index + 1) * page_size < total` check.

pub mod deadline_order;
pub mod page;
pub mod page_request;

use crate::{DeadlineOrder, Page, PageRequest, Project};

/// Cut one page out of `records`, which must be in insertion order.
pub fn paginate(mut records: Vec<Project>, request: &PageRequest) -> Page<Project> {
    if records.is_empty() {
        return Page::empty();
    }

    let total = records.len() as u64;
    let has_more = request.has_more(total);

    // sort_by is stable, so equal deadlines keep insertion order in both directions
    match request.order {
        DeadlineOrder::Ascending => records.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        DeadlineOrder::Descending => records.sort_by(|a, b| b.deadline.cmp(&a.deadline)),
        DeadlineOrder::Natural => {}
    }

    let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let records = records
        .into_iter()
        .skip(start)
        .take(request.page_size as usize)
        .collect();

    Page { records, has_more }
}
