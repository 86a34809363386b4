//! State of a paged catalogue listing and the source feeding it.
//!
//! # Design
//! - The listing owns the active page, page size, sort direction and the last
//!   known result count; the page count is always derived from the count.
//! - Changing the page size returns to page 1.
//! - Sources report the total count with every page so the control can size itself.

use crate::core::pagination::PaginationRequest;
use crate::core::query::{DEFAULT_SORT, QuerySpec, SortDirection, page_count};

/// One page of rows plus the total number of matching rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPage<T> {
    /// Rows on the requested page.
    pub items: Vec<T>,
    /// Total rows across all pages.
    pub count: u64,
}

/// Anything that can answer a paged query.
pub trait ListingSource {
    /// Row type returned by the source.
    type Item;

    /// Fetch the rows selected by `query`.
    fn fetch(&self, query: &QuerySpec) -> ResultPage<Self::Item>;
}

/// Sorted, in-memory list of names answering paged queries locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Build an index over `names`.
    #[must_use]
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort_unstable();
        Self { names }
    }
}

impl ListingSource for NameIndex {
    type Item = String;

    fn fetch(&self, query: &QuerySpec) -> ResultPage<String> {
        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.per_page).unwrap_or(usize::MAX);
        let items: Vec<String> = match query.direction {
            SortDirection::Asc => self.names.iter().skip(skip).take(take).cloned().collect(),
            SortDirection::Desc => self.names.iter().rev().skip(skip).take(take).cloned().collect(),
        };
        ResultPage {
            items,
            count: self.names.len() as u64,
        }
    }
}

/// Paging state of one listing view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingState {
    /// Currently displayed page (1-based).
    pub active_page: u32,
    /// Rows requested per page.
    pub per_page: u32,
    /// Sort direction applied to the default sort column.
    pub direction: SortDirection,
    /// Result count reported by the last fetch, if any.
    pub result_count: Option<u64>,
}

impl ListingState {
    /// Fresh listing on page 1 with no known count.
    #[must_use]
    pub const fn new(per_page: u32) -> Self {
        Self {
            active_page: 1,
            per_page,
            direction: SortDirection::Asc,
            result_count: None,
        }
    }

    /// Pages needed for the known result count; 0 until a count arrives.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.result_count
            .map_or(0, |count| page_count(count, self.per_page))
    }

    /// Query variables for the active page.
    #[must_use]
    pub fn query(&self) -> QuerySpec {
        QuerySpec::for_page(self.active_page, self.per_page).sorted_by(DEFAULT_SORT, self.direction)
    }

    /// Move to `page`, keeping everything else.
    #[must_use]
    pub const fn go_to(self, page: u32) -> Self {
        Self {
            active_page: page,
            ..self
        }
    }

    /// Apply a new page size; a different size starts again from page 1.
    #[must_use]
    pub const fn resize(self, per_page: u32) -> Self {
        if per_page == self.per_page {
            return self;
        }
        Self {
            active_page: 1,
            per_page,
            ..self
        }
    }

    /// Flip the sort direction and return to page 1.
    #[must_use]
    pub const fn toggle_direction(self) -> Self {
        let direction = match self.direction {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        Self {
            active_page: 1,
            direction,
            ..self
        }
    }

    /// Record the count reported by a fetch.
    #[must_use]
    pub const fn with_result_count(self, count: u64) -> Self {
        Self {
            result_count: Some(count),
            ..self
        }
    }

    /// Inputs for the pagination control; the count is hidden when `show_count` is off.
    #[must_use]
    pub fn pagination(&self, show_count: bool) -> PaginationRequest {
        PaginationRequest {
            active_page: self.active_page,
            total_pages: self.total_pages(),
            result_count: self.result_count.filter(|_| show_count),
        }
    }

    /// Fetch the active page from `source` and record the reported count.
    #[must_use]
    pub fn load<S: ListingSource>(self, source: &S) -> (Self, Vec<S::Item>) {
        let page = source.fetch(&self.query());
        (self.with_result_count(page.count), page.items)
    }
}
