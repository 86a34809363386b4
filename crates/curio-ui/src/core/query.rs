//! Paging variables exchanged with the catalogue query layer.

use serde::{Deserialize, Serialize};

/// Sort column used when a listing does not request one.
pub const DEFAULT_SORT: &str = "name";

/// Sort direction accepted by the catalogue API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// Pagination and sort variables for list queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Requested page (1-based).
    pub page: u32,
    /// Rows per page.
    pub per_page: u32,
    /// Sort column.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: SortDirection,
}

impl QuerySpec {
    /// Variables for `page`, sorted by [`DEFAULT_SORT`] ascending.
    #[must_use]
    pub fn for_page(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page,
            sort: Some(DEFAULT_SORT.to_string()),
            direction: SortDirection::Asc,
        }
    }

    /// Replace the sort column and direction.
    #[must_use]
    pub fn sorted_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(column.into());
        self.direction = direction;
        self
    }

    /// Row offset applied by the service (`LIMIT per_page OFFSET offset`).
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

/// Number of pages needed to show `result_count` rows, `per_page` at a time.
#[must_use]
pub fn page_count(result_count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = result_count.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
