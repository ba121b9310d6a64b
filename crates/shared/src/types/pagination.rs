//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number, 1-indexed.
    #[serde(default = "first_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn first_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    50
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: first_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Row offset for the database query.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Row limit for the database query.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

/// A page of results together with the total row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total items across all pages.
    pub total: u64,
}

impl<T> Paged<T> {
    /// Wraps a page of items with its pagination metadata.
    #[must_use]
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 50);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 50);
    }

    #[test]
    fn test_offset_for_later_pages() {
        let p = Pagination { page: 3, per_page: 20 };
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_page_zero_clamps_to_zero_offset() {
        let p = Pagination { page: 0, per_page: 20 };
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_paged_wraps_metadata() {
        let paged = Paged::new(vec![1, 2, 3], Pagination { page: 2, per_page: 3 }, 10);
        assert_eq!(paged.items.len(), 3);
        assert_eq!(paged.page, 2);
        assert_eq!(paged.per_page, 3);
        assert_eq!(paged.total, 10);
    }
}
