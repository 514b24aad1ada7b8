//! Result pagination with navigation metadata.
//!
//! Slices a ranked result list into pages. The slice honours the requested
//! page verbatim, so an out-of-range page yields an empty page, while the
//! reported metadata clamps `current_page` into the valid range. The
//! asymmetry mirrors the host UI's long-standing behaviour and is pinned by
//! the tests below.

use serde::{Deserialize, Serialize};

/// Navigation metadata for a paginated result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The reported page, clamped into `[1, total_pages]` (1 when empty).
    pub current_page: usize,
    /// Total number of pages: `ceil(total_items / page_size)`, 0 when empty.
    pub total_pages: usize,
    /// Page size used for slicing.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Whether a page after the reported one exists.
    pub has_next_page: bool,
    /// Whether a page before the reported one exists.
    pub has_previous_page: bool,
}

/// A single page of items plus navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// The items on the requested page. Empty when the requested page is
    /// out of range.
    pub items: Vec<T>,
    /// Navigation metadata with the clamped current page.
    pub pagination: PageInfo,
}

/// Slice `items` into the requested 1-based page.
///
/// Out-of-range pages (0, or beyond the last page) never panic: the slice
/// comes back empty while the metadata reports the nearest valid page.
/// `page_size` is expected to be non-zero (config validation enforces it);
/// a zero is coerced to 1 rather than dividing by zero.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> PaginatedResult<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let current_page = page.clamp(1, total_pages.max(1));

    // The slice uses the requested page as-is; only the metadata clamps.
    let start = page
        .checked_sub(1)
        .and_then(|zero_based| zero_based.checked_mul(page_size));
    let page_items: Vec<T> = match start {
        Some(start) if start < total_items => {
            items.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    };

    PaginatedResult {
        items: page_items,
        pagination: PageInfo {
            current_page,
            total_pages,
            page_size,
            total_items,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_slices_correctly() {
        let items: Vec<i32> = (1..=25).collect();
        let paged = paginate(items, 2, 10);
        assert_eq!(paged.items, (11..=20).collect::<Vec<i32>>());
        assert_eq!(
            paged.pagination,
            PageInfo {
                current_page: 2,
                total_pages: 3,
                page_size: 10,
                total_items: 25,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }

    #[test]
    fn first_page_has_no_previous() {
        let items: Vec<i32> = (1..=25).collect();
        let paged = paginate(items, 1, 10);
        assert_eq!(paged.items, (1..=10).collect::<Vec<i32>>());
        assert!(!paged.pagination.has_previous_page);
        assert!(paged.pagination.has_next_page);
    }

    #[test]
    fn last_page_is_partial_and_has_no_next() {
        let items: Vec<i32> = (1..=25).collect();
        let paged = paginate(items, 3, 10);
        assert_eq!(paged.items, (21..=25).collect::<Vec<i32>>());
        assert!(!paged.pagination.has_next_page);
        assert!(paged.pagination.has_previous_page);
    }

    #[test]
    fn page_beyond_last_yields_empty_items_with_clamped_metadata() {
        let items: Vec<i32> = (1..=25).collect();
        let paged = paginate(items, 9, 10);
        assert!(paged.items.is_empty());
        assert_eq!(paged.pagination.current_page, 3);
        assert!(!paged.pagination.has_next_page);
        assert!(paged.pagination.has_previous_page);
    }

    #[test]
    fn page_zero_yields_empty_items_and_reports_page_one() {
        let items: Vec<i32> = (1..=5).collect();
        let paged = paginate(items, 0, 10);
        assert!(paged.items.is_empty());
        assert_eq!(paged.pagination.current_page, 1);
    }

    #[test]
    fn empty_input_reports_zero_pages_but_page_one() {
        let paged = paginate(Vec::<i32>::new(), 1, 10);
        assert!(paged.items.is_empty());
        assert_eq!(paged.pagination.current_page, 1);
        assert_eq!(paged.pagination.total_pages, 0);
        assert_eq!(paged.pagination.total_items, 0);
        assert!(!paged.pagination.has_next_page);
        assert!(!paged.pagination.has_previous_page);
    }

    #[test]
    fn exact_multiple_has_no_overflow_page() {
        let items: Vec<i32> = (1..=20).collect();
        let paged = paginate(items, 2, 10);
        assert_eq!(paged.pagination.total_pages, 2);
        assert_eq!(paged.items.len(), 10);
        assert!(!paged.pagination.has_next_page);
    }

    #[test]
    fn single_item_fits_one_page() {
        let paged = paginate(vec![42], 1, 10);
        assert_eq!(paged.items, vec![42]);
        assert_eq!(paged.pagination.total_pages, 1);
    }

    #[test]
    fn pages_cover_all_items_exactly_once() {
        let items: Vec<i32> = (1..=37).collect();
        let total_pages = paginate(items.clone(), 1, 7).pagination.total_pages;
        let mut collected = Vec::new();
        for page in 1..=total_pages {
            collected.extend(paginate(items.clone(), page, 7).items);
        }
        assert_eq!(collected, items);
    }

    #[test]
    fn huge_page_number_does_not_panic() {
        let items: Vec<i32> = (1..=5).collect();
        let paged = paginate(items, usize::MAX, 10);
        assert!(paged.items.is_empty());
        assert_eq!(paged.pagination.current_page, 1);
    }

    #[test]
    fn zero_page_size_coerced_instead_of_dividing_by_zero() {
        let items: Vec<i32> = (1..=3).collect();
        let paged = paginate(items, 1, 0);
        assert_eq!(paged.pagination.page_size, 1);
        assert_eq!(paged.pagination.total_pages, 3);
        assert_eq!(paged.items, vec![1]);
    }
}
