//! Offset pagination helpers shared by list screens and the movie selector

use serde::{Deserialize, Serialize};

/// Page size of the movie selector dropdown
pub const MOVIE_PAGE_SIZE: u64 = 8;

/// Numbered buttons rendered at most, ellipsis collapses the rest
pub const MAX_PAGE_BUTTONS: u64 = 5;

/// `limit`/`offset` pair sent as query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    /// Request for a 1-based page number
    pub fn for_page(page: u64, page_size: u64) -> Self {
        Self {
            limit: page_size,
            offset: page.saturating_sub(1) * page_size,
        }
    }

    /// 1-based page number this request points at
    pub fn page(&self) -> u64 {
        if self.limit == 0 {
            1
        } else {
            self.offset / self.limit + 1
        }
    }
}

/// Number of pages needed for `total` items, zero when there is nothing to show
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(u64),
    Ellipsis,
}

/// Buttons for a pager with 1-based `current` page.
///
/// First and last pages are always reachable; the current page keeps its
/// neighbours when it sits in the middle of a long range.
pub fn page_buttons(current: u64, total: u64) -> Vec<PageButton> {
    use PageButton::{Ellipsis, Page};

    if total == 0 {
        return Vec::new();
    }
    if total <= MAX_PAGE_BUTTONS {
        return (1..=total).map(Page).collect();
    }

    let current = current.clamp(1, total);
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageButton::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_offset_for_page() {
        let req = PageRequest::for_page(3, MOVIE_PAGE_SIZE);
        assert_eq!(req.offset, 16);
        assert_eq!(req.limit, 8);
        assert_eq!(req.page(), 3);
        assert_eq!(PageRequest::for_page(1, 8).offset, 0);
        assert_eq!(PageRequest::for_page(0, 8).offset, 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(23, 8), 3);
        assert_eq!(total_pages(24, 8), 3);
        assert_eq!(total_pages(25, 8), 4);
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_short_range_has_no_ellipsis() {
        assert_eq!(page_buttons(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_buttons(1, 5).len(), 5);
        assert!(page_buttons(1, 0).is_empty());
    }

    #[test]
    fn test_long_range_collapses() {
        assert_eq!(
            page_buttons(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_buttons(6, 10),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_buttons(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_never_more_than_five_numbered() {
        for total in 1..=30 {
            for current in 1..=total {
                let numbered = page_buttons(current, total)
                    .into_iter()
                    .filter(|b| matches!(b, Page(_)))
                    .count() as u64;
                assert!(numbered <= MAX_PAGE_BUTTONS, "current={current} total={total}");
            }
        }
    }
}
