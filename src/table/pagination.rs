//! Pagination
//!
//! Page arithmetic over the filtered and sorted rows. Pages are 1-based.

use std::ops::Range;

/// Number of pages for `len` rows, 0 when there are no rows.
///
/// A page size of 0 is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp `page` into `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index window `[(page-1)*size, page*size)` clipped to `len`
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// Rows on `page`; empty when the page lies past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}

/// Navigation controls only make sense with more than one page
pub fn shows_controls(total_pages: usize) -> bool {
    total_pages > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 0), 25);
    }

    #[test]
    fn empty_list_has_no_controls() {
        let pages = total_pages(0, 10);
        assert_eq!(pages, 0);
        assert!(!shows_controls(pages));
        assert!(!shows_controls(1));
        assert!(shows_controls(2));
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(7, 5), 5);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn pages_concatenate_to_the_whole_list() {
        let items: Vec<usize> = (0..23).collect();
        for size in 1..=25 {
            let pages = total_pages(items.len(), size);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|page| page_slice(&items, page, size).iter().copied())
                .collect();
            assert_eq!(joined, items, "page size {size}");
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 3, 2).is_empty());
        assert_eq!(page_slice(&items, 2, 2), &[3]);
    }
}
