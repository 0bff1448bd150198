/// Items per page, uniform across every category.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// The slice of `items` visible on a 1-based `page`.
///
/// A page past the end yields an empty slice, not an error.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// One affordance in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// Build the pagination bar for `total` items.
///
/// Empty when everything fits on one page. Otherwise the first page, the
/// last page and the pages within distance 1 of `current` are shown; every
/// other run collapses into a single ellipsis marker.
pub fn page_controls(total: usize, page_size: usize, current: usize) -> Vec<PageControl> {
    let pages = total_pages(total, page_size);
    if pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::new();
    let mut last_shown = 0;
    for p in 1..=pages {
        if p != 1 && p != pages && p.abs_diff(current) > 1 {
            continue;
        }
        if p > last_shown + 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page(p));
        last_shown = p;
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_partition_the_list() {
        let items: Vec<u32> = (0..13).collect();
        let pages = total_pages(items.len(), PAGE_SIZE);
        assert_eq!(pages, 3);

        let sizes: Vec<usize> = (1..=pages)
            .map(|p| page_slice(&items, p, PAGE_SIZE).len())
            .collect();
        assert_eq!(sizes, vec![6, 6, 1]);
        assert_eq!(sizes.iter().sum::<usize>(), items.len());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..13).collect();
        assert!(page_slice(&items, 4, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 99, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let items: Vec<u32> = (0..4).collect();
        assert_eq!(page_slice(&items, 0, PAGE_SIZE), page_slice(&items, 1, PAGE_SIZE));
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(total_pages(items.len(), PAGE_SIZE), 0);
        assert!(page_slice(&items, 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_single_page_produces_no_controls() {
        assert!(page_controls(6, PAGE_SIZE, 1).is_empty());
        assert!(page_controls(0, PAGE_SIZE, 1).is_empty());
    }

    #[test]
    fn test_three_pages_show_without_ellipsis() {
        // 13 items, current page 1: pages 2 is a neighbor, 3 is the last
        let controls = page_controls(13, PAGE_SIZE, 1);
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Page(2),
                PageControl::Page(3),
            ]
        );
    }

    #[test]
    fn test_elision_in_the_middle() {
        // 10 pages of 6, current page 5
        let controls = page_controls(60, PAGE_SIZE, 5);
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Ellipsis,
                PageControl::Page(4),
                PageControl::Page(5),
                PageControl::Page(6),
                PageControl::Ellipsis,
                PageControl::Page(10),
            ]
        );
    }

    #[test]
    fn test_elision_near_the_edges() {
        let controls = page_controls(60, PAGE_SIZE, 1);
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Page(2),
                PageControl::Ellipsis,
                PageControl::Page(10),
            ]
        );

        let controls = page_controls(60, PAGE_SIZE, 10);
        assert_eq!(
            controls,
            vec![
                PageControl::Page(1),
                PageControl::Ellipsis,
                PageControl::Page(9),
                PageControl::Page(10),
            ]
        );
    }
}
