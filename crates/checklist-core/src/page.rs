use crate::types::{total_quantity, Item};
use serde::Serialize;

/// One page of a sorted item listing, plus the totals a listing view shows.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// 0-based page index, clamped to the last page.
    pub index: usize,
    pub total_pages: usize,
    /// Offset of the first item on this page within the full listing.
    pub start: usize,
    pub items: &'a [Item],
    pub total_items: usize,
    pub subtotal: u64,
    pub grand_total: u64,
}

impl<'a> Page<'a> {
    /// Slice `items` into the page at `index`. An empty listing is one empty
    /// page; `page_size` of zero is treated as one.
    pub fn of(items: &'a [Item], page_size: usize, index: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = items.len().div_ceil(page_size).max(1);
        let index = index.min(total_pages - 1);
        let start = (index * page_size).min(items.len());
        let end = (start + page_size).min(items.len());
        let slice = &items[start..end];

        Self {
            index,
            total_pages,
            start,
            items: slice,
            total_items: items.len(),
            subtotal: total_quantity(slice),
            grand_total: total_quantity(items),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    /// 1-based position of each item in the full listing.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Item)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (self.start + i + 1, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quantity;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                name: format!("item-{i}"),
                required_quantity: Quantity::Count((n - i) as u64),
                completed: false,
            })
            .collect()
    }

    #[test]
    fn empty_listing_is_single_page() {
        let page = Page::of(&[], 20, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.grand_total, 0);
    }

    #[test]
    fn pages_split_at_page_size() {
        let all = items(45);
        let first = Page::of(&all, 20, 0);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 20);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Page::of(&all, 20, 2);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.start, 40);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let all = items(40);
        assert_eq!(Page::of(&all, 20, 0).total_pages, 2);
    }

    #[test]
    fn index_past_end_clamps_to_last_page() {
        let all = items(25);
        let page = Page::of(&all, 20, 9);
        assert_eq!(page.index, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn subtotal_and_grand_total() {
        let mut all = items(4); // quantities 4, 3, 2, 1
        all[3].required_quantity = Quantity::Raw("??".to_string());
        let page = Page::of(&all, 2, 1);
        assert_eq!(page.subtotal, 2);
        assert_eq!(page.grand_total, 9);
    }

    #[test]
    fn numbering_continues_across_pages() {
        let all = items(5);
        let page = Page::of(&all, 2, 1);
        let numbers: Vec<usize> = page.numbered().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![3, 4]);
    }

    #[test]
    fn zero_page_size_treated_as_one() {
        let all = items(3);
        let page = Page::of(&all, 0, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }
}
