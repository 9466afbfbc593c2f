//! Tests for pagination primitives and the page envelope

use core_kernel::{Page, PaginationFilters, SortDirection, SortFilters};
use proptest::prelude::*;

mod page_tests {
    use super::*;

    #[test]
    fn test_empty_page_has_one_page() {
        let page: Page<u32> = Page::empty(PaginationFilters::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_next_page());
        assert!(!page.has_previous_page());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2], 41, PaginationFilters::new(1, 20));
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = Page::new(vec![1], 41, PaginationFilters::new(3, 20));
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 3, PaginationFilters::new(1, 10));
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, 3);
        assert_eq!(mapped.page_size, 10);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(vec!["a"], 1, PaginationFilters::default());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 20);
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["total"], 1);
    }
}

mod sort_tests {
    use super::*;

    #[test]
    fn test_direction_wire_names() {
        let asc: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        let desc: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(asc, SortDirection::Ascending);
        assert_eq!(desc, SortDirection::Descending);
        assert_eq!(desc.as_sql(), "DESC");
    }

    #[test]
    fn test_sort_constructors() {
        let sort = SortFilters::descending("created_at");
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort.field, "created_at");
    }
}

proptest! {
    #[test]
    fn offset_never_exceeds_total_for_reachable_pages(total in 1u64..10_000, size in 1u32..100) {
        let page = Page::<()>::new(vec![], total, PaginationFilters::new(1, size));
        let last = PaginationFilters::new(page.total_pages(), size);
        prop_assert!(last.offset() < total);
    }

    #[test]
    fn pages_cover_every_item(total in 0u64..10_000, size in 1u32..100) {
        let page = Page::<()>::new(vec![], total, PaginationFilters::new(1, size));
        prop_assert!(u64::from(page.total_pages()) * u64::from(size) >= total);
    }
}
