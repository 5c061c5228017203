use serde::{Deserialize, Serialize};

/// Fixed number of posts per feed page.
pub const PAGE_SIZE: usize = 10;

/// The `?page=` query parameter. Kept as a raw string so a non-numeric
/// value degrades to the first page instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn number(&self) -> Option<usize> {
        self.page.as_deref().and_then(|p| p.parse::<usize>().ok())
    }
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slices an ordered sequence into fixed-size pages.
///
/// A missing or non-numeric page number resolves to page 1; a number past the
/// end clamps to the last page (never an error). Every page except possibly
/// the last holds exactly `page_size` items; an empty sequence yields a single
/// empty page with both flags false.
pub fn paginate<T>(items: Vec<T>, page_size: usize, requested: Option<usize>) -> Page<T> {
    let count = items.len();
    let num_pages = count.div_ceil(page_size).max(1);

    let number = requested.unwrap_or(1).clamp(1, num_pages);

    let start = (number - 1) * page_size;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items,
        number,
        num_pages,
        count,
        has_next: number < num_pages,
        has_previous: number > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn full_and_partial_pages() {
        let p1 = paginate(seq(23), PAGE_SIZE, Some(1));
        assert_eq!(p1.items.len(), 10);
        assert!(p1.has_next);
        assert!(!p1.has_previous);

        let p2 = paginate(seq(23), PAGE_SIZE, Some(2));
        assert_eq!(p2.items.len(), 10);
        assert!(p2.has_next);
        assert!(p2.has_previous);

        let p3 = paginate(seq(23), PAGE_SIZE, Some(3));
        assert_eq!(p3.items.len(), 3);
        assert!(!p3.has_next);
        assert!(p3.has_previous);
        assert_eq!(p3.num_pages, 3);
        assert_eq!(p3.count, 23);
    }

    #[test]
    fn missing_page_defaults_to_first() {
        let page = paginate(seq(15), PAGE_SIZE, None);
        assert_eq!(page.number, 1);
        assert_eq!(page.items, seq(10));
    }

    #[test]
    fn out_of_range_clamps_to_last() {
        let page = paginate(seq(15), PAGE_SIZE, Some(99));
        assert_eq!(page.number, 2);
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_next);
    }

    #[test]
    fn zero_clamps_to_first() {
        let page = paginate(seq(5), PAGE_SIZE, Some(0));
        assert_eq!(page.number, 1);
    }

    #[test]
    fn empty_sequence_is_a_single_empty_page() {
        let page = paginate(Vec::<usize>::new(), PAGE_SIZE, Some(4));
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn non_numeric_query_param_resolves_to_none() {
        let q = PageQuery {
            page: Some("abc".to_string()),
        };
        assert_eq!(q.number(), None);

        let q = PageQuery {
            page: Some("2".to_string()),
        };
        assert_eq!(q.number(), Some(2));
    }

    #[test]
    fn pages_preserve_order() {
        let page = paginate(seq(23), PAGE_SIZE, Some(2));
        assert_eq!(page.items, (10..20).collect::<Vec<_>>());
    }
}
