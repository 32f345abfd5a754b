use serde::{Deserialize, Serialize};

/// Page number used when the query omits or mangles `page`
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the query omits or mangles `limit`
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pagination metadata reported alongside a page slice.
///
/// `total_pages = ceil(total_items / page_size)`, which makes an empty
/// collection report 0 pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// One page of an ordered result list
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice an ordered list into a 1-based page.
///
/// Defensive on parameters: absent, zero or negative `page`/`page_size`
/// fall back to the defaults rather than erroring. Out-of-range pages
/// yield an empty slice, never a panic.
pub fn paginate<T>(items: Vec<T>, page: Option<i64>, page_size: Option<i64>) -> Page<T> {
    let page = match page {
        Some(p) if p >= 1 => p as usize,
        _ => DEFAULT_PAGE,
    };
    let page_size = match page_size {
        Some(s) if s >= 1 => s as usize,
        _ => DEFAULT_PAGE_SIZE,
    };

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let items: Vec<T> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_items,
        },
    }
}
