//! Paginated listing envelope

/// One page of a paginated listing.
///
/// `current_page` is always within `[1, total_pages]` and `total_pages` is at
/// least 1, regardless of what the server reported.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page from a server response, clamping the page counters.
    pub fn from_response(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = page.clamp(1, total_pages);

        Self {
            items,
            current_page,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
