use serde::{Deserialize, Serialize};

/// Default page size for city listings.
///
/// The admin panel scopes every city query to 50 rows; here that cap is an
/// explicit pagination default rather than a silent truncation, and callers
/// may request a larger page.
pub const CITY_PAGE_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// First page with an explicit size.
    pub fn first(limit: usize) -> Self {
        Self { offset: 0, limit }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: CITY_PAGE_LIMIT,
        }
    }
}

/// One page of results plus the total match count, so a capped listing is
/// always distinguishable from a complete one.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_reports_remaining_rows() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 10,
            offset: 0,
            limit: 3,
        };
        assert!(page.has_more());

        let last = Page {
            items: vec![9, 10],
            total: 10,
            offset: 8,
            limit: 3,
        };
        assert!(!last.has_more());
    }

    #[test]
    fn default_request_uses_city_limit() {
        let request = PageRequest::default();
        assert_eq!(request.limit, CITY_PAGE_LIMIT);
        assert_eq!(request.offset, 0);
    }
}
