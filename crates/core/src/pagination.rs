//! Page/limit pagination for catalogue listings.

use serde::Serialize;

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// Upper bound on a caller-supplied page size.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A resolved 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    /// Resolve raw query values. Missing or non-positive values fall back to
    /// page 1 and [`DEFAULT_PAGE_LIMIT`].
    pub fn resolve(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = clamp_limit(limit.filter(|l| *l >= 1), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(Some((self.page - 1).saturating_mul(self.limit)))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_twelve() {
        let page = Page::resolve(None, None);
        assert_eq!(page, Page { page: 1, limit: 12 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_is_one_based() {
        let page = Page::resolve(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn invalid_values_fall_back() {
        assert_eq!(Page::resolve(Some(0), Some(-5)), Page { page: 1, limit: 12 });
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(Page::resolve(Some(1), Some(5000)).limit, MAX_PAGE_LIMIT);
    }
}
