//! Page/limit normalization and page-count math shared by every listing.
//!
//! Out-of-range inputs are clamped, never rejected: a page below 1 becomes 1 and
//! a limit below 1 becomes [`DEFAULT_LIMIT`]. The page count is
//! `total_record / limit` with truncating division, so a partial last page is
//! not counted (25 records at 10 per page report 2 pages).

/// Page size used when the caller asks for zero rows per page
pub const DEFAULT_LIMIT: u32 = 10;

/// A clamped page request together with its row offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub offset: u64,
}

impl PageRequest {
    /// Clamps `limit` and `page` and computes `offset = (page - 1) * limit`.
    #[must_use]
    pub fn new(limit: u32, page: u32) -> Self {
        let page = page.max(1);
        let limit = if limit < 1 { DEFAULT_LIMIT } else { limit };
        let offset = u64::from(page - 1) * u64::from(limit);

        Self {
            page,
            limit,
            offset,
        }
    }
}

/// Paging metadata returned alongside a page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub limit: u32,
    pub total_record: u32,
    pub total_page: u32,
}

impl Pagination {
    /// Builds the metadata for `request` given the total row count.
    #[must_use]
    pub fn new(request: &PageRequest, total_record: u64) -> Self {
        let total_page = total_record / u64::from(request.limit);

        Self {
            current_page: request.page,
            limit: request.limit,
            total_record: u32::try_from(total_record).unwrap_or(u32::MAX),
            total_page: u32::try_from(total_page).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_second_page() {
        let request = PageRequest::new(10, 2);
        assert_eq!(request.offset, 10);
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 10);
    }

    #[test]
    fn test_zero_page_and_limit_are_clamped() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, DEFAULT_LIMIT);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_total_page_truncates() {
        let request = PageRequest::new(10, 1);
        assert_eq!(Pagination::new(&request, 25).total_page, 2);
        assert_eq!(Pagination::new(&request, 20).total_page, 2);
        assert_eq!(Pagination::new(&request, 9).total_page, 0);
    }

    #[test]
    fn test_pagination_echoes_request() {
        let request = PageRequest::new(5, 3);
        let pagination = Pagination::new(&request, 12);
        assert_eq!(
            pagination,
            Pagination {
                current_page: 3,
                limit: 5,
                total_record: 12,
                total_page: 2,
            }
        );
    }

    #[test]
    fn test_large_page_does_not_overflow() {
        let request = PageRequest::new(u32::MAX, u32::MAX);
        assert_eq!(
            request.offset,
            u64::from(u32::MAX - 1) * u64::from(u32::MAX)
        );
    }
}
