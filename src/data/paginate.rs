use std::ops::Range;

/// Rows shown per leaderboard page.
pub const ROWS_PER_PAGE: usize = 100;

/// Page position over a ranked sequence of `total` rows.
///
/// Navigation returns a new value; out-of-range moves leave the page as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based current page.
    pub page: usize,
    pub total: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Start at page 1 over `total` rows.
    pub fn new(total: usize, page_size: usize) -> Self {
        Pagination {
            page: 1,
            total,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(total / page_size)`; zero when there are no rows.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Controls are only worth showing when there is more than one page.
    pub fn controls_visible(&self) -> bool {
        self.page_count() > 1
    }

    pub fn next(self) -> Self {
        if self.has_next() {
            Pagination { page: self.page + 1, ..self }
        } else {
            self
        }
    }

    pub fn prev(self) -> Self {
        if self.has_prev() {
            Pagination { page: self.page - 1, ..self }
        } else {
            self
        }
    }

    /// Index range `[(page-1)*size, page*size)` clipped to `total`.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start..end
    }

    /// The rows of the current page.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(rows.len());
        &rows[range.start.min(end)..end]
    }

    /// "Page X of Y" as shown under the table.
    pub fn describe(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(0, ROWS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Pagination::new(0, 100).page_count(), 0);
        assert_eq!(Pagination::new(1, 100).page_count(), 1);
        assert_eq!(Pagination::new(100, 100).page_count(), 1);
        assert_eq!(Pagination::new(101, 100).page_count(), 2);
        assert_eq!(Pagination::new(250, 100).page_count(), 3);
    }

    #[test]
    fn test_first_page_slice() {
        let rows: Vec<usize> = (0..250).collect();
        let p = Pagination::new(rows.len(), ROWS_PER_PAGE);
        assert_eq!(p.slice(&rows).len(), 100);
        assert_eq!(p.slice(&rows)[0], 0);

        let few: Vec<usize> = (0..7).collect();
        assert_eq!(Pagination::new(few.len(), ROWS_PER_PAGE).slice(&few).len(), 7);
    }

    #[test]
    fn test_navigation_clamps() {
        let rows: Vec<usize> = (0..250).collect();
        let p = Pagination::new(rows.len(), ROWS_PER_PAGE);

        assert_eq!(p.prev(), p);

        let last = p.next().next();
        assert_eq!(last.page, 3);
        assert_eq!(last.slice(&rows), &rows[200..250]);
        assert_eq!(last.next(), last);
        assert!(!last.has_next());
        assert!(last.has_prev());
        assert_eq!(last.prev().page, 2);
    }

    #[test]
    fn test_controls_visibility() {
        assert!(!Pagination::new(0, 100).controls_visible());
        assert!(!Pagination::new(100, 100).controls_visible());
        assert!(Pagination::new(101, 100).controls_visible());
    }

    #[test]
    fn test_empty_has_no_moves() {
        let p = Pagination::new(0, 100);
        assert_eq!(p.next(), p);
        assert_eq!(p.prev(), p);
        assert!(p.slice::<u8>(&[]).is_empty());
        assert_eq!(p.describe(), "Page 1 of 0");
    }
}
