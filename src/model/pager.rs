//! Pagination cursor over a result set
//!
//! `Pager` is a small value object: every transition takes the current
//! cursor plus the live row count and page size, and returns the new cursor
//! (or `None` when the transition is not allowed). The page size is never
//! stored here because the page-size field may change between page turns.

use std::ops::Range;

/// Parse the page-size input field. Blank, non-numeric and zero are rejected.
pub fn parse_page_size(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&p| p > 0)
}

/// Index of the last page for `total_rows` rows at `page_size` rows per page.
///
/// Computed in floating point: when `T / P` is integral the last page is
/// `T / P - 1`, otherwise it is `round(T / P - 0.5)`. An empty result set
/// yields `-1`.
pub fn max_page_index(total_rows: usize, page_size: usize) -> i64 {
    let pages = total_rows as f64 / page_size as f64;
    let rounded = pages.round();
    if rounded == pages {
        rounded as i64 - 1
    } else {
        (pages - 0.5).round() as i64
    }
}

/// Number of pages, including a trailing partial page
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    (max_page_index(total_rows, page_size) + 1).max(0) as usize
}

/// Zero-based page cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    index: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self { index }
    }

    /// Zero-based page index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one page; allowed only while `index < maxPage`
    pub fn next(self, total_rows: usize, page_size: usize) -> Option<Pager> {
        if page_size == 0 {
            return None;
        }
        if (self.index as i64) < max_page_index(total_rows, page_size) {
            Some(Pager::at(self.index + 1))
        } else {
            None
        }
    }

    /// Go back one page; allowed only while `index > 0`
    pub fn prev(self) -> Option<Pager> {
        self.index.checked_sub(1).map(Pager::at)
    }

    /// Jump to a 1-based page number typed by the user.
    ///
    /// Blank, non-numeric, zero/negative and past-the-end input is rejected.
    /// The lower bound is checked on purpose: page `0` or below would
    /// otherwise turn into a negative index.
    pub fn goto(self, input: &str, total_rows: usize, page_size: usize) -> Option<Pager> {
        if page_size == 0 {
            return None;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let page: i64 = trimmed.parse().ok()?;
        if page < 1 || page as usize > page_count(total_rows, page_size) {
            return None;
        }
        Some(Pager::at(page as usize - 1))
    }

    /// Global row range shown on the current page.
    ///
    /// Empty when the cursor points past the end of the result set.
    pub fn window(&self, total_rows: usize, page_size: usize) -> Range<usize> {
        let start = page_size.saturating_mul(self.index);
        if start >= total_rows {
            return start..start;
        }
        start..start.saturating_add(page_size).min(total_rows)
    }
}
