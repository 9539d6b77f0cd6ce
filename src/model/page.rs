//! Rendered page of rows
//!
//! A `Page` is rebuilt from scratch on every navigation: the previous page
//! is dropped ([`Page::clear`]) and [`Page::fill`] walks the window again.
//! Cell edits live only on the rendered page, so they vanish on the next
//! rebuild and are never written back to the result set or the server.

use super::pager::Pager;
use super::result_set::{row_key, ResultSet};

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// 1-based number shown in the index column (`g + 1`)
    pub number: usize,
    /// Wire key of the row (`r007`)
    pub key: String,
    /// Editable cell contents
    pub cells: Vec<String>,
}

/// Rows currently on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<PageRow>,
}

impl Page {
    /// Render the window selected by `pager` at `page_size` rows per page.
    ///
    /// Stops at the end of the result set without padding, so the last page
    /// may hold fewer than `page_size` rows.
    pub fn fill(result: &ResultSet, pager: Pager, page_size: usize) -> Page {
        let total = result.total_rows();
        let start = page_size.saturating_mul(pager.index());
        let mut rows = Vec::new();

        for local in 0..page_size {
            let g = start + local;
            if g >= total {
                break;
            }
            let Some(cells) = result.row(g) else { break };
            rows.push(PageRow {
                number: g + 1,
                key: row_key(g),
                cells: cells.to_vec(),
            });
        }

        Page { rows }
    }

    /// Drop every rendered row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Mutable access to a single cell for local editing
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut String> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(total: usize) -> ResultSet {
        ResultSet {
            headers: Some(vec!["n".to_string()]),
            rows: (0..total).map(|g| vec![format!("v{}", g)]).collect(),
        }
    }

    #[test]
    fn test_fill_full_page() {
        let page = Page::fill(&numbered(10), Pager::at(1), 3);
        let numbers: Vec<usize> = page.rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![4, 5, 6]);
        assert_eq!(page.rows[0].key, "r003");
        assert_eq!(page.rows[0].cells, vec!["v3"]);
    }

    #[test]
    fn test_fill_last_partial_page() {
        let page = Page::fill(&numbered(10), Pager::at(3), 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page.rows[0].number, 10);
        assert_eq!(page.rows[0].key, "r009");
    }

    #[test]
    fn test_fill_past_end_is_empty() {
        assert!(Page::fill(&numbered(10), Pager::at(4), 3).is_empty());
        assert!(Page::fill(&numbered(0), Pager::new(), 3).is_empty());
    }

    #[test]
    fn test_fill_row_count_property() {
        for total in 0..25usize {
            let rs = numbered(total);
            for size in 1..6usize {
                for index in 0..7usize {
                    let page = Page::fill(&rs, Pager::at(index), size);
                    let start = size * index;
                    let expected = if start < total { size.min(total - start) } else { 0 };
                    assert_eq!(page.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_edits_do_not_touch_result_set() {
        let rs = numbered(2);
        let mut page = Page::fill(&rs, Pager::new(), 5);
        page.cell_mut(0, 0).unwrap().push_str("-edited");

        assert_eq!(page.rows[0].cells[0], "v0-edited");
        assert_eq!(rs.row(0).unwrap(), ["v0"]);

        let rebuilt = Page::fill(&rs, Pager::new(), 5);
        assert_eq!(rebuilt.rows[0].cells[0], "v0");
    }

    #[test]
    fn test_clear() {
        let mut page = Page::fill(&numbered(4), Pager::new(), 3);
        assert_eq!(page.column_count(), 1);
        page.clear();
        assert!(page.is_empty());
        assert_eq!(page.column_count(), 0);
    }
}
