//! In-memory sorting and filtering of rendered table rows
//!
//! The sort/filter state is an explicit struct owned by the rendering side and passed
//! in, there is no module level state. Filtering hides rows instead of removing them so
//! clearing the query restores the table without a reload.
use std::cmp::Ordering;

/// One rendered row: plain text cell values, and whether the filter hides it
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<String>,
    pub hidden: bool,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells, hidden: false }
    }
}

/// Current sort column and direction
/// ```
/// # use view::table::SortState;
/// let mut state = SortState::new();
/// assert!(state.column == 0 && state.ascending);
///
/// // Clicking the same column flips direction, a new column resets to ascending
/// state.click(0);
/// assert!(!state.ascending);
/// state.click(2);
/// assert!(state.column == 2 && state.ascending);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SortState {
    pub column: usize,
    pub ascending: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self { column: 0, ascending: true }
    }

    /// Register a header click
    pub fn click(&mut self, column: usize) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
            self.ascending = true;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two cell values, numerically when both parse fully as integers, otherwise
/// case insensitively as text
/// ```
/// # use std::cmp::Ordering;
/// # use view::table::compare_cells;
/// assert!(compare_cells("10", "9") == Ordering::Greater);
/// assert!(compare_cells("10x", "9x") == Ordering::Less);
/// assert!(compare_cells("Abc", "abd") == Ordering::Less);
/// ```
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Sort rows by the state's column. Stable, so equal cells keep their order.
/// ```
/// # use view::table::{sort_rows, Row, SortState};
/// let mut rows = vec![
///     Row::new(vec!["9".to_string()]),
///     Row::new(vec!["10".to_string()]),
/// ];
/// let mut state = SortState::new();
///
/// sort_rows(&state, &mut rows);
/// assert!(rows[0].cells[0] == "9");
///
/// state.click(0);
/// sort_rows(&state, &mut rows);
/// assert!(rows[0].cells[0] == "10");
/// ```
pub fn sort_rows(state: &SortState, rows: &mut [Row]) {
    rows.sort_by(|a, b| {
        let av = a.cells.get(state.column).map(String::as_str).unwrap_or("");
        let bv = b.cells.get(state.column).map(String::as_str).unwrap_or("");
        let ord = compare_cells(av, bv);
        if state.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Apply a case insensitive substring filter against each row's full visible text.
///
/// An empty query shows everything.
/// ```
/// # use view::table::{apply_filter, Row};
/// let mut rows = vec![
///     Row::new(vec!["acc1".to_string(), "MfAmazon".to_string()]),
///     Row::new(vec!["acc2".to_string(), "Hoarder".to_string()]),
/// ];
///
/// apply_filter("amazon", &mut rows);
/// assert!(!rows[0].hidden && rows[1].hidden);
///
/// apply_filter("no such text", &mut rows);
/// assert!(rows.iter().all(|r| r.hidden));
///
/// apply_filter("", &mut rows);
/// assert!(rows.iter().all(|r| !r.hidden));
/// ```
pub fn apply_filter(query: &str, rows: &mut [Row]) {
    let query = query.to_lowercase();
    for row in rows.iter_mut() {
        row.hidden = !query.is_empty() && !row.cells.join(" ").to_lowercase().contains(&query);
    }
}
