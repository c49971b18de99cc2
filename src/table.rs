//! Table preprocessing applied before any chart sees the rows.

/// One spreadsheet row: an ordered sequence of raw cell strings.
///
/// Rows need at least two cells to contribute a bar; shorter rows are
/// carried through preprocessing untouched and skipped by the emitters.
pub type Row = Vec<String>;

/// Apply column swap and row-order reversal to raw table rows.
///
/// The swap exchanges cells 0 and 1 of every row that has them, row by
/// row; the reversal then flips the whole sequence. The two flags are
/// independent and compose in that order.
pub fn preprocess(mut rows: Vec<Row>, swap_columns: bool, reverse_order: bool) -> Vec<Row> {
    if swap_columns {
        for row in &mut rows {
            if row.len() >= 2 {
                row.swap(0, 1);
            }
        }
    }
    if reverse_order {
        rows.reverse();
    }
    rows
}
