//! Payoff Table
//!
//! Win/Lose/Draw for every ordered pair of moves, shown as help.
//! Derived on demand, never stored.

use super::moves::MoveSet;
use super::outcome::determine_outcome;

/// Default corner label: rows are the user's move, columns the computer's.
pub const DEFAULT_CORNER_LABEL: &str = "User \\ PC";

/// Payoff table with header row and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoffMatrix {
    rows: Vec<Vec<String>>,
}

impl PayoffMatrix {
    /// Build the table for `moves`.
    ///
    /// Cell `(i, j)` is the outcome for a player choosing move `i` against
    /// move `j`.
    pub fn new(moves: &MoveSet, corner_label: &str) -> Self {
        let total = moves.len();
        let mut rows = Vec::with_capacity(total + 1);

        let mut header = Vec::with_capacity(total + 1);
        header.push(corner_label.to_string());
        header.extend(moves.iter().map(str::to_string));
        rows.push(header);

        for (i, mover) in moves.iter().enumerate() {
            let mut row = Vec::with_capacity(total + 1);
            row.push(mover.to_string());
            for j in 0..total {
                // MoveSet guarantees an odd count >= 3 and both indices are in range.
                let cell = determine_outcome(i, j, total)
                    .map(|o| o.as_str())
                    .unwrap_or_else(|e| unreachable!("MoveSet invariant violated: {e}"));
                row.push(cell.to_string());
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Header row followed by one row per move.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consume into the raw rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Render as an aligned text table.
    ///
    /// ```text
    /// User \ PC | rock | paper | scissors
    /// ----------+------+-------+---------
    /// rock      | Draw | Lose  | Win
    /// ```
    pub fn render(&self) -> String {
        let columns = self.rows.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                self.rows
                    .iter()
                    .map(|row| row[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for (r, row) in self.rows.iter().enumerate() {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
            if r == 0 {
                let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
                out.push_str(&rule.join("-+-"));
                out.push('\n');
            }
        }
        out
    }
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
        .collect();
    cells.join(" | ").trim_end().to_string()
}

/// Build the payoff table rows for `moves` with the default corner label.
pub fn build_payoff_matrix(moves: &MoveSet) -> Vec<Vec<String>> {
    PayoffMatrix::new(moves, DEFAULT_CORNER_LABEL).into_rows()
}
