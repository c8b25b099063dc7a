//! Plain-text dumps of an [`AlignmentMatrix`], for debugging only.
//!
//! The layout is not a stable format. Typical use is through
//! [`align_with`](crate::scoring::needleman_wunsch::align_with):
//!
//! ```rust
//! use sizzlefind::scoring::needleman_wunsch::align_with;
//! use sizzlefind::scoring::trace::ScoreTable;
//!
//! let a: Vec<char> = "cat".chars().collect();
//! let b: Vec<char> = "cut".chars().collect();
//! let mut dump = String::new();
//! align_with(&a, &b, false, |matrix| dump = ScoreTable::new(matrix, &a, &b).to_string());
//! assert!(dump.contains("   c    a    t"));
//! ```

use std::fmt;

use crate::scoring::needleman_wunsch::AlignmentMatrix;

/// Score grid with `a` across the top and `b` down the side.
pub struct ScoreTable<'a> {
    matrix: &'a AlignmentMatrix,
    a: &'a [char],
    b: &'a [char],
}

impl<'a> ScoreTable<'a> {
    pub fn new(matrix: &'a AlignmentMatrix, a: &'a [char], b: &'a [char]) -> Self {
        Self { matrix, a, b }
    }
}

impl fmt::Display for ScoreTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self.matrix, self.a, self.b, |row, column| {
            self.matrix.score_at(row, column).to_string()
        })
    }
}

/// Backpointer grid, each cell labelled with the moves that tied for the best score.
pub struct PointerTable<'a> {
    matrix: &'a AlignmentMatrix,
    a: &'a [char],
    b: &'a [char],
}

impl<'a> PointerTable<'a> {
    pub fn new(matrix: &'a AlignmentMatrix, a: &'a [char], b: &'a [char]) -> Self {
        Self { matrix, a, b }
    }
}

impl fmt::Display for PointerTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self.matrix, self.a, self.b, |row, column| {
            self.matrix.pointer_at(row, column).label().to_string()
        })
    }
}

fn write_table<F>(
    f: &mut fmt::Formatter<'_>,
    matrix: &AlignmentMatrix,
    a: &[char],
    b: &[char],
    cell: F,
) -> fmt::Result
where
    F: Fn(usize, usize) -> String,
{
    // header: one blank column for the gap row, then `a`
    write!(f, "{:>2}  |{:>5}", "", "")?;
    for c in a {
        write!(f, "{c:>4} ")?;
    }
    writeln!(f)?;
    writeln!(f, "----+{}", "-".repeat(a.len() * 5 + 5))?;

    for row in 0..matrix.rows() {
        match row.checked_sub(1).and_then(|i| b.get(i)) {
            Some(c) => write!(f, "{c:>2}  |")?,
            None => write!(f, "{:>2}  |", "")?,
        }
        for column in 0..matrix.columns() {
            write!(f, "{:>4} ", cell(row, column))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
