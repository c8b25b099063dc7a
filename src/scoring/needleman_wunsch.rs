use std::fmt;
use std::ops::BitOr;

/// Cost of aligning one code point against a gap.
pub const GAP_PENALTY: i32 = -2;
const MATCH_SCORE: i32 = 2;
const MISMATCH_SCORE: i32 = -1;

fn match_score(x: char, y: char) -> i32 {
    if x == y {
        MATCH_SCORE
    } else {
        MISMATCH_SCORE
    }
}

/// Set of moves that reached the best score of a cell.
///
/// Ties are kept, so a cell can point diagonally and horizontally at the same
/// time. The empty set marks the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pointer(u8);

impl Pointer {
    pub const NONE: Pointer = Pointer(0);
    pub const DIAGONAL: Pointer = Pointer(0b001);
    pub const HORIZONTAL: Pointer = Pointer(0b010);
    pub const VERTICAL: Pointer = Pointer(0b100);

    fn from_scores(diagonal: i32, horizontal: i32, vertical: i32) -> Self {
        let best = diagonal.max(horizontal).max(vertical);
        [
            (diagonal, Pointer::DIAGONAL),
            (horizontal, Pointer::HORIZONTAL),
            (vertical, Pointer::VERTICAL),
        ]
        .into_iter()
        .filter(|(score, _)| *score == best)
        .fold(Pointer::NONE, |acc, (_, pointer)| acc | pointer)
    }

    pub fn contains(self, other: Pointer) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Move taken when walking back, diagonal first, then horizontal, then vertical.
    pub fn preferred_step(self) -> Option<Step> {
        if self.contains(Pointer::DIAGONAL) {
            Some(Step::Diagonal)
        } else if self.contains(Pointer::HORIZONTAL) {
            Some(Step::Horizontal)
        } else if self.contains(Pointer::VERTICAL) {
            Some(Step::Vertical)
        } else {
            None
        }
    }

    /// Short label used by the pointer table, e.g. `DH` for a diagonal/horizontal tie.
    pub fn label(self) -> &'static str {
        match self.0 {
            0b111 => "DHV",
            0b011 => "DH",
            0b101 => "DV",
            0b110 => "HV",
            0b001 => "D",
            0b010 => "H",
            0b100 => "V",
            _ => "0",
        }
    }
}

impl BitOr for Pointer {
    type Output = Pointer;

    fn bitor(self, rhs: Pointer) -> Pointer {
        Pointer(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// consumes one code point of each input
    Diagonal,
    /// consumes one code point of `a` (a column)
    Horizontal,
    /// consumes one code point of `b` (a row)
    Vertical,
}

/// Score and backpointer grids of one alignment.
///
/// Rows follow `b`, columns follow `a`; both grids are `(b.len() + 1) x (a.len() + 1)`.
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    rows: usize,
    columns: usize,
    scores: Vec<i32>,
    pointers: Vec<Pointer>,
}

impl AlignmentMatrix {
    /// Fill both grids for `a` (columns) against `b` (rows).
    pub fn fill(a: &[char], b: &[char]) -> Self {
        let rows = b.len() + 1;
        let columns = a.len() + 1;
        let mut scores = vec![0; rows * columns];
        let mut pointers = vec![Pointer::NONE; rows * columns];

        for i in 1..rows {
            scores[i * columns] = i as i32 * GAP_PENALTY;
            pointers[i * columns] = Pointer::VERTICAL;
        }
        for j in 1..columns {
            scores[j] = j as i32 * GAP_PENALTY;
            pointers[j] = Pointer::HORIZONTAL;
        }

        for i in 1..rows {
            for j in 1..columns {
                let diagonal = scores[(i - 1) * columns + j - 1] + match_score(a[j - 1], b[i - 1]);
                let horizontal = scores[i * columns + j - 1] + GAP_PENALTY;
                let vertical = scores[(i - 1) * columns + j] + GAP_PENALTY;
                scores[i * columns + j] = diagonal.max(horizontal).max(vertical);
                pointers[i * columns + j] = Pointer::from_scores(diagonal, horizontal, vertical);
            }
        }

        Self {
            rows,
            columns,
            scores,
            pointers,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn score_at(&self, row: usize, column: usize) -> i32 {
        self.scores[row * self.columns + column]
    }

    pub fn pointer_at(&self, row: usize, column: usize) -> Pointer {
        self.pointers[row * self.columns + column]
    }

    /// Score of the full alignment (bottom-right cell).
    pub fn final_score(&self) -> i32 {
        self.score_at(self.rows - 1, self.columns - 1)
    }

    /// Walk back from the bottom-right cell to the origin and lay the alignment out
    /// as three rows, the longer input on top.
    pub fn trace(&self, a: &[char], b: &[char]) -> AlignmentTrace {
        // ties go to `b`
        let a_is_long = a.len() > b.len();
        let capacity = a.len() + b.len();
        let mut long = Vec::with_capacity(capacity);
        let mut connector = Vec::with_capacity(capacity);
        let mut short = Vec::with_capacity(capacity);

        let (mut row, mut column) = (self.rows - 1, self.columns - 1);
        while row > 0 || column > 0 {
            let Some(step) = self.pointer_at(row, column).preferred_step() else {
                break;
            };
            let (from_a, from_b) = match step {
                Step::Diagonal => {
                    row -= 1;
                    column -= 1;
                    (Some(a[column]), Some(b[row]))
                }
                Step::Horizontal => {
                    column -= 1;
                    (Some(a[column]), None)
                }
                Step::Vertical => {
                    row -= 1;
                    (None, Some(b[row]))
                }
            };
            let (long_char, short_char) = if a_is_long {
                (from_a, from_b)
            } else {
                (from_b, from_a)
            };
            connector.push(match step {
                Step::Diagonal => '|',
                Step::Horizontal | Step::Vertical => ' ',
            });
            long.push(long_char.unwrap_or('-'));
            short.push(short_char.unwrap_or('-'));
        }

        AlignmentTrace {
            long: long.into_iter().rev().collect(),
            connector: connector.into_iter().rev().collect(),
            short: short.into_iter().rev().collect(),
        }
    }
}

/// Human readable layout of an alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTrace {
    pub long: String,
    pub connector: String,
    pub short: String,
}

impl fmt::Display for AlignmentTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.long)?;
        writeln!(f, "{}", self.connector)?;
        write!(f, "{}", self.short)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub score: i32,
    pub trace: Option<AlignmentTrace>,
}

/// Global alignment score of `a` against `b`, optionally with a trace.
pub fn align(a: &[char], b: &[char], want_trace: bool) -> Alignment {
    align_with(a, b, want_trace, |_| {})
}

/// Same as [`align`], handing the filled matrix to `inspect` before it is dropped.
pub fn align_with<F>(a: &[char], b: &[char], want_trace: bool, inspect: F) -> Alignment
where
    F: FnOnce(&AlignmentMatrix),
{
    let matrix = AlignmentMatrix::fill(a, b);
    inspect(&matrix);
    Alignment {
        score: matrix.final_score(),
        trace: want_trace.then(|| matrix.trace(a, b)),
    }
}

/// Alignment score of two strings, compared code point by code point.
pub fn alignment_score(a: &str, b: &str) -> i32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    align(&a, &b, false).score
}
