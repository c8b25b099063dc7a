pub mod interval_operations;
pub mod match_highlighting;

pub use crate::read_stylizing::interval_operations::{Range, RangeSet};
pub use crate::read_stylizing::match_highlighting::{highlight_line, highlight_matches};
