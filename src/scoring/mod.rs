//! Scoring and ranking of candidates.
//!
//! - [`needleman_wunsch`]: global alignment with a linear gap penalty
//! - [`trace`]: debug dumps of the alignment grids
//! - [`finder`]: literal occurrences of a token
//! - [`candidate`]: per-candidate score, matches and highlighting, and ranking

pub mod candidate;
pub mod finder;
pub mod needleman_wunsch;
pub mod trace;

pub use candidate::{Candidate, CandidateList, Highlighter};
