pub mod candidates;

pub use candidates::{open, read_candidates, ReadOptions, SourceError};
