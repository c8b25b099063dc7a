//! # sizzlefind
//!
//! Matching, scoring and highlighting engine for an interactive fuzzy finder.
//!
//! Given a candidate line and the tokens of a query, the engine
//!
//! - locates every literal occurrence of each token ([`scoring::finder`]),
//! - merges the occurrences into disjoint highlight ranges
//!   ([`read_stylizing::interval_operations`]),
//! - scores the candidate by globally aligning it against every token
//!   ([`scoring::needleman_wunsch`]), and
//! - renders a highlighted copy with caller supplied markers
//!   ([`read_stylizing::match_highlighting`]).
//!
//! All positions are code point offsets, so multi-byte text is handled one
//! character at a time.
//!
//! ## Example
//!
//! ```rust
//! use sizzlefind::{Candidate, HighlightConfig};
//!
//! let query = vec!["ana".to_string()];
//! let candidate = Candidate::new("banana", &query);
//! let config = HighlightConfig::new("[", "]");
//!
//! assert_eq!(candidate.highlighted(&config), "b[anana]");
//! assert_eq!(candidate.score(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`scoring`]: alignment engine, match locator and candidate ranking
//! - [`read_stylizing`]: range merging and highlighted rendering
//! - [`config`]: highlight marker configuration
//! - [`io`]: reading candidate lines from files or stdin

pub mod config;
pub mod io;
pub mod read_stylizing;
pub mod scoring;

pub use config::HighlightConfig;
pub use read_stylizing::interval_operations::{Range, RangeSet};
pub use scoring::candidate::{Candidate, CandidateList};
pub use scoring::needleman_wunsch::{align, Alignment, AlignmentTrace};
