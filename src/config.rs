use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};

/// Markers spliced around matched spans by [`Candidate::highlighted`].
///
/// Both strings are copied verbatim; nothing checks that they are valid
/// terminal sequences.
///
/// [`Candidate::highlighted`]: crate::scoring::candidate::Candidate::highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    pub begin: String,
    pub end: String,
}

impl HighlightConfig {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// Bold green on, everything off.
    pub fn ansi() -> Self {
        Self {
            begin: format!(
                "{}{}",
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Green)
            ),
            end: SetAttribute(Attribute::Reset).to_string(),
        }
    }

    /// Remove every marker from `highlighted`.
    pub fn strip(&self, highlighted: &str) -> String {
        let mut stripped = highlighted.to_string();
        for marker in [&self.begin, &self.end] {
            if !marker.is_empty() {
                stripped = stripped.replace(marker.as_str(), "");
            }
        }
        stripped
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::ansi()
    }
}
