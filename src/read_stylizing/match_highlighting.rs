use ratatui::prelude::{Line, Span, Style};

use crate::config::HighlightConfig;
use crate::read_stylizing::interval_operations::RangeSet;

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Copy `source`, wrapping every range of `matches` in the configured markers.
///
/// `matches` must be sorted and disjoint, as returned by
/// [`Candidate::matches`](crate::scoring::candidate::Candidate::matches).
pub fn highlight_matches(source: &[char], matches: &RangeSet, config: &HighlightConfig) -> String {
    let mut highlighted = String::with_capacity(
        source.len() + matches.len() * (config.begin.len() + config.end.len()),
    );
    let mut current_index = 0;

    for m in matches {
        debug_assert!(current_index <= m.start, "matches must be sorted");
        highlighted.extend(&source[current_index..m.start]);
        highlighted.push_str(&config.begin);
        highlighted.extend(&source[m.start..m.end]);
        highlighted.push_str(&config.end);
        current_index = m.end;
    }
    highlighted.extend(&source[current_index..]);

    highlighted
}

/// Same walk as [`highlight_matches`], producing styled spans for the terminal UI.
pub fn highlight_line(source: &[char], matches: &RangeSet, style: Style) -> Line<'static> {
    let mut result: Vec<Span> = Vec::with_capacity(matches.len() * 2 + 1);
    let mut current_index = 0;

    for m in matches {
        if current_index < m.start {
            result.push(Span::raw(collect(&source[current_index..m.start])));
        }
        result.push(Span::styled(collect(&source[m.start..m.end]), style));
        current_index = m.end;
    }

    if current_index < source.len() {
        result.push(Span::raw(collect(&source[current_index..])));
    }

    Line::from(result)
}
