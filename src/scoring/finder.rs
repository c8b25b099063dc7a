use crate::read_stylizing::interval_operations::Range;

/// Start offsets of every literal occurrence of `token` in `source`, overlapping
/// occurrences included, in ascending order.
///
/// An empty token never matches.
pub fn find_all(source: &[char], token: &[char]) -> Vec<usize> {
    if token.is_empty() || token.len() > source.len() {
        return Vec::new();
    }
    source
        .windows(token.len())
        .enumerate()
        .filter(|(_, window)| *window == token)
        .map(|(offset, _)| offset)
        .collect()
}

/// Occurrences of `token` as ranges of `token.len()` code points.
pub fn find_ranges(source: &[char], token: &[char]) -> impl Iterator<Item = Range> {
    let width = token.len();
    find_all(source, token)
        .into_iter()
        .map(move |start| Range::new(start, start + width))
}
