use std::cmp::Reverse;
use std::fmt;

use rayon::prelude::*;

use crate::config::HighlightConfig;
use crate::read_stylizing::interval_operations::RangeSet;
use crate::read_stylizing::match_highlighting::highlight_matches;
use crate::scoring::finder::find_ranges;
use crate::scoring::needleman_wunsch::align;

/// One line under evaluation against the tokens of a query.
///
/// The candidate owns its text; the tokens are borrowed from the query. Score,
/// matches and highlighting are recomputed from these two on every call.
#[derive(Debug, Clone)]
pub struct Candidate<'q> {
    text: String,
    source: Vec<char>,
    tokens: &'q [String],
}

impl<'q> Candidate<'q> {
    pub fn new(text: impl Into<String>, tokens: &'q [String]) -> Self {
        let text = text.into();
        let source = text.chars().collect();
        Self {
            text,
            source,
            tokens,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Code points of the text.
    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn tokens(&self) -> &'q [String] {
        self.tokens
    }

    /// Sum of the alignment scores of the text against every token.
    ///
    /// Tokens that do not occur still count, usually negatively. No tokens scores 0.
    pub fn score(&self) -> i32 {
        self.tokens
            .iter()
            .map(|token| {
                let token: Vec<char> = token.chars().collect();
                align(&self.source, &token, false).score
            })
            .sum()
    }

    /// Every occurrence of every token, merged into disjoint ranges sorted by start.
    pub fn matches(&self) -> RangeSet {
        let mut matches = RangeSet::new();
        for token in self.tokens {
            let token: Vec<char> = token.chars().collect();
            for range in find_ranges(&self.source, &token) {
                matches.insert(range);
            }
        }
        matches.sort();
        matches
    }

    /// The text with every match wrapped in `config`'s markers.
    pub fn highlighted(&self, config: &HighlightConfig) -> String {
        highlight_matches(&self.source, &self.matches(), config)
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Highlights candidates with a fixed pair of markers.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn highlight(&self, candidate: &Candidate) -> String {
        candidate.highlighted(&self.config)
    }
}

/// Candidates ordered by score.
///
/// Scores are computed on the rayon pool; each candidate is scored independently
/// and the ordering happens once all scores are in.
#[derive(Debug, Clone, Default)]
pub struct CandidateList<'q> {
    candidates: Vec<Candidate<'q>>,
}

impl<'q> CandidateList<'q> {
    pub fn new() -> Self {
        Self::default()
    }

    /// One candidate per line, all sharing `tokens`.
    pub fn from_lines<I, S>(lines: I, tokens: &'q [String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: lines
                .into_iter()
                .map(|line| Candidate::new(line, tokens))
                .collect(),
        }
    }

    pub fn push(&mut self, candidate: Candidate<'q>) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate<'q>> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<'q>> {
        self.candidates.iter()
    }

    /// Score of every candidate, in list order.
    pub fn scores(&self) -> Vec<i32> {
        self.candidates.par_iter().map(Candidate::score).collect()
    }

    /// Reorder by ascending score. Equal scores keep their relative order.
    pub fn sort(&mut self) {
        let mut keyed: Vec<(i32, Candidate<'q>)> = std::mem::take(&mut self.candidates)
            .into_par_iter()
            .map(|candidate| (candidate.score(), candidate))
            .collect();
        keyed.sort_by_key(|(score, _)| *score);
        self.candidates = keyed.into_iter().map(|(_, candidate)| candidate).collect();
    }

    /// Best first, paired with the score. Equal scores keep list order.
    pub fn ranked(&self) -> Vec<(i32, &Candidate<'q>)> {
        let mut ranked: Vec<(i32, &Candidate<'q>)> = self
            .candidates
            .par_iter()
            .map(|candidate| (candidate.score(), candidate))
            .collect();
        ranked.sort_by_key(|(score, _)| Reverse(*score));
        ranked
    }
}

impl<'q> FromIterator<Candidate<'q>> for CandidateList<'q> {
    fn from_iter<I: IntoIterator<Item = Candidate<'q>>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl<'a, 'q> IntoIterator for &'a CandidateList<'q> {
    type Item = &'a Candidate<'q>;
    type IntoIter = std::slice::Iter<'a, Candidate<'q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::finder::find_all;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn brackets() -> HighlightConfig {
        HighlightConfig::new("[", "]")
    }

    #[test]
    fn test_banana() {
        let query = tokens(&["ana"]);
        let candidate = Candidate::new("banana", &query);
        let token: Vec<char> = "ana".chars().collect();
        assert_eq!(find_all(candidate.source(), &token), vec![1, 3]);

        let matches: Vec<(usize, usize)> =
            candidate.matches().iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(matches, vec![(1, 6)]);
        assert_eq!(candidate.highlighted(&brackets()), "b[anana]");
    }

    #[test]
    fn test_no_tokens() {
        let query = tokens(&[]);
        let candidate = Candidate::new("anything", &query);
        assert_eq!(candidate.score(), 0);
        assert!(candidate.matches().is_empty());
        assert_eq!(candidate.highlighted(&brackets()), "anything");
    }

    #[test]
    fn test_score_sums_tokens() {
        let query = tokens(&["cat", "cut"]);
        assert_eq!(Candidate::new("cat", &query).score(), 6 + 3);
        // absent tokens still count
        let query = tokens(&["cat", "zzz"]);
        assert_eq!(Candidate::new("cat", &query).score(), 6 - 3);
    }

    #[test]
    fn test_matches_across_tokens() {
        let query = tokens(&["src", "main", "rc/m"]);
        let candidate = Candidate::new("src/main.rs", &query);
        let matches: Vec<(usize, usize)> =
            candidate.matches().iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(matches, vec![(0, 8)]);
        assert_eq!(candidate.highlighted(&brackets()), "[src/main].rs");
    }

    #[test]
    fn test_highlight_round_trip() {
        let query = tokens(&["a", "テキ", "ab"]);
        let config = HighlightConfig::new("\u{1}", "\u{2}");
        for text in ["", "abcab", "banana", "日本語のテキスト", "xyz", "aaaa"] {
            let candidate = Candidate::new(text, &query);
            assert_eq!(config.strip(&candidate.highlighted(&config)), text);
        }
    }

    #[test]
    fn test_highlighter_uses_its_config() {
        let query = tokens(&["an"]);
        let candidate = Candidate::new("banana", &query);
        let highlighter = Highlighter::new(HighlightConfig::new("<", ">"));
        assert_eq!(highlighter.highlight(&candidate), "b<anan>a");
        assert_eq!(highlighter.config().end, ">");
    }

    #[test]
    fn test_display_is_text() {
        let query = tokens(&["x"]);
        assert_eq!(Candidate::new("日本", &query).to_string(), "日本");
    }

    #[test]
    fn test_sort_ascending() {
        let query = tokens(&["cat"]);
        let mut list = CandidateList::from_lines(["cut", "dt", "cat"], &query);
        assert_eq!(list.scores(), vec![3, -1, 6]);
        list.sort();
        let order: Vec<&str> = list.iter().map(Candidate::text).collect();
        assert_eq!(order, vec!["dt", "cut", "cat"]);
    }

    #[test]
    fn test_ranked_best_first_and_stable() {
        let query = tokens(&["cat"]);
        let list: CandidateList = ["cut", "cat", "cap", "dt"]
            .into_iter()
            .map(|line| Candidate::new(line, &query))
            .collect();
        let ranked: Vec<(i32, &str)> = list
            .ranked()
            .into_iter()
            .map(|(score, candidate)| (score, candidate.text()))
            .collect();
        assert_eq!(ranked, vec![(6, "cat"), (3, "cut"), (3, "cap"), (-1, "dt")]);
    }
}
