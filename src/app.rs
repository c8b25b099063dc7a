use crossterm::event::KeyEvent;
use ratatui::prelude::{Style, Stylize};
use ratatui::widgets::{Block, Borders, ListState};
use crate::ui;
use sizzlefind::read_stylizing::RangeSet;
use sizzlefind::scoring::{Candidate, CandidateList};
use std::time::Instant;
use tracing::debug;
use tui_textarea::{CursorMove, TextArea};

#[cfg(debug_assertions)]
const MAX_RESULTS: usize = 200;
#[cfg(not(debug_assertions))]
const MAX_RESULTS: usize = 1000;

/// Split a typed query into tokens on whitespace.
pub fn parse_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_string).collect()
}

/// Whether a ranked candidate with `matches` should be listed.
///
/// With `only_matching`, candidates without a literal occurrence of any token
/// are dropped, unless the query is empty.
pub fn keep(candidate: &Candidate, matches: &RangeSet, only_matching: bool) -> bool {
    !only_matching || candidate.tokens().is_empty() || !matches.is_empty()
}

/// A listed result, with its matches resolved once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLine {
    pub text: String,
    pub source: Vec<char>,
    pub score: i32,
    pub matches: RangeSet,
}

#[derive(Debug, Default)]
pub struct TransientMessage {
    message: String,
    timer: u8, // draws to live
}
impl TransientMessage {
    pub fn new(message: String) -> Self {
        Self { message, timer: 8 }
    }
    pub fn get(&mut self) -> Option<String> {
        if self.timer > 0 {
            self.timer -= 1;
            Some(self.message.clone())
        } else {
            None
        }
    }
    pub fn dismiss(&mut self) {
        self.timer = 0;
    }
}
#[derive(Debug)]
pub struct App<'a> {
    pub quit: bool,
    /// line chosen with Enter, printed after the terminal is restored
    pub selected: Option<String>,
    pub results: Vec<RankedLine>,
    pub list_state: ListState,
    pub query_input: TextArea<'a>,
    pub match_style: Style,
    /// result rows on screen, the page up/down step
    pub page: isize,
    candidates: Vec<String>,
    tokens: Vec<String>,
    only_matching: bool,
    message: TransientMessage,
}

impl App<'_> {
    pub fn new(candidates: Vec<String>, query: &str, only_matching: bool) -> Self {
        let mut query_input = TextArea::new(vec![query.to_string()]);
        query_input.set_block(Block::default().borders(Borders::ALL).title("Query"));
        query_input.set_cursor_line_style(Style::default());
        query_input.move_cursor(CursorMove::End);

        let mut instance = App {
            quit: false,
            selected: None,
            results: Vec::new(),
            list_state: ListState::default(),
            query_input,
            match_style: Style::new().green().bold(),
            page: 10,
            candidates,
            tokens: Vec::new(),
            only_matching,
            message: TransientMessage::default(),
        };
        instance.update();
        instance
    }

    pub fn query(&self) -> String {
        self.query_input.lines().join(" ")
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    /// Feed a key to the query box, re-ranking if the query changed.
    pub fn input(&mut self, key: KeyEvent) {
        if self.query_input.input(key) {
            self.update();
        }
    }

    /// Re-rank every candidate against the current query.
    pub fn update(&mut self) {
        let started = Instant::now();
        self.tokens = parse_query(&self.query());
        let list = CandidateList::from_lines(self.candidates.iter().map(String::as_str), &self.tokens);
        let only_matching = self.only_matching;
        self.results = list
            .ranked()
            .into_iter()
            .filter_map(|(score, candidate)| {
                let matches = candidate.matches();
                keep(candidate, &matches, only_matching).then(|| RankedLine {
                    text: candidate.text().to_string(),
                    source: candidate.source().to_vec(),
                    score,
                    matches,
                })
            })
            .take(MAX_RESULTS)
            .collect();
        self.list_state
            .select(if self.results.is_empty() { None } else { Some(0) });
        debug!(
            tokens = self.tokens.len(),
            results = self.results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "re-ranked candidates"
        );
    }

    /// Track a terminal `height` rows tall.
    pub fn resize(&mut self, height: u16) {
        self.page = ui::results_height(height) as isize;
    }

    /// Move the selection by `delta` rows, clamped to the result list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.results.len() as isize - 1;
        let current = self.list_state.selected().unwrap_or(0) as isize;
        self.list_state
            .select(Some((current.saturating_add(delta)).clamp(0, last) as usize));
    }

    pub fn selected_line(&self) -> Option<&RankedLine> {
        self.list_state.selected().and_then(|i| self.results.get(i))
    }

    /// Pick the selected line and quit.
    pub fn accept(&mut self) {
        match self.selected_line() {
            Some(line) => {
                self.selected = Some(line.text.clone());
                self.quit = true;
            }
            None => self.set_message("Nothing to select".to_string()),
        }
    }

    /// Quit without a selection.
    pub fn abort(&mut self) {
        self.selected = None;
        self.quit = true;
    }

    pub fn set_message(&mut self, msg: String) {
        self.message = TransientMessage::new(msg);
    }

    pub fn get_message(&mut self) -> Option<String> {
        self.message.get()
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }
}
