use clap::{Args, Parser, Subcommand};
use sizzlefind::config::HighlightConfig;
use sizzlefind::io::candidates::{ReadOptions, DEFAULT_MAX_LINE_CHARS};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sizzlefind", version, about = "Rank lines against a query by global alignment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick one line interactively and print it
    Select(SelectArgs),
    /// Print every line ranked against a query, best first
    Filter(FilterArgs),
    /// Show the alignment of two strings
    Align(AlignArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// One candidate per line, `.gz` allowed. Reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Skip lines with more characters than this
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_CHARS)]
    pub max_line_chars: usize,
}

impl InputArgs {
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            max_line_chars: self.max_line_chars,
        }
    }
}

#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Inserted before every match
    #[arg(long, env = "SIZZLEFIND_HIGHLIGHT_BEGIN")]
    pub highlight_begin: Option<String>,

    /// Inserted after every match
    #[arg(long, env = "SIZZLEFIND_HIGHLIGHT_END")]
    pub highlight_end: Option<String>,

    /// Print lines without highlighting, ignoring any markers
    #[arg(long)]
    pub plain: bool,
}

impl HighlightArgs {
    /// Terminal colors unless overridden, one marker at a time.
    pub fn config(&self) -> HighlightConfig {
        if self.plain {
            return HighlightConfig::new("", "");
        }
        let default = HighlightConfig::default();
        HighlightConfig::new(
            self.highlight_begin.clone().unwrap_or(default.begin),
            self.highlight_end.clone().unwrap_or(default.end),
        )
    }
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Initial query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Hide lines that contain none of the query tokens
    #[arg(long)]
    pub only_matching: bool,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Whitespace separated tokens
    #[arg(short, long)]
    pub query: String,

    /// Print at most this many lines
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Prefix each line with its score and a tab
    #[arg(long)]
    pub show_score: bool,

    /// Hide lines that contain none of the query tokens
    #[arg(long)]
    pub only_matching: bool,

    #[command(flatten)]
    pub highlight: HighlightArgs,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    pub a: String,
    pub b: String,

    /// Print only the score and the trace
    #[arg(long)]
    pub no_tables: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_filter_args() {
        let cli = Cli::parse_from([
            "sizzlefind", "-v", "filter", "paths.txt", "-q", "src main", "-n", "5", "--show-score",
            "--highlight-begin", "<", "--highlight-end", ">",
        ]);
        assert!(cli.verbose);
        let Commands::Filter(args) = cli.command else {
            panic!("expected filter");
        };
        assert_eq!(args.input.file, Some(PathBuf::from("paths.txt")));
        assert_eq!(args.input.max_line_chars, DEFAULT_MAX_LINE_CHARS);
        assert_eq!(args.query, "src main");
        assert_eq!(args.limit, Some(5));
        assert!(args.show_score);
        let config = args.highlight.config();
        assert_eq!((config.begin.as_str(), config.end.as_str()), ("<", ">"));
    }

    #[test]
    fn test_plain_highlight() {
        let cli = Cli::parse_from(["sizzlefind", "filter", "-q", "x", "--plain"]);
        let Commands::Filter(args) = cli.command else {
            panic!("expected filter");
        };
        assert!(args.input.file.is_none());
        let config = args.highlight.config();
        assert!(config.begin.is_empty() && config.end.is_empty());
    }

    #[test]
    fn test_select_and_align_args() {
        let cli = Cli::parse_from(["sizzlefind", "select", "-", "--max-line-chars", "80"]);
        let Commands::Select(args) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(args.query, "");
        assert_eq!(args.input.read_options().max_line_chars, 80);

        let cli = Cli::parse_from(["sizzlefind", "align", "banana", "ana", "--log-file", "x.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
        let Commands::Align(args) = cli.command else {
            panic!("expected align");
        };
        assert_eq!((args.a.as_str(), args.b.as_str()), ("banana", "ana"));
        assert!(!args.no_tables);
    }
}
