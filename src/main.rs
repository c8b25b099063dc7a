mod app;
mod cli;
mod control;
mod event;
mod tui;
mod ui;

use anyhow::{Context, Result};
use app::{keep, parse_query, App};
use clap::Parser;
use cli::{AlignArgs, Cli, Commands, FilterArgs, InputArgs, SelectArgs};
use event::EventHandler;
use ratatui::prelude::{CrosstermBackend, Terminal};
use sizzlefind::io::candidates::{open, read_candidates};
use sizzlefind::read_stylizing::highlight_matches;
use sizzlefind::scoring::needleman_wunsch::align_with;
use sizzlefind::scoring::trace::{PointerTable, ScoreTable};
use sizzlefind::scoring::CandidateList;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tui::Tui;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Commands::Select(_));
    init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Commands::Select(args) => run_select(args),
        Commands::Filter(args) => run_filter(args).map(|()| ExitCode::SUCCESS),
        Commands::Align(args) => run_align(args).map(|()| ExitCode::SUCCESS),
    }
}

/// Logs go to stderr, or to `log_file` when given. The interactive picker
/// owns stderr, so it only logs to a file.
fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "sizzlefind=debug"
        } else {
            "sizzlefind=warn"
        })
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file '{}'", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => {}
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn load_candidates(input: &InputArgs) -> Result<Vec<String>> {
    let reader = open(input.file.as_deref())?;
    let candidates = read_candidates(reader, &input.read_options())?;
    info!(count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

fn run_select(args: SelectArgs) -> Result<ExitCode> {
    let candidates = load_candidates(&args.input)?;
    let mut app = App::new(candidates, &args.query, args.only_matching);

    let backend = CrosstermBackend::new(io::stderr());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(250);
    let mut tui = Tui::new(terminal, events);
    tui.enter()?;
    app.resize(tui.size()?.height);

    let result = event_loop(&mut tui, &mut app);
    tui.exit()?;
    result?;

    match app.selected {
        Some(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn event_loop(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.quit {
        tui.draw(app)?;
        let event = tui.events.next()?;
        let update = control::handle_input(app, event);
        control::apply(app, update);
    }
    Ok(())
}

fn run_filter(args: FilterArgs) -> Result<()> {
    let candidates = load_candidates(&args.input)?;
    let tokens = parse_query(&args.query);
    let config = args.highlight.config();

    let started = Instant::now();
    let list = CandidateList::from_lines(candidates, &tokens);
    let ranked = list.ranked();
    debug!(
        candidates = list.len(),
        tokens = tokens.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ranked candidates"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    let shown = ranked
        .into_iter()
        .filter_map(|(score, candidate)| {
            let matches = candidate.matches();
            keep(candidate, &matches, args.only_matching).then_some((score, candidate, matches))
        })
        .take(args.limit.unwrap_or(usize::MAX));
    for (score, candidate, matches) in shown {
        let line = highlight_matches(candidate.source(), &matches, &config);
        if args.show_score {
            writeln!(out, "{score}\t{line}")?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_align(args: AlignArgs) -> Result<()> {
    let a: Vec<char> = args.a.chars().collect();
    let b: Vec<char> = args.b.chars().collect();

    let alignment = align_with(&a, &b, true, |matrix| {
        if !args.no_tables {
            println!("{}", ScoreTable::new(matrix, &a, &b));
            println!("{}", PointerTable::new(matrix, &a, &b));
        }
    });

    println!("score: {}", alignment.score);
    if let Some(trace) = alignment.trace {
        println!("{trace}");
    }
    Ok(())
}
