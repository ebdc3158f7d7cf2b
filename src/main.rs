//! Nocturne -- replays Fury of Dracula play logs.
//!
//! Reads one game log per non-empty line from the given files (or stdin)
//! and prints each game's turns, a summary, or JSON to stdout. Exits with
//! status 1 if any log is rejected.

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nocturne::session::{self, SessionError};
use nocturne::{GameMap, History, Player, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One narrated line per turn
    Text,
    /// One JSON document per game
    Json,
    /// One line per game
    Summary,
}

#[derive(Debug, Parser)]
#[command(name = "nocturne")]
#[command(about = "Replay and validate Fury of Dracula play logs")]
struct Args {
    /// Log files to replay; reads stdin when empty
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON file overriding the standard rules
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let rules = match &args.rules {
        Some(path) => Rules::load(path)?,
        None => Rules::default(),
    };
    let logs = read_logs(&args.files)?;

    let map = GameMap::standard();
    let results = session::replay_all(&map, &rules, &logs);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0;
    for (i, result) in results.iter().enumerate() {
        let game = i + 1;
        match (args.format, result) {
            (Format::Text, Ok(history)) => write_text(&mut out, game, history)?,
            (Format::Summary, Ok(history)) => write_summary(&mut out, game, history)?,
            (Format::Json, Ok(history)) => {
                serde_json::to_writer(&mut out, &json!({ "game": game, "turns": history }))?;
                writeln!(out)?;
            }
            (Format::Json, Err(e)) => {
                serde_json::to_writer(&mut out, &json!({ "game": game, "error": error_json(e) }))?;
                writeln!(out)?;
            }
            (_, Err(e)) => writeln!(out, "game {game}: error at play {}: {e}", e.index + 1)?,
        }
        failed += usize::from(result.is_err());
    }
    out.flush()?;

    Ok(if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_logs(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if files.is_empty() {
        for line in io::stdin().lock().lines() {
            lines.push(line.context("failed to read stdin")?);
        }
    } else {
        for path in files {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            lines.extend(data.lines().map(str::to_string));
        }
    }
    Ok(lines.into_iter().filter(|l| !l.trim().is_empty()).collect())
}

fn write_text(out: &mut impl Write, game: usize, history: &History) -> io::Result<()> {
    writeln!(out, "game {game}")?;
    for turn in history {
        write!(out, "  [{:>2}] {}", turn.round(), turn.narration())?;
        for action in turn.actions() {
            write!(out, " {} {}.", turn.player(), action)?;
        }
        writeln!(out)?;
    }
    write_summary(out, game, history)
}

fn write_summary(out: &mut impl Write, game: usize, history: &History) -> io::Result<()> {
    let Some(state) = history.final_state() else {
        return writeln!(out, "game {game}: no turns");
    };
    let healths: Vec<String> = nocturne::board::ALL_PLAYERS
        .iter()
        .map(|p| format!("{}={}", p.code(), state.health(*p)))
        .collect();
    let over = state.score() <= 0 || state.health(Player::Dracula) <= 0;
    writeln!(
        out,
        "game {game}: {} turns, round {}, score {}, health {}, {}",
        history.len(),
        history.last_round().unwrap_or(0),
        state.score(),
        healths.join(" "),
        if over { "over" } else { "in progress" },
    )
}

fn error_json(e: &SessionError) -> serde_json::Value {
    json!({
        "index": e.index,
        "round": e.violation.round,
        "player": e.violation.player,
        "reason": e.violation.reason(),
        "context": e.context,
        "play": e.play,
    })
}
