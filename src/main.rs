//! Terminal falling-block game (default binary).
//!
//! Wires the crossterm input source and the framebuffer renderer into the core
//! frame loop. The terminal is always restored before the process exits.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use blockfall::core::{GameState, Outcome, Runner, ThreadClock};
use blockfall::input::TerminalInput;
use blockfall::term::TerminalSink;
use blockfall::types::FRAME_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Clear full rows to score.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        Pieces fall into a 12x20 well. Fill a row edge-to-edge to clear it; clearing \
        several rows at once scores more. Every 10 lines the level rises and pieces \
        fall faster.\n\n\
        CONTROLS:\n  A / Left   Move left    D / Right  Move right\n  \
        S / Down   Soft drop    W / Up     Rotate\n  Q / Esc    Quit\n\n\
        h/j/k/l work as well."
)]
struct Args {
    /// Seed for the piece sequence. Derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Delay between frames in milliseconds.
    #[arg(
        long,
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u64).range(1..=1000),
        value_name = "MS"
    )]
    frame_ms: u64,

    /// Append log records to this file. Nothing is logged without it.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: LevelFilter,
}

struct Summary {
    outcome: Outcome,
    score: u32,
    lines: u32,
    level: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut sink = TerminalSink::new();
    let result = play(&mut sink, seed, Duration::from_millis(args.frame_ms));

    // Always try to restore terminal state.
    let restored = sink.exit().context("failed to restore the terminal");
    let summary = result?;
    restored?;

    match summary.outcome {
        Outcome::GameOver => println!("Game over! Final score: {}", summary.score),
        Outcome::Quit => println!("Final score: {}", summary.score),
    }
    println!("Lines: {}  Level: {}", summary.lines, summary.level);
    Ok(())
}

fn play(sink: &mut TerminalSink, seed: u32, frame: Duration) -> Result<Summary> {
    sink.enter().context("failed to set up the terminal")?;

    let mut state = GameState::new(seed);
    info!("starting with seed {} and {} ms frames", state.seed(), frame.as_millis());
    let mut input = TerminalInput::new();
    let outcome = Runner::new(frame).run(&mut state, &mut input, sink, &mut ThreadClock)?;

    if outcome == Outcome::GameOver {
        // The last frame already shows the overlay; keys held while dying don't count.
        input.drain()?;
        input.wait_for_key()?;
    }

    Ok(Summary {
        outcome,
        score: state.score(),
        lines: state.lines(),
        level: state.level(),
    })
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = fern::log_file(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(args.log_level)
        .chain(file)
        .apply()?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
