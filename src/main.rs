//! Terminal blockdrop runner (default binary).
//!
//! Owns the event loop: poll input until the next tick is due, apply the
//! mapped commands, feed elapsed time to the session, then render a snapshot
//! through the framebuffer-based terminal view.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockdrop::core::{GameSession, GameSnapshot};
use blockdrop::input::{handle_key_event, should_quit};
use blockdrop::logging;
use blockdrop::term::{FrameBuffer, GameView, Terminal, Viewport};
use blockdrop::types::{Command, TICK_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockdrop",
    version,
    about = "Falling-block puzzle in the terminal.",
    long_about = "Blockdrop is a falling-block puzzle for the terminal.\n\n\
        CONTROLS:\n  Left/Right or h/l  Move        Up or k     Rotate\n  \
        Down or j          Soft drop   Space       Hard drop\n  \
        S                  Start       P           Pause\n  \
        R                  Reset       Q / Ctrl-C  Quit"
)]
pub struct Args {
    /// Seed for the piece sequence. Random when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Frame/tick period in milliseconds.
    #[arg(long, default_value_t = TICK_MS, value_name = "MS")]
    pub tick_ms: u32,

    /// Write log records to this file. Logging is off without it.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). Falls back to BLOCKDROP_LOG.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Skip the start screen and begin playing immediately.
    #[arg(long)]
    pub autostart: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level.as_deref())?;

    let mut game = match args.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    if args.autostart {
        game.apply_command(Command::Start);
    }

    let mut term = Terminal::enter()?;
    let result = run(&mut term, &mut game, args.tick_ms.max(1));

    // Always try to restore terminal state.
    let restored = term.restore();
    info!("exit: score={} level={} lines={}", game.score(), game.level(), game.lines());
    log::logger().flush();
    result.and(restored)
}

fn run(term: &mut Terminal, game: &mut GameSession, tick_ms: u32) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(u64::from(tick_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = term.size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so slow frames do not slow gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.tick(elapsed_ms);
            if let Some(lock) = game.take_last_lock() {
                if lock.lines_cleared > 0 {
                    info!(
                        "cleared {} line(s) for {} points",
                        lock.lines_cleared, lock.score_gained
                    );
                }
            }
        }
    }
}
