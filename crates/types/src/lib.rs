//! Shared types and constants for the falling-block engine.
//!
//! Everything in here is plain data: no game rules, no I/O. Both the core
//! simulation and the terminal adapters depend on this crate, so the board
//! geometry, timing constants and the command vocabulary live in one place.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame/tick period of the terminal runner |
//! | `BASE_FALL_INTERVAL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL_MS` | 100 | Floor for the gravity interval |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{Command, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let cmd: Command = "hardDrop".parse().unwrap();
//! assert_eq!(cmd, Command::HardDrop);
//! assert!(GamePhase::Running.accepts_moves());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Default period of the terminal runner's tick in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (one row per second)
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const FALL_INTERVAL_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level in force
pub const POINTS_PER_LINE: u32 = 100;

/// Color token carried by a piece and by every cell it locks into.
///
/// Stored as packed `0xRRGGBB`. The engine never interprets it; it only
/// copies it from the catalog into the board so renderers can paint it.
///
/// # Examples
///
/// ```
/// use blockdrop_types::Color;
///
/// let c = Color::new(0xFF, 0x7F, 0x00);
/// assert_eq!(c.rgb(), (0xFF, 0x7F, 0x00));
/// assert_eq!(c.to_string(), "#FF7F00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Lifecycle of a game session.
///
/// ```text
/// Idle --start/togglePause--> Running <--togglePause--> Paused
/// Running --spawn collides--> GameOver --start--> Running
/// any --reset--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    /// Only a running game accepts piece movement and gravity.
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete commands accepted by a game session.
///
/// These are produced by input adapters (keyboard, scripts) and are
/// validated against the current [`GamePhase`]; a command that does not
/// apply in the current phase is a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Begin play (or resume / restart after game over)
    Start,
    /// Toggle between running and paused
    TogglePause,
    /// Throw the current game away and return to idle
    Reset,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One row of gravity; locks the piece if it cannot fall
    SoftDrop,
    /// Rotate piece 90° clockwise with best-effort correction
    Rotate,
    /// Drop to the lowest legal row and lock
    HardDrop,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Start,
        Command::TogglePause,
        Command::Reset,
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::HardDrop,
    ];

    /// Convert to the camelCase name used by scripts and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::TogglePause => "togglePause",
            Command::Reset => "reset",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command `{0}`")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a command name (case-insensitive)
    ///
    /// ```
    /// use blockdrop_types::Command;
    ///
    /// assert_eq!("moveLeft".parse::<Command>(), Ok(Command::MoveLeft));
    /// assert_eq!("TOGGLEPAUSE".parse::<Command>(), Ok(Command::TogglePause));
    /// assert!("hold".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "togglepause" | "pause" => Ok(Command::TogglePause),
            "reset" => Ok(Command::Reset),
            "moveleft" => Ok(Command::MoveLeft),
            "moveright" => Ok(Command::MoveRight),
            "softdrop" => Ok(Command::SoftDrop),
            "rotate" => Ok(Command::Rotate),
            "harddrop" => Ok(Command::HardDrop),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_constants() {
        assert_eq!(BASE_FALL_INTERVAL_MS, 1000);
        assert_eq!(FALL_INTERVAL_STEP_MS, 100);
        assert_eq!(MIN_FALL_INTERVAL_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(POINTS_PER_LINE, 100);
    }

    #[test]
    fn command_names_parse_back() {
        for cmd in Command::ALL {
            assert_eq!(cmd.as_str().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn unknown_command_reports_input() {
        let err = "hold".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command `hold`");
    }

    #[test]
    fn color_displays_as_six_hex_digits() {
        assert_eq!(Color::new(0, 255, 255).to_string(), "#00FFFF");
        assert_eq!(Color::new(0, 0, 0x0F).to_string(), "#00000F");
        assert_eq!(Color::new(0x0F, 0xFF, 0xFF).rgb(), (0x0F, 0xFF, 0xFF));
    }

    #[test]
    fn only_running_accepts_moves() {
        assert!(!GamePhase::Idle.accepts_moves());
        assert!(GamePhase::Running.accepts_moves());
        assert!(!GamePhase::Paused.accepts_moves());
        assert!(!GamePhase::GameOver.accepts_moves());
    }
}
