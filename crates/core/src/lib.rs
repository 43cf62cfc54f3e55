//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation of a
//! falling-block puzzle. It has no dependencies on terminals or I/O; adapters
//! feed it commands and elapsed time and read it back through snapshots.
//!
//! - **Deterministic**: a seeded piece factory replays identical games
//! - **Testable**: every rule is reachable without a terminal
//! - **Allocation-free hot path**: boards, shapes and snapshots are fixed-size
//!
//! # Module Structure
//!
//! - [`shape`]: square occupancy matrices and in-place clockwise rotation
//! - [`catalog`]: the seven piece kinds with their shapes and colors
//! - [`piece`]: a shape instance with a board position
//! - [`factory`]: uniform random piece generation and the [`PieceSource`] seam
//! - [`board`]: 10x20 grid with collision, merge and line clearing
//! - [`rotation`]: rotation with best-effort horizontal correction
//! - [`controller`]: the falling piece, movement, drops and the lock sequence
//! - [`progression`]: score, level, lines and gravity speed
//! - [`session`]: the lifecycle state machine that owns everything above
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - **Randomizer**: every piece is drawn uniformly and independently
//! - **Rotation**: clockwise only, with a leftward shift search on collision
//! - **Locking**: immediate, as soon as a piece cannot fall one more row
//! - **Scoring**: 100 points per line times the level before the clear
//! - **Levels**: one level per 10 lines; gravity speeds up by 100 ms per level
//!
//! # Example
//!
//! ```
//! use blockdrop_core::GameSession;
//! use blockdrop_core::types::{Command, GamePhase};
//!
//! let mut game = GameSession::with_seed(12345);
//! game.apply_command(Command::Start);
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::HardDrop);
//!
//! let lock = game.take_last_lock().unwrap();
//! assert_eq!(lock.lines_cleared, 0);
//! assert_eq!(game.snapshot().phase, GamePhase::Running);
//! ```
//!
//! # Timing
//!
//! The session has no clock of its own. Call
//! [`GameSession::tick`](session::GameSession::tick) with the elapsed
//! milliseconds since the previous call, typically once per frame.

pub mod board;
pub mod catalog;
pub mod controller;
pub mod factory;
pub mod piece;
pub mod progression;
pub mod rotation;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, Grid};
pub use catalog::{CatalogEntry, PieceKind, CATALOG};
pub use controller::{ActivePieceController, DropResult, LockOutcome};
pub use factory::{PieceFactory, PieceSource, ScriptedSource};
pub use piece::{Piece, Position};
pub use progression::{fall_interval_for_level, ClearScore, ProgressionTracker};
pub use rotation::{NoKick, RotationSystem, ShiftKick};
pub use session::GameSession;
pub use shape::ShapeMatrix;
pub use snapshot::{GameSnapshot, PieceSnapshot};
