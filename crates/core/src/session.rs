//! Game session - the explicit owner of one game
//!
//! A [`GameSession`] holds the board, the active piece controller, the
//! progression counters and the lifecycle phase. Adapters drive it with two
//! kinds of input and read it back through snapshots:
//!
//! - discrete [`Command`]s via [`GameSession::apply_command`]
//! - elapsed time via [`GameSession::tick`]
//!
//! Commands that do not apply in the current phase are no-ops and return
//! `false`; nothing in here fails.
//!
//! # Phases
//!
//! | Phase | start | togglePause | reset | piece commands / tick |
//! |-------|-------|-------------|-------|-----------------------|
//! | Idle | Running | Running | Idle | ignored |
//! | Running | ignored | Paused | Idle | applied |
//! | Paused | Running | Running | Idle | ignored |
//! | GameOver | new game, Running | ignored | Idle | ignored |
//!
//! Reset always starts over with an empty board and two fresh pieces.
//!
//! # Gravity
//!
//! While running, `tick` accumulates elapsed milliseconds into a drop
//! counter. Once the counter is strictly greater than the current fall
//! interval, one soft drop is applied and the counter returns to 0. Pausing
//! freezes the counter; resuming continues from where it stopped.
//!
//! # Example
//!
//! ```
//! use blockdrop_core::GameSession;
//! use blockdrop_core::types::{Command, GamePhase};
//!
//! let mut game = GameSession::with_seed(7);
//! assert_eq!(game.phase(), GamePhase::Idle);
//!
//! game.apply_command(Command::Start);
//! game.apply_command(Command::HardDrop);
//! assert_eq!(game.board().filled_count(), 4);
//!
//! // Gravity fires after more than one second at level 1.
//! assert!(!game.tick(1000));
//! assert!(game.tick(1));
//! ```

use log::info;

use crate::board::Board;
use crate::controller::{ActivePieceController, DropResult, LockOutcome};
use crate::factory::{PieceFactory, PieceSource};
use crate::piece::Piece;
use crate::progression::ProgressionTracker;
use crate::rotation::{RotationSystem, ShiftKick};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GamePhase};

#[derive(Debug, Clone)]
pub struct GameSession<S = PieceFactory, R = ShiftKick> {
    board: Board,
    controller: ActivePieceController<S, R>,
    progression: ProgressionTracker,
    phase: GamePhase,
    drop_counter_ms: u32,
    last_lock: Option<LockOutcome>,
}

impl GameSession {
    /// New idle session with an entropy-seeded piece factory
    pub fn new() -> Self {
        Self::with_parts(Board::new(), PieceFactory::new(), ShiftKick)
    }

    /// New idle session with a deterministic piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(Board::new(), PieceFactory::with_seed(seed), ShiftKick)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PieceSource, R: RotationSystem> GameSession<S, R> {
    /// Build a session around an existing board and custom policies.
    ///
    /// The session starts Idle with both pieces drawn from `source`.
    pub fn with_parts(board: Board, source: S, rotation: R) -> Self {
        Self {
            board,
            controller: ActivePieceController::new(source, rotation),
            progression: ProgressionTracker::new(),
            phase: GamePhase::Idle,
            drop_counter_ms: 0,
            last_lock: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn progression(&self) -> &ProgressionTracker {
        &self.progression
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.progression.fall_interval_ms()
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// The falling piece
    pub fn active(&self) -> &Piece {
        self.controller.current()
    }

    /// The piece that spawns after the next lock
    pub fn next_piece(&self) -> &Piece {
        self.controller.on_deck()
    }

    /// Take the outcome of the most recent lock, if any happened since the
    /// last call.
    pub fn take_last_lock(&mut self) -> Option<LockOutcome> {
        self.last_lock.take()
    }

    /// Dispatch a command. Returns `true` if it changed anything.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    /// Begin play, resume from pause, or start a new game after game over.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => false,
            GamePhase::Paused => {
                info!("resumed");
                self.phase = GamePhase::Running;
                true
            }
            GamePhase::GameOver => {
                self.reinitialize();
                self.begin();
                true
            }
            GamePhase::Idle => {
                self.begin();
                true
            }
        }
    }

    /// Running <-> Paused. From Idle this starts play.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                info!("paused at drop_counter_ms={}", self.drop_counter_ms);
                self.phase = GamePhase::Paused;
                true
            }
            GamePhase::Paused => {
                info!("resumed");
                self.phase = GamePhase::Running;
                true
            }
            GamePhase::Idle => {
                self.begin();
                true
            }
            GamePhase::GameOver => false,
        }
    }

    /// Throw the current game away and return to Idle.
    pub fn reset(&mut self) -> bool {
        self.reinitialize();
        self.phase = GamePhase::Idle;
        info!("reset");
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.phase.accepts_moves() && self.controller.move_left(&self.board)
    }

    pub fn move_right(&mut self) -> bool {
        self.phase.accepts_moves() && self.controller.move_right(&self.board)
    }

    pub fn rotate(&mut self) -> bool {
        self.phase.accepts_moves() && self.controller.rotate(&self.board)
    }

    /// One row of gravity, locking if the piece cannot fall.
    pub fn soft_drop(&mut self) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }
        match self
            .controller
            .soft_drop(&mut self.board, &mut self.progression)
        {
            DropResult::Moved => {}
            DropResult::Locked(outcome) => self.record_lock(outcome),
        }
        true
    }

    pub fn hard_drop(&mut self) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }
        let outcome = self
            .controller
            .hard_drop(&mut self.board, &mut self.progression);
        self.record_lock(outcome);
        true
    }

    /// Advance simulated time.
    ///
    /// Returns `true` if a gravity step was applied.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms <= self.progression.fall_interval_ms() {
            return false;
        }
        self.drop_counter_ms = 0;
        self.soft_drop()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = (*self.controller.current()).into();
        out.next = (*self.controller.on_deck()).into();
        out.score = self.progression.score();
        out.level = self.progression.level();
        out.lines = self.progression.lines();
        out.fall_interval_ms = self.progression.fall_interval_ms();
        out.drop_counter_ms = self.drop_counter_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Enter Running, or GameOver straight away if the first piece
    /// already collides.
    fn begin(&mut self) {
        if self.board.collides(self.controller.current()) {
            info!("game over: spawn blocked at start");
            self.phase = GamePhase::GameOver;
        } else {
            info!("started");
            self.phase = GamePhase::Running;
        }
    }

    fn reinitialize(&mut self) {
        self.board.clear();
        self.progression.reset();
        self.controller.respawn();
        self.drop_counter_ms = 0;
        self.last_lock = None;
    }

    fn record_lock(&mut self, outcome: LockOutcome) {
        if outcome.game_over {
            info!(
                "game over: score={} level={} lines={}",
                self.progression.score(),
                self.progression.level(),
                self.progression.lines()
            );
            self.phase = GamePhase::GameOver;
        }
        self.last_lock = Some(outcome);
    }
}
