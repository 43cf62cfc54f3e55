//! Active piece controller - the falling piece and what can be done with it
//!
//! Owns the current piece, the pre-generated on-deck piece, the piece source
//! and the rotation policy. Every translation or rotation is validated
//! against the [`Board`] before it is committed; a rejected move leaves the
//! piece exactly where it was.
//!
//! Phase gating (paused, game over) is the session's job. The controller
//! assumes it is only called while a game is running.
//!
//! # Lock sequence
//!
//! When a piece can no longer fall (soft drop into an obstacle, or any hard
//! drop) the controller:
//!
//! 1. merges the piece into the board at its last legal position
//! 2. promotes the on-deck piece and draws a new on-deck piece
//! 3. clears full rows and feeds the count to the [`ProgressionTracker`]
//! 4. tests the new piece at its spawn position; a collision means game over

use log::debug;

use crate::board::Board;
use crate::catalog::PieceKind;
use crate::factory::{PieceFactory, PieceSource};
use crate::piece::{Piece, Position};
use crate::progression::ProgressionTracker;
use crate::rotation::{RotationSystem, ShiftKick};

/// What one lock did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Kind of the piece that locked
    pub piece: PieceKind,
    /// Where it locked
    pub position: Position,
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub leveled_up: bool,
    /// The newly spawned piece collides at its spawn position
    pub game_over: bool,
}

/// Result of a one-row gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece moved down one row
    Moved,
    /// The piece could not move and was locked
    Locked(LockOutcome),
}

impl DropResult {
    pub fn lock(&self) -> Option<LockOutcome> {
        match self {
            DropResult::Moved => None,
            DropResult::Locked(outcome) => Some(*outcome),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivePieceController<S = PieceFactory, R = ShiftKick> {
    current: Piece,
    on_deck: Piece,
    source: S,
    rotation: R,
}

impl<S: PieceSource, R: RotationSystem> ActivePieceController<S, R> {
    /// Draw the current and on-deck pieces from `source`
    pub fn new(mut source: S, rotation: R) -> Self {
        let current = source.next_piece();
        let on_deck = source.next_piece();
        Self {
            current,
            on_deck,
            source,
            rotation,
        }
    }

    /// The falling piece
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The piece that spawns after the next lock
    pub fn on_deck(&self) -> &Piece {
        &self.on_deck
    }

    /// Discard both pieces and draw fresh ones
    pub fn respawn(&mut self) {
        self.current = self.source.next_piece();
        self.on_deck = self.source.next_piece();
    }

    /// Shift one column left (`dir < 0`) or right (`dir > 0`).
    ///
    /// Returns `false` if the shift would collide.
    pub fn move_horizontal(&mut self, dir: i32, board: &Board) -> bool {
        let moved = self.current.shifted(dir.signum(), 0);
        if dir == 0 || board.collides(&moved) {
            return false;
        }
        self.current = moved;
        true
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.move_horizontal(-1, board)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.move_horizontal(1, board)
    }

    /// Rotate clockwise through the rotation system
    pub fn rotate(&mut self, board: &Board) -> bool {
        self.rotation.rotate(&mut self.current, board)
    }

    /// Row the current piece would land on if dropped straight down
    pub fn landing_y(&self, board: &Board) -> i32 {
        let mut piece = self.current;
        while !board.collides(&piece.shifted(0, 1)) {
            piece.pos.y += 1;
        }
        piece.pos.y
    }

    /// One row of gravity; locks the piece when it cannot fall.
    pub fn soft_drop(
        &mut self,
        board: &mut Board,
        progression: &mut ProgressionTracker,
    ) -> DropResult {
        let moved = self.current.shifted(0, 1);
        if board.collides(&moved) {
            return DropResult::Locked(self.lock(board, progression));
        }
        self.current = moved;
        DropResult::Moved
    }

    /// Drop to the lowest legal row and lock.
    pub fn hard_drop(
        &mut self,
        board: &mut Board,
        progression: &mut ProgressionTracker,
    ) -> LockOutcome {
        self.current.pos.y = self.landing_y(board);
        self.lock(board, progression)
    }

    /// Lock the current piece where it is and spawn the next one.
    pub fn lock(&mut self, board: &mut Board, progression: &mut ProgressionTracker) -> LockOutcome {
        let locked = self.current;
        board.merge(&locked);

        let refill = self.source.next_piece();
        self.current = std::mem::replace(&mut self.on_deck, refill);

        let cleared = board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let score = progression.on_lines_cleared(lines_cleared);

        let game_over = board.collides(&self.current);

        debug!(
            "locked {} at ({}, {}): lines={} points={}",
            locked.kind, locked.pos.x, locked.pos.y, lines_cleared, score.points
        );

        LockOutcome {
            piece: locked.kind,
            position: locked.pos,
            lines_cleared,
            score_gained: score.points,
            leveled_up: score.leveled_up,
            game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ScriptedSource;
    use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

    const GRAY: Color = Color::new(0x80, 0x80, 0x80);

    fn controller(kinds: &[PieceKind]) -> ActivePieceController<ScriptedSource, ShiftKick> {
        ActivePieceController::new(ScriptedSource::new(kinds.to_vec()), ShiftKick)
    }

    #[test]
    fn test_new_draws_current_and_on_deck() {
        let c = controller(&[PieceKind::T, PieceKind::I]);
        assert_eq!(c.current().kind, PieceKind::T);
        assert_eq!(c.on_deck().kind, PieceKind::I);
    }

    #[test]
    fn test_move_stops_at_walls() {
        let board = Board::new();
        let mut c = controller(&[PieceKind::O]);
        let mut moves = 0;
        while c.move_left(&board) {
            moves += 1;
        }
        assert_eq!(moves, 4);
        assert_eq!(c.current().pos.x, 0);

        let mut moves = 0;
        while c.move_right(&board) {
            moves += 1;
        }
        assert_eq!(moves, 8);
        assert_eq!(c.current().pos.x, 8);
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut board = Board::new();
        let mut progression = ProgressionTracker::new();
        let mut c = controller(&[PieceKind::O, PieceKind::T]);

        for _ in 0..18 {
            assert_eq!(c.soft_drop(&mut board, &mut progression), DropResult::Moved);
        }
        let outcome = c
            .soft_drop(&mut board, &mut progression)
            .lock()
            .expect("O at the floor locks");
        assert_eq!(outcome.piece, PieceKind::O);
        assert_eq!(outcome.position, Position::new(4, 18));
        assert!(!outcome.game_over);
        assert_eq!(c.current().kind, PieceKind::T);
        assert_eq!(c.on_deck().kind, PieceKind::O);
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let mut board = Board::new();
        let mut progression = ProgressionTracker::new();
        let mut c = controller(&[PieceKind::O]);

        let outcome = c.hard_drop(&mut board, &mut progression);
        assert_eq!(outcome.position.y, (BOARD_HEIGHT - 2) as i32);
        assert!(board.is_occupied(4, 18));
        assert!(board.is_occupied(5, 19));
    }

    #[test]
    fn test_lock_clears_rows_and_scores() {
        let mut board = Board::new();
        let mut progression = ProgressionTracker::new();
        // Bottom row full except the two columns the O will fill.
        for x in 0..BOARD_WIDTH as i32 {
            if x != 4 && x != 5 {
                board.set(x, 19, Some(GRAY));
            }
        }
        let mut c = controller(&[PieceKind::O]);
        let outcome = c.hard_drop(&mut board, &mut progression);

        assert_eq!(outcome.lines_cleared, 1);
        assert_eq!(outcome.score_gained, 100);
        assert_eq!(progression.score(), 100);
        // Upper half of the O survived and slid down.
        assert!(board.is_occupied(4, 19));
        assert!(board.is_occupied(5, 19));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_lock_reports_game_over_when_spawn_blocked() {
        let mut board = Board::new();
        let mut progression = ProgressionTracker::new();
        // Column 9 stays open so nothing clears.
        for y in 2..BOARD_HEIGHT as i32 {
            for x in 0..(BOARD_WIDTH - 1) as i32 {
                board.set(x, y, Some(GRAY));
            }
        }
        let mut c = controller(&[PieceKind::O]);
        let outcome = c.hard_drop(&mut board, &mut progression);
        assert_eq!(outcome.position.y, 0);
        assert!(outcome.game_over);
    }
}
