//! Integration tests for the game session lifecycle

use blockdrop::core::{Board, GameSession, PieceKind, PieceSource, ScriptedSource, ShiftKick};
use blockdrop::types::{Color, Command, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Color = Color::new(0x80, 0x80, 0x80);

fn session_with(board: Board, kinds: &[PieceKind]) -> GameSession<ScriptedSource, ShiftKick> {
    GameSession::with_parts(board, ScriptedSource::new(kinds.to_vec()), ShiftKick)
}

/// Rows 2..=19 filled except the last column: nothing can clear and the
/// spawn rows stay open.
fn stacked_board() -> Board {
    let mut board = Board::new();
    for y in 2..BOARD_HEIGHT as i32 {
        for x in 0..(BOARD_WIDTH - 1) as i32 {
            board.set(x, y, Some(GRAY));
        }
    }
    board
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameSession::with_seed(12345);
    assert_eq!(game.phase(), GamePhase::Idle);

    assert!(game.apply_command(Command::Start));
    assert_eq!(game.phase(), GamePhase::Running);
    assert!(!game.apply_command(Command::Start));

    assert!(game.apply_command(Command::TogglePause));
    assert_eq!(game.phase(), GamePhase::Paused);
    assert!(game.apply_command(Command::TogglePause));
    assert_eq!(game.phase(), GamePhase::Running);

    assert!(game.apply_command(Command::Reset));
    assert_eq!(game.phase(), GamePhase::Idle);
}

#[test]
fn test_toggle_pause_from_idle_starts() {
    let mut game = GameSession::with_seed(1);
    assert!(game.toggle_pause());
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn test_paused_rejects_piece_commands() {
    let mut game = session_with(Board::new(), &[PieceKind::T]);
    game.start();
    game.toggle_pause();
    let before = *game.active();
    for cmd in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::HardDrop,
    ] {
        assert!(!game.apply_command(cmd), "{cmd} accepted while paused");
    }
    assert_eq!(*game.active(), before);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_game_over_when_spawn_region_blocked() {
    let mut game = session_with(stacked_board(), &[PieceKind::O]);
    game.start();
    assert_eq!(game.phase(), GamePhase::Running);

    // The O can only sit on rows 0..=1; it locks there and the next O collides.
    assert!(game.soft_drop());
    assert_eq!(game.phase(), GamePhase::GameOver);

    let lock = game.take_last_lock().unwrap();
    assert!(lock.game_over);
    assert_eq!(lock.position.y, 0);

    assert!(!game.apply_command(Command::MoveLeft));
    assert!(!game.apply_command(Command::Rotate));
    assert!(!game.apply_command(Command::SoftDrop));
    assert!(!game.tick(10_000));
}

#[test]
fn test_start_on_blocked_board_is_immediate_game_over() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, 1, Some(GRAY));
    }
    let mut game = session_with(board, &[PieceKind::T]);
    assert!(game.start());
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(!game.move_left());

    // Start from game over begins a clean game.
    assert!(game.start());
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_hard_drop_lands_on_floor() {
    for kind in PieceKind::ALL {
        let mut game = session_with(Board::new(), &[kind]);
        game.start();
        assert!(game.hard_drop());
        let lock = game.take_last_lock().unwrap();
        let piece_height = kind.shape().occupied_bottom() as i32;
        let top_row = kind.shape().occupied().map(|(_, y)| y).min().unwrap() as i32;
        assert_eq!(
            lock.position.y + piece_height,
            BOARD_HEIGHT as i32,
            "{kind} did not reach the floor"
        );
        assert_eq!(game.board().filled_count(), 4);
        // Lowest filled row is the floor, highest is floor - height + 1.
        let occupied_rows = piece_height - top_row;
        assert!(game
            .board()
            .row(BOARD_HEIGHT - occupied_rows as usize)
            .unwrap()
            .iter()
            .any(Option::is_some));
    }
}

#[test]
fn test_hard_drop_o_lands_at_height_minus_two() {
    let mut game = session_with(Board::new(), &[PieceKind::O]);
    game.start();
    game.hard_drop();
    let lock = game.take_last_lock().unwrap();
    assert_eq!(lock.position.y, BOARD_HEIGHT as i32 - 2);
    assert!(game.board().is_occupied(4, 18));
    assert!(game.board().is_occupied(5, 19));
}

#[test]
fn test_hard_drop_equals_repeated_soft_drops() {
    let mut hard = session_with(Board::new(), &[PieceKind::S, PieceKind::J]);
    let mut soft = session_with(Board::new(), &[PieceKind::S, PieceKind::J]);
    hard.start();
    soft.start();

    hard.hard_drop();
    while soft.take_last_lock().is_none() {
        soft.soft_drop();
    }
    assert_eq!(hard.board(), soft.board());
    assert_eq!(hard.active(), soft.active());
}

#[test]
fn test_line_clear_through_session() {
    // Bottom row full except the four cells a horizontal I fills.
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i32 {
        if !(3..=6).contains(&x) {
            board.set(x, 19, Some(GRAY));
        }
    }
    let mut game = session_with(board, &[PieceKind::I]);
    game.start();
    game.hard_drop();

    let lock = game.take_last_lock().unwrap();
    assert_eq!(lock.lines_cleared, 1);
    assert_eq!(lock.score_gained, 100);
    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_gravity_timing_and_pause() {
    let mut game = session_with(Board::new(), &[PieceKind::T]);
    game.start();

    // 62 ticks of 16ms = 992ms: no drop yet.
    for _ in 0..62 {
        assert!(!game.tick(16));
    }
    // 1008ms > 1000ms: one drop.
    assert!(game.tick(16));
    assert_eq!(game.active().pos.y, 1);
    assert_eq!(game.drop_counter_ms(), 0);

    game.tick(500);
    game.toggle_pause();
    game.tick(5_000);
    game.toggle_pause();
    assert_eq!(game.drop_counter_ms(), 500);
}

#[test]
fn test_gravity_eventually_locks_and_spawns_next() {
    let mut game = session_with(Board::new(), &[PieceKind::O, PieceKind::Z]);
    game.start();
    let mut drops = 0;
    while game.take_last_lock().is_none() {
        if game.tick(1001) {
            drops += 1;
        }
        assert!(drops < 100);
    }
    assert_eq!(drops, 19);
    assert_eq!(game.active().kind, PieceKind::Z);
    assert_eq!(game.next_piece().kind, PieceKind::O);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let mut a = GameSession::with_seed(99);
    let mut b = GameSession::with_seed(99);
    let script = [
        Command::Start,
        Command::MoveLeft,
        Command::Rotate,
        Command::HardDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::HardDrop,
        Command::SoftDrop,
        Command::HardDrop,
    ];
    for cmd in script {
        a.apply_command(cmd);
        b.apply_command(cmd);
        a.tick(16);
        b.tick(16);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_reset_draws_fresh_pieces_and_clears_progress() {
    let mut board = Board::new();
    for x in 0..6 {
        board.set(x, 19, Some(GRAY));
    }
    let mut source = ScriptedSource::new(vec![PieceKind::L, PieceKind::S, PieceKind::T]);
    // Burn one so the session's first piece is S.
    source.next_piece();
    let mut game = GameSession::with_parts(board, source, ShiftKick);
    assert_eq!(game.active().kind, PieceKind::S);

    game.start();
    game.hard_drop();
    game.tick(300);
    // After the lock: T falling, L on deck.
    assert_eq!(game.active().kind, PieceKind::T);
    assert_eq!(game.next_piece().kind, PieceKind::L);

    game.reset();

    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.drop_counter_ms(), 0);
    assert_eq!(game.active().kind, PieceKind::S);
    assert_eq!(game.next_piece().kind, PieceKind::T);
    assert_eq!(game.active().pos.y, 0);
}

#[test]
fn test_snapshot_exposes_hud_values() {
    let mut game = session_with(Board::new(), &[PieceKind::J, PieceKind::Z]);
    game.start();
    game.tick(250);
    let snap = game.snapshot();
    assert_eq!(snap.active.kind, PieceKind::J);
    assert_eq!(snap.next.kind, PieceKind::Z);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.level, 1);
    assert_eq!(snap.lines, 0);
    assert_eq!(snap.fall_interval_ms, 1000);
    assert_eq!(snap.drop_counter_ms, 250);
    assert_eq!(snap.phase, GamePhase::Running);
    assert!(snap.board.iter().flatten().all(Option::is_none));
}
