//! Progression tests - scoring, levels and gravity speed

use blockdrop::core::{fall_interval_for_level, ProgressionTracker};

#[test]
fn test_initial_state() {
    let p = ProgressionTracker::new();
    assert_eq!(p.score(), 0);
    assert_eq!(p.level(), 1);
    assert_eq!(p.lines(), 0);
    assert_eq!(p.fall_interval_ms(), 1000);
}

#[test]
fn test_first_line_scores_100() {
    let mut p = ProgressionTracker::new();
    p.on_lines_cleared(1);
    assert_eq!(p.score(), 100);
}

#[test]
fn test_reaching_ten_lines_levels_up() {
    let mut p = ProgressionTracker::new();
    for _ in 0..9 {
        assert!(!p.on_lines_cleared(1).leveled_up);
    }
    assert_eq!(p.level(), 1);

    assert!(p.on_lines_cleared(1).leveled_up);
    assert_eq!(p.lines(), 10);
    assert_eq!(p.level(), 2);
    assert_eq!(p.fall_interval_ms(), 900);
    assert_eq!(p.score(), 1000);
}

#[test]
fn test_multi_line_clear_scores_per_line() {
    let mut p = ProgressionTracker::new();
    assert_eq!(p.on_lines_cleared(4).points, 400);
    assert_eq!(p.on_lines_cleared(2).points, 200);
    assert_eq!(p.score(), 600);
}

#[test]
fn test_level_always_tracks_lines() {
    let mut p = ProgressionTracker::new();
    let clears = [1, 4, 3, 2, 4, 4, 1, 3, 4, 2, 4, 4, 4, 3, 1];
    for n in clears {
        let before = p.level();
        let result = p.on_lines_cleared(n);
        assert_eq!(p.level(), 1 + p.lines() / 10);
        assert_eq!(result.leveled_up, p.level() > before);
        assert_eq!(p.fall_interval_ms(), fall_interval_for_level(p.level()));
    }
}

#[test]
fn test_score_uses_level_before_the_clear() {
    let mut p = ProgressionTracker::new();
    p.on_lines_cleared(9);
    assert_eq!(p.score(), 900);
    // Crosses 10 lines: all four still scored at level 1.
    p.on_lines_cleared(4);
    assert_eq!(p.score(), 1300);
    assert_eq!(p.level(), 2);
}

#[test]
fn test_interval_floor() {
    let mut p = ProgressionTracker::new();
    for _ in 0..40 {
        p.on_lines_cleared(4);
    }
    assert_eq!(p.lines(), 160);
    assert_eq!(p.level(), 17);
    assert_eq!(p.fall_interval_ms(), 100);
}

#[test]
fn test_fall_interval_for_level_edges() {
    assert_eq!(fall_interval_for_level(0), 1000);
    assert_eq!(fall_interval_for_level(1), 1000);
    assert_eq!(fall_interval_for_level(5), 600);
    assert_eq!(fall_interval_for_level(9), 200);
    assert_eq!(fall_interval_for_level(10), 100);
    assert_eq!(fall_interval_for_level(u32::MAX), 100);
}
