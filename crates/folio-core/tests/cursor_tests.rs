// Host-side tests for the smoothed cursor and its trail.

use folio_core::{CursorConfig, CursorTracker, CURSOR_SMOOTHING_MAX, CURSOR_SMOOTHING_MIN};

const FRAME: f32 = 1.0 / 60.0;

fn tracker() -> CursorTracker {
    CursorTracker::new(CursorConfig::default())
}

#[test]
fn first_pointer_sample_snaps_cursor() {
    let mut c = tracker();
    c.pointer_moved(320.0, 200.0);
    assert_eq!(c.current, glam::Vec2::new(320.0, 200.0));
    let p = c.tick(FRAME);
    assert_eq!(p, glam::Vec2::new(320.0, 200.0));
}

#[test]
fn tick_before_any_pointer_event_is_a_no_op() {
    let mut c = tracker();
    assert_eq!(c.tick(FRAME), glam::Vec2::ZERO);
    assert!(c.trail().is_empty());
}

#[test]
fn cursor_eases_toward_target_without_overshoot() {
    let mut c = tracker();
    c.pointer_moved(0.0, 0.0);
    c.pointer_moved(100.0, 0.0);
    let mut prev = 0.0;
    for _ in 0..240 {
        let p = c.tick(FRAME);
        assert!(p.x >= prev, "cursor moved backwards");
        assert!(p.x <= 100.0, "cursor overshot: {}", p.x);
        prev = p.x;
    }
    assert!((100.0 - prev) < 0.5, "cursor did not converge: {prev}");
}

#[test]
fn first_step_uses_speed_scaled_factor_within_bounds() {
    let mut c = tracker();
    c.pointer_moved(0.0, 0.0);
    c.pointer_moved(10.0, 0.0);
    let p = c.tick(FRAME);
    let k = p.x / 10.0;
    assert!(k >= CURSOR_SMOOTHING_MIN - 1e-4 && k <= CURSOR_SMOOTHING_MAX + 1e-4);
    assert!(c.smoothing_factor() >= CURSOR_SMOOTHING_MIN);
    assert!(c.smoothing_factor() <= CURSOR_SMOOTHING_MAX);
}

#[test]
fn fast_pointer_catches_up_quicker_than_slow_pointer() {
    let mut slow = tracker();
    slow.pointer_moved(0.0, 0.0);
    slow.pointer_moved(1.0, 0.0);
    slow.tick(FRAME);

    let mut fast = tracker();
    fast.pointer_moved(0.0, 0.0);
    fast.pointer_moved(400.0, 0.0);
    fast.tick(FRAME);

    assert!(fast.smoothing_factor() > slow.smoothing_factor());
    assert!((fast.smoothing_factor() - CURSOR_SMOOTHING_MAX).abs() < 1e-6);
}

#[test]
fn zero_or_negative_dt_leaves_cursor_in_place() {
    let mut c = tracker();
    c.pointer_moved(0.0, 0.0);
    c.pointer_moved(50.0, 50.0);
    assert_eq!(c.tick(0.0), glam::Vec2::ZERO);
    assert_eq!(c.tick(-1.0), glam::Vec2::ZERO);
    assert_eq!(c.tick(f32::NAN), glam::Vec2::ZERO);
}

#[test]
fn trail_is_capped_and_newest_first() {
    let mut c = tracker();
    c.pointer_moved(0.0, 0.0);
    c.pointer_moved(100.0, 0.0);
    for _ in 0..20 {
        c.tick(FRAME);
    }
    let trail = c.trail();
    assert_eq!(trail.len(), 8);
    assert_eq!(trail[0], c.current);
    for pair in trail.windows(2) {
        assert!(pair[0].x >= pair[1].x, "trail not ordered newest-first");
    }
}

#[test]
fn trail_markers_fade_with_age() {
    let mut c = tracker();
    c.pointer_moved(0.0, 0.0);
    c.pointer_moved(100.0, 100.0);
    for _ in 0..8 {
        c.tick(FRAME);
    }
    let markers: Vec<_> = c.trail_markers().collect();
    assert_eq!(markers.len(), 8);
    for pair in markers.windows(2) {
        assert!(pair[0].opacity > pair[1].opacity);
        assert!(pair[0].scale > pair[1].scale);
    }
    assert!(markers.iter().all(|m| m.opacity > 0.0 && m.scale > 0.0));
}

#[test]
fn disabled_trail_records_nothing() {
    let mut c = CursorTracker::new(CursorConfig {
        trail_len: 0,
        ..CursorConfig::default()
    });
    c.pointer_moved(5.0, 5.0);
    c.tick(FRAME);
    assert!(c.trail().is_empty());
}

#[test]
fn visibility_flag_round_trips() {
    let mut c = tracker();
    assert!(c.is_visible());
    c.set_visible(false);
    assert!(!c.is_visible());
    c.set_visible(true);
    assert!(c.is_visible());
}
