//! Smoothed cursor follower with a short trail of lagged positions.
//!
//! Pointer events only record a target; the animation loop calls
//! [`CursorTracker::tick`] once per frame to ease the rendered position toward
//! it. The smoothing factor grows with pointer speed so fast flicks don't
//! leave the cursor far behind.

use crate::config::CursorConfig;
use crate::constants::{
    CURSOR_MAX_DT_SEC, CURSOR_REFERENCE_FPS, TRAIL_CAPACITY, TRAIL_MAX_OPACITY, TRAIL_MIN_SCALE,
};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct CursorTracker {
    pub current: Vec2,
    pub target: Vec2,
    cfg: CursorConfig,
    // newest first
    trail: SmallVec<[Vec2; TRAIL_CAPACITY]>,
    prev_target: Vec2,
    speed: f32,
    has_target: bool,
    visible: bool,
}

/// Render parameters for one trail marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMarker {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl CursorTracker {
    pub fn new(cfg: CursorConfig) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            cfg,
            trail: SmallVec::new(),
            prev_target: Vec2::ZERO,
            speed: 0.0,
            has_target: false,
            visible: true,
        }
    }

    /// Record the latest pointer coordinates. The first ever sample snaps the
    /// cursor so it doesn't sweep in from the page origin.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        if !self.has_target {
            self.current = p;
            self.prev_target = p;
            self.has_target = true;
        }
        self.target = p;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_target(&self) -> bool {
        self.has_target
    }

    /// Advance one animation frame and return the new rendered position.
    pub fn tick(&mut self, dt_sec: f32) -> Vec2 {
        if !self.has_target || !(dt_sec > 0.0) {
            return self.current;
        }
        let dt = dt_sec.min(CURSOR_MAX_DT_SEC);
        self.speed = (self.target - self.prev_target).length() / dt;
        self.prev_target = self.target;

        let k = frame_scaled(self.smoothing_factor(), dt);
        self.current += (self.target - self.current) * k;

        if self.cfg.trail_len > 0 {
            // stay within the inline capacity
            self.trail.truncate(self.cfg.trail_len.min(TRAIL_CAPACITY) - 1);
            self.trail.insert(0, self.current);
        }
        self.current
    }

    /// Per-frame smoothing factor for the current pointer speed.
    pub fn smoothing_factor(&self) -> f32 {
        smoothing_for_speed(
            self.speed,
            self.cfg.smoothing_min,
            self.cfg.smoothing_max,
            self.cfg.speed_ref_px_per_sec,
        )
    }

    /// Pointer speed measured over the last frame, in px/s.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Past rendered positions, newest first.
    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn trail_markers(&self) -> impl Iterator<Item = TrailMarker> + '_ {
        let n = self.cfg.trail_len.max(1) as f32;
        self.trail.iter().enumerate().map(move |(i, p)| {
            let fade = 1.0 - (i as f32 + 1.0) / (n + 1.0);
            TrailMarker {
                position: *p,
                scale: TRAIL_MIN_SCALE + (1.0 - TRAIL_MIN_SCALE) * fade,
                opacity: TRAIL_MAX_OPACITY * fade,
            }
        })
    }
}

#[inline]
pub fn smoothing_for_speed(speed: f32, k_min: f32, k_max: f32, speed_ref: f32) -> f32 {
    let t = if speed_ref > 0.0 {
        (speed / speed_ref).clamp(0.0, 1.0)
    } else {
        1.0
    };
    k_min + (k_max - k_min) * t
}

/// Convert a per-60Hz-frame factor into the factor for a frame of `dt_sec`.
#[inline]
pub fn frame_scaled(k: f32, dt_sec: f32) -> f32 {
    let frames = dt_sec * CURSOR_REFERENCE_FPS;
    (1.0 - (1.0 - k.clamp(0.0, 1.0)).powf(frames)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_scaled_matches_k_at_reference_rate() {
        let k = frame_scaled(0.1, 1.0 / 60.0);
        assert!((k - 0.1).abs() < 1e-5);
        // two half-length frames cover the same ground as one full frame
        let half = frame_scaled(0.1, 1.0 / 120.0);
        let combined = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((combined - 0.1).abs() < 1e-5);
    }

    #[test]
    fn smoothing_saturates_at_reference_speed() {
        assert!((smoothing_for_speed(0.0, 0.08, 0.15, 1000.0) - 0.08).abs() < 1e-6);
        assert!((smoothing_for_speed(5000.0, 0.08, 0.15, 1000.0) - 0.15).abs() < 1e-6);
        let mid = smoothing_for_speed(500.0, 0.08, 0.15, 1000.0);
        assert!((mid - 0.115).abs() < 1e-6);
    }

    #[test]
    fn full_trail_stays_inline() {
        let mut c = CursorTracker::new(CursorConfig::default());
        c.pointer_moved(0.0, 0.0);
        c.pointer_moved(300.0, 120.0);
        for _ in 0..50 {
            c.tick(1.0 / 60.0);
            assert!(c.trail.len() <= TRAIL_CAPACITY);
            assert!(!c.trail.spilled(), "trail moved to the heap");
        }
        assert_eq!(c.trail[0], c.current);
    }
}
