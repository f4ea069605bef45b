//! Controller configuration.
//!
//! Every knob has a default taken from [`crate::constants`]. The web frontend
//! may override a few of them from `data-*` attributes on `<body>`; anything
//! malformed is logged and ignored so a typo in markup never breaks the page.

use crate::constants::*;
use crate::error::parse_attr;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub smoothing_min: f32,
    pub smoothing_max: f32,
    pub speed_ref_px_per_sec: f32,
    pub trail_len: usize,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing_min: CURSOR_SMOOTHING_MIN,
            smoothing_max: CURSOR_SMOOTHING_MAX,
            speed_ref_px_per_sec: CURSOR_SPEED_REF_PX_PER_SEC,
            trail_len: TRAIL_CAPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillConfig {
    pub trigger_threshold_px: f64,
    pub tick_ms: i32,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            trigger_threshold_px: SKILL_TRIGGER_THRESHOLD_PX,
            tick_ms: SKILL_TICK_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub batch_size: usize,
    pub stagger_ms: i32,
    pub settle_extra_ms: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            batch_size: REVEAL_BATCH_SIZE,
            stagger_ms: REVEAL_STAGGER_MS,
            settle_extra_ms: REVEAL_SETTLE_EXTRA_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerConfig {
    pub cursor: CursorConfig,
    pub skills: SkillConfig,
    pub reveal: RevealConfig,
}

pub const ATTR_CURSOR_TRAIL: &str = "data-cursor-trail";
pub const ATTR_CURSOR_SMOOTHING_MIN: &str = "data-cursor-smoothing-min";
pub const ATTR_CURSOR_SMOOTHING_MAX: &str = "data-cursor-smoothing-max";
pub const ATTR_REVEAL_BATCH: &str = "data-reveal-batch";

impl ControllerConfig {
    /// Build a config from defaults plus whatever `lookup` returns for the
    /// override attributes.
    pub fn from_overrides<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(n) = read::<usize, _>(&lookup, ATTR_CURSOR_TRAIL) {
            cfg.cursor.trail_len = n.min(TRAIL_CAPACITY);
        }
        if let Some(k) = read::<f32, _>(&lookup, ATTR_CURSOR_SMOOTHING_MIN) {
            cfg.cursor.smoothing_min = k;
        }
        if let Some(k) = read::<f32, _>(&lookup, ATTR_CURSOR_SMOOTHING_MAX) {
            cfg.cursor.smoothing_max = k;
        }
        if let Some(n) = read::<usize, _>(&lookup, ATTR_REVEAL_BATCH) {
            cfg.reveal.batch_size = n.clamp(1, REVEAL_BATCH_SIZE);
        }
        cfg.sanitize();
        cfg
    }

    fn sanitize(&mut self) {
        let c = &mut self.cursor;
        let valid = |k: f32| k.is_finite() && k > 0.0 && k <= 1.0;
        let in_range = |k: f32| k.clamp(CURSOR_SMOOTHING_MIN, CURSOR_SMOOTHING_MAX);
        c.smoothing_min = if valid(c.smoothing_min) {
            in_range(c.smoothing_min)
        } else {
            CURSOR_SMOOTHING_MIN
        };
        c.smoothing_max = if valid(c.smoothing_max) {
            in_range(c.smoothing_max)
        } else {
            CURSOR_SMOOTHING_MAX
        };
        if c.smoothing_min > c.smoothing_max {
            std::mem::swap(&mut c.smoothing_min, &mut c.smoothing_max);
        }
    }
}

fn read<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name);
    match parse_attr::<T>(name, raw.as_deref()) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[config] {e}; using default");
            None
        }
    }
}
