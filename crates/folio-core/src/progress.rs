//! Skill-bar progress counters and the "animate once when visible" gate.

use crate::constants::{SKILL_COUNTER_STEPS, SKILL_PERCENT_MAX};
use crate::error::parse_attr;
use fnv::FnvHashSet;

/// Parse a `data-percent` value. Missing or malformed input reads as 0;
/// fractional values are rounded and the result is clamped to 0..=100.
pub fn parse_percent(raw: Option<&str>) -> u32 {
    match parse_attr::<f64>("data-percent", raw) {
        Ok(Some(v)) if v.is_finite() => v.round().clamp(0.0, SKILL_PERCENT_MAX as f64) as u32,
        Ok(_) => 0,
        Err(e) => {
            log::debug!("[skills] {e}; treating as 0");
            0
        }
    }
}

#[inline]
pub fn counter_step(target: u32) -> u32 {
    ((target as f64 / SKILL_COUNTER_STEPS).round() as u32).max(1)
}

/// True once the element's top edge is `threshold` above the viewport bottom.
#[inline]
pub fn in_trigger_zone(rect_top: f64, viewport_height: f64, threshold: f64) -> bool {
    rect_top < viewport_height - threshold
}

/// Offset of the floating value badge from the bar's right edge.
#[inline]
pub fn badge_right_percent(value: u32) -> u32 {
    SKILL_PERCENT_MAX.saturating_sub(value)
}

/// Counts from 0 toward `target` in fixed steps. Each call to `next` is one
/// timer tick; the last value yielded is exactly `target`.
#[derive(Clone, Debug)]
pub struct ProgressCounter {
    current: u32,
    target: u32,
    step: u32,
    finished: bool,
}

impl ProgressCounter {
    pub fn new(target: u32) -> Self {
        Self {
            current: 0,
            target,
            step: counter_step(target),
            finished: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for ProgressCounter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
        Some(self.current)
    }
}

/// Remembers which bars already ran their animation.
#[derive(Clone, Debug, Default)]
pub struct SkillBarTracker {
    animated: FnvHashSet<usize>,
}

impl SkillBarTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animated(&self, bar: usize) -> bool {
        self.animated.contains(&bar)
    }

    /// Decide whether `bar` should start animating now, marking it if so.
    pub fn try_trigger(
        &mut self,
        bar: usize,
        rect_top: f64,
        viewport_height: f64,
        threshold: f64,
    ) -> bool {
        if self.is_animated(bar) || !in_trigger_zone(rect_top, viewport_height, threshold) {
            return false;
        }
        self.animated.insert(bar)
    }

    pub fn animated_count(&self) -> usize {
        self.animated.len()
    }
}
