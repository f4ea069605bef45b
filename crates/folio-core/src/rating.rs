use crate::constants::{RATING_MAX, RATING_MIN, RATING_STARS};
use rand::Rng;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter for any `rand` generator (seeded `StdRng` in tests).
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarCounts {
    pub fn total(&self) -> u8 {
        self.full + self.half + self.empty
    }
}

/// A displayed star rating, already rounded to one decimal and clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Self {
        let rounded = (value * 10.0).round() / 10.0;
        Rating(rounded.clamp(RATING_MIN, RATING_MAX))
    }

    /// Use `raw` when it parses to a number, otherwise draw one in range.
    pub fn from_attr(raw: Option<&str>, rng: &mut impl RandomSource) -> Self {
        match raw.and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(v) if v.is_finite() => Rating::new(v),
            _ => Rating::random(rng),
        }
    }

    pub fn random(rng: &mut impl RandomSource) -> Self {
        let u = rng.next_unit().clamp(0.0, 1.0);
        Rating::new(RATING_MIN + u * (RATING_MAX - RATING_MIN))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn stars(&self) -> StarCounts {
        let full = self.0.floor() as u8;
        let half = u8::from(self.0 - full as f64 >= 0.5);
        StarCounts {
            full,
            half,
            empty: RATING_STARS.saturating_sub(full + half),
        }
    }

    pub fn label(&self) -> String {
        format!("{:.1}", self.0)
    }
}
