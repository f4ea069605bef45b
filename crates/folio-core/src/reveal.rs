//! Batching for the portfolio "show more" control.
//!
//! Items stay in the hidden list until their staggered timeout fires, so a
//! second activation arriving mid-batch would see them again. The planner
//! keeps an in-flight count and skips those items.

use crate::config::RevealConfig;
use smallvec::SmallVec;

/// One item to un-hide: its index in the current hidden list and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub hidden_index: usize,
    pub delay_ms: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealBatch {
    pub steps: SmallVec<[RevealStep; 3]>,
    /// When to re-count hidden items and decide on the trigger's visibility.
    pub settle_ms: i32,
}

impl RevealBatch {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct RevealPlanner {
    cfg: RevealConfig,
    in_flight: usize,
}

impl RevealPlanner {
    pub fn new(cfg: RevealConfig) -> Self {
        Self { cfg, in_flight: 0 }
    }

    /// Plan the next batch given how many items are currently marked hidden.
    pub fn plan(&mut self, hidden_count: usize) -> RevealBatch {
        let available = hidden_count.saturating_sub(self.in_flight);
        let take = self.cfg.batch_size.min(available);
        let steps = (0..take)
            .map(|i| RevealStep {
                hidden_index: self.in_flight + i,
                delay_ms: i as i32 * self.cfg.stagger_ms,
            })
            .collect();
        self.in_flight += take;
        RevealBatch {
            steps,
            settle_ms: take as i32 * self.cfg.stagger_ms + self.cfg.settle_extra_ms,
        }
    }

    /// An item scheduled earlier has been un-hidden.
    pub fn item_revealed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

/// The trigger stays visible while anything is left to reveal.
#[inline]
pub fn trigger_visible(hidden_remaining: usize) -> bool {
    hidden_remaining > 0
}
