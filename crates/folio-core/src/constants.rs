// Shared tuning constants for the page behavior controller.

// Cursor smoothing (fraction of the remaining distance covered per 60 Hz frame)
pub const CURSOR_SMOOTHING_MIN: f32 = 0.08; // slow pointer: heavier lag
pub const CURSOR_SMOOTHING_MAX: f32 = 0.15; // fast pointer: catch up quicker
pub const CURSOR_SPEED_REF_PX_PER_SEC: f32 = 1500.0; // speed at which smoothing saturates
pub const CURSOR_REFERENCE_FPS: f32 = 60.0;
pub const CURSOR_MAX_DT_SEC: f32 = 0.1; // clamp long frames (tab switches)

// Trail markers
pub const TRAIL_CAPACITY: usize = 8;
pub const TRAIL_MIN_SCALE: f32 = 0.3;
pub const TRAIL_MAX_OPACITY: f32 = 0.5;

// Click ripple
pub const RIPPLE_DURATION_MS: i32 = 600;

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

// Skill bars
pub const SKILL_TRIGGER_THRESHOLD_PX: f64 = 80.0; // distance above viewport bottom
pub const SKILL_TICK_MS: i32 = 20;
pub const SKILL_COUNTER_STEPS: f64 = 30.0;
pub const SKILL_PERCENT_MAX: u32 = 100;

// Ratings
pub const RATING_MIN: f64 = 4.5;
pub const RATING_MAX: f64 = 5.0;
pub const RATING_STARS: u8 = 5;

// Portfolio reveal
pub const REVEAL_BATCH_SIZE: usize = 3;
pub const REVEAL_STAGGER_MS: i32 = 100;
pub const REVEAL_STYLE_DELAY_MS: i32 = 50; // un-hide, then apply final styles
pub const REVEAL_FADE_MS: i32 = 500;
pub const REVEAL_SETTLE_EXTRA_MS: i32 = 200;
