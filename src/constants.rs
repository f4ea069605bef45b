// DOM contract: selectors, class names and style values the page relies on.

// Cursor
pub const CURSOR_CLASS: &str = "custom-cursor";
pub const CURSOR_TRAIL_CLASS: &str = "cursor-trail";
pub const CURSOR_RIPPLE_CLASS: &str = "cursor-ripple";
pub const CURSOR_HOVER_CLASS: &str = "hover";
pub const CURSOR_CLICK_CLASS: &str = "click";
pub const HOVER_SELECTORS: &str =
    "a, button, .control, .theme-btn, .show-more-btn, .main-btn, .portfolio-item, .orbit-card";

// Theme
pub const THEME_BUTTON_SELECTOR: &str = ".theme-btn";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Section navigation
pub const NAV_CONTROL_SELECTOR: &str = ".control";
pub const NAV_ACTIVE_BUTTON_CLASS: &str = "active-btn";
pub const SECTION_ACTIVE_CLASS: &str = "active";

// Skill bars
pub const SKILL_BAR_SELECTOR: &str = ".progress-bar";
pub const SKILL_FILL_SELECTOR: &str = ".progress span";
pub const SKILL_TEXT_SELECTOR: &str = ".prog-text";
pub const SKILL_BADGE_CLASS: &str = "value";
pub const SKILL_PERCENT_ATTR: &str = "data-percent";

// Ratings
pub const RATING_SELECTOR: &str = ".t-rating";
pub const RATING_ATTR: &str = "data-rating";

// Portfolio reveal
pub const SHOW_MORE_SELECTOR: &str = ".show-more-btn";
pub const HIDDEN_ITEM_SELECTOR: &str = ".portfolio-item.hidden";
pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEAL_OFFSET_PX: u32 = 30; // initial slide-up distance

// Ripple geometry
pub const RIPPLE_SIZE_PX: f32 = 40.0;
