// Host-side checks for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn hover_selectors_cover_interactive_controls() {
    let selectors: Vec<&str> = HOVER_SELECTORS.split(',').map(str::trim).collect();
    for required in [
        "a",
        "button",
        NAV_CONTROL_SELECTOR,
        THEME_BUTTON_SELECTOR,
        SHOW_MORE_SELECTOR,
    ] {
        assert!(selectors.contains(&required), "missing {required}");
    }
    assert!(selectors.iter().all(|s| !s.is_empty()));
}

#[test]
fn hidden_item_selector_uses_hidden_class() {
    assert!(HIDDEN_ITEM_SELECTOR.ends_with(&format!(".{HIDDEN_CLASS}")));
}

#[test]
fn class_names_are_bare_identifiers() {
    for class in [
        CURSOR_CLASS,
        CURSOR_TRAIL_CLASS,
        CURSOR_RIPPLE_CLASS,
        CURSOR_HOVER_CLASS,
        CURSOR_CLICK_CLASS,
        LIGHT_MODE_CLASS,
        NAV_ACTIVE_BUTTON_CLASS,
        SECTION_ACTIVE_CLASS,
        SKILL_BADGE_CLASS,
        HIDDEN_CLASS,
    ] {
        assert!(!class.is_empty());
        assert!(!class.starts_with('.'), "{class} should not carry a dot");
        assert!(!class.contains(' '));
    }
}

#[test]
fn data_attributes_are_prefixed() {
    for attr in [SKILL_PERCENT_ATTR, RATING_ATTR] {
        assert!(attr.starts_with("data-"));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_is_positive() {
    assert!(RIPPLE_SIZE_PX > 0.0);
    assert!(REVEAL_OFFSET_PX > 0);
}
