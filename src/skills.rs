//! Scroll-triggered skill bars.
//!
//! Each bar fills to its `data-percent` the first time it scrolls into view
//! and a counter ticks up to the same value in the floating badge and, when
//! present, the bar's `.prog-text` label.

use crate::constants::{
    SKILL_BADGE_CLASS, SKILL_BAR_SELECTOR, SKILL_FILL_SELECTOR, SKILL_PERCENT_ATTR,
    SKILL_TEXT_SELECTOR,
};
use crate::dom;
use crate::markup;
use folio_core::{badge_right_percent, parse_percent, ProgressCounter, SkillBarTracker, SkillConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SkillAnimator {
    window: web::Window,
    document: web::Document,
    bars: Vec<web::Element>,
    tracker: SkillBarTracker,
    cfg: SkillConfig,
}

impl SkillAnimator {
    pub fn new(window: web::Window, document: web::Document, cfg: SkillConfig) -> Self {
        let bars = dom::query_all(&document, SKILL_BAR_SELECTOR);
        log::debug!("[skills] found {} bars", bars.len());
        Self {
            window,
            document,
            bars,
            tracker: SkillBarTracker::new(),
            cfg,
        }
    }

    /// Start every bar that has entered the viewport and not yet animated.
    pub fn check(&mut self) {
        if self.tracker.animated_count() == self.bars.len() {
            return;
        }
        let view_h = dom::viewport_height(&self.window, &self.document);
        for (i, bar) in self.bars.iter().enumerate() {
            if self.tracker.is_animated(i) {
                continue;
            }
            let Some(fill) = dom::query(bar, SKILL_FILL_SELECTOR) else {
                continue;
            };
            let top = bar.get_bounding_client_rect().top();
            if !self
                .tracker
                .try_trigger(i, top, view_h, self.cfg.trigger_threshold_px)
            {
                continue;
            }
            let target = parse_percent(bar.get_attribute(SKILL_PERCENT_ATTR).as_deref());
            log::debug!("[skills] bar {i} -> {target}%");
            self.start(bar, &fill, target);
        }
    }

    fn start(&self, bar: &web::Element, fill: &web::Element, target: u32) {
        dom::set_style(fill, "width", &markup::percent_text(target));

        if let Ok(badge) = self.document.create_element("div") {
            badge.set_class_name(SKILL_BADGE_CLASS);
            badge.set_text_content(Some(&markup::percent_text(0)));
            let _ = fill.append_child(&badge);
            let badge_tick = badge.clone();
            self.run_counter(target, move |v| {
                badge_tick.set_text_content(Some(&markup::percent_text(v)));
                dom::set_style(
                    &badge_tick,
                    "right",
                    &markup::percent_text(badge_right_percent(v)),
                );
            });
        }

        if let Some(text) = dom::query(bar, SKILL_TEXT_SELECTOR) {
            self.run_counter(target, move |v| {
                text.set_text_content(Some(&markup::percent_text(v)));
            });
        }
    }

    /// Drive a [`ProgressCounter`] from an interval timer that clears itself
    /// once the counter reaches its target.
    fn run_counter(&self, target: u32, mut render: impl FnMut(u32) + 'static) {
        let mut counter = ProgressCounter::new(target);
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let handle_tick = handle.clone();
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(v) = counter.next() {
                render(v);
            }
            if counter.is_finished() {
                if let Some(id) = handle_tick.take() {
                    window.clear_interval_with_handle(id);
                }
            }
        }) as Box<dyn FnMut()>);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.cfg.tick_ms,
            ) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::warn!("[skills] setInterval failed: {e:?}"),
        }
        closure.forget();
    }
}

/// Check bars on every scroll and once the page has loaded.
pub fn wire_skills(window: &web::Window, document: &web::Document, cfg: SkillConfig) {
    let animator = Rc::new(RefCell::new(SkillAnimator::new(
        window.clone(),
        document.clone(),
        cfg,
    )));

    let on_scroll = animator.clone();
    dom::listen_passive(document, "scroll", move || on_scroll.borrow_mut().check());

    dom::on_load(window, document, move || animator.borrow_mut().check());
}
