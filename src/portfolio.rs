//! "Show more" control for the portfolio grid.

use crate::constants::{HIDDEN_CLASS, HIDDEN_ITEM_SELECTOR, REVEAL_OFFSET_PX, SHOW_MORE_SELECTOR};
use crate::dom;
use crate::markup;
use folio_core::{trigger_visible, RevealConfig, RevealPlanner, REVEAL_FADE_MS, REVEAL_STYLE_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn reveal_item(item: web::Element) {
    dom::remove_class(&item, HIDDEN_CLASS);
    dom::set_style(&item, "opacity", "0");
    dom::set_style(&item, "transform", &markup::translate_y(REVEAL_OFFSET_PX));
    dom::set_style(&item, "transition", &markup::fade_transition(REVEAL_FADE_MS));
    dom::set_timeout(REVEAL_STYLE_DELAY_MS, move || {
        dom::set_style(&item, "opacity", "1");
        dom::set_style(&item, "transform", &markup::translate_y(0));
    });
}

fn activate(document: &web::Document, trigger: web::Element, planner: &Rc<RefCell<RevealPlanner>>) {
    let hidden = dom::query_all(document, HIDDEN_ITEM_SELECTOR);
    let batch = planner.borrow_mut().plan(hidden.len());
    log::debug!(
        "[reveal] hidden={} revealing={} in_flight={}",
        hidden.len(),
        batch.len(),
        planner.borrow().in_flight()
    );

    for step in &batch.steps {
        let Some(item) = hidden.get(step.hidden_index).cloned() else {
            planner.borrow_mut().item_revealed();
            continue;
        };
        let planner_step = planner.clone();
        dom::set_timeout(step.delay_ms, move || {
            reveal_item(item);
            planner_step.borrow_mut().item_revealed();
        });
    }

    let doc = document.clone();
    dom::set_timeout(batch.settle_ms, move || {
        let remaining = dom::query_all(&doc, HIDDEN_ITEM_SELECTOR).len();
        if !trigger_visible(remaining) {
            dom::set_style(&trigger, "display", "none");
            log::info!("[reveal] all portfolio items shown");
        }
    });
}

/// Delegated click handling so triggers added later still work.
pub fn wire_show_more(document: &web::Document, cfg: RevealConfig) {
    let planner = Rc::new(RefCell::new(RevealPlanner::new(cfg)));
    let doc = document.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let trigger = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(SHOW_MORE_SELECTOR).ok().flatten());
        if let Some(trigger) = trigger {
            ev.prevent_default();
            activate(&doc, trigger, &planner);
        }
    });
}
