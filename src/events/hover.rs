use crate::constants::{CURSOR_HOVER_CLASS, HOVER_SELECTORS};
use crate::dom;
use web_sys as web;

/// Flag the cursor while the pointer is over any interactive element.
pub fn wire_hover_targets(document: &web::Document, cursor: &web::Element) {
    let targets = dom::query_all(document, HOVER_SELECTORS);
    for el in &targets {
        let enter = cursor.clone();
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| {
            dom::add_class(&enter, CURSOR_HOVER_CLASS);
        });
        let leave = cursor.clone();
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| {
            dom::remove_class(&leave, CURSOR_HOVER_CLASS);
        });
    }
    log::debug!("[cursor] hover feedback on {} elements", targets.len());
}
