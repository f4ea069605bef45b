use crate::constants::{NAV_ACTIVE_BUTTON_CLASS, NAV_CONTROL_SELECTOR, SECTION_ACTIVE_CLASS};
use crate::dom;
use folio_core::SectionNav;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn initial_section(document: &web::Document) -> Option<String> {
    document
        .query_selector(&format!(".{SECTION_ACTIVE_CLASS}"))
        .ok()
        .flatten()
        .map(|el| el.id())
        .filter(|id| !id.is_empty())
}

/// Switch the visible section when a `.control` nav button is clicked.
pub fn wire_section_nav(document: &web::Document) {
    let nav = Rc::new(RefCell::new(SectionNav::new(initial_section(document))));
    for button in dom::query_all(document, NAV_CONTROL_SELECTOR) {
        let Some(id) = button.get_attribute("data-id") else {
            continue;
        };
        let nav_btn = nav.clone();
        let doc = document.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |_: web::Event| {
            let Some(change) = nav_btn.borrow_mut().select(&id) else {
                return;
            };
            let active_btn = format!(".{NAV_ACTIVE_BUTTON_CLASS}");
            if let Ok(Some(prev)) = doc.query_selector(&active_btn) {
                dom::remove_class(&prev, NAV_ACTIVE_BUTTON_CLASS);
            }
            dom::add_class(&target, NAV_ACTIVE_BUTTON_CLASS);

            let previous = change
                .previous
                .as_deref()
                .and_then(|p| doc.get_element_by_id(p));
            match previous {
                Some(prev) => dom::remove_class(&prev, SECTION_ACTIVE_CLASS),
                None => {
                    if let Ok(Some(prev)) = doc.query_selector(&format!(".{SECTION_ACTIVE_CLASS}")) {
                        dom::remove_class(&prev, SECTION_ACTIVE_CLASS);
                    }
                }
            }
            match doc.get_element_by_id(&change.next) {
                Some(section) => dom::add_class(&section, SECTION_ACTIVE_CLASS),
                None => log::debug!("[nav] no section #{}", change.next),
            }
        });
    }
}
