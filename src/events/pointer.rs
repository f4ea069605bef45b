use crate::constants::{CURSOR_CLICK_CLASS, CURSOR_RIPPLE_CLASS, RIPPLE_SIZE_PX};
use crate::cursor::CursorView;
use crate::dom;
use crate::markup;
use folio_core::{CursorTracker, RIPPLE_DURATION_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub tracker: Rc<RefCell<CursorTracker>>,
    pub view: Rc<CursorView>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_window_leave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let tracker = w.tracker.clone();
    dom::listen(&w.document, "pointermove", move |ev: web::PointerEvent| {
        tracker
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    });
}

fn wire_pointerdown(w: &PointerWiring) {
    let w2 = w.clone();
    dom::listen(&w.document, "pointerdown", move |_: web::PointerEvent| {
        dom::add_class(&w2.view.root, CURSOR_CLICK_CLASS);
        let at = w2.tracker.borrow().current;
        spawn_ripple(&w2.document, at.x, at.y);
    });
}

fn wire_pointerup(w: &PointerWiring) {
    let view = w.view.clone();
    dom::listen(&w.document, "pointerup", move |_: web::PointerEvent| {
        dom::remove_class(&view.root, CURSOR_CLICK_CLASS);
    });
}

// `mouseleave` on the root element fires when the pointer exits the window.
fn wire_window_leave(w: &PointerWiring) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let (tracker, view) = (w.tracker.clone(), w.view.clone());
    dom::listen(&root, "mouseleave", move |_: web::MouseEvent| {
        tracker.borrow_mut().set_visible(false);
        view.set_visible(false);
    });
    let (tracker, view) = (w.tracker.clone(), w.view.clone());
    dom::listen(&root, "mouseenter", move |_: web::MouseEvent| {
        tracker.borrow_mut().set_visible(true);
        view.set_visible(true);
    });
}

fn spawn_ripple(document: &web::Document, x: f32, y: f32) {
    let (Some(body), Ok(ripple)) = (document.body(), document.create_element("div")) else {
        return;
    };
    ripple.set_class_name(CURSOR_RIPPLE_CLASS);
    let half = RIPPLE_SIZE_PX / 2.0;
    dom::set_style(&ripple, "left", &markup::px(x - half));
    dom::set_style(&ripple, "top", &markup::px(y - half));
    dom::set_style(&ripple, "width", &markup::px(RIPPLE_SIZE_PX));
    dom::set_style(&ripple, "height", &markup::px(RIPPLE_SIZE_PX));
    if body.append_child(&ripple).is_err() {
        return;
    }
    dom::set_timeout(RIPPLE_DURATION_MS, move || ripple.remove());
}
