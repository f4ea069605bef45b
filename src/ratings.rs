use crate::constants::{RATING_ATTR, RATING_SELECTOR};
use crate::dom;
use crate::markup;
use folio_core::{RandomSource, Rating};
use web_sys as web;

/// Uniform samples from the browser's `Math.random`.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub fn render_ratings(document: &web::Document, rng: &mut impl RandomSource) {
    let targets = dom::query_all(document, RATING_SELECTOR);
    for el in &targets {
        let rating = Rating::from_attr(el.get_attribute(RATING_ATTR).as_deref(), rng);
        el.set_inner_html(&markup::rating_html(rating.stars(), &rating.label()));
    }
    log::debug!("[ratings] rendered {}", targets.len());
}

pub fn wire_ratings(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    dom::on_load(window, document, move || render_ratings(&doc, &mut JsRandom));
}
