use crate::constants::{LIGHT_MODE_CLASS, PREFERS_LIGHT_QUERY, THEME_BUTTON_SELECTOR};
use crate::dom;
use folio_core::{FolioError, PreferenceStore, Theme, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`-backed preference store. Private browsing modes and
/// sandboxed frames may deny access; every call then reports
/// [`FolioError::StorageUnavailable`].
pub struct BrowserStore {
    storage: Option<web::Storage>,
}

impl BrowserStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; theme choice is session-only");
        }
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> folio_core::Result<Option<String>> {
        let storage = self.storage.as_ref().ok_or(FolioError::StorageUnavailable)?;
        storage
            .get_item(key)
            .map_err(|_| FolioError::StorageUnavailable)
    }

    fn save(&mut self, key: &str, value: &str) -> folio_core::Result<()> {
        let storage = self.storage.as_ref().ok_or(FolioError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| FolioError::StorageWrite {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force(LIGHT_MODE_CLASS, theme == Theme::Light);
    }
}

fn system_theme(query: Option<&web::MediaQueryList>) -> Theme {
    match query {
        Some(q) if q.matches() => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Apply the stored or system theme, follow system changes, and wire the
/// toggle button.
pub fn wire_theme(window: &web::Window, document: &web::Document) {
    let query = window.match_media(PREFERS_LIGHT_QUERY).ok().flatten();
    let ctl = Rc::new(RefCell::new(ThemeController::load(
        BrowserStore::open(window),
        system_theme(query.as_ref()),
    )));
    let initial = ctl.borrow().applied();
    apply(document, initial);
    log::info!("[theme] applied {}", initial.as_str());

    if let Some(q) = query {
        let ctl_sys = ctl.clone();
        let doc_sys = document.clone();
        dom::listen(&q, "change", move |ev: web::MediaQueryListEvent| {
            let system = if ev.matches() { Theme::Light } else { Theme::Dark };
            let applied = ctl_sys.borrow_mut().system_changed(system);
            apply(&doc_sys, applied);
        });
    }

    match document.query_selector(THEME_BUTTON_SELECTOR).ok().flatten() {
        Some(button) => {
            let doc_btn = document.clone();
            dom::listen(&button, "click", move |_: web::Event| {
                let applied = ctl.borrow_mut().toggle();
                apply(&doc_btn, applied);
                log::info!("[theme] toggled to {}", applied.as_str());
            });
        }
        None => log::debug!("[theme] no {THEME_BUTTON_SELECTOR} on page"),
    }
}
