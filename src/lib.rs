#![cfg(target_arch = "wasm32")]
use folio_core::{ControllerConfig, CursorTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod markup;
mod nav;
mod portfolio;
mod ratings;
mod skills;
mod theme;

fn read_config(document: &web::Document) -> ControllerConfig {
    let body = document.body();
    ControllerConfig::from_overrides(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
}

fn wire_cursor(document: &web::Document, cfg: &ControllerConfig) -> anyhow::Result<()> {
    let view = Rc::new(cursor::CursorView::mount(document, cfg.cursor.trail_len)?);
    let tracker = Rc::new(RefCell::new(CursorTracker::new(cfg.cursor.clone())));

    events::wire_hover_targets(document, &view.root);
    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        tracker: tracker.clone(),
        view: view.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tracker,
        view,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let cfg = read_config(&document);

    if let Err(e) = wire_cursor(&document, &cfg) {
        log::warn!("[cursor] disabled: {e:?}");
    }
    theme::wire_theme(&window, &document);
    nav::wire_section_nav(&document);
    skills::wire_skills(&window, &document, cfg.skills.clone());
    ratings::wire_ratings(&window, &document);
    portfolio::wire_show_more(&document, cfg.reveal.clone());

    log::info!("folio-web ready");
    Ok(())
}
