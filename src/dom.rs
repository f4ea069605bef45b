use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// Like [`listen`], but registered as a passive listener (scroll handlers).
pub fn listen_passive(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {e:?}");
    }
}

/// Viewport height, falling back to the root element's client height.
pub fn viewport_height(window: &web::Window, document: &web::Document) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|h| *h > 0.0)
        .or_else(|| {
            document
                .document_element()
                .map(|el| el.client_height() as f64)
        })
        .unwrap_or(0.0)
}

/// Run `f` after the window's `load` event, or right away if it already fired.
pub fn on_load(window: &web::Window, document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "complete" {
        f();
        return;
    }
    let mut f = Some(f);
    listen(window, "load", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}
