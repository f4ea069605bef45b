use crate::constants::{CURSOR_CLASS, CURSOR_TRAIL_CLASS};
use crate::dom;
use crate::markup;
use folio_core::CursorTracker;
use web_sys as web;

/// The cursor element plus its trail markers, appended to `<body>`.
pub struct CursorView {
    pub root: web::Element,
    trail: Vec<web::Element>,
}

impl CursorView {
    pub fn mount(document: &web::Document, trail_len: usize) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        let make = |class: &str| -> anyhow::Result<web::Element> {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name(class);
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            Ok(el)
        };
        // trail first so the main cursor paints on top
        let trail = (0..trail_len)
            .map(|_| make(CURSOR_TRAIL_CLASS))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let root = make(CURSOR_CLASS)?;
        Ok(Self { root, trail })
    }

    pub fn render(&self, tracker: &CursorTracker) {
        let p = tracker.current;
        dom::set_style(&self.root, "left", &markup::px(p.x));
        dom::set_style(&self.root, "top", &markup::px(p.y));

        let mut markers = tracker.trail_markers();
        for el in &self.trail {
            match markers.next() {
                Some(m) => {
                    dom::set_style(el, "left", &markup::px(m.position.x));
                    dom::set_style(el, "top", &markup::px(m.position.y));
                    dom::set_style(el, "transform", &markup::scale(m.scale));
                    dom::set_style(el, "opacity", &format!("{:.3}", m.opacity));
                }
                None => dom::set_style(el, "opacity", "0"),
            }
        }
    }

    pub fn set_visible(&self, visible: bool) {
        let opacity = if visible { "1" } else { "0" };
        dom::set_style(&self.root, "opacity", opacity);
        if !visible {
            for el in &self.trail {
                dom::set_style(el, "opacity", "0");
            }
        }
    }
}
