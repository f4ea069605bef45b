// Pure string builders for DOM content and inline styles.
// Kept free of web-sys so host tests can `include!` this file.

use folio_core::StarCounts;

const STAR_FULL: &str = r#"<i class="fas fa-star"></i>"#;
const STAR_HALF: &str = r#"<i class="fas fa-star-half-alt"></i>"#;
const STAR_EMPTY: &str = r#"<i class="far fa-star"></i>"#;
const RATING_LABEL_STYLE: &str = "margin-left:6px;font-size:.9rem;color:var(--color-grey-2)";

pub fn rating_html(stars: StarCounts, label: &str) -> String {
    let mut html = String::with_capacity(stars.total() as usize * STAR_HALF.len() + 96);
    for _ in 0..stars.full {
        html.push_str(STAR_FULL);
    }
    if stars.half > 0 {
        html.push_str(STAR_HALF);
    }
    for _ in 0..stars.empty {
        html.push_str(STAR_EMPTY);
    }
    html.push_str(&format!(
        r#"<span style="{RATING_LABEL_STYLE}">{label}</span>"#
    ));
    html
}

#[inline]
pub fn percent_text(value: u32) -> String {
    format!("{value}%")
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{v}px")
}

#[inline]
pub fn translate_y(offset_px: u32) -> String {
    format!("translateY({offset_px}px)")
}

#[inline]
pub fn fade_transition(duration_ms: i32) -> String {
    format!("all {}s ease", duration_ms as f32 / 1000.0)
}

#[inline]
pub fn scale(s: f32) -> String {
    format!("translate(-50%, -50%) scale({s:.3})")
}
