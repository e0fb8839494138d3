use crate::constants::SHELL_SELECTOR;
use tilt_core::{Rect, TiltError, TiltResult};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Client-space bounds of `el`; unavailable once it has left the document.
pub fn client_rect(el: &web::Element) -> TiltResult<Rect> {
    if !el.is_connected() {
        return Err(TiltError::GeometryUnavailable);
    }
    let r = el.get_bounding_client_rect();
    Ok(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

/// Set a custom property on the element's inline style. Skipped when the
/// element is detached from the document.
#[inline]
pub fn set_style_var(el: &web::HtmlElement, name: &str, value: &str) {
    if !el.is_connected() {
        return;
    }
    if let Err(e) = el.style().set_property(name, value) {
        log::debug!("[dom] set {} failed: {:?}", name, e);
    }
}

/// The card's pointer/geometry shell, or the card itself.
pub fn shell_of(card: &web::HtmlElement) -> web::HtmlElement {
    card.query_selector(SHELL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .unwrap_or_else(|| card.clone())
}

pub fn viewport_width() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

pub fn elements_matching(
    document: &web::Document,
    selector: &str,
) -> TiltResult<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| TiltError::Dom(format!("bad selector {}: {:?}", selector, e)))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}
