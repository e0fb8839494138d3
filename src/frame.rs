use crate::card::WebTilt;
use std::cell::RefCell;
use std::rc::Weak;
use tilt_core::TickToken;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The one outstanding animation frame of a card.
#[derive(Clone, Copy, Debug)]
pub struct PendingFrame {
    pub token: TickToken,
    pub raf_id: i32,
}

/// Queue a single `requestAnimationFrame` that ticks the controller with
/// `token`. The callback holds only a weak reference, so an unmounted card
/// is never kept alive by a queued frame.
pub fn request_frame(controller: Weak<RefCell<WebTilt>>, token: TickToken) -> Option<PendingFrame> {
    let window = web::window()?;
    let callback = Closure::once_into_js(move || {
        if let Some(c) = controller.upgrade() {
            c.borrow_mut().tick(token);
        }
    });
    match window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()) {
        Ok(raf_id) => Some(PendingFrame { token, raf_id }),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn cancel_frame(frame: PendingFrame) {
    if let Some(window) = web::window() {
        _ = window.cancel_animation_frame(frame.raf_id);
    }
}
