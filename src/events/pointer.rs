use crate::card::WebTilt;
use crate::constants::{POINTER_LEAVE_EVENT, POINTER_MOVE_EVENT};
use std::cell::RefCell;
use std::rc::Weak;
use tilt_core::{PointerKind, PointerSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample::new(
        ev.client_x() as f32,
        ev.client_y() as f32,
        PointerKind::from_pointer_type(&ev.pointer_type()),
    )
}

/// Move/leave listeners installed on a card shell, removed again on drop.
pub struct PointerListeners {
    target: web::HtmlElement,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListeners {
    pub fn install(target: &web::HtmlElement, controller: Weak<RefCell<WebTilt>>) -> Self {
        let move_ctl = controller.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(c) = move_ctl.upgrade() {
                c.borrow_mut().on_pointer_move(pointer_sample(&ev));
            }
        }) as Box<dyn FnMut(_)>);

        let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if let Some(c) = controller.upgrade() {
                c.borrow_mut().on_pointer_leave();
            }
        }) as Box<dyn FnMut(_)>);

        for (name, cb) in [(POINTER_MOVE_EVENT, &on_move), (POINTER_LEAVE_EVENT, &on_leave)] {
            _ = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }

        Self {
            target: target.clone(),
            on_move,
            on_leave,
        }
    }

    fn remove(&self) {
        _ = self.target.remove_event_listener_with_callback(
            POINTER_MOVE_EVENT,
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.target.remove_event_listener_with_callback(
            POINTER_LEAVE_EVENT,
            self.on_leave.as_ref().unchecked_ref(),
        );
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        self.remove();
    }
}
