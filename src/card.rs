use crate::attrs;
use crate::constants::{CONFIG_ATTR, ENABLED_ATTR, STYLE_ATTR};
use crate::device::BrowserDevice;
use crate::dom;
use crate::events::pointer::PointerListeners;
use crate::frame::{self, PendingFrame};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tilt_core::{
    AttachOutcome, FrameScheduler, Geometry, InputBinding, Publisher, Rect, TickToken,
    TiltController,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub type WebTilt = TiltController<CardHost>;

/// DOM side of one card: the shell gives geometry and pointer events, the
/// card element receives the style variables.
pub struct CardHost {
    card: web::HtmlElement,
    shell: web::HtmlElement,
    controller: Weak<RefCell<WebTilt>>,
    frame: Option<PendingFrame>,
    listeners: Option<PointerListeners>,
}

impl CardHost {
    fn new(card: web::HtmlElement, controller: Weak<RefCell<WebTilt>>) -> Self {
        let shell = dom::shell_of(&card);
        Self {
            card,
            shell,
            controller,
            frame: None,
            listeners: None,
        }
    }
}

impl Geometry for CardHost {
    fn bounding_rect(&self) -> Option<Rect> {
        dom::client_rect(&self.shell)
            .map_err(|e| log::debug!("[card] {}", e))
            .ok()
    }
}

impl FrameScheduler for CardHost {
    fn request_tick(&mut self, token: TickToken) -> bool {
        self.frame = frame::request_frame(self.controller.clone(), token);
        self.frame.is_some()
    }

    fn cancel_tick(&mut self, token: TickToken) {
        if let Some(f) = self.frame.take() {
            if f.token == token {
                frame::cancel_frame(f);
            } else {
                self.frame = Some(f);
            }
        }
    }
}

// Style variables bypass the page's render pipeline on purpose: they change
// every frame while the card moves.
impl Publisher for CardHost {
    fn write_var(&mut self, name: &str, value: &str) {
        dom::set_style_var(&self.card, name, value);
    }
}

impl InputBinding for CardHost {
    fn bind(&mut self) {
        if self.listeners.is_none() {
            self.listeners = Some(PointerListeners::install(&self.shell, self.controller.clone()));
        }
    }

    fn unbind(&mut self) {
        self.listeners = None;
    }
}

/// A mounted tilt card, exported to JavaScript.
#[wasm_bindgen]
pub struct TiltCard {
    controller: Rc<RefCell<WebTilt>>,
}

#[wasm_bindgen]
impl TiltCard {
    /// Mount on `card`. `config_json` overrides the `data-tilt-config`
    /// attribute. Never fails: a card that cannot tilt keeps its static pose.
    pub fn mount(card: web::HtmlElement, config_json: Option<String>) -> TiltCard {
        let config_text = config_json.or_else(|| card.get_attribute(CONFIG_ATTR));
        let config = attrs::config_from_attrs(
            config_text.as_deref(),
            card.get_attribute(ENABLED_ATTR).as_deref(),
        );
        let style = attrs::style_from_attr(card.get_attribute(STYLE_ATTR).as_deref());
        let device = BrowserDevice {
            mobile_breakpoint_px: config.mobile_breakpoint_px,
        };

        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<WebTilt>>| {
            RefCell::new(TiltController::new(
                CardHost::new(card.clone(), weak.clone()),
                Box::new(device),
            ))
        });

        {
            let mut c = controller.borrow_mut();
            style.apply(c.host_mut());
            match c.attach(&config) {
                AttachOutcome::Attached => {}
                other => log::info!("[card] {} stays static: {:?}", card.id(), other),
            }
        }
        TiltCard { controller }
    }

    /// Idempotent.
    pub fn unmount(&self) {
        self.controller.borrow_mut().detach();
    }

    pub fn is_active(&self) -> bool {
        self.controller.borrow().is_active()
    }

    /// Ease back to the resting pose.
    pub fn recenter(&self) {
        self.controller.borrow_mut().center();
    }
}
