use crate::constants::COARSE_POINTER_QUERY;
use crate::dom;
use tilt_core::DeviceClass;
use web_sys as web;

/// Browser device class: `(pointer: coarse)` media query, plus an optional
/// viewport-width breakpoint for layouts that treat narrow screens as mobile.
pub struct BrowserDevice {
    pub mobile_breakpoint_px: Option<f64>,
}

impl BrowserDevice {
    fn coarse_primary_pointer() -> bool {
        web::window()
            .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

impl DeviceClass for BrowserDevice {
    fn is_touch_primary(&self) -> bool {
        if Self::coarse_primary_pointer() {
            return true;
        }
        match (self.mobile_breakpoint_px, dom::viewport_width()) {
            (Some(bp), Some(w)) => w < bp,
            _ => false,
        }
    }
}
