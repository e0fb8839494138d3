//! Collaborators the engine consumes from its host.
//!
//! A front-end implements these on one host type; the controller is generic
//! over it. None of them may call back into the controller synchronously.

use crate::point::{PointerSample, Rect};
use crate::publish::Publisher;

/// Identity of one pending frame callback.
///
/// The generation changes on every attach, so tokens minted for an earlier
/// attachment never match the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickToken {
    pub generation: u32,
    pub sequence: u32,
}

/// Live container bounds. `None` when the container is not laid out.
pub trait Geometry {
    fn bounding_rect(&self) -> Option<Rect>;
}

/// Animation-frame clock. When a requested frame fires, the host calls
/// `TiltController::tick` with the same token.
pub trait FrameScheduler {
    /// Queue one frame for `token`. Returns false when no frame could be
    /// queued; the token is then dropped and the next target change retries.
    fn request_tick(&mut self, token: TickToken) -> bool;
    fn cancel_tick(&mut self, token: TickToken);
}

/// Pointer-move / pointer-leave listener wiring on the container.
pub trait InputBinding {
    fn bind(&mut self);
    fn unbind(&mut self);
}

pub trait Host: Geometry + FrameScheduler + Publisher + InputBinding {}

impl<T: Geometry + FrameScheduler + Publisher + InputBinding> Host for T {}

/// Device-class capability, queried once per attach.
pub trait DeviceClass {
    /// Touch-primary contexts never attach.
    fn is_touch_primary(&self) -> bool;

    fn is_coarse_pointer(&self, sample: &PointerSample) -> bool {
        sample.kind.is_coarse()
    }
}

/// Desktop default: fine pointer, classify samples by their tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct FinePointer;

impl DeviceClass for FinePointer {
    fn is_touch_primary(&self) -> bool {
        false
    }
}
