//! Attach/detach lifecycle around the convergence engine.
//!
//! `Detached -> Attaching -> Active -> Detached`. Detaching unbinds input,
//! cancels the pending frame and drops the engine; a frame that fires later
//! carries a token that no longer matches anything and does nothing.

use crate::config::TiltConfig;
use crate::engine::ConvergenceEngine;
use crate::extract;
use crate::host::{DeviceClass, Host, TickToken};
use crate::mapper::{self, DerivedParameters};
use crate::point::{NormalizedPoint, PointerSample};
use crate::publish;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Detached,
    Attaching,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    AlreadyActive,
    Disabled,
    TouchPrimary,
    NoGeometry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token did not match; nothing was published.
    Stale,
    /// Published; another frame is pending.
    Moving,
    /// Published; converged, no frame pending.
    Settled,
}

pub struct TiltController<H: Host> {
    host: H,
    device: Box<dyn DeviceClass>,
    phase: Phase,
    engine: Option<ConvergenceEngine>,
    generation: u32,
    last_published: Option<DerivedParameters>,
}

impl<H: Host> TiltController<H> {
    pub fn new(host: H, device: Box<dyn DeviceClass>) -> Self {
        Self {
            host,
            device,
            phase: Phase::Detached,
            engine: None,
            generation: 0,
            last_published: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn engine(&self) -> Option<&ConvergenceEngine> {
        self.engine.as_ref()
    }

    pub fn pending_tick(&self) -> Option<TickToken> {
        self.engine.as_ref().and_then(|e| e.pending())
    }

    /// Parameters from the most recent tick of the current attachment.
    pub fn last_published(&self) -> Option<&DerivedParameters> {
        self.last_published.as_ref()
    }

    pub fn attach(&mut self, config: &TiltConfig) -> AttachOutcome {
        if self.phase != Phase::Detached {
            log::debug!("[tilt] attach while {:?}; ignoring", self.phase);
            return AttachOutcome::AlreadyActive;
        }
        if !config.enabled {
            log::debug!("[tilt] disabled by config");
            return AttachOutcome::Disabled;
        }
        if self.device.is_touch_primary() {
            log::info!("[tilt] touch-primary device; staying static");
            return AttachOutcome::TouchPrimary;
        }
        let Some(rect) = self.host.bounding_rect() else {
            log::info!("[tilt] no container geometry; staying static");
            return AttachOutcome::NoGeometry;
        };

        self.phase = Phase::Attaching;
        self.generation = self.generation.wrapping_add(1);
        let mut engine =
            ConvergenceEngine::new(extract::center_of(rect), config.tuning(), self.generation);
        self.host.bind();
        engine.center(Some(rect), &mut self.host);
        self.engine = Some(engine);
        self.last_published = None;
        self.phase = Phase::Active;
        log::info!(
            "[tilt] attached gen={} rect=({:.0},{:.0} {:.0}x{:.0})",
            self.generation,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        AttachOutcome::Attached
    }

    /// Idempotent.
    pub fn detach(&mut self) {
        if self.phase == Phase::Detached {
            log::debug!("[tilt] detach while detached; ignoring");
            return;
        }
        self.host.unbind();
        if let Some(mut engine) = self.engine.take() {
            engine.cancel(&mut self.host);
        }
        self.phase = Phase::Detached;
        log::info!("[tilt] detached gen={}", self.generation);
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        if self.phase != Phase::Active || self.device.is_coarse_pointer(&sample) {
            return;
        }
        let Some(rect) = self.host.bounding_rect() else {
            return;
        };
        if let Some(engine) = self.engine.as_mut() {
            engine.set_target(extract::normalize(sample.position, rect), &mut self.host);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.center();
    }

    /// Ease back to the container center.
    pub fn center(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        let rect = self.host.bounding_rect();
        if let Some(engine) = self.engine.as_mut() {
            engine.center(rect, &mut self.host);
        }
    }

    /// Run one frame. Hosts call this when a requested frame fires.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Stale;
        }
        let Some(engine) = self.engine.as_mut() else {
            return TickOutcome::Stale;
        };
        if !engine.accept(token) {
            log::trace!("[tilt] stale tick {:?}", token);
            return TickOutcome::Stale;
        }
        let current = engine.advance();
        let params = mapper::derive(current);
        publish::publish(&mut self.host, &params);
        self.last_published = Some(params);
        log::trace!(
            "[tilt] tick ({:.2},{:.2}) rot=({},{})",
            current.x(),
            current.y(),
            params.rotate_x,
            params.rotate_y
        );
        if engine.reschedule_if_unsettled(&mut self.host) {
            TickOutcome::Moving
        } else {
            TickOutcome::Settled
        }
    }

    /// Current smoothed position, if attached.
    pub fn current(&self) -> Option<NormalizedPoint> {
        self.engine.as_ref().map(|e| e.current())
    }

    /// Current target, if attached.
    pub fn target(&self) -> Option<NormalizedPoint> {
        self.engine.as_ref().map(|e| e.target())
    }
}

impl<H: Host> Drop for TiltController<H> {
    fn drop(&mut self) {
        self.detach();
    }
}
