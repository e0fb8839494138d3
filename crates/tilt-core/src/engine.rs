//! Exponential-smoothing convergence of the current pose toward a target.
//!
//! A tick runs in three steps driven by the controller: [`ConvergenceEngine::accept`]
//! consumes the pending token, [`ConvergenceEngine::advance`] moves `current`,
//! and [`ConvergenceEngine::reschedule_if_unsettled`] requests the next frame
//! only while either axis is still more than epsilon away. A step that no longer
//! moves `current` also counts as settled. At most one token is outstanding at
//! a time.

use crate::config::Tuning;
use crate::extract;
use crate::host::{FrameScheduler, TickToken};
use crate::point::{NormalizedPoint, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ConvergenceState {
    current: NormalizedPoint,
    target: NormalizedPoint,
}

#[derive(Debug)]
pub struct ConvergenceEngine {
    state: ConvergenceState,
    tuning: Tuning,
    generation: u32,
    next_sequence: u32,
    pending: Option<TickToken>,
    stalled: bool,
}

impl ConvergenceEngine {
    /// Start at rest at `start`.
    pub fn new(start: NormalizedPoint, tuning: Tuning, generation: u32) -> Self {
        Self {
            state: ConvergenceState {
                current: start,
                target: start,
            },
            tuning,
            generation,
            next_sequence: 0,
            pending: None,
            stalled: false,
        }
    }

    #[inline]
    pub fn current(&self) -> NormalizedPoint {
        self.state.current
    }

    #[inline]
    pub fn target(&self) -> NormalizedPoint {
        self.state.target
    }

    #[inline]
    pub fn pending(&self) -> Option<TickToken> {
        self.pending
    }

    #[inline]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Replace the target (last write wins) and make sure a tick is pending.
    pub fn set_target<S: FrameScheduler + ?Sized>(
        &mut self,
        target: NormalizedPoint,
        scheduler: &mut S,
    ) {
        self.state.target = target;
        self.stalled = false;
        self.schedule(scheduler);
    }

    /// Target the geometric center of `rect`, or of percentage space when the
    /// bounds are unavailable.
    pub fn center<S: FrameScheduler + ?Sized>(&mut self, rect: Option<Rect>, scheduler: &mut S) {
        let target = rect.map(extract::center_of).unwrap_or(NormalizedPoint::CENTER);
        self.set_target(target, scheduler);
    }

    /// Consume the pending token if `token` is it. Any other token is stale.
    pub fn accept(&mut self, token: TickToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// One smoothing step: `current += (target - current) * alpha`.
    pub fn advance(&mut self) -> NormalizedPoint {
        let c = self.state.current.as_vec2();
        let t = self.state.target.as_vec2();
        let next = NormalizedPoint::from(c + (t - c) * self.tuning.smoothing());
        self.stalled = next == self.state.current;
        self.state.current = next;
        next
    }

    pub fn is_settled(&self) -> bool {
        if self.stalled {
            return true;
        }
        let d = (self.state.target.as_vec2() - self.state.current.as_vec2()).abs();
        d.x <= self.tuning.epsilon() && d.y <= self.tuning.epsilon()
    }

    /// Request the next frame unless converged. Returns whether one was requested.
    pub fn reschedule_if_unsettled<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
    ) -> bool {
        if self.is_settled() {
            false
        } else {
            self.schedule(scheduler);
            true
        }
    }

    /// Cancel and forget the pending tick, if any.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_tick(token);
        }
    }

    fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.pending.is_some() {
            return;
        }
        let token = TickToken {
            generation: self.generation,
            sequence: self.next_sequence,
        };
        self.next_sequence = self.next_sequence.wrapping_add(1);
        if scheduler.request_tick(token) {
            self.pending = Some(token);
        } else {
            log::warn!("[tilt] frame request refused for {:?}", token);
        }
    }
}
