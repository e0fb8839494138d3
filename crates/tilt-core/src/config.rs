//! Tilt configuration.
//!
//! Hosts hand the engine a [`TiltConfig`]; before use it is reduced to a
//! [`Tuning`] whose values are always in range. Out-of-range input is clamped
//! and logged, never rejected.

use crate::constants::{
    DEFAULT_EPSILON, DEFAULT_SMOOTHING, MAX_SMOOTHING, MIN_EPSILON, MIN_SMOOTHING,
};
use crate::error::TiltResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// When false, attach is a no-op and the card keeps its static pose.
    pub enabled: bool,
    /// Fraction of the remaining distance covered each frame, in (0, 1).
    pub smoothing: f32,
    /// Per-axis distance (percent) below which the loop stops. Raised to
    /// `MIN_EPSILON` when smaller.
    pub epsilon: f32,
    /// Viewports narrower than this count as touch-primary.
    pub mobile_breakpoint_px: Option<f64>,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing: DEFAULT_SMOOTHING,
            epsilon: DEFAULT_EPSILON,
            mobile_breakpoint_px: None,
        }
    }
}

impl TiltConfig {
    pub fn from_json(text: &str) -> TiltResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse `text`, falling back to defaults when it is malformed.
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("[tilt] ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn tuning(&self) -> Tuning {
        Tuning::new(self.smoothing, self.epsilon)
    }
}

/// Validated convergence constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    smoothing: f32,
    epsilon: f32,
}

impl Tuning {
    pub fn new(smoothing: f32, epsilon: f32) -> Self {
        let s = if smoothing.is_nan() {
            log::warn!("[tilt] smoothing is NaN; using {}", DEFAULT_SMOOTHING);
            DEFAULT_SMOOTHING
        } else {
            let c = smoothing.clamp(MIN_SMOOTHING, MAX_SMOOTHING);
            if c != smoothing {
                log::warn!("[tilt] smoothing {} out of range; clamped to {}", smoothing, c);
            }
            c
        };
        let e = if !epsilon.is_finite() || epsilon <= 0.0 {
            log::warn!("[tilt] epsilon {} invalid; using {}", epsilon, DEFAULT_EPSILON);
            DEFAULT_EPSILON
        } else if epsilon < MIN_EPSILON {
            log::warn!("[tilt] epsilon {} too small; clamped to {}", epsilon, MIN_EPSILON);
            MIN_EPSILON
        } else {
            epsilon
        };
        Self {
            smoothing: s,
            epsilon: e,
        }
    }

    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
