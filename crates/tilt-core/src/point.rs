//! Input and geometry value types.
//!
//! Samples and rects live in the host's page/client coordinate space;
//! [`NormalizedPoint`] is container-relative percentage space and is what the
//! engine stores, so it stays valid across container resizes.

use crate::constants::{MIN_CONTAINER_SIZE, PERCENT_CENTER, PERCENT_MAX, PERCENT_MIN};
use glam::Vec2;

/// Input device class of a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType` string. Unknown types count as precise.
    pub fn from_pointer_type(s: &str) -> Self {
        match s {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    #[inline]
    pub fn is_coarse(self) -> bool {
        matches!(self, PointerKind::Touch)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub kind: PointerKind,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, kind: PointerKind) -> Self {
        Self {
            position: Vec2::new(x, y),
            kind,
        }
    }

    pub fn mouse(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Mouse)
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Touch)
    }
}

/// Axis-aligned container bounds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Size with each axis raised to at least one unit.
    #[inline]
    pub fn effective_size(&self) -> Vec2 {
        Vec2::new(
            self.width.max(MIN_CONTAINER_SIZE),
            self.height.max(MIN_CONTAINER_SIZE),
        )
    }
}

/// Position in `[0,100] x [0,100]` container-percentage space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    x: f32,
    y: f32,
}

impl NormalizedPoint {
    pub const CENTER: Self = Self {
        x: PERCENT_CENTER,
        y: PERCENT_CENTER,
    };

    /// Clamp both components into range; non-finite components become center.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Default for NormalizedPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<Vec2> for NormalizedPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[inline]
fn clamp_percent(v: f32) -> f32 {
    if v.is_nan() {
        return PERCENT_CENTER;
    }
    v.clamp(PERCENT_MIN, PERCENT_MAX)
}
