//! Derived visual parameters for a smoothed pointer position.
//!
//! Every output is a total function of the current [`NormalizedPoint`]; the
//! mapper keeps no state between ticks.

use crate::constants::{
    BACKGROUND_MAX, BACKGROUND_MIN, OUTPUT_DECIMALS, PERCENT_CENTER, PERCENT_MAX, PERCENT_MIN,
    ROTATE_X_DIVISOR, ROTATE_Y_DIVISOR,
};
use crate::point::NormalizedPoint;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamName {
    PointerX,
    PointerY,
    BackgroundX,
    BackgroundY,
    RotateX,
    RotateY,
}

impl ParamName {
    pub const ALL: [ParamName; 6] = [
        ParamName::PointerX,
        ParamName::PointerY,
        ParamName::BackgroundX,
        ParamName::BackgroundY,
        ParamName::RotateX,
        ParamName::RotateY,
    ];

    /// Style variable the parameter is published under.
    pub fn css_var(self) -> &'static str {
        match self {
            ParamName::PointerX => "--pointer-x",
            ParamName::PointerY => "--pointer-y",
            ParamName::BackgroundX => "--background-x",
            ParamName::BackgroundY => "--background-y",
            ParamName::RotateX => "--rotate-x",
            ParamName::RotateY => "--rotate-y",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Percent(f32),
    Degrees(f32),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Percent(v) => write!(f, "{}%", v),
            ParamValue::Degrees(v) => write!(f, "{}deg", v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedParameters {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub background_x: f32,
    pub background_y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl DerivedParameters {
    pub fn get(&self, name: ParamName) -> ParamValue {
        match name {
            ParamName::PointerX => ParamValue::Percent(self.pointer_x),
            ParamName::PointerY => ParamValue::Percent(self.pointer_y),
            ParamName::BackgroundX => ParamValue::Percent(self.background_x),
            ParamName::BackgroundY => ParamValue::Percent(self.background_y),
            ParamName::RotateX => ParamValue::Degrees(self.rotate_x),
            ParamName::RotateY => ParamValue::Degrees(self.rotate_y),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (ParamName, ParamValue)> + '_ {
        ParamName::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

/// `c + (d - c) * (v - a) / (b - a)`, rounded.
#[inline]
pub fn remap(v: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    round_output(c + (d - c) * (v - a) / (b - a))
}

/// Round to [`OUTPUT_DECIMALS`] places, folding `-0` into `0`.
#[inline]
pub fn round_output(v: f32) -> f32 {
    let scale = 10f32.powi(OUTPUT_DECIMALS);
    (v * scale).round() / scale + 0.0
}

pub fn derive(current: NormalizedPoint) -> DerivedParameters {
    let (x, y) = (current.x(), current.y());
    DerivedParameters {
        pointer_x: x,
        pointer_y: y,
        background_x: remap(x, PERCENT_MIN, PERCENT_MAX, BACKGROUND_MIN, BACKGROUND_MAX),
        background_y: remap(y, PERCENT_MIN, PERCENT_MAX, BACKGROUND_MIN, BACKGROUND_MAX),
        rotate_x: round_output(-((x - PERCENT_CENTER) / ROTATE_X_DIVISOR)),
        rotate_y: round_output((y - PERCENT_CENTER) / ROTATE_Y_DIVISOR),
    }
}
