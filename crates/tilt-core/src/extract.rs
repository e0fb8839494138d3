use crate::point::{NormalizedPoint, Rect};
use crate::constants::PERCENT_MAX;
use glam::Vec2;

/// Convert a page-space position into container percentage space.
///
/// Positions outside the rect clamp to the nearest edge; a zero-size rect is
/// measured as one unit wide/high.
#[inline]
pub fn normalize(position: Vec2, rect: Rect) -> NormalizedPoint {
    let local = position - rect.origin();
    NormalizedPoint::from(local * PERCENT_MAX / rect.effective_size())
}

/// Normalized target for the geometric center of `rect`.
#[inline]
pub fn center_of(rect: Rect) -> NormalizedPoint {
    let center = rect.origin() + rect.effective_size() * 0.5;
    normalize(center, rect)
}
