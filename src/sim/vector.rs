//! 2D vector helpers used by collision response
//!
//! Thin, side-effect-free wrappers over `glam::DVec2`. The only fallible
//! operation is [`normalize`], which refuses the zero vector instead of
//! handing back NaN components.

use glam::DVec2;

#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.dot(b)
}

#[inline]
pub fn magnitude(a: DVec2) -> f64 {
    a.length()
}

/// Unit vector in the direction of `a`
///
/// Returns `None` for a zero-length (or non-finite) input, e.g. the
/// separation of two bodies sitting at exactly the same position.
#[inline]
pub fn normalize(a: DVec2) -> Option<DVec2> {
    a.try_normalize()
}

#[inline]
pub fn scale(a: DVec2, k: f64) -> DVec2 {
    a * k
}

#[inline]
pub fn add(a: DVec2, b: DVec2) -> DVec2 {
    a + b
}

#[inline]
pub fn sub(a: DVec2, b: DVec2) -> DVec2 {
    a - b
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: DVec2, p2: DVec2) -> f64 {
    p1.distance(p2)
}

/// `n` rotated by 90° counter-clockwise: `(-n.y, n.x)`
#[inline]
pub fn perpendicular(n: DVec2) -> DVec2 {
    n.perp()
}
