//! Signed distance functions for hit-testing
//!
//! Negative inside, zero on the boundary, positive outside.

use glam::Vec2;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box with rounded corners
///
/// `half_size` is measured to the straight edges; `corner` is the corner radius
/// and is clamped to the smaller half extent.
pub fn sd_round_box(p: Vec2, center: Vec2, half_size: Vec2, corner: f32) -> f32 {
    let corner = corner.clamp(0.0, half_size.x.min(half_size.y));
    let q = (p - center).abs() - half_size + Vec2::splat(corner);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - corner
}
