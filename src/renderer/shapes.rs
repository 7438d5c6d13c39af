//! Shape generation for 2D primitives
//!
//! Every shape comes out as a triangle list. Paint is sampled at each vertex,
//! so linear gradients are reproduced exactly along straight edges and
//! closely on curved ones.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::canvas::{Paint, Rect, RoundRect};
use super::vertex::Vertex;

/// Segment counts are clamped to this range
const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 96;

#[inline]
fn vertex(p: Vec2, paint: &Paint) -> Vertex {
    Vertex::new(p.x, p.y, paint.color_at(p))
}

/// Segments for a full turn at the given radius (about one per 3 units of arc)
pub fn segments_for(radius: f32) -> u32 {
    ((TAU * radius / 3.0).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Points on the ellipse inscribed in `bounds`, offset outwards by `offset`
fn ellipse_points(bounds: Rect, offset: f32, segments: u32) -> Vec<Vec2> {
    let center = bounds.center();
    let radii = (bounds.size * 0.5 + Vec2::splat(offset)).max(Vec2::ZERO);
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            center + radii * Vec2::new(theta.cos(), theta.sin())
        })
        .collect()
}

/// Outline of a rounded rect, clockwise in y-down space starting at the
/// top-right corner. Every corner contributes `corner_segments + 1` points.
fn round_rect_points(rect: Rect, radius: f32, corner_segments: u32) -> Vec<Vec2> {
    let radius = radius.clamp(0.0, rect.size.x.min(rect.size.y) / 2.0);
    let (min, max) = (rect.min, rect.max());
    // Corner arc centers with the angle each arc starts at
    let corners = [
        (Vec2::new(max.x - radius, min.y + radius), -FRAC_PI_2),
        (Vec2::new(max.x - radius, max.y - radius), 0.0),
        (Vec2::new(min.x + radius, max.y - radius), FRAC_PI_2),
        (Vec2::new(min.x + radius, min.y + radius), PI),
    ];

    let mut points = Vec::with_capacity(4 * (corner_segments as usize + 1));
    for (center, start) in corners {
        for i in 0..=corner_segments {
            let theta = start + (i as f32 / corner_segments as f32) * FRAC_PI_2;
            points.push(center + radius * Vec2::new(theta.cos(), theta.sin()));
        }
    }
    points
}

fn corner_segments(radius: f32) -> u32 {
    (segments_for(radius) / 4).max(3)
}

/// Fan-triangulate a convex polygon around `center`
fn fan(center: Vec2, outline: &[Vec2], paint: &Paint) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    let c = vertex(center, paint);
    for (i, p1) in outline.iter().enumerate() {
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(c);
        vertices.push(vertex(*p1, paint));
        vertices.push(vertex(p2, paint));
    }
    vertices
}

/// Join two closed outlines with the same point count into a band
fn band(inner: &[Vec2], outer: &[Vec2], paint: &Paint) -> Vec<Vertex> {
    debug_assert_eq!(inner.len(), outer.len());
    let n = inner.len();
    let mut vertices = Vec::with_capacity(n * 6);
    for i in 0..n {
        let j = (i + 1) % n;
        let (inner1, outer1) = (vertex(inner[i], paint), vertex(outer[i], paint));
        let (inner2, outer2) = (vertex(inner[j], paint), vertex(outer[j], paint));

        // Two triangles per segment
        vertices.push(inner1);
        vertices.push(outer1);
        vertices.push(inner2);

        vertices.push(inner2);
        vertices.push(outer1);
        vertices.push(outer2);
    }
    vertices
}

/// Generate vertices for a filled rectangle
pub fn rect(rect: Rect, paint: &Paint) -> Vec<Vertex> {
    let (min, max) = (rect.min, rect.max());
    let tl = vertex(min, paint);
    let tr = vertex(Vec2::new(max.x, min.y), paint);
    let bl = vertex(Vec2::new(min.x, max.y), paint);
    let br = vertex(max, paint);
    vec![tl, tr, bl, bl, tr, br]
}

/// Generate vertices for a filled ellipse inscribed in `bounds`
pub fn ellipse(bounds: Rect, paint: &Paint) -> Vec<Vertex> {
    let radius = bounds.size.x.max(bounds.size.y) / 2.0;
    let outline = ellipse_points(bounds, 0.0, segments_for(radius));
    fan(bounds.center(), &outline, paint)
}

/// Generate vertices for an ellipse outline of `width`, centered on the
/// ellipse inscribed in `bounds`
pub fn ellipse_ring(bounds: Rect, width: f32, paint: &Paint) -> Vec<Vertex> {
    let half = width / 2.0;
    let segments = segments_for(bounds.size.x.max(bounds.size.y) / 2.0 + half);
    let inner = ellipse_points(bounds, -half, segments);
    let outer = ellipse_points(bounds, half, segments);
    band(&inner, &outer, paint)
}

/// Generate vertices for a filled rounded rectangle
pub fn round_rect(shape: RoundRect, paint: &Paint) -> Vec<Vertex> {
    let radius = shape.corner_radius();
    let outline = round_rect_points(shape.rect, radius, corner_segments(radius));
    fan(shape.rect.center(), &outline, paint)
}

/// Generate vertices for a rounded rectangle outline of `width`, centered on
/// the shape's edge
pub fn round_rect_ring(shape: RoundRect, width: f32, paint: &Paint) -> Vec<Vertex> {
    let half = width / 2.0;
    let radius = shape.corner_radius();
    let segments = corner_segments(radius + half);
    let inner = round_rect_points(shape.rect.inflate(-half), (radius - half).max(0.0), segments);
    let outer = round_rect_points(shape.rect.inflate(half), radius + half, segments);
    band(&inner, &outer, paint)
}

/// Generate vertices for a filled triangle
pub fn triangle(points: [Vec2; 3], paint: &Paint) -> Vec<Vertex> {
    points.iter().map(|p| vertex(*p, paint)).collect()
}
