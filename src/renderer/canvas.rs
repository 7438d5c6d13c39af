//! Abstract 2D drawing context
//!
//! Everything the screen renderer draws goes through [`Canvas`]: filled and
//! stroked ellipses, rounded rectangles, triangles, solid or gradient paint
//! with straight alpha, and text with measurable width.

use glam::Vec2;

pub use crate::sim::layout::{Rect, RoundRect};

/// How a shape is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid([f32; 4]),
    /// Linear gradient between two points.
    ///
    /// Acyclic gradients clamp to the end colors beyond the end points; cyclic
    /// ones reflect back and forth (start -> end -> start ...).
    LinearGradient {
        start: Vec2,
        start_color: [f32; 4],
        end: Vec2,
        end_color: [f32; 4],
        cyclic: bool,
    },
}

impl Paint {
    pub fn gradient(start: Vec2, start_color: [f32; 4], end: Vec2, end_color: [f32; 4]) -> Self {
        Paint::LinearGradient {
            start,
            start_color,
            end,
            end_color,
            cyclic: false,
        }
    }

    pub fn cyclic_gradient(
        start: Vec2,
        start_color: [f32; 4],
        end: Vec2,
        end_color: [f32; 4],
    ) -> Self {
        Paint::LinearGradient {
            start,
            start_color,
            end,
            end_color,
            cyclic: true,
        }
    }

    /// Color at a point in canvas space
    pub fn color_at(&self, p: Vec2) -> [f32; 4] {
        match *self {
            Paint::Solid(color) => color,
            Paint::LinearGradient {
                start,
                start_color,
                end,
                end_color,
                cyclic,
            } => {
                let axis = end - start;
                let len_sq = axis.length_squared();
                if len_sq <= f32::EPSILON {
                    return start_color;
                }
                let t = (p - start).dot(axis) / len_sq;
                let t = if cyclic {
                    // Triangle wave: 0 -> 1 -> 0 every two gradient lengths
                    let m = t.rem_euclid(2.0);
                    if m > 1.0 { 2.0 - m } else { m }
                } else {
                    t.clamp(0.0, 1.0)
                };
                lerp_color(start_color, end_color, t)
            }
        }
    }
}

impl From<[f32; 4]> for Paint {
    fn from(color: [f32; 4]) -> Self {
        Paint::Solid(color)
    }
}

/// Component-wise color interpolation
#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    Plain,
    #[default]
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in canvas units
    pub size: f32,
    pub weight: Weight,
}

impl TextStyle {
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Bold,
        }
    }

    pub const fn plain(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Plain,
        }
    }
}

/// A 2D drawing surface in a y-down canvas space
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint);

    /// Outline centered on the ellipse inscribed in `bounds`
    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, paint: &Paint);

    fn fill_round_rect(&mut self, shape: RoundRect, paint: &Paint);

    fn stroke_round_rect(&mut self, shape: RoundRect, width: f32, paint: &Paint);

    fn fill_triangle(&mut self, points: [Vec2; 3], paint: &Paint);

    /// Draw text with its left end of the baseline at `origin`
    fn draw_text(&mut self, text: &str, origin: Vec2, style: TextStyle, paint: &Paint);

    /// Advance width of `text` in canvas units
    fn text_width(&self, text: &str, style: TextStyle) -> f32;

    /// Draw text horizontally centered on `center_x`
    fn draw_text_centered(
        &mut self,
        text: &str,
        center_x: f32,
        baseline: f32,
        style: TextStyle,
        paint: &Paint,
    ) {
        let width = self.text_width(text, style);
        self.draw_text(
            text,
            Vec2::new(center_x - width / 2.0, baseline),
            style,
            paint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_solid_is_constant() {
        let p = Paint::Solid(WHITE);
        assert_eq!(p.color_at(Vec2::new(-100.0, 5000.0)), WHITE);
    }

    #[test]
    fn test_acyclic_gradient_clamps() {
        let p = Paint::gradient(Vec2::ZERO, BLACK, Vec2::new(0.0, 100.0), WHITE);
        assert!(close(p.color_at(Vec2::new(50.0, -10.0)), BLACK));
        assert!(close(p.color_at(Vec2::new(0.0, 50.0)), [0.5, 0.5, 0.5, 1.0]));
        assert!(close(p.color_at(Vec2::new(0.0, 300.0)), WHITE));
    }

    #[test]
    fn test_cyclic_gradient_reflects() {
        let p = Paint::cyclic_gradient(Vec2::ZERO, BLACK, Vec2::new(100.0, 0.0), WHITE);
        assert!(close(p.color_at(Vec2::new(100.0, 0.0)), WHITE));
        assert!(close(p.color_at(Vec2::new(150.0, 0.0)), [0.5, 0.5, 0.5, 1.0]));
        assert!(close(p.color_at(Vec2::new(200.0, 0.0)), BLACK));
        assert!(close(p.color_at(Vec2::new(-50.0, 0.0)), [0.5, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn test_degenerate_gradient_uses_start_color() {
        let p = Paint::gradient(Vec2::ONE, BLACK, Vec2::ONE, WHITE);
        assert_eq!(p.color_at(Vec2::new(9.0, 9.0)), BLACK);
    }
}
