//! Canvas that tessellates everything into a colored triangle list

use glam::Vec2;

use super::canvas::{Canvas, Paint, Rect, RoundRect, TextStyle};
use super::shapes;
use super::text::Font;
use super::vertex::Vertex;
use crate::with_alpha;

pub struct MeshCanvas<'a> {
    font: &'a Font,
    vertices: Vec<Vertex>,
}

impl<'a> MeshCanvas<'a> {
    pub fn new(font: &'a Font) -> Self {
        Self {
            font,
            vertices: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl Canvas for MeshCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.vertices.extend(shapes::rect(rect, paint));
    }

    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint) {
        self.vertices.extend(shapes::ellipse(bounds, paint));
    }

    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, paint: &Paint) {
        self.vertices.extend(shapes::ellipse_ring(bounds, width, paint));
    }

    fn fill_round_rect(&mut self, shape: RoundRect, paint: &Paint) {
        self.vertices.extend(shapes::round_rect(shape, paint));
    }

    fn stroke_round_rect(&mut self, shape: RoundRect, width: f32, paint: &Paint) {
        self.vertices
            .extend(shapes::round_rect_ring(shape, width, paint));
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], paint: &Paint) {
        self.vertices.extend(shapes::triangle(points, paint));
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, style: TextStyle, paint: &Paint) {
        let vertices = &mut self.vertices;
        self.font.rasterize(text, origin, style, |cell, coverage| {
            // Coverage scales the paint's alpha at the cell's center
            let base = paint.color_at(cell.center());
            let solid = Paint::Solid(with_alpha(base, base[3] * coverage));
            vertices.extend(shapes::rect(cell, &solid));
        });
    }

    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        self.font.measure(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_shapes_append_in_order() {
        let font = Font::builtin();
        let mut canvas = MeshCanvas::new(&font);
        canvas.fill_rect(Rect::new(0.0, 0.0, 600.0, 800.0), &Paint::Solid(WHITE));
        assert_eq!(canvas.vertices().len(), 6);
        canvas.fill_triangle(
            [Vec2::ZERO, Vec2::X, Vec2::Y],
            &Paint::Solid([1.0, 0.0, 0.0, 1.0]),
        );
        let vertices = canvas.into_vertices();
        assert_eq!(vertices.len(), 9);
        assert_eq!(vertices[8].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_text_uses_paint_alpha() {
        let font = Font::builtin();
        let mut canvas = MeshCanvas::new(&font);
        let paint = Paint::Solid([1.0, 1.0, 1.0, 0.5]);
        canvas.draw_text("HI", Vec2::new(10.0, 40.0), TextStyle::bold(20.0), &paint);
        let vertices = canvas.vertices();
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 6, 0);
        assert!(vertices.iter().all(|v| v.color[3] == 0.5));
    }

    #[test]
    fn test_centered_text_is_centered() {
        let font = Font::builtin();
        let mut canvas = MeshCanvas::new(&font);
        let style = TextStyle::plain(20.0);
        canvas.draw_text_centered("OO", 300.0, 100.0, style, &Paint::Solid(WHITE));
        let xs = canvas.vertices().iter().map(|v| v.position[0]);
        let (lo, hi) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
        assert!(((lo + hi) / 2.0 - 300.0).abs() < 1e-3);
    }
}
