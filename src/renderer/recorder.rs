//! Canvas that records draw calls instead of drawing
//!
//! Text is measured with the built-in font metrics, so centered text lands
//! where it would with the fallback font.

use glam::Vec2;

use super::builtin_font;
use super::canvas::{Canvas, Paint, Rect, RoundRect, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(Rect, Paint),
    FillEllipse(Rect, Paint),
    StrokeEllipse(Rect, f32, Paint),
    FillRoundRect(RoundRect, Paint),
    StrokeRoundRect(RoundRect, f32, Paint),
    FillTriangle([Vec2; 3], Paint),
    Text {
        text: String,
        origin: Vec2,
        style: TextStyle,
        paint: Paint,
    },
}

#[derive(Debug, Default, Clone)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

impl Canvas for CommandList {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect(rect, *paint));
    }

    fn fill_ellipse(&mut self, bounds: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillEllipse(bounds, *paint));
    }

    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, paint: &Paint) {
        self.commands
            .push(DrawCommand::StrokeEllipse(bounds, width, *paint));
    }

    fn fill_round_rect(&mut self, shape: RoundRect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRoundRect(shape, *paint));
    }

    fn stroke_round_rect(&mut self, shape: RoundRect, width: f32, paint: &Paint) {
        self.commands
            .push(DrawCommand::StrokeRoundRect(shape, width, *paint));
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], paint: &Paint) {
        self.commands.push(DrawCommand::FillTriangle(points, *paint));
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, style: TextStyle, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            style,
            paint: *paint,
        });
    }

    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        builtin_font::measure(text, style.size)
    }
}
