//! Static screen layout in canvas space
//!
//! Panel and button geometry shared by hit-testing and rendering. All
//! positions are top-left corners in a y-down 600x800 canvas.

use glam::Vec2;

use super::sdf::{sd_circle, sd_round_box};
use crate::consts::*;

/// Axis-aligned rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Grow (positive) or shrink (negative) on every side
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            size: self.size + Vec2::splat(amount * 2.0),
        }
    }

    /// Point at fractional coordinates inside the rect (0,0 = top-left)
    #[inline]
    pub fn at(&self, fx: f32, fy: f32) -> Vec2 {
        self.min + self.size * Vec2::new(fx, fy)
    }
}

/// Circular play button on the start screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayButton {
    pub bounds: Rect,
}

impl PlayButton {
    /// Centered horizontally, just below the vertical middle
    pub const fn standard() -> Self {
        Self {
            bounds: Rect::new(
                (WIDTH - BUTTON_SIZE) / 2.0,
                HEIGHT / 2.0 + 30.0,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn radius(&self) -> f32 {
        self.bounds.size.x / 2.0
    }

    /// Strict containment: the boundary itself is outside
    pub fn contains(&self, p: Vec2) -> bool {
        sd_circle(p, self.center(), self.radius()) < 0.0
    }
}

/// A rounded rectangle; `arc` is the corner arc diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRect {
    pub rect: Rect,
    pub arc: f32,
}

impl RoundRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, arc: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            arc,
        }
    }

    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.arc / 2.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        sd_round_box(
            p,
            self.rect.center(),
            self.rect.size * 0.5,
            self.corner_radius(),
        ) < 0.0
    }
}

/// Start screen
pub const PLAY_BUTTON: PlayButton = PlayButton::standard();
pub const TITLE_PANEL: RoundRect = RoundRect::new(WIDTH / 2.0 - 250.0, 150.0, 500.0, 100.0, 20.0);
pub const TITLE_BASELINE: f32 = 220.0;
/// Caption sits 30 units below the button
pub const PLAY_CAPTION_GAP: f32 = 30.0;

/// Placeholder gameplay screen
pub const INFO_PANEL: RoundRect = RoundRect::new(WIDTH / 2.0 - 200.0, HEIGHT / 2.0 - 50.0, 400.0, 100.0, 15.0);
pub const INFO_BASELINES: [f32; 2] = [HEIGHT / 2.0 - 10.0, HEIGHT / 2.0 + 20.0];

/// Game over screen, laid out on integer thirds of the canvas height
pub const HEADER_PANEL: RoundRect = RoundRect::new(WIDTH / 2.0 - 200.0, 266.0 - 50.0, 400.0, 80.0, 15.0);
pub const HEADER_BASELINE: f32 = 266.0;
pub const SCORE_PANEL: RoundRect = RoundRect::new(WIDTH / 2.0 - 150.0, HEIGHT / 2.0 - 30.0, 300.0, 60.0, 15.0);
pub const SCORE_BASELINE: f32 = HEIGHT / 2.0 + 10.0;
pub const RESTART_BUTTON: RoundRect = RoundRect::new(WIDTH / 2.0 - 150.0, 533.0 - 25.0, 300.0, 50.0, 15.0);
pub const RESTART_BASELINE: f32 = 533.0 + 7.0;
