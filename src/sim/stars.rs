//! Twinkling background star field

use std::f32::consts::TAU;

use glam::Vec2;

use super::rng::ParamRng;
use crate::consts::*;

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Base alpha before twinkle modulation
    pub alpha: f32,
    /// Twinkle phase in radians, always in [0, 2π)
    pub phase: f32,
}

impl Star {
    /// Advance the twinkle phase, wrapping at 2π
    pub fn update(&mut self) {
        self.phase += STAR_PHASE_STEP;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }

    /// Alpha after twinkle: base * (0.7 + 0.3 sin(phase))
    #[inline]
    pub fn effective_alpha(&self) -> f32 {
        self.alpha * (0.7 + 0.3 * self.phase.sin())
    }
}

/// Fixed set of stars, generated once
#[derive(Debug, Clone)]
pub struct StarField {
    stars: [Star; STAR_COUNT],
}

impl StarField {
    pub fn generate(rng: &mut ParamRng) -> Self {
        Self {
            stars: std::array::from_fn(|_| {
                let p = rng.star();
                Star {
                    pos: p.pos,
                    size: p.size,
                    alpha: p.alpha,
                    phase: p.phase,
                }
            }),
        }
    }

    pub fn update_all(&mut self) {
        for star in &mut self.stars {
            star.update();
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
