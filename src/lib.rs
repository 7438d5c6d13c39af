//! Block Breaker - a breakout game shell
//!
//! Core modules:
//! - `sim`: Deterministic screen state machine, star field, ember particles and the tick driver
//! - `renderer`: Drawing context, screen renderer, tessellation and the wgpu pipeline
//! - `platform`: Tick pacing and host input mapping
//! - `settings`: Optional JSON settings file

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Frame, Game, GamePhase, Input, Key};

/// Game configuration constants
pub mod consts {
    /// Canvas size in logical units (fixed, not resizable)
    pub const WIDTH: f32 = 600.0;
    pub const HEIGHT: f32 = 800.0;

    /// Default delay between ticks (~100 ticks per second)
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Maximum ticks run per host wake-up to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Star field
    pub const STAR_COUNT: usize = 150;
    pub const STAR_PHASE_STEP: f32 = 0.05;

    /// Particle pool
    pub const PARTICLE_CAPACITY: usize = 100;
    pub const PARTICLE_ALPHA_DECAY: f32 = 0.01;

    /// Game over embers: a burst every N ticks, rising from just above the bottom edge
    pub const EMBER_INTERVAL_TICKS: u64 = 10;
    pub const EMBER_BURST_SIZE: usize = 5;
    pub const EMBER_BOTTOM_MARGIN: f32 = 20.0;

    /// Play button diameter
    pub const BUTTON_SIZE: f32 = 80.0;
}

/// Build an opaque color from 8-bit components
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    rgba(r, g, b, 255)
}

/// Build a color from 8-bit components with alpha
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Replace the alpha channel of a color
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}
