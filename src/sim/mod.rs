//! Deterministic simulation module
//!
//! Screen state, background animation and the tick driver. This module must
//! stay pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod layout;
pub mod particles;
pub mod rng;
pub mod sdf;
pub mod stars;
pub mod state;
pub mod tick;

pub use layout::{PLAY_BUTTON, PlayButton, Rect, RoundRect};
pub use particles::{Particle, ParticlePool};
pub use rng::{EMBER_COLORS, ParamRng};
pub use stars::{Star, StarField};
pub use state::{GamePhase, GameState, Input, Key, Transition};
pub use tick::{Frame, Game, ParticleSprite, StarSprite, TickHost, TickReport};
