//! Fixed-capacity ember particle pool
//!
//! Slots are allocated round-robin from an explicit cursor. A slot is either
//! empty (`None`: never used, or cleared on restart) or holds a particle. A
//! particle whose alpha has reached zero is dead: it is skipped by updates and
//! drawing but keeps its slot until the cursor comes around and overwrites it.

use glam::Vec2;

use super::rng::ParamRng;
use crate::consts::*;

/// A single ember
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 1.0 when spawned, decays to 0.0
    pub alpha: f32,
    pub color: [f32; 4],
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    /// Move by velocity and fade; alpha clamps at zero
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.alpha = (self.alpha - PARTICLE_ALPHA_DECAY).max(0.0);
    }
}

/// Circular pool of particle slots
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: [Option<Particle>; PARTICLE_CAPACITY],
    cursor: usize,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: [None; PARTICLE_CAPACITY],
            cursor: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        PARTICLE_CAPACITY
    }

    /// Position the allocation cursor at `offset mod capacity`
    pub fn seek(&mut self, offset: u64) {
        self.cursor = (offset % PARTICLE_CAPACITY as u64) as usize;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Spawn `count` particles at `origin`, overwriting slots from the cursor on
    pub fn emit(&mut self, count: usize, origin: Vec2, color: [f32; 4], rng: &mut ParamRng) {
        for _ in 0..count {
            let motion = rng.particle_motion();
            self.slots[self.cursor] = Some(Particle {
                pos: origin,
                vel: motion.vel,
                size: motion.size,
                alpha: 1.0,
                color,
            });
            self.cursor = (self.cursor + 1) % PARTICLE_CAPACITY;
        }
    }

    /// Advance every live particle; dead and empty slots are left alone
    pub fn update_all(&mut self) {
        for particle in self.slots.iter_mut().flatten() {
            if particle.is_alive() {
                particle.update();
            }
        }
    }

    /// Empty every slot and rewind the cursor
    pub fn clear(&mut self) {
        self.slots = [None; PARTICLE_CAPACITY];
        self.cursor = 0;
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().flatten().filter(|p| p.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.iter_live().count()
    }

    /// Slots holding a particle, dead or alive
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn slot(&self, index: usize) -> Option<&Particle> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}
