//! Decorative effects with no gameplay significance.

mod controller;
mod particle;
mod rng;

pub use controller::{
    DEFAULT_CLEAR_AFTER, DEFAULT_PARTICLE_COUNT, EffectSettings, EffectsController,
    MAX_PARTICLE_COUNT,
};
pub use particle::{Particle, ParticleBounds};
pub use rng::{RandomSource, SeededRandom};
