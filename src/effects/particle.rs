//! Particle tokens for the win burst.

use super::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Duration;

/// A decorative particle.
///
/// Position is a percentage of the canvas on each axis. `duration` is the
/// length of one pulse in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Unique within a session.
    pub id: u64,
    /// Horizontal position, 0-100.
    pub x: f32,
    /// Vertical position, 0-100.
    pub y: f32,
    /// Size in pixels of the original page; drives the glyph in the terminal.
    pub size: f32,
    /// Pulse duration in seconds.
    pub duration: f32,
}

/// Ranges particles are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBounds {
    /// Size range.
    pub size: Range<f32>,
    /// Pulse duration range, in seconds.
    pub duration: Range<f32>,
}

impl Default for ParticleBounds {
    fn default() -> Self {
        Self {
            size: 2.0..6.0,
            duration: 1.0..3.0,
        }
    }
}

impl Particle {
    /// Draws a particle with the given id from `rng`.
    pub fn random<R: RandomSource>(id: u64, bounds: &ParticleBounds, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.uniform(0.0, 100.0),
            y: rng.uniform(0.0, 100.0),
            size: rng.uniform(bounds.size.start, bounds.size.end),
            duration: rng.uniform(bounds.duration.start, bounds.duration.end),
        }
    }

    /// Position within the current pulse, 0.0 at its start and approaching 1.0 at its end.
    pub fn pulse(&self, age: Duration) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (age.as_secs_f32() % self.duration) / self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Midpoint;

    impl RandomSource for Midpoint {
        fn uniform(&mut self, low: f32, high: f32) -> f32 {
            (low + high) / 2.0
        }
    }

    #[test]
    fn test_random_uses_bounds() {
        let p = Particle::random(9, &ParticleBounds::default(), &mut Midpoint);
        assert_eq!(p.id, 9);
        assert_eq!((p.x, p.y), (50.0, 50.0));
        assert_eq!(p.size, 4.0);
        assert_eq!(p.duration, 2.0);
    }

    #[test]
    fn test_pulse_wraps() {
        let p = Particle::random(0, &ParticleBounds::default(), &mut Midpoint);
        assert_eq!(p.pulse(Duration::ZERO), 0.0);
        assert!((p.pulse(Duration::from_millis(500)) - 0.25).abs() < 1e-6);
        assert!((p.pulse(Duration::from_millis(2500)) - 0.25).abs() < 1e-6);
    }
}
