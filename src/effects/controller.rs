//! Timed particle burst shown when a round is won.

use super::particle::{Particle, ParticleBounds};
use super::rng::RandomSource;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Particles per burst.
pub const DEFAULT_PARTICLE_COUNT: usize = 30;

/// Largest burst a configuration may ask for.
pub const MAX_PARTICLE_COUNT: usize = 1000;

/// How long a burst stays on screen.
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(3);

/// Tunables for the win burst.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSettings {
    /// Particles generated per burst.
    pub particle_count: usize,
    /// Delay before a burst clears itself.
    pub clear_after: Duration,
    /// Ranges particles are drawn from.
    pub bounds: ParticleBounds,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            clear_after: DEFAULT_CLEAR_AFTER,
            bounds: ParticleBounds::default(),
        }
    }
}

/// A clear waiting for the effect clock to reach `due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledClear {
    due: Duration,
}

/// Owns the current burst and its scheduled clear.
///
/// Time only moves through [`EffectsController::tick`], so the controller
/// stays synchronous and deterministic under test.
#[derive(Debug)]
pub struct EffectsController<R> {
    settings: EffectSettings,
    rng: R,
    particles: Vec<Particle>,
    next_id: u64,
    clock: Duration,
    started_at: Duration,
    pending: Option<ScheduledClear>,
}

impl<R: RandomSource> EffectsController<R> {
    /// Creates a controller with no active burst.
    pub fn new(settings: EffectSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            particles: Vec::new(),
            next_id: 0,
            clock: Duration::ZERO,
            started_at: Duration::ZERO,
            pending: None,
        }
    }

    /// Replaces the current batch with a fresh burst and schedules its clear.
    #[instrument(skip(self))]
    pub fn trigger_win_effect(&mut self) {
        let count = self.settings.particle_count.min(MAX_PARTICLE_COUNT);
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(Particle::random(
                self.next_id,
                &self.settings.bounds,
                &mut self.rng,
            ));
            self.next_id += 1;
        }
        self.particles = batch;
        self.started_at = self.clock;
        self.pending = Some(ScheduledClear {
            due: self.clock + self.settings.clear_after,
        });
        info!(
            count,
            clear_after_ms = self.settings.clear_after.as_millis() as u64,
            "Win effect triggered"
        );
    }

    /// Drops the current batch immediately and cancels its scheduled clear.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending effect clear");
        }
        self.particles.clear();
    }

    /// Advances the effect clock, firing the scheduled clear once it is due.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        if let Some(clear) = self.pending
            && clear.due <= self.clock
        {
            debug!(count = self.particles.len(), "Clearing win effect");
            self.particles.clear();
            self.pending = None;
        }
    }

    /// Particles currently on screen.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns true while a burst is on screen.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Time since the current burst started, if one is on screen.
    pub fn age(&self) -> Option<Duration> {
        self.is_active().then(|| self.clock - self.started_at)
    }

    /// Time left before the scheduled clear fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|clear| clear.due.saturating_sub(self.clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::SeededRandom;

    fn controller() -> EffectsController<SeededRandom> {
        EffectsController::new(EffectSettings::default(), SeededRandom::new(3))
    }

    #[test]
    fn test_trigger_creates_full_batch_in_bounds() {
        let mut fx = controller();
        fx.trigger_win_effect();

        assert_eq!(fx.particles().len(), DEFAULT_PARTICLE_COUNT);
        for p in fx.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((2.0..6.0).contains(&p.size));
            assert!((1.0..3.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_particle_ids_are_unique_across_batches() {
        let mut fx = controller();
        fx.trigger_win_effect();
        let first: Vec<u64> = fx.particles().iter().map(|p| p.id).collect();
        fx.reset();
        fx.trigger_win_effect();
        assert!(fx.particles().iter().all(|p| !first.contains(&p.id)));
    }

    #[test]
    fn test_clears_after_delay() {
        let mut fx = controller();
        fx.trigger_win_effect();

        fx.tick(Duration::from_millis(2999));
        assert!(fx.is_active());
        assert_eq!(fx.remaining(), Some(Duration::from_millis(1)));

        fx.tick(Duration::from_millis(1));
        assert!(!fx.is_active());
        assert_eq!(fx.remaining(), None);
    }

    #[test]
    fn test_reset_clears_immediately() {
        let mut fx = controller();
        fx.trigger_win_effect();
        fx.reset();
        assert!(fx.particles().is_empty());
        assert_eq!(fx.remaining(), None);
    }

    #[test]
    fn test_cancelled_clear_does_not_cut_next_burst_short() {
        let mut fx = controller();
        fx.trigger_win_effect();
        fx.tick(Duration::from_secs(1));
        fx.reset();
        fx.tick(Duration::from_secs(1));
        fx.trigger_win_effect();

        // The first burst's clear would have been due now.
        fx.tick(Duration::from_millis(1500));
        assert!(fx.is_active());

        fx.tick(Duration::from_millis(1500));
        assert!(!fx.is_active());
    }

    #[test]
    fn test_burst_size_is_capped() {
        let settings = EffectSettings {
            particle_count: usize::MAX,
            ..EffectSettings::default()
        };
        let mut fx = EffectsController::new(settings, SeededRandom::new(4));
        fx.trigger_win_effect();
        assert_eq!(fx.particles().len(), MAX_PARTICLE_COUNT);
    }

    #[test]
    fn test_age_tracks_current_burst() {
        let mut fx = controller();
        assert_eq!(fx.age(), None);
        fx.tick(Duration::from_secs(5));
        fx.trigger_win_effect();
        fx.tick(Duration::from_millis(250));
        assert_eq!(fx.age(), Some(Duration::from_millis(250)));
    }
}
