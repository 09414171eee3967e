//! Radial particle bursts

use nightsky_math::Vec2;
use slotmap::new_key_type;

use crate::config::BurstConfig;
use crate::random::RandomSource;

new_key_type! {
    /// Key to a burst group owned by the engine
    ///
    /// Groups are pruned once they are spent, so a key may outlive its group;
    /// lookups through a stale key return None.
    pub struct BurstKey;
}

/// A single particle radiating out of a burst
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Direction of travel in radians (fixed for the particle's life)
    pub angle: f32,
    /// Distance covered per frame
    pub speed: f32,
    /// Current opacity; the particle is dropped once this reaches zero
    pub opacity: f32,
    pub size: f32,
}

impl Particle {
    pub fn new(position: Vec2, angle: f32, speed: f32, opacity: f32, size: f32) -> Self {
        Self {
            position,
            angle,
            speed,
            opacity,
            size,
        }
    }

    /// Random particle leaving `origin`
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, origin: Vec2, config: &BurstConfig) -> Self {
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let speed = rng.range(config.speed_min, config.speed_max);
        let size = rng.range(config.size_min, config.size_max);
        Self::new(origin, angle, speed, config.initial_opacity, size)
    }

    /// Move along the fixed heading and fade by `decay`
    pub fn advance(&mut self, decay: f32) {
        self.position += Vec2::from_angle(self.angle) * self.speed;
        self.opacity -= decay;
    }

    pub fn is_spent(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// A cluster of particles spawned from one origin
#[derive(Clone, Debug, PartialEq)]
pub struct BurstGroup {
    pub origin: Vec2,
    pub particles: Vec<Particle>,
}

impl BurstGroup {
    pub fn new(origin: Vec2, particles: Vec<Particle>) -> Self {
        Self { origin, particles }
    }

    /// Group with a random particle count drawn from the configured range
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, origin: Vec2, config: &BurstConfig) -> Self {
        let (min, max) = config.particle_range();
        let count = rng.range_inclusive(min, max);
        let particles = (0..count)
            .map(|_| Particle::random(&mut *rng, origin, config))
            .collect();
        Self::new(origin, particles)
    }

    /// Advance every particle one frame and drop the ones that faded out
    ///
    /// Returns the number of particles removed.
    pub fn update(&mut self, decay: f32) -> usize {
        let before = self.particles.len();
        for particle in &mut self.particles {
            particle.advance(decay);
        }
        self.particles.retain(|p| !p.is_spent());
        before - self.particles.len()
    }

    /// No particles left; the group has no further visual effect
    pub fn is_spent(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_particle_advance_along_angle() {
        let mut p = Particle::new(Vec2::new(100.0, 100.0), std::f32::consts::FRAC_PI_2, 2.0, 1.0, 1.0);
        p.advance(0.015);
        assert!((p.position.x - 100.0).abs() < 0.0001);
        assert!((p.position.y - 102.0).abs() < 0.0001);
        assert!((p.opacity - 0.985).abs() < 0.0001);
    }

    #[test]
    fn test_random_group_count_bounds() {
        let config = BurstConfig::default();

        let mut low = ScriptedRandom::constant(0.0);
        assert_eq!(BurstGroup::random(&mut low, Vec2::ZERO, &config).len(), 4);

        let mut high = ScriptedRandom::constant(0.999);
        assert_eq!(BurstGroup::random(&mut high, Vec2::ZERO, &config).len(), 13);
    }

    #[test]
    fn test_random_particles_start_at_origin() {
        let config = BurstConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.3, 0.6, 0.9]);
        let origin = Vec2::new(40.0, 50.0);
        let group = BurstGroup::random(&mut rng, origin, &config);

        assert_eq!(group.origin, origin);
        for p in &group.particles {
            assert_eq!(p.position, origin);
            assert_eq!(p.opacity, config.initial_opacity);
            assert!(p.speed >= config.speed_min && p.speed < config.speed_max);
        }
    }

    #[test]
    fn test_update_drops_spent_particles() {
        let mut group = BurstGroup::new(
            Vec2::ZERO,
            vec![
                Particle::new(Vec2::ZERO, 0.0, 1.0, 0.01, 1.0),
                Particle::new(Vec2::ZERO, 0.0, 1.0, 1.0, 1.0),
            ],
        );

        let removed = group.update(0.015);

        assert_eq!(removed, 1);
        assert_eq!(group.len(), 1);
        assert!(!group.is_spent());
    }

    #[test]
    fn test_exact_zero_counts_as_spent() {
        let mut group = BurstGroup::new(Vec2::ZERO, vec![Particle::new(Vec2::ZERO, 0.0, 1.0, 0.5, 1.0)]);
        group.update(0.5);
        assert!(group.is_spent());
    }
}
