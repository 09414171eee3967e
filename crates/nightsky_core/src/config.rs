//! Engine configuration
//!
//! These types are deserialized straight out of the application config, so
//! every field has a default and partial tables are accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest accepted spawn interval
const MIN_INTERVAL_MS: u64 = 1;

/// Configuration for the whole particle engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub stars: StarConfig,
    #[serde(default)]
    pub bursts: BurstConfig,
    #[serde(default)]
    pub glow: GlowConfig,
}

/// Background star population
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    /// Fixed population size
    pub count: usize,
    /// Fall speed range in pixels per frame
    pub speed_min: f32,
    pub speed_max: f32,
    /// Radius range in pixels
    pub radius_min: f32,
    pub radius_max: f32,
    /// Opacity range (fixed per star until it is recycled)
    pub opacity_min: f32,
    pub opacity_max: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 200,
            speed_min: 0.2,
            speed_max: 0.8,
            radius_min: 0.5,
            radius_max: 2.0,
            opacity_min: 0.3,
            opacity_max: 1.0,
        }
    }
}

/// Burst emission and particle behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Spawn timer interval in milliseconds
    pub interval_ms: u64,
    /// Stop emitting after this many milliseconds (None = until cancelled)
    pub cutoff_ms: Option<u64>,
    /// Particle count range per group (inclusive)
    pub min_particles: usize,
    pub max_particles: usize,
    /// Particle speed range in pixels per frame
    pub speed_min: f32,
    pub speed_max: f32,
    /// Particle size range in pixels
    pub size_min: f32,
    pub size_max: f32,
    /// Opacity a fresh particle starts with
    pub initial_opacity: f32,
    /// Opacity lost per frame
    pub decay: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            cutoff_ms: None,
            min_particles: 4,
            max_particles: 13,
            speed_min: 1.0,
            speed_max: 4.0,
            size_min: 1.0,
            size_max: 3.0,
            initial_opacity: 1.0,
            decay: 0.015,
        }
    }
}

impl BurstConfig {
    /// Spawn interval, never shorter than one millisecond
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Celebration window length
    pub fn cutoff(&self) -> Option<Duration> {
        self.cutoff_ms.map(Duration::from_millis)
    }

    /// Particle count bounds with min <= max
    pub fn particle_range(&self) -> (usize, usize) {
        let min = self.min_particles.min(self.max_particles);
        let max = self.min_particles.max(self.max_particles);
        (min, max)
    }
}

/// Neon glow colors and sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Color at the center of the glow [r, g, b, a]
    pub core_color: [f32; 4],
    /// Color halfway out [r, g, b, a]
    pub mid_color: [f32; 4],
    /// Glow radius = star radius * this
    pub star_scale: f32,
    /// Glow radius = particle size * this
    pub particle_scale: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            core_color: [0.85, 1.0, 1.0, 1.0],
            mid_color: [0.0, 0.9, 1.0, 0.45],
            star_scale: 4.0,
            particle_scale: 2.0,
        }
    }
}

/// Typewriter phrases and timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    /// Delay after typing a character
    pub type_ms: u64,
    /// Delay after deleting a character
    pub delete_ms: u64,
    /// Pause once a phrase is fully typed
    pub hold_ms: u64,
    /// Pause before typing the next phrase
    pub next_phrase_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "SaaS Platforms".to_string(),
                "Secure APIs".to_string(),
                "Workflow Automation".to_string(),
            ],
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_phrase_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.stars.count, 200);
        assert_eq!(config.bursts.interval(), Duration::from_millis(100));
        assert_eq!(config.bursts.decay, 0.015);
        assert_eq!(config.bursts.particle_range(), (4, 13));
        assert!(config.bursts.cutoff().is_none());
    }

    #[test]
    fn test_interval_has_a_floor() {
        let config = BurstConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_particle_range_is_ordered() {
        let config = BurstConfig {
            min_particles: 9,
            max_particles: 3,
            ..Default::default()
        };
        assert_eq!(config.particle_range(), (3, 9));
    }
}
