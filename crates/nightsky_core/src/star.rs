//! Background stars

use nightsky_math::Vec2;

use crate::config::StarConfig;
use crate::random::RandomSource;

/// A background particle falling at constant speed
///
/// Stars are never destroyed: when one leaves the bottom edge it is
/// re-randomized in place above the visible area.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Position in surface space
    pub position: Vec2,
    /// Fall speed in pixels per frame
    pub speed: f32,
    /// Radius in pixels
    pub radius: f32,
    /// Opacity (0.0 - 1.0), fixed until the star is recycled
    pub opacity: f32,
}

impl Star {
    /// Create a star somewhere on the visible surface
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, bounds: Vec2, config: &StarConfig) -> Self {
        let x = rng.range(0.0, bounds.x);
        let y = rng.range(0.0, bounds.y);
        let mut star = Self {
            position: Vec2::new(x, y),
            speed: 0.0,
            radius: 0.0,
            opacity: 0.0,
        };
        star.randomize_look(rng, config);
        star
    }

    /// Re-randomize in place, starting above the top edge
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R, bounds: Vec2, config: &StarConfig) {
        self.position.x = rng.range(0.0, bounds.x);
        // At least one pixel above the top so a reset star is never visible yet
        self.position.y = -(1.0 + rng.range(0.0, bounds.y.max(0.0)));
        self.randomize_look(rng, config);
    }

    /// Advance one frame; returns true if the star was recycled
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: Vec2,
        config: &StarConfig,
    ) -> bool {
        self.position.y += self.speed;
        if self.position.y > bounds.y {
            self.reset(rng, bounds, config);
            true
        } else {
            false
        }
    }

    fn randomize_look<R: RandomSource + ?Sized>(&mut self, rng: &mut R, config: &StarConfig) {
        self.speed = rng.range(config.speed_min, config.speed_max);
        self.radius = rng.range(config.radius_min, config.radius_max);
        self.opacity = rng.range(config.opacity_min, config.opacity_max).clamp(0.0, 1.0);
    }
}
