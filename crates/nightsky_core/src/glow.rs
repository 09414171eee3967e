//! Neon glow rendering primitive

use nightsky_math::{Rgba, Vec2};

use crate::config::GlowConfig;
use crate::surface::{GradientStop, RadialGradient, Surface};

/// Soft radial glow: bright core, secondary hue at half radius, transparent rim
///
/// Used identically for stars and burst particles; only the radius and the
/// opacity differ between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct NeonGlow {
    pub core: Rgba,
    pub mid: Rgba,
}

impl NeonGlow {
    pub fn new(core: Rgba, mid: Rgba) -> Self {
        Self { core, mid }
    }

    pub fn from_config(config: &GlowConfig) -> Self {
        Self::new(
            Rgba::from_array(config.core_color),
            Rgba::from_array(config.mid_color),
        )
    }

    /// Gradient for a given opacity
    pub fn gradient(&self, opacity: f32) -> RadialGradient {
        let opacity = opacity.clamp(0.0, 1.0);
        RadialGradient::new(vec![
            GradientStop::new(0.0, self.core.fade(opacity)),
            GradientStop::new(0.5, self.mid.fade(opacity)),
            GradientStop::new(1.0, self.mid.with_alpha(0.0)),
        ])
    }

    /// Paint a glow; nothing is drawn for a non-positive radius or opacity
    pub fn paint(&self, surface: &mut dyn Surface, center: Vec2, radius: f32, opacity: f32) {
        if radius <= 0.0 || opacity <= 0.0 {
            return;
        }
        surface.fill_circle(center, radius, &self.gradient(opacity));
    }
}

impl Default for NeonGlow {
    fn default() -> Self {
        Self::from_config(&GlowConfig::default())
    }
}
