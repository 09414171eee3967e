//! Drawing surface abstraction
//!
//! The engine renders through [`Surface`], an immediate-mode 2D target that
//! only needs to clear itself and fill circles with a radial gradient. The
//! engine never reads pixels back.

use nightsky_math::{Rgba, Vec2};

/// A color stop in a radial gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Distance from the center as a fraction of the radius (0.0 - 1.0)
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient sampled by normalized distance from the center
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Build a gradient; stops are sorted by offset
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at normalized distance `t`, clamped to the first/last stop
    pub fn sample(&self, t: f32) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgba::TRANSPARENT,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }
}

/// Immediate-mode 2D drawing target
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Match the surface to new viewport dimensions
    fn resize(&mut self, width: u32, height: u32);

    /// Clear everything to fully transparent
    fn clear(&mut self);

    /// Fill a circular path with a radial gradient centered on it
    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient);
}

/// A recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        gradient: RadialGradient,
    },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Everything drawn so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Circles drawn since the last clear
    pub fn circles_since_clear(&self) -> impl Iterator<Item = &DrawCommand> {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        self.commands[start..].iter()
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            gradient: gradient.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stop() -> RadialGradient {
        RadialGradient::new(vec![
            GradientStop::new(1.0, Rgba::TRANSPARENT),
            GradientStop::new(0.0, Rgba::WHITE),
            GradientStop::new(0.5, Rgba::new(0.0, 0.0, 1.0, 0.5)),
        ])
    }

    #[test]
    fn test_stops_are_sorted() {
        let g = three_stop();
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_at_stops_and_between() {
        let g = three_stop();
        assert_eq!(g.sample(0.0), Rgba::WHITE);
        assert_eq!(g.sample(0.5), Rgba::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(g.sample(1.0), Rgba::TRANSPARENT);
        assert_eq!(g.sample(0.25), Rgba::new(0.5, 0.5, 1.0, 0.75));
        assert_eq!(g.sample(2.0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        assert_eq!(RadialGradient::new(Vec::new()).sample(0.3), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_recording_surface() {
        let mut surface = RecordingSurface::new(10, 20);
        surface.fill_circle(Vec2::ZERO, 1.0, &three_stop());
        surface.clear();
        surface.fill_circle(Vec2::new(1.0, 1.0), 2.0, &three_stop());

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.circles_since_clear().count(), 1);

        surface.resize(30, 40);
        assert_eq!((surface.width(), surface.height()), (30, 40));
        assert_eq!(surface.take_commands().len(), 3);
        assert!(surface.commands().is_empty());
    }
}
