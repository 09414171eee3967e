//! CPU raster surface
//!
//! Implements the engine's [`Surface`] on a premultiplied RGBA buffer with
//! source-over compositing, the same model a 2D canvas uses.

use nightsky_core::{RadialGradient, Surface};
use nightsky_math::{Rgba, Vec2};

/// Premultiplied-alpha pixel buffer
pub struct PixelSurface {
    width: u32,
    height: u32,
    /// Row-major, premultiplied
    pixels: Vec<Rgba>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    /// Premultiplied pixel at (x, y), None outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// True if every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p.a == 0.0)
    }

    /// 8-bit premultiplied RGBA, row-major, for texture upload
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.extend_from_slice(&p.to_rgba8());
        }
        out
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Source-over blend of a premultiplied color into one pixel
    #[inline]
    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let idx = self.index(x, y);
        let dst = self.pixels[idx];
        let inv = 1.0 - src.a;
        self.pixels[idx] = Rgba::new(
            src.r + dst.r * inv,
            src.g + dst.g * inv,
            src.b + dst.b * inv,
            src.a + dst.a * inv,
        );
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        // Contents are discarded; the next frame clears and redraws anyway
        self.pixels = vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)];
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        // Pixel bounding box of the circle, clipped to the surface
        let min_x = (center.x - radius).floor().max(0.0) as u32;
        let min_y = (center.y - radius).floor().max(0.0) as u32;
        let max_x = (center.x + radius).ceil().min(self.width as f32 - 1.0);
        let max_y = (center.y + radius).ceil().min(self.height as f32 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let (max_x, max_y) = (max_x as u32, max_y as u32);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let sample_point = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = sample_point.distance(center) / radius;
                if t > 1.0 {
                    continue;
                }
                let color = gradient.sample(t).clamped().premultiplied();
                if color.a > 0.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use nightsky_core::{EngineConfig, GradientStop, NeonGlow, ParticleEngine, ScriptedRandom};

    fn solid(color: Rgba) -> RadialGradient {
        RadialGradient::new(vec![GradientStop::new(0.0, color), GradientStop::new(1.0, color)])
    }

    #[test]
    fn test_new_surface_is_blank() {
        let surface = PixelSurface::new(16, 8);
        assert!(surface.is_blank());
        assert_eq!(surface.pixels().len(), 128);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut surface = PixelSurface::new(16, 16);
        surface.fill_circle(Vec2::new(8.0, 8.0), 3.0, &solid(Rgba::WHITE));

        assert_eq!(surface.pixel(8, 8), Some(Rgba::WHITE));
        assert_eq!(surface.pixel(0, 0), Some(Rgba::TRANSPARENT));

        surface.clear();
        assert!(surface.is_blank());
    }

    #[test]
    fn test_source_over_blend() {
        let mut surface = PixelSurface::new(4, 4);
        let half_red = solid(Rgba::new(1.0, 0.0, 0.0, 0.5));
        surface.fill_circle(Vec2::new(2.0, 2.0), 2.0, &half_red);
        surface.fill_circle(Vec2::new(2.0, 2.0), 2.0, &half_red);

        let p = surface.pixel(2, 2).unwrap();
        assert!((p.a - 0.75).abs() < 1e-6);
        assert!((p.r - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_glow_fades_toward_rim() {
        let mut surface = PixelSurface::new(64, 64);
        let glow = NeonGlow::default();
        glow.paint(&mut surface, Vec2::new(32.0, 32.0), 20.0, 1.0);

        let center = surface.pixel(32, 32).unwrap().a;
        let mid = surface.pixel(42, 32).unwrap().a;
        let outside = surface.pixel(60, 32).unwrap().a;
        assert!(center > mid);
        assert!(mid > 0.0);
        assert_eq!(outside, 0.0);
    }

    #[test]
    fn test_circle_partly_off_surface() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(Vec2::new(-2.0, -2.0), 4.0, &solid(Rgba::WHITE));
        assert_eq!(surface.pixel(0, 0), Some(Rgba::WHITE));

        // Entirely outside
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(Vec2::new(-20.0, 4.0), 4.0, &solid(Rgba::WHITE));
        surface.fill_circle(Vec2::new(40.0, 4.0), 4.0, &solid(Rgba::WHITE));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_resize_reallocates() {
        let mut surface = PixelSurface::new(800, 600);
        surface.resize(1200, 900);
        assert_eq!((surface.width(), surface.height()), (1200, 900));
        assert_eq!(surface.pixels().len(), 1200 * 900);
        assert_eq!(surface.pixel(1199, 899), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.pixel(1200, 0), None);
    }

    #[test]
    fn test_empty_engine_frame_is_blank() {
        let mut config = EngineConfig::default();
        config.stars.count = 0;
        let mut engine = ParticleEngine::create(config, 64, 48, ScriptedRandom::constant(0.5));
        engine.set_bursting(false);

        let mut surface = PixelSurface::new(64, 48);
        // Leftovers from an earlier frame must be cleared
        surface.fill_circle(Vec2::new(32.0, 24.0), 10.0, &solid(Rgba::WHITE));

        engine.tick(Duration::from_millis(16), Some(&mut surface));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_to_rgba8_layout() {
        let mut surface = PixelSurface::new(2, 1);
        surface.fill_circle(Vec2::new(0.5, 0.5), 0.6, &solid(Rgba::WHITE));
        assert_eq!(surface.to_rgba8(), vec![255, 255, 255, 255, 0, 0, 0, 0]);
    }
}
