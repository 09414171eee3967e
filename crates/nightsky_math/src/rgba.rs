//! RGBA color type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Straight (non-premultiplied) RGBA color, channels in 0.0..=1.0
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from an `[r, g, b, a]` array (config files store colors this way)
    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with the alpha replaced
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Same color with the alpha multiplied by `factor`
    #[inline]
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Linear interpolation of every channel
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Premultiply color channels by alpha
    #[inline]
    pub fn premultiplied(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Clamp every channel to 0.0..=1.0
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Quantize to 8-bit channels
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_and_fade() {
        let c = Rgba::CYAN.with_alpha(0.5);
        assert_eq!(c, Rgba::new(0.0, 1.0, 1.0, 0.5));
        assert_eq!(c.fade(0.5).a, 0.25);
    }

    #[test]
    fn test_lerp() {
        let mid = Rgba::TRANSPARENT.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_premultiplied() {
        let p = Rgba::new(1.0, 0.5, 0.0, 0.5).premultiplied();
        assert_eq!(p, Rgba::new(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(Rgba::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_from_array_roundtrip() {
        let arr = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(Rgba::from(arr).to_array(), arr);
    }
}
