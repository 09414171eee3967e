//! GPU-compatible data types for the present pipeline
//!
//! These types are designed to match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};

/// Uniforms for the present shader
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PresentUniforms {
    /// Background color drawn behind the frame [r, g, b, a]
    pub background: [f32; 4],
    /// Parallax offset in UV units
    pub offset: [f32; 2],
    /// Zoom around the frame center (1.0 = none)
    pub scale: f32,
    /// 1.0 when the target surface expects linear color (an sRGB format)
    pub linear_output: f32,
}

impl Default for PresentUniforms {
    fn default() -> Self {
        Self {
            background: [0.02, 0.02, 0.08, 1.0],
            offset: [0.0, 0.0],
            scale: 1.0,
            linear_output: 0.0,
        }
    }
}

impl PresentUniforms {
    /// Build the uniforms for one frame
    ///
    /// The frame and `background` are sRGB-encoded. Pass `srgb_surface` when
    /// the surface format re-encodes on write, so the shader hands it linear values.
    pub fn new(background: [f32; 4], offset: [f32; 2], scale: f32, srgb_surface: bool) -> Self {
        Self {
            background,
            offset,
            // A zero scale would divide by zero in the shader
            scale: if scale > 0.0 { scale } else { 1.0 },
            linear_output: if srgb_surface { 1.0 } else { 0.0 },
        }
    }
}
