//! Tilt & spotlight controller
//!
//! Hovering tilts the frame toward the pointer:
//! - Pointer above center: positive X rotation (top edge toward the viewer)
//! - Pointer right of center: positive Y rotation
//! - Spotlight follows the pointer, recenters on leave
//! - Slight zoom while hovering

use nightsky_math::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Resolved tilt for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    /// Rotation about the horizontal axis in degrees
    pub rotate_x: f32,
    /// Rotation about the vertical axis in degrees
    pub rotate_y: f32,
    /// Zoom factor (1.0 when not hovering)
    pub scale: f32,
    /// Spotlight position in pixels, relative to the hover rect
    pub spotlight: Vec2,
    pub hovering: bool,
}

impl TiltState {
    /// Shift to apply to the frame, as a fraction of its size
    ///
    /// `strength` is the fraction reached at full tilt.
    pub fn parallax(&self, max_tilt: f32, strength: f32) -> Vec2 {
        if max_tilt <= 0.0 {
            return Vec2::ZERO;
        }
        // Tilting right (positive Y) should slide the far layer left
        Vec2::new(-self.rotate_y / max_tilt, self.rotate_x / max_tilt) * strength
    }
}

/// Pointer-driven tilt with optional smoothing
pub struct TiltController {
    /// Hover rect size in pixels
    bounds: Vec2,
    /// Last pointer position, None when the pointer is outside
    pointer: Option<Vec2>,

    // Smoothed output
    smooth_x: f32,
    smooth_y: f32,
    smooth_scale: f32,

    // Configuration
    pub max_tilt: f32,
    pub hover_scale: f32,
    pub smoothing_half_life: f32, // Exponential smoothing half-life in seconds
    pub smoothing_enabled: bool,
}

impl Default for TiltController {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltController {
    pub fn new() -> Self {
        Self {
            bounds: Vec2::ZERO,
            pointer: None,

            smooth_x: 0.0,
            smooth_y: 0.0,
            smooth_scale: 1.0,

            max_tilt: 10.0,
            hover_scale: 1.02,
            smoothing_half_life: 0.08,
            smoothing_enabled: false,
        }
    }

    /// Set the hover rect (the window's inner size)
    pub fn set_bounds(&mut self, size: PhysicalSize<u32>) {
        self.bounds = Vec2::new(size.width as f32, size.height as f32);
    }

    /// Process pointer movement (window-relative physical pixels)
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.pointer = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// Process the pointer leaving the window
    pub fn process_cursor_left(&mut self) {
        self.pointer = None;
    }

    /// Pointer position, if hovering
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Unsmoothed tilt for the current pointer
    pub fn target(&self) -> TiltState {
        let center = self.bounds * 0.5;
        match self.pointer {
            Some(p) if center.x > 0.0 && center.y > 0.0 => TiltState {
                rotate_x: ((p.y - center.y) / center.y) * -self.max_tilt,
                rotate_y: ((p.x - center.x) / center.x) * self.max_tilt,
                scale: self.hover_scale,
                spotlight: p,
                hovering: true,
            },
            _ => TiltState {
                rotate_x: 0.0,
                rotate_y: 0.0,
                scale: 1.0,
                spotlight: center,
                hovering: false,
            },
        }
    }

    /// Resolve the tilt for this frame
    pub fn update(&mut self, dt: f32) -> TiltState {
        let target = self.target();

        if self.smoothing_enabled && dt > 0.0 && self.smoothing_half_life > 0.0 {
            // factor = 2^(-dt / half_life), so smaller half_life = faster response
            let factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_x = self.smooth_x * factor + target.rotate_x * (1.0 - factor);
            self.smooth_y = self.smooth_y * factor + target.rotate_y * (1.0 - factor);
            self.smooth_scale = self.smooth_scale * factor + target.scale * (1.0 - factor);
        } else {
            self.smooth_x = target.rotate_x;
            self.smooth_y = target.rotate_y;
            self.smooth_scale = target.scale;
        }

        TiltState {
            rotate_x: self.smooth_x,
            rotate_y: self.smooth_y,
            scale: self.smooth_scale,
            ..target
        }
    }

    /// Builder: set maximum tilt in degrees
    pub fn with_max_tilt(mut self, degrees: f32) -> Self {
        self.max_tilt = degrees;
        self
    }

    /// Builder: set zoom while hovering
    pub fn with_hover_scale(mut self, scale: f32) -> Self {
        self.hover_scale = scale;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}
