//! Nightsky Rendering Library
//!
//! This crate turns engine draw calls into pixels and puts them on screen.
//!
//! ## Key Components
//!
//! - [`pixel_surface::PixelSurface`] - CPU implementation of the engine's `Surface`
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::PresentPipeline`] - Uploads a frame and draws it over the background

pub mod context;
pub mod pipeline;
pub mod pixel_surface;

pub use pixel_surface::PixelSurface;

// Re-export core types for convenience
pub use nightsky_core::{Surface, RadialGradient, GradientStop};
pub use nightsky_math::{Rgba, Vec2};
