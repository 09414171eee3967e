//! GPU rendering system
//!
//! Manages GPU presentation including:
//! - Render context and surface
//! - The CPU frame the engine draws into
//! - Uploading and presenting that frame

use std::sync::Arc;
use winit::window::Window;
use nightsky_core::{Surface, Vec2};
use nightsky_input::TiltState;
use nightsky_render::{
    context::{ContextError, RenderContext},
    pipeline::{PresentPipeline, PresentUniforms},
    PixelSurface,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU presentation of the CPU-drawn frame
pub struct RenderSystem {
    context: RenderContext,
    present_pipeline: PresentPipeline,
    frame: PixelSurface,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let present_pipeline = PresentPipeline::new(&context.device, context.config.format);
        let frame = PixelSurface::new(context.size.width, context.size.height);

        log::info!(
            "Presenting {}x{} frames as {:?}",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Ok(Self {
            context,
            present_pipeline,
            frame,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.frame.resize(width, height);
    }

    /// Reconfigure the surface at its current size after it was lost
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// The surface the engine draws into
    pub fn frame_mut(&mut self) -> &mut PixelSurface {
        &mut self.frame
    }

    /// Upload the frame and present it with the given tilt
    pub fn present_frame(&mut self, tilt: &TiltState, parallax: Vec2) -> Result<(), RenderError> {
        self.present_pipeline
            .upload_frame(&self.context.device, &self.context.queue, &self.frame);

        let uniforms = PresentUniforms::new(
            self.render_config.background_color,
            parallax.to_array(),
            tilt.scale,
            self.context.config.format.is_srgb(),
        );
        self.present_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        self.present_pipeline.render(&mut encoder, &view);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
