//! Presentation pipeline components
//!
//! The engine rasterizes on the CPU; this module uploads the finished frame
//! as a texture and draws it to the window.

pub mod types;
pub mod present_pipeline;

pub use types::PresentUniforms;
pub use present_pipeline::PresentPipeline;
