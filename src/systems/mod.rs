//! Application systems
//!
//! Window, GPU presentation and per-frame simulation, kept out of main.rs so
//! they can be tested and reused separately.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
