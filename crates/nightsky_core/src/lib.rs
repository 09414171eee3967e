//! Core types for the Nightsky engine
//!
//! This crate provides the headless particle animation engine:
//!
//! - [`ParticleEngine`] - Owns both particle populations and drives one tick at a time
//! - [`Star`] - A recycled background particle falling at constant speed
//! - [`BurstGroup`] / [`Particle`] - Transient radial bursts that fade out
//! - [`BurstSpawner`] - Interval timer that emits bursts during a celebration window
//! - [`Surface`] - Immediate-mode drawing target the engine renders into
//! - [`NeonGlow`] - The radial-gradient primitive shared by stars and particles
//! - [`RandomSource`] - Injected randomness for reproducible runs
//! - [`Typewriter`] - Timed type/hold/delete text cycle

mod config;
mod random;
mod star;
mod burst;
mod spawner;
mod surface;
mod glow;
mod engine;
mod typewriter;

pub use config::{EngineConfig, StarConfig, BurstConfig, GlowConfig, TypewriterConfig};
pub use random::{RandomSource, ScriptedRandom};
pub use star::Star;
pub use burst::{BurstGroup, BurstKey, Particle};
pub use spawner::{BurstSpawner, SpawnCutoff};
pub use surface::{Surface, DrawCommand, GradientStop, RadialGradient, RecordingSurface};
pub use glow::NeonGlow;
pub use engine::{EngineState, Layers, ParticleEngine};
pub use typewriter::Typewriter;

// Re-export commonly used types from nightsky_math for convenience
pub use nightsky_math::{Rgba, Vec2};
