//! Nightsky - neon starfield and burst animation
//!
//! The binary wires the headless engine from `nightsky_core` to a winit
//! window and a wgpu presenter. This library exposes the pieces that can be
//! tested without a window.

pub mod config;
pub mod systems;
