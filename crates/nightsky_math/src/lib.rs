//! 2D Mathematics Library
//!
//! This crate provides the small value types shared by the Nightsky crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in surface space (x right, y down)
//! - [`Rgba`] - Straight-alpha RGBA color with f32 channels

mod vec2;
mod rgba;

pub use vec2::Vec2;
pub use rgba::Rgba;
