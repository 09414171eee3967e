//! Pointer Input Handling
//!
//! This crate turns pointer movement over the window into the hover tilt
//! and spotlight used by the presenter.

mod tilt_controller;

pub use tilt_controller::{TiltController, TiltState};
