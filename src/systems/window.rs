//! The Nightsky window
//!
//! Opens the window the frames are presented into, switches borderless
//! fullscreen, and carries the typewriter text in the title bar.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use crate::config::WindowConfig;

/// Owns the window and the title the typewriter text is appended to
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Open the window described by `config`
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(window_attributes(config))
            .map_err(|e| WindowError::Open(e.to_string()))?;
        log::debug!(
            "Opened {}x{} window{}",
            config.width,
            config.height,
            if config.fullscreen { " (fullscreen)" } else { "" }
        );

        Ok(Self {
            window: Arc::new(window),
            base_title: config.title.clone(),
        })
    }

    /// Shared handle, also held by the GPU surface
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    /// Switch borderless fullscreen on the current monitor
    pub fn set_fullscreen(&self, on: bool) {
        self.window.set_fullscreen(on.then(borderless));
    }

    /// Flip fullscreen, returning whether it is now on
    pub fn toggle_fullscreen(&self) -> bool {
        let on = !self.is_fullscreen();
        self.set_fullscreen(on);
        on
    }

    /// Show the typewriter text next to the base title
    pub fn update_title(&self, text: &str, bursting: bool) {
        self.window.set_title(&compose_title(&self.base_title, text, bursting));
    }

    /// Ask for the next frame
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn borderless() -> Fullscreen {
    Fullscreen::Borderless(None)
}

/// Attributes for the initial window
fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width.max(1), config.height.max(1)))
        .with_fullscreen(config.fullscreen.then(borderless))
}

/// Title shown in the window bar
///
/// A trailing bar stands in for the blinking caret.
fn compose_title(base: &str, text: &str, bursting: bool) -> String {
    let hint = if bursting { "[B to pause bursts]" } else { "[B to resume bursts]" };
    format!("{} - {}| {}", base, text, hint)
}

/// The window could not be opened
#[derive(Debug)]
pub enum WindowError {
    Open(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::Open(msg) => write!(f, "Could not open the Nightsky window: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
