//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NIGHTSKY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use nightsky_core::{BurstConfig, EngineConfig, GlowConfig, Layers, StarConfig, TypewriterConfig};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Background star population
    #[serde(default)]
    pub stars: StarConfig,
    /// Burst spawner and particles
    #[serde(default)]
    pub bursts: BurstConfig,
    /// Neon glow colors
    #[serde(default)]
    pub glow: GlowConfig,
    /// Typewriter shown in the title bar
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    /// Hover tilt
    #[serde(default)]
    pub tilt: TiltConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NIGHTSKY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NIGHTSKY_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("NIGHTSKY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// The engine's slice of the configuration
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            stars: self.stars.clone(),
            bursts: self.bursts.clone(),
            glow: self.glow.clone(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (the typewriter text is appended)
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nightsky".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Hover tilt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Master switch for tilt, parallax and spotlight
    pub enabled: bool,
    /// Rotation at the window edge in degrees
    pub max_tilt: f32,
    /// Zoom while the pointer is over the window
    pub hover_scale: f32,
    /// Smoothing half-life in seconds (lower = more responsive)
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
    /// Frame shift at full tilt, as a fraction of the window
    pub parallax_strength: f32,
    /// Spotlight glow radius in pixels (0 disables it)
    pub spotlight_radius: f32,
    /// Spotlight glow opacity
    pub spotlight_opacity: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_tilt: 10.0,
            hover_scale: 1.02,
            smoothing_half_life: 0.08,
            smoothing_enabled: true,
            parallax_strength: 0.015,
            spotlight_radius: 160.0,
            spotlight_opacity: 0.12,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Draw the star layer
    pub show_stars: bool,
    /// Draw the burst layer
    pub show_bursts: bool,
    /// Fixed random seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_stars: true,
            show_bursts: true,
            seed: None,
        }
    }
}

impl DebugConfig {
    /// Layers enabled by the show_* switches
    pub fn layers(&self) -> Layers {
        let mut layers = Layers::empty();
        layers.set(Layers::STARS, self.show_stars);
        layers.set(Layers::BURSTS, self.show_bursts);
        layers
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
