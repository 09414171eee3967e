//! Animation simulation system
//!
//! Manages the per-frame update including:
//! - Delta time calculation
//! - Engine tick (spawner, stars, bursts) and drawing
//! - Typewriter text
//! - Tilt and the pointer spotlight

use std::time::{Duration, Instant};

use nightsky_core::{ParticleEngine, Surface, Typewriter, Vec2};
use nightsky_input::{TiltController, TiltState};
use rand::{rngs::StdRng, SeedableRng};
use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::config::{AppConfig, TiltConfig};

/// Longest frame delta fed to the timers
const MAX_FRAME_DT: Duration = Duration::from_millis(250);

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether the typewriter text changed (title needs updating)
    pub text_changed: bool,
    /// Tilt to apply when presenting the frame
    pub tilt: TiltState,
}

/// Drives the engine and the decorations around it
pub struct SimulationSystem {
    last_frame: Instant,
    engine: ParticleEngine<StdRng>,
    typewriter: Typewriter,
    tilt: TiltController,
    tilt_config: TiltConfig,
}

impl SimulationSystem {
    /// Create the engine sized to the window
    pub fn new(config: &AppConfig, size: PhysicalSize<u32>) -> Self {
        let rng = match config.debug.seed {
            Some(seed) => {
                log::info!("Using fixed random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let mut engine = ParticleEngine::create(config.to_engine_config(), size.width, size.height, rng);
        engine.set_layers(config.debug.layers());

        let mut tilt = TiltController::new()
            .with_max_tilt(config.tilt.max_tilt)
            .with_hover_scale(config.tilt.hover_scale)
            .with_smoothing_half_life(config.tilt.smoothing_half_life)
            .with_smoothing(config.tilt.smoothing_enabled);
        tilt.set_bounds(size);

        Self {
            last_frame: Instant::now(),
            engine,
            typewriter: Typewriter::new(&config.typewriter),
            tilt,
            tilt_config: config.tilt.clone(),
        }
    }

    /// Run one frame using wall-clock time since the previous frame
    pub fn update(&mut self, surface: &mut dyn Surface) -> SimulationResult {
        let now = Instant::now();
        // Cap dt so a stalled window does not fire a backlog of bursts
        let dt = (now - self.last_frame).min(MAX_FRAME_DT);
        self.last_frame = now;

        self.step(dt, surface)
    }

    /// Run one frame with an explicit delta
    pub fn step(&mut self, dt: Duration, surface: &mut dyn Surface) -> SimulationResult {
        self.engine.tick(dt, Some(&mut *surface));

        let text_changed = self.typewriter.advance(dt);

        let tilt = if self.tilt_config.enabled {
            self.tilt.update(dt.as_secs_f32())
        } else {
            self.tilt.update(0.0);
            TiltState {
                rotate_x: 0.0,
                rotate_y: 0.0,
                scale: 1.0,
                spotlight: Vec2::ZERO,
                hovering: false,
            }
        };

        if tilt.hovering && self.tilt_config.spotlight_radius > 0.0 {
            self.engine.glow().paint(
                surface,
                tilt.spotlight,
                self.tilt_config.spotlight_radius,
                self.tilt_config.spotlight_opacity,
            );
        }

        SimulationResult { text_changed, tilt }
    }

    /// Frame offset in UV units for the current tilt
    pub fn parallax(&self, tilt: &TiltState) -> Vec2 {
        tilt.parallax(self.tilt.max_tilt, self.tilt_config.parallax_strength)
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.engine.resize(size.width, size.height);
        self.tilt.set_bounds(size);
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.tilt.process_cursor_moved(position);
    }

    pub fn cursor_left(&mut self) {
        self.tilt.process_cursor_left();
    }

    /// Spawn a burst under the pointer, or at the center if it is outside
    pub fn burst_at_pointer(&mut self) {
        let origin = self.tilt.pointer().unwrap_or_else(|| {
            let (w, h) = self.engine.size();
            Vec2::new(w as f32, h as f32) * 0.5
        });
        self.engine.spawn_burst(origin);
    }

    /// Flip the bursting flag, returning the state actually in effect
    ///
    /// Turning bursting back on has no effect once the cutoff has passed.
    pub fn toggle_bursting(&mut self) -> bool {
        self.engine.set_bursting(!self.engine.is_bursting());
        let bursting = self.engine.is_bursting();
        log::info!("Bursting: {}", if bursting { "ON" } else { "OFF" });
        bursting
    }

    /// Stop the engine
    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    pub fn engine(&self) -> &ParticleEngine<StdRng> {
        &self.engine
    }

    /// Current typewriter text
    pub fn text(&self) -> &str {
        self.typewriter.text()
    }
}
