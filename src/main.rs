//! Nightsky - neon starfield with periodic particle bursts
//!
//! Draws the engine on the CPU every frame and presents it through wgpu.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use nightsky::config::AppConfig;
use nightsky::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: Option<SimulationSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window_system: None,
            render_system: None,
            simulation: None,
        }
    }

    fn refresh_title(&self) {
        if let (Some(window), Some(sim)) = (&self.window_system, &self.simulation) {
            window.update_title(sim.text(), sim.engine().is_bursting());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let window: Arc<_> = window_system.window().clone();
        let render_system = match RenderSystem::new(
            window.clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("Failed to initialise GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        let simulation = SimulationSystem::new(&self.config, window.inner_size());

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.simulation = Some(simulation);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(sim) = &mut self.simulation {
                    sim.shutdown();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let Some(sim) = &mut self.simulation {
                    sim.resize(physical_size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(sim) = &mut self.simulation {
                    sim.cursor_moved(position);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(sim) = &mut self.simulation {
                    sim.cursor_left();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            if let Some(sim) = &mut self.simulation {
                                sim.shutdown();
                            }
                            event_loop.exit();
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window_system {
                                window.toggle_fullscreen();
                            }
                        }
                        KeyCode::KeyB => {
                            if let Some(sim) = &mut self.simulation {
                                sim.toggle_bursting();
                            }
                            self.refresh_title();
                        }
                        KeyCode::Space => {
                            if let Some(sim) = &mut self.simulation {
                                sim.burst_at_pointer();
                            }
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(render), Some(sim)) = (&mut self.render_system, &mut self.simulation) else {
                    return;
                };

                let result = sim.update(render.frame_mut());
                let parallax = sim.parallax(&result.tilt);

                match render.present_frame(&result.tilt, parallax) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        log::debug!("Surface lost, reconfiguring");
                        render.reconfigure();
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => log::warn!("Skipping frame: {}", e),
                }

                if result.text_changed {
                    self.refresh_title();
                }

                if let Some(window) = &self.window_system {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Config is loaded first so the configured log level can seed the logger
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!(
        "Starting Nightsky: {} stars, burst every {} ms",
        config.stars.count,
        config.bursts.interval_ms
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
