//! Particle animation engine
//!
//! Owns the star pool, the burst groups and the spawner, and advances them
//! one tick at a time. The host decides when ticks happen (a redraw callback,
//! a fixed-step loop, or a test calling [`ParticleEngine::tick`] directly).

use std::time::Duration;

use bitflags::bitflags;
use nightsky_math::Vec2;
use slotmap::SlotMap;

use crate::burst::{BurstGroup, BurstKey};
use crate::config::EngineConfig;
use crate::glow::NeonGlow;
use crate::random::RandomSource;
use crate::spawner::BurstSpawner;
use crate::star::Star;
use crate::surface::Surface;

bitflags! {
    /// Populations drawn by [`ParticleEngine::render`]
    ///
    /// Hidden populations are still updated every tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Layers: u8 {
        const STARS = 1 << 0;
        const BURSTS = 1 << 1;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Layers::all()
    }
}

/// Lifecycle of an engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Shutdown,
}

/// Star field plus periodic bursts, rendered with a shared neon glow
pub struct ParticleEngine<R: RandomSource> {
    config: EngineConfig,
    rng: R,
    /// Surface dimensions in pixels
    bounds: Vec2,
    stars: Vec<Star>,
    bursts: SlotMap<BurstKey, BurstGroup>,
    spawner: BurstSpawner,
    glow: NeonGlow,
    layers: Layers,
    state: EngineState,
    frame_count: u64,
}

impl<R: RandomSource> ParticleEngine<R> {
    /// Size to the viewport, allocate the star pool and start the burst timer
    pub fn create(config: EngineConfig, width: u32, height: u32, mut rng: R) -> Self {
        let bounds = Vec2::new(width as f32, height as f32);
        let stars = (0..config.stars.count)
            .map(|_| Star::spawn(&mut rng, bounds, &config.stars))
            .collect();
        let spawner = BurstSpawner::from_config(&config.bursts);
        let glow = NeonGlow::from_config(&config.glow);

        log::info!(
            "Particle engine created: {}x{}, {} stars, burst every {:?}",
            width,
            height,
            config.stars.count,
            spawner.interval()
        );

        Self {
            config,
            rng,
            bounds,
            stars,
            bursts: SlotMap::with_key(),
            spawner,
            glow,
            layers: Layers::default(),
            state: EngineState::Running,
            frame_count: 0,
        }
    }

    /// Match the viewport; populations are left untouched
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Engine resized to {}x{}", width, height);
        self.bounds = Vec2::new(width as f32, height as f32);
    }

    /// One tick: run due spawner ticks, update both populations, then draw
    ///
    /// Without a surface the tick still updates but draws nothing.
    pub fn tick(&mut self, dt: Duration, surface: Option<&mut dyn Surface>) {
        if self.state == EngineState::Shutdown {
            return;
        }

        let due = self.spawner.advance(dt);
        for _ in 0..due {
            self.spawn_random_burst();
        }

        self.update();

        if let Some(surface) = surface {
            self.render(surface);
        }
    }

    /// Fire a single spawner tick directly
    ///
    /// Returns the key of the new group, if the tick spawned one.
    pub fn timer_tick(&mut self) -> Option<BurstKey> {
        if self.state == EngineState::Shutdown || !self.spawner.fire_next() {
            return None;
        }
        Some(self.spawn_random_burst())
    }

    /// Advance both populations by one frame
    pub fn update(&mut self) {
        if self.state == EngineState::Shutdown {
            return;
        }

        for star in &mut self.stars {
            star.advance(&mut self.rng, self.bounds, &self.config.stars);
        }

        let decay = self.config.bursts.decay;
        for (_key, group) in &mut self.bursts {
            group.update(decay);
        }
        self.bursts.retain(|_key, group| !group.is_spent());

        self.frame_count += 1;
    }

    /// Clear the surface and draw every visible star and particle
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();

        if self.layers.contains(Layers::STARS) {
            let scale = self.config.glow.star_scale;
            for star in &self.stars {
                self.glow.paint(surface, star.position, star.radius * scale, star.opacity);
            }
        }

        if self.layers.contains(Layers::BURSTS) {
            let scale = self.config.glow.particle_scale;
            for (_key, group) in &self.bursts {
                for particle in &group.particles {
                    self.glow
                        .paint(surface, particle.position, particle.size * scale, particle.opacity);
                }
            }
        }
    }

    /// Spawn a random group at `origin`
    pub fn spawn_burst(&mut self, origin: Vec2) -> BurstKey {
        let group = BurstGroup::random(&mut self.rng, origin, &self.config.bursts);
        self.insert_burst(group)
    }

    /// Add an already built group
    pub fn insert_burst(&mut self, group: BurstGroup) -> BurstKey {
        log::trace!("Burst at ({:.1}, {:.1}) with {} particles", group.origin.x, group.origin.y, group.len());
        self.bursts.insert(group)
    }

    fn spawn_random_burst(&mut self) -> BurstKey {
        let origin = Vec2::new(
            self.rng.range(0.0, self.bounds.x),
            self.rng.range(0.0, self.bounds.y),
        );
        self.spawn_burst(origin)
    }

    /// Stop spawning and drop both populations; later ticks do nothing
    pub fn shutdown(&mut self) {
        if self.state == EngineState::Shutdown {
            return;
        }
        self.spawner.cancel();
        self.stars.clear();
        self.bursts.clear();
        self.state = EngineState::Shutdown;
        log::info!("Particle engine shut down after {} frames", self.frame_count);
    }

    pub fn set_bursting(&mut self, bursting: bool) {
        self.spawner.set_bursting(bursting);
    }

    pub fn is_bursting(&self) -> bool {
        self.spawner.is_bursting()
    }

    /// Cancel the burst timer without shutting the engine down
    pub fn cancel_spawner(&mut self) {
        self.spawner.cancel();
    }

    pub fn spawner(&self) -> &BurstSpawner {
        &self.spawner
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable star access (for hosts that want to place stars explicitly)
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn bursts(&self) -> impl Iterator<Item = (BurstKey, &BurstGroup)> {
        self.bursts.iter()
    }

    pub fn burst(&self, key: BurstKey) -> Option<&BurstGroup> {
        self.bursts.get(key)
    }

    pub fn burst_count(&self) -> usize {
        self.bursts.len()
    }

    /// Live particles across all groups
    pub fn particle_count(&self) -> usize {
        self.bursts.values().map(BurstGroup::len).sum()
    }

    /// Current surface dimensions
    pub fn size(&self) -> (u32, u32) {
        (self.bounds.x as u32, self.bounds.y as u32)
    }

    pub fn layers(&self) -> Layers {
        self.layers
    }

    pub fn set_layers(&mut self, layers: Layers) {
        self.layers = layers;
    }

    pub fn glow(&self) -> &NeonGlow {
        &self.glow
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
