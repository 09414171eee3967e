//! Integration tests for the particle engine
//!
//! These tests drive the engine the way a host does and check:
//! 1. Star recycling at the bottom edge
//! 2. Burst decay and removal
//! 3. Spawner timing and the bursting flag
//! 4. Resize leaving populations untouched
//! 5. Rendering an empty scene

use std::time::Duration;

use nightsky_core::{
    BurstGroup, DrawCommand, EngineConfig, ParticleEngine, Particle, RecordingSurface,
    ScriptedRandom, Surface, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DECAY: f32 = 0.015;

fn seeded_engine(width: u32, height: u32) -> ParticleEngine<StdRng> {
    ParticleEngine::create(EngineConfig::default(), width, height, StdRng::seed_from_u64(42))
}

fn engine_without_stars() -> ParticleEngine<StdRng> {
    let mut config = EngineConfig::default();
    config.stars.count = 0;
    ParticleEngine::create(config, 800, 600, StdRng::seed_from_u64(7))
}

// ==================== Star Tests ====================

/// A star below the bottom edge is reset above the top on the next update
#[test]
fn test_star_past_bottom_resets_above_top() {
    let mut engine = seeded_engine(800, 600);
    {
        let star = &mut engine.stars_mut()[0];
        star.position.y = 650.0;
        star.speed = 9.0;
        star.radius = 123.0;
        star.opacity = 0.123;
    }

    engine.update();

    let star = &engine.stars()[0];
    assert!(star.position.y < 0.0, "recycled star should start above the top, got {}", star.position.y);
    assert!(star.position.x >= 0.0 && star.position.x < 800.0);
    assert_ne!(star.speed, 9.0, "speed should be re-randomized");
    assert_ne!(star.radius, 123.0, "radius should be re-randomized");
    assert_ne!(star.opacity, 0.123, "opacity should be re-randomized");
}

/// The star pool never grows or shrinks, however long the engine runs
#[test]
fn test_star_pool_is_fixed_size() {
    let mut engine = seeded_engine(320, 240);
    for _ in 0..2_000 {
        engine.update();
    }
    assert_eq!(engine.stars().len(), 200);
    for star in engine.stars() {
        assert!(star.position.y <= 240.0);
    }
}

// ==================== Burst Tests ====================

/// Group sizes always land in [4, 13]
#[test]
fn test_burst_particle_count_bounds() {
    let mut engine = engine_without_stars();
    for _ in 0..500 {
        let key = engine.spawn_burst(Vec2::new(10.0, 10.0));
        let len = engine.burst(key).map(BurstGroup::len).unwrap_or(0);
        assert!((4..=13).contains(&len), "group had {} particles", len);
    }
}

/// Opacity falls by exactly the decay rate per update and the particle is
/// gone on the frame it reaches zero
#[test]
fn test_burst_decay_and_removal() {
    let mut engine = engine_without_stars();
    let key = engine.insert_burst(BurstGroup::new(
        Vec2::ZERO,
        vec![Particle::new(Vec2::ZERO, 0.0, 0.0, 0.1, 1.0)],
    ));

    let mut previous = 0.1;
    loop {
        engine.update();
        match engine.burst(key) {
            Some(group) => {
                let opacity = group.particles[0].opacity;
                assert!(opacity > 0.0);
                assert!((previous - opacity - DECAY).abs() < 1e-5);
                previous = opacity;
            }
            None => break,
        }
    }
    // 0.1 / 0.015 = 6.67, so the seventh update removes it
    assert_eq!(engine.frame_count(), 7);
}

/// One particle at angle 0, speed 1, from (100, 100): after 10 updates it is
/// at (110, 100) with opacity 0.85
#[test]
fn test_single_particle_trajectory() {
    let mut engine = engine_without_stars();
    let key = engine.insert_burst(BurstGroup::new(
        Vec2::new(100.0, 100.0),
        vec![Particle::new(Vec2::new(100.0, 100.0), 0.0, 1.0, 1.0, 1.0)],
    ));

    for _ in 0..10 {
        engine.update();
    }

    let particle = &engine.burst(key).expect("group should still be alive").particles[0];
    assert!((particle.position.x - 110.0).abs() < 1e-4);
    assert!((particle.position.y - 100.0).abs() < 1e-4);
    assert!((particle.opacity - (1.0 - 10.0 * DECAY)).abs() < 1e-5);
}

// ==================== Spawner Tests ====================

/// Five 100ms timer ticks create five groups
#[test]
fn test_five_timer_ticks_five_groups() {
    let mut engine = engine_without_stars();
    for _ in 0..5 {
        engine.timer_tick();
    }
    assert_eq!(engine.burst_count(), 5);
}

/// The same through `tick` with 100ms frame deltas
#[test]
fn test_tick_drives_spawner() {
    let mut engine = engine_without_stars();
    for _ in 0..5 {
        engine.tick(Duration::from_millis(100), None);
    }
    assert_eq!(engine.spawner().ticks_fired(), 5);
    // Fresh groups start at full opacity so none decay away within 5 frames
    assert_eq!(engine.burst_count(), 5);
}

/// Switching bursting off before a tick suppresses that tick's group
#[test]
fn test_bursting_off_prevents_spawn() {
    let mut engine = engine_without_stars();
    for _ in 0..4 {
        engine.timer_tick();
    }
    engine.set_bursting(false);
    assert!(engine.timer_tick().is_none());
    assert_eq!(engine.burst_count(), 4);
}

/// A configured cutoff ends the celebration window on its own
#[test]
fn test_cutoff_ends_bursts() {
    let mut config = EngineConfig::default();
    config.stars.count = 0;
    config.bursts.cutoff_ms = Some(250);
    let mut engine = ParticleEngine::create(config, 800, 600, ScriptedRandom::constant(0.5));

    for _ in 0..10 {
        engine.tick(Duration::from_millis(100), None);
    }

    assert!(!engine.is_bursting());
    assert_eq!(engine.spawner().ticks_fired(), 10);
    assert_eq!(engine.burst_count(), 2);
}

/// Direct timer ticks reach the cutoff the same way frame ticks do
#[test]
fn test_cutoff_ends_direct_timer_ticks() {
    let mut config = EngineConfig::default();
    config.stars.count = 0;
    config.bursts.cutoff_ms = Some(250);
    let mut engine = ParticleEngine::create(config, 800, 600, ScriptedRandom::constant(0.5));

    let spawned = (0..10).filter_map(|_| engine.timer_tick()).count();

    assert_eq!(spawned, 2);
    assert_eq!(engine.burst_count(), 2);
    assert!(!engine.is_bursting());
    assert_eq!(engine.spawner().elapsed(), Duration::from_secs(1));
}

/// Re-enabling bursting after the cutoff keeps it off
#[test]
fn test_bursting_cannot_reopen_after_cutoff() {
    let mut config = EngineConfig::default();
    config.stars.count = 0;
    config.bursts.cutoff_ms = Some(250);
    let mut engine = ParticleEngine::create(config, 800, 600, ScriptedRandom::constant(0.5));

    for _ in 0..3 {
        engine.timer_tick();
    }
    engine.set_bursting(true);

    assert!(!engine.is_bursting());
    assert!(engine.timer_tick().is_none());
    assert_eq!(engine.burst_count(), 2);
}

// ==================== Resize Tests ====================

/// Resizing changes the surface size and nothing else
#[test]
fn test_resize_keeps_populations() {
    let mut engine = seeded_engine(800, 600);
    engine.timer_tick();
    let stars_before = engine.stars().to_vec();
    let bursts_before: Vec<BurstGroup> = engine.bursts().map(|(_, g)| g.clone()).collect();

    let mut surface = RecordingSurface::new(800, 600);
    engine.resize(1200, 900);
    surface.resize(1200, 900);

    assert_eq!(engine.size(), (1200, 900));
    assert_eq!((surface.width(), surface.height()), (1200, 900));
    assert_eq!(engine.stars(), stars_before.as_slice());
    let bursts_after: Vec<BurstGroup> = engine.bursts().map(|(_, g)| g.clone()).collect();
    assert_eq!(bursts_after, bursts_before);
}

// ==================== Render Tests ====================

/// No stars and no bursts: the frame is a clear and nothing else
#[test]
fn test_empty_scene_renders_nothing() {
    let mut engine = engine_without_stars();
    engine.set_bursting(false);
    let mut surface = RecordingSurface::new(800, 600);

    engine.tick(Duration::from_millis(16), Some(&mut surface));

    assert_eq!(surface.commands(), &[DrawCommand::Clear]);
}

/// Every frame starts with a clear
#[test]
fn test_each_tick_clears_first() {
    let mut engine = seeded_engine(200, 200);
    let mut surface = RecordingSurface::new(200, 200);

    for _ in 0..3 {
        engine.tick(Duration::from_millis(16), Some(&mut surface));
    }

    let clears = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Clear))
        .count();
    assert_eq!(clears, 3);
    assert_eq!(surface.commands()[0], DrawCommand::Clear);
}
