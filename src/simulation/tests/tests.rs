use super::*;
use crate::core::{ManualClock, Vec3};
use crate::domain::Quality;
use crate::host::RecordingSurface;

const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

fn field(config: FieldConfig, clock: &ManualClock) -> ParticleField {
    ParticleField::new(config, Box::new(Xorshift32::new(2024)), Box::new(clock.clone()))
        .expect("config should be valid")
}

fn running(config: FieldConfig) -> (ParticleField, ManualClock, RecordingSurface) {
    let clock = ManualClock::new(1_000.0);
    let surface = RecordingSurface::new();
    let mut f = field(config, &clock);
    assert!(f.start(VIEW, Some(Box::new(surface.clone()))));
    (f, clock, surface)
}

/// Advance past any tier's frame interval and run one frame.
fn step(f: &mut ParticleField, clock: &ManualClock) {
    clock.advance(100.0);
    assert!(f.frame());
}

fn freeze(p: &mut Particle, x: f64, y: f64) {
    p.position = Vec3::new(x, y, 0.0);
    p.velocity = Vec3::zero();
    p.gravity = 0.0;
    p.life = 0;
    p.max_life = 500;
}

#[test]
fn basic_quality_caps_pool_at_fifteen() {
    let config = FieldConfig::default()
        .with_quality(Quality::Basic)
        .with_particle_count(100);
    let (mut f, clock, _) = running(config);

    assert_eq!(f.particle_count(), 15);
    for _ in 0..600 {
        step(&mut f, &clock);
        assert_eq!(f.particle_count(), 15);
    }
}

#[test]
fn premium_keeps_requested_count() {
    let config = FieldConfig::default()
        .with_quality(Quality::Premium)
        .with_particle_count(100);
    let (f, _, _) = running(config);
    assert_eq!(f.particle_count(), 100);
}

#[test]
fn expired_particle_is_replaced_wholesale() {
    let (mut f, clock, _) = running(FieldConfig::default());

    let old = {
        let p = &mut f.particles[0];
        freeze(p, 123.0, 456.0);
        p.velocity = Vec3::new(0.2, -0.1, 0.05);
        p.life = p.max_life;
        p.clone()
    };

    step(&mut f, &clock);

    let fresh = &f.particles[0];
    assert_eq!(fresh.life, 0);
    assert!((200..=500).contains(&fresh.max_life));
    assert_ne!(fresh.position, old.position);
    assert_ne!(fresh.velocity, old.velocity);
    assert_ne!(fresh.gravity, old.gravity);
    assert_ne!(fresh.mass, old.mass);
}

#[test]
fn expired_particle_is_not_drawn_that_frame() {
    let config = FieldConfig::default().with_particle_count(5);
    let (mut f, clock, surface) = running(config);

    let p = &mut f.particles[2];
    p.life = p.max_life;

    step(&mut f, &clock);
    assert_eq!(surface.circles(), 4);
}

#[test]
fn exiting_right_edge_wraps_to_left_margin() {
    let (mut f, clock, _) = running(FieldConfig::default());
    freeze(&mut f.particles[0], VIEW.width + 51.0, 300.0);

    step(&mut f, &clock);

    assert_eq!(f.particles[0].position.x, -50.0);
    assert_eq!(f.particles[0].position.y, 300.0);
}

#[test]
fn drag_decays_speed_monotonically() {
    let (mut f, clock, _) = running(FieldConfig::default());
    {
        let p = &mut f.particles[0];
        freeze(p, 400.0, 300.0);
        p.velocity = Vec3::new(0.4, -0.3, 0.1);
    }

    let mut last = f.particles[0].velocity.length();
    for _ in 0..100 {
        step(&mut f, &clock);
        let speed = f.particles[0].velocity.length();
        assert!(speed < last);
        last = speed;
    }
    let expected = Vec3::new(0.4, -0.3, 0.1).length() * 0.998f64.powi(100);
    assert!((last - expected).abs() < 1e-12);
}

#[test]
fn basic_quality_ignores_pointer() {
    let config = FieldConfig::default().with_quality(Quality::Basic);
    let (mut f, clock, _) = running(config);
    freeze(&mut f.particles[0], 400.0, 300.0);

    f.pointer_moved(450.0, 300.0);
    assert_eq!(f.pointer(), None);
    step(&mut f, &clock);

    assert_eq!(f.particles[0].velocity, Vec3::zero());
}

#[test]
fn enhanced_quality_attracts_toward_pointer() {
    let (mut f, clock, _) = running(FieldConfig::default());
    freeze(&mut f.particles[0], 400.0, 300.0);

    f.pointer_moved(450.0, 300.0);
    step(&mut f, &clock);

    let v = f.particles[0].velocity;
    assert!(v.x > 0.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn pointer_on_particle_is_harmless() {
    let (mut f, clock, _) = running(FieldConfig::default());
    freeze(&mut f.particles[0], 400.0, 300.0);

    f.pointer_moved(400.0, 300.0);
    step(&mut f, &clock);

    assert_eq!(f.particles[0].velocity, Vec3::zero());
    assert_eq!(f.particles[0].position.x, 400.0);
}

#[test]
fn frame_gate_rejects_early_callbacks() {
    let (mut f, clock, _) = running(FieldConfig::default());
    let interval = f.profile().frame_interval_ms();

    assert!(f.frame());
    let snapshot = f.particles().to_vec();

    clock.advance(interval * 0.5);
    assert!(!f.frame());
    assert_eq!(f.particles(), &snapshot[..]);
    assert_eq!(f.frames(), 1);

    clock.advance(interval);
    assert!(f.frame());
    assert_eq!(f.frames(), 2);
}

#[test]
fn stop_freezes_everything() {
    let (mut f, clock, surface) = running(FieldConfig::default());
    step(&mut f, &clock);
    let clears = surface.clears();

    f.stop();
    assert_eq!(f.state(), FieldState::Stopped);
    assert_eq!(f.particle_count(), 0);

    clock.advance(1_000.0);
    assert!(!f.frame());
    f.pointer_moved(10.0, 10.0);
    f.scrolled(500.0);
    f.resize(10.0, 10.0);

    assert_eq!(f.particle_count(), 0);
    assert_eq!(f.pointer(), None);
    assert_eq!(f.viewport(), VIEW);
    assert_eq!(surface.clears(), clears);
}

#[test]
fn stop_is_idempotent_and_safe_before_start() {
    let clock = ManualClock::new(0.0);
    let mut f = field(FieldConfig::default(), &clock);
    f.stop();
    f.stop();
    assert_eq!(f.state(), FieldState::Stopped);
}

#[test]
fn missing_surface_leaves_field_idle() {
    let clock = ManualClock::new(0.0);
    let mut f = field(FieldConfig::default(), &clock);

    assert!(!f.start(VIEW, None));
    assert!(!f.is_running());
    assert_eq!(f.particle_count(), 0);
    assert!(!f.frame());
    f.stop();
}

#[test]
fn resize_keeps_particles() {
    let (mut f, _, surface) = running(FieldConfig::default());
    let before = f.particles().to_vec();

    f.resize(1024.0, 768.0);

    assert_eq!(f.particles(), &before[..]);
    assert_eq!(f.viewport(), Viewport::new(1024.0, 768.0));
    assert_eq!(surface.size(), (1024.0, 768.0));
}

#[test]
fn restart_allocates_a_fresh_pool() {
    let (mut f, clock, _) = running(FieldConfig::default());
    step(&mut f, &clock);
    f.stop();

    assert!(f.start(VIEW, Some(Box::new(RecordingSurface::new()))));
    assert_eq!(f.particle_count(), 30);
    assert_eq!(f.frames(), 0);
    assert!(f.particles().iter().all(|p| p.life == 0));
}

#[test]
fn each_frame_clears_and_draws_every_particle() {
    let config = FieldConfig::default().with_particle_count(12);
    let (mut f, clock, surface) = running(config);

    step(&mut f, &clock);
    step(&mut f, &clock);

    assert_eq!(surface.clears(), 2);
    assert_eq!(surface.circles(), 12);
    assert_eq!(surface.lines(), 0);
}

#[test]
fn glow_only_above_basic() {
    for (quality, expect_glow) in [(Quality::Basic, false), (Quality::Enhanced, true)] {
        let (mut f, clock, surface) = running(FieldConfig::default().with_quality(quality));
        step(&mut f, &clock);
        let glowing = surface.count(|c| matches!(c, DrawCommand::Circle { glow, .. } if *glow > 0.0));
        assert_eq!(glowing > 0, expect_glow, "{quality}");
    }
}

#[test]
fn premium_connects_close_neighbours() {
    let config = FieldConfig::default()
        .with_quality(Quality::Premium)
        .with_particle_count(3);
    let (mut f, clock, surface) = running(config);
    f.enable_stats(true);
    freeze(&mut f.particles[0], 100.0, 100.0);
    freeze(&mut f.particles[1], 120.0, 100.0);
    freeze(&mut f.particles[2], 140.0, 100.0);

    step(&mut f, &clock);

    // 0-1, 0-2, 1-2
    assert_eq!(surface.lines(), 3);
    assert_eq!(f.stats().connections_drawn, 3);
}

#[test]
fn enhanced_never_connects() {
    let config = FieldConfig::default().with_particle_count(3);
    let (mut f, clock, surface) = running(config);
    freeze(&mut f.particles[0], 100.0, 100.0);
    freeze(&mut f.particles[1], 110.0, 100.0);
    freeze(&mut f.particles[2], 120.0, 100.0);

    step(&mut f, &clock);
    assert_eq!(surface.lines(), 0);
}

#[test]
fn sparkles_need_premium_and_scroll() {
    let (mut f, clock, surface) = running(FieldConfig::default().with_quality(Quality::Premium));

    step(&mut f, &clock);
    assert_eq!(surface.sparkles(), 0);

    f.scrolled(150.0);
    step(&mut f, &clock);
    assert_eq!(surface.sparkles(), effects_sparkle_count());

    let (mut f, clock, surface) = running(FieldConfig::default());
    f.scrolled(150.0);
    step(&mut f, &clock);
    assert_eq!(surface.sparkles(), 0);
}

fn effects_sparkle_count() -> usize {
    crate::systems::effects::SPARKLE_COUNT
}

#[test]
fn stats_track_gate_and_respawns() {
    let (mut f, clock, _) = running(FieldConfig::default());
    f.enable_stats(true);

    let p = &mut f.particles[0];
    p.life = p.max_life;

    step(&mut f, &clock);
    assert!(!f.frame());

    let stats = f.stats();
    assert_eq!(stats.frames_run, 1);
    assert_eq!(stats.frames_skipped, 1);
    assert_eq!(stats.respawned, 1);
    assert_eq!(stats.particle_count, 30);
    assert!(stats.to_json().contains("\"framesRun\":1"));
}

#[test]
fn same_seed_same_field() {
    let (mut a, clock_a, _) = running(FieldConfig::default());
    let (mut b, clock_b, _) = running(FieldConfig::default());
    for _ in 0..50 {
        step(&mut a, &clock_a);
        step(&mut b, &clock_b);
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn clock_stepping_backwards_does_not_stall_the_gate() {
    let (mut f, clock, _) = running(FieldConfig::default());
    clock.set(1_000_000.0);
    assert!(f.frame());

    clock.set(940_000.0);
    assert!(f.frame());

    let mut ran = 0;
    for _ in 0..100 {
        clock.advance(23.2);
        if f.frame() {
            ran += 1;
        }
    }
    assert_eq!(ran, 100);
    assert_eq!(f.frames(), 102);
}
