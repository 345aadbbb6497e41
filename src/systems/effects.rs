//! Visual effects
//!
//! Glow, connection lines and sparkles are pure functions of particle state
//! and time; they emit [`DrawCommand`]s and never touch the pool.

use std::rc::Rc;

use crate::core::Vec2;
use crate::domain::{Particle, Viewport};
use crate::host::DrawCommand;

pub const GLOW_BLUR: f64 = 10.0;
pub const DEPTH_SCALE: f64 = 0.005;

pub const CONNECTION_RADIUS: f64 = 80.0;
/// How many following particles (pool order) each one may connect to.
pub const CONNECTION_LOOKAHEAD: usize = 2;
pub const CONNECTION_ALPHA: f64 = 0.3;
pub const CONNECTION_WIDTH: f64 = 0.5;

pub const SPARKLE_COUNT: usize = 5;
/// Scroll offset past which sparkles appear.
pub const SPARKLE_SCROLL_THRESHOLD: f64 = 100.0;
pub const SPARKLE_RADIUS: f64 = 2.0;
const SPARKLE_SWAY: f64 = 50.0;

/// Filled circle for one particle.
pub fn particle_circle(particle: &Particle, color: &Rc<str>, depth_scaling: bool, glow: bool) -> DrawCommand {
    let scale = if depth_scaling {
        1.0 + particle.position.z * DEPTH_SCALE
    } else {
        1.0
    };
    DrawCommand::Circle {
        center: particle.position.xy(),
        radius: (particle.size * scale).max(0.0),
        color: Rc::clone(color),
        alpha: particle.fade_alpha(),
        glow: if glow { GLOW_BLUR } else { 0.0 },
    }
}

/// Lines from `particles[index]` to the next particles in pool order that are
/// close enough. Alpha falls off linearly with distance and with the source
/// particle's own fade.
pub fn connections(particles: &[Particle], index: usize, color: &Rc<str>, out: &mut Vec<DrawCommand>) {
    let Some(source) = particles.get(index) else {
        return;
    };
    let from = source.position.xy();
    let fade = source.fade_alpha();

    for other in particles.iter().skip(index + 1).take(CONNECTION_LOOKAHEAD) {
        let to = other.position.xy();
        let distance = from.distance(to);
        if distance >= CONNECTION_RADIUS {
            continue;
        }
        out.push(DrawCommand::Line {
            from,
            to,
            color: Rc::clone(color),
            alpha: (1.0 - distance / CONNECTION_RADIUS) * fade * CONNECTION_ALPHA,
            width: CONNECTION_WIDTH,
        });
    }
}

/// Pulsing marks spaced evenly across the middle of the viewport.
pub fn sparkles(viewport: Viewport, now_ms: f64, out: &mut Vec<DrawCommand>) {
    let spacing = viewport.width / (SPARKLE_COUNT + 1) as f64;
    for i in 0..SPARKLE_COUNT {
        let phase = i as f64;
        let x = spacing * (i + 1) as f64;
        let y = viewport.height / 2.0 + (now_ms * 0.001 + phase).sin() * SPARKLE_SWAY;
        let alpha = 0.3 + (now_ms * 0.002 + phase).sin() * 0.2;
        out.push(DrawCommand::Sparkle {
            center: Vec2::new(x, y),
            radius: SPARKLE_RADIUS,
            alpha,
        });
    }
}
