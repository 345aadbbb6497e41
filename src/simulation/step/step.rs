use crate::domain::Particle;
use crate::systems::effects::{self, SPARKLE_SCROLL_THRESHOLD};
use crate::systems::{bounds, forces};

use super::{FieldState, ParticleField};

pub(super) fn frame(field: &mut ParticleField) -> bool {
    if field.state != FieldState::Running {
        return false;
    }

    // Frame gate: cap the update rate without blocking the host's cadence.
    let now = field.clock.now_ms();
    // A clock that stepped backwards re-baselines the gate instead of stalling it.
    if let Some(last) = field.last_frame_ms.filter(|last| now >= *last) {
        if now - last < field.profile.frame_interval_ms() {
            if field.stats_enabled {
                field.stats.frames_skipped += 1;
            }
            return false;
        }
    }
    field.last_frame_ms = Some(now);

    let ParticleField {
        config,
        profile,
        palette,
        rng,
        clock,
        surface,
        particles,
        viewport,
        pointer,
        scroll_y,
        frames,
        commands,
        stats_enabled,
        stats,
        ..
    } = field;

    let Some(surface) = surface.as_mut() else {
        return false;
    };

    let perf_on = *stats_enabled;
    let viewport = *viewport;
    let attraction = if profile.pointer_attraction { *pointer } else { None };
    let mut respawned = 0u32;
    let mut connections_drawn = 0u32;

    surface.clear();
    commands.clear();

    for i in 0..particles.len() {
        let p = &mut particles[i];

        if let Some(target) = attraction {
            forces::attract(p, target);
        }
        forces::drift(p);
        bounds::integrate(p);
        forces::drag(p, profile.drag);
        bounds::wrap(p, viewport);

        p.life += 1;
        if p.expired() {
            *p = Particle::spawn(rng.as_mut(), viewport, config.speed, palette.len(), profile);
            respawned += 1;
            continue;
        }

        let color = &palette[p.color];
        commands.push(effects::particle_circle(p, color, profile.depth_scaling, profile.glow));

        if profile.connections {
            let before = commands.len();
            effects::connections(&particles[..], i, color, commands);
            connections_drawn += (commands.len() - before) as u32;
        }
    }

    let sparkles_on = profile.sparkles && *scroll_y > SPARKLE_SCROLL_THRESHOLD;
    if sparkles_on {
        effects::sparkles(viewport, now, commands);
    }

    for command in commands.iter() {
        surface.draw(command);
    }

    *frames += 1;

    if perf_on {
        stats.frames_run += 1;
        stats.respawned += respawned;
        stats.connections_drawn = connections_drawn;
        stats.sparkles_drawn = if sparkles_on { effects::SPARKLE_COUNT as u32 } else { 0 };
        stats.particle_count = particles.len() as u32;
        stats.frame_ms = clock.now_ms() - now;
    }

    true
}
