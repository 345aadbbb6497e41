use crate::domain::{Particle, Viewport};
use crate::host::DrawSurface;

use super::{FieldState, FrameStats, ParticleField};

pub(super) fn start(
    field: &mut ParticleField,
    viewport: Viewport,
    surface: Option<Box<dyn DrawSurface>>,
) -> bool {
    if field.state == FieldState::Running {
        return true;
    }

    let Some(mut surface) = surface else {
        field_warn!("no 2D drawing surface available, particle field stays idle");
        return false;
    };

    surface.resize(viewport.width, viewport.height);
    field.viewport = viewport;
    field.surface = Some(surface);

    let count = field.pool_size;
    let palette_len = field.palette.len();
    field.particles = (0..count)
        .map(|_| {
            Particle::spawn(
                field.rng.as_mut(),
                viewport,
                field.config.speed,
                palette_len,
                &field.profile,
            )
        })
        .collect();

    field.pointer = None;
    field.scroll_y = 0.0;
    field.last_frame_ms = None;
    field.frames = 0;
    field.stats = FrameStats::default();
    field.state = FieldState::Running;

    field_log!(
        "particle field started: {} particles, {} quality, {}x{}",
        count,
        field.config.quality,
        viewport.width,
        viewport.height
    );
    true
}

pub(super) fn stop(field: &mut ParticleField) {
    let was_running = field.state == FieldState::Running;
    field.state = FieldState::Stopped;
    field.particles = Vec::new();
    field.commands = Vec::new();
    field.surface = None;
    field.pointer = None;
    field.last_frame_ms = None;

    if was_running {
        field_log!("particle field stopped after {} frames", field.frames);
    }
}
