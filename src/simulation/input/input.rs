use crate::core::Vec2;
use crate::domain::Viewport;

use super::{FieldState, ParticleField};

pub(super) fn pointer_moved(field: &mut ParticleField, x: f64, y: f64) {
    if field.state != FieldState::Running || !field.profile.pointer_attraction {
        return;
    }
    field.pointer = Some(Vec2::new(x, y));
}

pub(super) fn scrolled(field: &mut ParticleField, scroll_y: f64) {
    if field.state != FieldState::Running {
        return;
    }
    field.scroll_y = scroll_y;
}

pub(super) fn resize(field: &mut ParticleField, width: f64, height: f64) {
    if field.state != FieldState::Running {
        return;
    }
    field.viewport = Viewport::new(width, height);
    if let Some(surface) = field.surface.as_mut() {
        surface.resize(width, height);
    }
}
