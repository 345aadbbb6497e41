use crate::domain::{Particle, Viewport};

/// Distance past the viewport edge before a particle wraps.
pub const WRAP_MARGIN: f64 = 50.0;

/// One Euler step, unit timestep.
#[inline]
pub fn integrate(particle: &mut Particle) {
    particle.position += particle.velocity;
}

/// Toroidal wrap: leaving one margin re-enters at the opposite one.
#[inline]
pub fn wrap(particle: &mut Particle, viewport: Viewport) {
    particle.position.x = wrap_axis(particle.position.x, viewport.width);
    particle.position.y = wrap_axis(particle.position.y, viewport.height);
}

#[inline]
fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else {
        value
    }
}
