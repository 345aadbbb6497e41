use crate::core::Vec2;
use crate::domain::Particle;

/// Pointer influence radius.
pub const ATTRACTION_RADIUS: f64 = 100.0;
pub const ATTRACTION_STRENGTH: f64 = 0.003;

/// Pull a particle toward the pointer.
/// Returns true if an impulse was applied.
#[inline]
pub fn attract(particle: &mut Particle, pointer: Vec2) -> bool {
    let dx = pointer.x - particle.position.x;
    let dy = pointer.y - particle.position.y;
    let distance = (dx * dx + dy * dy).sqrt();

    // Pointer exactly on the particle has no direction.
    if distance <= 0.0 || distance >= ATTRACTION_RADIUS {
        return false;
    }

    let force = (ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS * ATTRACTION_STRENGTH;
    particle.velocity.x += dx / distance * force;
    particle.velocity.y += dy / distance * force;
    true
}

/// Apply the particle's own vertical drift.
#[inline]
pub fn drift(particle: &mut Particle) {
    particle.velocity.y += particle.gravity;
}

/// Exponential velocity decay.
#[inline]
pub fn drag(particle: &mut Particle, coefficient: f64) {
    particle.velocity *= coefficient;
}
