use crate::core::random::{self, RandomSource};
use crate::core::Vec3;

use super::quality::QualityProfile;
use super::viewport::Viewport;

pub const MIN_LIFE: f64 = 200.0;
pub const MAX_LIFE: f64 = 500.0;
pub const MAX_DEPTH: f64 = 100.0;
pub const MIN_SIZE: f64 = 0.5;
pub const FADE_ALPHA: f64 = 0.6;

/// A single drifting particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Frames lived so far.
    pub life: u32,
    pub max_life: u32,
    pub size: f64,
    /// Index into the field's palette.
    pub color: usize,
    /// Reserved; not read by any force.
    pub mass: f64,
    /// Constant vertical drift added to `vy` every frame.
    pub gravity: f64,
}

impl Particle {
    /// Fresh particle with every attribute drawn from `rng`.
    pub fn spawn(
        rng: &mut dyn RandomSource,
        viewport: Viewport,
        speed: f64,
        palette_len: usize,
        profile: &QualityProfile,
    ) -> Self {
        let position = Vec3::new(
            random::range(rng, 0.0, viewport.width),
            random::range(rng, 0.0, viewport.height),
            random::range(rng, 0.0, MAX_DEPTH),
        );
        let velocity = Vec3::new(
            (rng.next_f64() - 0.5) * speed,
            (rng.next_f64() - 0.5) * speed,
            (rng.next_f64() - 0.5) * speed * 0.5,
        );
        // Inclusive upper bound: 200..=500 frames.
        let max_life = (MIN_LIFE + (rng.next_f64() * (MAX_LIFE - MIN_LIFE + 1.0)).floor()) as u32;

        Self {
            position,
            velocity,
            life: 0,
            max_life,
            size: random::range(rng, MIN_SIZE, MIN_SIZE + profile.size_cap),
            color: random::index(rng, palette_len),
            mass: random::range(rng, 0.1, 0.4),
            gravity: random::range(rng, -0.001, 0.001),
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.life > self.max_life
    }

    /// Opacity fading from 0.6 at birth to 0 at `max_life`.
    #[inline]
    pub fn fade_alpha(&self) -> f64 {
        (1.0 - self.life as f64 / self.max_life as f64) * FADE_ALPHA
    }
}
