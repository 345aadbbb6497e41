//! Particle field simulation
//!
//! `ParticleField` owns the pool, the pointer, the viewport and the drawing
//! surface. Work is split by concern:
//! - lifecycle: start/stop, pool allocation and release
//! - step:      the gated per-frame update and render
//! - input:     pointer, scroll and resize events from the host
//! - driver:    self-rescheduling frame loop over a `FrameScheduler`

use std::rc::Rc;

use crate::core::{Clock, RandomSource, SystemClock, Vec2, Xorshift32};
use crate::domain::{FieldConfig, FieldError, Particle, QualityProfile, Viewport};
use crate::host::{DrawCommand, DrawSurface};

#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "step/step.rs"]
mod step;
#[path = "input/input.rs"]
mod input;
#[path = "stats/frame_stats.rs"]
mod frame_stats;
mod driver;

pub use driver::FrameDriver;
pub use frame_stats::FrameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Stopped,
    Running,
}

/// The particle field
pub struct ParticleField {
    config: FieldConfig,
    profile: QualityProfile,
    palette: Vec<Rc<str>>,
    pool_size: usize,

    rng: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    surface: Option<Box<dyn DrawSurface>>,

    // State
    state: FieldState,
    particles: Vec<Particle>,
    viewport: Viewport,
    pointer: Option<Vec2>,
    scroll_y: f64,
    last_frame_ms: Option<f64>,
    frames: u64,
    commands: Vec<DrawCommand>,

    // Stats
    stats_enabled: bool,
    stats: FrameStats,
}

impl ParticleField {
    /// Build a stopped field. Fails fast on an invalid config.
    pub fn new(
        config: FieldConfig,
        rng: Box<dyn RandomSource>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, FieldError> {
        config.validate()?;
        let profile = config.profile();
        let pool_size = config.effective_pool_size();
        let palette = config.colors.iter().map(|c| Rc::from(c.as_str())).collect();

        Ok(Self {
            config,
            profile,
            palette,
            pool_size,
            rng,
            clock,
            surface: None,
            state: FieldState::Stopped,
            particles: Vec::new(),
            viewport: Viewport::new(0.0, 0.0),
            pointer: None,
            scroll_y: 0.0,
            last_frame_ms: None,
            frames: 0,
            commands: Vec::new(),
            stats_enabled: false,
            stats: FrameStats::default(),
        })
    }

    /// Host clock, and the config seed if present (host entropy otherwise).
    pub fn with_seed(config: FieldConfig) -> Result<Self, FieldError> {
        let rng = match config.seed {
            Some(seed) => Xorshift32::new(seed),
            None => Xorshift32::from_entropy(),
        };
        Self::new(config, Box::new(rng), Box::new(SystemClock::new()))
    }

    /// Allocate the pool and begin accepting frames. Returns false, leaving the
    /// field stopped, when the host has no drawing surface.
    pub fn start(&mut self, viewport: Viewport, surface: Option<Box<dyn DrawSurface>>) -> bool {
        lifecycle::start(self, viewport, surface)
    }

    /// Release the pool and the surface. Safe to call at any time.
    pub fn stop(&mut self) {
        lifecycle::stop(self);
    }

    /// One animation callback. Returns true if the frame gate let it run.
    pub fn frame(&mut self) -> bool {
        step::frame(self)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        input::pointer_moved(self, x, y);
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        input::scrolled(self, scroll_y);
    }

    /// Resize the surface. Particles keep their state.
    pub fn resize(&mut self, width: f64, height: f64) {
        input::resize(self, width, height);
    }

    pub fn enable_stats(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
    }

    /// Last frame snapshot (zeros while stats are disabled)
    pub fn stats(&self) -> FrameStats {
        self.stats.clone()
    }

    pub fn state(&self) -> FieldState { self.state }

    pub fn is_running(&self) -> bool { self.state == FieldState::Running }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Frames that passed the gate since the last start.
    pub fn frames(&self) -> u64 { self.frames }

    pub fn config(&self) -> &FieldConfig { &self.config }

    pub fn profile(&self) -> &QualityProfile { &self.profile }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn pointer(&self) -> Option<Vec2> { self.pointer }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
