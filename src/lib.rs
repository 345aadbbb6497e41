//! Particle Field - decorative particle background for the Astra dashboard
//!
//! Architecture:
//! - core/        - Logging macros, randomness, clocks, vectors
//! - domain/      - Config, quality tiers, particles
//! - systems/     - Forces, bounds, visual effects
//! - host/        - Drawing surface and frame scheduler contracts
//! - simulation/  - The particle field and its frame driver
//! - api/         - Browser bindings

// Logging macros must be defined before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod host;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    field_log!("particle field module initialized");
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::ParticleFieldHandle;
pub use domain::{FieldConfig, FieldError, Particle, Quality, QualityProfile, Viewport};
pub use host::{DrawCommand, DrawSurface, FrameScheduler, ManualScheduler, RecordingSurface};
pub use simulation::{FieldState, FrameDriver, FrameStats, ParticleField};
