pub mod config;
pub mod error;
pub mod particle;
pub mod quality;
pub mod viewport;

pub use config::FieldConfig;
pub use error::FieldError;
pub use particle::Particle;
pub use quality::{Quality, QualityProfile};
pub use viewport::Viewport;
