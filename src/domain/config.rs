//! Construction parameters
//!
//! Every field is optional in JSON form:
//! ```json
//! { "particleCount": 60, "speed": 0.5, "colors": ["rgba(99, 102, 241, 0.6)"], "quality": "premium" }
//! ```

use serde::{Deserialize, Serialize};

use super::error::FieldError;
use super::quality::{Quality, QualityProfile};

pub const DEFAULT_PARTICLE_COUNT: usize = 30;
pub const DEFAULT_SPEED: f64 = 0.5;

pub fn default_palette() -> Vec<String> {
    vec![
        "rgba(99, 102, 241, 0.6)".to_string(),
        "rgba(139, 92, 246, 0.6)".to_string(),
        "rgba(236, 72, 153, 0.6)".to_string(),
        "rgba(59, 130, 246, 0.6)".to_string(),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Multiplier on the initial random velocity.
    pub speed: f64,
    pub colors: Vec<String>,
    pub quality: Quality,
    /// Fixed RNG seed; `None` seeds from the host.
    pub seed: Option<u32>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed: DEFAULT_SPEED,
            colors: default_palette(),
            quality: Quality::default(),
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.colors.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        if self.particle_count == 0 {
            return Err(FieldError::ZeroParticleCount);
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(FieldError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    pub fn profile(&self) -> QualityProfile {
        self.quality.profile()
    }

    /// Pool size after the tier cap.
    pub fn effective_pool_size(&self) -> usize {
        self.profile().pool_size(self.particle_count)
    }
}
