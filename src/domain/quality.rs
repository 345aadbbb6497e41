//! Quality tiers
//!
//! A tier is resolved once into a [`QualityProfile`] of plain numbers and
//! flags; the frame loop only ever reads the profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FieldError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Basic,
    #[default]
    Enhanced,
    Premium,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityProfile {
    /// Pool size cap; `None` keeps the requested count.
    pub max_pool: Option<usize>,
    pub target_fps: f64,
    /// Per-frame velocity multiplier, < 1.
    pub drag: f64,
    pub pointer_attraction: bool,
    /// Scale radius by pseudo-depth.
    pub depth_scaling: bool,
    pub glow: bool,
    pub connections: bool,
    pub sparkles: bool,
    /// Upper bound on the random part of a particle's radius.
    pub size_cap: f64,
}

impl Quality {
    pub fn profile(self) -> QualityProfile {
        match self {
            Self::Basic => QualityProfile {
                max_pool: Some(15),
                target_fps: 30.0,
                drag: 0.995,
                pointer_attraction: false,
                depth_scaling: false,
                glow: false,
                connections: false,
                sparkles: false,
                size_cap: 2.0,
            },
            Self::Enhanced => QualityProfile {
                max_pool: Some(30),
                target_fps: 45.0,
                drag: 0.998,
                pointer_attraction: true,
                depth_scaling: true,
                glow: true,
                connections: false,
                sparkles: false,
                size_cap: 2.5,
            },
            Self::Premium => QualityProfile {
                max_pool: None,
                target_fps: 60.0,
                drag: 0.998,
                pointer_attraction: true,
                depth_scaling: true,
                glow: true,
                connections: true,
                sparkles: true,
                size_cap: 3.0,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
            Self::Premium => "premium",
        }
    }
}

impl QualityProfile {
    /// Minimum spacing between executed frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    pub fn pool_size(&self, requested: usize) -> usize {
        match self.max_pool {
            Some(cap) => requested.min(cap),
            None => requested,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "enhanced" => Ok(Self::Enhanced),
            "premium" => Ok(Self::Premium),
            other => Err(FieldError::InvalidConfig(format!("unknown quality '{}'", other))),
        }
    }
}
