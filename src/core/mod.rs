//! Core building blocks shared by every layer: logging macros, randomness,
//! time and vector math.

#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;

pub mod clock;
pub mod random;
pub mod vec3;

pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{RandomSource, Xorshift32};
pub use vec3::{Vec2, Vec3};
