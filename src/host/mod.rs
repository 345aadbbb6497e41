//! Contracts the field expects from its host: somewhere to draw and something
//! that calls back once per display frame.

pub mod scheduler;
pub mod surface;

pub use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
