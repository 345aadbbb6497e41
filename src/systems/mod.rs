//! Per-particle systems run by the frame step, plus the effect builders that
//! turn particle state into draw commands.

pub mod bounds;
pub mod effects;
pub mod forces;
