//! Browser bindings: a canvas-backed surface, a `requestAnimationFrame`
//! scheduler and the JS-facing handle that wires them to the DOM.

pub mod animation_frame;
pub mod canvas;
pub mod wasm;
