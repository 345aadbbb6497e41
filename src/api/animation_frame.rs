use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::host::{FrameCallback, FrameHandle, FrameScheduler};

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let closure = Closure::once_into_js(move |_timestamp: f64| callback());
        self.window
            .request_animation_frame(closure.unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}
