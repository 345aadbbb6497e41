use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source read by the frame-rate gate.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Host monotonic clock.
#[derive(Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SystemClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            // `performance.now()` is monotonic; `Date.now()` follows wall-clock corrections.
            web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or_else(js_sys::Date::now)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Hand-driven clock. Clones share the same time, so a test keeps one handle
/// and gives another to the field.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
