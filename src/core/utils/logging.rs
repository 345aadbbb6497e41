//! Console logging macros
//!
//! On `wasm32` these forward to `web_sys::console`. Native builds have no JS
//! console to import from, so `field_log!` compiles away and `field_warn!`
//! goes to stderr.
//!
//! Usage:
//! ```rust
//! use particle_field::{field_log, field_warn};
//!
//! field_log!("spawned {} particles", 30);
//! field_warn!("no drawing surface, field stays idle");
//! ```

#[macro_export]
macro_rules! field_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::logging::console_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! field_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::logging::console_warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("[particle-field] {}", format_args!($($arg)*));
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
