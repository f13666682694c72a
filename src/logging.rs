//! Conditional logging module for development builds
//!
//! The `debug_log!` macro provides diagnostic logging of conversion inputs and
//! outputs that is compiled out in production (release) builds by default.
//! Warnings about lossy classification should continue using `log::warn!`
//! directly.
//!
//! Logging is enabled when either:
//! - Building in debug mode (`cfg(debug_assertions)`)
//! - The `console_logging` feature is explicitly enabled
//!
//! # Examples
//!
//! ```ignore
//! use journey_travel::debug_log;
//!
//! debug_log!("Converting {} segments", 3);
//! ```

/// Conditionally log through the `log` facade in development builds
///
/// This macro expands to `log::debug!()` in debug builds or when the
/// `console_logging` feature is enabled. In production release builds,
/// it compiles to nothing.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            ::log::debug!($($arg)+);
        }
    };
}

pub use crate::debug_log;
