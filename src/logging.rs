//! Logging abstraction layer.
//!
//! The router logs through these macros only, so the backend is picked at
//! compile time by feature flag. The two features are **mutually exclusive**:
//! enable at most one.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! What the router reports at each level:
//!
//! - `trace_log!`: gate closing/opening and settle timings.
//! - `debug_log!`: dropped (gate closed) and ignored (no-op) requests.
//! - `info_log!`: every applied state change.
//! - `warn_log!`: multi-step sequences aborted because the router was released.
//! - `error_log!`: reserved for host code; the router itself never fails loudly.
//!
//! ```ignore
//! use gpui_stack_router::{debug_log, info_log};
//!
//! info_log!("Pushed '{}' (pushed views: {})", route, count);
//! debug_log!("Router busy, dropping {:?} transition", direction);
//! ```

/// Emit a **trace**-level log message.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level log message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level log message.
///
/// Accepts `format!`-style arguments like the other level macros.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
