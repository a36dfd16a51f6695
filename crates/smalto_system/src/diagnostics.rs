//! Debug-only diagnostics.
//!
//! Anomalies during theme construction are soft: the offending value falls
//! back to a default and a warning goes through `tracing`. Release builds
//! compile the sink away.

use std::fmt::Arguments;

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        /// Forwards a formatted warning to the `tracing` subscriber.
        pub fn emit(message: Arguments<'_>) {
            tracing::warn!("{message}");
        }
    } else {
        /// No-op in release builds.
        pub fn emit(_message: Arguments<'_>) {}
    }
}

/// Emits a non-fatal diagnostic, active only in debug builds.
#[macro_export]
macro_rules! soft_warn {
    ($($arg:tt)*) => {
        $crate::diagnostics::emit(::core::format_args!($($arg)*))
    };
}
