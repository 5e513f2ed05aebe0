#![forbid(unsafe_code)]

//! Structured logging shim.
//!
//! The field logs population rebuilds and shutdown at `info`, control toggles
//! and resizes at `debug`, per-frame counts at `trace`, and calls made after
//! `destroy()` at `warn`.
//!
//! With the `tracing` feature these are the `tracing` macros, re-exported at
//! the crate root. Without it, same-named macros expand to nothing, so call
//! sites such as `crate::info!(count, "...")` and `driftfield_core::warn!`
//! compile either way and cost nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Expands to nothing; enable the `tracing` feature for output.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature for output.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature for output.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature for output.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
