//! Logging shims.
//!
//! `tracing` is an optional dependency. Library code logs through these
//! macros so call sites stay free of `cfg` attributes; with the `tracing`
//! feature disabled they expand to nothing.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}
