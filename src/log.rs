//! Logging macros.
//!
//! These compile to nothing unless the `log` feature is enabled.
#![allow(unused_macros, unused_imports)]

/// Emits a trace-level record.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

/// Emits a debug-level record.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

pub(crate) use {debug, trace};
