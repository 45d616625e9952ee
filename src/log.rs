//! Conditional diagnostics.
//!
//! With the `tracing` feature enabled these re-export `tracing` macros;
//! otherwise they expand to nothing. Tracing never affects control flow:
//! the resolver produces identical results with it on or off.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
