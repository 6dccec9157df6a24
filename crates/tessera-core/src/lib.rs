#![forbid(unsafe_code)]

//! Core: cell geometry and the logging facade shared by the Tessera crates.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
