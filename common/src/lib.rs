//! Shared building blocks for the nessus workspace.
//!
//! * [`config`]: runtime switches filled from the command line.
//! * [`error`]: error types surfaced by host and report accessors.
//! * [`xml`]: the query seam the host model reads its document through.
//! * [`log`]: logging macros on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod xml;

#[doc(hidden)]
pub use tracing as __tracing;
