//! Logging macros shared by every crate of the workspace.
//!
//! They forward to `tracing`, so callers do not need their own dependency on it.
//! `success!` logs at info level under the [`SUCCESS_TARGET`] target, which the
//! terminal formatter renders with its own prefix.

pub const SUCCESS_TARGET: &str = "nessus::success";
pub const PRINT_TARGET: &str = "nessus::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "nessus::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
