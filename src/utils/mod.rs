//! Shared utilities: logging, progress reporting and period keys

pub mod logging;
pub mod period;

pub use period::Period;
