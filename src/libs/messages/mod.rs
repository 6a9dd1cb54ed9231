//! User-facing text and the macros that print it.
//!
//! Output goes through the `msg_*` macros, which print plain lines in normal
//! use and switch to `tracing` events when debug mode is on.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
