//! Core plumbing for the uc-datepicker widget.
//!
//! This crate holds the framework-level pieces the widget is built on,
//! independent of any calendar logic:
//!
//! - [`Signal`] - a Qt-style signal/slot mechanism for change notification
//! - [`logging`] - `tracing` target constants for log filtering
//!
//! The widget itself lives in the `uc-datepicker` crate.

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
