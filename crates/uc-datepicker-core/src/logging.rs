//! Logging facilities for uc-datepicker.
//!
//! The widget uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "uc_datepicker_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "uc_datepicker_core::signal";
    /// Controller command handling target.
    pub const CONTROLLER: &str = "uc_datepicker::controller";
    /// Date codec target.
    pub const CODEC: &str = "uc_datepicker::codec";
    /// Locale table target.
    pub const LOCALE: &str = "uc_datepicker::locale";
}
