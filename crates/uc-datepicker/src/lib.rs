//! uc-datepicker: an embeddable single/range date-selection widget core.
//!
//! The crate separates the widget into a state machine and a rendering seam.
//! [`DatePicker`] owns all state (visible months, drill-down views, the
//! selection, bounds, locale) and exposes one method per user interaction.
//! State changes are announced through signals; the embedding redraws by
//! capturing a [`Snapshot`] and feeding it to its [`Presenter`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use uc_datepicker::{PickerConfig, SelectionMode, Side};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let mut picker = PickerConfig::new()
//!     .with_mode(SelectionMode::Range)
//!     .with_lang_attr("en")
//!     .build_with_today(today);
//!
//! picker.pick_day(Side::Left, "2024-03-20");
//! picker.pick_day(Side::Left, "2024-03-10"); // earlier pick becomes the start
//! assert_eq!(picker.form_value(), "2024-03-10~2024-03-20");
//! ```
//!
//! # Logging
//!
//! The crate instruments itself with [`tracing`]; see
//! [`uc_datepicker_core::logging::targets`] for the filter targets.

pub mod codec;
pub mod config;
pub mod controller;
pub mod locale;
pub mod panel;
pub mod selection;
pub mod view;

pub use config::{ConfigError, PickerConfig};
pub use controller::{DatePicker, InputField, SelectionValue};
pub use locale::{LocaleStrings, LocaleTag};
pub use panel::{Direction, PanelState, Panels, Side, ViewMode};
pub use selection::{Bounds, CellFlags, DateRange, Selection, SelectionMode};
pub use view::{Presenter, Snapshot};

pub use uc_datepicker_core::{ConnectionGuard, ConnectionId, Signal};

// The widget core is handed across threads by some embeddings; its interior
// mutability is confined to the signals, which are lock-protected.
static_assertions::assert_impl_all!(DatePicker: Send);
static_assertions::assert_impl_all!(codec::ParseDateError: std::error::Error, Send, Sync);
