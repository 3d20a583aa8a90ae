//! The widget controller: command surface and change notification.
//!
//! [`DatePicker`] owns the panels, the selection model, and the configured
//! bounds, and exposes one method per user interaction. Every mutation goes
//! through here, which is what keeps the signal story simple: state changes
//! in, signals out, and the embedding redraws from a fresh snapshot whenever
//! [`render_requested`](DatePicker::render_requested) fires.

use chrono::NaiveDate;
use tracing::{debug, trace, warn};
use uc_datepicker_core::logging::targets;
use uc_datepicker_core::Signal;

use crate::codec::{self, ParseDateError};
use crate::locale::{LocaleStrings, LocaleTag};
use crate::panel::{Direction, Panels, Side};
use crate::selection::{Bounds, Selection, SelectionMode};

/// Identifies one of the manual-entry text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The only field in single mode.
    Single,
    /// The range-start field.
    Start,
    /// The range-end field.
    End,
}

impl InputField {
    fn index(self) -> usize {
        match self {
            Self::Single => 0,
            Self::Start => 1,
            Self::End => 2,
        }
    }
}

/// Payload of [`DatePicker::selection_changed`]: the committed value as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    /// Single mode: the canonical date text.
    Single(String),
    /// Range mode: both endpoints, empty strings while unset.
    Range { start: String, end: String },
}

/// The date picker widget core.
///
/// Holds all widget state and drives it through interaction commands. The
/// rendering layer observes it through signals and reads state back through
/// the getters (or a [`Snapshot`](crate::view::Snapshot)).
///
/// # Signals
///
/// - [`selection_changed`](Self::selection_changed): the user committed a
///   date (or range endpoint). Carries the new value.
/// - [`render_requested`](Self::render_requested): any visible state changed;
///   the embedding should redraw.
/// - [`input_rejected`](Self::input_rejected): manual text entry could not be
///   interpreted. Carries the offending field.
/// - [`overlay_changed`](Self::overlay_changed): the calendar overlay opened
///   or closed. Carries the new open state.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use uc_datepicker::config::PickerConfig;
/// use uc_datepicker::panel::Side;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let mut picker = PickerConfig::new().build_with_today(today);
///
/// picker.selection_changed.connect(|value| {
///     println!("selected: {:?}", value);
/// });
/// picker.pick_day(Side::Left, "2024-03-20");
/// assert_eq!(picker.form_value(), "2024-03-20");
/// ```
pub struct DatePicker {
    mode: SelectionMode,
    lang: LocaleTag,
    bounds: Bounds,
    name: String,
    today: NaiveDate,
    panels: Panels,
    selection: Selection,
    overlay_open: bool,
    /// Invalid-entry markers, indexed by [`InputField::index`].
    field_invalid: [bool; 3],

    /// Emitted when the user commits a date or range endpoint.
    pub selection_changed: Signal<SelectionValue>,
    /// Emitted whenever visible state changed and the widget needs a redraw.
    pub render_requested: Signal<()>,
    /// Emitted when manual text entry is rejected.
    pub input_rejected: Signal<InputField>,
    /// Emitted when the overlay opens or closes.
    pub overlay_changed: Signal<bool>,
}

impl DatePicker {
    /// Create a picker. Prefer [`PickerConfig`](crate::config::PickerConfig).
    pub fn new(
        mode: SelectionMode,
        lang: LocaleTag,
        bounds: Bounds,
        name: String,
        today: NaiveDate,
    ) -> Self {
        Self {
            mode,
            lang,
            bounds,
            name,
            today,
            panels: Panels::seeded(today),
            selection: Selection::empty(mode),
            overlay_open: false,
            field_invalid: [false; 3],
            selection_changed: Signal::new(),
            render_requested: Signal::new(),
            input_rejected: Signal::new(),
            overlay_changed: Signal::new(),
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The active locale.
    pub fn lang(&self) -> LocaleTag {
        self.lang
    }

    /// The display strings for the active locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        self.lang.strings()
    }

    /// The selectable bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The form field name the value is submitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date the widget treats as "today".
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The panel pair.
    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the calendar overlay is open.
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Whether the last manual entry into `field` was rejected.
    pub fn field_invalid(&self, field: InputField) -> bool {
        self.field_invalid[field.index()]
    }

    /// The committed text shown in a manual-entry field.
    ///
    /// Fields that do not apply to the current mode yield `""`.
    pub fn field_text(&self, field: InputField) -> String {
        match (field, &self.selection) {
            (InputField::Single, Selection::Single(value)) => {
                value.map(codec::format).unwrap_or_default()
            }
            (InputField::Start, Selection::Range(range)) => {
                range.start.map(codec::format).unwrap_or_default()
            }
            (InputField::End, Selection::Range(range)) => {
                range.end.map(codec::format).unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    /// The value in its persisted form: canonical date text in single mode,
    /// `"{start}~{end}"` in range mode.
    pub fn form_value(&self) -> String {
        self.selection.to_canonical_value()
    }

    /// The value property: canonical date text in single mode, a start/end
    /// pair in range mode (empty strings while unset).
    ///
    /// This is the shape [`selection_changed`](Self::selection_changed)
    /// carries; the flat submitted string is [`form_value`](Self::form_value).
    pub fn value(&self) -> SelectionValue {
        self.selection_value()
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Open the calendar overlay.
    pub fn open_overlay(&mut self) {
        if !self.overlay_open {
            self.overlay_open = true;
            self.overlay_changed.emit(true);
            self.render_requested.emit(());
        }
    }

    /// Close the calendar overlay.
    pub fn close_overlay(&mut self) {
        if self.overlay_open {
            self.overlay_open = false;
            self.overlay_changed.emit(false);
            self.render_requested.emit(());
        }
    }

    // =========================================================================
    // Panel navigation
    // =========================================================================

    /// Activate a panel's year label: show its year grid.
    pub fn activate_year_label(&mut self, side: Side) {
        trace!(target: targets::CONTROLLER, ?side, "activate year label");
        self.panels.get_mut(side).show_year_picker();
        self.render_requested.emit(());
    }

    /// Activate a panel's month label: show its month grid.
    pub fn activate_month_label(&mut self, side: Side) {
        trace!(target: targets::CONTROLLER, ?side, "activate month label");
        self.panels.get_mut(side).show_month_picker();
        self.render_requested.emit(());
    }

    /// Pick a year cell in a panel's year grid.
    pub fn pick_year(&mut self, side: Side, year: i32) {
        trace!(target: targets::CONTROLLER, ?side, year, "pick year");
        self.panels.get_mut(side).pick_year(year);
        self.render_requested.emit(());
    }

    /// Pick a month cell (1-12) in a panel's month grid.
    pub fn pick_month(&mut self, side: Side, month: u32) {
        trace!(target: targets::CONTROLLER, ?side, month, "pick month");
        self.panels.get_mut(side).pick_month(month);
        self.render_requested.emit(());
    }

    /// Page a panel backward or forward.
    pub fn paginate(&mut self, side: Side, direction: Direction) {
        trace!(target: targets::CONTROLLER, ?side, ?direction, "paginate");
        self.panels.get_mut(side).paginate(direction);
        self.render_requested.emit(());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Pick a day cell carrying canonical `YYYY-MM-DD` text.
    ///
    /// Text that does not validate is ignored, as is a date outside the
    /// bounds: disabled cells do not react to clicks. In single mode a
    /// successful pick also closes the overlay.
    pub fn pick_day(&mut self, side: Side, text: &str) {
        let Ok(date) = codec::validate(text) else {
            warn!(target: targets::CONTROLLER, text, "day cell carried invalid date text");
            return;
        };
        if !self.bounds.contains(date) {
            trace!(target: targets::CONTROLLER, %date, "ignoring disabled day cell");
            return;
        }
        trace!(target: targets::CONTROLLER, ?side, %date, "pick day");
        self.commit_pick(date);
    }

    /// Activate a panel's today button: navigate that panel to the current
    /// month, and select today if it is within bounds.
    pub fn go_to_today(&mut self, side: Side) {
        trace!(target: targets::CONTROLLER, ?side, "go to today");
        self.panels.get_mut(side).show_date(self.today);
        if self.bounds.contains(self.today) {
            self.commit_pick(self.today);
        } else {
            self.render_requested.emit(());
        }
    }

    /// Submit manually typed text for one of the entry fields.
    ///
    /// Interpretation is two-stage: strict validation of the normalized text
    /// first, then [`codec::smart_parse`] as the forgiving fallback. If both
    /// fail, the field is marked invalid and [`input_rejected`](Self::input_rejected)
    /// fires; nothing else changes.
    ///
    /// In single mode a successful parse replaces the selection. In range
    /// mode it writes the addressed endpoint directly, without the
    /// auto-swapping applied to grid picks.
    pub fn submit_manual_text(&mut self, field: InputField, raw: &str) {
        let trimmed = raw.trim();
        let parsed = codec::validate(&codec::normalize(trimmed))
            .or_else(|_| codec::smart_parse(trimmed, self.today));

        let date = match parsed {
            Ok(date) => date,
            Err(err) => {
                warn!(target: targets::CONTROLLER, ?field, raw, %err, "rejecting manual entry");
                self.field_invalid[field.index()] = true;
                self.input_rejected.emit(field);
                return;
            }
        };

        self.field_invalid[field.index()] = false;
        let date = self.bounds.clamp(date);
        debug!(target: targets::CONTROLLER, ?field, %date, "committing manual entry");

        match (&mut self.selection, field) {
            (Selection::Single(value), InputField::Single) => *value = Some(date),
            (Selection::Range(range), InputField::Start) => range.start = Some(date),
            (Selection::Range(range), InputField::End) => range.end = Some(date),
            _ => {
                warn!(target: targets::CONTROLLER, ?field, "field does not apply to current mode");
                return;
            }
        }

        self.selection_changed.emit(self.selection_value());
        self.render_requested.emit(());
    }

    /// Set the value programmatically, from its persisted text form.
    ///
    /// Single mode accepts canonical (or loose `Y-M-D`) date text, or `""` to
    /// clear. Range mode accepts `"{start}~{end}"` with either side empty.
    /// Dates are clamped into the bounds. This is the property-assignment
    /// path: it redraws but does not fire
    /// [`selection_changed`](Self::selection_changed).
    pub fn set_value(&mut self, text: &str) -> Result<(), ParseDateError> {
        match &mut self.selection {
            Selection::Single(value) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    *value = None;
                } else {
                    let date = codec::validate(&codec::normalize(trimmed))?;
                    *value = Some(self.bounds.clamp(date));
                }
            }
            Selection::Range(range) => {
                let (start_text, end_text) = text
                    .split_once('~')
                    .ok_or_else(|| ParseDateError::Format(text.to_string()))?;
                range.start = parse_endpoint(start_text, &self.bounds)?;
                range.end = parse_endpoint(end_text, &self.bounds)?;
            }
        }
        debug!(target: targets::CONTROLLER, value = %self.form_value(), "value set programmatically");
        self.render_requested.emit(());
        Ok(())
    }

    fn commit_pick(&mut self, date: NaiveDate) {
        self.selection.pick(date, &self.bounds);
        self.field_invalid = [false; 3];
        debug!(target: targets::CONTROLLER, value = %self.form_value(), "selection committed");
        self.selection_changed.emit(self.selection_value());
        if self.mode == SelectionMode::Single {
            self.close_overlay();
        }
        self.render_requested.emit(());
    }

    fn selection_value(&self) -> SelectionValue {
        match &self.selection {
            Selection::Single(value) => {
                SelectionValue::Single(value.map(codec::format).unwrap_or_default())
            }
            Selection::Range(range) => SelectionValue::Range {
                start: range.start.map(codec::format).unwrap_or_default(),
                end: range.end.map(codec::format).unwrap_or_default(),
            },
        }
    }
}

fn parse_endpoint(text: &str, bounds: &Bounds) -> Result<Option<NaiveDate>, ParseDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = codec::validate(&codec::normalize(trimmed))?;
    Ok(Some(bounds.clamp(date)))
}
