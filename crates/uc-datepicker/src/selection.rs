//! Selection model: single or range selection, bounds, cell classification.
//!
//! The selection model is shared by every panel. It enforces the range
//! ordering invariant (`start <= end` whenever both endpoints are set) on the
//! pick path, clamps candidates into the configured bounds, and classifies
//! day cells for rendering.

use chrono::NaiveDate;

use crate::codec;

/// Whether the widget selects one date or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One date.
    #[default]
    Single,
    /// A start/end pair.
    Range,
}

/// Optional minimum/maximum selectable dates.
///
/// `min <= max` is a caller responsibility when both are set; it is not
/// enforced here. With an inverted pair every date classifies as disabled,
/// and [`clamp`](Bounds::clamp) resolves to `min` (it is applied last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Minimum selectable date, unbounded if `None`.
    pub min: Option<NaiveDate>,
    /// Maximum selectable date, unbounded if `None`.
    pub max: Option<NaiveDate>,
}

impl Bounds {
    /// Bounds with no limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether `date` lies within the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(min) = self.min {
            if date < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if date > max {
                return false;
            }
        }
        true
    }

    /// Move `date` to the nearest bound if it falls outside.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let mut date = date;
        if let Some(max) = self.max {
            if date > max {
                date = max;
            }
        }
        if let Some(min) = self.min {
            if date < min {
                date = min;
            }
        }
        date
    }
}

/// A range selection. `end` is `None` while the range is open.
///
/// Invariant (maintained by [`Selection::pick`], not by direct assignment):
/// if both endpoints are set, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// First endpoint.
    pub start: Option<NaiveDate>,
    /// Second endpoint, `None` while the range is open.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Classification of a single day cell, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    /// Equal to the current date.
    pub today: bool,
    /// Equal to the selected date or a range endpoint.
    pub selected: bool,
    /// Strictly between the endpoints of a completed range.
    pub in_range: bool,
    /// Outside the configured bounds.
    pub disabled: bool,
}

/// The current selection, polymorphic over [`SelectionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Single-date selection.
    Single(Option<NaiveDate>),
    /// Range selection.
    Range(DateRange),
}

impl Selection {
    /// An empty selection for the given mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range(DateRange::default()),
        }
    }

    /// The mode this selection belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range(_) => SelectionMode::Range,
        }
    }

    /// Commit a picked date, clamping it into `bounds` first.
    ///
    /// Single mode replaces the current value. Range mode builds the range
    /// click by click: with no start, or with a completed range, the pick
    /// opens a new range; with an open range it closes it, swapping the
    /// endpoints if the pick precedes the start so that `start <= end` holds
    /// without the user having to click chronologically.
    pub fn pick(&mut self, candidate: NaiveDate, bounds: &Bounds) {
        let candidate = bounds.clamp(candidate);
        match self {
            Self::Single(value) => *value = Some(candidate),
            Self::Range(range) => match range.start {
                None => {
                    range.start = Some(candidate);
                    range.end = None;
                }
                Some(start) => {
                    if range.end.is_some() {
                        // Completed range: start over.
                        range.start = Some(candidate);
                        range.end = None;
                    } else if candidate < start {
                        range.end = Some(start);
                        range.start = Some(candidate);
                    } else {
                        range.end = Some(candidate);
                    }
                }
            },
        }
    }

    /// Classify a day cell. Pure function of date, selection, and bounds.
    pub fn classify(&self, date: NaiveDate, bounds: &Bounds, today: NaiveDate) -> CellFlags {
        let mut flags = CellFlags {
            today: date == today,
            disabled: !bounds.contains(date),
            ..CellFlags::default()
        };

        match self {
            Self::Range(range) if range.is_complete() => {
                let (start, end) = (range.start, range.end);
                if Some(date) == start || Some(date) == end {
                    flags.selected = true;
                } else if start.is_some_and(|s| date > s) && end.is_some_and(|e| date < e) {
                    flags.in_range = true;
                }
            }
            Self::Range(range) => {
                flags.selected = range.start == Some(date);
            }
            Self::Single(value) => {
                flags.selected = *value == Some(date);
            }
        }

        flags
    }

    /// The exact persisted/submitted value text.
    ///
    /// Single mode: the canonical date text or the empty string. Range mode:
    /// `"{start}~{end}"` with empty-string substitution for unset endpoints.
    /// This format is load-bearing for form submission compatibility.
    pub fn to_canonical_value(&self) -> String {
        match self {
            Self::Single(value) => value.map(codec::format).unwrap_or_default(),
            Self::Range(range) => {
                let start = range.start.map(codec::format).unwrap_or_default();
                let end = range.end.map(codec::format).unwrap_or_default();
                format!("{start}~{end}")
            }
        }
    }
}
