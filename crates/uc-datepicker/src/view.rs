//! Render snapshots and the presenter seam.
//!
//! The controller never draws. Instead, an embedding implements [`Presenter`]
//! and, whenever [`render_requested`](crate::controller::DatePicker::render_requested)
//! fires, captures a [`Snapshot`] and hands it over. The snapshot is a plain
//! value: fully localized labels, classified cells, nothing left to compute,
//! so presenters stay dumb and testable.

use chrono::{Datelike, NaiveDate};

use crate::codec;
use crate::controller::{DatePicker, InputField};
use crate::panel::{Side, ViewMode};
use crate::selection::{CellFlags, SelectionMode};

/// Placeholder text for the single-mode entry field.
pub const PLACEHOLDER_SINGLE: &str = "選取日期";
/// Placeholder text for the range-start entry field.
pub const PLACEHOLDER_START: &str = "開始日期";
/// Placeholder text for the range-end entry field.
pub const PLACEHOLDER_END: &str = "結束日期";

/// Something that can draw the widget. Implemented by the embedding.
pub trait Presenter {
    /// Redraw from a fresh snapshot.
    fn render(&mut self, snapshot: &Snapshot);
}

/// One day cell in the day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// Canonical `YYYY-MM-DD` text, suitable to feed back into
    /// [`DatePicker::pick_day`](crate::controller::DatePicker::pick_day).
    pub date_text: String,
    /// Rendering classification.
    pub flags: CellFlags,
}

/// One month cell in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// Month number, 1-based.
    pub month: u32,
    /// Localized month name.
    pub label: &'static str,
    /// Whether this is the panel's visible month.
    pub selected: bool,
}

/// One year cell in the year grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCell {
    /// The year.
    pub year: i32,
    /// Localized year label (suffix applied).
    pub label: String,
    /// Whether this is the panel's visible year.
    pub selected: bool,
}

/// The body of one panel, depending on its drill-down view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// The day grid.
    Days {
        /// Localized year label.
        year_label: String,
        /// Localized month label.
        month_label: &'static str,
        /// Weekday header, Sunday first.
        weekdays: [&'static str; 7],
        /// Empty cells before day 1, aligning it to its weekday column.
        leading_blanks: u32,
        /// One cell per day of the visible month.
        cells: Vec<DayCell>,
    },
    /// The 12-cell month grid.
    Months {
        /// Localized year label.
        year_label: String,
        /// The twelve months.
        cells: Vec<MonthCell>,
    },
    /// The 12-cell year grid.
    Years {
        /// Label for the visible window, e.g. `"2016年 - 2027年"`.
        window_label: String,
        /// The twelve years of the window.
        cells: Vec<YearCell>,
    },
}

/// One rendered panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Which panel this is.
    pub side: Side,
    /// Its body, per its view mode.
    pub body: PanelBody,
}

/// One manual-entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Which field this is.
    pub field: InputField,
    /// Committed text, empty while nothing is selected.
    pub text: String,
    /// Whether the last entry into this field was rejected.
    pub invalid: bool,
    /// Localized placeholder.
    pub placeholder: &'static str,
}

/// A complete, self-contained description of the widget's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The selection mode.
    pub mode: SelectionMode,
    /// Whether the calendar overlay is open.
    pub overlay_open: bool,
    /// The visible panels: one in single mode, two in range mode.
    pub panels: Vec<PanelView>,
    /// Localized label of the jump-to-today buttons.
    pub today_label: &'static str,
    /// The manual-entry fields: one in single mode, two in range mode.
    pub fields: Vec<FieldView>,
    /// The form field name the value is submitted under.
    pub form_name: String,
    /// The value in its persisted text form.
    pub form_value: String,
}

impl Snapshot {
    /// Capture the widget's current visible state.
    pub fn capture(picker: &DatePicker) -> Self {
        let sides: &[Side] = match picker.mode() {
            SelectionMode::Single => &[Side::Left],
            SelectionMode::Range => &[Side::Left, Side::Right],
        };
        let fields: &[(InputField, &'static str)] = match picker.mode() {
            SelectionMode::Single => &[(InputField::Single, PLACEHOLDER_SINGLE)],
            SelectionMode::Range => &[
                (InputField::Start, PLACEHOLDER_START),
                (InputField::End, PLACEHOLDER_END),
            ],
        };

        Self {
            mode: picker.mode(),
            overlay_open: picker.overlay_open(),
            panels: sides
                .iter()
                .map(|&side| PanelView {
                    side,
                    body: panel_body(picker, side),
                })
                .collect(),
            today_label: picker.strings().today,
            fields: fields
                .iter()
                .map(|&(field, placeholder)| FieldView {
                    field,
                    text: picker.field_text(field),
                    invalid: picker.field_invalid(field),
                    placeholder,
                })
                .collect(),
            form_name: picker.name().to_string(),
            form_value: picker.form_value(),
        }
    }
}

fn panel_body(picker: &DatePicker, side: Side) -> PanelBody {
    let panel = picker.panels().get(side);
    let strings = picker.strings();
    let (year, month) = panel.visible_month();

    match panel.view_mode() {
        ViewMode::Date => {
            // first_of_month is constructed from a validated visible month.
            let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap_or(picker.today());
            let leading_blanks = first_of_month.weekday().num_days_from_sunday();
            let cells = (1..=codec::days_in_month(year, month))
                .filter_map(|day| {
                    let date = NaiveDate::from_ymd_opt(year, month, day)?;
                    Some(DayCell {
                        day,
                        date_text: codec::format(date),
                        flags: picker
                            .selection()
                            .classify(date, &picker.bounds(), picker.today()),
                    })
                })
                .collect();
            PanelBody::Days {
                year_label: strings.year_label(year),
                month_label: strings.month_name(month),
                weekdays: strings.weekdays,
                leading_blanks,
                cells,
            }
        }
        ViewMode::Month => PanelBody::Months {
            year_label: strings.year_label(year),
            cells: (1..=12)
                .map(|m| MonthCell {
                    month: m,
                    label: strings.month_name(m),
                    selected: m == month,
                })
                .collect(),
        },
        ViewMode::Year => {
            let start = panel.year_window_start();
            PanelBody::Years {
                window_label: format!(
                    "{} - {}",
                    strings.year_label(start),
                    strings.year_label(start + 11)
                ),
                cells: (start..start + 12)
                    .map(|y| YearCell {
                        year: y,
                        label: strings.year_label(y),
                        selected: y == year,
                    })
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::locale::LocaleTag;
    use crate::panel::Direction;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn picker(mode: SelectionMode) -> DatePicker {
        PickerConfig::new()
            .with_mode(mode)
            .with_lang(LocaleTag::En)
            .build_with_today(date(2024, 3, 15))
    }

    #[test]
    fn test_single_mode_snapshot_shape() {
        let picker = picker(SelectionMode::Single);
        let snapshot = Snapshot::capture(&picker);

        assert_eq!(snapshot.panels.len(), 1);
        assert_eq!(snapshot.fields.len(), 1);
        assert_eq!(snapshot.fields[0].placeholder, PLACEHOLDER_SINGLE);
        assert_eq!(snapshot.today_label, "Today");
        assert_eq!(snapshot.form_name, "uc-datepicker");
        assert_eq!(snapshot.form_value, "");
    }

    #[test]
    fn test_range_mode_snapshot_shape() {
        let picker = picker(SelectionMode::Range);
        let snapshot = Snapshot::capture(&picker);

        assert_eq!(snapshot.panels.len(), 2);
        assert_eq!(snapshot.panels[0].side, Side::Left);
        assert_eq!(snapshot.panels[1].side, Side::Right);
        assert_eq!(snapshot.fields.len(), 2);
        assert_eq!(snapshot.fields[0].placeholder, PLACEHOLDER_START);
        assert_eq!(snapshot.fields[1].placeholder, PLACEHOLDER_END);
        assert_eq!(snapshot.form_value, "~");
    }

    #[test]
    fn test_day_grid_layout() {
        let picker = picker(SelectionMode::Single);
        let snapshot = Snapshot::capture(&picker);

        // March 2024 starts on a Friday and has 31 days.
        let PanelBody::Days {
            year_label,
            month_label,
            weekdays,
            leading_blanks,
            cells,
        } = &snapshot.panels[0].body
        else {
            panic!("expected day grid");
        };
        assert_eq!(year_label, "2024");
        assert_eq!(*month_label, "Mar");
        assert_eq!(weekdays[0], "Sun");
        assert_eq!(*leading_blanks, 5);
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0].date_text, "2024-03-01");
        assert!(cells[14].flags.today); // the 15th
    }

    #[test]
    fn test_day_grid_classification_flows_through() {
        let mut picker = PickerConfig::new()
            .with_mode(SelectionMode::Range)
            .with_lang(LocaleTag::En)
            .with_min(date(2024, 3, 5))
            .build_with_today(date(2024, 3, 15));
        picker.pick_day(Side::Left, "2024-03-10");
        picker.pick_day(Side::Left, "2024-03-20");

        let snapshot = Snapshot::capture(&picker);
        let PanelBody::Days { cells, .. } = &snapshot.panels[0].body else {
            panic!("expected day grid");
        };
        assert!(cells[9].flags.selected); // the 10th
        assert!(cells[19].flags.selected); // the 20th
        assert!(cells[14].flags.in_range); // the 15th
        assert!(cells[0].flags.disabled); // the 1st, below min
    }

    #[test]
    fn test_month_grid() {
        let mut picker = picker(SelectionMode::Single);
        picker.activate_month_label(Side::Left);

        let snapshot = Snapshot::capture(&picker);
        let PanelBody::Months { year_label, cells } = &snapshot.panels[0].body else {
            panic!("expected month grid");
        };
        assert_eq!(year_label, "2024");
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].label, "Jan");
        assert!(cells[2].selected); // March
        assert!(!cells[3].selected);
    }

    #[test]
    fn test_year_grid_window() {
        let mut picker = picker(SelectionMode::Single);
        picker.activate_year_label(Side::Left);
        picker.paginate(Side::Left, Direction::Forward);

        let snapshot = Snapshot::capture(&picker);
        let PanelBody::Years { window_label, cells } = &snapshot.panels[0].body else {
            panic!("expected year grid");
        };
        assert_eq!(window_label, "2028 - 2039");
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].year, 2028);
        // The visible year scrolled out of the window; nothing is selected.
        assert!(cells.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_year_suffix_in_labels() {
        let picker = PickerConfig::new()
            .with_lang(LocaleTag::ZhTw)
            .build_with_today(date(2024, 3, 15));
        let snapshot = Snapshot::capture(&picker);
        let PanelBody::Days { year_label, .. } = &snapshot.panels[0].body else {
            panic!("expected day grid");
        };
        assert_eq!(year_label, "2024年");
        assert_eq!(snapshot.today_label, "今天");
    }

    #[test]
    fn test_field_view_reflects_invalid_marker() {
        let mut picker = picker(SelectionMode::Single);
        picker.submit_manual_text(InputField::Single, "junk");

        let snapshot = Snapshot::capture(&picker);
        assert!(snapshot.fields[0].invalid);
        assert_eq!(snapshot.fields[0].text, "");
    }

    #[test]
    fn test_presenter_receives_snapshot() {
        struct Recorder {
            rendered: Vec<String>,
        }
        impl Presenter for Recorder {
            fn render(&mut self, snapshot: &Snapshot) {
                self.rendered.push(snapshot.form_value.clone());
            }
        }

        let mut picker = picker(SelectionMode::Single);
        picker.pick_day(Side::Left, "2024-03-20");

        let mut recorder = Recorder { rendered: vec![] };
        recorder.render(&Snapshot::capture(&picker));
        assert_eq!(recorder.rendered, vec!["2024-03-20".to_string()]);
    }
}
