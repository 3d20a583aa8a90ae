//! Widget configuration.
//!
//! [`PickerConfig`] collects everything an embedding decides up front: the
//! selection mode, locale, selectable bounds, and the form field name. It is
//! a plain builder; nothing is validated until a value actually has to be
//! interpreted, which keeps attribute-style setup (`min_attr`, `max_attr`)
//! and typed setup interchangeable.

use chrono::{Local, NaiveDate};
use tracing::warn;
use uc_datepicker_core::logging::targets;

use crate::codec::{self, ParseDateError};
use crate::controller::DatePicker;
use crate::locale::LocaleTag;
use crate::selection::{Bounds, SelectionMode};

/// Errors raised while interpreting configuration attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A `min` attribute did not parse as a date.
    #[error("invalid min date: {0}")]
    InvalidMin(#[source] ParseDateError),

    /// A `max` attribute did not parse as a date.
    #[error("invalid max date: {0}")]
    InvalidMax(#[source] ParseDateError),
}

/// Builder-style configuration for a [`DatePicker`].
///
/// # Example
///
/// ```
/// use uc_datepicker::config::PickerConfig;
/// use uc_datepicker::selection::SelectionMode;
///
/// let picker = PickerConfig::new()
///     .with_mode(SelectionMode::Range)
///     .with_lang_attr("en")
///     .with_min_attr("2024-1-1")
///     .unwrap()
///     .with_name("stay")
///     .build();
/// assert_eq!(picker.name(), "stay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    mode: SelectionMode,
    lang: Option<LocaleTag>,
    bounds: Bounds,
    name: String,
    value: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            lang: None,
            bounds: Bounds::unbounded(),
            name: "uc-datepicker".to_string(),
            value: None,
        }
    }
}

impl PickerConfig {
    /// Default configuration: single mode, detected locale, no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the locale explicitly.
    pub fn with_lang(mut self, lang: LocaleTag) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Set the locale from an attribute string (`"zh-TW"`, `"en"`, `"ja"`).
    ///
    /// Unknown values fall back to the default locale, never fail.
    pub fn with_lang_attr(self, attr: &str) -> Self {
        self.with_lang(LocaleTag::from_attr(attr))
    }

    /// Set the minimum selectable date.
    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Set the maximum selectable date.
    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Set the minimum selectable date from attribute text.
    ///
    /// Loose `Y-M-D` input is normalized before validation.
    pub fn with_min_attr(self, attr: &str) -> Result<Self, ConfigError> {
        let min = codec::validate(&codec::normalize(attr)).map_err(ConfigError::InvalidMin)?;
        Ok(self.with_min(min))
    }

    /// Set the maximum selectable date from attribute text.
    pub fn with_max_attr(self, attr: &str) -> Result<Self, ConfigError> {
        let max = codec::validate(&codec::normalize(attr)).map_err(ConfigError::InvalidMax)?;
        Ok(self.with_max(max))
    }

    /// Set the form field name the value is submitted under.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Pre-seed the selection from value text (the `set_value` form:
    /// canonical date text, or `"{start}~{end}"` in range mode).
    ///
    /// Applied at build time; text that does not parse is dropped with a
    /// warning, leaving the selection empty.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The configured selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The configured locale, if set explicitly.
    pub fn lang(&self) -> Option<LocaleTag> {
        self.lang
    }

    /// The configured bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The configured form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a picker anchored to the system's current date.
    ///
    /// If no locale was set explicitly, the system locale is detected.
    pub fn build(self) -> DatePicker {
        let today = Local::now().date_naive();
        self.build_with_today(today)
    }

    /// Build a picker anchored to an explicit `today`.
    ///
    /// Mainly for tests and embeddings with their own clock.
    pub fn build_with_today(self, today: NaiveDate) -> DatePicker {
        let lang = self.lang.unwrap_or_else(LocaleTag::detect);
        let mut picker = DatePicker::new(self.mode, lang, self.bounds, self.name, today);
        if let Some(value) = self.value {
            if let Err(err) = picker.set_value(&value) {
                warn!(target: targets::CONTROLLER, value = %value, %err, "dropping unparseable initial value");
            }
        }
        picker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = PickerConfig::new();
        assert_eq!(config.mode(), SelectionMode::Single);
        assert_eq!(config.lang(), None);
        assert_eq!(config.bounds(), Bounds::unbounded());
        assert_eq!(config.name(), "uc-datepicker");
    }

    #[test]
    fn test_min_max_attrs_normalize_loose_input() {
        let config = PickerConfig::new()
            .with_min_attr("2024-1-1")
            .unwrap()
            .with_max_attr("2024-12-5")
            .unwrap();
        assert_eq!(config.bounds().min, Some(date(2024, 1, 1)));
        assert_eq!(config.bounds().max, Some(date(2024, 12, 5)));
    }

    #[test]
    fn test_invalid_bound_attrs_error() {
        assert!(matches!(
            PickerConfig::new().with_min_attr("not a date"),
            Err(ConfigError::InvalidMin(_))
        ));
        assert!(matches!(
            PickerConfig::new().with_max_attr("2024-02-31"),
            Err(ConfigError::InvalidMax(_))
        ));
    }

    #[test]
    fn test_with_value_seeds_selection() {
        let picker = PickerConfig::new()
            .with_lang(LocaleTag::En)
            .with_value("2024-3-1")
            .build_with_today(date(2024, 3, 15));
        assert_eq!(picker.form_value(), "2024-03-01");

        let picker = PickerConfig::new()
            .with_mode(SelectionMode::Range)
            .with_lang(LocaleTag::En)
            .with_value("2024-03-01~2024-03-09")
            .build_with_today(date(2024, 3, 15));
        assert_eq!(picker.form_value(), "2024-03-01~2024-03-09");

        // An unparseable value is dropped, not a construction failure.
        let picker = PickerConfig::new()
            .with_lang(LocaleTag::En)
            .with_value("whenever")
            .build_with_today(date(2024, 3, 15));
        assert_eq!(picker.form_value(), "");
    }

    #[test]
    fn test_build_with_today_seeds_panels() {
        let picker = PickerConfig::new()
            .with_mode(SelectionMode::Range)
            .with_lang(LocaleTag::En)
            .build_with_today(date(2024, 3, 15));
        assert_eq!(picker.mode(), SelectionMode::Range);
        assert_eq!(picker.lang(), LocaleTag::En);
        assert_eq!(picker.today(), date(2024, 3, 15));
    }
}
