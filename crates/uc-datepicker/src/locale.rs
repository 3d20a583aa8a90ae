//! Locale tags and display-string tables.
//!
//! The widget ships three built-in locales (Traditional Chinese, English,
//! Japanese). Locale resolution is fail-soft everywhere: an unknown tag falls
//! back to the default rather than erroring, so a misconfigured embedding
//! still renders.

use tracing::{debug, warn};
use uc_datepicker_core::logging::targets;

/// One of the built-in UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleTag {
    /// Traditional Chinese (`zh-TW`). The default.
    #[default]
    ZhTw,
    /// English (`en`).
    En,
    /// Japanese (`ja`).
    Ja,
}

impl LocaleTag {
    /// Resolve an explicit locale attribute.
    ///
    /// Matching is exact (`"zh-TW"`, `"en"`, `"ja"`); anything else falls
    /// back to the default with a warning.
    pub fn from_attr(attr: &str) -> Self {
        match attr {
            "zh-TW" => Self::ZhTw,
            "en" => Self::En,
            "ja" => Self::Ja,
            other => {
                warn!(
                    target: targets::LOCALE,
                    locale = other,
                    "unknown locale attribute, falling back to zh-TW"
                );
                Self::default()
            }
        }
    }

    /// Detect the locale from the system environment.
    pub fn detect() -> Self {
        match sys_locale::get_locale() {
            Some(tag) => {
                let detected = Self::detect_from(&tag);
                debug!(target: targets::LOCALE, system = %tag, resolved = ?detected, "detected system locale");
                detected
            }
            None => {
                debug!(target: targets::LOCALE, "no system locale, using zh-TW");
                Self::default()
            }
        }
    }

    /// Map a system locale string (e.g. `"en-US"`, `"ja-JP"`) to a built-in
    /// locale by language substring. Unrecognized languages fall back to the
    /// default.
    pub fn detect_from(system: &str) -> Self {
        let lower = system.to_ascii_lowercase();
        if lower.contains("ja") {
            Self::Ja
        } else if lower.contains("en") {
            Self::En
        } else {
            Self::ZhTw
        }
    }

    /// The IETF-style tag text for this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhTw => "zh-TW",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// The display strings for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        match self {
            Self::ZhTw => &ZH_TW,
            Self::En => &EN,
            Self::Ja => &JA,
        }
    }
}

/// Display strings for one locale.
#[derive(Debug)]
pub struct LocaleStrings {
    /// Suffix appended to the year label (`"2024年"` vs plain `"2024"`).
    pub year_suffix: &'static str,
    /// Month names, January first.
    pub months: [&'static str; 12],
    /// Weekday abbreviations, Sunday first.
    pub weekdays: [&'static str; 7],
    /// Label of the jump-to-today button.
    pub today: &'static str,
}

impl LocaleStrings {
    /// The year label for a given year, with the locale suffix applied.
    pub fn year_label(&self, year: i32) -> String {
        format!("{year}{}", self.year_suffix)
    }

    /// The month name for a 1-based month. Out-of-range months yield `""`.
    pub fn month_name(&self, month: u32) -> &'static str {
        self.months
            .get(month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }
}

static ZH_TW: LocaleStrings = LocaleStrings {
    year_suffix: "年",
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays: ["日", "一", "二", "三", "四", "五", "六"],
    today: "今天",
};

static EN: LocaleStrings = LocaleStrings {
    year_suffix: "",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    today: "Today",
};

static JA: LocaleStrings = LocaleStrings {
    year_suffix: "年",
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays: ["日", "月", "火", "水", "木", "金", "土"],
    today: "今日",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr_exact_match() {
        assert_eq!(LocaleTag::from_attr("zh-TW"), LocaleTag::ZhTw);
        assert_eq!(LocaleTag::from_attr("en"), LocaleTag::En);
        assert_eq!(LocaleTag::from_attr("ja"), LocaleTag::Ja);
    }

    #[test]
    fn test_from_attr_unknown_falls_back() {
        assert_eq!(LocaleTag::from_attr("fr"), LocaleTag::ZhTw);
        assert_eq!(LocaleTag::from_attr("EN"), LocaleTag::ZhTw);
        assert_eq!(LocaleTag::from_attr(""), LocaleTag::ZhTw);
    }

    #[test]
    fn test_detect_from_system_tags() {
        assert_eq!(LocaleTag::detect_from("en-US"), LocaleTag::En);
        assert_eq!(LocaleTag::detect_from("en"), LocaleTag::En);
        assert_eq!(LocaleTag::detect_from("ja-JP"), LocaleTag::Ja);
        assert_eq!(LocaleTag::detect_from("zh-TW"), LocaleTag::ZhTw);
        assert_eq!(LocaleTag::detect_from("de-DE"), LocaleTag::ZhTw);
    }

    #[test]
    fn test_year_label_suffix() {
        assert_eq!(LocaleTag::ZhTw.strings().year_label(2024), "2024年");
        assert_eq!(LocaleTag::En.strings().year_label(2024), "2024");
        assert_eq!(LocaleTag::Ja.strings().year_label(2024), "2024年");
    }

    #[test]
    fn test_month_name_one_based() {
        assert_eq!(LocaleTag::En.strings().month_name(1), "Jan");
        assert_eq!(LocaleTag::En.strings().month_name(12), "Dec");
        assert_eq!(LocaleTag::ZhTw.strings().month_name(3), "3月");
        assert_eq!(LocaleTag::En.strings().month_name(0), "");
        assert_eq!(LocaleTag::En.strings().month_name(13), "");
    }

    #[test]
    fn test_tables_complete() {
        for tag in [LocaleTag::ZhTw, LocaleTag::En, LocaleTag::Ja] {
            let strings = tag.strings();
            assert!(strings.months.iter().all(|m| !m.is_empty()));
            assert!(strings.weekdays.iter().all(|w| !w.is_empty()));
            assert!(!strings.today.is_empty());
        }
    }
}
