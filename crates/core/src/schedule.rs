//! Weekday and status labels used by the "airing today" view.
//!
//! Labels are stored verbatim in the `update_day` and `status` columns, so
//! the label set is chosen once per deployment via [`Locale`] and never
//! translated on read.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Weekday};

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Label set used for weekdays and status values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// `Monday` .. `Sunday`, status `watching`.
    #[default]
    En,
    /// `周一` .. `周日`, status `追番中`.
    Zh,
}

impl Locale {
    /// Weekday labels ordered Monday first.
    pub const fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Locale::En => [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            Locale::Zh => ["周一", "周二", "周三", "周四", "周五", "周六", "周日"],
        }
    }

    /// Label stored in `update_day` for the given weekday.
    pub fn weekday_label(self, day: Weekday) -> &'static str {
        self.weekday_labels()[day.num_days_from_monday() as usize]
    }

    /// Status sentinel for titles still being followed.
    ///
    /// This is also the default status for new records.
    pub const fn watching_status(self) -> &'static str {
        match self {
            Locale::En => "watching",
            Locale::Zh => "追番中",
        }
    }

    /// Status label for titles that have finished airing.
    pub const fn completed_status(self) -> &'static str {
        match self {
            Locale::En => "completed",
            Locale::Zh => "已完结",
        }
    }

    /// Status label for titles put on hold.
    pub const fn paused_status(self) -> &'static str {
        match self {
            Locale::En => "paused",
            Locale::Zh => "暂停",
        }
    }

    /// Weekday label for the current local date.
    pub fn today_label(self) -> &'static str {
        self.weekday_label(chrono::Local::now().weekday())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" | "zh-cn" => Ok(Locale::Zh),
            other => Err(format!("Unknown locale '{other}', expected 'en' or 'zh'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_weekday_labels() {
        assert_eq!(Locale::En.weekday_label(Weekday::Mon), "Monday");
        assert_eq!(Locale::En.weekday_label(Weekday::Sun), "Sunday");
    }

    #[test]
    fn chinese_weekday_labels() {
        assert_eq!(Locale::Zh.weekday_label(Weekday::Mon), "周一");
        assert_eq!(Locale::Zh.weekday_label(Weekday::Wed), "周三");
        assert_eq!(Locale::Zh.weekday_label(Weekday::Sun), "周日");
    }

    #[test]
    fn every_weekday_has_a_distinct_label() {
        for locale in [Locale::En, Locale::Zh] {
            let mut labels = locale.weekday_labels().to_vec();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), 7, "{locale} has duplicate labels");
        }
    }

    #[test]
    fn today_label_is_one_of_the_weekday_labels() {
        let today = Locale::En.today_label();
        assert!(Locale::En.weekday_labels().contains(&today));
    }

    #[test]
    fn status_labels_per_locale() {
        assert_eq!(Locale::En.watching_status(), "watching");
        assert_eq!(Locale::En.paused_status(), "paused");
        assert_eq!(Locale::Zh.watching_status(), "追番中");
        assert_eq!(Locale::Zh.completed_status(), "已完结");
    }

    #[test]
    fn parse_locale() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" ZH ".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Zh));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
