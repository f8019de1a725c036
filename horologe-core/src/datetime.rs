//! Composite date/time as stored by the clock
//!
//! The chip keeps a two-digit year and no century. The century base is
//! supplied by the caller and only used to rebuild a four-digit year.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::fields::FieldValues;

/// Century assumed when none is configured (years 2000-2099)
pub const DEFAULT_CENTURY: u8 = 21;

/// All seven clock fields, decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Year within the century (0-99)
    pub year: u8,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week (1-7); the chip does not care which day is 1
    pub weekday: u8,
    /// Hours, 24-hour (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
    /// Century base, 21 for the 2000s
    pub century: u8,
}

impl DateTime {
    /// Replace the century base
    pub const fn with_century(mut self, century: u8) -> Self {
        self.century = century;
        self
    }

    /// Four-digit year, `(century - 1) * 100 + year`
    pub const fn full_year(&self) -> i32 {
        (self.century as i32 - 1) * 100 + self.year as i32
    }

    /// Convert to a calendar value
    ///
    /// Returns `None` if the fields do not name a real date and time
    /// (e.g. February 30th). The weekday is not checked.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.full_year(), self.month as u32, self.day as u32)?.and_hms_opt(
            self.hours as u32,
            self.minutes as u32,
            self.seconds as u32,
        )
    }

    /// Split a calendar value into clock fields
    ///
    /// The weekday is the ISO day of week (Monday = 1).
    ///
    /// The century base saturates to `0..=255`, so [`Self::full_year`]
    /// gives back the calendar year only for years -100 to 25499. The
    /// two-digit year is exact for any input.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        let year = dt.year();
        let century = (year.div_euclid(100) + 1).clamp(0, u8::MAX as i32);
        Self {
            year: year.rem_euclid(100) as u8,
            month: dt.month() as u8,
            day: dt.day() as u8,
            weekday: dt.weekday().number_from_monday() as u8,
            hours: dt.hour() as u8,
            minutes: dt.minute() as u8,
            seconds: dt.second() as u8,
            century: century as u8,
        }
    }
}

/// `YY-MM-DDTHH:MM:SS`
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

impl From<&DateTime> for FieldValues {
    fn from(dt: &DateTime) -> Self {
        FieldValues::new()
            .seconds(dt.seconds)
            .minutes(dt.minutes)
            .hours(dt.hours)
            .year(dt.year)
            .month(dt.month)
            .day(dt.day)
            .weekday(dt.weekday)
    }
}

impl From<&NaiveDateTime> for FieldValues {
    fn from(dt: &NaiveDateTime) -> Self {
        FieldValues::from(&DateTime::from_naive(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime {
        DateTime {
            year: 24,
            month: 2,
            day: 29,
            weekday: 4,
            hours: 13,
            minutes: 5,
            seconds: 9,
            century: DEFAULT_CENTURY,
        }
    }

    #[test]
    fn test_full_year_uses_century() {
        assert_eq!(sample().full_year(), 2024);
        assert_eq!(sample().with_century(20).full_year(), 1924);
    }

    #[test]
    fn test_display_short_format() {
        assert_eq!(sample().to_string(), "24-02-29T13:05:09");
    }

    #[test]
    fn test_to_naive() {
        let naive = sample().to_naive().unwrap();
        assert_eq!(naive.year(), 2024);
        assert_eq!(naive.month(), 2);
        assert_eq!(naive.day(), 29);
        assert_eq!(naive.hour(), 13);

        // 2023 is not a leap year
        let bad = DateTime { year: 23, ..sample() };
        assert!(bad.to_naive().is_none());
    }

    #[test]
    fn test_from_naive_iso_weekday() {
        // 2024-02-29 was a Thursday
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap();
        assert_eq!(DateTime::from_naive(&naive), sample());

        // Sunday is 7
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(DateTime::from_naive(&sunday).weekday, 7);
    }

    #[test]
    fn test_field_values_cover_all_fields() {
        let values = FieldValues::from(&sample());
        assert_eq!(values.in_write_order().count(), 7);
        assert_eq!(values.year, Some(24));
        assert_eq!(values.weekday, Some(4));
    }

    #[test]
    fn test_from_naive_century_saturates() {
        let far = NaiveDate::from_ymd_opt(30000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dt = DateTime::from_naive(&far);
        assert_eq!(dt.century, u8::MAX);
        assert_eq!(dt.year, 0);

        let last = NaiveDate::from_ymd_opt(25499, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(DateTime::from_naive(&last).full_year(), 25499);

        let early = NaiveDate::from_ymd_opt(-250, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(DateTime::from_naive(&early).century, 0);
    }
}
