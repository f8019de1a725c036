//! DS3231 time field table
//!
//! Each timekeeping register holds one field as packed BCD. Some
//! registers carry extra bits that are not part of the value and must be
//! masked off before decoding:
//!
//! ```text
//! reg  field         range   mask
//! 0x00 seconds       0-59    0x7F  (bit 7: oscillator flag)
//! 0x01 minutes       0-59    0xFF
//! 0x02 hours         0-23    0x3F  (bits 7-6: 12/24h mode)
//! 0x03 weekday       1-7     0xFF
//! 0x04 day of month  1-31    0xFF
//! 0x05 month         1-12    0xFF
//! 0x06 year          0-99    0xFF
//! ```

use crate::bcd;
use crate::error::{InvalidBcd, RangeError};

/// Oscillator flag in the seconds register; stripped on read, never written
pub const OSCILLATOR_FLAG: u8 = 0x80;

/// Value the hours register can report straight after power-on
pub const HOURS_POWER_ON_SENTINEL: u8 = 0x64;

/// What [`HOURS_POWER_ON_SENTINEL`] is replaced with before masking
///
/// After the hours mask this decodes as midnight.
pub const HOURS_SENTINEL_REPLACEMENT: u8 = 0x40;

/// One timekeeping register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeField {
    /// Field name, used in range errors
    pub name: &'static str,
    /// Register offset on the clock device
    pub register: u8,
    /// Smallest valid value
    pub min: u8,
    /// Largest valid value
    pub max: u8,
    /// Bits that carry the BCD value
    pub mask: u8,
    /// Raw byte replaced with another before masking, if any
    pub sentinel: Option<(u8, u8)>,
}

impl TimeField {
    const fn new(name: &'static str, register: u8, min: u8, max: u8, mask: u8) -> Self {
        Self {
            name,
            register,
            min,
            max,
            mask,
            sentinel: None,
        }
    }

    /// Check whether a value is inside this field's range
    pub const fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validate a value and encode it for the register
    ///
    /// # Errors
    /// Returns [`RangeError`] if the value is outside the field's range.
    pub const fn encode(&self, value: u8) -> Result<u8, RangeError> {
        if !self.contains(value) {
            return Err(RangeError {
                field: self.name,
                value,
            });
        }
        Ok(bcd::encode(value) & self.mask)
    }

    /// Decode a raw register byte
    ///
    /// Applies the sentinel remap, then the mask, then BCD decoding.
    ///
    /// # Errors
    /// Returns [`InvalidBcd`] if the masked byte is not valid BCD.
    pub const fn decode(&self, raw: u8) -> Result<u8, InvalidBcd> {
        let raw = match self.sentinel {
            Some((from, to)) if raw == from => to,
            _ => raw,
        };
        bcd::decode(raw & self.mask)
    }
}

/// Seconds register (0x00)
pub const SECONDS: TimeField = TimeField::new("seconds", 0x00, 0, 59, !OSCILLATOR_FLAG);

/// Minutes register (0x01)
pub const MINUTES: TimeField = TimeField::new("minutes", 0x01, 0, 59, 0xFF);

/// Hours register (0x02), 24-hour mode only
pub const HOURS: TimeField = TimeField {
    sentinel: Some((HOURS_POWER_ON_SENTINEL, HOURS_SENTINEL_REPLACEMENT)),
    ..TimeField::new("hours", 0x02, 0, 23, 0x3F)
};

/// Day-of-week register (0x03)
pub const WEEKDAY: TimeField = TimeField::new("weekday", 0x03, 1, 7, 0xFF);

/// Day-of-month register (0x04)
pub const DAY: TimeField = TimeField::new("day", 0x04, 1, 31, 0xFF);

/// Month register (0x05)
pub const MONTH: TimeField = TimeField::new("month", 0x05, 1, 12, 0xFF);

/// Year-within-century register (0x06)
pub const YEAR: TimeField = TimeField::new("year", 0x06, 0, 99, 0xFF);

/// Order in which a batched write commits fields
pub const WRITE_ORDER: [TimeField; 7] = [SECONDS, MINUTES, HOURS, YEAR, MONTH, DAY, WEEKDAY];

/// A partial set of field values for a batched write
///
/// Absent fields are left untouched on the chip.
///
/// ```ignore
/// let values = FieldValues::new().hours(12).minutes(30);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldValues {
    /// Seconds (0-59)
    pub seconds: Option<u8>,
    /// Minutes (0-59)
    pub minutes: Option<u8>,
    /// Hours, 24-hour (0-23)
    pub hours: Option<u8>,
    /// Day of week (1-7)
    pub weekday: Option<u8>,
    /// Day of month (1-31)
    pub day: Option<u8>,
    /// Month (1-12)
    pub month: Option<u8>,
    /// Year within the century (0-99)
    pub year: Option<u8>,
}

impl FieldValues {
    /// Empty set; writing it touches nothing
    pub const fn new() -> Self {
        Self {
            seconds: None,
            minutes: None,
            hours: None,
            weekday: None,
            day: None,
            month: None,
            year: None,
        }
    }

    /// Set seconds (0-59)
    pub const fn seconds(mut self, value: u8) -> Self {
        self.seconds = Some(value);
        self
    }

    /// Set minutes (0-59)
    pub const fn minutes(mut self, value: u8) -> Self {
        self.minutes = Some(value);
        self
    }

    /// Set hours, 24-hour (0-23)
    pub const fn hours(mut self, value: u8) -> Self {
        self.hours = Some(value);
        self
    }

    /// Set day of week (1-7)
    pub const fn weekday(mut self, value: u8) -> Self {
        self.weekday = Some(value);
        self
    }

    /// Set day of month (1-31)
    pub const fn day(mut self, value: u8) -> Self {
        self.day = Some(value);
        self
    }

    /// Set month (1-12)
    pub const fn month(mut self, value: u8) -> Self {
        self.month = Some(value);
        self
    }

    /// Set year within the century (0-99)
    pub const fn year(mut self, value: u8) -> Self {
        self.year = Some(value);
        self
    }

    /// Present fields paired with their register, in [`WRITE_ORDER`]
    pub fn in_write_order(&self) -> impl Iterator<Item = (TimeField, u8)> {
        let values = [
            self.seconds,
            self.minutes,
            self.hours,
            self.year,
            self.month,
            self.day,
            self.weekday,
        ];
        WRITE_ORDER
            .into_iter()
            .zip(values)
            .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_strips_oscillator_flag() {
        assert_eq!(SECONDS.decode(0x80), Ok(0));
        assert_eq!(SECONDS.decode(0x80 | 0x45), Ok(45));
    }

    #[test]
    fn test_hours_power_on_sentinel() {
        // 0x64 would mask to 0x24 without the remap
        assert_eq!(HOURS.decode(HOURS_POWER_ON_SENTINEL), Ok(0));
        assert_eq!(HOURS.decode(0x23), Ok(23));
        // 12/24h mode bits are masked away
        assert_eq!(HOURS.decode(0x40 | 0x15), Ok(15));
    }

    #[test]
    fn test_encode_validates_range() {
        assert_eq!(SECONDS.encode(59), Ok(0x59));
        assert_eq!(
            SECONDS.encode(60),
            Err(RangeError {
                field: "seconds",
                value: 60
            })
        );
        assert!(WEEKDAY.encode(0).is_err());
        assert!(WEEKDAY.encode(7).is_ok());
        assert!(DAY.encode(0).is_err());
        assert!(DAY.encode(32).is_err());
        assert!(MONTH.encode(13).is_err());
        assert_eq!(YEAR.encode(99), Ok(0x99));
        assert!(HOURS.encode(24).is_err());
    }

    #[test]
    fn test_seconds_encode_never_sets_oscillator_flag() {
        for s in 0..=59 {
            let byte = SECONDS.encode(s).unwrap();
            assert_eq!(byte & OSCILLATOR_FLAG, 0);
        }
    }

    #[test]
    fn test_register_offsets() {
        let registers: [u8; 7] = WRITE_ORDER.map(|f| f.register);
        assert_eq!(registers, [0x00, 0x01, 0x02, 0x06, 0x05, 0x04, 0x03]);
    }

    #[test]
    fn test_write_order_skips_absent() {
        let values = FieldValues::new().weekday(3).seconds(10).year(24);
        let mut iter = values.in_write_order();

        assert_eq!(iter.next(), Some((SECONDS, 10)));
        assert_eq!(iter.next(), Some((YEAR, 24)));
        assert_eq!(iter.next(), Some((WEEKDAY, 3)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(FieldValues::new().in_write_order().count(), 0);
        assert_eq!(FieldValues::new(), FieldValues::default());
    }
}
