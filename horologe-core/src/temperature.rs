//! DS3231 die temperature
//!
//! The chip reports temperature in two registers: whole degrees in 0x11
//! and quarter degrees in the top two bits of 0x12.
//!
//! The whole-degree byte is read as unsigned. Below 0°C the chip stores
//! a two's complement value, which this decoding does not sign-extend,
//! so sub-zero readings come out as large positive values.

use core::fmt;

/// Whole-degree register
pub const TEMP_MSB_REGISTER: u8 = 0x11;

/// Fractional register; bits 7-6 hold quarter degrees
pub const TEMP_LSB_REGISTER: u8 = 0x12;

/// Temperature reading with 0.25°C resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    whole: u8,
    quarters: u8,
}

impl Temperature {
    /// Build from the raw 0x11 and 0x12 register bytes
    pub const fn from_registers(msb: u8, lsb: u8) -> Self {
        Self {
            whole: msb,
            quarters: lsb >> 6,
        }
    }

    /// Whole degrees Celsius
    pub const fn whole_degrees(&self) -> u8 {
        self.whole
    }

    /// Fractional part in quarter degrees (0-3)
    pub const fn quarters(&self) -> u8 {
        self.quarters
    }

    /// Temperature in 0.01°C units (e.g. 2575 = 25.75°C)
    pub const fn celsius_x100(&self) -> u16 {
        self.whole as u16 * 100 + self.quarters as u16 * 25
    }

    /// Temperature in degrees Celsius
    pub fn celsius(&self) -> f32 {
        self.whole as f32 + self.quarters as f32 * 0.25
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}°C", self.whole, self.quarters as u16 * 25)
    }
}
