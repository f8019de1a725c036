//! Driver configuration
//!
//! Bus addresses differ between board revisions, so they are part of the
//! configuration rather than hardcoded. With the `serde` feature the
//! struct can be loaded from a host-side file; missing keys fall back to
//! the defaults.
//!
//! The TOML loading test here needs `--features serde`; the drivers
//! crate's tests enable that feature and always load a config.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::AT24C32_CAPACITY;
use crate::datetime::DEFAULT_CENTURY;

/// DS3231 bus address (fixed by the chip)
pub const DS3231_ADDRESS: u8 = 0x68;

/// AT24C32 bus address on current modules
pub const AT24C32_ADDRESS: u8 = 0x57;

/// AT24C32 bus address on older modules
pub const AT24C32_LEGACY_ADDRESS: u8 = 0x56;

/// Clock module configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// 7-bit address of the clock
    pub clock_address: u8,
    /// 7-bit address of the EEPROM
    pub eeprom_address: u8,
    /// Century base for four-digit years (21 = 2000s)
    pub century: u8,
    /// EEPROM size in bytes; addresses at or past this are rejected
    ///
    /// Up to [`crate::address::MAX_CAPACITY`] (64 KiB), where every 16-bit address is valid.
    pub eeprom_capacity: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverConfig {
    /// Current module layout (EEPROM at 0x57)
    pub const fn new() -> Self {
        Self {
            clock_address: DS3231_ADDRESS,
            eeprom_address: AT24C32_ADDRESS,
            century: DEFAULT_CENTURY,
            eeprom_capacity: AT24C32_CAPACITY,
        }
    }

    /// Older module layout (EEPROM at 0x56)
    pub const fn legacy_board() -> Self {
        Self {
            eeprom_address: AT24C32_LEGACY_ADDRESS,
            ..Self::new()
        }
    }

    /// Use a different EEPROM size in bytes
    pub const fn with_eeprom_capacity(mut self, capacity: u32) -> Self {
        self.eeprom_capacity = capacity;
        self
    }

    /// Use a different century base
    pub const fn with_century(mut self, century: u8) -> Self {
        self.century = century;
        self
    }
}
