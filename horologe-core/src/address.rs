//! AT24C32 linear addressing
//!
//! The EEPROM takes a two-byte address pointer, high byte first, at the
//! start of every transfer. A linear address is split into
//! `address / 256` and `address % 256`.

use crate::error::AddressOutOfRange;

/// AT24C32 capacity in bytes (32 Kbit)
pub const AT24C32_CAPACITY: u32 = 4096;

/// Largest capacity a two-byte pointer can address (64 KiB)
pub const MAX_CAPACITY: u32 = 1 << 16;

/// Flat byte offset into the EEPROM
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinearAddress(pub u16);

impl LinearAddress {
    /// Check the address against a device capacity in bytes
    pub const fn checked(address: u16, capacity: u32) -> Result<Self, AddressOutOfRange> {
        if address as u32 >= capacity {
            return Err(AddressOutOfRange { address, capacity });
        }
        Ok(Self(address))
    }

    /// High pointer byte
    pub const fn high(self) -> u8 {
        (self.0 / 256) as u8
    }

    /// Low pointer byte
    pub const fn low(self) -> u8 {
        (self.0 % 256) as u8
    }

    /// Pointer bytes as sent on the bus
    pub const fn pointer(self) -> [u8; 2] {
        [self.high(), self.low()]
    }
}

impl From<u16> for LinearAddress {
    fn from(address: u16) -> Self {
        Self(address)
    }
}
