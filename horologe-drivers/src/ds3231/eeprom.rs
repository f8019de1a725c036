//! AT24C32 EEPROM on the clock module
//!
//! Every transfer starts with a two-byte address pointer, high byte
//! first. Reads set the pointer, then fetch one byte at it. Writes send
//! pointer and data in one transfer.
//!
//! After a write the EEPROM runs an internal write cycle and ignores the
//! bus until it finishes. The driver blocks for [`EEPROM_SETTLE_MS`]
//! after each write so the next access is not lost.

use embedded_hal::delay::DelayNs;
use horologe_core::{Error, LinearAddress};
use horologe_hal::I2cBus;

use super::Ds3231;

/// Delay after each EEPROM write before the device accepts another transfer
pub const EEPROM_SETTLE_MS: u32 = 200;

impl<B: I2cBus, D: DelayNs> Ds3231<B, D> {
    fn linear_address(&self, address: u16) -> Result<LinearAddress, Error<B::Error>> {
        LinearAddress::checked(address, self.config.eeprom_capacity).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("at24c32 address {=u16} out of range", address);
            e.into()
        })
    }

    /// Point the EEPROM's internal address at `address`
    ///
    /// # Errors
    /// Returns [`Error::AddressOutOfRange`] without touching the bus if
    /// `address` is past the configured capacity.
    pub fn set_eeprom_address(&mut self, address: u16) -> Result<(), Error<B::Error>> {
        let pointer = self.linear_address(address)?.pointer();
        self.bus
            .write_block(self.config.eeprom_address, &pointer)
            .map_err(Error::Transport)
    }

    /// Read one byte
    pub fn read_eeprom_byte(&mut self, address: u16) -> Result<u8, Error<B::Error>> {
        self.set_eeprom_address(address)?;
        self.bus
            .read_raw(self.config.eeprom_address)
            .map_err(Error::Transport)
    }

    /// Write one byte, then block for [`EEPROM_SETTLE_MS`]
    ///
    /// The delay is part of the write: when this returns, the EEPROM is
    /// ready for the next transfer.
    pub fn write_eeprom_byte(&mut self, address: u16, value: u8) -> Result<(), Error<B::Error>> {
        let [high, low] = self.linear_address(address)?.pointer();

        #[cfg(feature = "defmt")]
        defmt::debug!("at24c32 write {=u16} = {=u8}", address, value);

        self.bus
            .write_block(self.config.eeprom_address, &[high, low, value])
            .map_err(Error::Transport)?;
        self.delay.delay_ms(EEPROM_SETTLE_MS);
        Ok(())
    }
}
