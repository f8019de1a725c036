//! DS3231 die temperature

use embedded_hal::delay::DelayNs;
use horologe_core::temperature::{TEMP_LSB_REGISTER, TEMP_MSB_REGISTER};
use horologe_core::{Error, Temperature};
use horologe_hal::I2cBus;

use super::Ds3231;

impl<B: I2cBus, D: DelayNs> Ds3231<B, D> {
    /// Read the on-chip temperature sensor
    ///
    /// Sub-zero readings are not sign-extended; see [`Temperature`].
    pub fn read_temperature(&mut self) -> Result<Temperature, Error<B::Error>> {
        let msb = self.read_register(TEMP_MSB_REGISTER)?;
        let lsb = self.read_register(TEMP_LSB_REGISTER)?;
        Ok(Temperature::from_registers(msb, lsb))
    }
}
