//! DS3231 clock module driver
//!
//! One driver instance owns the bus, a delay provider and the module
//! configuration for its whole lifetime. It does no locking; if the bus
//! is shared with other devices, hand in a `&mut` to it and serialize
//! access outside the driver.
//!
//! ```ignore
//! let bus = EmbeddedHalBus::new(i2c);
//! let mut rtc = Ds3231::new(bus, delay, DriverConfig::default());
//!
//! let now = rtc.read_all()?;
//! rtc.write_all(&FieldValues::new().hours(12).minutes(0))?;
//! rtc.write_eeprom_byte(0, 0xA5)?;
//! ```
//!
//! The driver is split by concern:
//! - `clock` - timekeeping registers
//! - `temperature` - die temperature
//! - `eeprom` - AT24C32 on the same module

mod clock;
mod eeprom;
mod temperature;

pub use eeprom::EEPROM_SETTLE_MS;

use embedded_hal::delay::DelayNs;
use horologe_core::{DriverConfig, Error};
use horologe_hal::I2cBus;

/// DS3231 + AT24C32 clock module
pub struct Ds3231<B, D> {
    bus: B,
    delay: D,
    config: DriverConfig,
}

impl<B: I2cBus, D: DelayNs> Ds3231<B, D> {
    /// Connect to the module by taking ownership of the bus and delay
    pub fn new(bus: B, delay: D, config: DriverConfig) -> Self {
        Self { bus, delay, config }
    }

    /// Disconnect to release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Get the configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Read one clock register
    fn read_register(&mut self, register: u8) -> Result<u8, Error<B::Error>> {
        self.bus
            .read_register(self.config.clock_address, register)
            .map_err(Error::Transport)
    }

    /// Write one clock register
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ds3231 write reg {=u8:#x} = {=u8:#x}", register, value);

        self.bus
            .write_register(self.config.clock_address, register, value)
            .map_err(Error::Transport)
    }
}
