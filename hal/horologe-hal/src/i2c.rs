//! I2C bus abstractions
//!
//! Provides the transport trait the drivers talk through, plus an adapter
//! for any `embedded-hal` 1.0 I2C master.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. The register helpers are built on the three
/// primitives and rarely need overriding.
///
/// Every call blocks until the transfer completes or fails. Errors are
/// handed back unchanged; retry policy belongs to the caller.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Write a single register
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write(address, &[register, value])
    }

    /// Read a single register
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8];
        self.write_read(address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    /// Read one byte at the device's current internal pointer
    fn read_raw(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8];
        self.read(address, &mut buf)?;
        Ok(buf[0])
    }

    /// Write a block of bytes in one transfer
    fn write_block(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write(address, bytes)
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(e: ErrorKind) -> Self {
        match e {
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

impl From<BusError> for ErrorKind {
    fn from(e: BusError) -> Self {
        match e {
            BusError::Bus => ErrorKind::Bus,
            BusError::ArbitrationLost => ErrorKind::ArbitrationLoss,
            BusError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
            BusError::Overrun => ErrorKind::Overrun,
            BusError::Other => ErrorKind::Other,
        }
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BusError::Bus => "bus error",
            BusError::ArbitrationLost => "arbitration lost",
            BusError::Nack => "no acknowledge",
            BusError::Overrun => "overrun",
            BusError::Other => "i2c error",
        };
        f.write_str(msg)
    }
}

/// Adapter from an `embedded-hal` I2C master to [`I2cBus`]
///
/// Errors are classified into [`BusError`] through
/// [`embedded_hal::i2c::Error::kind`].
pub struct EmbeddedHalBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> EmbeddedHalBus<I2C> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the wrapped I2C master
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> I2cBus for EmbeddedHalBus<I2C> {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        I2c::write(&mut self.i2c, address, data).map_err(|e| BusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        I2c::read(&mut self.i2c, address, buf).map_err(|e| BusError::from(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError> {
        I2c::write_read(&mut self.i2c, address, write_data, read_buf)
            .map_err(|e| BusError::from(e.kind()))
    }
}
