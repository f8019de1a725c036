//! Hardware driver implementations
//!
//! This crate drives the common DS3231 clock module over any
//! [`horologe_hal::I2cBus`]:
//!
//! - DS3231 timekeeping registers (read, partial and full writes)
//! - DS3231 die temperature
//! - AT24C32 EEPROM byte access on the same module

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod ds3231;

#[cfg(test)]
mod mock;

pub use ds3231::{Ds3231, EEPROM_SETTLE_MS};
