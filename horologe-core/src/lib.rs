//! Board-agnostic core logic for the DS3231 clock module
//!
//! This crate contains everything that does not need a bus:
//!
//! - Packed BCD codec used by every clock register
//! - Time field table (register offsets, ranges, masks, chip quirks)
//! - Composite date/time and temperature values
//! - EEPROM linear address decomposition
//! - Driver configuration and the error taxonomy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod bcd;
pub mod config;
pub mod datetime;
pub mod error;
pub mod fields;
pub mod temperature;

pub use address::LinearAddress;
pub use config::DriverConfig;
pub use datetime::DateTime;
pub use error::{AddressOutOfRange, Error, InvalidBcd, RangeError};
pub use fields::{FieldValues, TimeField};
pub use temperature::Temperature;
