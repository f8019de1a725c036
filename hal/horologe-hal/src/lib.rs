//! Horologe Hardware Abstraction Layer
//!
//! This crate defines the bus transport seam used by the clock and
//! EEPROM drivers. Anything that can move bytes over I2C can drive the
//! module, whether it is a chip HAL, a Linux `/dev/i2c-*` handle or a
//! test double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  horologe-drivers (DS3231 + AT24C32)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  horologe-hal (this crate - I2cBus)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ EmbeddedHalBus│       │  custom impl  │
//! │ (embedded-hal)│       │  / test mock  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations and register helpers

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key items at crate root for convenience
pub use i2c::{BusError, EmbeddedHalBus, I2cBus};
