//! Error taxonomy
//!
//! The leaf error types are raised by the pure helpers in this crate.
//! [`Error`] gathers them together with the transport error of whatever
//! bus the driver runs on.

use core::fmt;

/// A field value outside its documented inclusive range
///
/// Raised before any bus access for that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeError {
    /// Field name (e.g. "seconds")
    pub field: &'static str,
    /// Rejected value
    pub value: u8,
}

/// A packed BCD byte with a nibble above 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidBcd(pub u8);

/// An EEPROM address at or beyond the device capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressOutOfRange {
    /// Rejected address
    pub address: u16,
    /// Device capacity in bytes
    pub capacity: u32,
}

/// Driver error, generic over the transport error `E`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Field value outside its valid range; nothing was sent for that field
    Range {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: u8,
    },
    /// Bus transport failure, passed through unmodified
    Transport(E),
    /// Register held a byte that is not valid packed BCD
    InvalidBcd(u8),
    /// Decoded fields do not form a calendar date/time
    InvalidDateTime,
    /// EEPROM address beyond the configured capacity
    AddressOutOfRange(u16),
}

impl<E> From<RangeError> for Error<E> {
    fn from(e: RangeError) -> Self {
        Error::Range {
            field: e.field,
            value: e.value,
        }
    }
}

impl<E> From<InvalidBcd> for Error<E> {
    fn from(e: InvalidBcd) -> Self {
        Error::InvalidBcd(e.0)
    }
}

impl<E> From<AddressOutOfRange> for Error<E> {
    fn from(e: AddressOutOfRange) -> Self {
        Error::AddressOutOfRange(e.address)
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is out of range: {}", self.field, self.value)
    }
}

impl fmt::Display for InvalidBcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid BCD byte {:#04x}", self.0)
    }
}

impl fmt::Display for AddressOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "address {} beyond EEPROM capacity {}",
            self.address, self.capacity
        )
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range { field, value } => write!(f, "{field} is out of range: {value}"),
            Error::Transport(e) => write!(f, "bus transport error: {e:?}"),
            Error::InvalidBcd(b) => write!(f, "invalid BCD byte {b:#04x}"),
            Error::InvalidDateTime => f.write_str("clock registers hold an invalid date/time"),
            Error::AddressOutOfRange(a) => write!(f, "EEPROM address {a} out of range"),
        }
    }
}
