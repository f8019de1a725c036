//! Test doubles for the clock module
//!
//! [`MockBus`] simulates both devices on one bus: the DS3231 as a flat
//! register file and the AT24C32 as a pointer-addressed byte array.
//! Every write is recorded so tests can check exactly what went out.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use horologe_core::address::AT24C32_CAPACITY;
use horologe_core::config::{AT24C32_ADDRESS, DS3231_ADDRESS};
use horologe_hal::I2cBus;

/// Error returned by the mock bus (stands in for a NACK)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub struct MockBus {
    /// DS3231 registers 0x00-0x12
    pub clock: [u8; 0x13],
    pub eeprom: [u8; AT24C32_CAPACITY as usize],
    eeprom_address: u8,
    eeprom_pointer: usize,
    /// (register, value) for every clock register written
    pub clock_writes: Vec<(u8, u8), 32>,
    /// Raw EEPROM write transfers, pointer bytes included
    pub eeprom_writes: Vec<Vec<u8, 3>, 32>,
    /// Fail the n-th read transfer (0-based)
    pub fail_read_at: Option<usize>,
    /// Fail every write transfer
    pub fail_writes: bool,
    reads: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            clock: [0; 0x13],
            eeprom: [0xFF; AT24C32_CAPACITY as usize],
            eeprom_address: AT24C32_ADDRESS,
            eeprom_pointer: 0,
            clock_writes: Vec::new(),
            eeprom_writes: Vec::new(),
            fail_read_at: None,
            fail_writes: false,
            reads: 0,
        }
    }

    pub fn with_eeprom_address(mut self, address: u8) -> Self {
        self.eeprom_address = address;
        self
    }

    fn count_read(&mut self) -> Result<(), MockError> {
        let n = self.reads;
        self.reads += 1;
        if self.fail_read_at == Some(n) {
            return Err(MockError);
        }
        Ok(())
    }
}

impl I2cBus for MockBus {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
        if self.fail_writes {
            return Err(MockError);
        }

        if address == DS3231_ADDRESS {
            let (&register, values) = data.split_first().ok_or(MockError)?;
            for (i, &value) in values.iter().enumerate() {
                let register = register + i as u8;
                *self.clock.get_mut(register as usize).ok_or(MockError)? = value;
                self.clock_writes
                    .push((register, value))
                    .map_err(|_| MockError)?;
            }
            Ok(())
        } else if address == self.eeprom_address {
            if data.len() < 2 {
                return Err(MockError);
            }
            let mut record = Vec::new();
            record.extend_from_slice(data).map_err(|_| MockError)?;
            self.eeprom_writes.push(record).map_err(|_| MockError)?;

            self.eeprom_pointer = u16::from_be_bytes([data[0], data[1]]) as usize;
            for &value in &data[2..] {
                self.eeprom[self.eeprom_pointer] = value;
                self.eeprom_pointer = (self.eeprom_pointer + 1) % self.eeprom.len();
            }
            Ok(())
        } else {
            Err(MockError)
        }
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), MockError> {
        self.count_read()?;

        if address != self.eeprom_address {
            return Err(MockError);
        }
        for b in buf.iter_mut() {
            *b = self.eeprom[self.eeprom_pointer];
            self.eeprom_pointer = (self.eeprom_pointer + 1) % self.eeprom.len();
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), MockError> {
        self.count_read()?;

        if address != DS3231_ADDRESS {
            return Err(MockError);
        }
        let start = *write_data.first().ok_or(MockError)? as usize;
        let registers = self
            .clock
            .get(start..start + read_buf.len())
            .ok_or(MockError)?;
        read_buf.copy_from_slice(registers);
        Ok(())
    }
}

/// Delay that only records how long it was asked to wait
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_ms(&self) -> u32 {
        (self.total_ns / 1_000_000) as u32
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
