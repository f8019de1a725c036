//! DS3231 timekeeping registers

use chrono::{NaiveDateTime, TimeZone};
use embedded_hal::delay::DelayNs;
use horologe_core::fields::{self, TimeField};
use horologe_core::{DateTime, Error, FieldValues};
use horologe_hal::I2cBus;

use super::Ds3231;

// Time getters
impl<B: I2cBus, D: DelayNs> Ds3231<B, D> {
    /// Read, mask and decode one field
    fn read_field(&mut self, field: TimeField) -> Result<u8, Error<B::Error>> {
        let raw = self.read_register(field.register)?;
        field.decode(raw).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ds3231 {=str} register holds invalid BCD {=u8:#x}", field.name, raw);
            e.into()
        })
    }

    /// Get seconds (0-59), ignoring the oscillator flag
    pub fn read_seconds(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::SECONDS)
    }

    /// Get minutes (0-59)
    pub fn read_minutes(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::MINUTES)
    }

    /// Get hours (0-23)
    pub fn read_hours(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::HOURS)
    }

    /// Get day of week (1-7)
    pub fn read_weekday(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::WEEKDAY)
    }

    /// Get day of month (1-31)
    pub fn read_day(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::DAY)
    }

    /// Get month (1-12)
    pub fn read_month(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::MONTH)
    }

    /// Get year within the century (0-99)
    pub fn read_year(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_field(fields::YEAR)
    }

    /// Get the complete date and time
    ///
    /// Issues one register read per field. If any read fails the whole
    /// call fails; no partial value is returned. The century comes from
    /// the driver configuration.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] on a bus failure, or
    /// [`Error::InvalidBcd`] if a register does not hold valid BCD.
    pub fn read_all(&mut self) -> Result<DateTime, Error<B::Error>> {
        Ok(DateTime {
            seconds: self.read_seconds()?,
            minutes: self.read_minutes()?,
            hours: self.read_hours()?,
            weekday: self.read_weekday()?,
            day: self.read_day()?,
            month: self.read_month()?,
            year: self.read_year()?,
            century: self.config.century,
        })
    }

    /// Get the date and time as a calendar value
    ///
    /// # Errors
    /// As [`Self::read_all`], plus [`Error::InvalidDateTime`] if the
    /// registers do not name a real date (e.g. February 30th).
    pub fn read_datetime(&mut self) -> Result<NaiveDateTime, Error<B::Error>> {
        self.read_all()?.to_naive().ok_or(Error::InvalidDateTime)
    }

    /// Get the date and time tagged with a timezone
    ///
    /// The chip has no notion of timezones; the registers are taken as
    /// local time in `tz` and no conversion happens.
    ///
    /// # Errors
    /// As [`Self::read_datetime`]. A local time that is ambiguous or
    /// skipped in `tz` also gives [`Error::InvalidDateTime`].
    pub fn read_datetime_in<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
    ) -> Result<chrono::DateTime<Tz>, Error<B::Error>> {
        let naive = self.read_datetime()?;
        tz.from_local_datetime(&naive)
            .single()
            .ok_or(Error::InvalidDateTime)
    }
}

// Time setters
impl<B: I2cBus, D: DelayNs> Ds3231<B, D> {
    /// Write any subset of the time fields
    ///
    /// Fields are handled one at a time in a fixed order: seconds,
    /// minutes, hours, year, month, day, weekday. Each present field is
    /// range-checked, encoded and written before the next is looked at.
    ///
    /// **This is not atomic.** If a field fails validation, nothing is
    /// sent for it, but every field before it in the order above has
    /// already been written and stays written. After an error the chip
    /// may hold a mix of old and new values; read it back to find out.
    ///
    /// # Errors
    /// Returns [`Error::Range`] for the first out-of-range field, or
    /// [`Error::Transport`] on a bus failure.
    pub fn write_all(&mut self, values: &FieldValues) -> Result<(), Error<B::Error>> {
        for (field, value) in values.in_write_order() {
            let bcd = field.encode(value).map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("ds3231 {=str} out of range: {=u8}", e.field, e.value);
                e
            })?;
            self.write_register(field.register, bcd)?;
        }
        Ok(())
    }

    /// Set all seven fields from a calendar value
    ///
    /// The weekday is written as the ISO day of week (Monday = 1) and the
    /// year as `year % 100`. Same partial-write behaviour as
    /// [`Self::write_all`].
    pub fn write_datetime(&mut self, dt: &NaiveDateTime) -> Result<(), Error<B::Error>> {
        self.write_all(&FieldValues::from(dt))
    }

    /// Set the clock from the host's local time
    #[cfg(feature = "std")]
    pub fn write_now(&mut self) -> Result<(), Error<B::Error>> {
        let now = chrono::Local::now().naive_local();

        #[cfg(feature = "defmt")]
        defmt::debug!("ds3231 set from host clock");

        self.write_datetime(&now)
    }
}
