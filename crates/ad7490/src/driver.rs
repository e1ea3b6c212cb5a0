use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use log::{debug, warn};

use crate::command::{self, DUMMY, NOOP};
use crate::{exchange, Channel, ControlRegister, Error, Field, CHANNELS, RESET_SETTLE_MS};

/// AD7490 driver
///
/// Owns the SPI device for its whole lifetime, so the two transfers of a read can never be
/// interleaved with other traffic to the chip.
pub struct Ad7490<SPI, D> {
    spi: SPI,
    delay: D,
    control: ControlRegister,
}

impl<SPI: SpiDevice, D: DelayNs> Ad7490<SPI, D> {
    /// Creates a new driver from an SPI device and a delay provider without touching the bus.
    /// Please ensure the SPI device is in [`MODE`](crate::MODE), aka (0, 0), MSB first.
    ///
    /// The chip is in an unknown state until [`reset`](Self::reset) has run;
    /// [`begin`](Self::begin) does both.
    pub fn new(spi: SPI, delay: D, control: ControlRegister) -> Self {
        Self {
            spi,
            delay,
            control,
        }
    }

    /// Creates a new driver and resets the chip into `control`.
    ///
    /// The pipeline is primed with channel 0: the first conversion clocked out afterwards
    /// belongs to channel 0, whatever [`read`](Self::read) asks for.
    pub fn begin(spi: SPI, delay: D, control: ControlRegister) -> Result<Self, Error<SPI::Error>> {
        let mut adc = Self::new(spi, delay, control);

        adc.reset()?;

        Ok(adc)
    }

    /// Runs the power-up sequence: two all-ones dummy words with a settle delay after each,
    /// then a channel 0 command carrying the current control register.
    pub fn reset(&mut self) -> Result<(), Error<SPI::Error>> {
        debug!("resetting AD7490 into {:?}", self.control);

        for _ in 0..2 {
            self.exchange(DUMMY)?;
            self.delay.delay_ms(RESET_SETTLE_MS);
        }

        self.exchange(command::encode(Channel::CH0, &self.control))?;

        Ok(())
    }

    /// Read a channel and return the 12 bit value as a [`u16`].
    ///
    /// Always costs exactly two transfers: the command for `ch`, whose response belongs to the
    /// previous command and is discarded, then a no-op word whose response carries the
    /// conversion of `ch`.
    ///
    /// Straight after [`reset`](Self::reset), call this at least twice and discard the first
    /// result before relying on channel-accurate data.
    pub fn read(&mut self, ch: Channel) -> Result<u16, Error<SPI::Error>> {
        self.exchange(command::encode(ch, &self.control))?;

        let response = self.exchange(NOOP)?;

        Ok(command::sample(response))
    }

    /// Read every channel in order, indexed by channel address.
    pub fn read_all(&mut self) -> Result<[u16; CHANNELS], Error<SPI::Error>> {
        let mut samples = [0; CHANNELS];

        for ch in Channel::all() {
            samples[ch as usize] = self.read(ch)?;
        }

        Ok(samples)
    }

    /// Current control register.
    pub fn control(&self) -> &ControlRegister {
        &self.control
    }

    /// Sets the Sequencer (SEQ) bit. See [`set_field`](Self::set_field).
    pub fn set_sequencer(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::Sequencer, value)
    }

    /// Sets the Power Mode (PM1:PM0) bits. See [`set_field`](Self::set_field).
    pub fn set_power_mode(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::PowerMode, value)
    }

    /// Sets the SHADOW bit. See [`set_field`](Self::set_field).
    pub fn set_shadow(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::Shadow, value)
    }

    /// Sets the WEAK/TRI bit. See [`set_field`](Self::set_field).
    pub fn set_weak(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::Weak, value)
    }

    /// Sets the RANGE bit. See [`set_field`](Self::set_field).
    pub fn set_range(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::Range, value)
    }

    /// Sets the CODING bit. See [`set_field`](Self::set_field).
    pub fn set_coding(&mut self, value: u8) -> Result<(), Error<SPI::Error>> {
        self.set_field(Field::Coding, value)
    }

    /// Writes one control register field and pushes it to the chip with a dummy read of
    /// channel 0, since a command only takes effect on the following transfer.
    ///
    /// A value outside the field's range returns [`Error::InvalidField`] without changing the
    /// register or touching the bus.
    pub fn set_field(&mut self, field: Field, value: u8) -> Result<(), Error<SPI::Error>> {
        if let Err(invalid) = self.control.set(field, value) {
            warn!("rejected control register write: {invalid}");
            return Err(invalid.into());
        }

        debug!("{field} set to {value}");

        self.flush()
    }

    /// Replaces the whole control register and pushes it to the chip with one dummy read.
    pub fn set_control(&mut self, control: ControlRegister) -> Result<(), Error<SPI::Error>> {
        debug!("control register set to {control:?}");

        self.control = control;

        self.flush()
    }

    /// Gives back the SPI device and delay provider.
    pub fn release(self) -> (SPI, D) {
        (self.spi, self.delay)
    }

    fn flush(&mut self) -> Result<(), Error<SPI::Error>> {
        self.read(Channel::CH0).map(drop)
    }

    fn exchange(&mut self, word: u16) -> Result<u16, Error<SPI::Error>> {
        exchange(&mut self.spi, word).map_err(Error::Spi)
    }
}
