//! Provides a driver for an Analog Devices AD7490 16-channel, 12-bit ADC via the `embedded-hal` ecosystem.
//!
//! The AD7490 is pipelined: the conversion clocked out during a transfer belongs to the command
//! sent in the *previous* transfer. [`Ad7490::read`] hides this by sending the real command and
//! then a no-op word, returning the response to the second. The very first exchange after
//! [`Ad7490::reset`] carries the channel 0 conversion, so read at least twice (discarding the first
//! result) when channel-accurate data is needed right after reset.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

use embedded_hal::spi::{Mode, SpiDevice, MODE_0};
use log::trace;

mod channel;
pub mod command;
mod control;
mod driver;
mod error;

pub use channel::{Channel, CHANNELS};
pub use control::{ControlRegister, Field};
pub use driver::Ad7490;
pub use error::{Error, InvalidChannel, InvalidField};

/// Default SCLK frequency. The AD7490 is specified up to 20 MHz.
pub const DEFAULT_CLOCK_HZ: u32 = 10_000_000;

/// SPI mode expected by the AD7490, with words shifted most significant bit first.
pub const MODE: Mode = MODE_0;

/// Settle time after each all-ones dummy word during reset.
pub const RESET_SETTLE_MS: u32 = 10;

/// Internal method for a single 16-bit exchange with an AD7490.
/// Chip-select framing is left to the [`SpiDevice`].
pub(crate) fn exchange<SPI: SpiDevice>(spi: &mut SPI, command: u16) -> Result<u16, SPI::Error> {
    let mut buffer = command.to_be_bytes();

    spi.transfer_in_place(&mut buffer)?;

    let response = u16::from_be_bytes(buffer);

    trace!("sent {command:#06x}, received {response:#06x}");

    Ok(response)
}
