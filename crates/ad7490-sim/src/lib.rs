//! Wire-level model of an AD7490, so the driver can run without hardware.
//!
//! The model keeps the chip's pipeline: each 16-bit transfer clocks out the conversion of the
//! channel latched by the transfer before it. Sequencer modes are not modelled; the latched
//! channel is converted every time.

use ad7490::command::{self, DUMMY};
use ad7490::{Channel, ControlRegister, Field, CHANNELS};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};
use log::trace;

/// Ways a transaction can fall outside what an AD7490 understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The transaction was not a single in-place transfer.
    UnsupportedOperation,
    /// The transfer was not exactly 16 bits long.
    FrameLength(usize),
}

impl embedded_hal::spi::Error for SimError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Simulated AD7490
pub struct SimulatedAd7490 {
    source: Box<dyn FnMut(Channel) -> u16>,
    selected: Channel,
    control: ControlRegister,
    commands: Vec<u16>,
}

impl SimulatedAd7490 {
    /// Creates a device whose inputs hold fixed 12-bit codes, indexed by channel.
    pub fn new(inputs: [u16; CHANNELS]) -> Self {
        Self::with_source(move |ch| inputs[ch as usize])
    }

    /// Creates a device that asks `source` for a straight binary code on every conversion.
    /// Codes are truncated to 12 bits.
    pub fn with_source(source: impl FnMut(Channel) -> u16 + 'static) -> Self {
        Self {
            source: Box::new(source),
            selected: Channel::CH0,
            control: ControlRegister::default(),
            commands: Vec::new(),
        }
    }

    /// Channel whose conversion the next transfer will clock out.
    pub fn selected(&self) -> Channel {
        self.selected
    }

    /// Control register as last written by a command.
    pub fn control(&self) -> &ControlRegister {
        &self.control
    }

    /// Every word received so far, in order.
    pub fn commands(&self) -> &[u16] {
        &self.commands
    }

    fn convert(&mut self) -> u16 {
        let code = (self.source)(self.selected) & command::SAMPLE_MASK;

        // CODING = 0 selects two's complement around mid-scale.
        let code = if self.control.get(Field::Coding) == 0 {
            code ^ 0x0800
        } else {
            code
        };

        command::response(self.selected, code)
    }

    fn clock(&mut self, word: u16) -> u16 {
        let response = self.convert();

        self.commands.push(word);

        if word != DUMMY {
            if let Some((ch, control)) = command::decode(word) {
                self.selected = ch;
                self.control = control;
            }
        }

        trace!("received {word:#06x}, sent {response:#06x}");

        response
    }
}

impl ErrorType for SimulatedAd7490 {
    type Error = SimError;
}

impl SpiDevice for SimulatedAd7490 {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let [Operation::TransferInPlace(words)] = operations else {
            return Err(SimError::UnsupportedOperation);
        };

        if words.len() != 2 {
            return Err(SimError::FrameLength(words.len() * 8));
        }

        let response = self.clock(u16::from_be_bytes([words[0], words[1]]));

        words.copy_from_slice(&response.to_be_bytes());

        Ok(())
    }
}

/// Delay provider that only keeps count of the time it was asked to wait.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelay {
    elapsed_ns: u64,
}

impl SimulatedDelay {
    /// Total time waited, in nanoseconds.
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }
}

impl DelayNs for SimulatedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}
