//! Command and response words.
//!
//! A command word, MSB first:
//!
//! | 15    | 14  | 13..10  | 9..8    | 7      | 6        | 5     | 4      | 3..0 |
//! |-------|-----|---------|---------|--------|----------|-------|--------|------|
//! | WRITE | SEQ | ADD3..0 | PM1..0  | SHADOW | WEAK/TRI | RANGE | CODING | 0    |
//!
//! A response word carries the channel address of the conversion in bits 15..12 and the
//! 12-bit sample in bits 11..0.

use crate::{Channel, ControlRegister};

/// WRITE bit. Only words with this bit set update the control register.
pub const WRITE: u16 = 1 << 15;

/// Word sent to clock out a conversion without touching the control register.
pub const NOOP: u16 = 0x0000;

/// All-ones word clocked in twice during reset.
pub const DUMMY: u16 = 0xFFFF;

/// Bits of a response word holding the sample.
pub const SAMPLE_MASK: u16 = 0x0FFF;

const ADDRESS_SHIFT: u16 = 10;
const ECHO_SHIFT: u16 = 12;

/// Builds the command selecting `ch` with the fields of `control`.
pub fn encode(ch: Channel, control: &ControlRegister) -> u16 {
    WRITE | u16::from(ch as u8) << ADDRESS_SHIFT | control.bits()
}

/// Splits a command into its channel and control register fields.
/// Returns [`None`] when the WRITE bit is clear, since such a word carries no configuration.
pub fn decode(word: u16) -> Option<(Channel, ControlRegister)> {
    if word & WRITE == 0 {
        return None;
    }

    Some((
        Channel::from_bits(word >> ADDRESS_SHIFT),
        ControlRegister::from_bits(word),
    ))
}

/// Builds the response the device clocks out for a conversion of `ch`.
pub fn response(ch: Channel, sample: u16) -> u16 {
    u16::from(ch as u8) << ECHO_SHIFT | sample & SAMPLE_MASK
}

/// The 12-bit sample carried by a response.
pub fn sample(response: u16) -> u16 {
    response & SAMPLE_MASK
}

/// The channel address echoed in a response.
pub fn echo(response: u16) -> Channel {
    Channel::from_bits(response >> ECHO_SHIFT)
}
