use core::fmt;

use crate::InvalidChannel;

/// Number of analog inputs on the AD7490.
pub const CHANNELS: usize = 16;

/// Channel list for AD7490
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Channel {
    CH0 = 0,
    CH1 = 1,
    CH2 = 2,
    CH3 = 3,
    CH4 = 4,
    CH5 = 5,
    CH6 = 6,
    CH7 = 7,
    CH8 = 8,
    CH9 = 9,
    CH10 = 10,
    CH11 = 11,
    CH12 = 12,
    CH13 = 13,
    CH14 = 14,
    CH15 = 15,
}

impl Channel {
    const ALL: [Self; CHANNELS] = [
        Self::CH0,
        Self::CH1,
        Self::CH2,
        Self::CH3,
        Self::CH4,
        Self::CH5,
        Self::CH6,
        Self::CH7,
        Self::CH8,
        Self::CH9,
        Self::CH10,
        Self::CH11,
        Self::CH12,
        Self::CH13,
        Self::CH14,
        Self::CH15,
    ];

    /// Iterate over all channels.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Channel addressed by the low four bits of `bits`.
    pub(crate) const fn from_bits(bits: u16) -> Self {
        Self::ALL[(bits & 0b1111) as usize]
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidChannel(value))
    }
}

impl From<Channel> for u8 {
    fn from(ch: Channel) -> Self {
        ch as u8
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn channels_are_ordered_by_address() {
        for (index, ch) in Channel::all().enumerate() {
            assert_eq!(ch as usize, index);
        }
        assert_eq!(Channel::all().count(), CHANNELS);
    }

    #[test]
    fn try_from_rejects_missing_channels() {
        assert_eq!(Channel::try_from(15), Ok(Channel::CH15));
        assert_eq!(Channel::try_from(16), Err(InvalidChannel(16)));
        assert_eq!(Channel::try_from(u8::MAX), Err(InvalidChannel(u8::MAX)));
    }

    #[test]
    fn display() {
        assert_eq!(Channel::CH11.to_string(), "CH11");
    }
}
