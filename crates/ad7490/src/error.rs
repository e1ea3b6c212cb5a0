use crate::Field;

/// Errors returned by the [`Ad7490`](crate::Ad7490) driver.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<E> {
    /// The SPI device failed. The transport error is passed through untouched.
    #[error("SPI transfer failed: {0:?}")]
    Spi(E),
    /// A control register write was rejected. Nothing was changed and nothing was sent.
    #[error(transparent)]
    InvalidField(#[from] InvalidField),
}

/// A value outside the legal range of a control register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{value} is out of range for the {field} field (max {max})", max = .field.max())]
pub struct InvalidField {
    /// Field the value was meant for.
    pub field: Field,
    /// Rejected value.
    pub value: u8,
}

/// A channel address the AD7490 does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("channel {0} does not exist, the AD7490 has channels 0 to 15")]
pub struct InvalidChannel(pub u8);
