use core::fmt;

use crate::InvalidField;

/// Fields of the AD7490 control register, in the order they appear in a command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// SEQ: together with SHADOW, selects how channels are sequenced.
    Sequencer,
    /// PM1:PM0: `0b11` normal, `0b10` full shutdown, `0b01` auto shutdown, `0b00` auto standby.
    PowerMode,
    /// SHADOW: together with SEQ, selects how channels are sequenced.
    Shadow,
    /// WEAK/TRI: `1` keeps DOUT weakly driven between conversions, `0` three-states it.
    Weak,
    /// RANGE: `1` for 0 V to REFIN, `0` for 0 V to 2 × REFIN.
    Range,
    /// CODING: `1` for straight binary output, `0` for two's complement.
    Coding,
}

impl Field {
    /// Every field, most significant first.
    pub const ALL: [Self; 6] = [
        Self::Sequencer,
        Self::PowerMode,
        Self::Shadow,
        Self::Weak,
        Self::Range,
        Self::Coding,
    ];

    /// Largest value the field accepts.
    pub const fn max(self) -> u8 {
        match self {
            Self::PowerMode => 0b11,
            _ => 0b1,
        }
    }

    /// Position of the field's least significant bit in a command word.
    pub(crate) const fn shift(self) -> u16 {
        match self {
            Self::Sequencer => 14,
            Self::PowerMode => 8,
            Self::Shadow => 7,
            Self::Weak => 6,
            Self::Range => 5,
            Self::Coding => 4,
        }
    }

    /// Register mnemonic of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequencer => "SEQ",
            Self::PowerMode => "PM",
            Self::Shadow => "SHADOW",
            Self::Weak => "WEAK/TRI",
            Self::Range => "RANGE",
            Self::Coding => "CODING",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the six AD7490 control register fields.
///
/// Every field always holds a legal value: writes are validated before anything changes.
/// The default is the configuration the driver starts from: normal power, single channel
/// conversions, weakly driven DOUT, 0 V to REFIN range and straight binary coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRegister {
    sequencer: u8,
    power_mode: u8,
    shadow: u8,
    weak: u8,
    range: u8,
    coding: u8,
}

impl Default for ControlRegister {
    fn default() -> Self {
        Self {
            sequencer: 0,
            power_mode: 0b11,
            shadow: 0,
            weak: 1,
            range: 1,
            coding: 1,
        }
    }
}

impl ControlRegister {
    /// Builds a register from raw field values, failing on the first one out of range.
    pub fn new(
        sequencer: u8,
        power_mode: u8,
        shadow: u8,
        weak: u8,
        range: u8,
        coding: u8,
    ) -> Result<Self, InvalidField> {
        let mut control = Self::default();

        let values = [sequencer, power_mode, shadow, weak, range, coding];

        for (field, value) in Field::ALL.into_iter().zip(values) {
            control.set(field, value)?;
        }

        Ok(control)
    }

    /// Current value of `field`.
    pub const fn get(&self, field: Field) -> u8 {
        match field {
            Field::Sequencer => self.sequencer,
            Field::PowerMode => self.power_mode,
            Field::Shadow => self.shadow,
            Field::Weak => self.weak,
            Field::Range => self.range,
            Field::Coding => self.coding,
        }
    }

    /// Writes `value` into `field`. Out of range values leave the register untouched.
    pub fn set(&mut self, field: Field, value: u8) -> Result<(), InvalidField> {
        if value > field.max() {
            return Err(InvalidField { field, value });
        }

        *self.slot_mut(field) = value;

        Ok(())
    }

    #[allow(missing_docs)]
    pub const fn sequencer(&self) -> u8 {
        self.sequencer
    }

    #[allow(missing_docs)]
    pub const fn power_mode(&self) -> u8 {
        self.power_mode
    }

    #[allow(missing_docs)]
    pub const fn shadow(&self) -> u8 {
        self.shadow
    }

    #[allow(missing_docs)]
    pub const fn weak(&self) -> u8 {
        self.weak
    }

    #[allow(missing_docs)]
    pub const fn range(&self) -> u8 {
        self.range
    }

    #[allow(missing_docs)]
    pub const fn coding(&self) -> u8 {
        self.coding
    }

    /// Field bits as they sit in a command word (bits 14 and 9 to 4).
    pub(crate) fn bits(&self) -> u16 {
        Field::ALL
            .into_iter()
            .fold(0, |bits, field| bits | u16::from(self.get(field)) << field.shift())
    }

    /// Extracts the fields from a command word, ignoring every other bit.
    pub(crate) fn from_bits(word: u16) -> Self {
        let mut control = Self::default();

        for field in Field::ALL {
            *control.slot_mut(field) = (word >> field.shift()) as u8 & field.max();
        }

        control
    }

    fn slot_mut(&mut self, field: Field) -> &mut u8 {
        match field {
            Field::Sequencer => &mut self.sequencer,
            Field::PowerMode => &mut self.power_mode,
            Field::Shadow => &mut self.shadow,
            Field::Weak => &mut self.weak,
            Field::Range => &mut self.range,
            Field::Coding => &mut self.coding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn defaults_match_power_on_configuration() {
        let control = ControlRegister::default();

        assert_eq!(ControlRegister::new(0, 3, 0, 1, 1, 1), Ok(control));
        assert_eq!(control.power_mode(), 3);
        assert_eq!(control.weak(), 1);
        assert_eq!(control.bits(), 0b0000_0011_0111_0000);
    }

    #[test]
    fn rejected_write_leaves_every_field_alone() {
        let mut control = ControlRegister::default();

        for field in Field::ALL {
            let value = field.max() + 1;
            assert_eq!(control.set(field, value), Err(InvalidField { field, value }));
            assert_eq!(control, ControlRegister::default());
        }
    }

    #[test]
    fn accepted_write_changes_one_field() {
        let mut control = ControlRegister::default();

        control.set(Field::PowerMode, 0b01).unwrap();

        for field in Field::ALL {
            let expected = match field {
                Field::PowerMode => 0b01,
                other => ControlRegister::default().get(other),
            };
            assert_eq!(control.get(field), expected, "{field}");
        }
    }

    #[test]
    fn new_reports_first_bad_field() {
        assert_eq!(
            ControlRegister::new(0, 4, 2, 1, 1, 1),
            Err(InvalidField {
                field: Field::PowerMode,
                value: 4
            })
        );
    }

    #[test]
    fn from_bits_ignores_other_bits() {
        let control = ControlRegister::new(1, 2, 1, 0, 0, 1).unwrap();

        let noisy = control.bits() | 0b1011_1100_0000_1111;

        assert_eq!(ControlRegister::from_bits(noisy), control);
    }

    #[test]
    fn invalid_field_message() {
        let error = InvalidField {
            field: Field::Range,
            value: 7,
        };

        assert_eq!(error.to_string(), "7 is out of range for the RANGE field (max 1)");
    }
}
