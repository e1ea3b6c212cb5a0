use std::fmt::Write;

use ad7490::Channel;

/// Formats one sweep as `CH<n>: <value>|` entries on a single line.
pub fn format_sweep(readings: &[(Channel, u16)]) -> String {
    readings
        .iter()
        .fold(String::new(), |mut line, (ch, value)| {
            let _ = write!(line, "{ch}: {value}|");
            line
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_line() {
        let line = format_sweep(&[(Channel::CH0, 0), (Channel::CH1, 4095), (Channel::CH15, 12)]);

        assert_eq!(line, "CH0: 0|CH1: 4095|CH15: 12|");
    }

    #[test]
    fn empty_sweep() {
        assert_eq!(format_sweep(&[]), "");
    }
}
