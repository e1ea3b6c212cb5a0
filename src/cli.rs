//! Command line options shared by the `main` and `pi` binaries.

use ad7490::{Channel, ControlRegister};
use clap::Args;

/// What to sample, how often, and with which control register.
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Channels to sample, in order. Defaults to all sixteen.
    #[arg(short, long, value_delimiter = ',', value_parser = parse_channel)]
    pub channels: Vec<Channel>,

    /// Milliseconds between sweeps.
    #[arg(short, long, default_value_t = 2000)]
    pub interval_ms: u64,

    /// Number of sweeps to print before exiting, 0 runs forever.
    #[arg(short = 'n', long, default_value_t = 0)]
    pub sweeps: u64,

    /// SEQ bit of the control register.
    #[arg(long, default_value_t = 0)]
    pub seq: u8,

    /// PM1:PM0 bits of the control register.
    #[arg(long, default_value_t = 3)]
    pub pm: u8,

    /// SHADOW bit of the control register.
    #[arg(long, default_value_t = 0)]
    pub shadow: u8,

    /// WEAK/TRI bit of the control register.
    #[arg(long, default_value_t = 1)]
    pub weak: u8,

    /// RANGE bit of the control register.
    #[arg(long, default_value_t = 1)]
    pub range: u8,

    /// CODING bit of the control register.
    #[arg(long, default_value_t = 1)]
    pub coding: u8,
}

impl SampleArgs {
    /// Validated control register built from the field options.
    pub fn control_register(&self) -> Result<ControlRegister, ad7490::InvalidField> {
        ControlRegister::new(
            self.seq,
            self.pm,
            self.shadow,
            self.weak,
            self.range,
            self.coding,
        )
    }

    /// Channels to sample, falling back to all of them.
    pub fn channels(&self) -> Vec<Channel> {
        if self.channels.is_empty() {
            Channel::all().collect()
        } else {
            self.channels.clone()
        }
    }
}

fn parse_channel(arg: &str) -> Result<Channel, String> {
    let address: u8 = arg
        .trim_start_matches(['C', 'H', 'c', 'h'])
        .parse()
        .map_err(|e| format!("{arg:?} is not a channel number: {e}"))?;

    Channel::try_from(address).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        sample: SampleArgs,
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["test"]).unwrap();

        assert_eq!(cli.sample.channels().len(), 16);
        assert_eq!(cli.sample.interval_ms, 2000);
        assert_eq!(cli.sample.sweeps, 0);
        assert_eq!(cli.sample.control_register(), Ok(ControlRegister::default()));
    }

    #[test]
    fn channel_list() {
        let cli = Cli::try_parse_from(["test", "--channels", "3,CH7,ch15"]).unwrap();

        assert_eq!(
            cli.sample.channels(),
            vec![Channel::CH3, Channel::CH7, Channel::CH15]
        );
    }

    #[test]
    fn missing_channel_is_refused() {
        assert!(Cli::try_parse_from(["test", "-c", "16"]).is_err());
        assert!(Cli::try_parse_from(["test", "-c", "left"]).is_err());
    }

    #[test]
    fn out_of_range_field_is_reported() {
        let cli = Cli::try_parse_from(["test", "--pm", "4"]).unwrap();

        let error = cli.sample.control_register().unwrap_err();

        assert_eq!(error.field, ad7490::Field::PowerMode);
        assert_eq!(error.value, 4);
    }
}
