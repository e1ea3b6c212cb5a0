//! Sampling loop shared by the desktop and Raspberry Pi binaries.

use std::thread;
use std::time::Duration;

use ad7490::Ad7490;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;
use log::{debug, info};

pub mod cli;
pub mod report;

use cli::SampleArgs;

/// Prints sweeps over the requested channels until `args.sweeps` is reached.
///
/// One read is thrown away first so the pipeline holds a requested channel before anything is
/// printed.
pub fn run<SPI, D>(adc: &mut Ad7490<SPI, D>, args: &SampleArgs) -> anyhow::Result<()>
where
    SPI: SpiDevice,
    SPI::Error: Send + Sync + 'static,
    D: DelayNs,
{
    let channels = args.channels();

    if let Some(&first) = channels.first() {
        let discarded = adc.read(first)?;
        debug!("discarded priming read of {first}: {discarded}");
    }

    info!("sampling {} channel(s)", channels.len());

    let mut sweep = 0;

    loop {
        let readings = channels
            .iter()
            .map(|&ch| adc.read(ch).map(|value| (ch, value)))
            .collect::<Result<Vec<_>, _>>()?;

        println!("{}\n", report::format_sweep(&readings));

        sweep += 1;

        if args.sweeps != 0 && sweep >= args.sweeps {
            return Ok(());
        }

        thread::sleep(Duration::from_millis(args.interval_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ad7490::command::NOOP;
    use ad7490::{Channel, ControlRegister};
    use ad7490_sim::{SimulatedAd7490, SimulatedDelay};
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        sample: SampleArgs,
    }

    #[test]
    fn primes_then_sweeps() {
        let cli = Cli::try_parse_from(["test", "-c", "2,5", "-n", "2", "-i", "0"]).unwrap();

        let mut sim = SimulatedAd7490::new([100; 16]);

        let mut adc =
            Ad7490::begin(&mut sim, SimulatedDelay::default(), ControlRegister::default()).unwrap();

        run(&mut adc, &cli.sample).unwrap();

        drop(adc);

        let control = ControlRegister::default();
        let command = |ch| ad7490::command::encode(ch, &control);

        // Reset, priming read, then two sweeps of two reads.
        assert_eq!(sim.commands().len(), 3 + 2 + 2 * 4);
        assert_eq!(&sim.commands()[3..5], &[command(Channel::CH2), NOOP]);
        assert_eq!(
            &sim.commands()[5..9],
            &[command(Channel::CH2), NOOP, command(Channel::CH5), NOOP]
        );
    }
}
