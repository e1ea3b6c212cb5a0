//! Samples a simulated AD7490 whose inputs wander around fixed set points.

use ad7490::Ad7490;
use ad7490_sim::{SimulatedAd7490, SimulatedDelay};
use ad7490_tools::cli::SampleArgs;
use clap::Parser;
use funutd::Rnd;
use log::info;

/// Print AD7490 readings from a simulated converter.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    sample: SampleArgs,

    /// Seed for the simulated analog inputs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Peak noise added to each conversion, in codes.
    #[arg(long, default_value_t = 8)]
    noise: u16,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let control = cli.sample.control_register()?;

    let mut rnd = Rnd::from_u64(cli.seed);

    // Set points spread over the 12-bit range, one per channel.
    let set_points: [u16; ad7490::CHANNELS] = core::array::from_fn(|_| (rnd.u64() % 4096) as u16);

    let span = u64::from(cli.noise) * 2 + 1;
    let noise = cli.noise;

    let device = SimulatedAd7490::with_source(move |ch| {
        let jitter = (rnd.u64() % span) as u16;

        set_points[ch as usize]
            .saturating_add(jitter)
            .saturating_sub(noise)
            .min(4095)
    });

    let mut adc = Ad7490::begin(device, SimulatedDelay::default(), control)?;

    info!("simulated AD7490 ready with {control:?}");

    ad7490_tools::run(&mut adc, &cli.sample)
}
