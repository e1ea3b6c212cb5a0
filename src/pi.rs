//! Samples an AD7490 wired to a Raspberry Pi SPI bus, with chip-select on a GPIO line.

use std::cell::RefCell;

use ad7490::Ad7490;
use ad7490_tools::cli::SampleArgs;
use clap::{Parser, ValueEnum};
use embedded_hal_bus::spi::RefCellDevice;
use log::info;
use rppal::gpio::Gpio;
use rppal::hal::Delay;
use rppal::spi::{BitOrder, Bus, Mode, SlaveSelect, Spi};

/// Print AD7490 readings from a Raspberry Pi.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    sample: SampleArgs,

    /// SPI bus the AD7490 is wired to.
    #[arg(long, value_enum, default_value_t = SpiBus::Spi0)]
    bus: SpiBus,

    /// Hardware slave select line claimed alongside the bus.
    #[arg(long, value_enum, default_value_t = Ss::Ss0)]
    slave_select: Ss,

    /// BCM GPIO driving the AD7490's chip-select.
    #[arg(long, default_value_t = 24)]
    cs_gpio: u8,

    /// SCLK frequency in Hz.
    #[arg(long, default_value_t = ad7490::DEFAULT_CLOCK_HZ)]
    clock_hz: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpiBus {
    Spi0,
    Spi1,
    Spi2,
    Spi3,
    Spi4,
    Spi5,
    Spi6,
}

impl From<SpiBus> for Bus {
    fn from(bus: SpiBus) -> Self {
        match bus {
            SpiBus::Spi0 => Bus::Spi0,
            SpiBus::Spi1 => Bus::Spi1,
            SpiBus::Spi2 => Bus::Spi2,
            SpiBus::Spi3 => Bus::Spi3,
            SpiBus::Spi4 => Bus::Spi4,
            SpiBus::Spi5 => Bus::Spi5,
            SpiBus::Spi6 => Bus::Spi6,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ss {
    Ss0,
    Ss1,
    Ss2,
}

impl From<Ss> for SlaveSelect {
    fn from(ss: Ss) -> Self {
        match ss {
            Ss::Ss0 => SlaveSelect::Ss0,
            Ss::Ss1 => SlaveSelect::Ss1,
            Ss::Ss2 => SlaveSelect::Ss2,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let control = cli.sample.control_register()?;

    let gpio = Gpio::new()?;

    // The AD7490 only speaks mode 0.
    let spi = Spi::new(
        cli.bus.into(),
        cli.slave_select.into(),
        cli.clock_hz,
        Mode::Mode0,
    )?;

    spi.set_bit_order(BitOrder::MsbFirst)?;

    let spi = RefCell::new(spi);

    let device = RefCellDevice::new_no_delay(&spi, gpio.get(cli.cs_gpio)?.into_output_high());

    let mut adc = Ad7490::begin(device, Delay::new(), control)?;

    info!(
        "AD7490 ready on {:?} at {} Hz, chip-select on GPIO {}",
        cli.bus, cli.clock_hz, cli.cs_gpio
    );

    ad7490_tools::run(&mut adc, &cli.sample)
}
