use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{CdevPin, Delay, SpidevDevice};
use std::error::Error;

use eve_dl::coprocessor::CoproCommand;
use eve_dl::options::{DlSwap, Primitive};
use eve_dl::{register, Eve, Generation};

use embedded_graphics_core::{geometry::Point, pixelcolor::Rgb888};

fn main() -> Result<(), Box<dyn Error>> {
    // Raspi SPI0.0
    // MISO: 9
    // MOSI: 10
    // SCK: 11
    // CS: 8
    let mut spi = SpidevDevice::open("/dev/spidev0.0")?;
    let spi_options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(8_000_000)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&spi_options)?;

    let mut chip = Chip::new("/dev/gpiochip0")?;
    // PD: 25
    let pd_output = chip.get_line(25)?;
    let pd_output_handle = pd_output.request(LineRequestFlags::OUTPUT, 1, "eve-demo")?;
    let pd = CdevPin::new(pd_output_handle)?;

    let generation = std::env::args()
        .nth(1)
        .and_then(|tier| tier.parse::<u8>().ok())
        .and_then(|tier| Generation::try_from(tier).ok())
        .unwrap_or_default();

    let interface = eve_dl::interface::EveSPIInterface::new(spi, pd, Delay);
    let mut eve = Eve::new(interface, generation);
    eve.init().unwrap();

    println!(
        "{} booted, {} frames rendered so far",
        generation,
        eve.read_register(register::FRAMES).unwrap()
    );

    // Direct display list: red rectangle on a dark background
    let dl = *eve.encoder();
    eve.dl_start();
    eve.dl(dl.clear_color_rgb888(Rgb888::new(0x10, 0x10, 0x30))).unwrap();
    eve.dl(dl.clear(true, true, true)).unwrap();
    eve.dl(dl.color_rgb(255, 0, 0)).unwrap();
    eve.dl(dl.begin(Primitive::Rects)).unwrap();
    eve.dl(dl.vertex2f_point(Point::new(10 * 16, 10 * 16))).unwrap();
    eve.dl(dl.vertex2f_point(Point::new(100 * 16, 100 * 16))).unwrap();
    eve.dl(dl.end()).unwrap();
    eve.dl(dl.display()).unwrap();
    eve.dl_swap(DlSwap::Frame).unwrap();

    // Same frame through the coprocessor
    eve.cmd(CoproCommand::DlStart).unwrap();
    eve.cmd_dl(dl.clear(true, true, true)).unwrap();
    eve.cmd_dl(dl.color_rgb(0, 255, 0)).unwrap();
    eve.cmd_dl(dl.begin(Primitive::Points)).unwrap();
    eve.cmd_dl(dl.point_size(40 * 16)).unwrap();
    eve.cmd_dl(dl.vertex2f(120 * 16, 120 * 16)).unwrap();
    eve.cmd_dl(dl.end()).unwrap();
    eve.cmd_dl(dl.display()).unwrap();
    eve.cmd(CoproCommand::Swap).unwrap();

    while eve.cmd_busy().unwrap() {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    eve.sleep().unwrap();

    Ok(())
}
