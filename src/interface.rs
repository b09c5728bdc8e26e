//! Contains the controller interface

use embedded_hal::{
    delay::*,
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};

/// Interface Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A error in the spi driver
    SpiError,
    /// A error in the gpio driver
    GPIOError,
}

/// Trait to describe the interface with the controller
/// The chips are reachable over SPI and QSPI, this crate only drives single SPI
pub trait EveInterface {
    /// send a three byte host command
    fn host_command(&mut self, cmd: u8, param: u8) -> Result<(), Error>;

    /// write bytes starting at a 22 bit memory address
    fn write_memory(&mut self, addr: u32, data: &[u8]) -> Result<(), Error>;

    /// read bytes starting at a 22 bit memory address
    fn read_memory(&mut self, addr: u32, buf: &mut [u8]) -> Result<(), Error>;

    /// toggle the power down pin to reset the chip
    fn reset(&mut self) -> Result<(), Error>;

    /// wait
    fn delay(&mut self, duration: core::time::Duration) -> Result<(), Error>;

    /// write a 8bit value
    fn write_u8(&mut self, addr: u32, value: u8) -> Result<(), Error> {
        self.write_memory(addr, &[value])
    }

    /// write a 16bit value, little endian
    fn write_u16(&mut self, addr: u32, value: u16) -> Result<(), Error> {
        self.write_memory(addr, &value.to_le_bytes())
    }

    /// write a 32bit value, little endian
    fn write_u32(&mut self, addr: u32, value: u32) -> Result<(), Error> {
        self.write_memory(addr, &value.to_le_bytes())
    }

    /// read a 8bit value
    fn read_u8(&mut self, addr: u32) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.read_memory(addr, &mut buf)?;
        Ok(buf[0])
    }

    /// read a 16bit value, little endian
    fn read_u16(&mut self, addr: u32) -> Result<u16, Error> {
        let mut buf = [0u8; 2];
        self.read_memory(addr, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// read a 32bit value, little endian
    fn read_u32(&mut self, addr: u32) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.read_memory(addr, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// Marks a memory transaction as write
const WRITE_FLAG: u8 = 0x80;
/// Upper address bits inside the first transaction byte
const ADDR_MASK: u8 = 0x3F;

/// Address header of a memory write
pub const fn write_header(addr: u32) -> [u8; 3] {
    [
        WRITE_FLAG | ((addr >> 16) as u8 & ADDR_MASK),
        (addr >> 8) as u8,
        addr as u8,
    ]
}

/// Address header of a memory read, including the dummy byte
pub const fn read_header(addr: u32) -> [u8; 4] {
    [(addr >> 16) as u8 & ADDR_MASK, (addr >> 8) as u8, addr as u8, 0x00]
}

/// Implements the controller interface for the spi hardware interface
/// Uses embedded_hal spi and gpio driver and a embedded_hal delay driver
pub struct EveSPIInterface<SPI, PD, DELAY> {
    spi: SPI,
    pd: PD,
    delay: DELAY,
}

impl<SPI, PD, DELAY> EveSPIInterface<SPI, PD, DELAY>
where
    SPI: SpiDevice,
    PD: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new spi controller interface
    /// `pd` is the active low power down pin
    pub fn new(spi: SPI, pd: PD, delay: DELAY) -> EveSPIInterface<SPI, PD, DELAY> {
        EveSPIInterface { spi, pd, delay }
    }

    /// Returns the owned peripherals
    pub fn release(self) -> (SPI, PD, DELAY) {
        (self.spi, self.pd, self.delay)
    }
}

impl<SPI, PD, DELAY> EveInterface for EveSPIInterface<SPI, PD, DELAY>
where
    SPI: SpiDevice,
    PD: OutputPin,
    DELAY: DelayNs,
{
    fn host_command(&mut self, cmd: u8, param: u8) -> Result<(), Error> {
        self.spi
            .write(&[cmd, param, 0x00])
            .map_err(|_| Error::SpiError)
    }

    fn write_memory(&mut self, addr: u32, data: &[u8]) -> Result<(), Error> {
        let header = write_header(addr);
        self.spi
            .transaction(&mut [Operation::Write(&header), Operation::Write(data)])
            .map_err(|_| Error::SpiError)
    }

    fn read_memory(&mut self, addr: u32, buf: &mut [u8]) -> Result<(), Error> {
        let header = read_header(addr);
        self.spi
            .transaction(&mut [Operation::Write(&header), Operation::Read(buf)])
            .map_err(|_| Error::SpiError)
    }

    fn reset(&mut self) -> Result<(), Error> {
        self.pd.set_low().map_err(|_| Error::GPIOError)?;
        self.delay.delay_ms(6);
        self.pd.set_high().map_err(|_| Error::GPIOError)?;
        self.delay.delay_ms(21);
        Ok(())
    }

    fn delay(&mut self, duration: core::time::Duration) -> Result<(), Error> {
        self.delay.delay_us(duration.as_micros() as u32);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! header_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (addr, write, read): (u32, [u8; 3], [u8; 4]) = $value;
                assert_eq!(write, write_header(addr));
                assert_eq!(read, read_header(addr));
            }
        )*
        }
    }

    header_tests! {
        ram_g: (0x00_0000, [0x80, 0x00, 0x00], [0x00, 0x00, 0x00, 0x00]),
        ram_dl: (0x30_0000, [0xB0, 0x00, 0x00], [0x30, 0x00, 0x00, 0x00]),
        reg_id: (0x30_2000, [0xB0, 0x20, 0x00], [0x30, 0x20, 0x00, 0x00]),
        ram_cmd_tail: (0x30_8FFC, [0xB0, 0x8F, 0xFC], [0x30, 0x8F, 0xFC, 0x00]),
        top_bits_masked: (0xFF_FFFF, [0xBF, 0xFF, 0xFF], [0x3F, 0xFF, 0xFF, 0x00]),
    }
}
