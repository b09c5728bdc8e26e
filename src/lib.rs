#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! Driver and display list encoder for the FTDI / Bridgetek EVE display coprocessors
//! (FT81x, BT815/6, BT817/8)
//!
//! The chip renders every frame from a display list: a sequence of 32 bit
//! instruction words in RAM_DL. The host either writes those words directly or
//! streams them, together with coprocessor commands, through the command ring.
//!
//! Every table in this crate is bound to a chip [`Generation`]. Instructions,
//! registers and commands the configured chip does not have are refused with
//! [`Unsupported`] instead of producing a word the chip would misinterpret.
//! The programming guides for the three generations describe the encodings:
//! https://brtchip.com/document/programming-guides/

pub mod coprocessor;
pub mod display_list;
pub mod field;
pub mod generation;
pub mod host;
pub mod interface;
pub mod memory;
pub mod options;
pub mod register;

pub use crate::display_list::{DlCmd, Encoder, Instruction, Validation};
pub use crate::generation::{Generation, Unsupported};

use crate::coprocessor::{CommandSet, CoproCommand};
use crate::host::{HostCommand, HostProtocol};
use crate::options::DlSwap;
use crate::register::{Register, RegisterMap};

/// Controller Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// controller interface error
    Interface(interface::Error),
    /// feature not available on the configured generation
    Unsupported(Unsupported),
    /// display list word rejected by the encoder
    Encoding(display_list::Error),
    /// REG_ID did not read back the chip id, holds the last value read
    NotDetected(u8),
    /// the coprocessor did not leave reset
    BootTimeout,
    /// RAM_DL has no room for another word
    DisplayListFull,
    /// the command ring has no room for the words to write
    CommandFifoFull,
    /// the coprocessor stopped on an invalid command
    CoprocessorFault,
}

impl From<interface::Error> for Error {
    fn from(e: interface::Error) -> Self {
        Error::Interface(e)
    }
}

impl From<Unsupported> for Error {
    fn from(e: Unsupported) -> Self {
        Error::Unsupported(e)
    }
}

impl From<display_list::Error> for Error {
    fn from(e: display_list::Error) -> Self {
        match e {
            display_list::Error::Unsupported(e) => Error::Unsupported(e),
            e => Error::Encoding(e),
        }
    }
}

/// Polls of REG_ID and REG_CPURESET during boot, 1 ms apart
const BOOT_POLL_LIMIT: u32 = 400;

/// Bytes the command ring keeps free so read and write pointer never meet
const CMD_RING_GUARD: u32 = 4;

/// EVE display coprocessor driver
pub struct Eve<I> {
    interface: I,
    registers: RegisterMap,
    host: HostProtocol,
    encoder: Encoder,
    commands: CommandSet,
    /// next free byte in RAM_DL
    dl_offset: u32,
    /// host write pointer in the command ring
    cmd_offset: u32,
}

impl<I> Eve<I>
where
    I: interface::EveInterface,
{
    /// Creates a new controller driver object
    /// Call init afterwards to boot the chip
    pub fn new(interface: I, generation: Generation) -> Eve<I> {
        Eve {
            interface,
            registers: RegisterMap::new(generation),
            host: HostProtocol::new(generation),
            encoder: Encoder::new(generation),
            commands: CommandSet::new(generation),
            dl_offset: 0,
            cmd_offset: 0,
        }
    }

    /// Chip generation the driver was created for
    pub fn generation(&self) -> Generation {
        self.encoder.generation()
    }

    /// Display list encoder for the configured generation
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Register lookup for the configured generation
    pub fn registers(&self) -> &RegisterMap {
        &self.registers
    }

    /// Coprocessor command table for the configured generation
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Returns the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Resets the chip and waits until the coprocessor is running
    pub fn init(&mut self) -> Result<(), Error> {
        self.interface.reset()?;
        self.host_command(HostCommand::Active, 0)?;

        let mut id = 0;
        let mut polls = 0;
        while id != register::CHIP_ID {
            if polls == BOOT_POLL_LIMIT {
                return Err(Error::NotDetected(id));
            }
            self.delay_ms(1)?;
            id = self.interface.read_u8(register::ID.addr())?;
            polls += 1;
        }

        polls = 0;
        while self.interface.read_u8(register::CPURESET.addr())? & 0x07 != 0 {
            if polls == BOOT_POLL_LIMIT {
                return Err(Error::BootTimeout);
            }
            self.delay_ms(1)?;
            polls += 1;
        }

        self.cmd_offset = self.read_register(register::CMD_WRITE)? & (memory::CMDFIFO_SIZE - 1);
        self.dl_offset = 0;

        log::info!("{} running, command ring at {}", self.generation(), self.cmd_offset);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u64) -> Result<(), Error> {
        self.interface
            .delay(core::time::Duration::from_millis(ms))?;
        Ok(())
    }

    // host commands ------------------------------------------------------------------------------

    /// Sends a host command, refusing commands the chip does not execute
    pub fn host_command(&mut self, cmd: HostCommand, param: u8) -> Result<(), Error> {
        let frame = self.host.encode(cmd, param)?;
        log::debug!("host command {:?} {:#04x}", cmd, param);
        self.interface.host_command(frame[0], frame[1])?;
        Ok(())
    }

    /// Selects the system clock multiplier
    pub fn clock_select(&mut self, multiplier: u8) -> Result<(), Error> {
        let frame = self.host.clock_select(multiplier);
        self.interface.host_command(frame[0], frame[1])?;
        Ok(())
    }

    /// Activate standby power mode, the clock keeps running
    pub fn standby(&mut self) -> Result<(), Error> {
        self.host_command(HostCommand::Standby, 0)
    }

    /// Activate sleep power mode, the clock is off
    pub fn sleep(&mut self) -> Result<(), Error> {
        self.host_command(HostCommand::Sleep, 0)
    }

    /// Return to active power mode
    pub fn wake(&mut self) -> Result<(), Error> {
        self.host_command(HostCommand::Active, 0)
    }

    // registers ----------------------------------------------------------------------------------

    /// Reads a 32 bit register
    pub fn read_register(&mut self, reg: Register) -> Result<u32, Error> {
        let addr = self.registers.address(reg)?;
        Ok(self.interface.read_u32(addr)?)
    }

    /// Reads a 16 bit register
    pub fn read_register_u16(&mut self, reg: Register) -> Result<u16, Error> {
        let addr = self.registers.address(reg)?;
        Ok(self.interface.read_u16(addr)?)
    }

    /// Writes a 32 bit register
    pub fn write_register(&mut self, reg: Register, value: u32) -> Result<(), Error> {
        let addr = self.registers.address(reg)?;
        self.interface.write_u32(addr, value)?;
        Ok(())
    }

    /// Writes an 8 bit register
    pub fn write_register_u8(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        let addr = self.registers.address(reg)?;
        self.interface.write_u8(addr, value)?;
        Ok(())
    }

    /// Writes a 16 bit register
    pub fn write_register_u16(&mut self, reg: Register, value: u16) -> Result<(), Error> {
        let addr = self.registers.address(reg)?;
        self.interface.write_u16(addr, value)?;
        Ok(())
    }

    /// Reads a register by its name, e.g. `REG_FRAMES` or `FRAMES`
    pub fn read_register_by_name(&mut self, name: &str) -> Result<Option<u32>, Error> {
        match self.registers.lookup(name) {
            Some(reg) => Ok(Some(self.read_register(reg)?)),
            None => Ok(None),
        }
    }

    // display list -------------------------------------------------------------------------------

    /// Restarts writing at the beginning of RAM_DL
    pub fn dl_start(&mut self) {
        self.dl_offset = 0;
    }

    /// Appends one word to RAM_DL
    pub fn dl(&mut self, cmd: DlCmd) -> Result<(), Error> {
        if self.dl_offset + DlCmd::LENGTH > memory::RAM_DL_SIZE {
            return Err(Error::DisplayListFull);
        }
        self.interface
            .write_u32(memory::RAM_DL + self.dl_offset, cmd.raw())?;
        self.dl_offset += DlCmd::LENGTH;
        Ok(())
    }

    /// Encodes and appends an instruction to RAM_DL
    pub fn dl_instruction(&mut self, instruction: &Instruction) -> Result<(), Error> {
        let cmd = self.encoder.encode(instruction)?;
        self.dl(cmd)
    }

    /// Bytes written to RAM_DL since the last [`Eve::dl_start`]
    pub fn dl_len(&self) -> u32 {
        self.dl_offset
    }

    /// Schedules the written display list to be shown
    pub fn dl_swap(&mut self, mode: DlSwap) -> Result<(), Error> {
        log::debug!("display list swap {:?} after {} bytes", mode, self.dl_offset);
        self.write_register_u8(register::DLSWAP, mode as u8)
    }

    // command ring -------------------------------------------------------------------------------

    /// Free bytes in the command ring
    pub fn cmd_space(&mut self) -> Result<u32, Error> {
        let read = self.cmd_read_pointer()?;
        let used = self.cmd_offset.wrapping_sub(read) & (memory::CMDFIFO_SIZE - 1);
        Ok(memory::CMDFIFO_SIZE - CMD_RING_GUARD - used)
    }

    /// Returns true while the coprocessor has unread words
    pub fn cmd_busy(&mut self) -> Result<bool, Error> {
        Ok(self.cmd_read_pointer()? != self.cmd_offset)
    }

    fn cmd_read_pointer(&mut self) -> Result<u32, Error> {
        let read = self.read_register(register::CMD_READ)?;
        if read == register::CMD_READ_FAULT {
            log::warn!("coprocessor fault");
            return Err(Error::CoprocessorFault);
        }
        Ok(read & (memory::CMDFIFO_SIZE - 1))
    }

    /// Writes words into the command ring and hands them to the coprocessor
    ///
    /// Fails without publishing anything if the ring lacks the room or a
    /// write fails. REG_CMD_WRITE is only moved once all words are in place.
    pub fn cmd_write(&mut self, words: &[u32]) -> Result<(), Error> {
        self.cmd_commit(None, words)
    }

    /// Writes a coprocessor command without arguments
    pub fn cmd(&mut self, cmd: CoproCommand) -> Result<(), Error> {
        let code = self.commands.code(cmd)?;
        self.cmd_commit(Some(code), &[])
    }

    /// Writes a coprocessor command followed by its argument words
    pub fn cmd_with_args(&mut self, cmd: CoproCommand, args: &[u32]) -> Result<(), Error> {
        let code = self.commands.code(cmd)?;
        self.cmd_commit(Some(code), args)
    }

    fn cmd_commit(&mut self, code: Option<u32>, args: &[u32]) -> Result<(), Error> {
        let len = (code.iter().count() + args.len()) as u32 * 4;
        if len > self.cmd_space()? {
            return Err(Error::CommandFifoFull);
        }
        let mut offset = self.cmd_offset;
        for word in code.iter().chain(args) {
            self.interface.write_u32(memory::RAM_CMD + offset, *word)?;
            offset = (offset + 4) & (memory::CMDFIFO_SIZE - 1);
        }
        self.write_register(register::CMD_WRITE, offset)?;
        self.cmd_offset = offset;
        Ok(())
    }

    /// Streams a display list word through the command ring
    pub fn cmd_dl(&mut self, cmd: DlCmd) -> Result<(), Error> {
        self.cmd_write(&[cmd.raw()])
    }

    /// Copies the coprocessor fault message into `buf` (gen3+)
    ///
    /// Returns the message length without the terminating zero.
    pub fn fault_report<'a>(&mut self, buf: &'a mut [u8]) -> Result<&'a [u8], Error> {
        self.generation()
            .require(memory::Region::RamErrReport.since())?;
        let len = buf.len().min(memory::RAM_ERR_REPORT_SIZE as usize);
        self.interface
            .read_memory(memory::RAM_ERR_REPORT, &mut buf[..len])?;
        let end = buf[..len].iter().position(|&b| b == 0).unwrap_or(len);
        Ok(&buf[..end])
    }

    /// Restarts the coprocessor after a fault and empties the command ring
    pub fn cmd_recover(&mut self) -> Result<(), Error> {
        let patch = if self.generation().supports(Generation::Gen3) {
            Some(self.read_register_u16(register::COPRO_PATCH_DTR)?)
        } else {
            None
        };
        self.write_register_u8(register::CPURESET, 1)?;
        self.write_register(register::CMD_READ, 0)?;
        self.write_register(register::CMD_WRITE, 0)?;
        self.write_register(register::CMD_DL, 0)?;
        self.write_register_u8(register::CPURESET, 0)?;
        if let Some(patch) = patch {
            self.write_register_u16(register::COPRO_PATCH_DTR, patch)?;
        }
        self.cmd_offset = 0;
        log::info!("coprocessor restarted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::EveInterface;
    use crate::options::Primitive;
    use std::collections::HashMap;

    /// RAM image of a chip, REG_ID preset to the chip id
    #[derive(Default)]
    struct FakeEve {
        mem: HashMap<u32, u8>,
        host: Vec<(u8, u8)>,
        resets: usize,
        waited_us: u128,
        /// address and length of every memory write
        writes: Vec<(u32, usize)>,
        /// memory writes starting here fail
        fail_at: Option<u32>,
    }

    impl FakeEve {
        fn booted() -> Self {
            let mut fake = FakeEve::default();
            fake.mem.insert(register::ID.addr(), register::CHIP_ID);
            fake
        }

        fn u32_at(&self, addr: u32) -> u32 {
            let mut bytes = [0u8; 4];
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = *self.mem.get(&(addr + i as u32)).unwrap_or(&0);
            }
            u32::from_le_bytes(bytes)
        }

        fn set_u32(&mut self, addr: u32, value: u32) {
            for (i, b) in value.to_le_bytes().into_iter().enumerate() {
                self.mem.insert(addr + i as u32, b);
            }
        }
    }

    impl EveInterface for FakeEve {
        fn host_command(&mut self, cmd: u8, param: u8) -> Result<(), interface::Error> {
            self.host.push((cmd, param));
            Ok(())
        }

        fn write_memory(&mut self, addr: u32, data: &[u8]) -> Result<(), interface::Error> {
            if self.fail_at == Some(addr) {
                return Err(interface::Error::SpiError);
            }
            self.writes.push((addr, data.len()));
            for (i, b) in data.iter().enumerate() {
                self.mem.insert(addr + i as u32, *b);
            }
            Ok(())
        }

        fn read_memory(&mut self, addr: u32, buf: &mut [u8]) -> Result<(), interface::Error> {
            for (i, b) in buf.iter_mut().enumerate() {
                *b = *self.mem.get(&(addr + i as u32)).unwrap_or(&0);
            }
            Ok(())
        }

        fn reset(&mut self) -> Result<(), interface::Error> {
            self.resets += 1;
            Ok(())
        }

        fn delay(&mut self, duration: core::time::Duration) -> Result<(), interface::Error> {
            self.waited_us += duration.as_micros();
            Ok(())
        }
    }

    fn booted(generation: Generation) -> Eve<FakeEve> {
        let mut eve = Eve::new(FakeEve::booted(), generation);
        eve.init().unwrap();
        eve
    }

    #[test]
    fn init_resets_and_activates() {
        let eve = booted(Generation::Gen2);
        let fake = eve.release();
        assert_eq!(fake.resets, 1);
        assert_eq!(fake.host, vec![(0x00, 0x00)]);
    }

    #[test]
    fn init_reports_missing_chip() {
        let mut fake = FakeEve::default();
        fake.mem.insert(register::ID.addr(), 0x12);
        let mut eve = Eve::new(fake, Generation::Gen3);
        assert_eq!(eve.init(), Err(Error::NotDetected(0x12)));
        assert_eq!(eve.release().waited_us, BOOT_POLL_LIMIT as u128 * 1000);
    }

    #[test]
    fn init_waits_for_coprocessor_reset() {
        let mut fake = FakeEve::booted();
        fake.mem.insert(register::CPURESET.addr(), 0x01);
        let mut eve = Eve::new(fake, Generation::Gen2);
        assert_eq!(eve.init(), Err(Error::BootTimeout));
    }

    #[test]
    fn init_picks_up_command_ring_position() {
        let mut fake = FakeEve::booted();
        fake.set_u32(register::CMD_WRITE.addr(), 0x120);
        fake.set_u32(register::CMD_READ.addr(), 0x120);
        let mut eve = Eve::new(fake, Generation::Gen2);
        eve.init().unwrap();
        assert!(!eve.cmd_busy().unwrap());
    }

    #[test]
    fn internal_clock_refused_on_gen4() {
        let mut eve = booted(Generation::Gen4);
        assert_eq!(
            eve.host_command(HostCommand::ClkInt, 0),
            Err(Error::Unsupported(Unsupported::Withdrawn {
                last: Generation::Gen3,
                active: Generation::Gen4
            }))
        );
        eve.clock_select(5).unwrap();
        eve.sleep().unwrap();
        assert_eq!(eve.release().host, vec![(0x00, 0x00), (0x61, 0x45), (0x42, 0x00)]);
    }

    #[test]
    fn registers_are_gated() {
        let mut eve = booted(Generation::Gen2);
        assert_eq!(
            eve.read_register(register::FLASH_SIZE),
            Err(Error::Unsupported(Unsupported::Requires {
                required: Generation::Gen3,
                active: Generation::Gen2
            }))
        );
        eve.write_register(register::PCLK, 2).unwrap();
        assert_eq!(eve.read_register(register::PCLK), Ok(2));
        assert_eq!(eve.read_register_by_name("REG_PCLK"), Ok(Some(2)));
        assert_eq!(eve.read_register_by_name("REG_PCLK_FREQ"), Ok(None));
    }

    #[test]
    fn display_list_writes_into_ram_dl() {
        let mut eve = booted(Generation::Gen2);
        let enc = *eve.encoder();
        eve.dl_start();
        eve.dl(enc.clear(true, true, true)).unwrap();
        eve.dl(enc.begin(Primitive::Rects)).unwrap();
        eve.dl_instruction(&Instruction::Vertex2f { x: 10, y: 10 }).unwrap();
        eve.dl(enc.vertex2f(100, 100)).unwrap();
        eve.dl(enc.end()).unwrap();
        eve.dl(enc.display()).unwrap();
        eve.dl_swap(DlSwap::Frame).unwrap();
        assert_eq!(eve.dl_len(), 24);

        let fake = eve.release();
        let words: Vec<u32> = (0..6).map(|i| fake.u32_at(memory::RAM_DL + i * 4)).collect();
        assert_eq!(
            words,
            vec![0x2600_0007, 0x1F00_0009, 0x4005_000A, 0x4032_0064, 0x2100_0000, 0x0000_0000]
        );
        assert_eq!(fake.mem.get(&register::DLSWAP.addr()), Some(&2));
    }

    #[test]
    fn display_list_full() {
        let mut eve = booted(Generation::Gen2);
        for _ in 0..memory::RAM_DL_SIZE / 4 {
            eve.dl(DlCmd::NOP).unwrap();
        }
        assert_eq!(eve.dl(DlCmd::DISPLAY), Err(Error::DisplayListFull));
        eve.dl_start();
        assert_eq!(eve.dl(DlCmd::DISPLAY), Ok(()));
    }

    #[test]
    fn gen3_instruction_refused_on_gen2() {
        let mut eve = booted(Generation::Gen2);
        assert_eq!(
            eve.dl_instruction(&Instruction::IntFrr),
            Err(Error::Unsupported(Unsupported::Requires {
                required: Generation::Gen3,
                active: Generation::Gen2
            }))
        );
        assert_eq!(eve.dl_len(), 0);
    }

    #[test]
    fn command_ring_space() {
        let mut eve = booted(Generation::Gen3);
        assert_eq!(eve.cmd_space(), Ok(4092));
        eve.cmd(CoproCommand::DlStart).unwrap();
        eve.cmd_dl(eve.encoder().clear(true, true, true)).unwrap();
        eve.cmd(CoproCommand::Swap).unwrap();
        assert_eq!(eve.cmd_space(), Ok(4080));
        assert!(eve.cmd_busy().unwrap());

        let fake = eve.release();
        assert_eq!(fake.u32_at(memory::RAM_CMD), 0xFFFF_FF00);
        assert_eq!(fake.u32_at(memory::RAM_CMD + 4), 0x2600_0007);
        assert_eq!(fake.u32_at(memory::RAM_CMD + 8), 0xFFFF_FF01);
        assert_eq!(fake.u32_at(register::CMD_WRITE.addr()), 12);
    }

    #[test]
    fn command_ring_wraps() {
        let mut fake = FakeEve::booted();
        fake.set_u32(register::CMD_WRITE.addr(), 4088);
        fake.set_u32(register::CMD_READ.addr(), 4088);
        let mut eve = Eve::new(fake, Generation::Gen2);
        eve.init().unwrap();

        eve.cmd_write(&[1, 2, 3]).unwrap();
        let fake = eve.release();
        assert_eq!(fake.u32_at(memory::RAM_CMD + 4088), 1);
        assert_eq!(fake.u32_at(memory::RAM_CMD + 4092), 2);
        assert_eq!(fake.u32_at(memory::RAM_CMD), 3);
        assert_eq!(fake.u32_at(register::CMD_WRITE.addr()), 4);
    }

    #[test]
    fn command_ring_full() {
        let mut eve = booted(Generation::Gen2);
        let words = [0u32; 1023];
        eve.cmd_write(&words).unwrap();
        assert_eq!(eve.cmd_space(), Ok(0));
        assert_eq!(eve.cmd_write(&[0]), Err(Error::CommandFifoFull));
        assert_eq!(
            eve.cmd_with_args(CoproCommand::MemZero, &[0, 16]),
            Err(Error::CommandFifoFull)
        );
    }

    #[test]
    fn commands_are_gated() {
        let mut eve = booted(Generation::Gen3);
        assert_eq!(
            eve.cmd(CoproCommand::ApiLevel),
            Err(Error::Unsupported(Unsupported::Requires {
                required: Generation::Gen4,
                active: Generation::Gen3
            }))
        );
        eve.cmd_with_args(CoproCommand::MemZero, &[0x1000, 64]).unwrap();
        assert_eq!(eve.cmd_space(), Ok(4092 - 12));
    }

    #[test]
    fn coprocessor_fault_detected_and_recovered() {
        let mut eve = booted(Generation::Gen3);
        eve.cmd(CoproCommand::Swap).unwrap();

        let mut fake = eve.release();
        fake.set_u32(register::CMD_READ.addr(), register::CMD_READ_FAULT);
        fake.set_u32(register::COPRO_PATCH_DTR.addr(), 0xABCD);
        fake.write_memory(memory::RAM_ERR_REPORT, b"ERROR: bad\0junk").unwrap();
        let mut eve = Eve::new(fake, Generation::Gen3);

        assert_eq!(eve.cmd_busy(), Err(Error::CoprocessorFault));
        assert_eq!(eve.cmd_write(&[0]), Err(Error::CoprocessorFault));
        let mut report = [0u8; 128];
        assert_eq!(eve.fault_report(&mut report), Ok(&b"ERROR: bad"[..]));

        eve.cmd_recover().unwrap();
        assert_eq!(eve.cmd_space(), Ok(4092));
        let fake = eve.release();
        assert_eq!(fake.u32_at(register::CMD_WRITE.addr()), 0);
        assert_eq!(fake.mem.get(&register::CPURESET.addr()), Some(&0));
        assert_eq!(fake.u32_at(register::COPRO_PATCH_DTR.addr()), 0xABCD);
    }

    #[test]
    fn patch_register_restored_with_16_bit_access() {
        let mut fake = FakeEve::booted();
        fake.set_u32(register::COPRO_PATCH_DTR.addr(), 0xEE00_1234);
        let mut eve = Eve::new(fake, Generation::Gen4);
        eve.init().unwrap();
        eve.cmd_recover().unwrap();

        let fake = eve.release();
        let patch = register::COPRO_PATCH_DTR.addr();
        let patch_writes: Vec<_> = fake.writes.iter().filter(|w| w.0 == patch).collect();
        assert_eq!(patch_writes, vec![&(patch, 2)]);
        assert_eq!(fake.u32_at(patch), 0xEE00_1234);
        assert_eq!(fake.mem.get(&(patch + 3)), Some(&0xEE));
    }

    #[test]
    fn command_with_args_publishes_once() {
        let mut eve = booted(Generation::Gen3);
        eve.cmd_with_args(CoproCommand::MemZero, &[0x1000, 64]).unwrap();
        let fake = eve.release();
        let published: Vec<_> = fake
            .writes
            .iter()
            .filter(|w| w.0 == register::CMD_WRITE.addr())
            .collect();
        assert_eq!(published, vec![&(register::CMD_WRITE.addr(), 4)]);
        assert_eq!(fake.u32_at(register::CMD_WRITE.addr()), 12);
        assert_eq!(fake.u32_at(memory::RAM_CMD), 0xFFFF_FF1C);
    }

    #[test]
    fn failed_ring_write_leaves_no_partial_command() {
        let mut fake = FakeEve::booted();
        fake.fail_at = Some(memory::RAM_CMD + 4);
        let mut eve = Eve::new(fake, Generation::Gen3);
        eve.init().unwrap();

        assert_eq!(
            eve.cmd_with_args(CoproCommand::MemZero, &[0x1000, 64]),
            Err(Error::Interface(interface::Error::SpiError))
        );
        assert_eq!(
            eve.cmd_write(&[0xFFFF_FF1C, 0x1000, 64]),
            Err(Error::Interface(interface::Error::SpiError))
        );
        assert_eq!(eve.cmd_space(), Ok(4092));
        assert!(!eve.cmd_busy().unwrap());

        eve.cmd(CoproCommand::Swap).unwrap();
        let fake = eve.release();
        assert_eq!(fake.u32_at(memory::RAM_CMD), 0xFFFF_FF01);
        assert_eq!(fake.u32_at(register::CMD_WRITE.addr()), 4);
        let published: Vec<_> = fake
            .writes
            .iter()
            .filter(|w| w.0 == register::CMD_WRITE.addr())
            .collect();
        assert_eq!(published.len(), 1);
    }

    #[test]
    fn fault_report_needs_gen3() {
        let mut eve = booted(Generation::Gen2);
        let mut report = [0u8; 16];
        assert!(eve.fault_report(&mut report).is_err());
    }
}
