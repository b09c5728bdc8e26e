//! EVE memory map
//!
//! All addresses are fixed per chip generation and are never negotiated with
//! the device. Nothing here checks that an address is legal for the active
//! generation apart from [`Region::available`].

use crate::generation::Generation;

// ---- EVE memory map -----------------------------------------------------------------

/// General purpose graphics RAM
pub const RAM_G: u32 = 0x0000_0000;
/// Chip id bytes in ROM
pub const ROM_CHIPID: u32 = 0x000C_0000;
/// Built in font bitmaps
pub const ROM_FONT: u32 = 0x001E_0000;
/// Pointer to the ROM font table
pub const ROM_FONT_ADDR: u32 = 0x002F_FFFC;
/// Display list RAM
pub const RAM_DL: u32 = 0x0030_0000;
/// Register bank
pub const RAM_REG: u32 = 0x0030_2000;
/// Coprocessor command ring buffer
pub const RAM_CMD: u32 = 0x0030_8000;
/// Coprocessor fault message, null terminated (gen3+)
pub const RAM_ERR_REPORT: u32 = 0x0030_9800;
/// External flash, as seen by BITMAP_SOURCE2 (gen3+)
pub const RAM_FLASH: u32 = 0x0080_0000;
/// First flash address after the flash driver blob (gen3+)
pub const RAM_FLASH_POSTBLOB: u32 = 0x0080_1000;

// ---- sizes -----------------------------------------------------------------

/// Bytes of general purpose RAM
pub const RAM_G_SIZE: u32 = 1024 * 1024;
/// Bytes in the command ring
pub const CMDFIFO_SIZE: u32 = 4 * 1024;
/// Bytes in RAM_DL, 2048 words
pub const RAM_DL_SIZE: u32 = 8 * 1024;
/// Bytes reserved for the fault message
pub const RAM_ERR_REPORT_SIZE: u32 = 128;

/// Bytes in the ROM font table, one entry per built in font
pub const FONT_TABLE_SIZE: u32 = 148;
/// Characters stored per font bitmap handle
pub const NUMCHAR_PERFONT: u32 = 128;

/// A fixed window of the device address space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// [`RAM_G`]
    RamG,
    /// [`ROM_FONT`] up to [`RAM_DL`]
    Rom,
    /// [`RAM_DL`]
    RamDl,
    /// [`RAM_REG`] and the secondary bank at 0x309000
    RamReg,
    /// [`RAM_CMD`]
    RamCmd,
    /// [`RAM_ERR_REPORT`]
    RamErrReport,
}

impl Region {
    /// Base address of the region
    pub const fn base(self) -> u32 {
        match self {
            Region::RamG => RAM_G,
            Region::Rom => ROM_FONT,
            Region::RamDl => RAM_DL,
            Region::RamReg => RAM_REG,
            Region::RamCmd => RAM_CMD,
            Region::RamErrReport => RAM_ERR_REPORT,
        }
    }

    /// Length of the region in bytes
    pub const fn size(self) -> u32 {
        match self {
            Region::RamG => RAM_G_SIZE,
            Region::Rom => RAM_DL - ROM_FONT,
            Region::RamDl => RAM_DL_SIZE,
            Region::RamReg => 4 * 1024,
            Region::RamCmd => CMDFIFO_SIZE,
            Region::RamErrReport => RAM_ERR_REPORT_SIZE,
        }
    }

    /// Generation the region first appeared in
    pub const fn since(self) -> Generation {
        match self {
            Region::RamErrReport => Generation::Gen3,
            _ => Generation::Gen2,
        }
    }

    /// Returns true if the region exists on `generation`
    pub const fn available(self, generation: Generation) -> bool {
        generation.supports(self.since())
    }

    /// Returns true if `addr` lies inside the region
    pub const fn contains(self, addr: u32) -> bool {
        addr >= self.base() && addr - self.base() < self.size()
    }

    /// Finds the region holding `addr`
    ///
    /// Registers in the secondary bank (0x309000, e.g. `REG_TRACKER`) belong to
    /// [`Region::RamReg`].
    pub fn containing(addr: u32) -> Option<Region> {
        if (0x0030_9000..RAM_ERR_REPORT).contains(&addr) {
            return Some(Region::RamReg);
        }
        [
            Region::RamG,
            Region::Rom,
            Region::RamDl,
            Region::RamReg,
            Region::RamCmd,
            Region::RamErrReport,
        ]
        .into_iter()
        .find(|region| region.contains(addr))
    }
}
