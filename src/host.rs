//! Host commands
//!
//! Host commands control the chip lifecycle (power state, clock source, reset,
//! pin configuration). They are sent as a three byte frame `[cmd, param, 0x00]`
//! outside of the display list and the command ring.

use crate::generation::{Generation, Unsupported};

// ---- EVE host command defines -----------------------------------------------------------------

/// Single byte lifecycle commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostCommand {
    /// place the chip in active state
    Active = 0x00,
    /// place the chip in standby, clock running
    Standby = 0x41,
    /// place the chip in sleep, clock off
    Sleep = 0x42,
    /// select the external clock source
    ClkExt = 0x44,
    /// select the internal clock source, not available on BT817 / BT818
    ClkInt = 0x48,
    /// place the chip in power down, core off
    PwrDown = 0x50,
    /// configure the system clock multiplier
    ClkSel = 0x61,
    /// reset the core, all registers default and processors reset
    CoreRst = 0x68,
    /// set the drive strength of a pin group
    PinDrive = 0x70,
    /// set how a pin group behaves during power down
    PinPdState = 0x71,
}

/// Alias of [`HostCommand::CoreRst`]
pub const RST_PULSE: HostCommand = HostCommand::CoreRst;

impl HostCommand {
    /// Command byte
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Checks that the command exists on `generation`
    pub const fn check(self, generation: Generation) -> Result<(), Unsupported> {
        match self {
            HostCommand::ClkInt => generation.require_at_most(Generation::Gen3),
            _ => Ok(()),
        }
    }

    /// Raw three byte frame, no generation check
    pub(crate) const fn frame(self, param: u8) -> [u8; 3] {
        [self as u8, param, 0x00]
    }
}

/// Pin groups addressed by [`HostCommand::PinDrive`] and [`HostCommand::PinPdState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PinGroup {
    /// GPIO0
    Gpio0 = 0x00,
    /// GPIO1
    Gpio1 = 0x01,
    /// GPIO2
    Gpio2 = 0x02,
    /// GPIO3
    Gpio3 = 0x03,
    /// DISP
    Disp = 0x08,
    /// DE
    De = 0x09,
    /// VSYNC and HSYNC
    VsyncHsync = 0x0A,
    /// PCLK
    Pclk = 0x0B,
    /// BACKLIGHT
    Backlight = 0x0C,
    /// R, G and B
    Rgb = 0x0D,
    /// AUDIO_L
    AudioL = 0x0E,
    /// INT_N
    IntN = 0x0F,
    /// CTP_RST_N
    CtpRstN = 0x10,
}

/// Output drive strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DriveStrength {
    /// 5 mA
    Milliamps5 = 0b00,
    /// 10 mA
    Milliamps10 = 0b01,
    /// 15 mA
    Milliamps15 = 0b10,
    /// 20 mA
    Milliamps20 = 0b11,
}

/// Pin state during power down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerDownState {
    /// floating
    Float = 0b00,
    /// pulled low
    PullDown = 0b01,
    /// pulled high
    PullUp = 0b10,
}

/// Host command encoder bound to one chip generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostProtocol {
    generation: Generation,
}

impl HostProtocol {
    /// Host command encoder for `generation`
    pub const fn new(generation: Generation) -> Self {
        HostProtocol { generation }
    }

    /// Chip generation of the encoder
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Builds the frame for `cmd`, refusing commands the chip does not execute
    pub const fn encode(&self, cmd: HostCommand, param: u8) -> Result<[u8; 3], Unsupported> {
        match cmd.check(self.generation) {
            Ok(()) => Ok(cmd.frame(param)),
            Err(e) => Err(e),
        }
    }

    /// CLKSEL frame for a PLL multiplier
    ///
    /// A multiplier of 0 or 1 selects the default clock. The PLL range bit is
    /// set for multipliers of 4 and above.
    pub const fn clock_select(&self, multiplier: u8) -> [u8; 3] {
        let multiplier = multiplier & 0x3F;
        let range = if multiplier >= 4 { 0x40 } else { 0x00 };
        HostCommand::ClkSel.frame(multiplier | range)
    }

    /// PINDRIVE frame
    pub const fn pin_drive(&self, pins: PinGroup, strength: DriveStrength) -> [u8; 3] {
        HostCommand::PinDrive.frame(((pins as u8) << 2) | strength as u8)
    }

    /// PIN_PD_STATE frame
    pub const fn pin_power_down_state(&self, pins: PinGroup, state: PowerDownState) -> [u8; 3] {
        HostCommand::PinPdState.frame(((pins as u8) << 2) | state as u8)
    }
}
