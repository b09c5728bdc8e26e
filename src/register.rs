//! EVE register bank
//!
//! Registers live in the window at [`RAM_REG`](crate::memory::RAM_REG) with a
//! handful in the secondary bank at 0x309000. Each register carries its
//! generation so a [`RegisterMap`] can refuse registers the configured chip
//! does not have.

use crate::generation::{Generation, Unsupported};

/// Direction the host may access a register
///
/// This is documentation only, the hardware does not refuse accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// status, writes are ignored
    ReadOnly,
    /// control, reads return no meaningful value
    WriteOnly,
    /// configuration
    ReadWrite,
}

/// A named register address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    name: &'static str,
    addr: u32,
    access: Access,
    since: Generation,
}

impl Register {
    const fn new(name: &'static str, addr: u32, access: Access, since: Generation) -> Self {
        Register {
            name,
            addr,
            access,
            since,
        }
    }

    /// Name as used in the programmers guide, e.g. `REG_ID`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Address without any generation check
    pub const fn addr(&self) -> u32 {
        self.addr
    }

    /// Direction the host is expected to use
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Generation the register was introduced in
    pub const fn since(&self) -> Generation {
        self.since
    }
}

/// Value of [`ID`] after a successful boot
pub const CHIP_ID: u8 = 0x7C;

/// Read pointer value reported by [`CMD_READ`] after a coprocessor fault
pub const CMD_READ_FAULT: u32 = 0xFFF;

// ---- base registers (FT81x) -----------------------------------------------------------------

/// Analog comparator control
pub const ANA_COMP: Register =
    Register::new("REG_ANA_COMP", 0x00302184, Access::ReadWrite, Generation::Gen2);
/// Built in self test enable
pub const BIST_EN: Register =
    Register::new("REG_BIST_EN", 0x00302174, Access::ReadWrite, Generation::Gen2);
/// Clock cycles since reset
pub const CLOCK: Register =
    Register::new("REG_CLOCK", 0x00302008, Access::ReadOnly, Generation::Gen2);
/// Free space in the command ring, in bytes
pub const CMDB_SPACE: Register =
    Register::new("REG_CMDB_SPACE", 0x00302574, Access::ReadWrite, Generation::Gen2);
/// Bulk write into the command ring
pub const CMDB_WRITE: Register =
    Register::new("REG_CMDB_WRITE", 0x00302578, Access::WriteOnly, Generation::Gen2);
/// Coprocessor display list write offset
pub const CMD_DL: Register =
    Register::new("REG_CMD_DL", 0x00302100, Access::ReadWrite, Generation::Gen2);
/// Coprocessor read pointer in the command ring
pub const CMD_READ: Register =
    Register::new("REG_CMD_READ", 0x003020f8, Access::ReadWrite, Generation::Gen2);
/// Host write pointer in the command ring
pub const CMD_WRITE: Register =
    Register::new("REG_CMD_WRITE", 0x003020fc, Access::ReadWrite, Generation::Gen2);
/// Coprocessor, touch and audio engine reset
pub const CPURESET: Register =
    Register::new("REG_CPURESET", 0x00302020, Access::ReadWrite, Generation::Gen2);
/// RGB signal spread control
pub const CSPREAD: Register =
    Register::new("REG_CSPREAD", 0x00302068, Access::ReadWrite, Generation::Gen2);
/// Capacitive touch extended mode
pub const CTOUCH_EXTENDED: Register =
    Register::new("REG_CTOUCH_EXTENDED", 0x00302108, Access::ReadWrite, Generation::Gen2);
/// Capacitive touch point 0
pub const CTOUCH_TOUCH0_XY: Register =
    Register::new("REG_CTOUCH_TOUCH0_XY", 0x00302124, Access::ReadOnly, Generation::Gen2);
/// Capacitive touch point 4, x
pub const CTOUCH_TOUCH4_X: Register =
    Register::new("REG_CTOUCH_TOUCH4_X", 0x0030216c, Access::ReadOnly, Generation::Gen2);
/// Capacitive touch point 4, y
pub const CTOUCH_TOUCH4_Y: Register =
    Register::new("REG_CTOUCH_TOUCH4_Y", 0x00302120, Access::ReadOnly, Generation::Gen2);
/// Capacitive touch point 1
pub const CTOUCH_TOUCH1_XY: Register =
    Register::new("REG_CTOUCH_TOUCH1_XY", 0x0030211c, Access::ReadOnly, Generation::Gen2);
/// Capacitive touch point 2
pub const CTOUCH_TOUCH2_XY: Register =
    Register::new("REG_CTOUCH_TOUCH2_XY", 0x0030218c, Access::ReadOnly, Generation::Gen2);
/// Capacitive touch point 3
pub const CTOUCH_TOUCH3_XY: Register =
    Register::new("REG_CTOUCH_TOUCH3_XY", 0x00302190, Access::ReadOnly, Generation::Gen2);
/// Touch controller configuration
pub const TOUCH_CONFIG: Register =
    Register::new("REG_TOUCH_CONFIG", 0x00302168, Access::ReadWrite, Generation::Gen2);
/// ROM date stamp
pub const DATESTAMP: Register =
    Register::new("REG_DATESTAMP", 0x00302564, Access::ReadOnly, Generation::Gen2);
/// Output dither enable
pub const DITHER: Register =
    Register::new("REG_DITHER", 0x00302060, Access::ReadWrite, Generation::Gen2);
/// Display list swap trigger, reads 0 when done
pub const DLSWAP: Register =
    Register::new("REG_DLSWAP", 0x00302054, Access::ReadWrite, Generation::Gen2);
/// Frames rendered since reset
pub const FRAMES: Register =
    Register::new("REG_FRAMES", 0x00302004, Access::ReadOnly, Generation::Gen2);
/// Main clock frequency in Hz
pub const FREQUENCY: Register =
    Register::new("REG_FREQUENCY", 0x0030200c, Access::ReadWrite, Generation::Gen2);
/// Legacy GPIO pin values
pub const GPIO: Register =
    Register::new("REG_GPIO", 0x00302094, Access::ReadWrite, Generation::Gen2);
/// Extended GPIO pin values
pub const GPIOX: Register =
    Register::new("REG_GPIOX", 0x0030209c, Access::ReadWrite, Generation::Gen2);
/// Extended GPIO pin direction
pub const GPIOX_DIR: Register =
    Register::new("REG_GPIOX_DIR", 0x00302098, Access::ReadWrite, Generation::Gen2);
/// Legacy GPIO pin direction
pub const GPIO_DIR: Register =
    Register::new("REG_GPIO_DIR", 0x00302090, Access::ReadWrite, Generation::Gen2);
/// Horizontal total cycle count
pub const HCYCLE: Register =
    Register::new("REG_HCYCLE", 0x0030202c, Access::ReadWrite, Generation::Gen2);
/// Horizontal display start offset
pub const HOFFSET: Register =
    Register::new("REG_HOFFSET", 0x00302030, Access::ReadWrite, Generation::Gen2);
/// Horizontal display pixel count
pub const HSIZE: Register =
    Register::new("REG_HSIZE", 0x00302034, Access::ReadWrite, Generation::Gen2);
/// Horizontal sync fall offset
pub const HSYNC0: Register =
    Register::new("REG_HSYNC0", 0x00302038, Access::ReadWrite, Generation::Gen2);
/// Horizontal sync rise offset
pub const HSYNC1: Register =
    Register::new("REG_HSYNC1", 0x0030203c, Access::ReadWrite, Generation::Gen2);
/// Identification register, reads 0x7C
pub const ID: Register = Register::new("REG_ID", 0x00302000, Access::ReadOnly, Generation::Gen2);
/// Global interrupt enable
pub const INT_EN: Register =
    Register::new("REG_INT_EN", 0x003020ac, Access::ReadWrite, Generation::Gen2);
/// Interrupt flags, cleared by reading
pub const INT_FLAGS: Register =
    Register::new("REG_INT_FLAGS", 0x003020a8, Access::ReadOnly, Generation::Gen2);
/// Interrupt enable mask
pub const INT_MASK: Register =
    Register::new("REG_INT_MASK", 0x003020b0, Access::ReadWrite, Generation::Gen2);
/// Display list macro 0
pub const MACRO_0: Register =
    Register::new("REG_MACRO_0", 0x003020d8, Access::ReadWrite, Generation::Gen2);
/// Display list macro 1
pub const MACRO_1: Register =
    Register::new("REG_MACRO_1", 0x003020dc, Access::ReadWrite, Generation::Gen2);
/// Media FIFO read pointer
pub const MEDIAFIFO_READ: Register =
    Register::new("REG_MEDIAFIFO_READ", 0x00309014, Access::ReadOnly, Generation::Gen2);
/// Media FIFO write pointer
pub const MEDIAFIFO_WRITE: Register =
    Register::new("REG_MEDIAFIFO_WRITE", 0x00309018, Access::ReadWrite, Generation::Gen2);
/// Output bit resolution
pub const OUTBITS: Register =
    Register::new("REG_OUTBITS", 0x0030205c, Access::ReadWrite, Generation::Gen2);
/// Pixel clock divider, 0 disables
pub const PCLK: Register =
    Register::new("REG_PCLK", 0x00302070, Access::ReadWrite, Generation::Gen2);
/// Pixel clock polarity
pub const PCLK_POL: Register =
    Register::new("REG_PCLK_POL", 0x0030206c, Access::ReadWrite, Generation::Gen2);
/// Start effect playback
pub const PLAY: Register =
    Register::new("REG_PLAY", 0x0030208c, Access::ReadWrite, Generation::Gen2);
/// Audio playback format
pub const PLAYBACK_FORMAT: Register =
    Register::new("REG_PLAYBACK_FORMAT", 0x003020c4, Access::ReadWrite, Generation::Gen2);
/// Audio playback sample rate
pub const PLAYBACK_FREQ: Register =
    Register::new("REG_PLAYBACK_FREQ", 0x003020c0, Access::ReadWrite, Generation::Gen2);
/// Audio playback sample length in bytes
pub const PLAYBACK_LENGTH: Register =
    Register::new("REG_PLAYBACK_LENGTH", 0x003020b8, Access::ReadWrite, Generation::Gen2);
/// Audio playback loop enable
pub const PLAYBACK_LOOP: Register =
    Register::new("REG_PLAYBACK_LOOP", 0x003020c8, Access::ReadWrite, Generation::Gen2);
/// Start audio playback
pub const PLAYBACK_PLAY: Register =
    Register::new("REG_PLAYBACK_PLAY", 0x003020cc, Access::ReadWrite, Generation::Gen2);
/// Audio playback current read pointer
pub const PLAYBACK_READPTR: Register =
    Register::new("REG_PLAYBACK_READPTR", 0x003020bc, Access::ReadOnly, Generation::Gen2);
/// Audio playback start address
pub const PLAYBACK_START: Register =
    Register::new("REG_PLAYBACK_START", 0x003020b4, Access::ReadWrite, Generation::Gen2);
/// Backlight PWM duty cycle, 0 to 128
pub const PWM_DUTY: Register =
    Register::new("REG_PWM_DUTY", 0x003020d4, Access::ReadWrite, Generation::Gen2);
/// Backlight PWM frequency
pub const PWM_HZ: Register =
    Register::new("REG_PWM_HZ", 0x003020d0, Access::ReadWrite, Generation::Gen2);
/// Render mode, 0 normal, 1 single line
pub const RENDERMODE: Register =
    Register::new("REG_RENDERMODE", 0x00302010, Access::ReadWrite, Generation::Gen2);
/// Screen rotation
pub const ROTATE: Register =
    Register::new("REG_ROTATE", 0x00302058, Access::ReadWrite, Generation::Gen2);
/// Snapshot format
pub const SNAPFORMAT: Register =
    Register::new("REG_SNAPFORMAT", 0x0030201c, Access::ReadWrite, Generation::Gen2);
/// Snapshot trigger
pub const SNAPSHOT: Register =
    Register::new("REG_SNAPSHOT", 0x00302018, Access::ReadWrite, Generation::Gen2);
/// Scanline select for single line render mode
pub const SNAPY: Register =
    Register::new("REG_SNAPY", 0x00302014, Access::ReadWrite, Generation::Gen2);
/// Sound effect select
pub const SOUND: Register =
    Register::new("REG_SOUND", 0x00302088, Access::ReadWrite, Generation::Gen2);
/// QSPI bus width and dummy cycles
pub const SPI_WIDTH: Register =
    Register::new("REG_SPI_WIDTH", 0x00302188, Access::ReadWrite, Generation::Gen2);
/// RGB output pin order
pub const SWIZZLE: Register =
    Register::new("REG_SWIZZLE", 0x00302064, Access::ReadWrite, Generation::Gen2);
/// Tag of the pixel at TAG_X, TAG_Y
pub const TAG: Register = Register::new("REG_TAG", 0x0030207c, Access::ReadOnly, Generation::Gen2);
/// X coordinate for tag lookup
pub const TAG_X: Register =
    Register::new("REG_TAG_X", 0x00302074, Access::ReadWrite, Generation::Gen2);
/// Y coordinate for tag lookup
pub const TAG_Y: Register =
    Register::new("REG_TAG_Y", 0x00302078, Access::ReadWrite, Generation::Gen2);
/// Live video tap CRC
pub const TAP_CRC: Register =
    Register::new("REG_TAP_CRC", 0x00302024, Access::ReadOnly, Generation::Gen2);
/// Live video tap mask
pub const TAP_MASK: Register =
    Register::new("REG_TAP_MASK", 0x00302028, Access::ReadWrite, Generation::Gen2);
/// Resistive touch ADC mode
pub const TOUCH_ADC_MODE: Register =
    Register::new("REG_TOUCH_ADC_MODE", 0x00302108, Access::ReadWrite, Generation::Gen2);
/// Resistive touch charge time
pub const TOUCH_CHARGE: Register =
    Register::new("REG_TOUCH_CHARGE", 0x0030210c, Access::ReadWrite, Generation::Gen2);
/// Resistive touch raw ADC values
pub const TOUCH_DIRECT_XY: Register =
    Register::new("REG_TOUCH_DIRECT_XY", 0x0030218c, Access::ReadOnly, Generation::Gen2);
/// Resistive touch raw pressure values
pub const TOUCH_DIRECT_Z1Z2: Register =
    Register::new("REG_TOUCH_DIRECT_Z1Z2", 0x00302190, Access::ReadOnly, Generation::Gen2);
/// Touch sampling mode
pub const TOUCH_MODE: Register =
    Register::new("REG_TOUCH_MODE", 0x00302104, Access::ReadWrite, Generation::Gen2);
/// Resistive touch oversampling factor
pub const TOUCH_OVERSAMPLE: Register =
    Register::new("REG_TOUCH_OVERSAMPLE", 0x00302114, Access::ReadWrite, Generation::Gen2);
/// Touch raw coordinates
pub const TOUCH_RAW_XY: Register =
    Register::new("REG_TOUCH_RAW_XY", 0x0030211c, Access::ReadOnly, Generation::Gen2);
/// Resistive touch resistance
pub const TOUCH_RZ: Register =
    Register::new("REG_TOUCH_RZ", 0x00302120, Access::ReadOnly, Generation::Gen2);
/// Resistive touch threshold
pub const TOUCH_RZTHRESH: Register =
    Register::new("REG_TOUCH_RZTHRESH", 0x00302118, Access::ReadWrite, Generation::Gen2);
/// Touch screen coordinates
pub const TOUCH_SCREEN_XY: Register =
    Register::new("REG_TOUCH_SCREEN_XY", 0x00302124, Access::ReadOnly, Generation::Gen2);
/// Resistive touch settle time
pub const TOUCH_SETTLE: Register =
    Register::new("REG_TOUCH_SETTLE", 0x00302110, Access::ReadWrite, Generation::Gen2);
/// Tag of touch point 0
pub const TOUCH_TAG: Register =
    Register::new("REG_TOUCH_TAG", 0x0030212c, Access::ReadOnly, Generation::Gen2);
/// Tag of touch point 1
pub const TOUCH_TAG1: Register =
    Register::new("REG_TOUCH_TAG1", 0x00302134, Access::ReadOnly, Generation::Gen2);
/// Coordinates used for TOUCH_TAG1
pub const TOUCH_TAG1_XY: Register =
    Register::new("REG_TOUCH_TAG1_XY", 0x00302130, Access::ReadOnly, Generation::Gen2);
/// Tag of touch point 2
pub const TOUCH_TAG2: Register =
    Register::new("REG_TOUCH_TAG2", 0x0030213c, Access::ReadOnly, Generation::Gen2);
/// Coordinates used for TOUCH_TAG2
pub const TOUCH_TAG2_XY: Register =
    Register::new("REG_TOUCH_TAG2_XY", 0x00302138, Access::ReadOnly, Generation::Gen2);
/// Tag of touch point 3
pub const TOUCH_TAG3: Register =
    Register::new("REG_TOUCH_TAG3", 0x00302144, Access::ReadOnly, Generation::Gen2);
/// Coordinates used for TOUCH_TAG3
pub const TOUCH_TAG3_XY: Register =
    Register::new("REG_TOUCH_TAG3_XY", 0x00302140, Access::ReadOnly, Generation::Gen2);
/// Tag of touch point 4
pub const TOUCH_TAG4: Register =
    Register::new("REG_TOUCH_TAG4", 0x0030214c, Access::ReadOnly, Generation::Gen2);
/// Coordinates used for TOUCH_TAG4
pub const TOUCH_TAG4_XY: Register =
    Register::new("REG_TOUCH_TAG4_XY", 0x00302148, Access::ReadOnly, Generation::Gen2);
/// Coordinates used for TOUCH_TAG
pub const TOUCH_TAG_XY: Register =
    Register::new("REG_TOUCH_TAG_XY", 0x00302128, Access::ReadOnly, Generation::Gen2);
/// Touch transform coefficient A
pub const TOUCH_TRANSFORM_A: Register =
    Register::new("REG_TOUCH_TRANSFORM_A", 0x00302150, Access::ReadWrite, Generation::Gen2);
/// Touch transform coefficient B
pub const TOUCH_TRANSFORM_B: Register =
    Register::new("REG_TOUCH_TRANSFORM_B", 0x00302154, Access::ReadWrite, Generation::Gen2);
/// Touch transform coefficient C
pub const TOUCH_TRANSFORM_C: Register =
    Register::new("REG_TOUCH_TRANSFORM_C", 0x00302158, Access::ReadWrite, Generation::Gen2);
/// Touch transform coefficient D
pub const TOUCH_TRANSFORM_D: Register =
    Register::new("REG_TOUCH_TRANSFORM_D", 0x0030215c, Access::ReadWrite, Generation::Gen2);
/// Touch transform coefficient E
pub const TOUCH_TRANSFORM_E: Register =
    Register::new("REG_TOUCH_TRANSFORM_E", 0x00302160, Access::ReadWrite, Generation::Gen2);
/// Touch transform coefficient F
pub const TOUCH_TRANSFORM_F: Register =
    Register::new("REG_TOUCH_TRANSFORM_F", 0x00302164, Access::ReadWrite, Generation::Gen2);
/// Tracker value of touch point 0
pub const TRACKER: Register =
    Register::new("REG_TRACKER", 0x00309000, Access::ReadOnly, Generation::Gen2);
/// Tracker value of touch point 1
pub const TRACKER_1: Register =
    Register::new("REG_TRACKER_1", 0x00309004, Access::ReadOnly, Generation::Gen2);
/// Tracker value of touch point 2
pub const TRACKER_2: Register =
    Register::new("REG_TRACKER_2", 0x00309008, Access::ReadOnly, Generation::Gen2);
/// Tracker value of touch point 3
pub const TRACKER_3: Register =
    Register::new("REG_TRACKER_3", 0x0030900c, Access::ReadOnly, Generation::Gen2);
/// Tracker value of touch point 4
pub const TRACKER_4: Register =
    Register::new("REG_TRACKER_4", 0x00309010, Access::ReadOnly, Generation::Gen2);
/// Internal clock trim
pub const TRIM: Register =
    Register::new("REG_TRIM", 0x00302180, Access::ReadWrite, Generation::Gen2);
/// Vertical total line count
pub const VCYCLE: Register =
    Register::new("REG_VCYCLE", 0x00302040, Access::ReadWrite, Generation::Gen2);
/// Vertical display start offset
pub const VOFFSET: Register =
    Register::new("REG_VOFFSET", 0x00302044, Access::ReadWrite, Generation::Gen2);
/// Audio playback volume
pub const VOL_PB: Register =
    Register::new("REG_VOL_PB", 0x00302080, Access::ReadWrite, Generation::Gen2);
/// Sound effect volume
pub const VOL_SOUND: Register =
    Register::new("REG_VOL_SOUND", 0x00302084, Access::ReadWrite, Generation::Gen2);
/// Vertical display line count
pub const VSIZE: Register =
    Register::new("REG_VSIZE", 0x00302048, Access::ReadWrite, Generation::Gen2);
/// Vertical sync fall offset
pub const VSYNC0: Register =
    Register::new("REG_VSYNC0", 0x0030204c, Access::ReadWrite, Generation::Gen2);
/// Vertical sync rise offset
pub const VSYNC1: Register =
    Register::new("REG_VSYNC1", 0x00302050, Access::ReadWrite, Generation::Gen2);

// ---- BT815 / BT816 registers -----------------------------------------------------------------

/// Reduce frame rate while the scene is static
pub const ADAPTIVE_FRAMERATE: Register =
    Register::new("REG_ADAPTIVE_FRAMERATE", 0x0030257c, Access::ReadWrite, Generation::Gen3);
/// Audio playback pause
pub const PLAYBACK_PAUSE: Register =
    Register::new("REG_PLAYBACK_PAUSE", 0x003025ec, Access::ReadWrite, Generation::Gen3);
/// External flash state
pub const FLASH_STATUS: Register =
    Register::new("REG_FLASH_STATUS", 0x003025f0, Access::ReadOnly, Generation::Gen3);
/// Detected flash size in MiB
pub const FLASH_SIZE: Register =
    Register::new("REG_FLASH_SIZE", 0x00309024, Access::ReadOnly, Generation::Gen3);
/// Video playback control
pub const PLAY_CONTROL: Register =
    Register::new("REG_PLAY_CONTROL", 0x0030914e, Access::ReadWrite, Generation::Gen3);
/// Coprocessor patch pointer
pub const COPRO_PATCH_DTR: Register =
    Register::new("REG_COPRO_PATCH_DTR", 0x00309162, Access::ReadWrite, Generation::Gen3);

// ---- BT817 / BT818 registers -----------------------------------------------------------------

/// Line underrun counter
pub const UNDERRUN: Register =
    Register::new("REG_UNDERRUN", 0x0030260c, Access::ReadOnly, Generation::Gen4);
/// Adaptive HSYNC maximum cycle count
pub const AH_HCYCLE_MAX: Register =
    Register::new("REG_AH_HCYCLE_MAX", 0x00302610, Access::ReadWrite, Generation::Gen4);
/// Pixel clock PLL configuration
pub const PCLK_FREQ: Register =
    Register::new("REG_PCLK_FREQ", 0x00302614, Access::ReadWrite, Generation::Gen4);
/// Double pixel output per clock
pub const PCLK_2X: Register =
    Register::new("REG_PCLK_2X", 0x00302618, Access::ReadWrite, Generation::Gen4);
/// Bitmask of running animation channels
pub const ANIM_ACTIVE: Register =
    Register::new("REG_ANIM_ACTIVE", 0x0030902c, Access::ReadOnly, Generation::Gen4);

/// Every register known to the crate, including ones not present on all generations
pub const ALL: &[Register] = &[
    ANA_COMP,
    BIST_EN,
    CLOCK,
    CMDB_SPACE,
    CMDB_WRITE,
    CMD_DL,
    CMD_READ,
    CMD_WRITE,
    CPURESET,
    CSPREAD,
    CTOUCH_EXTENDED,
    CTOUCH_TOUCH0_XY,
    CTOUCH_TOUCH4_X,
    CTOUCH_TOUCH4_Y,
    CTOUCH_TOUCH1_XY,
    CTOUCH_TOUCH2_XY,
    CTOUCH_TOUCH3_XY,
    TOUCH_CONFIG,
    DATESTAMP,
    DITHER,
    DLSWAP,
    FRAMES,
    FREQUENCY,
    GPIO,
    GPIOX,
    GPIOX_DIR,
    GPIO_DIR,
    HCYCLE,
    HOFFSET,
    HSIZE,
    HSYNC0,
    HSYNC1,
    ID,
    INT_EN,
    INT_FLAGS,
    INT_MASK,
    MACRO_0,
    MACRO_1,
    MEDIAFIFO_READ,
    MEDIAFIFO_WRITE,
    OUTBITS,
    PCLK,
    PCLK_POL,
    PLAY,
    PLAYBACK_FORMAT,
    PLAYBACK_FREQ,
    PLAYBACK_LENGTH,
    PLAYBACK_LOOP,
    PLAYBACK_PLAY,
    PLAYBACK_READPTR,
    PLAYBACK_START,
    PWM_DUTY,
    PWM_HZ,
    RENDERMODE,
    ROTATE,
    SNAPFORMAT,
    SNAPSHOT,
    SNAPY,
    SOUND,
    SPI_WIDTH,
    SWIZZLE,
    TAG,
    TAG_X,
    TAG_Y,
    TAP_CRC,
    TAP_MASK,
    TOUCH_ADC_MODE,
    TOUCH_CHARGE,
    TOUCH_DIRECT_XY,
    TOUCH_DIRECT_Z1Z2,
    TOUCH_MODE,
    TOUCH_OVERSAMPLE,
    TOUCH_RAW_XY,
    TOUCH_RZ,
    TOUCH_RZTHRESH,
    TOUCH_SCREEN_XY,
    TOUCH_SETTLE,
    TOUCH_TAG,
    TOUCH_TAG1,
    TOUCH_TAG1_XY,
    TOUCH_TAG2,
    TOUCH_TAG2_XY,
    TOUCH_TAG3,
    TOUCH_TAG3_XY,
    TOUCH_TAG4,
    TOUCH_TAG4_XY,
    TOUCH_TAG_XY,
    TOUCH_TRANSFORM_A,
    TOUCH_TRANSFORM_B,
    TOUCH_TRANSFORM_C,
    TOUCH_TRANSFORM_D,
    TOUCH_TRANSFORM_E,
    TOUCH_TRANSFORM_F,
    TRACKER,
    TRACKER_1,
    TRACKER_2,
    TRACKER_3,
    TRACKER_4,
    TRIM,
    VCYCLE,
    VOFFSET,
    VOL_PB,
    VOL_SOUND,
    VSIZE,
    VSYNC0,
    VSYNC1,
    ADAPTIVE_FRAMERATE,
    PLAYBACK_PAUSE,
    FLASH_STATUS,
    FLASH_SIZE,
    PLAY_CONTROL,
    COPRO_PATCH_DTR,
    UNDERRUN,
    AH_HCYCLE_MAX,
    PCLK_FREQ,
    PCLK_2X,
    ANIM_ACTIVE,
];

/// Register lookup bound to one chip generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMap {
    generation: Generation,
}

impl RegisterMap {
    /// Register lookup for `generation`
    pub const fn new(generation: Generation) -> Self {
        RegisterMap { generation }
    }

    /// Chip generation of the map
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Resolves the address of `reg`, failing for registers the chip lacks
    pub const fn address(&self, reg: Register) -> Result<u32, Unsupported> {
        match self.generation.require(reg.since) {
            Ok(()) => Ok(reg.addr),
            Err(e) => Err(e),
        }
    }

    /// Finds a register by name, with or without the `REG_` prefix
    pub fn lookup(&self, name: &str) -> Option<Register> {
        let name = name.strip_prefix("REG_").unwrap_or(name);
        self.iter().find(|reg| &reg.name[4..] == name)
    }

    /// All registers present on the configured generation
    pub fn iter(&self) -> impl Iterator<Item = Register> + '_ {
        ALL.iter()
            .copied()
            .filter(move |reg| self.generation.supports(reg.since))
    }
}
