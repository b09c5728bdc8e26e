//! Operand values for display list instructions and registers

use crate::generation::Generation;

/// Graphics primitive selected by BEGIN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Primitive {
    /// BITMAPS
    Bitmaps = 1,
    /// POINTS
    Points = 2,
    /// LINES
    Lines = 3,
    /// LINE_STRIP
    LineStrip = 4,
    /// EDGE_STRIP_R, fills right of the strip
    EdgeStripR = 5,
    /// EDGE_STRIP_L, fills left of the strip
    EdgeStripL = 6,
    /// EDGE_STRIP_A, fills above the strip
    EdgeStripA = 7,
    /// EDGE_STRIP_B, fills below the strip
    EdgeStripB = 8,
    /// RECTS
    Rects = 9,
}

/// Bitmap format field of BITMAP_LAYOUT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BitmapFormat {
    /// ARGB1555
    Argb1555 = 0,
    /// L1
    L1 = 1,
    /// L4
    L4 = 2,
    /// L8
    L8 = 3,
    /// RGB332
    Rgb332 = 4,
    /// ARGB2
    Argb2 = 5,
    /// ARGB4
    Argb4 = 6,
    /// RGB565
    Rgb565 = 7,
    /// PALETTED, FT80x only
    Paletted = 8,
    /// TEXT8X8
    Text8x8 = 9,
    /// TEXTVGA
    TextVga = 10,
    /// BARGRAPH
    Bargraph = 11,
    /// coprocessor internal format, 8 bit luminance with palette
    IntL8c = 12,
    /// coprocessor internal format, VGA text cells
    IntVga = 13,
    /// PALETTED565
    Paletted565 = 14,
    /// PALETTED4444
    Paletted4444 = 15,
    /// PALETTED8
    Paletted8 = 16,
    /// L2
    L2 = 17,
    /// coprocessor internal format, 8 bit grayscale
    IntG8 = 18,
    /// format is taken from BITMAP_EXT_FORMAT (gen3+)
    Glformat = 31,
}

impl BitmapFormat {
    /// Generation the format first appeared in
    pub const fn since(self) -> Generation {
        match self {
            BitmapFormat::Glformat => Generation::Gen3,
            _ => Generation::Gen2,
        }
    }
}

/// Format field of BITMAP_EXT_FORMAT (gen3+)
///
/// Accepts every [`BitmapFormat`] value plus the ASTC block formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ExtFormat {
    /// ARGB1555
    Argb1555 = 0,
    /// L1
    L1 = 1,
    /// L4
    L4 = 2,
    /// L8
    L8 = 3,
    /// RGB332
    Rgb332 = 4,
    /// ARGB2
    Argb2 = 5,
    /// ARGB4
    Argb4 = 6,
    /// RGB565
    Rgb565 = 7,
    /// TEXT8X8
    Text8x8 = 9,
    /// TEXTVGA
    TextVga = 10,
    /// BARGRAPH
    Bargraph = 11,
    /// coprocessor internal format, 8 bit luminance with palette
    IntL8c = 12,
    /// coprocessor internal format, VGA text cells
    IntVga = 13,
    /// PALETTED565
    Paletted565 = 14,
    /// PALETTED4444
    Paletted4444 = 15,
    /// PALETTED8
    Paletted8 = 16,
    /// L2
    L2 = 17,
    /// coprocessor internal format, 8 bit grayscale
    IntG8 = 18,
    /// COMPRESSED_RGBA_ASTC_4x4_KHR
    Astc4x4 = 37808,
    /// COMPRESSED_RGBA_ASTC_5x4_KHR
    Astc5x4 = 37809,
    /// COMPRESSED_RGBA_ASTC_5x5_KHR
    Astc5x5 = 37810,
    /// COMPRESSED_RGBA_ASTC_6x5_KHR
    Astc6x5 = 37811,
    /// COMPRESSED_RGBA_ASTC_6x6_KHR
    Astc6x6 = 37812,
    /// COMPRESSED_RGBA_ASTC_8x5_KHR
    Astc8x5 = 37813,
    /// COMPRESSED_RGBA_ASTC_8x6_KHR
    Astc8x6 = 37814,
    /// COMPRESSED_RGBA_ASTC_8x8_KHR
    Astc8x8 = 37815,
    /// COMPRESSED_RGBA_ASTC_10x5_KHR
    Astc10x5 = 37816,
    /// COMPRESSED_RGBA_ASTC_10x6_KHR
    Astc10x6 = 37817,
    /// COMPRESSED_RGBA_ASTC_10x8_KHR
    Astc10x8 = 37818,
    /// COMPRESSED_RGBA_ASTC_10x10_KHR
    Astc10x10 = 37819,
    /// COMPRESSED_RGBA_ASTC_12x10_KHR
    Astc12x10 = 37820,
    /// COMPRESSED_RGBA_ASTC_12x12_KHR
    Astc12x12 = 37821,
}

/// Sampling filter of BITMAP_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Filter {
    /// NEAREST
    Nearest = 0,
    /// BILINEAR
    Bilinear = 1,
}

/// Edge behaviour of BITMAP_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Wrap {
    /// BORDER
    Border = 0,
    /// REPEAT
    Repeat = 1,
}

/// Comparison used by ALPHA_FUNC and STENCIL_FUNC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TestFunc {
    /// NEVER
    Never = 0,
    /// LESS
    Less = 1,
    /// LEQUAL
    LEqual = 2,
    /// GREATER
    Greater = 3,
    /// GEQUAL
    GEqual = 4,
    /// EQUAL
    Equal = 5,
    /// NOTEQUAL
    NotEqual = 6,
    /// ALWAYS
    Always = 7,
}

/// Stencil update of STENCIL_OP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StencilOp {
    /// ZERO
    Zero = 0,
    /// KEEP
    Keep = 1,
    /// REPLACE
    Replace = 2,
    /// INCR
    Incr = 3,
    /// DECR
    Decr = 4,
    /// INVERT
    Invert = 5,
}

/// Source and destination factors of BLEND_FUNC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BlendFactor {
    /// ZERO
    Zero = 0,
    /// ONE
    One = 1,
    /// SRC_ALPHA
    SrcAlpha = 2,
    /// DST_ALPHA
    DstAlpha = 3,
    /// ONE_MINUS_SRC_ALPHA
    OneMinusSrcAlpha = 4,
    /// ONE_MINUS_DST_ALPHA
    OneMinusDstAlpha = 5,
}

/// Channel source of BITMAP_SWIZZLE (gen3+)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Swizzle {
    /// constant 0
    Zero = 0,
    /// constant 1
    One = 1,
    /// red channel
    Red = 2,
    /// green channel
    Green = 3,
    /// blue channel
    Blue = 4,
    /// alpha channel
    Alpha = 5,
}

/// Address space selected by BITMAP_SOURCE2 (gen3+)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SourceSpace {
    /// RAM_G
    RamG = 0,
    /// external flash
    Flash = 1,
}

/// Values written to REG_DLSWAP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DlSwap {
    /// read back once the swap happened
    Done = 0,
    /// swap after the current scanline
    Line = 1,
    /// swap after the current frame
    Frame = 2,
}

/// Values written to REG_TOUCH_MODE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchMode {
    /// touch sampling off
    Off = 0,
    /// one sample, then off
    OneShot = 1,
    /// one sample per frame
    Frame = 2,
    /// sample continuously
    Continuous = 3,
}

// ---- REG_INT_FLAGS / REG_INT_MASK bits ---------------------------------------------------------

/// display list swap happened
pub const INT_SWAP: u8 = 0x01;
/// touch detected
pub const INT_TOUCH: u8 = 0x02;
/// touch tag changed
pub const INT_TAG: u8 = 0x04;
/// sound effect ended
pub const INT_SOUND: u8 = 0x08;
/// audio playback ended
pub const INT_PLAYBACK: u8 = 0x10;
/// command ring empty
pub const INT_CMDEMPTY: u8 = 0x20;
/// CMD_INTERRUPT executed
pub const INT_CMDFLAG: u8 = 0x40;
/// touch conversion complete
pub const INT_CONVCOMPLETE: u8 = 0x80;

// ---- CLEAR mask bits -----------------------------------------------------------------

/// clear the color buffer
pub const CLR_COL: u8 = 0x4;
/// clear the stencil buffer
pub const CLR_STN: u8 = 0x2;
/// clear the tag buffer
pub const CLR_TAG: u8 = 0x1;
