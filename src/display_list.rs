//! Display list instruction encoding
//!
//! Each display list instruction is one 32 bit word. The opcode sits in bits
//! 31..24, except for VERTEX2F and VERTEX2II which use a two bit discriminator
//! in bits 31..30 and give the rest of the word to their operands.
//!
//! The field layout of every instruction is kept in one table, keyed by
//! instruction and layout [`Variant`]. Four bitmap transform instructions and
//! BITMAP_SOURCE have a second, extended layout on gen3+ chips. For the
//! transforms the two layouts are mutually exclusive: the legacy form is only
//! accepted on gen2, the extended form only on gen3+.
//!
//! Operands are masked to their field width. Out of range values are silently
//! truncated the same way the hardware macros do it, unless the [`Encoder`] is
//! switched to [`Validation::Strict`].

use core::fmt;

use embedded_graphics_core::{
    geometry::Point,
    pixelcolor::{Rgb888, RgbColor},
};

use crate::field::{self, Field};
use crate::generation::{Generation, Unsupported};
use crate::options::{
    BitmapFormat, BlendFactor, ExtFormat, Filter, Primitive, SourceSpace, StencilOp, Swizzle,
    TestFunc, Wrap,
};

/// Most operands any instruction carries
pub const MAX_OPERANDS: usize = 5;

/// Encoding and decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// instruction or operand value not available on the active generation
    Unsupported(Unsupported),
    /// operand does not fit its field, only raised in strict mode
    OutOfRange {
        /// field name
        field: &'static str,
        /// rejected value, two's complement for signed fields
        value: u32,
    },
    /// word is not a display list instruction for the active generation
    UnknownOpcode(u8),
    /// the instruction has no extended layout on any generation
    NoExtendedForm(InstructionId),
}

impl From<Unsupported> for Error {
    fn from(e: Unsupported) -> Self {
        Error::Unsupported(e)
    }
}

/// One encoded display list word
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DlCmd(u32);

impl DlCmd {
    /// Bytes per word in RAM_DL
    pub const LENGTH: u32 = 4;

    /// DISPLAY
    pub const DISPLAY: Self = DlCmd(0x0000_0000);
    /// END
    pub const END: Self = DlCmd(0x2100_0000);
    /// SAVE_CONTEXT
    pub const SAVE_CONTEXT: Self = DlCmd(0x2200_0000);
    /// RESTORE_CONTEXT
    pub const RESTORE_CONTEXT: Self = DlCmd(0x2300_0000);
    /// RETURN
    pub const RETURN: Self = DlCmd(0x2400_0000);
    /// NOP
    pub const NOP: Self = DlCmd(0x2D00_0000);

    /// Wraps a raw word, the caller is responsible for it being meaningful
    pub const fn from_raw(raw: u32) -> Self {
        DlCmd(raw)
    }

    /// The word as written to the chip
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Byte order expected by the chip
    pub const fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<DlCmd> for u32 {
    fn from(cmd: DlCmd) -> Self {
        cmd.0
    }
}

impl fmt::Debug for DlCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DlCmd({:#010x})", self.0)
    }
}

/// Where an instruction keeps its opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// eight bit opcode in bits 31..24
    Byte(u8),
    /// two bit discriminator in bits 31..30
    Vertex(u8),
}

impl Opcode {
    /// Opcode shifted into place
    pub const fn word(self) -> u32 {
        match self {
            Opcode::Byte(op) => (op as u32) << 24,
            Opcode::Vertex(op) => ((op as u32) & 0b11) << 30,
        }
    }

    /// True if `word` carries this opcode
    pub const fn matches(self, word: u32) -> bool {
        match self {
            Opcode::Byte(op) => (word >> 24) as u8 == op,
            Opcode::Vertex(op) => (word >> 30) as u8 == op & 0b11,
        }
    }
}

/// Opcode plus field descriptors of one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// opcode or vertex discriminator
    pub opcode: Opcode,
    /// operands in argument order
    pub fields: &'static [Field],
}

impl Layout {
    /// Packs `values` in field order, truncating each to its width
    pub const fn pack(&self, values: &[u32]) -> u32 {
        field::pack(self.opcode.word(), self.fields, values)
    }

    /// Extracts all operands of `word`, signed fields sign extended
    pub fn unpack(&self, word: u32) -> [u32; MAX_OPERANDS] {
        let mut values = [0; MAX_OPERANDS];
        for (value, field) in values.iter_mut().zip(self.fields) {
            *value = field.extract_value(word);
        }
        values
    }
}

/// Layout selection for instructions with more than one encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// encoding of the FT81x instruction set
    Base,
    /// gen3+ redefinition
    Extended,
}

/// Bitmap transform matrix coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    /// BITMAP_TRANSFORM_A
    A,
    /// BITMAP_TRANSFORM_B
    B,
    /// BITMAP_TRANSFORM_C
    C,
    /// BITMAP_TRANSFORM_D
    D,
    /// BITMAP_TRANSFORM_E
    E,
    /// BITMAP_TRANSFORM_F
    F,
}

impl Coefficient {
    /// Instruction that sets this coefficient
    pub const fn id(self) -> InstructionId {
        match self {
            Coefficient::A => InstructionId::BitmapTransformA,
            Coefficient::B => InstructionId::BitmapTransformB,
            Coefficient::C => InstructionId::BitmapTransformC,
            Coefficient::D => InstructionId::BitmapTransformD,
            Coefficient::E => InstructionId::BitmapTransformE,
            Coefficient::F => InstructionId::BitmapTransformF,
        }
    }

    /// C and F are translations and were never redefined
    pub const fn has_precision(self) -> bool {
        !matches!(self, Coefficient::C | Coefficient::F)
    }
}

/// Fixed point format of an extended bitmap transform value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Precision {
    /// signed 8.8
    Fixed8_8 = 0,
    /// signed 1.15
    Fixed1_15 = 1,
}

/// Display list instruction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionId {
    /// DISPLAY
    Display,
    /// BITMAP_SOURCE
    BitmapSource,
    /// CLEAR_COLOR_RGB
    ClearColorRgb,
    /// TAG
    Tag,
    /// COLOR_RGB
    ColorRgb,
    /// BITMAP_HANDLE
    BitmapHandle,
    /// CELL
    Cell,
    /// BITMAP_LAYOUT
    BitmapLayout,
    /// BITMAP_SIZE
    BitmapSize,
    /// ALPHA_FUNC
    AlphaFunc,
    /// STENCIL_FUNC
    StencilFunc,
    /// BLEND_FUNC
    BlendFunc,
    /// STENCIL_OP
    StencilOp,
    /// POINT_SIZE
    PointSize,
    /// LINE_WIDTH
    LineWidth,
    /// CLEAR_COLOR_A
    ClearColorA,
    /// COLOR_A
    ColorA,
    /// CLEAR_STENCIL
    ClearStencil,
    /// CLEAR_TAG
    ClearTag,
    /// STENCIL_MASK
    StencilMask,
    /// TAG_MASK
    TagMask,
    /// BITMAP_TRANSFORM_A
    BitmapTransformA,
    /// BITMAP_TRANSFORM_B
    BitmapTransformB,
    /// BITMAP_TRANSFORM_C
    BitmapTransformC,
    /// BITMAP_TRANSFORM_D
    BitmapTransformD,
    /// BITMAP_TRANSFORM_E
    BitmapTransformE,
    /// BITMAP_TRANSFORM_F
    BitmapTransformF,
    /// SCISSOR_XY
    ScissorXy,
    /// SCISSOR_SIZE
    ScissorSize,
    /// CALL
    Call,
    /// JUMP
    Jump,
    /// BEGIN
    Begin,
    /// COLOR_MASK
    ColorMask,
    /// END
    End,
    /// SAVE_CONTEXT
    SaveContext,
    /// RESTORE_CONTEXT
    RestoreContext,
    /// RETURN
    Return,
    /// MACRO
    Macro,
    /// CLEAR
    Clear,
    /// VERTEX_FORMAT
    VertexFormat,
    /// BITMAP_LAYOUT_H
    BitmapLayoutH,
    /// BITMAP_SIZE_H
    BitmapSizeH,
    /// PALETTE_SOURCE
    PaletteSource,
    /// VERTEX_TRANSLATE_X
    VertexTranslateX,
    /// VERTEX_TRANSLATE_Y
    VertexTranslateY,
    /// NOP
    Nop,
    /// BITMAP_EXT_FORMAT
    BitmapExtFormat,
    /// BITMAP_SWIZZLE
    BitmapSwizzle,
    /// INT_FRR
    IntFrr,
    /// VERTEX2F
    Vertex2f,
    /// VERTEX2II
    Vertex2ii,
}

impl InstructionId {
    /// Every instruction kind in opcode order
    pub const ALL: [InstructionId; 51] = [
        InstructionId::Display,
        InstructionId::BitmapSource,
        InstructionId::ClearColorRgb,
        InstructionId::Tag,
        InstructionId::ColorRgb,
        InstructionId::BitmapHandle,
        InstructionId::Cell,
        InstructionId::BitmapLayout,
        InstructionId::BitmapSize,
        InstructionId::AlphaFunc,
        InstructionId::StencilFunc,
        InstructionId::BlendFunc,
        InstructionId::StencilOp,
        InstructionId::PointSize,
        InstructionId::LineWidth,
        InstructionId::ClearColorA,
        InstructionId::ColorA,
        InstructionId::ClearStencil,
        InstructionId::ClearTag,
        InstructionId::StencilMask,
        InstructionId::TagMask,
        InstructionId::BitmapTransformA,
        InstructionId::BitmapTransformB,
        InstructionId::BitmapTransformC,
        InstructionId::BitmapTransformD,
        InstructionId::BitmapTransformE,
        InstructionId::BitmapTransformF,
        InstructionId::ScissorXy,
        InstructionId::ScissorSize,
        InstructionId::Call,
        InstructionId::Jump,
        InstructionId::Begin,
        InstructionId::ColorMask,
        InstructionId::End,
        InstructionId::SaveContext,
        InstructionId::RestoreContext,
        InstructionId::Return,
        InstructionId::Macro,
        InstructionId::Clear,
        InstructionId::VertexFormat,
        InstructionId::BitmapLayoutH,
        InstructionId::BitmapSizeH,
        InstructionId::PaletteSource,
        InstructionId::VertexTranslateX,
        InstructionId::VertexTranslateY,
        InstructionId::Nop,
        InstructionId::BitmapExtFormat,
        InstructionId::BitmapSwizzle,
        InstructionId::IntFrr,
        InstructionId::Vertex2f,
        InstructionId::Vertex2ii,
    ];

    /// Opcode shared by all layouts of the instruction
    pub const fn opcode(self) -> Opcode {
        use InstructionId::*;
        match self {
            Display => Opcode::Byte(0x00),
            BitmapSource => Opcode::Byte(0x01),
            ClearColorRgb => Opcode::Byte(0x02),
            Tag => Opcode::Byte(0x03),
            ColorRgb => Opcode::Byte(0x04),
            BitmapHandle => Opcode::Byte(0x05),
            Cell => Opcode::Byte(0x06),
            BitmapLayout => Opcode::Byte(0x07),
            BitmapSize => Opcode::Byte(0x08),
            AlphaFunc => Opcode::Byte(0x09),
            StencilFunc => Opcode::Byte(0x0A),
            BlendFunc => Opcode::Byte(0x0B),
            StencilOp => Opcode::Byte(0x0C),
            PointSize => Opcode::Byte(0x0D),
            LineWidth => Opcode::Byte(0x0E),
            ClearColorA => Opcode::Byte(0x0F),
            ColorA => Opcode::Byte(0x10),
            ClearStencil => Opcode::Byte(0x11),
            ClearTag => Opcode::Byte(0x12),
            StencilMask => Opcode::Byte(0x13),
            TagMask => Opcode::Byte(0x14),
            BitmapTransformA => Opcode::Byte(0x15),
            BitmapTransformB => Opcode::Byte(0x16),
            BitmapTransformC => Opcode::Byte(0x17),
            BitmapTransformD => Opcode::Byte(0x18),
            BitmapTransformE => Opcode::Byte(0x19),
            BitmapTransformF => Opcode::Byte(0x1A),
            ScissorXy => Opcode::Byte(0x1B),
            ScissorSize => Opcode::Byte(0x1C),
            Call => Opcode::Byte(0x1D),
            Jump => Opcode::Byte(0x1E),
            Begin => Opcode::Byte(0x1F),
            ColorMask => Opcode::Byte(0x20),
            End => Opcode::Byte(0x21),
            SaveContext => Opcode::Byte(0x22),
            RestoreContext => Opcode::Byte(0x23),
            Return => Opcode::Byte(0x24),
            Macro => Opcode::Byte(0x25),
            Clear => Opcode::Byte(0x26),
            VertexFormat => Opcode::Byte(0x27),
            BitmapLayoutH => Opcode::Byte(0x28),
            BitmapSizeH => Opcode::Byte(0x29),
            PaletteSource => Opcode::Byte(0x2A),
            VertexTranslateX => Opcode::Byte(0x2B),
            VertexTranslateY => Opcode::Byte(0x2C),
            Nop => Opcode::Byte(0x2D),
            BitmapExtFormat => Opcode::Byte(0x2E),
            BitmapSwizzle => Opcode::Byte(0x2F),
            IntFrr => Opcode::Byte(0x30),
            Vertex2f => Opcode::Vertex(0b01),
            Vertex2ii => Opcode::Vertex(0b10),
        }
    }

    /// Generation the instruction first appeared in
    pub const fn since(self) -> Generation {
        match self {
            InstructionId::BitmapExtFormat
            | InstructionId::BitmapSwizzle
            | InstructionId::IntFrr => Generation::Gen3,
            _ => Generation::Gen2,
        }
    }

    /// Instructions whose gen3 layout replaces the gen2 one
    pub const fn redefined(self) -> bool {
        matches!(
            self,
            InstructionId::BitmapTransformA
                | InstructionId::BitmapTransformB
                | InstructionId::BitmapTransformD
                | InstructionId::BitmapTransformE
        )
    }

    /// Identifies the instruction held in `word`, regardless of generation
    pub fn from_word(word: u32) -> Option<InstructionId> {
        InstructionId::ALL
            .into_iter()
            .find(|id| id.opcode().matches(word))
    }

    /// Layout for `variant`, `None` if the instruction has no such variant
    pub const fn layout(self, variant: Variant) -> Option<&'static Layout> {
        use InstructionId::*;
        match (self, variant) {
            (BitmapSource, Variant::Extended) => Some(&layouts::BITMAP_SOURCE2),
            (BitmapTransformA, Variant::Extended) => Some(&layouts::BITMAP_TRANSFORM_A_EXT),
            (BitmapTransformB, Variant::Extended) => Some(&layouts::BITMAP_TRANSFORM_B_EXT),
            (BitmapTransformD, Variant::Extended) => Some(&layouts::BITMAP_TRANSFORM_D_EXT),
            (BitmapTransformE, Variant::Extended) => Some(&layouts::BITMAP_TRANSFORM_E_EXT),
            (_, Variant::Extended) => None,
            (Display, Variant::Base) => Some(&layouts::DISPLAY),
            (BitmapSource, Variant::Base) => Some(&layouts::BITMAP_SOURCE),
            (ClearColorRgb, Variant::Base) => Some(&layouts::CLEAR_COLOR_RGB),
            (Tag, Variant::Base) => Some(&layouts::TAG),
            (ColorRgb, Variant::Base) => Some(&layouts::COLOR_RGB),
            (BitmapHandle, Variant::Base) => Some(&layouts::BITMAP_HANDLE),
            (Cell, Variant::Base) => Some(&layouts::CELL),
            (BitmapLayout, Variant::Base) => Some(&layouts::BITMAP_LAYOUT),
            (BitmapSize, Variant::Base) => Some(&layouts::BITMAP_SIZE),
            (AlphaFunc, Variant::Base) => Some(&layouts::ALPHA_FUNC),
            (StencilFunc, Variant::Base) => Some(&layouts::STENCIL_FUNC),
            (BlendFunc, Variant::Base) => Some(&layouts::BLEND_FUNC),
            (StencilOp, Variant::Base) => Some(&layouts::STENCIL_OP),
            (PointSize, Variant::Base) => Some(&layouts::POINT_SIZE),
            (LineWidth, Variant::Base) => Some(&layouts::LINE_WIDTH),
            (ClearColorA, Variant::Base) => Some(&layouts::CLEAR_COLOR_A),
            (ColorA, Variant::Base) => Some(&layouts::COLOR_A),
            (ClearStencil, Variant::Base) => Some(&layouts::CLEAR_STENCIL),
            (ClearTag, Variant::Base) => Some(&layouts::CLEAR_TAG),
            (StencilMask, Variant::Base) => Some(&layouts::STENCIL_MASK),
            (TagMask, Variant::Base) => Some(&layouts::TAG_MASK),
            (BitmapTransformA, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_A),
            (BitmapTransformB, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_B),
            (BitmapTransformC, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_C),
            (BitmapTransformD, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_D),
            (BitmapTransformE, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_E),
            (BitmapTransformF, Variant::Base) => Some(&layouts::BITMAP_TRANSFORM_F),
            (ScissorXy, Variant::Base) => Some(&layouts::SCISSOR_XY),
            (ScissorSize, Variant::Base) => Some(&layouts::SCISSOR_SIZE),
            (Call, Variant::Base) => Some(&layouts::CALL),
            (Jump, Variant::Base) => Some(&layouts::JUMP),
            (Begin, Variant::Base) => Some(&layouts::BEGIN),
            (ColorMask, Variant::Base) => Some(&layouts::COLOR_MASK),
            (End, Variant::Base) => Some(&layouts::END),
            (SaveContext, Variant::Base) => Some(&layouts::SAVE_CONTEXT),
            (RestoreContext, Variant::Base) => Some(&layouts::RESTORE_CONTEXT),
            (Return, Variant::Base) => Some(&layouts::RETURN),
            (Macro, Variant::Base) => Some(&layouts::MACRO),
            (Clear, Variant::Base) => Some(&layouts::CLEAR),
            (VertexFormat, Variant::Base) => Some(&layouts::VERTEX_FORMAT),
            (BitmapLayoutH, Variant::Base) => Some(&layouts::BITMAP_LAYOUT_H),
            (BitmapSizeH, Variant::Base) => Some(&layouts::BITMAP_SIZE_H),
            (PaletteSource, Variant::Base) => Some(&layouts::PALETTE_SOURCE),
            (VertexTranslateX, Variant::Base) => Some(&layouts::VERTEX_TRANSLATE_X),
            (VertexTranslateY, Variant::Base) => Some(&layouts::VERTEX_TRANSLATE_Y),
            (Nop, Variant::Base) => Some(&layouts::NOP),
            (BitmapExtFormat, Variant::Base) => Some(&layouts::BITMAP_EXT_FORMAT),
            (BitmapSwizzle, Variant::Base) => Some(&layouts::BITMAP_SWIZZLE),
            (IntFrr, Variant::Base) => Some(&layouts::INT_FRR),
            (Vertex2f, Variant::Base) => Some(&layouts::VERTEX2F),
            (Vertex2ii, Variant::Base) => Some(&layouts::VERTEX2II),
        }
    }

    /// Variant a word of this kind is read with on `generation`
    pub const fn native_variant(self, generation: Generation) -> Variant {
        if generation.supports(Generation::Gen3) && self.layout(Variant::Extended).is_some() {
            Variant::Extended
        } else {
            Variant::Base
        }
    }
}

/// Field tables of every instruction
pub mod layouts {
    use super::{Layout, Opcode};
    use crate::field::Field;

    macro_rules! byte {
        ($op:expr, $fields:expr $(,)?) => {
            Layout {
                opcode: Opcode::Byte($op),
                fields: $fields,
            }
        };
    }

    const RGB: &[Field] = &[
        Field::new("red", 8, 16),
        Field::new("green", 8, 8),
        Field::new("blue", 8, 0),
    ];
    const TRANSFORM_17: &[Field] = &[Field::signed("value", 17, 0)];
    const TRANSFORM_24: &[Field] = &[Field::signed("value", 24, 0)];
    const TRANSFORM_EXT: &[Field] = &[
        Field::new("precision", 1, 17),
        Field::signed("value", 17, 0),
    ];

    /// DISPLAY
    pub const DISPLAY: Layout = byte!(0x00, &[]);
    /// BITMAP_SOURCE
    pub const BITMAP_SOURCE: Layout = byte!(0x01, &[Field::new("addr", 22, 0)]);
    /// BITMAP_SOURCE with address space selector (gen3+)
    pub const BITMAP_SOURCE2: Layout =
        byte!(0x01, &[Field::new("space", 1, 23), Field::new("addr", 23, 0)]);
    /// CLEAR_COLOR_RGB
    pub const CLEAR_COLOR_RGB: Layout = byte!(0x02, RGB);
    /// TAG
    pub const TAG: Layout = byte!(0x03, &[Field::new("tag", 8, 0)]);
    /// COLOR_RGB
    pub const COLOR_RGB: Layout = byte!(0x04, RGB);
    /// BITMAP_HANDLE
    pub const BITMAP_HANDLE: Layout = byte!(0x05, &[Field::new("handle", 5, 0)]);
    /// CELL
    pub const CELL: Layout = byte!(0x06, &[Field::new("cell", 7, 0)]);
    /// BITMAP_LAYOUT
    pub const BITMAP_LAYOUT: Layout = byte!(
        0x07,
        &[
            Field::new("format", 5, 19),
            Field::new("linestride", 10, 9),
            Field::new("height", 9, 0),
        ],
    );
    /// BITMAP_SIZE
    pub const BITMAP_SIZE: Layout = byte!(
        0x08,
        &[
            Field::new("filter", 1, 20),
            Field::new("wrapx", 1, 19),
            Field::new("wrapy", 1, 18),
            Field::new("width", 9, 9),
            Field::new("height", 9, 0),
        ],
    );
    /// ALPHA_FUNC
    pub const ALPHA_FUNC: Layout =
        byte!(0x09, &[Field::new("func", 3, 8), Field::new("ref", 8, 0)]);
    /// STENCIL_FUNC
    pub const STENCIL_FUNC: Layout = byte!(
        0x0A,
        &[
            Field::new("func", 3, 16),
            Field::new("ref", 8, 8),
            Field::new("mask", 8, 0),
        ],
    );
    /// BLEND_FUNC
    pub const BLEND_FUNC: Layout = byte!(0x0B, &[Field::new("src", 3, 3), Field::new("dst", 3, 0)]);
    /// STENCIL_OP
    pub const STENCIL_OP: Layout =
        byte!(0x0C, &[Field::new("sfail", 3, 3), Field::new("spass", 3, 0)]);
    /// POINT_SIZE
    pub const POINT_SIZE: Layout = byte!(0x0D, &[Field::new("size", 13, 0)]);
    /// LINE_WIDTH
    pub const LINE_WIDTH: Layout = byte!(0x0E, &[Field::new("width", 12, 0)]);
    /// CLEAR_COLOR_A
    pub const CLEAR_COLOR_A: Layout = byte!(0x0F, &[Field::new("alpha", 8, 0)]);
    /// COLOR_A
    pub const COLOR_A: Layout = byte!(0x10, &[Field::new("alpha", 8, 0)]);
    /// CLEAR_STENCIL
    pub const CLEAR_STENCIL: Layout = byte!(0x11, &[Field::new("s", 8, 0)]);
    /// CLEAR_TAG
    pub const CLEAR_TAG: Layout = byte!(0x12, &[Field::new("tag", 8, 0)]);
    /// STENCIL_MASK
    pub const STENCIL_MASK: Layout = byte!(0x13, &[Field::new("mask", 8, 0)]);
    /// TAG_MASK
    pub const TAG_MASK: Layout = byte!(0x14, &[Field::new("mask", 1, 0)]);
    /// BITMAP_TRANSFORM_A
    pub const BITMAP_TRANSFORM_A: Layout = byte!(0x15, TRANSFORM_17);
    /// BITMAP_TRANSFORM_B
    pub const BITMAP_TRANSFORM_B: Layout = byte!(0x16, TRANSFORM_17);
    /// BITMAP_TRANSFORM_C
    pub const BITMAP_TRANSFORM_C: Layout = byte!(0x17, TRANSFORM_24);
    /// BITMAP_TRANSFORM_D
    pub const BITMAP_TRANSFORM_D: Layout = byte!(0x18, TRANSFORM_17);
    /// BITMAP_TRANSFORM_E
    pub const BITMAP_TRANSFORM_E: Layout = byte!(0x19, TRANSFORM_17);
    /// BITMAP_TRANSFORM_F
    pub const BITMAP_TRANSFORM_F: Layout = byte!(0x1A, TRANSFORM_24);
    /// BITMAP_TRANSFORM_A with precision bit (gen3+)
    pub const BITMAP_TRANSFORM_A_EXT: Layout = byte!(0x15, TRANSFORM_EXT);
    /// BITMAP_TRANSFORM_B with precision bit (gen3+)
    pub const BITMAP_TRANSFORM_B_EXT: Layout = byte!(0x16, TRANSFORM_EXT);
    /// BITMAP_TRANSFORM_D with precision bit (gen3+)
    pub const BITMAP_TRANSFORM_D_EXT: Layout = byte!(0x18, TRANSFORM_EXT);
    /// BITMAP_TRANSFORM_E with precision bit (gen3+)
    pub const BITMAP_TRANSFORM_E_EXT: Layout = byte!(0x19, TRANSFORM_EXT);
    /// SCISSOR_XY
    pub const SCISSOR_XY: Layout = byte!(0x1B, &[Field::new("x", 11, 11), Field::new("y", 11, 0)]);
    /// SCISSOR_SIZE
    pub const SCISSOR_SIZE: Layout =
        byte!(0x1C, &[Field::new("width", 12, 12), Field::new("height", 12, 0)]);
    /// CALL
    pub const CALL: Layout = byte!(0x1D, &[Field::new("dest", 16, 0)]);
    /// JUMP
    pub const JUMP: Layout = byte!(0x1E, &[Field::new("dest", 16, 0)]);
    /// BEGIN
    pub const BEGIN: Layout = byte!(0x1F, &[Field::new("prim", 4, 0)]);
    /// COLOR_MASK
    pub const COLOR_MASK: Layout = byte!(
        0x20,
        &[
            Field::new("r", 1, 3),
            Field::new("g", 1, 2),
            Field::new("b", 1, 1),
            Field::new("a", 1, 0),
        ],
    );
    /// END
    pub const END: Layout = byte!(0x21, &[]);
    /// SAVE_CONTEXT
    pub const SAVE_CONTEXT: Layout = byte!(0x22, &[]);
    /// RESTORE_CONTEXT
    pub const RESTORE_CONTEXT: Layout = byte!(0x23, &[]);
    /// RETURN
    pub const RETURN: Layout = byte!(0x24, &[]);
    /// MACRO
    pub const MACRO: Layout = byte!(0x25, &[Field::new("m", 1, 0)]);
    /// CLEAR
    pub const CLEAR: Layout = byte!(
        0x26,
        &[
            Field::new("c", 1, 2),
            Field::new("s", 1, 1),
            Field::new("t", 1, 0),
        ],
    );
    /// VERTEX_FORMAT
    pub const VERTEX_FORMAT: Layout = byte!(0x27, &[Field::new("frac", 3, 0)]);
    /// BITMAP_LAYOUT_H
    pub const BITMAP_LAYOUT_H: Layout =
        byte!(0x28, &[Field::new("linestride", 2, 2), Field::new("height", 2, 0)]);
    /// BITMAP_SIZE_H
    pub const BITMAP_SIZE_H: Layout =
        byte!(0x29, &[Field::new("width", 2, 2), Field::new("height", 2, 0)]);
    /// PALETTE_SOURCE
    pub const PALETTE_SOURCE: Layout = byte!(0x2A, &[Field::new("addr", 22, 0)]);
    /// VERTEX_TRANSLATE_X
    pub const VERTEX_TRANSLATE_X: Layout = byte!(0x2B, &[Field::signed("x", 17, 0)]);
    /// VERTEX_TRANSLATE_Y
    pub const VERTEX_TRANSLATE_Y: Layout = byte!(0x2C, &[Field::signed("y", 17, 0)]);
    /// NOP
    pub const NOP: Layout = byte!(0x2D, &[]);
    /// BITMAP_EXT_FORMAT
    pub const BITMAP_EXT_FORMAT: Layout = byte!(0x2E, &[Field::new("format", 16, 0)]);
    /// BITMAP_SWIZZLE
    pub const BITMAP_SWIZZLE: Layout = byte!(
        0x2F,
        &[
            Field::new("r", 3, 9),
            Field::new("g", 3, 6),
            Field::new("b", 3, 3),
            Field::new("a", 3, 0),
        ],
    );
    /// INT_FRR
    pub const INT_FRR: Layout = byte!(0x30, &[]);
    /// VERTEX2F
    pub const VERTEX2F: Layout = Layout {
        opcode: Opcode::Vertex(0b01),
        fields: &[Field::signed("x", 15, 15), Field::signed("y", 15, 0)],
    };
    /// VERTEX2II
    pub const VERTEX2II: Layout = Layout {
        opcode: Opcode::Vertex(0b10),
        fields: &[
            Field::new("x", 9, 21),
            Field::new("y", 9, 12),
            Field::new("handle", 5, 7),
            Field::new("cell", 7, 0),
        ],
    };
}

/// A decoded or to-be-encoded display list instruction
///
/// Operands are kept as raw field values so that decoding never fails on
/// values the typed helpers of [`Encoder`] would not produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// End of the display list
    Display,
    /// Bitmap address in RAM_G
    BitmapSource {
        /// address in RAM_G
        addr: u32,
    },
    /// BITMAP_SOURCE with address space selector (gen3+)
    BitmapSource2 {
        /// 0 for RAM_G, 1 for flash
        space: u8,
        /// address in the selected space
        addr: u32,
    },
    /// Color used by CLEAR
    ClearColorRgb {
        /// red channel
        red: u8,
        /// green channel
        green: u8,
        /// blue channel
        blue: u8,
    },
    /// Tag written for the following primitives
    Tag {
        /// tag value
        tag: u8,
    },
    /// Current drawing color
    ColorRgb {
        /// red channel
        red: u8,
        /// green channel
        green: u8,
        /// blue channel
        blue: u8,
    },
    /// Selects the bitmap handle
    BitmapHandle {
        /// bitmap handle
        handle: u8,
    },
    /// Bitmap cell drawn by VERTEX2F
    Cell {
        /// bitmap cell
        cell: u8,
    },
    /// Bitmap format, line stride and height
    BitmapLayout {
        /// format code
        format: u8,
        /// bytes per line
        linestride: u16,
        /// height in lines
        height: u16,
    },
    /// On screen bitmap size, filter and wrap
    BitmapSize {
        /// filter code
        filter: u8,
        /// horizontal wrap code
        wrap_x: u8,
        /// vertical wrap code
        wrap_y: u8,
        /// width in pixels
        width: u16,
        /// height in pixels
        height: u16,
    },
    /// Alpha test
    AlphaFunc {
        /// test function code
        func: u8,
        /// reference value
        reference: u8,
    },
    /// Stencil test
    StencilFunc {
        /// test function code
        func: u8,
        /// reference value
        reference: u8,
        /// mask applied to reference and stencil
        mask: u8,
    },
    /// Blend factors
    BlendFunc {
        /// source factor code
        src: u8,
        /// destination factor code
        dst: u8,
    },
    /// Stencil update on test fail and pass
    StencilOp {
        /// operation on test fail
        sfail: u8,
        /// operation on test pass
        spass: u8,
    },
    /// Point radius in 1/16 pixel
    PointSize {
        /// radius in 1/16 pixel
        size: u16,
    },
    /// Line width in 1/16 pixel
    LineWidth {
        /// width
        width: u16,
    },
    /// Alpha used by CLEAR
    ClearColorA {
        /// alpha
        alpha: u8,
    },
    /// Current drawing alpha
    ColorA {
        /// alpha
        alpha: u8,
    },
    /// Stencil value used by CLEAR
    ClearStencil {
        /// stencil value
        value: u8,
    },
    /// Tag value used by CLEAR
    ClearTag {
        /// tag value
        tag: u8,
    },
    /// Stencil buffer write mask
    StencilMask {
        /// write mask
        mask: u8,
    },
    /// Tag buffer write enable
    TagMask {
        /// write the tag buffer
        mask: bool,
    },
    /// gen2 layout for A, B, D and E, every generation for C and F
    BitmapTransform {
        /// matrix coefficient
        coefficient: Coefficient,
        /// coefficient, 8.8 or 24 bit translation
        value: i32,
    },
    /// gen3+ layout for A, B, D and E
    BitmapTransformExt {
        /// matrix coefficient
        coefficient: Coefficient,
        /// fixed point format
        precision: Precision,
        /// coefficient in the selected precision
        value: i32,
    },
    /// Top left corner of the scissor clip
    ScissorXy {
        /// x coordinate
        x: u16,
        /// y coordinate
        y: u16,
    },
    /// Size of the scissor clip
    ScissorSize {
        /// width in pixels
        width: u16,
        /// height in pixels
        height: u16,
    },
    /// Calls the display list subroutine at a word index
    Call {
        /// word index in RAM_DL
        dest: u16,
    },
    /// Continues at a word index
    Jump {
        /// word index in RAM_DL
        dest: u16,
    },
    /// Starts a primitive
    Begin {
        /// primitive code
        prim: u8,
    },
    /// Color buffer write mask
    ColorMask {
        /// write red
        r: bool,
        /// write green
        g: bool,
        /// write blue
        b: bool,
        /// write alpha
        a: bool,
    },
    /// Ends the primitive
    End,
    /// Pushes the graphics context
    SaveContext,
    /// Pops the graphics context
    RestoreContext,
    /// Returns from CALL
    Return,
    /// Executes REG_MACRO_0 or REG_MACRO_1
    Macro {
        /// macro register, 0 or 1
        index: u8,
    },
    /// Clears the color, stencil and tag buffers
    Clear {
        /// clear the color buffer
        color: bool,
        /// clear the stencil buffer
        stencil: bool,
        /// clear the tag buffer
        tag: bool,
    },
    /// Fractional bits of VERTEX2F coordinates
    VertexFormat {
        /// fractional bits, 0 to 4
        frac: u8,
    },
    /// upper two bits of the BITMAP_LAYOUT line stride and height
    BitmapLayoutH {
        /// line stride bits 11..10
        linestride: u8,
        /// height bits 10..9
        height: u8,
    },
    /// upper two bits of the BITMAP_SIZE width and height
    BitmapSizeH {
        /// width bits 10..9
        width: u8,
        /// height bits 10..9
        height: u8,
    },
    /// Palette address in RAM_G
    PaletteSource {
        /// address in RAM_G
        addr: u32,
    },
    /// Horizontal vertex offset in 1/16 pixel
    VertexTranslateX {
        /// offset in 1/16 pixel
        x: i32,
    },
    /// Vertical vertex offset in 1/16 pixel
    VertexTranslateY {
        /// offset in 1/16 pixel
        y: i32,
    },
    /// No operation
    Nop,
    /// Extended bitmap format (gen3+)
    BitmapExtFormat {
        /// extended format code
        format: u16,
    },
    /// Channel swizzle of the bitmap (gen3+)
    BitmapSwizzle {
        /// source of red
        r: u8,
        /// source of green
        g: u8,
        /// source of blue
        b: u8,
        /// source of alpha
        a: u8,
    },
    /// Reserved for the coprocessor (gen3+)
    IntFrr,
    /// Vertex in VERTEX_FORMAT units
    Vertex2f {
        /// x in VERTEX_FORMAT units
        x: i16,
        /// y in VERTEX_FORMAT units
        y: i16,
    },
    /// Vertex in whole pixels with bitmap handle and cell
    Vertex2ii {
        /// x in pixels
        x: u16,
        /// y in pixels
        y: u16,
        /// bitmap handle
        handle: u8,
        /// bitmap cell
        cell: u8,
    },
}

const fn ops<const N: usize>(values: [u32; N]) -> [u32; MAX_OPERANDS] {
    let mut out = [0; MAX_OPERANDS];
    let mut i = 0;
    while i < N {
        out[i] = values[i];
        i += 1;
    }
    out
}

fn transform(coefficient: Coefficient, variant: Variant, v: &[u32; MAX_OPERANDS]) -> Instruction {
    match variant {
        Variant::Extended => Instruction::BitmapTransformExt {
            coefficient,
            precision: if v[0] != 0 {
                Precision::Fixed1_15
            } else {
                Precision::Fixed8_8
            },
            value: v[1] as i32,
        },
        Variant::Base => Instruction::BitmapTransform {
            coefficient,
            value: v[0] as i32,
        },
    }
}

impl Instruction {
    /// Kind, layout variant and operands in field order
    pub const fn split(&self) -> (InstructionId, Variant, [u32; MAX_OPERANDS]) {
        use Instruction as I;
        use InstructionId as Id;
        let base = Variant::Base;
        match *self {
            I::Display => (Id::Display, base, ops([])),
            I::BitmapSource { addr } => (Id::BitmapSource, base, ops([addr])),
            I::BitmapSource2 { space, addr } => {
                (Id::BitmapSource, Variant::Extended, ops([space as u32, addr]))
            }
            I::ClearColorRgb { red, green, blue } => (
                Id::ClearColorRgb,
                base,
                ops([red as u32, green as u32, blue as u32]),
            ),
            I::Tag { tag } => (Id::Tag, base, ops([tag as u32])),
            I::ColorRgb { red, green, blue } => (
                Id::ColorRgb,
                base,
                ops([red as u32, green as u32, blue as u32]),
            ),
            I::BitmapHandle { handle } => (Id::BitmapHandle, base, ops([handle as u32])),
            I::Cell { cell } => (Id::Cell, base, ops([cell as u32])),
            I::BitmapLayout {
                format,
                linestride,
                height,
            } => (
                Id::BitmapLayout,
                base,
                ops([format as u32, linestride as u32, height as u32]),
            ),
            I::BitmapSize {
                filter,
                wrap_x,
                wrap_y,
                width,
                height,
            } => (
                Id::BitmapSize,
                base,
                ops([
                    filter as u32,
                    wrap_x as u32,
                    wrap_y as u32,
                    width as u32,
                    height as u32,
                ]),
            ),
            I::AlphaFunc { func, reference } => {
                (Id::AlphaFunc, base, ops([func as u32, reference as u32]))
            }
            I::StencilFunc {
                func,
                reference,
                mask,
            } => (
                Id::StencilFunc,
                base,
                ops([func as u32, reference as u32, mask as u32]),
            ),
            I::BlendFunc { src, dst } => (Id::BlendFunc, base, ops([src as u32, dst as u32])),
            I::StencilOp { sfail, spass } => {
                (Id::StencilOp, base, ops([sfail as u32, spass as u32]))
            }
            I::PointSize { size } => (Id::PointSize, base, ops([size as u32])),
            I::LineWidth { width } => (Id::LineWidth, base, ops([width as u32])),
            I::ClearColorA { alpha } => (Id::ClearColorA, base, ops([alpha as u32])),
            I::ColorA { alpha } => (Id::ColorA, base, ops([alpha as u32])),
            I::ClearStencil { value } => (Id::ClearStencil, base, ops([value as u32])),
            I::ClearTag { tag } => (Id::ClearTag, base, ops([tag as u32])),
            I::StencilMask { mask } => (Id::StencilMask, base, ops([mask as u32])),
            I::TagMask { mask } => (Id::TagMask, base, ops([mask as u32])),
            I::BitmapTransform { coefficient, value } => {
                (coefficient.id(), base, ops([value as u32]))
            }
            I::BitmapTransformExt {
                coefficient,
                precision,
                value,
            } => (
                coefficient.id(),
                Variant::Extended,
                ops([precision as u32, value as u32]),
            ),
            I::ScissorXy { x, y } => (Id::ScissorXy, base, ops([x as u32, y as u32])),
            I::ScissorSize { width, height } => {
                (Id::ScissorSize, base, ops([width as u32, height as u32]))
            }
            I::Call { dest } => (Id::Call, base, ops([dest as u32])),
            I::Jump { dest } => (Id::Jump, base, ops([dest as u32])),
            I::Begin { prim } => (Id::Begin, base, ops([prim as u32])),
            I::ColorMask { r, g, b, a } => (
                Id::ColorMask,
                base,
                ops([r as u32, g as u32, b as u32, a as u32]),
            ),
            I::End => (Id::End, base, ops([])),
            I::SaveContext => (Id::SaveContext, base, ops([])),
            I::RestoreContext => (Id::RestoreContext, base, ops([])),
            I::Return => (Id::Return, base, ops([])),
            I::Macro { index } => (Id::Macro, base, ops([index as u32])),
            I::Clear {
                color,
                stencil,
                tag,
            } => (
                Id::Clear,
                base,
                ops([color as u32, stencil as u32, tag as u32]),
            ),
            I::VertexFormat { frac } => (Id::VertexFormat, base, ops([frac as u32])),
            I::BitmapLayoutH { linestride, height } => (
                Id::BitmapLayoutH,
                base,
                ops([linestride as u32, height as u32]),
            ),
            I::BitmapSizeH { width, height } => {
                (Id::BitmapSizeH, base, ops([width as u32, height as u32]))
            }
            I::PaletteSource { addr } => (Id::PaletteSource, base, ops([addr])),
            I::VertexTranslateX { x } => (Id::VertexTranslateX, base, ops([x as u32])),
            I::VertexTranslateY { y } => (Id::VertexTranslateY, base, ops([y as u32])),
            I::Nop => (Id::Nop, base, ops([])),
            I::BitmapExtFormat { format } => (Id::BitmapExtFormat, base, ops([format as u32])),
            I::BitmapSwizzle { r, g, b, a } => (
                Id::BitmapSwizzle,
                base,
                ops([r as u32, g as u32, b as u32, a as u32]),
            ),
            I::IntFrr => (Id::IntFrr, base, ops([])),
            I::Vertex2f { x, y } => (Id::Vertex2f, base, ops([x as i32 as u32, y as i32 as u32])),
            I::Vertex2ii { x, y, handle, cell } => (
                Id::Vertex2ii,
                base,
                ops([x as u32, y as u32, handle as u32, cell as u32]),
            ),
        }
    }

    /// Rebuilds an instruction from unpacked operands
    ///
    /// `v` must come from [`Layout::unpack`] of the layout selected by
    /// `(id, variant)`, so every value already fits its field.
    pub fn from_operands(id: InstructionId, variant: Variant, v: &[u32; MAX_OPERANDS]) -> Self {
        use Instruction as I;
        use InstructionId as Id;
        match id {
            Id::Display => I::Display,
            Id::BitmapSource => match variant {
                Variant::Base => I::BitmapSource { addr: v[0] },
                Variant::Extended => I::BitmapSource2 {
                    space: v[0] as u8,
                    addr: v[1],
                },
            },
            Id::ClearColorRgb => I::ClearColorRgb {
                red: v[0] as u8,
                green: v[1] as u8,
                blue: v[2] as u8,
            },
            Id::Tag => I::Tag { tag: v[0] as u8 },
            Id::ColorRgb => I::ColorRgb {
                red: v[0] as u8,
                green: v[1] as u8,
                blue: v[2] as u8,
            },
            Id::BitmapHandle => I::BitmapHandle { handle: v[0] as u8 },
            Id::Cell => I::Cell { cell: v[0] as u8 },
            Id::BitmapLayout => I::BitmapLayout {
                format: v[0] as u8,
                linestride: v[1] as u16,
                height: v[2] as u16,
            },
            Id::BitmapSize => I::BitmapSize {
                filter: v[0] as u8,
                wrap_x: v[1] as u8,
                wrap_y: v[2] as u8,
                width: v[3] as u16,
                height: v[4] as u16,
            },
            Id::AlphaFunc => I::AlphaFunc {
                func: v[0] as u8,
                reference: v[1] as u8,
            },
            Id::StencilFunc => I::StencilFunc {
                func: v[0] as u8,
                reference: v[1] as u8,
                mask: v[2] as u8,
            },
            Id::BlendFunc => I::BlendFunc {
                src: v[0] as u8,
                dst: v[1] as u8,
            },
            Id::StencilOp => I::StencilOp {
                sfail: v[0] as u8,
                spass: v[1] as u8,
            },
            Id::PointSize => I::PointSize { size: v[0] as u16 },
            Id::LineWidth => I::LineWidth { width: v[0] as u16 },
            Id::ClearColorA => I::ClearColorA { alpha: v[0] as u8 },
            Id::ColorA => I::ColorA { alpha: v[0] as u8 },
            Id::ClearStencil => I::ClearStencil { value: v[0] as u8 },
            Id::ClearTag => I::ClearTag { tag: v[0] as u8 },
            Id::StencilMask => I::StencilMask { mask: v[0] as u8 },
            Id::TagMask => I::TagMask { mask: v[0] != 0 },
            Id::BitmapTransformA => transform(Coefficient::A, variant, v),
            Id::BitmapTransformB => transform(Coefficient::B, variant, v),
            Id::BitmapTransformC => transform(Coefficient::C, variant, v),
            Id::BitmapTransformD => transform(Coefficient::D, variant, v),
            Id::BitmapTransformE => transform(Coefficient::E, variant, v),
            Id::BitmapTransformF => transform(Coefficient::F, variant, v),
            Id::ScissorXy => I::ScissorXy {
                x: v[0] as u16,
                y: v[1] as u16,
            },
            Id::ScissorSize => I::ScissorSize {
                width: v[0] as u16,
                height: v[1] as u16,
            },
            Id::Call => I::Call { dest: v[0] as u16 },
            Id::Jump => I::Jump { dest: v[0] as u16 },
            Id::Begin => I::Begin { prim: v[0] as u8 },
            Id::ColorMask => I::ColorMask {
                r: v[0] != 0,
                g: v[1] != 0,
                b: v[2] != 0,
                a: v[3] != 0,
            },
            Id::End => I::End,
            Id::SaveContext => I::SaveContext,
            Id::RestoreContext => I::RestoreContext,
            Id::Return => I::Return,
            Id::Macro => I::Macro { index: v[0] as u8 },
            Id::Clear => I::Clear {
                color: v[0] != 0,
                stencil: v[1] != 0,
                tag: v[2] != 0,
            },
            Id::VertexFormat => I::VertexFormat { frac: v[0] as u8 },
            Id::BitmapLayoutH => I::BitmapLayoutH {
                linestride: v[0] as u8,
                height: v[1] as u8,
            },
            Id::BitmapSizeH => I::BitmapSizeH {
                width: v[0] as u8,
                height: v[1] as u8,
            },
            Id::PaletteSource => I::PaletteSource { addr: v[0] },
            Id::VertexTranslateX => I::VertexTranslateX { x: v[0] as i32 },
            Id::VertexTranslateY => I::VertexTranslateY { y: v[0] as i32 },
            Id::Nop => I::Nop,
            Id::BitmapExtFormat => I::BitmapExtFormat { format: v[0] as u16 },
            Id::BitmapSwizzle => I::BitmapSwizzle {
                r: v[0] as u8,
                g: v[1] as u8,
                b: v[2] as u8,
                a: v[3] as u8,
            },
            Id::IntFrr => I::IntFrr,
            Id::Vertex2f => I::Vertex2f {
                x: v[0] as i32 as i16,
                y: v[1] as i32 as i16,
            },
            Id::Vertex2ii => I::Vertex2ii {
                x: v[0] as u16,
                y: v[1] as u16,
                handle: v[2] as u8,
                cell: v[3] as u8,
            },
        }
    }
}

/// Operand range policy of an [`Encoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// mask operands to their field width, as the hardware does
    #[default]
    Truncate,
    /// reject operands that do not fit their field
    Strict,
}

/// Display list encoder bound to one chip generation
///
/// The typed helpers always truncate. [`Encoder::encode`] honours the
/// configured [`Validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    generation: Generation,
    validation: Validation,
}

impl Encoder {
    /// Truncating encoder for `generation`
    pub const fn new(generation: Generation) -> Self {
        Encoder {
            generation,
            validation: Validation::Truncate,
        }
    }

    /// Sets the operand range policy of [`Encoder::encode`]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Chip generation the encoder targets
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Operand range policy
    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// Layout used on the active generation for `(id, variant)`
    pub const fn layout(
        &self,
        id: InstructionId,
        variant: Variant,
    ) -> Result<&'static Layout, Error> {
        let layout = match id.layout(variant) {
            Some(layout) => layout,
            None => return Err(Error::NoExtendedForm(id)),
        };
        if let Err(e) = self.generation.require(id.since()) {
            return Err(Error::Unsupported(e));
        }
        let gate = match variant {
            Variant::Extended => self.generation.require(Generation::Gen3),
            Variant::Base if id.redefined() => self.generation.require_at_most(Generation::Gen2),
            Variant::Base => Ok(()),
        };
        match gate {
            Ok(()) => Ok(layout),
            Err(e) => Err(Error::Unsupported(e)),
        }
    }

    /// Encodes `instruction` for the active generation
    pub fn encode(&self, instruction: &Instruction) -> Result<DlCmd, Error> {
        let (id, variant, values) = instruction.split();
        let layout = self.layout(id, variant)?;
        self.check_operands(instruction)?;
        if self.validation == Validation::Strict {
            for (field, &value) in layout.fields.iter().zip(&values) {
                if !field.fits(value) {
                    return Err(Error::OutOfRange {
                        field: field.name,
                        value,
                    });
                }
            }
        }
        Ok(DlCmd(layout.pack(&values)))
    }

    /// Decodes `word` with the layouts of the active generation
    pub fn decode(&self, word: u32) -> Result<Instruction, Error> {
        let opcode = (word >> 24) as u8;
        let id = InstructionId::from_word(word).ok_or(Error::UnknownOpcode(opcode))?;
        if !self.generation.supports(id.since()) {
            return Err(Error::UnknownOpcode(opcode));
        }
        let variant = id.native_variant(self.generation);
        let layout = self.layout(id, variant)?;
        let instruction = Instruction::from_operands(id, variant, &layout.unpack(word));
        self.check_operands(&instruction)?;
        Ok(instruction)
    }

    /// Operand values that only exist on later generations
    fn check_operands(&self, instruction: &Instruction) -> Result<(), Unsupported> {
        match *instruction {
            Instruction::BitmapLayout { format, .. } if format == BitmapFormat::Glformat as u8 => {
                self.generation.require(BitmapFormat::Glformat.since())
            }
            _ => Ok(()),
        }
    }

    const fn base(layout: &Layout, values: &[u32]) -> DlCmd {
        DlCmd(layout.pack(values))
    }

    // ---- instructions -----------------------------------------------------------------

    /// Alpha test
    pub const fn alpha_func(&self, func: TestFunc, reference: u8) -> DlCmd {
        Self::base(&layouts::ALPHA_FUNC, &[func as u32, reference as u32])
    }

    /// Starts a primitive
    pub const fn begin(&self, prim: Primitive) -> DlCmd {
        Self::base(&layouts::BEGIN, &[prim as u32])
    }

    /// Selects the bitmap handle
    pub const fn bitmap_handle(&self, handle: u8) -> DlCmd {
        Self::base(&layouts::BITMAP_HANDLE, &[handle as u32])
    }

    /// BITMAP_LAYOUT, fails for [`BitmapFormat::Glformat`] before gen3
    pub const fn bitmap_layout(
        &self,
        format: BitmapFormat,
        linestride: u16,
        height: u16,
    ) -> Result<DlCmd, Unsupported> {
        if let Err(e) = self.generation.require(format.since()) {
            return Err(e);
        }
        Ok(Self::base(
            &layouts::BITMAP_LAYOUT,
            &[format as u32, linestride as u32, height as u32],
        ))
    }

    /// BITMAP_LAYOUT_H from the full line stride and height
    pub const fn bitmap_layout_h(&self, linestride: u16, height: u16) -> DlCmd {
        Self::base(
            &layouts::BITMAP_LAYOUT_H,
            &[(linestride as u32) >> 10, (height as u32) >> 9],
        )
    }

    /// On screen bitmap size, filter and wrap
    pub const fn bitmap_size(
        &self,
        filter: Filter,
        wrap_x: Wrap,
        wrap_y: Wrap,
        width: u16,
        height: u16,
    ) -> DlCmd {
        Self::base(
            &layouts::BITMAP_SIZE,
            &[
                filter as u32,
                wrap_x as u32,
                wrap_y as u32,
                width as u32,
                height as u32,
            ],
        )
    }

    /// BITMAP_SIZE_H from the full width and height
    pub const fn bitmap_size_h(&self, width: u16, height: u16) -> DlCmd {
        Self::base(
            &layouts::BITMAP_SIZE_H,
            &[(width as u32) >> 9, (height as u32) >> 9],
        )
    }

    /// Bitmap address in RAM_G
    pub const fn bitmap_source(&self, addr: u32) -> DlCmd {
        Self::base(&layouts::BITMAP_SOURCE, &[addr])
    }

    /// BITMAP_SOURCE with the flash / RAM_G selector (gen3+)
    pub const fn bitmap_source2(
        &self,
        space: SourceSpace,
        addr: u32,
    ) -> Result<DlCmd, Unsupported> {
        if let Err(e) = self.generation.require(Generation::Gen3) {
            return Err(e);
        }
        Ok(Self::base(&layouts::BITMAP_SOURCE2, &[space as u32, addr]))
    }

    /// Transform coefficient in the layout native to the active generation
    ///
    /// On gen3+ the A, B, D and E coefficients use the extended layout with
    /// 8.8 precision, which yields the same bits as the gen2 layout.
    pub const fn bitmap_transform(&self, coefficient: Coefficient, value: i32) -> DlCmd {
        self.transform_word(coefficient, Precision::Fixed8_8, value)
    }

    /// Coefficient A of the bitmap transform matrix
    pub const fn bitmap_transform_a(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::A, value)
    }

    /// Coefficient B of the bitmap transform matrix
    pub const fn bitmap_transform_b(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::B, value)
    }

    /// Coefficient C of the bitmap transform matrix
    pub const fn bitmap_transform_c(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::C, value)
    }

    /// Coefficient D of the bitmap transform matrix
    pub const fn bitmap_transform_d(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::D, value)
    }

    /// Coefficient E of the bitmap transform matrix
    pub const fn bitmap_transform_e(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::E, value)
    }

    /// Coefficient F of the bitmap transform matrix
    pub const fn bitmap_transform_f(&self, value: i32) -> DlCmd {
        self.bitmap_transform(Coefficient::F, value)
    }

    /// Extended transform with explicit precision (gen3+, A, B, D and E only)
    pub fn bitmap_transform_ext(
        &self,
        coefficient: Coefficient,
        precision: Precision,
        value: i32,
    ) -> Result<DlCmd, Error> {
        self.encode(&Instruction::BitmapTransformExt {
            coefficient,
            precision,
            value,
        })
    }

    /// Native transform word, `precision` is dropped where the layout has no bit for it
    const fn transform_word(
        &self,
        coefficient: Coefficient,
        precision: Precision,
        value: i32,
    ) -> DlCmd {
        let ext = self.generation.supports(Generation::Gen3);
        let p = precision as u32;
        let v = value as u32;
        match coefficient {
            Coefficient::A if ext => Self::base(&layouts::BITMAP_TRANSFORM_A_EXT, &[p, v]),
            Coefficient::B if ext => Self::base(&layouts::BITMAP_TRANSFORM_B_EXT, &[p, v]),
            Coefficient::D if ext => Self::base(&layouts::BITMAP_TRANSFORM_D_EXT, &[p, v]),
            Coefficient::E if ext => Self::base(&layouts::BITMAP_TRANSFORM_E_EXT, &[p, v]),
            Coefficient::A => Self::base(&layouts::BITMAP_TRANSFORM_A, &[v]),
            Coefficient::B => Self::base(&layouts::BITMAP_TRANSFORM_B, &[v]),
            Coefficient::C => Self::base(&layouts::BITMAP_TRANSFORM_C, &[v]),
            Coefficient::D => Self::base(&layouts::BITMAP_TRANSFORM_D, &[v]),
            Coefficient::E => Self::base(&layouts::BITMAP_TRANSFORM_E, &[v]),
            Coefficient::F => Self::base(&layouts::BITMAP_TRANSFORM_F, &[v]),
        }
    }

    /// Transform coefficient from a real valued factor
    ///
    /// Gen2 always encodes signed 8.8. On gen3+ factors of A, B, D and E in
    /// `[-1.0, 1.0)` are encoded as signed 1.15, which changes the word
    /// compared to gen2 for the same factor.
    pub fn bitmap_transform_factor(&self, coefficient: Coefficient, factor: f32) -> DlCmd {
        let extended = coefficient.has_precision() && self.generation.supports(Generation::Gen3);
        if extended && (-1.0..1.0).contains(&factor) {
            self.transform_word(coefficient, Precision::Fixed1_15, to_fixed(factor, 15))
        } else {
            self.transform_word(coefficient, Precision::Fixed8_8, to_fixed(factor, 8))
        }
    }

    /// BITMAP_EXT_FORMAT (gen3+)
    pub const fn bitmap_ext_format(&self, format: ExtFormat) -> Result<DlCmd, Unsupported> {
        if let Err(e) = self.generation.require(Generation::Gen3) {
            return Err(e);
        }
        Ok(Self::base(&layouts::BITMAP_EXT_FORMAT, &[format as u32]))
    }

    /// BITMAP_SWIZZLE (gen3+)
    pub const fn bitmap_swizzle(
        &self,
        r: Swizzle,
        g: Swizzle,
        b: Swizzle,
        a: Swizzle,
    ) -> Result<DlCmd, Unsupported> {
        if let Err(e) = self.generation.require(Generation::Gen3) {
            return Err(e);
        }
        Ok(Self::base(
            &layouts::BITMAP_SWIZZLE,
            &[r as u32, g as u32, b as u32, a as u32],
        ))
    }

    /// Blend factors
    pub const fn blend_func(&self, src: BlendFactor, dst: BlendFactor) -> DlCmd {
        Self::base(&layouts::BLEND_FUNC, &[src as u32, dst as u32])
    }

    /// Calls the display list subroutine at a word index
    pub const fn call(&self, dest: u16) -> DlCmd {
        Self::base(&layouts::CALL, &[dest as u32])
    }

    /// Bitmap cell drawn by VERTEX2F
    pub const fn cell(&self, cell: u8) -> DlCmd {
        Self::base(&layouts::CELL, &[cell as u32])
    }

    /// Clears the color, stencil and tag buffers
    pub const fn clear(&self, color: bool, stencil: bool, tag: bool) -> DlCmd {
        Self::base(&layouts::CLEAR, &[color as u32, stencil as u32, tag as u32])
    }

    /// Alpha used by CLEAR
    pub const fn clear_color_a(&self, alpha: u8) -> DlCmd {
        Self::base(&layouts::CLEAR_COLOR_A, &[alpha as u32])
    }

    /// Color used by CLEAR
    pub const fn clear_color_rgb(&self, red: u8, green: u8, blue: u8) -> DlCmd {
        Self::base(
            &layouts::CLEAR_COLOR_RGB,
            &[red as u32, green as u32, blue as u32],
        )
    }

    /// Stencil value used by CLEAR
    pub const fn clear_stencil(&self, value: u8) -> DlCmd {
        Self::base(&layouts::CLEAR_STENCIL, &[value as u32])
    }

    /// Tag value used by CLEAR
    pub const fn clear_tag(&self, tag: u8) -> DlCmd {
        Self::base(&layouts::CLEAR_TAG, &[tag as u32])
    }

    /// Current drawing alpha
    pub const fn color_a(&self, alpha: u8) -> DlCmd {
        Self::base(&layouts::COLOR_A, &[alpha as u32])
    }

    /// Color buffer write mask
    pub const fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) -> DlCmd {
        Self::base(
            &layouts::COLOR_MASK,
            &[r as u32, g as u32, b as u32, a as u32],
        )
    }

    /// Current drawing color
    pub const fn color_rgb(&self, red: u8, green: u8, blue: u8) -> DlCmd {
        Self::base(&layouts::COLOR_RGB, &[red as u32, green as u32, blue as u32])
    }

    /// COLOR_RGB from an embedded-graphics color
    pub fn color_rgb888(&self, color: Rgb888) -> DlCmd {
        self.color_rgb(color.r(), color.g(), color.b())
    }

    /// CLEAR_COLOR_RGB from an embedded-graphics color
    pub fn clear_color_rgb888(&self, color: Rgb888) -> DlCmd {
        self.clear_color_rgb(color.r(), color.g(), color.b())
    }

    /// End of the display list
    pub const fn display(&self) -> DlCmd {
        DlCmd::DISPLAY
    }

    /// Ends the primitive
    pub const fn end(&self) -> DlCmd {
        DlCmd::END
    }

    /// INT_FRR (gen3+)
    pub const fn int_frr(&self) -> Result<DlCmd, Unsupported> {
        if let Err(e) = self.generation.require(Generation::Gen3) {
            return Err(e);
        }
        Ok(Self::base(&layouts::INT_FRR, &[]))
    }

    /// Continues at a word index
    pub const fn jump(&self, dest: u16) -> DlCmd {
        Self::base(&layouts::JUMP, &[dest as u32])
    }

    /// Line width in 1/16 pixel
    pub const fn line_width(&self, width: u16) -> DlCmd {
        Self::base(&layouts::LINE_WIDTH, &[width as u32])
    }

    /// Executes REG_MACRO_0 or REG_MACRO_1
    pub const fn macro_(&self, index: u8) -> DlCmd {
        Self::base(&layouts::MACRO, &[index as u32])
    }

    /// No operation
    pub const fn nop(&self) -> DlCmd {
        DlCmd::NOP
    }

    /// Palette address in RAM_G
    pub const fn palette_source(&self, addr: u32) -> DlCmd {
        Self::base(&layouts::PALETTE_SOURCE, &[addr])
    }

    /// Point radius in 1/16 pixel
    pub const fn point_size(&self, size: u16) -> DlCmd {
        Self::base(&layouts::POINT_SIZE, &[size as u32])
    }

    /// Pops the graphics context
    pub const fn restore_context(&self) -> DlCmd {
        DlCmd::RESTORE_CONTEXT
    }

    /// Returns from CALL
    pub const fn return_(&self) -> DlCmd {
        DlCmd::RETURN
    }

    /// Pushes the graphics context
    pub const fn save_context(&self) -> DlCmd {
        DlCmd::SAVE_CONTEXT
    }

    /// Size of the scissor clip
    pub const fn scissor_size(&self, width: u16, height: u16) -> DlCmd {
        Self::base(&layouts::SCISSOR_SIZE, &[width as u32, height as u32])
    }

    /// Top left corner of the scissor clip
    pub const fn scissor_xy(&self, x: u16, y: u16) -> DlCmd {
        Self::base(&layouts::SCISSOR_XY, &[x as u32, y as u32])
    }

    /// Stencil test
    pub const fn stencil_func(&self, func: TestFunc, reference: u8, mask: u8) -> DlCmd {
        Self::base(
            &layouts::STENCIL_FUNC,
            &[func as u32, reference as u32, mask as u32],
        )
    }

    /// Stencil buffer write mask
    pub const fn stencil_mask(&self, mask: u8) -> DlCmd {
        Self::base(&layouts::STENCIL_MASK, &[mask as u32])
    }

    /// Stencil update on test fail and pass
    pub const fn stencil_op(&self, sfail: StencilOp, spass: StencilOp) -> DlCmd {
        Self::base(&layouts::STENCIL_OP, &[sfail as u32, spass as u32])
    }

    /// Tag written for the following primitives
    pub const fn tag(&self, tag: u8) -> DlCmd {
        Self::base(&layouts::TAG, &[tag as u32])
    }

    /// Tag buffer write enable
    pub const fn tag_mask(&self, mask: bool) -> DlCmd {
        Self::base(&layouts::TAG_MASK, &[mask as u32])
    }

    /// VERTEX2F, coordinates in the units set by VERTEX_FORMAT
    pub const fn vertex2f(&self, x: i16, y: i16) -> DlCmd {
        Self::base(&layouts::VERTEX2F, &[x as i32 as u32, y as i32 as u32])
    }

    /// VERTEX2F from an embedded-graphics point, coordinates truncated to 16 bit
    pub fn vertex2f_point(&self, point: Point) -> DlCmd {
        self.vertex2f(point.x as i16, point.y as i16)
    }

    /// Vertex in whole pixels with bitmap handle and cell
    pub const fn vertex2ii(&self, x: u16, y: u16, handle: u8, cell: u8) -> DlCmd {
        Self::base(
            &layouts::VERTEX2II,
            &[x as u32, y as u32, handle as u32, cell as u32],
        )
    }

    /// Fractional bits of VERTEX2F coordinates
    pub const fn vertex_format(&self, frac: u8) -> DlCmd {
        Self::base(&layouts::VERTEX_FORMAT, &[frac as u32])
    }

    /// Horizontal vertex offset in 1/16 pixel
    pub const fn vertex_translate_x(&self, x: i32) -> DlCmd {
        Self::base(&layouts::VERTEX_TRANSLATE_X, &[x as u32])
    }

    /// Vertical vertex offset in 1/16 pixel
    pub const fn vertex_translate_y(&self, y: i32) -> DlCmd {
        Self::base(&layouts::VERTEX_TRANSLATE_Y, &[y as u32])
    }
}

/// Rounds `value * 2^frac_bits` to the nearest integer
fn to_fixed(value: f32, frac_bits: u32) -> i32 {
    let scaled = value * (1u32 << frac_bits) as f32;
    if scaled < 0.0 {
        (scaled - 0.5) as i32
    } else {
        (scaled + 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GEN2: Encoder = Encoder::new(Generation::Gen2);
    const GEN3: Encoder = Encoder::new(Generation::Gen3);
    const GEN4: Encoder = Encoder::new(Generation::Gen4);

    macro_rules! word_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (cmd, expected): (DlCmd, u32) = $value;
                assert_eq!(expected, cmd.raw(), "{:#010x} != {:?}", expected, cmd);
            }
        )*
        }
    }

    word_tests! {
        begin_rects: (GEN2.begin(Primitive::Rects), 0x1F00_0009),
        begin_bitmaps: (GEN2.begin(Primitive::Bitmaps), 0x1F00_0001),
        color_rgb_red: (GEN2.color_rgb(255, 0, 0), 0x04FF_0000),
        color_rgb_white: (GEN2.color_rgb(255, 255, 255), 0x04FF_FFFF),
        color_rgb_black: (GEN2.color_rgb(0, 0, 0), 0x0400_0000),
        clear_color_rgb: (GEN2.clear_color_rgb(0x12, 0x34, 0x56), 0x0212_3456),
        clear_all: (GEN2.clear(true, true, true), 0x2600_0007),
        clear_color_only: (GEN2.clear(true, false, false), 0x2600_0004),
        point_size_max: (GEN2.point_size(8191), 0x0D00_1FFF),
        point_size_zero: (GEN2.point_size(0), 0x0D00_0000),
        line_width: (GEN2.line_width(16), 0x0E00_0010),
        end: (GEN2.end(), 0x2100_0000),
        display: (GEN2.display(), 0x0000_0000),
        nop: (GEN2.nop(), 0x2D00_0000),
        save_context: (GEN2.save_context(), 0x2200_0000),
        restore_context: (GEN2.restore_context(), 0x2300_0000),
        return_: (GEN2.return_(), 0x2400_0000),
        macro_1: (GEN2.macro_(1), 0x2500_0001),
        tag: (GEN2.tag(0xAB), 0x0300_00AB),
        tag_mask: (GEN2.tag_mask(true), 0x1400_0001),
        clear_tag: (GEN2.clear_tag(7), 0x1200_0007),
        clear_stencil: (GEN2.clear_stencil(0xFF), 0x1100_00FF),
        stencil_mask: (GEN2.stencil_mask(0x0F), 0x1300_000F),
        color_a: (GEN2.color_a(0x80), 0x1000_0080),
        clear_color_a: (GEN2.clear_color_a(0x80), 0x0F00_0080),
        color_mask: (GEN2.color_mask(true, false, true, false), 0x2000_000A),
        alpha_func: (GEN2.alpha_func(TestFunc::Greater, 0x10), 0x0900_0310),
        stencil_func: (GEN2.stencil_func(TestFunc::Always, 0x01, 0xFF), 0x0A07_01FF),
        stencil_op: (GEN2.stencil_op(StencilOp::Keep, StencilOp::Incr), 0x0C00_000B),
        blend_func: (
            GEN2.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
            0x0B00_0014
        ),
        bitmap_handle: (GEN2.bitmap_handle(31), 0x0500_001F),
        cell: (GEN2.cell(127), 0x0600_007F),
        bitmap_source: (GEN2.bitmap_source(0x3F_FFFF), 0x013F_FFFF),
        palette_source: (GEN2.palette_source(0x1000), 0x2A00_1000),
        call: (GEN2.call(0x100), 0x1D00_0100),
        jump: (GEN2.jump(0xFFFF), 0x1E00_FFFF),
        scissor_xy: (GEN2.scissor_xy(1, 2), 0x1B00_0802),
        scissor_size: (GEN2.scissor_size(800, 480), 0x1C32_01E0),
        vertex_format: (GEN2.vertex_format(4), 0x2700_0004),
        vertex_translate_x: (GEN2.vertex_translate_x(-16), 0x2B01_FFF0),
        vertex_translate_y: (GEN2.vertex_translate_y(160), 0x2C00_00A0),
        vertex2f_origin: (GEN2.vertex2f(0, 0), 0x4000_0000),
        vertex2f_10_10: (GEN2.vertex2f(10, 10), 0x4005_000A),
        vertex2f_100_100: (GEN2.vertex2f(100, 100), 0x4032_0064),
        vertex2f_negative: (GEN2.vertex2f(-1, -1), 0x7FFF_FFFF),
        vertex2ii: (GEN2.vertex2ii(10, 20, 1, 2), 0x8141_4082),
        vertex2ii_max: (GEN2.vertex2ii(511, 511, 31, 127), 0xBFFF_FFFF),
        bitmap_transform_c: (GEN2.bitmap_transform_c(0x12_3456), 0x1712_3456),
        bitmap_transform_f_negative: (GEN2.bitmap_transform_f(-1), 0x1AFF_FFFF),
        bitmap_transform_a_unity: (GEN2.bitmap_transform_a(256), 0x1500_0100),
        bitmap_transform_a_unity_gen3: (GEN3.bitmap_transform_a(256), 0x1500_0100),
        bitmap_size_h: (GEN2.bitmap_size_h(1024, 600), 0x2900_0009),
        bitmap_layout_h: (GEN2.bitmap_layout_h(2048, 1024), 0x2800_000A),
        bitmap_source_min: (GEN2.bitmap_source(0), 0x0100_0000),
        clear_color_rgb_min: (GEN2.clear_color_rgb(0, 0, 0), 0x0200_0000),
        clear_color_rgb_max: (GEN2.clear_color_rgb(255, 255, 255), 0x02FF_FFFF),
        tag_min: (GEN2.tag(0), 0x0300_0000),
        tag_max: (GEN2.tag(255), 0x0300_00FF),
        bitmap_handle_min: (GEN2.bitmap_handle(0), 0x0500_0000),
        cell_min: (GEN2.cell(0), 0x0600_0000),
        bitmap_layout_min: (GEN2.bitmap_layout(BitmapFormat::Argb1555, 0, 0).unwrap(), 0x0700_0000),
        bitmap_layout_max: (
            GEN3.bitmap_layout(BitmapFormat::Glformat, 1023, 511).unwrap(),
            0x07FF_FFFF
        ),
        bitmap_size_min: (
            GEN2.bitmap_size(Filter::Nearest, Wrap::Border, Wrap::Border, 0, 0),
            0x0800_0000
        ),
        bitmap_size_max: (
            GEN2.bitmap_size(Filter::Bilinear, Wrap::Repeat, Wrap::Repeat, 511, 511),
            0x081F_FFFF
        ),
        alpha_func_min: (GEN2.alpha_func(TestFunc::Never, 0), 0x0900_0000),
        alpha_func_max: (GEN2.alpha_func(TestFunc::Always, 255), 0x0900_07FF),
        stencil_func_min: (GEN2.stencil_func(TestFunc::Never, 0, 0), 0x0A00_0000),
        stencil_func_max: (GEN2.stencil_func(TestFunc::Always, 255, 255), 0x0A07_FFFF),
        blend_func_min: (GEN2.blend_func(BlendFactor::Zero, BlendFactor::Zero), 0x0B00_0000),
        blend_func_max: (
            GEN2.blend_func(BlendFactor::OneMinusDstAlpha, BlendFactor::OneMinusDstAlpha),
            0x0B00_002D
        ),
        stencil_op_min: (GEN2.stencil_op(StencilOp::Zero, StencilOp::Zero), 0x0C00_0000),
        stencil_op_max: (GEN2.stencil_op(StencilOp::Invert, StencilOp::Invert), 0x0C00_002D),
        line_width_min: (GEN2.line_width(0), 0x0E00_0000),
        line_width_max: (GEN2.line_width(4095), 0x0E00_0FFF),
        clear_color_a_min: (GEN2.clear_color_a(0), 0x0F00_0000),
        clear_color_a_max: (GEN2.clear_color_a(255), 0x0F00_00FF),
        color_a_min: (GEN2.color_a(0), 0x1000_0000),
        color_a_max: (GEN2.color_a(255), 0x1000_00FF),
        clear_stencil_min: (GEN2.clear_stencil(0), 0x1100_0000),
        clear_tag_min: (GEN2.clear_tag(0), 0x1200_0000),
        clear_tag_max: (GEN2.clear_tag(255), 0x1200_00FF),
        stencil_mask_min: (GEN2.stencil_mask(0), 0x1300_0000),
        stencil_mask_max: (GEN2.stencil_mask(255), 0x1300_00FF),
        tag_mask_min: (GEN2.tag_mask(false), 0x1400_0000),
        bitmap_transform_a_min: (GEN2.bitmap_transform_a(-65536), 0x1501_0000),
        bitmap_transform_a_max: (GEN2.bitmap_transform_a(65535), 0x1500_FFFF),
        bitmap_transform_a_ext_max: (
            GEN3.bitmap_transform_ext(Coefficient::A, Precision::Fixed1_15, 65535).unwrap(),
            0x1502_FFFF
        ),
        bitmap_transform_b_min: (GEN2.bitmap_transform_b(-65536), 0x1601_0000),
        bitmap_transform_b_max: (GEN2.bitmap_transform_b(65535), 0x1600_FFFF),
        bitmap_transform_c_min: (GEN2.bitmap_transform_c(-0x80_0000), 0x1780_0000),
        bitmap_transform_c_max: (GEN2.bitmap_transform_c(0x7F_FFFF), 0x177F_FFFF),
        bitmap_transform_d_min: (GEN2.bitmap_transform_d(-65536), 0x1801_0000),
        bitmap_transform_d_max: (GEN2.bitmap_transform_d(65535), 0x1800_FFFF),
        bitmap_transform_e_min: (GEN2.bitmap_transform_e(-65536), 0x1901_0000),
        bitmap_transform_e_max: (GEN2.bitmap_transform_e(65535), 0x1900_FFFF),
        bitmap_transform_f_min: (GEN2.bitmap_transform_f(-0x80_0000), 0x1A80_0000),
        bitmap_transform_f_max: (GEN2.bitmap_transform_f(0x7F_FFFF), 0x1A7F_FFFF),
        scissor_xy_min: (GEN2.scissor_xy(0, 0), 0x1B00_0000),
        scissor_xy_max: (GEN2.scissor_xy(2047, 2047), 0x1B3F_FFFF),
        scissor_size_min: (GEN2.scissor_size(0, 0), 0x1C00_0000),
        scissor_size_max: (GEN2.scissor_size(4095, 4095), 0x1CFF_FFFF),
        call_min: (GEN2.call(0), 0x1D00_0000),
        call_max: (GEN2.call(0xFFFF), 0x1D00_FFFF),
        jump_min: (GEN2.jump(0), 0x1E00_0000),
        color_mask_min: (GEN2.color_mask(false, false, false, false), 0x2000_0000),
        color_mask_max: (GEN2.color_mask(true, true, true, true), 0x2000_000F),
        macro_0: (GEN2.macro_(0), 0x2500_0000),
        clear_none: (GEN2.clear(false, false, false), 0x2600_0000),
        vertex_format_min: (GEN2.vertex_format(0), 0x2700_0000),
        vertex_format_max: (GEN2.vertex_format(7), 0x2700_0007),
        bitmap_layout_h_min: (GEN2.bitmap_layout_h(0, 0), 0x2800_0000),
        bitmap_layout_h_max: (GEN2.bitmap_layout_h(4095, 2047), 0x2800_000F),
        bitmap_size_h_min: (GEN2.bitmap_size_h(0, 0), 0x2900_0000),
        bitmap_size_h_max: (GEN2.bitmap_size_h(2047, 2047), 0x2900_000F),
        palette_source_min: (GEN2.palette_source(0), 0x2A00_0000),
        palette_source_max: (GEN2.palette_source(0x3F_FFFF), 0x2A3F_FFFF),
        vertex_translate_x_min: (GEN2.vertex_translate_x(-65536), 0x2B01_0000),
        vertex_translate_x_max: (GEN2.vertex_translate_x(65535), 0x2B00_FFFF),
        vertex_translate_y_min: (GEN2.vertex_translate_y(-65536), 0x2C01_0000),
        vertex_translate_y_max: (GEN2.vertex_translate_y(65535), 0x2C00_FFFF),
        bitmap_ext_format_min: (GEN3.bitmap_ext_format(ExtFormat::Argb1555).unwrap(), 0x2E00_0000),
        bitmap_ext_format_max: (GEN3.bitmap_ext_format(ExtFormat::Astc12x12).unwrap(), 0x2E00_93BD),
        bitmap_swizzle_min: (
            GEN3.bitmap_swizzle(Swizzle::Zero, Swizzle::Zero, Swizzle::Zero, Swizzle::Zero)
                .unwrap(),
            0x2F00_0000
        ),
        bitmap_swizzle_max: (
            GEN3.bitmap_swizzle(Swizzle::Alpha, Swizzle::Alpha, Swizzle::Alpha, Swizzle::Alpha)
                .unwrap(),
            0x2F00_0B6D
        ),
        int_frr: (GEN3.int_frr().unwrap(), 0x3000_0000),
        bitmap_source2_min: (GEN3.bitmap_source2(SourceSpace::RamG, 0).unwrap(), 0x0100_0000),
        bitmap_source2_max: (
            GEN3.bitmap_source2(SourceSpace::Flash, 0x7F_FFFF).unwrap(),
            0x01FF_FFFF
        ),
        vertex2f_min_x_max_y: (GEN2.vertex2f(-16384, 16383), 0x6000_3FFF),
        vertex2f_max_x_min_y: (GEN2.vertex2f(16383, -16384), 0x5FFF_C000),
        vertex2ii_min: (GEN2.vertex2ii(0, 0, 0, 0), 0x8000_0000),
    }

    #[test]
    fn bitmap_layout_fields() {
        assert_eq!(
            GEN2.bitmap_layout(BitmapFormat::Rgb565, 1023, 511),
            Ok(DlCmd::from_raw(0x073F_FFFF))
        );
        assert_eq!(
            GEN2.bitmap_layout(BitmapFormat::L8, 100, 50),
            Ok(DlCmd::from_raw(0x0700_0000 | 3 << 19 | 100 << 9 | 50))
        );
    }

    #[test]
    fn coprocessor_internal_formats() {
        assert_eq!(
            GEN2.bitmap_layout(BitmapFormat::IntL8c, 0, 0).map(|c| c.raw()),
            Ok(0x0760_0000)
        );
        assert_eq!(
            GEN2.bitmap_layout(BitmapFormat::IntVga, 0, 0).map(|c| c.raw()),
            Ok(0x0768_0000)
        );
        assert_eq!(GEN2.bitmap_layout(BitmapFormat::IntG8, 0, 0).map(|c| c.raw()), Ok(0x0790_0000));
        assert_eq!(GEN3.bitmap_ext_format(ExtFormat::IntL8c).map(|c| c.raw()), Ok(0x2E00_000C));
        assert_eq!(GEN3.bitmap_ext_format(ExtFormat::IntVga).map(|c| c.raw()), Ok(0x2E00_000D));
        assert_eq!(GEN3.bitmap_ext_format(ExtFormat::IntG8).map(|c| c.raw()), Ok(0x2E00_0012));
    }

    #[test]
    fn bitmap_size_fields() {
        assert_eq!(
            GEN2.bitmap_size(Filter::Bilinear, Wrap::Repeat, Wrap::Border, 480, 272).raw(),
            0x0800_0000 | 1 << 20 | 1 << 19 | 480 << 9 | 272
        );
    }

    #[test]
    fn glformat_needs_gen3() {
        assert_eq!(
            GEN2.bitmap_layout(BitmapFormat::Glformat, 16, 16),
            Err(Unsupported::Requires {
                required: Generation::Gen3,
                active: Generation::Gen2
            })
        );
        assert_eq!(
            GEN3.bitmap_layout(BitmapFormat::Glformat, 16, 16).map(|c| c.raw()),
            Ok(0x07F8_2010)
        );
        assert!(GEN2
            .encode(&Instruction::BitmapLayout {
                format: 31,
                linestride: 16,
                height: 16
            })
            .is_err());
    }

    #[test]
    fn gen3_additions_are_gated() {
        assert!(GEN2.bitmap_ext_format(ExtFormat::Astc4x4).is_err());
        assert!(GEN2
            .bitmap_swizzle(Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::Alpha)
            .is_err());
        assert!(GEN2.int_frr().is_err());
        assert!(GEN2.bitmap_source2(SourceSpace::Flash, 0).is_err());

        assert_eq!(GEN3.bitmap_ext_format(ExtFormat::Astc4x4).map(|c| c.raw()), Ok(0x2E00_93B0));
        assert_eq!(
            GEN4.bitmap_swizzle(Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::Alpha)
                .map(|c| c.raw()),
            Ok(0x2F00_0000 | 2 << 9 | 3 << 6 | 4 << 3 | 5)
        );
        assert_eq!(GEN3.int_frr().map(|c| c.raw()), Ok(0x3000_0000));
        assert_eq!(
            GEN3.bitmap_source2(SourceSpace::Flash, 0x1000).map(|c| c.raw()),
            Ok(0x0180_1000)
        );
    }

    #[test]
    fn operands_truncate_without_spilling() {
        assert_eq!(GEN2.tag(44), GEN2.encode(&Instruction::Tag { tag: 44 }).unwrap());
        assert_eq!(
            GEN2.encode(&Instruction::BitmapHandle { handle: 0xFF }).unwrap().raw(),
            0x0500_001F
        );
        assert_eq!(GEN2.point_size(0xFFFF).raw(), 0x0D00_1FFF);
        assert_eq!(GEN2.bitmap_source(0xFFFF_FFFF).raw(), 0x013F_FFFF);
        assert_eq!(GEN2.vertex2ii(512, 0, 0, 0).raw(), 0x8000_0000);
    }

    #[test]
    fn strict_mode_rejects_out_of_range() {
        let strict = GEN2.with_validation(Validation::Strict);
        assert_eq!(
            strict.encode(&Instruction::BitmapHandle { handle: 32 }),
            Err(Error::OutOfRange {
                field: "handle",
                value: 32
            })
        );
        assert_eq!(
            strict.encode(&Instruction::Vertex2f { x: 16384, y: 0 }),
            Err(Error::OutOfRange {
                field: "x",
                value: 16384
            })
        );
        assert_eq!(
            strict.encode(&Instruction::Vertex2f { x: -16384, y: 16383 }).map(|c| c.raw()),
            Ok(GEN2.vertex2f(-16384, 16383).raw())
        );
        assert!(GEN2.encode(&Instruction::BitmapHandle { handle: 32 }).is_ok());
    }

    #[test]
    fn transform_variants_are_exclusive() {
        let legacy = Instruction::BitmapTransform {
            coefficient: Coefficient::A,
            value: 256,
        };
        let extended = Instruction::BitmapTransformExt {
            coefficient: Coefficient::A,
            precision: Precision::Fixed8_8,
            value: 256,
        };
        assert_eq!(GEN2.encode(&legacy).map(|c| c.raw()), Ok(0x1500_0100));
        assert_eq!(
            GEN2.encode(&extended),
            Err(Error::Unsupported(Unsupported::Requires {
                required: Generation::Gen3,
                active: Generation::Gen2
            }))
        );
        assert_eq!(
            GEN3.encode(&legacy),
            Err(Error::Unsupported(Unsupported::Withdrawn {
                last: Generation::Gen2,
                active: Generation::Gen3
            }))
        );
        assert_eq!(GEN3.encode(&extended).map(|c| c.raw()), Ok(0x1500_0100));
    }

    #[test]
    fn translation_coefficients_are_not_redefined() {
        let c = Instruction::BitmapTransform {
            coefficient: Coefficient::C,
            value: 0x10_0000,
        };
        assert_eq!(GEN2.encode(&c), GEN4.encode(&c));
        assert_eq!(
            GEN3.bitmap_transform_ext(Coefficient::F, Precision::Fixed1_15, 0),
            Err(Error::NoExtendedForm(InstructionId::BitmapTransformF))
        );
        assert_eq!(
            GEN2.layout(InstructionId::BitmapTransformC, Variant::Extended),
            Err(Error::NoExtendedForm(InstructionId::BitmapTransformC))
        );
        assert_eq!(
            GEN3.layout(InstructionId::BitmapTransformA, Variant::Base),
            Err(Error::Unsupported(Unsupported::Withdrawn {
                last: Generation::Gen2,
                active: Generation::Gen3
            }))
        );
    }

    #[test]
    fn extended_transform_sets_precision_bit() {
        assert_eq!(
            GEN3.bitmap_transform_ext(Coefficient::E, Precision::Fixed1_15, 0x8000)
                .map(|c| c.raw()),
            Ok(0x1902_8000)
        );
        assert_eq!(
            GEN3.bitmap_transform_ext(Coefficient::B, Precision::Fixed8_8, -1)
                .map(|c| c.raw()),
            Ok(0x1601_FFFF)
        );
    }

    #[test]
    fn transform_factor_differs_between_generations() {
        let gen2 = GEN2.bitmap_transform_factor(Coefficient::A, 0.5);
        let gen3 = GEN3.bitmap_transform_factor(Coefficient::A, 0.5);
        assert_eq!(gen2.raw(), 0x1500_0080);
        assert_eq!(gen3.raw(), 0x1502_4000);
        assert_ne!(gen2, gen3);

        assert_eq!(GEN3.bitmap_transform_factor(Coefficient::D, -0.5).raw(), 0x1803_C000);
        // out of 1.15 range falls back to 8.8
        assert_eq!(
            GEN2.bitmap_transform_factor(Coefficient::A, 2.0),
            GEN3.bitmap_transform_factor(Coefficient::A, 2.0)
        );
        assert_eq!(GEN3.bitmap_transform_factor(Coefficient::C, 0.5).raw(), 0x1700_0080);
    }

    #[test]
    fn rect_display_list() {
        let words = [
            GEN2.begin(Primitive::Rects),
            GEN2.vertex2f(10, 10),
            GEN2.vertex2f(100, 100),
            GEN2.end(),
        ];
        assert_eq!(
            words.map(|w| w.raw()),
            [0x1F00_0009, 0x4005_000A, 0x4032_0064, 0x2100_0000]
        );
    }

    #[test]
    fn embedded_graphics_interop() {
        assert_eq!(GEN2.vertex2f_point(Point::new(10, 10)), GEN2.vertex2f(10, 10));
        assert_eq!(
            GEN2.color_rgb888(Rgb888::new(0x12, 0x34, 0x56)).raw(),
            0x0412_3456
        );
        assert_eq!(GEN2.clear_color_rgb888(Rgb888::RED).raw(), 0x02FF_0000);
    }

    #[test]
    fn decode_vertex_discriminators() {
        assert_eq!(
            GEN2.decode(0x4005_000A),
            Ok(Instruction::Vertex2f { x: 10, y: 10 })
        );
        assert_eq!(
            GEN2.decode(0x7FFF_FFFF),
            Ok(Instruction::Vertex2f { x: -1, y: -1 })
        );
        assert_eq!(
            GEN2.decode(0x8141_4082),
            Ok(Instruction::Vertex2ii {
                x: 10,
                y: 20,
                handle: 1,
                cell: 2
            })
        );
        assert_eq!(GEN2.decode(0xFFFF_FF00), Err(Error::UnknownOpcode(0xFF)));
    }

    #[test]
    fn decode_respects_generation() {
        assert_eq!(GEN2.decode(0x3000_0000), Err(Error::UnknownOpcode(0x30)));
        assert_eq!(GEN3.decode(0x3000_0000), Ok(Instruction::IntFrr));
        assert_eq!(GEN2.decode(0x3100_0000), Err(Error::UnknownOpcode(0x31)));
        assert_eq!(
            GEN2.decode(0x1502_4000),
            Ok(Instruction::BitmapTransform {
                coefficient: Coefficient::A,
                value: 0x4000
            })
        );
        assert_eq!(
            GEN3.decode(0x1502_4000),
            Ok(Instruction::BitmapTransformExt {
                coefficient: Coefficient::A,
                precision: Precision::Fixed1_15,
                value: 0x4000
            })
        );
        assert_eq!(
            GEN3.decode(0x0180_1000),
            Ok(Instruction::BitmapSource2 {
                space: 1,
                addr: 0x1000
            })
        );
    }

    #[test]
    fn layouts_have_disjoint_fields() {
        for id in InstructionId::ALL {
            for variant in [Variant::Base, Variant::Extended] {
                if let Some(layout) = id.layout(variant) {
                    assert!(field::disjoint(layout.fields), "{:?} {:?}", id, variant);
                    assert!(layout.fields.len() <= MAX_OPERANDS);
                    let all = layout.fields.iter().fold(0, |m, f| m | f.word_mask());
                    assert_eq!(all & layout.opcode.word(), 0, "{:?}", id);
                    assert_eq!(layout.opcode, id.opcode());
                }
            }
        }
    }

    #[test]
    fn opcodes_identify_instructions() {
        for id in InstructionId::ALL {
            assert_eq!(InstructionId::from_word(id.opcode().word()), Some(id));
        }
    }

    fn generation() -> impl Strategy<Value = Generation> {
        prop_oneof![
            Just(Generation::Gen2),
            Just(Generation::Gen3),
            Just(Generation::Gen4)
        ]
    }

    proptest! {
        #[test]
        fn decode_encode_round_trip(word in any::<u32>(), generation in generation()) {
            let encoder = Encoder::new(generation);
            if let Ok(instruction) = encoder.decode(word) {
                let encoded = encoder.encode(&instruction).unwrap();
                prop_assert_eq!(encoder.decode(encoded.raw()), Ok(instruction));
            }
        }

        #[test]
        fn vertex2f_round_trip(x in -16384i16..16384, y in -16384i16..16384) {
            let strict = GEN2.with_validation(Validation::Strict);
            let word = strict.encode(&Instruction::Vertex2f { x, y }).unwrap();
            prop_assert_eq!(word, GEN2.vertex2f(x, y));
            prop_assert_eq!(GEN2.decode(word.raw()), Ok(Instruction::Vertex2f { x, y }));
        }

        #[test]
        fn color_truncation_matches_modulo(r in any::<u32>(), g in any::<u8>(), b in any::<u8>()) {
            let wide = layouts::COLOR_RGB.pack(&[r, g as u32, b as u32]);
            let narrow = GEN2.color_rgb((r % 256) as u8, g, b).raw();
            prop_assert_eq!(wide, narrow);
        }

        #[test]
        fn encoding_is_idempotent(w in 0u16..2048, h in 0u16..2048) {
            prop_assert_eq!(GEN4.scissor_size(w, h), GEN4.scissor_size(w, h));
            prop_assert_eq!(GEN4.bitmap_layout_h(w, h), GEN4.bitmap_layout_h(w, h));
        }
    }
}
