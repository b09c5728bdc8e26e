//! Bit field descriptors
//!
//! Every display list operand is described by a [`Field`]: a width and an
//! offset inside the 32 bit word. Packing masks the value to the width before
//! shifting, so out of range values are truncated and never spill into a
//! neighbouring field.

/// One operand inside an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// operand name, used in error reports
    pub name: &'static str,
    /// bits
    pub width: u8,
    /// position of the lowest bit
    pub offset: u8,
    /// two's complement operand, sign extended when extracted
    pub signed: bool,
}

impl Field {
    /// Unsigned field
    pub const fn new(name: &'static str, width: u8, offset: u8) -> Self {
        Field {
            name,
            width,
            offset,
            signed: false,
        }
    }

    /// Two's complement field
    pub const fn signed(name: &'static str, width: u8, offset: u8) -> Self {
        Field {
            name,
            width,
            offset,
            signed: true,
        }
    }

    /// Mask of `width` low bits
    pub const fn mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Mask of the field at its position in the word
    pub const fn word_mask(&self) -> u32 {
        self.mask() << self.offset
    }

    /// Masks `value` to the field width and shifts it into position
    pub const fn pack(&self, value: u32) -> u32 {
        (value & self.mask()) << self.offset
    }

    /// Raw field bits of `word`
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.offset) & self.mask()
    }

    /// Field bits of `word`, sign extended for signed fields
    pub const fn extract_value(&self, word: u32) -> u32 {
        let raw = self.extract(word);
        if self.signed && self.width > 0 && self.width < 32 && raw & (1 << (self.width - 1)) != 0 {
            raw | !self.mask()
        } else {
            raw
        }
    }

    /// Returns true if `value` survives packing unchanged
    ///
    /// Signed fields take the value as two's complement `i32`.
    pub const fn fits(&self, value: u32) -> bool {
        if self.width >= 32 {
            return true;
        }
        if self.signed {
            let value = value as i32;
            let min = -(1i32 << (self.width - 1));
            let max = (1i32 << (self.width - 1)) - 1;
            value >= min && value <= max
        } else {
            value <= self.mask()
        }
    }
}

/// ORs every `(field, value)` pair into `base`
///
/// Surplus values or fields are ignored.
pub const fn pack(base: u32, fields: &[Field], values: &[u32]) -> u32 {
    let mut word = base;
    let mut i = 0;
    while i < fields.len() && i < values.len() {
        word |= fields[i].pack(values[i]);
        i += 1;
    }
    word
}

/// Returns true if no two fields share a bit
pub fn disjoint(fields: &[Field]) -> bool {
    let mut seen = 0u32;
    for field in fields {
        if seen & field.word_mask() != 0 {
            return false;
        }
        seen |= field.word_mask();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Field = Field::new("red", 8, 16);
    const GREEN: Field = Field::new("green", 8, 8);
    const BLUE: Field = Field::new("blue", 8, 0);
    const X: Field = Field::signed("x", 15, 15);

    #[test]
    fn masks() {
        assert_eq!(RED.mask(), 0xFF);
        assert_eq!(RED.word_mask(), 0x00FF_0000);
        assert_eq!(Field::new("all", 32, 0).mask(), u32::MAX);
        assert_eq!(X.word_mask(), 0x3FFF_8000);
    }

    #[test]
    fn pack_truncates_to_width() {
        assert_eq!(RED.pack(300), RED.pack(300 % 256));
        assert_eq!(GREEN.pack(0x1FF), 0x0000_FF00);
    }

    #[test]
    fn pack_ors_fields() {
        assert_eq!(
            pack(0x0400_0000, &[RED, GREEN, BLUE], &[255, 0, 0]),
            0x04FF_0000
        );
        assert_eq!(
            pack(0x0400_0000, &[RED, GREEN, BLUE], &[1, 2, 3]),
            0x0401_0203
        );
    }

    #[test]
    fn negative_values_stay_in_field() {
        let word = X.pack(-1i32 as u32);
        assert_eq!(word, 0x3FFF_8000);
        assert_eq!(X.extract(word), 0x7FFF);
        assert_eq!(X.extract_value(word) as i32, -1);
    }

    #[test]
    fn fits_checks_range() {
        assert!(RED.fits(255));
        assert!(!RED.fits(256));
        assert!(X.fits(16383));
        assert!(X.fits(-16384i32 as u32));
        assert!(!X.fits(16384));
        assert!(!X.fits(-16385i32 as u32));
    }

    #[test]
    fn disjoint_detects_overlap() {
        assert!(disjoint(&[RED, GREEN, BLUE]));
        assert!(!disjoint(&[RED, Field::new("wide", 9, 8)]));
    }
}
