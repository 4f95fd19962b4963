//! Bit ranges of the four texture control words.
//!
//! Word 0 holds sampling state, word 1 the dimensions, base format and type
//! tag, word 2 the data pointer and word 3 the palette pointer and swizzle.
//! Several ranges are reused with a different meaning depending on the
//! [`TextureLayout`](crate::TextureLayout) selected by the type tag.

/// One contiguous bit range inside a control word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    pub word: usize,
    pub shift: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(word: usize, shift: u32, width: u32) -> Self {
        assert!(word < crate::CONTROL_WORDS);
        assert!(width > 0 && shift + width <= 32);
        Self { word, shift, width }
    }

    /// Largest value the field can hold.
    pub const fn max(self) -> u32 {
        if self.width == 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// The field's bits in place within its word.
    pub const fn mask(self) -> u32 {
        self.max() << self.shift
    }

    pub const fn get(self, words: &[u32; crate::CONTROL_WORDS]) -> u32 {
        (words[self.word] >> self.shift) & self.max()
    }

    /// Overwrite the field. Bits of `value` above the field width are dropped;
    /// callers validate first.
    pub fn set(self, words: &mut [u32; crate::CONTROL_WORDS], value: u32) {
        debug_assert!(value <= self.max(), "{value:#x} overflows {self:?}");
        let word = &mut words[self.word];
        *word = (*word & !self.mask()) | ((value << self.shift) & self.mask());
    }
}

// Word 0: sampling state.
pub const V_ADDR_MODE: BitField = BitField::new(0, 3, 3);
pub const U_ADDR_MODE: BitField = BitField::new(0, 6, 3);
pub const MIP_FILTER: BitField = BitField::new(0, 9, 1);
pub const MIN_FILTER: BitField = BitField::new(0, 10, 2);
pub const MAG_FILTER: BitField = BitField::new(0, 12, 2);
pub const MIP_COUNT: BitField = BitField::new(0, 17, 4);
pub const LOD_BIAS: BitField = BitField::new(0, 21, 6);
pub const GAMMA_MODE: BitField = BitField::new(0, 27, 2);
/// Bit 7 of the base format byte.
pub const FORMAT0: BitField = BitField::new(0, 31, 1);

// Word 1: dimensions, base format, type tag.
pub const HEIGHT: BitField = BitField::new(1, 0, 12);
pub const WIDTH: BitField = BitField::new(1, 12, 12);
pub const HEIGHT_LOG2: BitField = BitField::new(1, 0, 4);
pub const WIDTH_LOG2: BitField = BitField::new(1, 16, 4);
/// Bits 0..=4 of the base format byte.
pub const BASE_FORMAT: BitField = BitField::new(1, 24, 5);
pub const TEXTURE_TYPE: BitField = BitField::new(1, 29, 3);

// Word 2: data pointer.
pub const LOD_MIN0: BitField = BitField::new(2, 0, 2);
pub const DATA_ADDR: BitField = BitField::new(2, 2, 30);

// Word 3: palette pointer, swizzle, normalization.
pub const PALETTE_ADDR: BitField = BitField::new(3, 0, 26);
pub const LOD_MIN1: BitField = BitField::new(3, 26, 2);
pub const SWIZZLE: BitField = BitField::new(3, 28, 3);
pub const NORMALIZE_MODE: BitField = BitField::new(3, 31, 1);

/// Pieces of the linear-strided stride field, lowest bits first. They reuse
/// the mip filter, min filter, mip count and LOD bias ranges.
pub const STRIDE_PARTS: [BitField; 4] = [MIP_FILTER, MIN_FILTER, MIP_COUNT, LOD_BIAS];

/// Width of the combined stride field.
pub const STRIDE_BITS: u32 = 13;

/// Low address bits dropped when packing `data_addr`.
pub const DATA_ADDR_ALIGN: u32 = 1 << DATA_ADDR.shift;
/// Low address bits dropped when packing `palette_addr`.
pub const PALETTE_ADDR_ALIGN: u32 = 64;

pub(crate) fn get_stride_field(words: &[u32; crate::CONTROL_WORDS]) -> u32 {
    let mut value = 0;
    let mut at = 0;
    for part in STRIDE_PARTS {
        value |= part.get(words) << at;
        at += part.width;
    }
    value
}

pub(crate) fn set_stride_field(words: &mut [u32; crate::CONTROL_WORDS], value: u32) {
    let mut at = 0;
    for part in STRIDE_PARTS {
        part.set(words, (value >> at) & part.max());
        at += part.width;
    }
}

pub(crate) fn get_lod_min(words: &[u32; crate::CONTROL_WORDS]) -> u32 {
    LOD_MIN0.get(words) | (LOD_MIN1.get(words) << LOD_MIN0.width)
}

pub(crate) fn set_lod_min(words: &mut [u32; crate::CONTROL_WORDS], value: u32) {
    LOD_MIN0.set(words, value & LOD_MIN0.max());
    LOD_MIN1.set(words, (value >> LOD_MIN0.width) & LOD_MIN1.max());
}

const _: () = {
    let mut total = 0;
    let mut i = 0;
    while i < STRIDE_PARTS.len() {
        total += STRIDE_PARTS[i].width;
        i += 1;
    }
    assert!(total == STRIDE_BITS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word0_ranges_do_not_overlap() {
        let fields = [
            V_ADDR_MODE,
            U_ADDR_MODE,
            MIP_FILTER,
            MIN_FILTER,
            MAG_FILTER,
            MIP_COUNT,
            LOD_BIAS,
            GAMMA_MODE,
            FORMAT0,
        ];
        let mut seen = 0u32;
        for field in fields {
            assert_eq!(seen & field.mask(), 0, "{field:?} overlaps");
            seen |= field.mask();
        }
        // Bits 0..=2, 14..=16 and 29..=30 are reserved.
        assert_eq!(!seen, 0x6001_C007);
    }

    #[test]
    fn word3_is_fully_assigned() {
        let mask = PALETTE_ADDR.mask() | LOD_MIN1.mask() | SWIZZLE.mask() | NORMALIZE_MODE.mask();
        assert_eq!(mask, u32::MAX);
    }

    #[test]
    fn stride_field_scatters_across_word0() {
        let mut words = [0u32; crate::CONTROL_WORDS];
        set_stride_field(&mut words, 0x1FFF);
        assert_eq!(
            words[0],
            MIP_FILTER.mask() | MIN_FILTER.mask() | MIP_COUNT.mask() | LOD_BIAS.mask()
        );
        assert_eq!(get_stride_field(&words), 0x1FFF);
        // The mag filter sits between the pieces and is untouched.
        assert_eq!(words[0] & MAG_FILTER.mask(), 0);
    }

    #[test]
    fn lod_min_splits_across_words_2_and_3() {
        let mut words = [0u32; crate::CONTROL_WORDS];
        set_lod_min(&mut words, 0b1101);
        assert_eq!(words[2], 0b01);
        assert_eq!(words[3], 0b11 << 26);
        assert_eq!(get_lod_min(&words), 0b1101);
    }
}
