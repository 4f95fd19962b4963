//! Color render-target format codes: `ColorBaseFormat | ColorSwizzle`.

use core::fmt;

use crate::FormatCode;

pub const COLOR_BASE_FORMAT_MASK: u32 = 0xF180_0000;
pub const COLOR_SWIZZLE_MASK: u32 = 0x0030_0000;

raw_code! {
    /// Storage layout and channel bit widths of a color surface.
    pub struct ColorBaseFormat(mask = COLOR_BASE_FORMAT_MASK);
}

raw_code! {
    /// Channel ordering of a color surface.
    pub struct ColorSwizzle(mask = COLOR_SWIZZLE_MASK);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSwizzleFamily {
    Four,
    Three,
    Two,
    One,
}

impl ColorSwizzleFamily {
    pub const fn swizzles(self) -> &'static [ColorSwizzle] {
        match self {
            ColorSwizzleFamily::Four => ColorSwizzle4::RAW,
            ColorSwizzleFamily::Three => ColorSwizzle3::RAW,
            ColorSwizzleFamily::Two => ColorSwizzle2::RAW,
            ColorSwizzleFamily::One => ColorSwizzle1::RAW,
        }
    }
}

base_formats! {
    impl ColorBaseFormat {
        family: ColorSwizzleFamily,
        bits: bits_per_pixel,
        U8U8U8U8 = 0x0000_0000 => (32, Four),
        U8U8U8 = 0x1000_0000 => (24, Three),
        U5U6U5 = 0x3000_0000 => (16, Three),
        U1U5U5U5 = 0x4000_0000 => (16, Four),
        U4U4U4U4 = 0x5000_0000 => (16, Four),
        U8U3U3U2 = 0x6000_0000 => (16, Four),
        F16 = 0xF000_0000 => (16, One),
        F16F16 = 0x0080_0000 => (32, Two),
        F32 = 0x1080_0000 => (32, One),
        S16 = 0x2080_0000 => (16, One),
        S16S16 = 0x3080_0000 => (32, Two),
        U16 = 0x4080_0000 => (16, One),
        U16U16 = 0x5080_0000 => (32, Two),
        U2U10U10U10 = 0x6080_0000 => (32, Four),
        U8 = 0x8080_0000 => (8, One),
        S8 = 0x9080_0000 => (8, One),
        S5S5U6 = 0xA080_0000 => (16, Three),
        U8U8 = 0xB080_0000 => (16, Two),
        S8S8 = 0xC080_0000 => (16, Two),
        U8S8S8U8 = 0xD080_0000 => (32, Four),
        S8S8S8S8 = 0xE080_0000 => (32, Four),
        F16F16F16F16 = 0x0100_0000 => (64, Four),
        F32F32 = 0x1100_0000 => (64, Two),
        F11F11F10 = 0x2100_0000 => (32, Three),
        SE5M9M9M9 = 0x3100_0000 => (32, Three),
        U2F10F10F10 = 0x4100_0000 => (32, Four),
    }
}

impl ColorBaseFormat {
    /// Bytes one pixel occupies in memory.
    pub const fn bytes_per_pixel(self) -> Option<u32> {
        match self.bits_per_pixel() {
            Some(bits) => Some(bits / 8),
            None => None,
        }
    }

    /// Formats wider than 32 bits need the 64-bit output register.
    pub const fn needs_64bit_output(self) -> bool {
        matches!(self, Self::F16F16F16F16 | Self::F32F32)
    }
}

impl fmt::Debug for ColorSwizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorSwizzle({:#010x})", self.0)
    }
}

swizzle_family! {
    pub enum ColorSwizzle4: ColorSwizzle {
        Abgr = 0x0000_0000,
        Argb = 0x0010_0000,
        Rgba = 0x0020_0000,
        Bgra = 0x0030_0000,
    }
}

swizzle_family! {
    pub enum ColorSwizzle3: ColorSwizzle {
        Bgr = 0x0000_0000,
        Rgb = 0x0010_0000,
    }
}

swizzle_family! {
    pub enum ColorSwizzle2: ColorSwizzle {
        Gr = 0x0000_0000,
        Rg = 0x0010_0000,
        Ra = 0x0020_0000,
        Ar = 0x0030_0000,
    }
}

swizzle_family! {
    pub enum ColorSwizzle1: ColorSwizzle {
        R = 0x0000_0000,
        G = 0x0010_0000,
    }
}

impl ColorSwizzle1 {
    /// Alpha-only targets share the bit pattern of [`ColorSwizzle1::G`].
    pub const A: Self = Self::G;
}

/// A complete color surface format code.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ColorFormat(u32);

impl ColorFormat {
    pub const fn new(base: ColorBaseFormat, swizzle: ColorSwizzle) -> Self {
        Self(base.raw() | swizzle.raw())
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn base(self) -> ColorBaseFormat {
        ColorBaseFormat::from_raw(self.0)
    }

    pub const fn swizzle(self) -> ColorSwizzle {
        ColorSwizzle::from_raw(self.0)
    }

    pub const fn stray_bits(self) -> u32 {
        self.0 & !(COLOR_BASE_FORMAT_MASK | COLOR_SWIZZLE_MASK)
    }

    pub fn is_known(self) -> bool {
        if self.stray_bits() != 0 {
            return false;
        }
        match self.base().swizzle_family() {
            Some(family) => family.swizzles().contains(&self.swizzle()),
            None => false,
        }
    }

    /// `U8U8U8U8 | ABGR`
    pub const A8B8G8R8: Self = Self(0x0000_0000);
    /// `U8U8U8U8 | ARGB`
    pub const A8R8G8B8: Self = Self(0x0010_0000);
    /// `U5U6U5 | RGB`
    pub const R5G6B5: Self = Self(0x3010_0000);
    /// `U1U5U5U5 | ARGB`
    pub const A1R5G5B5: Self = Self(0x4010_0000);
    /// `U4U4U4U4 | ARGB`
    pub const A4R4G4B4: Self = Self(0x5010_0000);
    /// `U8 | A`
    pub const A8: Self = Self(0x8090_0000);

    pub const ALIASES: &'static [(&'static str, Self)] = &[
        ("A8B8G8R8", Self::A8B8G8R8),
        ("A8R8G8B8", Self::A8R8G8B8),
        ("R5G6B5", Self::R5G6B5),
        ("A1R5G5B5", Self::A1R5G5B5),
        ("A4R4G4B4", Self::A4R4G4B4),
        ("A8", Self::A8),
    ];

    pub fn catalog() -> impl Iterator<Item = (ColorBaseFormat, ColorSwizzle)> {
        ColorBaseFormat::ALL.iter().flat_map(|&base| {
            let swizzles = match base.swizzle_family() {
                Some(family) => family.swizzles(),
                None => &[],
            };
            swizzles.iter().map(move |&swizzle| (base, swizzle))
        })
    }
}

impl fmt::Debug for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorFormat({:?} | {:#010x}", self.base(), self.swizzle().raw())?;
        if self.stray_bits() != 0 {
            write!(f, " | stray {:#010x}", self.stray_bits())?;
        }
        f.write_str(")")
    }
}

impl From<ColorFormat> for u32 {
    fn from(v: ColorFormat) -> u32 {
        v.0
    }
}

impl FormatCode for ColorFormat {
    type Base = ColorBaseFormat;
    type Swizzle = ColorSwizzle;

    const BASE_MASK: u32 = COLOR_BASE_FORMAT_MASK;
    const SWIZZLE_MASK: u32 = COLOR_SWIZZLE_MASK;

    fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    fn raw(self) -> u32 {
        self.0
    }

    fn combine(base: ColorBaseFormat, swizzle: ColorSwizzle) -> Self {
        Self::new(base, swizzle)
    }

    fn decompose(self) -> (ColorBaseFormat, ColorSwizzle) {
        (self.base(), self.swizzle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_swizzle_shares_green_bits() {
        assert_eq!(ColorSwizzle1::A, ColorSwizzle1::G);
        assert_eq!(ColorSwizzle1::A.raw().raw(), 0x0010_0000);
    }

    #[test]
    fn bytes_per_pixel_rounds_from_bits() {
        assert_eq!(ColorBaseFormat::U8U8U8.bytes_per_pixel(), Some(3));
        assert_eq!(ColorBaseFormat::F32F32.bytes_per_pixel(), Some(8));
        assert_eq!(ColorBaseFormat::from_raw(0x7000_0000).bytes_per_pixel(), None);
    }

    #[test]
    fn only_wide_formats_need_the_64bit_register() {
        let wide: Vec<_> = ColorBaseFormat::ALL
            .iter()
            .copied()
            .filter(|b| b.needs_64bit_output())
            .collect();
        assert_eq!(wide, [ColorBaseFormat::F16F16F16F16, ColorBaseFormat::F32F32]);
    }
}
