//! Texture format codes: `TextureBaseFormat | TextureSwizzle`.

use core::fmt;

use crate::FormatCode;

/// Bits of a texture format code owned by the base format.
pub const TEXTURE_BASE_FORMAT_MASK: u32 = 0x9F00_0000;
/// Bits of a texture format code owned by the swizzle.
pub const TEXTURE_SWIZZLE_MASK: u32 = 0x0000_F000;

raw_code! {
    /// Storage layout and channel bit widths of a texture.
    pub struct TextureBaseFormat(mask = TEXTURE_BASE_FORMAT_MASK);
}

raw_code! {
    /// Channel ordering of a texture. The meaning of a value depends on the
    /// [`SwizzleFamily`] of the base format it is paired with.
    pub struct TextureSwizzle(mask = TEXTURE_SWIZZLE_MASK);
}

/// Which swizzle enumeration applies to a base format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwizzleFamily {
    Four,
    Three,
    Two,
    TwoDepthStencil,
    One,
    Yuv420,
    Yuv422,
}

impl SwizzleFamily {
    /// Every swizzle of this family as raw code parts.
    pub const fn swizzles(self) -> &'static [TextureSwizzle] {
        match self {
            SwizzleFamily::Four => Swizzle4::RAW,
            SwizzleFamily::Three => Swizzle3::RAW,
            SwizzleFamily::Two => Swizzle2::RAW,
            SwizzleFamily::TwoDepthStencil => Swizzle2Ds::RAW,
            SwizzleFamily::One => Swizzle1::RAW,
            SwizzleFamily::Yuv420 => SwizzleYuv420::RAW,
            SwizzleFamily::Yuv422 => SwizzleYuv422::RAW,
        }
    }
}

base_formats! {
    impl TextureBaseFormat {
        family: SwizzleFamily,
        bits: bits_per_pixel,
        U8 = 0x0000_0000 => (8, One),
        S8 = 0x0100_0000 => (8, One),
        U4U4U4U4 = 0x0200_0000 => (16, Four),
        U8U3U3U2 = 0x0300_0000 => (16, Four),
        U1U5U5U5 = 0x0400_0000 => (16, Four),
        U5U6U5 = 0x0500_0000 => (16, Three),
        S5S5U6 = 0x0600_0000 => (16, Three),
        U8U8 = 0x0700_0000 => (16, Two),
        S8S8 = 0x0800_0000 => (16, Two),
        U16 = 0x0900_0000 => (16, One),
        S16 = 0x0A00_0000 => (16, One),
        F16 = 0x0B00_0000 => (16, One),
        U8U8U8U8 = 0x0C00_0000 => (32, Four),
        S8S8S8S8 = 0x0D00_0000 => (32, Four),
        U2U10U10U10 = 0x0E00_0000 => (32, Four),
        U16U16 = 0x0F00_0000 => (32, Two),
        S16S16 = 0x1000_0000 => (32, Two),
        F16F16 = 0x1100_0000 => (32, Two),
        F32 = 0x1200_0000 => (32, One),
        F32M = 0x1300_0000 => (32, One),
        X8S8S8U8 = 0x1400_0000 => (32, Three),
        X8U24 = 0x1500_0000 => (32, TwoDepthStencil),
        U32 = 0x1700_0000 => (32, One),
        S32 = 0x1800_0000 => (32, One),
        SE5M9M9M9 = 0x1900_0000 => (32, Three),
        F11F11F10 = 0x1A00_0000 => (32, Three),
        F16F16F16F16 = 0x1B00_0000 => (64, Four),
        U16U16U16U16 = 0x1C00_0000 => (64, Four),
        S16S16S16S16 = 0x1D00_0000 => (64, Four),
        F32F32 = 0x1E00_0000 => (64, Two),
        U32U32 = 0x1F00_0000 => (64, Two),
        PVRT2BPP = 0x8000_0000 => (2, Four),
        PVRT4BPP = 0x8100_0000 => (4, Four),
        PVRTII2BPP = 0x8200_0000 => (2, Four),
        PVRTII4BPP = 0x8300_0000 => (4, Four),
        UBC1 = 0x8500_0000 => (4, Four),
        UBC2 = 0x8600_0000 => (8, Four),
        UBC3 = 0x8700_0000 => (8, Four),
        UBC4 = 0x8800_0000 => (4, One),
        SBC4 = 0x8900_0000 => (4, One),
        UBC5 = 0x8A00_0000 => (8, Two),
        SBC5 = 0x8B00_0000 => (8, Two),
        YUV420P2 = 0x9000_0000 => (12, Yuv420),
        YUV422 = 0x9100_0000 => (16, Yuv422),
        YUV420P3 = 0x9200_0000 => (12, Yuv420),
        P4 = 0x9400_0000 => (4, Four),
        P8 = 0x9500_0000 => (8, Four),
        U8U8U8 = 0x9800_0000 => (24, Three),
        S8S8S8 = 0x9900_0000 => (24, Three),
        U2F10F10F10 = 0x9A00_0000 => (32, Four),
    }
}

impl TextureBaseFormat {
    pub const fn is_block_compressed(self) -> bool {
        matches!(
            self,
            Self::PVRT2BPP
                | Self::PVRT4BPP
                | Self::PVRTII2BPP
                | Self::PVRTII4BPP
                | Self::UBC1
                | Self::UBC2
                | Self::UBC3
                | Self::UBC4
                | Self::SBC4
                | Self::UBC5
                | Self::SBC5
        )
    }

    pub const fn is_yuv(self) -> bool {
        matches!(self, Self::YUV420P2 | Self::YUV422 | Self::YUV420P3)
    }

    /// Paletted formats read their colors through the descriptor's palette
    /// pointer.
    pub const fn is_paletted(self) -> bool {
        matches!(self, Self::P4 | Self::P8)
    }
}

impl fmt::Debug for TextureSwizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureSwizzle({:#06x})", self.0)
    }
}

swizzle_family! {
    /// Four-channel orderings.
    pub enum Swizzle4: TextureSwizzle {
        Abgr = 0x0000,
        Argb = 0x1000,
        Rgba = 0x2000,
        Bgra = 0x3000,
        OneBgr = 0x4000,
        OneRgb = 0x5000,
        RgbOne = 0x6000,
        BgrOne = 0x7000,
    }
}

swizzle_family! {
    /// Three-channel orderings.
    pub enum Swizzle3: TextureSwizzle {
        Bgr = 0x0000,
        Rgb = 0x1000,
    }
}

swizzle_family! {
    /// Two-channel orderings.
    pub enum Swizzle2: TextureSwizzle {
        Gr = 0x0000,
        ZeroZeroGr = 0x1000,
        Grrr = 0x2000,
        Rggg = 0x3000,
        Grgr = 0x4000,
        ZeroZeroRg = 0x5000,
    }
}

swizzle_family! {
    /// Two-channel depth/stencil orderings.
    pub enum Swizzle2Ds: TextureSwizzle {
        Sd = 0x0000,
        Ds = 0x1000,
    }
}

swizzle_family! {
    /// Single-channel replication patterns.
    pub enum Swizzle1: TextureSwizzle {
        R = 0x0000,
        ZeroZeroZeroR = 0x1000,
        OneOneOneR = 0x2000,
        Rrrr = 0x3000,
        ZeroRrr = 0x4000,
        OneRrr = 0x5000,
        RZeroZeroZero = 0x6000,
        ROneOneOne = 0x7000,
    }
}

swizzle_family! {
    /// Plane ordering and color-space conversion of YUV 4:2:0 formats.
    pub enum SwizzleYuv420: TextureSwizzle {
        YuvCsc0 = 0x0000,
        YvuCsc0 = 0x1000,
        YuvCsc1 = 0x2000,
        YvuCsc1 = 0x3000,
    }
}

swizzle_family! {
    /// Sample ordering and color-space conversion of YUV 4:2:2 formats.
    pub enum SwizzleYuv422: TextureSwizzle {
        YuyvCsc0 = 0x0000,
        YvyuCsc0 = 0x1000,
        UyvyCsc0 = 0x2000,
        VyuyCsc0 = 0x3000,
        YuyvCsc1 = 0x4000,
        YvyuCsc1 = 0x5000,
        UyvyCsc1 = 0x6000,
        VyuyCsc1 = 0x7000,
    }
}

/// A complete texture format code.
///
/// Unlike its parts, a `TextureFormat` keeps every bit it was built from: a
/// code with bits outside both masks is representable (and rejected by the
/// descriptor codec), so decoding hardware words never loses information.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TextureFormat(u32);

impl TextureFormat {
    pub const fn new(base: TextureBaseFormat, swizzle: TextureSwizzle) -> Self {
        Self(base.raw() | swizzle.raw())
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn base(self) -> TextureBaseFormat {
        TextureBaseFormat::from_raw(self.0)
    }

    pub const fn swizzle(self) -> TextureSwizzle {
        TextureSwizzle::from_raw(self.0)
    }

    /// Bits set outside both the base format and the swizzle masks.
    pub const fn stray_bits(self) -> u32 {
        self.0 & !(TEXTURE_BASE_FORMAT_MASK | TEXTURE_SWIZZLE_MASK)
    }

    /// True when the base format is named and the swizzle belongs to its
    /// family.
    pub fn is_known(self) -> bool {
        if self.stray_bits() != 0 {
            return false;
        }
        match self.base().swizzle_family() {
            Some(family) => family.swizzles().contains(&self.swizzle()),
            None => false,
        }
    }

    // Aliases. These are verbatim values, not recomputed from their parts.

    /// `U8 | 1RRR`
    pub const L8: Self = Self(0x0000_5000);
    /// `U8 | R000`
    pub const A8: Self = Self(0x0000_6000);
    /// `U8 | 000R`
    pub const R8: Self = Self(0x0000_1000);
    /// `U4U4U4U4 | ARGB`
    pub const A4R4G4B4: Self = Self(0x0200_1000);
    /// `U1U5U5U5 | ARGB`
    pub const A1R5G5B5: Self = Self(0x0400_1000);
    /// `U5U6U5 | RGB`
    pub const R5G6B5: Self = Self(0x0500_1000);
    /// `U8U8 | GRRR`
    pub const A8L8: Self = Self(0x0700_2000);
    /// `U8U8 | RGGG`
    pub const L8A8: Self = Self(0x0700_3000);
    /// `U8U8 | 00GR`
    pub const G8R8: Self = Self(0x0700_1000);
    /// `U16 | 1RRR`
    pub const L16: Self = Self(0x0900_5000);
    /// `U16 | R000`
    pub const A16: Self = Self(0x0900_6000);
    /// `U16 | 000R`
    pub const R16: Self = Self(0x0900_1000);
    /// `U16 | R`
    pub const D16: Self = Self(0x0900_0000);
    /// `F16 | 1RRR`
    pub const LF16: Self = Self(0x0B00_5000);
    /// `F16 | R000`
    pub const AF16: Self = Self(0x0B00_6000);
    /// `F16 | 000R`
    pub const RF16: Self = Self(0x0B00_1000);
    /// `U8U8U8U8 | ARGB`
    pub const A8R8G8B8: Self = Self(0x0C00_1000);
    /// `U8U8U8U8 | ABGR`
    pub const A8B8G8R8: Self = Self(0x0C00_0000);
    /// `F16F16 | GRRR`
    pub const AF16LF16: Self = Self(0x1100_2000);
    /// `F16F16 | RGGG`
    pub const LF16AF16: Self = Self(0x1100_3000);
    /// `F16F16 | 00GR`
    pub const GF16RF16: Self = Self(0x1100_1000);
    /// `F32M | 1RRR`
    pub const LF32M: Self = Self(0x1300_5000);
    /// `F32M | R000`
    pub const AF32M: Self = Self(0x1300_6000);
    /// `F32M | 000R`
    pub const RF32M: Self = Self(0x1300_1000);
    /// `F32M | R`
    pub const DF32M: Self = Self(0x1300_0000);
    /// `YUV422 | VYUY_CSC0`
    pub const VYUY: Self = Self(0x9100_3000);
    /// `YUV422 | YVYU_CSC0`
    pub const YVYU: Self = Self(0x9100_1000);
    /// `YUV422 | UYVY_CSC0`
    pub const UYVY: Self = Self(0x9100_2000);
    /// `YUV422 | YUYV_CSC0`
    pub const YUYV: Self = Self(0x9100_0000);
    /// `YUV420P2 | YVU_CSC0`
    pub const YVU420P2: Self = Self(0x9000_1000);
    /// `YUV420P2 | YUV_CSC0`
    pub const YUV420P2: Self = Self(0x9000_0000);
    /// `YUV420P3 | YVU_CSC0`
    pub const YVU420P3: Self = Self(0x9200_1000);
    /// `YUV420P3 | YUV_CSC0`
    pub const YUV420P3: Self = Self(0x9200_0000);

    /// Every alias with its name.
    pub const ALIASES: &'static [(&'static str, Self)] = &[
        ("L8", Self::L8),
        ("A8", Self::A8),
        ("R8", Self::R8),
        ("A4R4G4B4", Self::A4R4G4B4),
        ("A1R5G5B5", Self::A1R5G5B5),
        ("R5G6B5", Self::R5G6B5),
        ("A8L8", Self::A8L8),
        ("L8A8", Self::L8A8),
        ("G8R8", Self::G8R8),
        ("L16", Self::L16),
        ("A16", Self::A16),
        ("R16", Self::R16),
        ("D16", Self::D16),
        ("LF16", Self::LF16),
        ("AF16", Self::AF16),
        ("RF16", Self::RF16),
        ("A8R8G8B8", Self::A8R8G8B8),
        ("A8B8G8R8", Self::A8B8G8R8),
        ("AF16LF16", Self::AF16LF16),
        ("LF16AF16", Self::LF16AF16),
        ("GF16RF16", Self::GF16RF16),
        ("LF32M", Self::LF32M),
        ("AF32M", Self::AF32M),
        ("RF32M", Self::RF32M),
        ("DF32M", Self::DF32M),
        ("VYUY", Self::VYUY),
        ("YVYU", Self::YVYU),
        ("UYVY", Self::UYVY),
        ("YUYV", Self::YUYV),
        ("YVU420P2", Self::YVU420P2),
        ("YUV420P2", Self::YUV420P2),
        ("YVU420P3", Self::YVU420P3),
        ("YUV420P3", Self::YUV420P3),
    ];

    /// Every `(base, swizzle)` pair legal under the swizzle family of a named
    /// base format.
    pub fn catalog() -> impl Iterator<Item = (TextureBaseFormat, TextureSwizzle)> {
        TextureBaseFormat::ALL.iter().flat_map(|&base| {
            let swizzles = match base.swizzle_family() {
                Some(family) => family.swizzles(),
                None => &[],
            };
            swizzles.iter().map(move |&swizzle| (base, swizzle))
        })
    }
}

impl fmt::Debug for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureFormat({:?} | {:#06x}", self.base(), self.swizzle().raw())?;
        if self.stray_bits() != 0 {
            write!(f, " | stray {:#010x}", self.stray_bits())?;
        }
        f.write_str(")")
    }
}

impl From<TextureFormat> for u32 {
    fn from(v: TextureFormat) -> u32 {
        v.0
    }
}

impl FormatCode for TextureFormat {
    type Base = TextureBaseFormat;
    type Swizzle = TextureSwizzle;

    const BASE_MASK: u32 = TEXTURE_BASE_FORMAT_MASK;
    const SWIZZLE_MASK: u32 = TEXTURE_SWIZZLE_MASK;

    fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    fn raw(self) -> u32 {
        self.0
    }

    fn combine(base: TextureBaseFormat, swizzle: TextureSwizzle) -> Self {
        Self::new(base, swizzle)
    }

    fn decompose(self) -> (TextureBaseFormat, TextureSwizzle) {
        (self.base(), self.swizzle())
    }
}
