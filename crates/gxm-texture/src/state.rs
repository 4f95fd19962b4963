//! Small enumerations packed into the texture control words.
//!
//! Each enum's discriminant is the value stored in its bit field (not the
//! shifted hardware constant). Fields whose width is fully covered by the enum
//! decode infallibly; the others go through `from_u32`.

/// Texture type tag. The discriminant is the 3-bit value stored in word 1;
/// [`TextureType::hw_value`] gives the shifted hardware constant.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureType {
    Swizzled = 0,
    Cube = 2,
    Linear = 3,
    Tiled = 4,
    SwizzledArbitrary = 5,
    LinearStrided = 6,
    CubeArbitrary = 7,
}

impl TextureType {
    pub const ALL: &'static [Self] = &[
        Self::Swizzled,
        Self::Cube,
        Self::Linear,
        Self::Tiled,
        Self::SwizzledArbitrary,
        Self::LinearStrided,
        Self::CubeArbitrary,
    ];

    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Swizzled),
            2 => Some(Self::Cube),
            3 => Some(Self::Linear),
            4 => Some(Self::Tiled),
            5 => Some(Self::SwizzledArbitrary),
            6 => Some(Self::LinearStrided),
            7 => Some(Self::CubeArbitrary),
            _ => None,
        }
    }

    pub const fn hw_value(self) -> u32 {
        (self as u32) << 29
    }

    pub const fn layout(self) -> TextureLayout {
        TextureLayout::for_type_field(self as u32)
    }
}

/// How word 0 and word 1 are interpreted for a given texture type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureLayout {
    /// 12-bit literal width and height.
    Generic,
    /// Generic dimensions plus a byte stride overlaid on the mip/LOD fields.
    Strided,
    /// Width and height stored as log2 (swizzled and cube textures).
    Pow2,
}

impl TextureLayout {
    /// Layout selected by a raw texture-type field. Undefined tags decode with
    /// the generic layout.
    pub const fn for_type_field(raw: u32) -> Self {
        match raw & 0x7 {
            0 | 2 => Self::Pow2,
            6 => Self::Strided,
            _ => Self::Generic,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    #[default]
    Point = 0,
    Linear = 1,
    AnisoPoint = 2,
    AnisoLinear = 3,
}

impl TextureFilter {
    pub const fn from_field(v: u32) -> Self {
        match v & 0x3 {
            0 => Self::Point,
            1 => Self::Linear,
            2 => Self::AnisoPoint,
            _ => Self::AnisoLinear,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MipFilter {
    #[default]
    Disabled = 0,
    Enabled = 1,
}

impl MipFilter {
    pub const fn from_field(v: u32) -> Self {
        if v & 1 == 0 {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddrMode {
    #[default]
    Repeat = 0,
    Mirror = 1,
    Clamp = 2,
    MirrorClamp = 3,
    RepeatIgnoreBorder = 4,
    ClampFullBorder = 5,
    ClampIgnoreBorder = 6,
    ClampHalfBorder = 7,
}

impl AddrMode {
    pub const fn from_field(v: u32) -> Self {
        match v & 0x7 {
            0 => Self::Repeat,
            1 => Self::Mirror,
            2 => Self::Clamp,
            3 => Self::MirrorClamp,
            4 => Self::RepeatIgnoreBorder,
            5 => Self::ClampFullBorder,
            6 => Self::ClampIgnoreBorder,
            _ => Self::ClampHalfBorder,
        }
    }
}

/// sRGB decoding applied to texture channels.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextureGammaMode {
    #[default]
    None = 0,
    R = 1,
    Gr = 3,
}

impl TextureGammaMode {
    /// Three-channel gamma shares its bit pattern with [`TextureGammaMode::R`].
    pub const BGR: Self = Self::R;

    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::R),
            3 => Some(Self::Gr),
            _ => None,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalizeMode {
    #[default]
    Disabled = 0,
    Enabled = 1,
}

impl NormalizeMode {
    pub const fn from_field(v: u32) -> Self {
        if v & 1 == 0 {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_type_hw_values() {
        assert_eq!(TextureType::Swizzled.hw_value(), 0x0000_0000);
        assert_eq!(TextureType::Cube.hw_value(), 0x4000_0000);
        assert_eq!(TextureType::Linear.hw_value(), 0x6000_0000);
        assert_eq!(TextureType::Tiled.hw_value(), 0x8000_0000);
        assert_eq!(TextureType::LinearStrided.hw_value(), 0xC000_0000);
        assert_eq!(TextureType::CubeArbitrary.hw_value(), 0xE000_0000);
    }

    #[test]
    fn layouts_follow_type_tag() {
        assert_eq!(TextureType::Swizzled.layout(), TextureLayout::Pow2);
        assert_eq!(TextureType::Cube.layout(), TextureLayout::Pow2);
        assert_eq!(TextureType::LinearStrided.layout(), TextureLayout::Strided);
        assert_eq!(TextureType::SwizzledArbitrary.layout(), TextureLayout::Generic);
        // Tag 1 is unassigned.
        assert_eq!(TextureType::from_u32(1), None);
        assert_eq!(TextureLayout::for_type_field(1), TextureLayout::Generic);
    }

    #[test]
    fn gamma_bgr_aliases_r() {
        assert_eq!(TextureGammaMode::BGR, TextureGammaMode::R);
        assert_eq!(TextureGammaMode::from_u32(2), None);
    }
}
