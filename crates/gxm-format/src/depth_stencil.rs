//! Depth/stencil formats. These codes have no swizzle part.

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthStencilFormat {
    Df32 = 0x0004_4000,
    S8 = 0x0002_2000,
    Df32S8 = 0x0006_6000,
    S8D24 = 0x0126_6000,
    D16 = 0x0244_4000,
}

impl DepthStencilFormat {
    pub const ALL: &'static [Self] = &[Self::Df32, Self::S8, Self::Df32S8, Self::S8D24, Self::D16];

    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0x0004_4000 => Some(Self::Df32),
            0x0002_2000 => Some(Self::S8),
            0x0006_6000 => Some(Self::Df32S8),
            0x0126_6000 => Some(Self::S8D24),
            0x0244_4000 => Some(Self::D16),
            _ => None,
        }
    }

    pub const fn has_depth(self) -> bool {
        !matches!(self, Self::S8)
    }

    pub const fn has_stencil(self) -> bool {
        matches!(self, Self::S8 | Self::Df32S8 | Self::S8D24)
    }

    /// Depth and stencil share one buffer (stencil in the high byte).
    pub const fn is_interleaved(self) -> bool {
        matches!(self, Self::S8D24)
    }

    /// Bytes per sample in the depth buffer (or the stencil buffer for `S8`).
    pub const fn bytes_per_sample(self) -> u32 {
        match self {
            Self::Df32 | Self::Df32S8 | Self::S8D24 => 4,
            Self::D16 => 2,
            Self::S8 => 1,
        }
    }
}
