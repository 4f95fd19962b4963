//! Texture formats used to sample a surface's contents back, e.g. for the
//! background load at the start of a scene.

use gxm_format::{
    ColorBaseFormat, ColorFormat, ColorSwizzleFamily, DepthStencilFormat, Swizzle1, Swizzle2,
    Swizzle2Ds, TextureBaseFormat, TextureFormat, TextureSwizzle,
};

/// Texture format that reads back a color surface of `format`. `None` when
/// the format has no sampled equivalent or is not a catalog entry.
pub fn color_background_format(format: ColorFormat) -> Option<TextureFormat> {
    if !format.is_known() {
        return None;
    }
    let color_base = format.base();
    let base = texture_base(color_base)?;
    let index = format.swizzle().raw() >> 20;
    let swizzle = match color_base.swizzle_family()? {
        // Same channel order, different bit position.
        ColorSwizzleFamily::Four | ColorSwizzleFamily::Three => TextureSwizzle::from_raw(index << 12),
        ColorSwizzleFamily::Two => match index {
            0 => Swizzle2::Gr,
            1 => Swizzle2::ZeroZeroRg,
            2 => Swizzle2::Rggg,
            _ => Swizzle2::Grrr,
        }
        .raw(),
        ColorSwizzleFamily::One => match index {
            0 => Swizzle1::ZeroZeroZeroR,
            _ => Swizzle1::RZeroZeroZero,
        }
        .raw(),
    };
    Some(TextureFormat::new(base, swizzle))
}

fn texture_base(base: ColorBaseFormat) -> Option<TextureBaseFormat> {
    Some(match base {
        ColorBaseFormat::U8U8U8U8 => TextureBaseFormat::U8U8U8U8,
        ColorBaseFormat::U8U8U8 => TextureBaseFormat::U8U8U8,
        ColorBaseFormat::U5U6U5 => TextureBaseFormat::U5U6U5,
        ColorBaseFormat::U1U5U5U5 => TextureBaseFormat::U1U5U5U5,
        ColorBaseFormat::U4U4U4U4 => TextureBaseFormat::U4U4U4U4,
        ColorBaseFormat::U8U3U3U2 => TextureBaseFormat::U8U3U3U2,
        ColorBaseFormat::F16 => TextureBaseFormat::F16,
        ColorBaseFormat::F16F16 => TextureBaseFormat::F16F16,
        ColorBaseFormat::F32 => TextureBaseFormat::F32,
        ColorBaseFormat::S16 => TextureBaseFormat::S16,
        ColorBaseFormat::S16S16 => TextureBaseFormat::S16S16,
        ColorBaseFormat::U16 => TextureBaseFormat::U16,
        ColorBaseFormat::U16U16 => TextureBaseFormat::U16U16,
        ColorBaseFormat::U2U10U10U10 => TextureBaseFormat::U2U10U10U10,
        ColorBaseFormat::U8 => TextureBaseFormat::U8,
        ColorBaseFormat::S8 => TextureBaseFormat::S8,
        ColorBaseFormat::S5S5U6 => TextureBaseFormat::S5S5U6,
        ColorBaseFormat::U8U8 => TextureBaseFormat::U8U8,
        ColorBaseFormat::S8S8 => TextureBaseFormat::S8S8,
        ColorBaseFormat::S8S8S8S8 => TextureBaseFormat::S8S8S8S8,
        ColorBaseFormat::F16F16F16F16 => TextureBaseFormat::F16F16F16F16,
        ColorBaseFormat::F32F32 => TextureBaseFormat::F32F32,
        ColorBaseFormat::F11F11F10 => TextureBaseFormat::F11F11F10,
        ColorBaseFormat::SE5M9M9M9 => TextureBaseFormat::SE5M9M9M9,
        ColorBaseFormat::U2F10F10F10 => TextureBaseFormat::U2F10F10F10,
        _ => return None,
    })
}

/// Texture format that reads back the depth (or, for stencil-only surfaces,
/// stencil) plane of a depth/stencil surface.
pub fn depth_stencil_background_format(format: DepthStencilFormat) -> TextureFormat {
    match format {
        DepthStencilFormat::Df32 | DepthStencilFormat::Df32S8 => TextureFormat::DF32M,
        DepthStencilFormat::D16 => TextureFormat::D16,
        DepthStencilFormat::S8 => {
            TextureFormat::new(TextureBaseFormat::U8, Swizzle1::ZeroZeroZeroR.raw())
        }
        DepthStencilFormat::S8D24 => {
            TextureFormat::new(TextureBaseFormat::X8U24, Swizzle2Ds::Sd.raw())
        }
    }
}
