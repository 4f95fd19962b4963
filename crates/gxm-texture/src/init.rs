//! Constructors for each texture type, with the sampling defaults the
//! hardware driver applies.

use gxm_format::TextureFormat;
use tracing::{debug, trace};

use crate::descriptor::TextureDescriptor;
use crate::error::{Result, TextureError, ValueReason};
use crate::state::{AddrMode, TextureLayout, TextureType};

/// Stored LOD bias that means "no bias" (the field is offset by 31).
pub const LOD_BIAS_ZERO: u32 = 31;

impl TextureDescriptor {
    /// Power-of-two swizzled texture.
    pub fn init_swizzled(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::Swizzled, data, format, width, height, mip_count)
    }

    /// Swizzled texture of any size.
    pub fn init_swizzled_arbitrary(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::SwizzledArbitrary, data, format, width, height, mip_count)
    }

    /// Power-of-two cube map.
    pub fn init_cube(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::Cube, data, format, width, height, mip_count)
    }

    /// Cube map of any size.
    pub fn init_cube_arbitrary(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::CubeArbitrary, data, format, width, height, mip_count)
    }

    /// Row-major texture with rows packed at the natural pitch.
    pub fn init_linear(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::Linear, data, format, width, height, mip_count)
    }

    /// Texture stored in 32x32 tiles.
    pub fn init_tiled(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        mip_count: u32,
    ) -> Result<Self> {
        init_mipmapped(TextureType::Tiled, data, format, width, height, mip_count)
    }

    /// Row-major texture with an explicit row pitch in bytes. Strided
    /// textures have no mipmaps.
    pub fn init_linear_strided(
        data: u32,
        format: TextureFormat,
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<Self> {
        let texture_type = TextureType::LinearStrided;
        let desc = init_common(texture_type, data, format, width, height).and_then(|mut desc| {
            desc.set_stride(stride)?;
            Ok(desc)
        });
        log_init(texture_type, desc)
    }
}

fn init_mipmapped(
    texture_type: TextureType,
    data: u32,
    format: TextureFormat,
    width: u32,
    height: u32,
    mip_count: u32,
) -> Result<TextureDescriptor> {
    let desc = init_common(texture_type, data, format, width, height).and_then(|mut desc| {
        desc.set_mip_count(mip_count)?;
        desc.set_lod_bias(LOD_BIAS_ZERO)?;
        Ok(desc)
    });
    log_init(texture_type, desc)
}

fn init_common(
    texture_type: TextureType,
    data: u32,
    format: TextureFormat,
    width: u32,
    height: u32,
) -> Result<TextureDescriptor> {
    for (field, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(TextureError::InvalidValue {
                field,
                value,
                reason: ValueReason::TooSmall { min: 1 },
            });
        }
    }

    let mut desc = TextureDescriptor::zeroed();
    desc.set_texture_type(texture_type);
    desc.set_format(format)?;
    desc.set_width(width)?;
    desc.set_height(height)?;

    let addr_mode = match texture_type.layout() {
        TextureLayout::Pow2 => AddrMode::Repeat,
        TextureLayout::Generic | TextureLayout::Strided => AddrMode::Clamp,
    };
    desc.set_u_addr_mode(addr_mode);
    desc.set_v_addr_mode(addr_mode);
    desc.set_data(data)?;
    Ok(desc)
}

fn log_init(
    texture_type: TextureType,
    desc: Result<TextureDescriptor>,
) -> Result<TextureDescriptor> {
    match &desc {
        Ok(desc) => trace!(?texture_type, ?desc, "initialized texture"),
        Err(err) => debug!(?texture_type, %err, "texture init rejected"),
    }
    desc
}
