use gxm_format::ColorFormat;
use gxm_texture::{bits, TextureDescriptor, TextureGammaMode, MAX_DIMENSION};
use tracing::{debug, trace};

use crate::background::color_background_format;
use crate::compat::{supported_surface_types, SurfaceTypes};
use crate::error::{InvalidReason, Result, SurfaceError};

/// Alignment of a color surface's data pointer.
pub const COLOR_SURFACE_DATA_ALIGN: u32 = bits::DATA_ADDR_ALIGN;
/// Tiled surfaces are laid out in square tiles of this many pixels.
pub const TILE_SIZE: u32 = 32;

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSurfaceType {
    #[default]
    Linear = 0x0000_0000,
    Tiled = 0x0400_0000,
    Swizzled = 0x0800_0000,
}

impl ColorSurfaceType {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0x0000_0000 => Some(Self::Linear),
            0x0400_0000 => Some(Self::Tiled),
            0x0800_0000 => Some(Self::Swizzled),
            _ => None,
        }
    }

    pub const fn as_flag(self) -> SurfaceTypes {
        match self {
            Self::Linear => SurfaceTypes::LINEAR,
            Self::Tiled => SurfaceTypes::TILED,
            Self::Swizzled => SurfaceTypes::SWIZZLED,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSurfaceScaleMode {
    #[default]
    None = 0,
    MsaaDownscale = 1,
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputRegisterSize {
    #[default]
    Bits32 = 0,
    Bits64 = 1,
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSurfaceGammaMode {
    #[default]
    None = 0x0000,
    R = 0x1000,
    Gr = 0x3000,
}

impl ColorSurfaceGammaMode {
    /// Shares its bit pattern with [`ColorSurfaceGammaMode::R`].
    pub const BGR: Self = Self::R;

    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0x0000 => Some(Self::None),
            0x1000 => Some(Self::R),
            0x3000 => Some(Self::Gr),
            _ => None,
        }
    }

    const fn texture_gamma(self) -> TextureGammaMode {
        match self {
            Self::None => TextureGammaMode::None,
            Self::R => TextureGammaMode::R,
            Self::Gr => TextureGammaMode::Gr,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSurfaceDitherMode {
    #[default]
    Disabled = 0,
    Enabled = 8,
}

/// Inclusive pixel rectangle that rendering is restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClipRect {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl ClipRect {
    /// The whole of a `width` x `height` surface.
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x_min: 0,
            y_min: 0,
            x_max: width.saturating_sub(1),
            y_max: height.saturating_sub(1),
        }
    }
}

/// A color render target plus the texture that reads it back.
///
/// The all-zero value is the disabled surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSurface {
    background: TextureDescriptor,
    format: ColorFormat,
    surface_type: ColorSurfaceType,
    scale_mode: ColorSurfaceScaleMode,
    output_register_size: OutputRegisterSize,
    width: u32,
    height: u32,
    stride_in_pixels: u32,
    gamma_mode: ColorSurfaceGammaMode,
    dither_mode: ColorSurfaceDitherMode,
    clip: ClipRect,
}

impl ColorSurface {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        format: ColorFormat,
        surface_type: ColorSurfaceType,
        scale_mode: ColorSurfaceScaleMode,
        output_register_size: OutputRegisterSize,
        width: u32,
        height: u32,
        stride_in_pixels: u32,
        data: u32,
    ) -> Result<Self> {
        let surface = Self::build(
            format,
            surface_type,
            scale_mode,
            output_register_size,
            width,
            height,
            stride_in_pixels,
            data,
        );
        match &surface {
            Ok(_) => trace!(?format, ?surface_type, width, height, stride_in_pixels, "color surface initialized"),
            Err(err) => debug!(?format, ?surface_type, %err, "color surface rejected"),
        }
        surface
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        format: ColorFormat,
        surface_type: ColorSurfaceType,
        scale_mode: ColorSurfaceScaleMode,
        output_register_size: OutputRegisterSize,
        width: u32,
        height: u32,
        stride_in_pixels: u32,
        data: u32,
    ) -> Result<Self> {
        let texture_format = check_format(format, surface_type, output_register_size)?;
        for value in [width, height] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(InvalidReason::Dimension { value }.into());
            }
        }
        if stride_in_pixels < width {
            return Err(InvalidReason::StrideTooSmall {
                stride: stride_in_pixels,
                width,
            }
            .into());
        }
        check_data(data)?;

        let background = match surface_type {
            ColorSurfaceType::Linear => {
                let stride = linear_stride_bytes(format, stride_in_pixels)?;
                TextureDescriptor::init_linear_strided(data, texture_format, width, height, stride)?
            }
            ColorSurfaceType::Tiled => {
                if stride_in_pixels % TILE_SIZE != 0 {
                    return Err(InvalidReason::StrideAlignment {
                        stride: stride_in_pixels,
                        align: TILE_SIZE,
                    }
                    .into());
                }
                TextureDescriptor::init_tiled(data, texture_format, width, height, 0)?
            }
            ColorSurfaceType::Swizzled => {
                for value in [width, height] {
                    if !value.is_power_of_two() {
                        return Err(InvalidReason::NotPowerOfTwo { value }.into());
                    }
                }
                TextureDescriptor::init_swizzled(data, texture_format, width, height, 0)?
            }
        };

        Ok(Self {
            background,
            format,
            surface_type,
            scale_mode,
            output_register_size,
            width,
            height,
            stride_in_pixels,
            gamma_mode: ColorSurfaceGammaMode::None,
            dither_mode: ColorSurfaceDitherMode::Disabled,
            clip: ClipRect::full(width, height),
        })
    }

    /// A surface that renders nothing.
    ///
    /// Giving it data and a format with `set_data` and `set_format` enables
    /// it, but it still has no geometry: width and height stay 0, `clip()`
    /// is the empty `(0, 0, 0, 0)` rectangle and `set_clip` always fails
    /// with `ClipOutOfBounds`. Use `init` for a drawable surface.
    pub fn init_disabled() -> Self {
        Self::default()
    }

    /// Whether the background descriptor has both a data pointer and a
    /// format.
    pub fn is_enabled(&self) -> bool {
        self.background.data_addr() != 0 && self.background.format().raw() != 0
    }

    pub fn background(&self) -> &TextureDescriptor {
        &self.background
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Change the pixel format. The new format must suit the surface type and
    /// output register size already chosen.
    /// Linear surfaces also get their background byte stride recomputed for
    /// the new pixel size. Nothing changes on error.
    pub fn set_format(&mut self, format: ColorFormat) -> Result<()> {
        self.with_format(format)
            .inspect_err(|err| debug!(?format, %err, "color surface format rejected"))
    }

    fn with_format(&mut self, format: ColorFormat) -> Result<()> {
        let texture_format = check_format(format, self.surface_type, self.output_register_size)?;
        let mut background = self.background;
        background.set_format(texture_format)?;
        // A disabled surface has no stride to keep in step.
        if self.surface_type == ColorSurfaceType::Linear && self.stride_in_pixels != 0 {
            let stride = linear_stride_bytes(format, self.stride_in_pixels)?;
            background.set_stride(stride)?;
        }
        self.background = background;
        self.format = format;
        Ok(())
    }

    pub fn data(&self) -> u32 {
        self.background.data_addr()
    }

    pub fn set_data(&mut self, data: u32) -> Result<()> {
        check_data(data)?;
        self.background.set_data(data)?;
        Ok(())
    }

    pub fn surface_type(&self) -> ColorSurfaceType {
        self.surface_type
    }

    pub fn scale_mode(&self) -> ColorSurfaceScaleMode {
        self.scale_mode
    }

    pub fn output_register_size(&self) -> OutputRegisterSize {
        self.output_register_size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride_in_pixels(&self) -> u32 {
        self.stride_in_pixels
    }

    pub fn gamma_mode(&self) -> ColorSurfaceGammaMode {
        self.gamma_mode
    }

    /// Also applied to the background texture so reads decode the same way.
    pub fn set_gamma_mode(&mut self, mode: ColorSurfaceGammaMode) {
        self.gamma_mode = mode;
        self.background.set_gamma_mode(mode.texture_gamma());
    }

    pub fn dither_mode(&self) -> ColorSurfaceDitherMode {
        self.dither_mode
    }

    pub fn set_dither_mode(&mut self, mode: ColorSurfaceDitherMode) {
        self.dither_mode = mode;
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    /// Restrict rendering to the inclusive rectangle. Coordinates must be
    /// ordered and inside the surface.
    pub fn set_clip(&mut self, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<()> {
        let reason = if x_min > x_max || y_min > y_max {
            Some(InvalidReason::ClipOutOfOrder)
        } else if x_max >= self.width || y_max >= self.height {
            Some(InvalidReason::ClipOutOfBounds)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(x_min, y_min, x_max, y_max, %reason, "clip rejected");
            return Err(reason.into());
        }
        self.clip = ClipRect {
            x_min,
            y_min,
            x_max,
            y_max,
        };
        Ok(())
    }
}

/// Validate `format` for a surface and return its background texture format.
fn check_format(
    format: ColorFormat,
    surface_type: ColorSurfaceType,
    output_register_size: OutputRegisterSize,
) -> Result<gxm_format::TextureFormat> {
    let incompatible = || SurfaceError::from(InvalidReason::IncompatibleFormat { format: format.raw() });

    let texture_format = color_background_format(format).ok_or_else(incompatible)?;
    if !supported_surface_types(format.base()).contains(surface_type.as_flag()) {
        return Err(incompatible());
    }
    let wants_64 = format.base().needs_64bit_output();
    if wants_64 != (output_register_size == OutputRegisterSize::Bits64) {
        return Err(InvalidReason::OutputRegisterSize {
            format: format.raw(),
        }
        .into());
    }
    Ok(texture_format)
}

/// Byte pitch of a linear surface row, which the background descriptor needs
/// to be a whole number of words.
fn linear_stride_bytes(format: ColorFormat, stride_in_pixels: u32) -> Result<u32> {
    // Known formats always have a size.
    let bytes_per_pixel = format.base().bytes_per_pixel().unwrap_or(0);
    let stride = stride_in_pixels
        .checked_mul(bytes_per_pixel)
        .ok_or(InvalidReason::Dimension {
            value: stride_in_pixels,
        })?;
    if stride % 4 != 0 {
        return Err(InvalidReason::StrideAlignment { stride, align: 4 }.into());
    }
    Ok(stride)
}

fn check_data(data: u32) -> Result<()> {
    if data == 0 {
        return Err(InvalidReason::NullData.into());
    }
    if data % COLOR_SURFACE_DATA_ALIGN != 0 {
        return Err(SurfaceError::InvalidAlignment {
            field: "data",
            addr: data,
            align: COLOR_SURFACE_DATA_ALIGN,
        });
    }
    Ok(())
}
