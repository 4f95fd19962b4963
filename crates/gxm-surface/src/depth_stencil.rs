use gxm_format::DepthStencilFormat;
use gxm_texture::{bits, TextureDescriptor, TextureType, MAX_DIMENSION};
use tracing::{debug, trace};

use crate::background::depth_stencil_background_format;
use crate::color::TILE_SIZE;
use crate::error::{InvalidReason, Result, SurfaceError};

pub const DEPTH_STENCIL_DATA_ALIGN: u32 = bits::DATA_ADDR_ALIGN;

#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DepthStencilSurfaceType {
    #[default]
    Linear = 0x0000_0000,
    Tiled = 0x0001_1000,
}

impl DepthStencilSurfaceType {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0x0000_0000 => Some(Self::Linear),
            0x0001_1000 => Some(Self::Tiled),
            _ => None,
        }
    }
}

/// Load the surface from memory at the start of a scene even when the
/// hardware would otherwise clear it.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DepthStencilForceLoadMode {
    #[default]
    Disabled = 0x0000_0000,
    Enabled = 0x0000_0002,
}

/// Store the surface to memory at the end of a scene even when it would
/// otherwise be discarded.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DepthStencilForceStoreMode {
    #[default]
    Disabled = 0x0000_0000,
    Enabled = 0x0000_0004,
}

/// A depth and/or stencil target.
///
/// The background descriptor samples the depth plane (the stencil plane for
/// `S8`). Its width holds the stride in samples; the surface has no height.
/// The disabled surface has a zeroed descriptor and the same background
/// values `init` starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStencilSurface {
    background: TextureDescriptor,
    format: Option<DepthStencilFormat>,
    surface_type: DepthStencilSurfaceType,
    stride_in_samples: u32,
    depth_data: u32,
    stencil_data: u32,
    background_depth: f32,
    background_stencil: u8,
    force_load: DepthStencilForceLoadMode,
    force_store: DepthStencilForceStoreMode,
}

impl Default for DepthStencilSurface {
    fn default() -> Self {
        Self {
            background: TextureDescriptor::zeroed(),
            format: None,
            surface_type: DepthStencilSurfaceType::Linear,
            stride_in_samples: 0,
            depth_data: 0,
            stencil_data: 0,
            background_depth: 1.0,
            background_stencil: 0,
            force_load: DepthStencilForceLoadMode::Disabled,
            force_store: DepthStencilForceStoreMode::Disabled,
        }
    }
}

impl DepthStencilSurface {
    /// `stencil_data` is ignored when the format has no separate stencil
    /// plane; `depth_data` when it has no depth.
    pub fn init(
        format: DepthStencilFormat,
        surface_type: DepthStencilSurfaceType,
        stride_in_samples: u32,
        depth_data: u32,
        stencil_data: u32,
    ) -> Result<Self> {
        let surface = Self::build(format, surface_type, stride_in_samples, depth_data, stencil_data);
        match &surface {
            Ok(_) => trace!(?format, ?surface_type, stride_in_samples, "depth/stencil surface initialized"),
            Err(err) => debug!(?format, ?surface_type, %err, "depth/stencil surface rejected"),
        }
        surface
    }

    fn build(
        format: DepthStencilFormat,
        surface_type: DepthStencilSurfaceType,
        stride_in_samples: u32,
        depth_data: u32,
        stencil_data: u32,
    ) -> Result<Self> {
        if stride_in_samples == 0 || stride_in_samples > MAX_DIMENSION {
            return Err(InvalidReason::Dimension {
                value: stride_in_samples,
            }
            .into());
        }
        if surface_type == DepthStencilSurfaceType::Tiled && stride_in_samples % TILE_SIZE != 0 {
            return Err(InvalidReason::StrideAlignment {
                stride: stride_in_samples,
                align: TILE_SIZE,
            }
            .into());
        }

        let depth_data = if format.has_depth() {
            check_data("depth_data", depth_data)?;
            depth_data
        } else {
            0
        };
        let stencil_data = if format.is_interleaved() {
            depth_data
        } else if format.has_stencil() {
            check_data("stencil_data", stencil_data)?;
            stencil_data
        } else {
            0
        };

        let texture_type = match surface_type {
            DepthStencilSurfaceType::Linear => TextureType::Linear,
            DepthStencilSurfaceType::Tiled => TextureType::Tiled,
        };
        let mut background = TextureDescriptor::zeroed();
        background.set_texture_type(texture_type);
        background.set_format(depth_stencil_background_format(format))?;
        background.set_width(stride_in_samples)?;
        background.set_data(if format.has_depth() { depth_data } else { stencil_data })?;

        Ok(Self {
            background,
            format: Some(format),
            surface_type,
            stride_in_samples,
            depth_data,
            stencil_data,
            background_depth: 1.0,
            background_stencil: 0,
            force_load: DepthStencilForceLoadMode::Disabled,
            force_store: DepthStencilForceStoreMode::Disabled,
        })
    }

    pub fn init_disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.background.data_addr() != 0 && self.background.format().raw() != 0
    }

    pub fn background(&self) -> &TextureDescriptor {
        &self.background
    }

    /// `None` for a disabled surface.
    pub fn format(&self) -> Option<DepthStencilFormat> {
        self.format
    }

    pub fn surface_type(&self) -> DepthStencilSurfaceType {
        self.surface_type
    }

    pub fn stride_in_samples(&self) -> u32 {
        self.stride_in_samples
    }

    pub fn depth_data(&self) -> u32 {
        self.depth_data
    }

    pub fn stencil_data(&self) -> u32 {
        self.stencil_data
    }

    pub fn background_depth(&self) -> f32 {
        self.background_depth
    }

    pub fn set_background_depth(&mut self, depth: f32) {
        self.background_depth = depth;
    }

    pub fn background_stencil(&self) -> u8 {
        self.background_stencil
    }

    pub fn set_background_stencil(&mut self, stencil: u8) {
        self.background_stencil = stencil;
    }

    pub fn force_load_mode(&self) -> DepthStencilForceLoadMode {
        self.force_load
    }

    pub fn set_force_load_mode(&mut self, mode: DepthStencilForceLoadMode) {
        self.force_load = mode;
    }

    pub fn force_store_mode(&self) -> DepthStencilForceStoreMode {
        self.force_store
    }

    pub fn set_force_store_mode(&mut self, mode: DepthStencilForceStoreMode) {
        self.force_store = mode;
    }
}

fn check_data(field: &'static str, addr: u32) -> Result<()> {
    if addr == 0 {
        return Err(InvalidReason::NullData.into());
    }
    if addr % DEPTH_STENCIL_DATA_ALIGN != 0 {
        return Err(SurfaceError::InvalidAlignment {
            field,
            addr,
            align: DEPTH_STENCIL_DATA_ALIGN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use gxm_format::TextureFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn init_sets_background_defaults() {
        let surface = DepthStencilSurface::init(
            DepthStencilFormat::Df32S8,
            DepthStencilSurfaceType::Tiled,
            960,
            0x8100_0000,
            0x8200_0000,
        )
        .unwrap();
        assert!(surface.is_enabled());
        assert_eq!(surface.background_depth(), 1.0);
        assert_eq!(surface.background_stencil(), 0);
        assert_eq!(surface.force_load_mode(), DepthStencilForceLoadMode::Disabled);
        assert_eq!(surface.force_store_mode(), DepthStencilForceStoreMode::Disabled);
        assert_eq!(surface.background().format(), TextureFormat::DF32M);
        assert_eq!(surface.background().data_addr(), 0x8100_0000);
        assert_eq!(surface.background().texture_type(), Some(TextureType::Tiled));
        assert_eq!(surface.stencil_data(), 0x8200_0000);
    }

    #[test]
    fn tiled_stride_is_a_multiple_of_32() {
        let err = DepthStencilSurface::init(
            DepthStencilFormat::D16,
            DepthStencilSurfaceType::Tiled,
            100,
            0x8100_0000,
            0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SurfaceError::InvalidValue(InvalidReason::StrideAlignment {
                stride: 100,
                align: 32,
            })
        );
        // Linear surfaces take any stride.
        DepthStencilSurface::init(
            DepthStencilFormat::D16,
            DepthStencilSurfaceType::Linear,
            100,
            0x8100_0000,
            0,
        )
        .unwrap();
    }

    #[test]
    fn stencil_only_surface_needs_stencil_data() {
        let err = DepthStencilSurface::init(
            DepthStencilFormat::S8,
            DepthStencilSurfaceType::Linear,
            64,
            0x8100_0000,
            0,
        )
        .unwrap_err();
        assert_eq!(err, SurfaceError::InvalidValue(InvalidReason::NullData));

        let surface = DepthStencilSurface::init(
            DepthStencilFormat::S8,
            DepthStencilSurfaceType::Linear,
            64,
            0,
            0x8200_0000,
        )
        .unwrap();
        assert_eq!(surface.depth_data(), 0);
        assert_eq!(surface.background().data_addr(), 0x8200_0000);
    }

    #[test]
    fn interleaved_format_shares_one_buffer() {
        let surface = DepthStencilSurface::init(
            DepthStencilFormat::S8D24,
            DepthStencilSurfaceType::Linear,
            64,
            0x8100_0000,
            0x8200_0000,
        )
        .unwrap();
        assert_eq!(surface.stencil_data(), surface.depth_data());
    }

    #[test]
    fn force_modes_are_independent() {
        let mut surface = DepthStencilSurface::init(
            DepthStencilFormat::Df32,
            DepthStencilSurfaceType::Linear,
            64,
            0x8100_0000,
            0,
        )
        .unwrap();
        surface.set_force_store_mode(DepthStencilForceStoreMode::Enabled);
        assert_eq!(surface.force_load_mode(), DepthStencilForceLoadMode::Disabled);
        surface.set_force_load_mode(DepthStencilForceLoadMode::Enabled);
        surface.set_force_store_mode(DepthStencilForceStoreMode::Disabled);
        assert_eq!(surface.force_load_mode(), DepthStencilForceLoadMode::Enabled);

        surface.set_background_depth(0.25);
        surface.set_background_stencil(0x80);
        assert_eq!(surface.background_depth(), 0.25);
        assert_eq!(surface.background_stencil(), 0x80);
    }

    #[test]
    fn disabled_surface() {
        let surface = DepthStencilSurface::init_disabled();
        assert!(!surface.is_enabled());
        assert_eq!(surface.format(), None);
        assert_eq!(*surface.background(), TextureDescriptor::zeroed());
    }

    #[test]
    fn disabled_and_initialized_surfaces_share_background_values() {
        let disabled = DepthStencilSurface::init_disabled();
        let surface = DepthStencilSurface::init(
            DepthStencilFormat::D16,
            DepthStencilSurfaceType::Linear,
            64,
            0x8100_0000,
            0,
        )
        .unwrap();
        assert_eq!(disabled.background_depth(), 1.0);
        assert_eq!(disabled.background_depth(), surface.background_depth());
        assert_eq!(disabled.background_stencil(), surface.background_stencil());
        assert_eq!(disabled.force_load_mode(), surface.force_load_mode());
        assert_eq!(disabled.force_store_mode(), surface.force_store_mode());
    }
}
