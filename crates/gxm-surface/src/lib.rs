#![forbid(unsafe_code)]

//! Color and depth/stencil render targets.
//!
//! Each surface owns a background [`TextureDescriptor`](gxm_texture::TextureDescriptor)
//! that samples its contents, plus the render-only state (clip rectangle,
//! dither, background depth, ...) kept next to it. `init` validates
//! everything up front; a disabled surface is the all-zero value and is told
//! apart with `is_enabled`.

mod background;
mod color;
mod compat;
mod depth_stencil;
mod error;

pub use background::{color_background_format, depth_stencil_background_format};
pub use color::{
    ClipRect, ColorSurface, ColorSurfaceDitherMode, ColorSurfaceGammaMode, ColorSurfaceScaleMode,
    ColorSurfaceType, OutputRegisterSize, COLOR_SURFACE_DATA_ALIGN, TILE_SIZE,
};
pub use compat::{supported_surface_types, SurfaceTypes};
pub use depth_stencil::{
    DepthStencilForceLoadMode, DepthStencilForceStoreMode, DepthStencilSurface,
    DepthStencilSurfaceType, DEPTH_STENCIL_DATA_ALIGN,
};
pub use error::{InvalidReason, Result, SurfaceError};
