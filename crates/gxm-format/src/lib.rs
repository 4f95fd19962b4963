#![forbid(unsafe_code)]

//! Format code algebra for GXM textures and render targets.
//!
//! A format code is a 32-bit value built by OR-ing a *base format* (storage
//! layout and channel bit widths) with a *swizzle* (channel ordering). The two
//! parts occupy disjoint bit ranges, so [`combine`] is a plain bitwise OR and
//! [`decompose`] is a plain bitwise AND against fixed masks.
//!
//! Three code families exist, each with its own masks:
//! - [`TextureFormat`] (sampled textures),
//! - [`ColorFormat`] (color render targets),
//! - [`DepthStencilFormat`] (depth/stencil targets, no swizzle part).
//!
//! Decoding is total: masking an arbitrary `u32` always yields a base format and
//! swizzle, even if neither is a named catalog entry. Use `name()` /
//! `from_u32()` for the secondary "is this a known value" step.

#[macro_use]
mod macros;

pub mod color;
pub mod depth_stencil;
pub mod texture;

use core::fmt;

pub use color::{
    ColorBaseFormat, ColorFormat, ColorSwizzle, ColorSwizzle1, ColorSwizzle2, ColorSwizzle3,
    ColorSwizzle4, ColorSwizzleFamily, COLOR_BASE_FORMAT_MASK, COLOR_SWIZZLE_MASK,
};
pub use depth_stencil::DepthStencilFormat;
pub use texture::{
    Swizzle1, Swizzle2, Swizzle2Ds, Swizzle3, Swizzle4, SwizzleFamily, SwizzleYuv420,
    SwizzleYuv422, TextureBaseFormat, TextureFormat, TextureSwizzle, TEXTURE_BASE_FORMAT_MASK,
    TEXTURE_SWIZZLE_MASK,
};

/// A format code family made of a base format OR-ed with a swizzle.
pub trait FormatCode: Copy + Eq + fmt::Debug {
    type Base: Copy + Eq + fmt::Debug;
    type Swizzle: Copy + Eq + fmt::Debug;

    /// Bits owned by the base format.
    const BASE_MASK: u32;
    /// Bits owned by the swizzle.
    const SWIZZLE_MASK: u32;

    fn from_raw(raw: u32) -> Self;
    fn raw(self) -> u32;

    fn combine(base: Self::Base, swizzle: Self::Swizzle) -> Self;
    fn decompose(self) -> (Self::Base, Self::Swizzle);
}

/// Combine a base format and a swizzle into a format code. Never fails.
pub fn combine<F: FormatCode>(base: F::Base, swizzle: F::Swizzle) -> F {
    F::combine(base, swizzle)
}

/// Split a format code into its base format and swizzle parts. Never fails;
/// the parts may be raw values outside the catalog.
pub fn decompose<F: FormatCode>(code: F) -> (F::Base, F::Swizzle) {
    code.decompose()
}

const _: () = assert!(TEXTURE_BASE_FORMAT_MASK & TEXTURE_SWIZZLE_MASK == 0);
const _: () = assert!(COLOR_BASE_FORMAT_MASK & COLOR_SWIZZLE_MASK == 0);
