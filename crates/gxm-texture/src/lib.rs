#![forbid(unsafe_code)]

//! GXM texture control words.
//!
//! A [`TextureDescriptor`] is the 16-byte block the GPU reads to sample a
//! texture. The texture type tag in word 1 picks one of three physical
//! layouts ([`TextureLayout`]); the same bits mean different things in each.
//! [`TextureDescriptor::pack`] validates a full set of fields,
//! [`TextureDescriptor::unpack`] decodes any 16 bytes, and the per-field
//! setters edit one range in place.

pub mod bits;
mod descriptor;
mod error;
mod init;
mod state;

pub use descriptor::{
    TextureDescriptor, TextureDescriptorFields, MAX_DIMENSION, MAX_DIMENSION_LOG2,
    MAX_STRIDE_BYTES, STORABLE_SWIZZLE_MASK,
};
pub use error::{Result, TextureError, ValueReason};
pub use init::LOD_BIAS_ZERO;
pub use state::{
    AddrMode, MipFilter, NormalizeMode, TextureFilter, TextureGammaMode, TextureLayout,
    TextureType,
};

/// Number of 32-bit control words in a descriptor.
pub const CONTROL_WORDS: usize = 4;

/// Pack `fields` into a descriptor of type `texture_type`.
pub fn pack(fields: &TextureDescriptorFields, texture_type: TextureType) -> Result<TextureDescriptor> {
    TextureDescriptor::pack(fields, texture_type)
}

/// Decode every field of `desc`. Never fails.
pub fn unpack(desc: &TextureDescriptor) -> TextureDescriptorFields {
    desc.unpack()
}
