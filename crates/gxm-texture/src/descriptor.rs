use core::fmt;

use gxm_format::{TextureBaseFormat, TextureFormat, TextureSwizzle, TEXTURE_SWIZZLE_MASK};
use tracing::{debug, trace};

use crate::bits::{self, BitField};
use crate::error::{Result, TextureError, ValueReason};
use crate::state::{
    AddrMode, MipFilter, NormalizeMode, TextureFilter, TextureGammaMode, TextureLayout, TextureType,
};
use crate::CONTROL_WORDS;

/// Largest stride a linear-strided texture can describe.
pub const MAX_STRIDE_BYTES: u32 = (1 << bits::STRIDE_BITS) * 4;
/// Largest literal width or height in the generic and strided layouts.
pub const MAX_DIMENSION: u32 = bits::WIDTH.max();
/// Largest log2 width or height in the power-of-two layout.
pub const MAX_DIMENSION_LOG2: u32 = bits::WIDTH_LOG2.max();

/// The hardware texture descriptor: four little-endian control words.
///
/// The size is the same for every texture type; the type tag only changes
/// how the bits are interpreted. Setters touch nothing outside their own
/// ranges, so a descriptor received from elsewhere can be edited in place.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct TextureDescriptor {
    words: [u32; CONTROL_WORDS],
}

impl TextureDescriptor {
    pub const SIZE_BYTES: usize = CONTROL_WORDS * 4;

    pub const fn zeroed() -> Self {
        Self {
            words: [0; CONTROL_WORDS],
        }
    }

    pub const fn from_words(words: [u32; CONTROL_WORDS]) -> Self {
        Self { words }
    }

    pub const fn words(&self) -> [u32; CONTROL_WORDS] {
        self.words
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE_BYTES] {
        let mut out = [0u8; Self::SIZE_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE_BYTES]) -> Self {
        let mut words = [0u32; CONTROL_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// Build a descriptor from field values.
    ///
    /// `texture_type` selects the layout; `fields.texture_type` is ignored.
    /// Every field is range-checked against its bit width in that layout and
    /// both pointers must be aligned. Fields that have no storage in the
    /// layout must be zero.
    pub fn pack(fields: &TextureDescriptorFields, texture_type: TextureType) -> Result<Self> {
        let packed = Self::pack_inner(fields, texture_type);
        match &packed {
            Ok(desc) => trace!(?texture_type, ?desc, "packed texture descriptor"),
            Err(err) => debug!(?texture_type, %err, "rejected texture descriptor fields"),
        }
        packed
    }

    fn pack_inner(fields: &TextureDescriptorFields, texture_type: TextureType) -> Result<Self> {
        let mut desc = Self::zeroed();
        desc.set_texture_type(texture_type);
        desc.set_format(fields.format)?;

        let layout = texture_type.layout();
        let (width_field, height_field) = match layout {
            TextureLayout::Pow2 => (bits::WIDTH_LOG2, bits::HEIGHT_LOG2),
            TextureLayout::Generic | TextureLayout::Strided => (bits::WIDTH, bits::HEIGHT),
        };
        desc.put("width", width_field, fields.width)?;
        desc.put("height", height_field, fields.height)?;

        if layout == TextureLayout::Strided {
            let overlaid = [
                ("mip_count", fields.mip_count),
                ("lod_bias", fields.lod_bias),
                ("min_filter", fields.min_filter),
                ("mip_filter", fields.mip_filter),
            ];
            for (field, value) in overlaid {
                if value != 0 {
                    return Err(TextureError::not_in_layout(field, value, layout));
                }
            }
            desc.set_stride(fields.stride)?;
        } else {
            if fields.stride != 0 {
                return Err(TextureError::not_in_layout("stride", fields.stride, layout));
            }
            desc.put("mip_count", bits::MIP_COUNT, fields.mip_count)?;
            desc.put("lod_bias", bits::LOD_BIAS, fields.lod_bias)?;
            desc.put("min_filter", bits::MIN_FILTER, fields.min_filter)?;
            desc.put("mip_filter", bits::MIP_FILTER, fields.mip_filter)?;
        }

        desc.put("mag_filter", bits::MAG_FILTER, fields.mag_filter)?;
        desc.put("u_addr_mode", bits::U_ADDR_MODE, fields.u_addr_mode)?;
        desc.put("v_addr_mode", bits::V_ADDR_MODE, fields.v_addr_mode)?;
        desc.put("gamma_mode", bits::GAMMA_MODE, fields.gamma_mode)?;
        desc.put("normalize_mode", bits::NORMALIZE_MODE, fields.normalize_mode)?;
        desc.set_lod_min(fields.lod_min)?;
        desc.set_data(fields.data_addr)?;
        desc.set_palette(fields.palette_addr)?;
        Ok(desc)
    }

    /// Decode every field as a raw value. Never fails, whatever the bits.
    pub fn unpack(&self) -> TextureDescriptorFields {
        let texture_type = bits::TEXTURE_TYPE.get(&self.words);
        let layout = TextureLayout::for_type_field(texture_type);
        let (width, height) = match layout {
            TextureLayout::Pow2 => (
                bits::WIDTH_LOG2.get(&self.words),
                bits::HEIGHT_LOG2.get(&self.words),
            ),
            TextureLayout::Generic | TextureLayout::Strided => (
                bits::WIDTH.get(&self.words),
                bits::HEIGHT.get(&self.words),
            ),
        };
        TextureDescriptorFields {
            texture_type,
            format: self.format(),
            width,
            height,
            stride: self.stride().unwrap_or(0),
            mip_count: self.overlaid(bits::MIP_COUNT),
            lod_bias: self.overlaid(bits::LOD_BIAS),
            lod_min: bits::get_lod_min(&self.words),
            min_filter: self.overlaid(bits::MIN_FILTER),
            mag_filter: bits::MAG_FILTER.get(&self.words),
            mip_filter: self.overlaid(bits::MIP_FILTER),
            u_addr_mode: bits::U_ADDR_MODE.get(&self.words),
            v_addr_mode: bits::V_ADDR_MODE.get(&self.words),
            gamma_mode: bits::GAMMA_MODE.get(&self.words),
            normalize_mode: bits::NORMALIZE_MODE.get(&self.words),
            data_addr: self.data_addr(),
            palette_addr: self.palette_addr(),
        }
    }

    fn put(&mut self, name: &'static str, field: BitField, value: u32) -> Result<()> {
        if value > field.max() {
            return Err(TextureError::too_large(name, value, field.max()));
        }
        field.set(&mut self.words, value);
        Ok(())
    }

    /// Value of a field whose bits hold the stride in the strided layout.
    fn overlaid(&self, field: BitField) -> u32 {
        match self.layout() {
            TextureLayout::Strided => 0,
            _ => field.get(&self.words),
        }
    }

    fn reject_strided(&self, name: &'static str, value: u32) -> Result<()> {
        match self.layout() {
            TextureLayout::Strided => Err(TextureError::not_in_layout(name, value, TextureLayout::Strided)),
            _ => Ok(()),
        }
    }

    // ---- type tag ----

    pub fn texture_type_raw(&self) -> u32 {
        bits::TEXTURE_TYPE.get(&self.words)
    }

    pub fn texture_type(&self) -> Option<TextureType> {
        TextureType::from_u32(self.texture_type_raw())
    }

    pub fn layout(&self) -> TextureLayout {
        TextureLayout::for_type_field(self.texture_type_raw())
    }

    /// Change the type tag only. The remaining bits are reinterpreted under
    /// the new layout, not cleared.
    pub fn set_texture_type(&mut self, texture_type: TextureType) {
        bits::TEXTURE_TYPE.set(&mut self.words, texture_type as u32);
    }

    // ---- format ----

    pub fn format(&self) -> TextureFormat {
        let base = (bits::FORMAT0.get(&self.words) << 31) | (bits::BASE_FORMAT.get(&self.words) << 24);
        let swizzle = bits::SWIZZLE.get(&self.words) << 12;
        TextureFormat::new(
            TextureBaseFormat::from_raw(base),
            TextureSwizzle::from_raw(swizzle),
        )
    }

    pub fn set_format(&mut self, format: TextureFormat) -> Result<()> {
        if format.stray_bits() != 0 {
            return Err(TextureError::InvalidValue {
                field: "format",
                value: format.raw(),
                reason: ValueReason::StrayBits(format.stray_bits()),
            });
        }
        let swizzle = format.swizzle().raw() >> 12;
        if swizzle > bits::SWIZZLE.max() {
            return Err(TextureError::too_large(
                "swizzle",
                format.swizzle().raw(),
                bits::SWIZZLE.max() << 12,
            ));
        }
        let base = format.base().raw();
        bits::FORMAT0.set(&mut self.words, base >> 31);
        bits::BASE_FORMAT.set(&mut self.words, (base >> 24) & bits::BASE_FORMAT.max());
        bits::SWIZZLE.set(&mut self.words, swizzle);
        Ok(())
    }

    // ---- dimensions ----

    /// Width in texels.
    pub fn width(&self) -> u32 {
        match self.layout() {
            TextureLayout::Pow2 => 1 << bits::WIDTH_LOG2.get(&self.words),
            TextureLayout::Generic | TextureLayout::Strided => bits::WIDTH.get(&self.words),
        }
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        match self.layout() {
            TextureLayout::Pow2 => 1 << bits::HEIGHT_LOG2.get(&self.words),
            TextureLayout::Generic | TextureLayout::Strided => bits::HEIGHT.get(&self.words),
        }
    }

    /// Set the width in texels. Power-of-two layouts require a power of two.
    pub fn set_width(&mut self, width: u32) -> Result<()> {
        self.set_dimension("width", bits::WIDTH, bits::WIDTH_LOG2, width)
    }

    /// Set the height in texels. Power-of-two layouts require a power of two.
    pub fn set_height(&mut self, height: u32) -> Result<()> {
        self.set_dimension("height", bits::HEIGHT, bits::HEIGHT_LOG2, height)
    }

    fn set_dimension(
        &mut self,
        name: &'static str,
        literal: BitField,
        log2: BitField,
        value: u32,
    ) -> Result<()> {
        match self.layout() {
            TextureLayout::Generic | TextureLayout::Strided => self.put(name, literal, value),
            TextureLayout::Pow2 => {
                if !value.is_power_of_two() {
                    return Err(TextureError::InvalidValue {
                        field: name,
                        value,
                        reason: ValueReason::NotPowerOfTwo,
                    });
                }
                if value.trailing_zeros() > log2.max() {
                    return Err(TextureError::too_large(name, value, 1 << log2.max()));
                }
                log2.set(&mut self.words, value.trailing_zeros());
                Ok(())
            }
        }
    }

    /// Row pitch in bytes; only linear-strided textures have one.
    pub fn stride(&self) -> Option<u32> {
        match self.layout() {
            TextureLayout::Strided => Some((bits::get_stride_field(&self.words) + 1) * 4),
            _ => None,
        }
    }

    pub fn set_stride(&mut self, stride: u32) -> Result<()> {
        let layout = self.layout();
        if layout != TextureLayout::Strided {
            return Err(TextureError::not_in_layout("stride", stride, layout));
        }
        let reason = if stride < 4 {
            Some(ValueReason::TooSmall { min: 4 })
        } else if stride % 4 != 0 {
            Some(ValueReason::NotMultipleOf(4))
        } else if stride > MAX_STRIDE_BYTES {
            Some(ValueReason::TooLarge {
                max: MAX_STRIDE_BYTES,
            })
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(TextureError::InvalidValue {
                field: "stride",
                value: stride,
                reason,
            });
        }
        bits::set_stride_field(&mut self.words, stride / 4 - 1);
        Ok(())
    }

    // ---- mip / LOD ----

    /// Zero in the strided layout.
    pub fn mip_count(&self) -> u32 {
        self.overlaid(bits::MIP_COUNT)
    }

    pub fn set_mip_count(&mut self, mip_count: u32) -> Result<()> {
        self.reject_strided("mip_count", mip_count)?;
        self.put("mip_count", bits::MIP_COUNT, mip_count)
    }

    pub fn lod_bias(&self) -> u32 {
        self.overlaid(bits::LOD_BIAS)
    }

    pub fn set_lod_bias(&mut self, lod_bias: u32) -> Result<()> {
        self.reject_strided("lod_bias", lod_bias)?;
        self.put("lod_bias", bits::LOD_BIAS, lod_bias)
    }

    pub fn lod_min(&self) -> u32 {
        bits::get_lod_min(&self.words)
    }

    pub fn set_lod_min(&mut self, lod_min: u32) -> Result<()> {
        let max = (1 << (bits::LOD_MIN0.width + bits::LOD_MIN1.width)) - 1;
        if lod_min > max {
            return Err(TextureError::too_large("lod_min", lod_min, max));
        }
        bits::set_lod_min(&mut self.words, lod_min);
        Ok(())
    }

    // ---- filtering / addressing ----

    pub fn min_filter(&self) -> TextureFilter {
        TextureFilter::from_field(self.overlaid(bits::MIN_FILTER))
    }

    pub fn set_min_filter(&mut self, filter: TextureFilter) -> Result<()> {
        self.reject_strided("min_filter", filter as u32)?;
        bits::MIN_FILTER.set(&mut self.words, filter as u32);
        Ok(())
    }

    pub fn mag_filter(&self) -> TextureFilter {
        TextureFilter::from_field(bits::MAG_FILTER.get(&self.words))
    }

    pub fn set_mag_filter(&mut self, filter: TextureFilter) {
        bits::MAG_FILTER.set(&mut self.words, filter as u32);
    }

    pub fn mip_filter(&self) -> MipFilter {
        MipFilter::from_field(self.overlaid(bits::MIP_FILTER))
    }

    pub fn set_mip_filter(&mut self, filter: MipFilter) -> Result<()> {
        self.reject_strided("mip_filter", filter as u32)?;
        bits::MIP_FILTER.set(&mut self.words, filter as u32);
        Ok(())
    }

    pub fn u_addr_mode(&self) -> AddrMode {
        AddrMode::from_field(bits::U_ADDR_MODE.get(&self.words))
    }

    pub fn set_u_addr_mode(&mut self, mode: AddrMode) {
        bits::U_ADDR_MODE.set(&mut self.words, mode as u32);
    }

    pub fn v_addr_mode(&self) -> AddrMode {
        AddrMode::from_field(bits::V_ADDR_MODE.get(&self.words))
    }

    pub fn set_v_addr_mode(&mut self, mode: AddrMode) {
        bits::V_ADDR_MODE.set(&mut self.words, mode as u32);
    }

    pub fn gamma_mode_raw(&self) -> u32 {
        bits::GAMMA_MODE.get(&self.words)
    }

    /// `None` for the one unassigned 2-bit pattern.
    pub fn gamma_mode(&self) -> Option<TextureGammaMode> {
        TextureGammaMode::from_u32(self.gamma_mode_raw())
    }

    pub fn set_gamma_mode(&mut self, mode: TextureGammaMode) {
        bits::GAMMA_MODE.set(&mut self.words, mode as u32);
    }

    pub fn normalize_mode(&self) -> NormalizeMode {
        NormalizeMode::from_field(bits::NORMALIZE_MODE.get(&self.words))
    }

    pub fn set_normalize_mode(&mut self, mode: NormalizeMode) {
        bits::NORMALIZE_MODE.set(&mut self.words, mode as u32);
    }

    // ---- pointers ----

    pub fn data_addr(&self) -> u32 {
        bits::DATA_ADDR.get(&self.words) << bits::DATA_ADDR.shift
    }

    /// Store the texel data address. The address must be 4-byte aligned; its
    /// low bits are not stored and may not carry information.
    pub fn set_data(&mut self, addr: u32) -> Result<()> {
        check_alignment("data_addr", addr, bits::DATA_ADDR_ALIGN)?;
        bits::DATA_ADDR.set(&mut self.words, addr >> bits::DATA_ADDR.shift);
        Ok(())
    }

    pub fn palette_addr(&self) -> u32 {
        bits::PALETTE_ADDR.get(&self.words) << bits::PALETTE_ADDR_ALIGN.trailing_zeros()
    }

    /// Store the palette address (64-byte aligned). Only paletted formats
    /// read it, but it can be set on any descriptor.
    pub fn set_palette(&mut self, addr: u32) -> Result<()> {
        check_alignment("palette_addr", addr, bits::PALETTE_ADDR_ALIGN)?;
        bits::PALETTE_ADDR.set(
            &mut self.words,
            addr >> bits::PALETTE_ADDR_ALIGN.trailing_zeros(),
        );
        Ok(())
    }
}

fn check_alignment(field: &'static str, addr: u32, align: u32) -> Result<()> {
    if addr & (align - 1) != 0 {
        return Err(TextureError::InvalidAlignment { field, addr, align });
    }
    Ok(())
}

impl fmt::Debug for TextureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2, w3] = self.words;
        write!(f, "TextureDescriptor([{w0:#010x}, {w1:#010x}, {w2:#010x}, {w3:#010x}])")
    }
}

/// Raw field values of a [`TextureDescriptor`].
///
/// `width` and `height` hold the *stored* values: literal texel counts in the
/// generic and strided layouts, log2 in the power-of-two layout. `stride` is
/// in bytes and only meaningful (and only allowed to be non-zero) for the
/// strided layout, where `mip_count`, `lod_bias`, `min_filter` and
/// `mip_filter` must be zero because their bits hold the stride instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureDescriptorFields {
    pub texture_type: u32,
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub mip_count: u32,
    pub lod_bias: u32,
    pub lod_min: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    pub mip_filter: u32,
    pub u_addr_mode: u32,
    pub v_addr_mode: u32,
    pub gamma_mode: u32,
    pub normalize_mode: u32,
    pub data_addr: u32,
    pub palette_addr: u32,
}

/// Mask covering the swizzle bits a descriptor can store.
pub const STORABLE_SWIZZLE_MASK: u32 = TEXTURE_SWIZZLE_MASK & (bits::SWIZZLE.max() << 12);
