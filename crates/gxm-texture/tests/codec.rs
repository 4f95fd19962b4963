use gxm_format::TextureFormat;
use gxm_texture::bits::{self, BitField};
use gxm_texture::{
    AddrMode, NormalizeMode, TextureDescriptor, TextureDescriptorFields, TextureError,
    TextureFilter, TextureGammaMode, TextureLayout, TextureType, ValueReason, CONTROL_WORDS,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn linear_fields(width: u32) -> TextureDescriptorFields {
    TextureDescriptorFields {
        format: TextureFormat::A8B8G8R8,
        width,
        height: 16,
        ..Default::default()
    }
}

#[test]
fn generic_width_boundary() {
    let desc = TextureDescriptor::pack(&linear_fields(4095), TextureType::Linear).unwrap();
    assert_eq!(desc.width(), 4095);

    assert_eq!(
        TextureDescriptor::pack(&linear_fields(4096), TextureType::Linear),
        Err(TextureError::InvalidValue {
            field: "width",
            value: 4096,
            reason: ValueReason::TooLarge { max: 4095 },
        })
    );
}

#[test]
fn mip_count_boundary() {
    let mut fields = linear_fields(64);
    fields.mip_count = 16;
    assert_eq!(
        TextureDescriptor::pack(&fields, TextureType::Linear),
        Err(TextureError::InvalidValue {
            field: "mip_count",
            value: 16,
            reason: ValueReason::TooLarge { max: 15 },
        })
    );

    fields.mip_count = 15;
    let desc = TextureDescriptor::pack(&fields, TextureType::Linear).unwrap();
    assert_eq!(desc.mip_count(), 15);
    assert_eq!(desc.unpack().mip_count, 15);
}

#[test]
fn misaligned_data_is_rejected_and_rounded_down_is_accepted() {
    let mut fields = linear_fields(64);
    fields.data_addr = 0x8100_0003;
    assert_eq!(
        TextureDescriptor::pack(&fields, TextureType::Linear),
        Err(TextureError::InvalidAlignment {
            field: "data_addr",
            addr: 0x8100_0003,
            align: 4,
        })
    );

    fields.data_addr &= !3;
    let desc = TextureDescriptor::pack(&fields, TextureType::Linear).unwrap();
    assert_eq!(desc.data_addr(), 0x8100_0000);
    assert_eq!(desc.unpack().data_addr, 0x8100_0000);
}

#[test]
fn type_tag_switch_reinterprets_bits() {
    let mut desc = TextureDescriptor::pack(&linear_fields(8), TextureType::Linear).unwrap();
    desc.set_mip_count(5).unwrap();
    let before = desc.words();

    desc.set_texture_type(TextureType::LinearStrided);
    let after = desc.words();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1] & !bits::TEXTURE_TYPE.mask(), before[1] & !bits::TEXTURE_TYPE.mask());
    assert_eq!(after[2..], before[2..]);

    // The mip count bits are now part of the stride.
    assert_eq!(desc.layout(), TextureLayout::Strided);
    assert_eq!(desc.mip_count(), 0);
    assert_eq!(desc.stride(), Some(((5 << 3) + 1) * 4));
}

#[test]
fn unknown_type_tag_decodes_with_generic_layout() {
    let desc = TextureDescriptor::from_words([0, (1 << 29) | (100 << 12) | 50, 0, 0]);
    assert_eq!(desc.texture_type(), None);
    let fields = desc.unpack();
    assert_eq!(fields.texture_type, 1);
    assert_eq!((fields.width, fields.height), (100, 50));
}

#[test]
fn paletted_texture_keeps_palette_pointer() {
    let mut fields = linear_fields(32);
    fields.format = TextureFormat::new(
        gxm_format::TextureBaseFormat::P8,
        gxm_format::Swizzle4::Abgr.raw(),
    );
    fields.palette_addr = 0x8123_4540;
    let desc = TextureDescriptor::pack(&fields, TextureType::Tiled).unwrap();
    assert!(desc.format().base().is_paletted());
    assert_eq!(desc.palette_addr(), 0x8123_4540);
}

#[cfg(all(feature = "bytemuck", target_endian = "little"))]
#[test]
fn descriptor_tables_cast_to_bytes() {
    let table = [
        TextureDescriptor::from_words([1, 2, 3, 4]),
        TextureDescriptor::from_words([5, 6, 7, 8]),
    ];
    let bytes: &[u8] = bytemuck::cast_slice(&table);
    assert_eq!(bytes.len(), 2 * TextureDescriptor::SIZE_BYTES);
    assert_eq!(bytes[16..], table[1].to_bytes());
}

fn any_type() -> impl Strategy<Value = TextureType> {
    prop::sample::select(TextureType::ALL)
}

fn any_words() -> impl Strategy<Value = [u32; CONTROL_WORDS]> {
    prop::array::uniform4(any::<u32>())
}

/// Apply `edit` to a copy of `words` and return the bits that changed.
fn changed_bits(
    words: [u32; CONTROL_WORDS],
    edit: impl FnOnce(&mut TextureDescriptor),
) -> [u32; CONTROL_WORDS] {
    let mut desc = TextureDescriptor::from_words(words);
    edit(&mut desc);
    let after = desc.words();
    core::array::from_fn(|i| after[i] ^ words[i])
}

fn within(diff: [u32; CONTROL_WORDS], fields: &[BitField]) -> bool {
    let mut allowed = [0u32; CONTROL_WORDS];
    for field in fields {
        allowed[field.word] |= field.mask();
    }
    diff.iter().zip(allowed).all(|(d, a)| d & !a == 0)
}

proptest! {
    #[test]
    fn pack_of_unpack_is_idempotent(words in any_words(), texture_type in any_type()) {
        let mut source = TextureDescriptor::from_words(words);
        source.set_texture_type(texture_type);

        let first = TextureDescriptor::pack(&source.unpack(), texture_type).unwrap();
        prop_assert_eq!(first.unpack(), source.unpack());

        let second = TextureDescriptor::pack(&first.unpack(), texture_type).unwrap();
        prop_assert_eq!(second, first);
    }

    #[test]
    fn unpack_never_panics(words in any_words()) {
        let desc = TextureDescriptor::from_words(words);
        let fields = desc.unpack();
        prop_assert_eq!(fields.texture_type, words[1] >> 29);
        prop_assert_eq!(TextureDescriptor::from_bytes(&desc.to_bytes()), desc);
    }

    #[test]
    fn infallible_setters_touch_only_their_field(
        words in any_words(),
        filter in 0u32..4,
        addr in 0u32..8,
        normalize in any::<bool>(),
        texture_type in any_type(),
    ) {
        let filter = TextureFilter::from_field(filter);
        let addr = AddrMode::from_field(addr);
        let normalize = if normalize { NormalizeMode::Enabled } else { NormalizeMode::Disabled };

        let diff = changed_bits(words, |d| d.set_mag_filter(filter));
        prop_assert!(within(diff, &[bits::MAG_FILTER]));
        let diff = changed_bits(words, |d| d.set_u_addr_mode(addr));
        prop_assert!(within(diff, &[bits::U_ADDR_MODE]));
        let diff = changed_bits(words, |d| d.set_v_addr_mode(addr));
        prop_assert!(within(diff, &[bits::V_ADDR_MODE]));
        let diff = changed_bits(words, |d| d.set_gamma_mode(TextureGammaMode::Gr));
        prop_assert!(within(diff, &[bits::GAMMA_MODE]));
        let diff = changed_bits(words, |d| d.set_normalize_mode(normalize));
        prop_assert!(within(diff, &[bits::NORMALIZE_MODE]));
        let diff = changed_bits(words, |d| d.set_texture_type(texture_type));
        prop_assert!(within(diff, &[bits::TEXTURE_TYPE]));
    }

    #[test]
    fn fallible_setters_touch_only_their_fields(
        words in any_words(),
        data in any::<u32>(),
        palette in any::<u32>(),
        lod_min in 0u32..16,
        stride_words in 1u32..=8192,
    ) {
        let data = data & !3;
        let palette = palette & !63;

        let diff = changed_bits(words, |d| d.set_data(data).unwrap());
        prop_assert!(within(diff, &[bits::DATA_ADDR]));
        let diff = changed_bits(words, |d| d.set_palette(palette).unwrap());
        prop_assert!(within(diff, &[bits::PALETTE_ADDR]));
        let diff = changed_bits(words, |d| d.set_lod_min(lod_min).unwrap());
        prop_assert!(within(diff, &[bits::LOD_MIN0, bits::LOD_MIN1]));
        let diff = changed_bits(words, |d| d.set_format(TextureFormat::UYVY).unwrap());
        prop_assert!(within(diff, &[bits::FORMAT0, bits::BASE_FORMAT, bits::SWIZZLE]));

        let mut strided = words;
        strided[1] = (strided[1] & !bits::TEXTURE_TYPE.mask()) | TextureType::LinearStrided.hw_value();
        let diff = changed_bits(strided, |d| d.set_stride(stride_words * 4).unwrap());
        prop_assert!(within(diff, &bits::STRIDE_PARTS));

        let mut linear = words;
        linear[1] = (linear[1] & !bits::TEXTURE_TYPE.mask()) | TextureType::Linear.hw_value();
        let diff = changed_bits(linear, |d| d.set_width(stride_words % 4096).unwrap());
        prop_assert!(within(diff, &[bits::WIDTH]));
        let diff = changed_bits(linear, |d| d.set_mip_count(lod_min).unwrap());
        prop_assert!(within(diff, &[bits::MIP_COUNT]));
    }

    #[test]
    fn independent_setters_commute(
        words in any_words(),
        data in any::<u32>(),
        addr in 0u32..8,
        lod_min in 0u32..16,
    ) {
        let data = data & !3;
        let addr = AddrMode::from_field(addr);

        let mut a = TextureDescriptor::from_words(words);
        a.set_data(data).unwrap();
        a.set_u_addr_mode(addr);
        a.set_lod_min(lod_min).unwrap();

        let mut b = TextureDescriptor::from_words(words);
        b.set_lod_min(lod_min).unwrap();
        b.set_u_addr_mode(addr);
        b.set_data(data).unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn geometry_and_mip_setters_commute(
        words in any_words(),
        width in 0u32..4096,
        height in 0u32..4096,
        mip_count in 0u32..16,
    ) {
        let mut words = words;
        words[1] = (words[1] & !bits::TEXTURE_TYPE.mask()) | TextureType::Linear.hw_value();

        let mut a = TextureDescriptor::from_words(words);
        a.set_width(width).unwrap();
        a.set_mip_count(mip_count).unwrap();
        a.set_height(height).unwrap();

        let mut b = TextureDescriptor::from_words(words);
        b.set_height(height).unwrap();
        b.set_mip_count(mip_count).unwrap();
        b.set_width(width).unwrap();

        prop_assert_eq!(a, b);
        prop_assert_eq!((a.width(), a.height(), a.mip_count()), (width, height, mip_count));
    }
}
