use gxm_format::{ColorBaseFormat, ColorFormat, ColorSwizzle2, DepthStencilFormat};
use gxm_surface::{
    ClipRect, ColorSurface, ColorSurfaceScaleMode, ColorSurfaceType, DepthStencilSurface,
    DepthStencilSurfaceType, InvalidReason, OutputRegisterSize, SurfaceError,
};
use gxm_texture::TextureDescriptor;
use pretty_assertions::assert_eq;

#[test]
fn disabled_color_surface_becomes_enabled_with_data_and_format() {
    let mut surface = ColorSurface::init_disabled();
    assert!(!surface.is_enabled());
    assert_eq!(*surface.background(), TextureDescriptor::zeroed());

    surface.set_data(0x8100_0000).unwrap();
    assert!(!surface.is_enabled(), "data alone does not enable");

    surface.set_format(ColorFormat::A8B8G8R8).unwrap();
    assert!(surface.is_enabled());
}

#[test]
fn format_without_a_background_texture_is_rejected() {
    let mut surface = ColorSurface::init_disabled();
    let format = ColorFormat::new(ColorBaseFormat::U8S8S8U8, Default::default());
    assert_eq!(
        surface.set_format(format),
        Err(SurfaceError::InvalidValue(InvalidReason::IncompatibleFormat {
            format: format.raw(),
        }))
    );
    assert_eq!(surface.format(), ColorFormat::default());
}

#[test]
fn reinit_replaces_every_field() {
    let mut surface = ColorSurface::init(
        ColorFormat::new(ColorBaseFormat::U8U8, ColorSwizzle2::Ra.raw()),
        ColorSurfaceType::Tiled,
        ColorSurfaceScaleMode::MsaaDownscale,
        OutputRegisterSize::Bits32,
        200,
        100,
        224,
        0x8100_0000,
    )
    .unwrap();
    surface.set_clip(1, 2, 3, 4).unwrap();

    surface = ColorSurface::init(
        ColorFormat::R5G6B5,
        ColorSurfaceType::Linear,
        ColorSurfaceScaleMode::None,
        OutputRegisterSize::Bits32,
        30,
        20,
        32,
        0x8200_0000,
    )
    .unwrap();
    assert_eq!(surface.clip(), ClipRect::full(30, 20));
    assert_eq!(surface.scale_mode(), ColorSurfaceScaleMode::None);
    assert_eq!(surface.background().stride(), Some(64));
}

#[test]
fn linear_stride_must_be_word_aligned() {
    // 24-bit pixels: 31 * 3 bytes is not a multiple of four.
    let format = ColorFormat::new(ColorBaseFormat::U8U8U8, Default::default());
    let err = ColorSurface::init(
        format,
        ColorSurfaceType::Linear,
        ColorSurfaceScaleMode::None,
        OutputRegisterSize::Bits32,
        31,
        8,
        31,
        0x8100_0000,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SurfaceError::InvalidValue(InvalidReason::StrideAlignment { stride: 93, align: 4 })
    );
}

#[test]
fn depth_stencil_disabled_and_enabled() {
    assert!(!DepthStencilSurface::init_disabled().is_enabled());
    for &format in DepthStencilFormat::ALL {
        let surface = DepthStencilSurface::init(
            format,
            DepthStencilSurfaceType::Linear,
            128,
            0x8100_0000,
            0x8200_0000,
        )
        .unwrap();
        assert!(surface.is_enabled(), "{format:?}");
        assert_eq!(surface.background().width(), 128);
    }
}
