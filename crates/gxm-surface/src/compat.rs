use bitflags::bitflags;
use gxm_format::ColorBaseFormat;

bitflags! {
    /// Memory layouts a color base format can be rendered to.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SurfaceTypes: u32 {
        const LINEAR = 1 << 0;
        const TILED = 1 << 1;
        const SWIZZLED = 1 << 2;
    }
}

/// Surface types each color base format supports. Formats missing from the
/// table support none.
const TABLE: &[(ColorBaseFormat, SurfaceTypes)] = &[
    (ColorBaseFormat::U8U8U8U8, SurfaceTypes::all()),
    (ColorBaseFormat::U8U8U8, SurfaceTypes::LINEAR),
    (ColorBaseFormat::U5U6U5, SurfaceTypes::all()),
    (ColorBaseFormat::U1U5U5U5, SurfaceTypes::all()),
    (ColorBaseFormat::U4U4U4U4, SurfaceTypes::all()),
    (ColorBaseFormat::U8U3U3U2, SurfaceTypes::all()),
    (ColorBaseFormat::F16, SurfaceTypes::all()),
    (ColorBaseFormat::F16F16, SurfaceTypes::all()),
    (ColorBaseFormat::F32, SurfaceTypes::all()),
    (ColorBaseFormat::S16, SurfaceTypes::all()),
    (ColorBaseFormat::S16S16, SurfaceTypes::all()),
    (ColorBaseFormat::U16, SurfaceTypes::all()),
    (ColorBaseFormat::U16U16, SurfaceTypes::all()),
    (ColorBaseFormat::U2U10U10U10, SurfaceTypes::all()),
    (ColorBaseFormat::U8, SurfaceTypes::all()),
    (ColorBaseFormat::S8, SurfaceTypes::all()),
    (ColorBaseFormat::S5S5U6, SurfaceTypes::all()),
    (ColorBaseFormat::U8U8, SurfaceTypes::all()),
    (ColorBaseFormat::S8S8, SurfaceTypes::all()),
    (ColorBaseFormat::U8S8S8U8, SurfaceTypes::all()),
    (ColorBaseFormat::S8S8S8S8, SurfaceTypes::all()),
    (
        ColorBaseFormat::F16F16F16F16,
        SurfaceTypes::LINEAR.union(SurfaceTypes::TILED),
    ),
    (
        ColorBaseFormat::F32F32,
        SurfaceTypes::LINEAR.union(SurfaceTypes::TILED),
    ),
    (ColorBaseFormat::F11F11F10, SurfaceTypes::all()),
    (ColorBaseFormat::SE5M9M9M9, SurfaceTypes::all()),
    (ColorBaseFormat::U2F10F10F10, SurfaceTypes::all()),
];

/// Surface types `base` can be rendered to.
pub fn supported_surface_types(base: ColorBaseFormat) -> SurfaceTypes {
    TABLE
        .iter()
        .find(|(format, _)| *format == base)
        .map_or(SurfaceTypes::empty(), |&(_, types)| types)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_named_base_format_once() {
        assert_eq!(TABLE.len(), ColorBaseFormat::ALL.len());
        for base in ColorBaseFormat::ALL {
            assert_eq!(
                TABLE.iter().filter(|(format, _)| format == base).count(),
                1,
                "{base:?}"
            );
        }
    }

    #[test]
    fn restricted_formats() {
        assert_eq!(
            supported_surface_types(ColorBaseFormat::U8U8U8),
            SurfaceTypes::LINEAR
        );
        assert!(!supported_surface_types(ColorBaseFormat::F32F32).contains(SurfaceTypes::SWIZZLED));
        assert!(supported_surface_types(ColorBaseFormat::F32F32).contains(SurfaceTypes::TILED));
        assert_eq!(
            supported_surface_types(ColorBaseFormat::from_raw(0x7000_0000)),
            SurfaceTypes::empty()
        );
    }
}
