use core::fmt;

use gxm_texture::TextureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Sub-reason carried by [`SurfaceError::InvalidValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Row stride shorter than the surface width.
    StrideTooSmall { stride: u32, width: u32 },
    /// The format cannot be rendered with this surface type or has no
    /// background texture equivalent.
    IncompatibleFormat { format: u32 },
    /// The output register width does not match the format's pixel size.
    OutputRegisterSize { format: u32 },
    NullData,
    ClipOutOfOrder,
    ClipOutOfBounds,
    NotPowerOfTwo { value: u32 },
    Dimension { value: u32 },
    StrideAlignment { stride: u32, align: u32 },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidReason::StrideTooSmall { stride, width } => {
                write!(f, "stride {stride} is smaller than width {width}")
            }
            InvalidReason::IncompatibleFormat { format } => {
                write!(f, "format {format:#010x} is not valid for this surface type")
            }
            InvalidReason::OutputRegisterSize { format } => {
                write!(f, "output register size does not fit format {format:#010x}")
            }
            InvalidReason::NullData => f.write_str("data pointer is null"),
            InvalidReason::ClipOutOfOrder => f.write_str("clip minimum exceeds maximum"),
            InvalidReason::ClipOutOfBounds => f.write_str("clip exceeds surface bounds"),
            InvalidReason::NotPowerOfTwo { value } => write!(f, "{value} is not a power of two"),
            InvalidReason::Dimension { value } => write!(f, "dimension {value} out of range"),
            InvalidReason::StrideAlignment { stride, align } => {
                write!(f, "stride {stride} is not a multiple of {align}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("invalid surface value: {0}")]
    InvalidValue(InvalidReason),

    #[error("{field} address {addr:#010x} is not aligned to {align} bytes")]
    InvalidAlignment {
        field: &'static str,
        addr: u32,
        align: u32,
    },

    #[error(transparent)]
    Texture(#[from] TextureError),
}

impl From<InvalidReason> for SurfaceError {
    fn from(reason: InvalidReason) -> Self {
        SurfaceError::InvalidValue(reason)
    }
}
