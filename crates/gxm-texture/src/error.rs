use core::fmt;

use thiserror::Error;

use crate::state::TextureLayout;

pub type Result<T> = std::result::Result<T, TextureError>;

/// Why a value could not be stored in its bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueReason {
    TooLarge { max: u32 },
    TooSmall { min: u32 },
    NotPowerOfTwo,
    NotMultipleOf(u32),
    /// The field has no storage in this layout (its bits hold something else).
    NotInLayout(TextureLayout),
    /// Bits set outside every range the field is packed into.
    StrayBits(u32),
}

impl fmt::Display for ValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueReason::TooLarge { max } => write!(f, "exceeds maximum {max}"),
            ValueReason::TooSmall { min } => write!(f, "below minimum {min}"),
            ValueReason::NotPowerOfTwo => f.write_str("not a power of two"),
            ValueReason::NotMultipleOf(n) => write!(f, "not a multiple of {n}"),
            ValueReason::NotInLayout(layout) => write!(f, "not stored in the {layout:?} layout"),
            ValueReason::StrayBits(bits) => write!(f, "stray bits {bits:#010x}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextureError {
    #[error("invalid {field} {value:#x}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: u32,
        reason: ValueReason,
    },

    #[error("{field} address {addr:#010x} is not aligned to {align} bytes")]
    InvalidAlignment {
        field: &'static str,
        addr: u32,
        align: u32,
    },
}

impl TextureError {
    pub(crate) const fn too_large(field: &'static str, value: u32, max: u32) -> Self {
        TextureError::InvalidValue {
            field,
            value,
            reason: ValueReason::TooLarge { max },
        }
    }

    pub(crate) const fn not_in_layout(field: &'static str, value: u32, layout: TextureLayout) -> Self {
        TextureError::InvalidValue {
            field,
            value,
            reason: ValueReason::NotInLayout(layout),
        }
    }

    /// Name of the field that failed validation.
    pub const fn field(&self) -> &'static str {
        match *self {
            TextureError::InvalidValue { field, .. } | TextureError::InvalidAlignment { field, .. } => {
                field
            }
        }
    }
}
