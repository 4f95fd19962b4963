/// Declares a `u32` newtype holding one half of a format code, masked to `mask`.
///
/// Construction always masks, so a value of the newtype can never carry bits
/// owned by the other half.
macro_rules! raw_code {
    ($(#[$meta:meta])* pub struct $name:ident(mask = $mask:expr);) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Keep only the bits of `raw` that belong to this part.
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw & $mask)
            }

            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<$name> for u32 {
            fn from(v: $name) -> u32 {
                v.0
            }
        }
    };
}

/// Generates the named base formats of a family plus their per-format info
/// (name, bit width, swizzle family) from one table.
macro_rules! base_formats {
    (
        impl $ty:ident {
            family: $family:ident,
            bits: $bits:ident,
            $( $(#[$m:meta])* $name:ident = $value:literal => ($bpp:literal, $fam:ident), )+
        }
    ) => {
        impl $ty {
            $( $(#[$m])* pub const $name: Self = Self($value); )+

            /// Every named base format, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)+
                    _ => None,
                }
            }

            pub const fn $bits(self) -> Option<u32> {
                match self.0 {
                    $($value => Some($bpp),)+
                    _ => None,
                }
            }

            /// The swizzle family legal for this base format.
            pub const fn swizzle_family(self) -> Option<$family> {
                match self.0 {
                    $($value => Some($family::$fam),)+
                    _ => None,
                }
            }
        }

        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, concat!(stringify!($ty), "::{}"), name),
                    None => write!(f, concat!(stringify!($ty), "({:#010x})"), self.0),
                }
            }
        }
    };
}

/// Declares one swizzle family as a closed enum over the raw swizzle type.
macro_rules! swizzle_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $raw:ident {
            $( $(#[$vm:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vm])* $variant = $value, )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// [`Self::ALL`] as raw swizzle parts.
            pub const RAW: &'static [$raw] = &[$($raw::from_raw($value)),+];

            pub const fn from_u32(v: u32) -> Option<Self> {
                match v {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn raw(self) -> $raw {
                $raw::from_raw(self as u32)
            }
        }

        impl From<$name> for $raw {
            fn from(s: $name) -> Self {
                s.raw()
            }
        }
    };
}
