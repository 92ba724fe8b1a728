//! Register field encodings produced by the classifiers.
//!
//! Discriminants are the raw values the hardware expects in the named register field.

use core::fmt;

macro_rules! hw_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal => $hw_name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            #[inline]
            pub const fn raw(self) -> u32 {
                self as u32
            }

            pub const fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Register-header spelling of the value.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $hw_name,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

hw_enum! {
    /// `SQ_BUF_RSRC_WORD3.NUM_FORMAT`
    pub enum BufNumFormat {
        Unorm = 0 => "BUF_NUM_FORMAT_UNORM",
        Snorm = 1 => "BUF_NUM_FORMAT_SNORM",
        Uscaled = 2 => "BUF_NUM_FORMAT_USCALED",
        Sscaled = 3 => "BUF_NUM_FORMAT_SSCALED",
        Uint = 4 => "BUF_NUM_FORMAT_UINT",
        Sint = 5 => "BUF_NUM_FORMAT_SINT",
        SnormOgl = 6 => "BUF_NUM_FORMAT_SNORM_OGL",
        Float = 7 => "BUF_NUM_FORMAT_FLOAT",
    }
}

hw_enum! {
    /// `SQ_BUF_RSRC_WORD3.DATA_FORMAT`
    pub enum BufDataFormat {
        Invalid = 0 => "BUF_DATA_FORMAT_INVALID",
        Format8 = 1 => "BUF_DATA_FORMAT_8",
        Format16 = 2 => "BUF_DATA_FORMAT_16",
        Format8_8 = 3 => "BUF_DATA_FORMAT_8_8",
        Format32 = 4 => "BUF_DATA_FORMAT_32",
        Format16_16 = 5 => "BUF_DATA_FORMAT_16_16",
        Format10_11_11 = 6 => "BUF_DATA_FORMAT_10_11_11",
        Format11_11_10 = 7 => "BUF_DATA_FORMAT_11_11_10",
        Format10_10_10_2 = 8 => "BUF_DATA_FORMAT_10_10_10_2",
        Format2_10_10_10 = 9 => "BUF_DATA_FORMAT_2_10_10_10",
        Format8_8_8_8 = 10 => "BUF_DATA_FORMAT_8_8_8_8",
        Format32_32 = 11 => "BUF_DATA_FORMAT_32_32",
        Format16_16_16_16 = 12 => "BUF_DATA_FORMAT_16_16_16_16",
        Format32_32_32 = 13 => "BUF_DATA_FORMAT_32_32_32",
        Format32_32_32_32 = 14 => "BUF_DATA_FORMAT_32_32_32_32",
    }
}

hw_enum! {
    /// `SQ_IMG_RSRC_WORD1.NUM_FORMAT`
    pub enum ImgNumFormat {
        Unorm = 0 => "IMG_NUM_FORMAT_UNORM",
        Snorm = 1 => "IMG_NUM_FORMAT_SNORM",
        Uscaled = 2 => "IMG_NUM_FORMAT_USCALED",
        Sscaled = 3 => "IMG_NUM_FORMAT_SSCALED",
        Uint = 4 => "IMG_NUM_FORMAT_UINT",
        Sint = 5 => "IMG_NUM_FORMAT_SINT",
        SnormOgl = 6 => "IMG_NUM_FORMAT_SNORM_OGL",
        Float = 7 => "IMG_NUM_FORMAT_FLOAT",
        Srgb = 9 => "IMG_NUM_FORMAT_SRGB",
        Ubnorm = 10 => "IMG_NUM_FORMAT_UBNORM",
        UbnormOgl = 11 => "IMG_NUM_FORMAT_UBNORM_OGL",
        Ubint = 12 => "IMG_NUM_FORMAT_UBINT",
        Ubscaled = 13 => "IMG_NUM_FORMAT_UBSCALED",
    }
}

hw_enum! {
    /// `CB_COLOR0_INFO.FORMAT`
    pub enum ColorFormat {
        Invalid = 0 => "COLOR_INVALID",
        Color8 = 1 => "COLOR_8",
        Color16 = 2 => "COLOR_16",
        Color8_8 = 3 => "COLOR_8_8",
        Color32 = 4 => "COLOR_32",
        Color16_16 = 5 => "COLOR_16_16",
        Color10_11_11 = 6 => "COLOR_10_11_11",
        Color11_11_10 = 7 => "COLOR_11_11_10",
        Color10_10_10_2 = 8 => "COLOR_10_10_10_2",
        Color2_10_10_10 = 9 => "COLOR_2_10_10_10",
        Color8_8_8_8 = 10 => "COLOR_8_8_8_8",
        Color32_32 = 11 => "COLOR_32_32",
        Color16_16_16_16 = 12 => "COLOR_16_16_16_16",
        Color32_32_32_32 = 14 => "COLOR_32_32_32_32",
        Color5_6_5 = 16 => "COLOR_5_6_5",
        Color1_5_5_5 = 17 => "COLOR_1_5_5_5",
        Color5_5_5_1 = 18 => "COLOR_5_5_5_1",
        Color4_4_4_4 = 19 => "COLOR_4_4_4_4",
        Color8_24 = 20 => "COLOR_8_24",
        Color24_8 = 21 => "COLOR_24_8",
        ColorX24_8_32Float = 22 => "COLOR_X24_8_32_FLOAT",
        Color5_9_9_9 = 24 => "COLOR_5_9_9_9",
    }
}

hw_enum! {
    /// `CB_COLOR0_INFO.NUMBER_TYPE`
    pub enum ColorNumber {
        Unorm = 0 => "NUMBER_UNORM",
        Snorm = 1 => "NUMBER_SNORM",
        /// Never produced: scaled formats are not renderable.
        Uscaled = 2 => "NUMBER_USCALED",
        Sscaled = 3 => "NUMBER_SSCALED",
        Uint = 4 => "NUMBER_UINT",
        Sint = 5 => "NUMBER_SINT",
        Srgb = 6 => "NUMBER_SRGB",
        Float = 7 => "NUMBER_FLOAT",
    }
}

hw_enum! {
    /// `CB_COLOR0_INFO.COMP_SWAP`
    pub enum ColorSwap {
        Std = 0 => "SWAP_STD",
        Alt = 1 => "SWAP_ALT",
        StdRev = 2 => "SWAP_STD_REV",
        AltRev = 3 => "SWAP_ALT_REV",
    }
}

hw_enum! {
    /// `CB_COLOR0_INFO.ENDIAN`
    pub enum ColorEndian {
        None = 0 => "ENDIAN_NONE",
        Swap8In16 = 1 => "ENDIAN_8IN16",
        Swap8In32 = 2 => "ENDIAN_8IN32",
        Swap8In64 = 3 => "ENDIAN_8IN64",
    }
}

hw_enum! {
    /// `DB_Z_INFO.FORMAT`
    pub enum ZFormat {
        Invalid = 0 => "Z_INVALID",
        Z16 = 1 => "Z_16",
        Z24 = 2 => "Z_24",
        Z32Float = 3 => "Z_32_FLOAT",
    }
}

hw_enum! {
    /// `SQ_IMG_SAMP_WORD3.BORDER_COLOR_SWIZZLE`
    pub enum BcSwizzle {
        Xyzw = 0 => "BC_SWIZZLE_XYZW",
        Xwyz = 1 => "BC_SWIZZLE_XWYZ",
        Wzyx = 2 => "BC_SWIZZLE_WZYX",
        Wxyz = 3 => "BC_SWIZZLE_WXYZ",
        Zyxw = 4 => "BC_SWIZZLE_ZYXW",
        Yxwz = 5 => "BC_SWIZZLE_YXWZ",
    }
}

/// Raw `COMP_SWAP` sentinel for a format the color block cannot swizzle.
pub const COLOR_SWAP_UNSUPPORTED: u32 = 0xFFFF_FFFF;

/// Flattens a classifier result to the register-level value.
pub const fn color_swap_raw(swap: Option<ColorSwap>) -> u32 {
    match swap {
        Some(swap) => swap.raw(),
        None => COLOR_SWAP_UNSUPPORTED,
    }
}
