//! The format identifier and its static description table.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::channel::{Channel, Colorspace, Layout, Swizzle};
use crate::description::FormatDescription;

// Table shorthand, mirroring the usual `un8`/`sp16`/`x24` channel notation.
const fn un(size: u8) -> Channel {
    Channel::unorm(size)
}
const fn sn(size: u8) -> Channel {
    Channel::snorm(size)
}
const fn up(size: u8) -> Channel {
    Channel::uint(size)
}
const fn sp(size: u8) -> Channel {
    Channel::sint(size)
}
const fn us(size: u8) -> Channel {
    Channel::uscaled(size)
}
const fn ss(size: u8) -> Channel {
    Channel::sscaled(size)
}
const fn fl(size: u8) -> Channel {
    Channel::float(size)
}
const fn fx(size: u8) -> Channel {
    Channel::fixed(size)
}
const fn x(size: u8) -> Channel {
    Channel::void(size)
}

const fn pad<const N: usize>(channels: [Channel; N]) -> [Channel; 4] {
    let mut out = [Channel::NONE; 4];
    let mut i = 0;
    while i < N {
        out[i] = channels[i];
        i += 1;
    }
    out
}

macro_rules! pipe_formats {
    ($(
        $variant:ident = $name:literal: $layout:ident $block:tt [$($chan:expr),+ $(,)?], $swz:literal, $cs:ident;
    )+) => {
        /// Opaque format identifier.
        ///
        /// Resolve it with [`PipeFormat::description`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PipeFormat {
            $($variant,)+
        }

        impl PipeFormat {
            /// Every format, in declaration order.
            pub const ALL: &'static [PipeFormat] = &[$(PipeFormat::$variant,)+];

            /// Canonical upper-case name, e.g. `R8G8B8A8_UNORM`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(PipeFormat::$variant => $name,)+
                }
            }
        }

        static DESCRIPTIONS: &[FormatDescription] = &[$(
            FormatDescription::new(
                PipeFormat::$variant,
                $name,
                Layout::$layout,
                $block,
                pad([$($chan),+]),
                Swizzle::parse4($swz),
                Colorspace::$cs,
            ),
        )+];
    };
}

pipe_formats! {
    // 8-bit RGBA, array and reversed orderings.
    R8G8B8A8Unorm = "R8G8B8A8_UNORM": Plain (1, 1) [un(8), un(8), un(8), un(8)], "xyzw", Rgb;
    R8G8B8X8Unorm = "R8G8B8X8_UNORM": Plain (1, 1) [un(8), un(8), un(8), x(8)], "xyz1", Rgb;
    B8G8R8A8Unorm = "B8G8R8A8_UNORM": Plain (1, 1) [un(8), un(8), un(8), un(8)], "zyxw", Rgb;
    B8G8R8X8Unorm = "B8G8R8X8_UNORM": Plain (1, 1) [un(8), un(8), un(8), x(8)], "zyx1", Rgb;
    A8R8G8B8Unorm = "A8R8G8B8_UNORM": Plain (1, 1) [un(8), un(8), un(8), un(8)], "yzwx", Rgb;
    X8R8G8B8Unorm = "X8R8G8B8_UNORM": Plain (1, 1) [x(8), un(8), un(8), un(8)], "yzw1", Rgb;
    A8B8G8R8Unorm = "A8B8G8R8_UNORM": Plain (1, 1) [un(8), un(8), un(8), un(8)], "wzyx", Rgb;
    X8B8G8R8Unorm = "X8B8G8R8_UNORM": Plain (1, 1) [x(8), un(8), un(8), un(8)], "wzy1", Rgb;
    R8G8B8A8Srgb = "R8G8B8A8_SRGB": Plain (1, 1) [un(8), un(8), un(8), un(8)], "xyzw", Srgb;
    R8G8B8X8Srgb = "R8G8B8X8_SRGB": Plain (1, 1) [un(8), un(8), un(8), x(8)], "xyz1", Srgb;
    B8G8R8A8Srgb = "B8G8R8A8_SRGB": Plain (1, 1) [un(8), un(8), un(8), un(8)], "zyxw", Srgb;
    B8G8R8X8Srgb = "B8G8R8X8_SRGB": Plain (1, 1) [un(8), un(8), un(8), x(8)], "zyx1", Srgb;
    A8R8G8B8Srgb = "A8R8G8B8_SRGB": Plain (1, 1) [un(8), un(8), un(8), un(8)], "yzwx", Srgb;
    A8B8G8R8Srgb = "A8B8G8R8_SRGB": Plain (1, 1) [un(8), un(8), un(8), un(8)], "wzyx", Srgb;
    R8G8B8A8Snorm = "R8G8B8A8_SNORM": Plain (1, 1) [sn(8), sn(8), sn(8), sn(8)], "xyzw", Rgb;
    R8G8B8A8Uint = "R8G8B8A8_UINT": Plain (1, 1) [up(8), up(8), up(8), up(8)], "xyzw", Rgb;
    R8G8B8A8Sint = "R8G8B8A8_SINT": Plain (1, 1) [sp(8), sp(8), sp(8), sp(8)], "xyzw", Rgb;
    R8G8B8A8Uscaled = "R8G8B8A8_USCALED": Plain (1, 1) [us(8), us(8), us(8), us(8)], "xyzw", Rgb;
    R8G8B8A8Sscaled = "R8G8B8A8_SSCALED": Plain (1, 1) [ss(8), ss(8), ss(8), ss(8)], "xyzw", Rgb;
    B8G8R8A8Uint = "B8G8R8A8_UINT": Plain (1, 1) [up(8), up(8), up(8), up(8)], "zyxw", Rgb;

    // 8-bit RGB.
    R8G8B8Unorm = "R8G8B8_UNORM": Plain (1, 1) [un(8), un(8), un(8)], "xyz1", Rgb;
    R8G8B8Snorm = "R8G8B8_SNORM": Plain (1, 1) [sn(8), sn(8), sn(8)], "xyz1", Rgb;
    R8G8B8Uint = "R8G8B8_UINT": Plain (1, 1) [up(8), up(8), up(8)], "xyz1", Rgb;
    R8G8B8Sint = "R8G8B8_SINT": Plain (1, 1) [sp(8), sp(8), sp(8)], "xyz1", Rgb;
    R8G8B8Uscaled = "R8G8B8_USCALED": Plain (1, 1) [us(8), us(8), us(8)], "xyz1", Rgb;
    R8G8B8Sscaled = "R8G8B8_SSCALED": Plain (1, 1) [ss(8), ss(8), ss(8)], "xyz1", Rgb;
    R8G8B8Srgb = "R8G8B8_SRGB": Plain (1, 1) [un(8), un(8), un(8)], "xyz1", Srgb;
    B8G8R8Unorm = "B8G8R8_UNORM": Plain (1, 1) [un(8), un(8), un(8)], "zyx1", Rgb;

    // 8-bit RG / R.
    R8G8Unorm = "R8G8_UNORM": Plain (1, 1) [un(8), un(8)], "xy01", Rgb;
    R8G8Snorm = "R8G8_SNORM": Plain (1, 1) [sn(8), sn(8)], "xy01", Rgb;
    R8G8Uint = "R8G8_UINT": Plain (1, 1) [up(8), up(8)], "xy01", Rgb;
    R8G8Sint = "R8G8_SINT": Plain (1, 1) [sp(8), sp(8)], "xy01", Rgb;
    R8G8Uscaled = "R8G8_USCALED": Plain (1, 1) [us(8), us(8)], "xy01", Rgb;
    R8G8Sscaled = "R8G8_SSCALED": Plain (1, 1) [ss(8), ss(8)], "xy01", Rgb;
    R8G8Srgb = "R8G8_SRGB": Plain (1, 1) [un(8), un(8)], "xy01", Srgb;
    G8R8Unorm = "G8R8_UNORM": Plain (1, 1) [un(8), un(8)], "yx01", Rgb;
    G8R8Snorm = "G8R8_SNORM": Plain (1, 1) [sn(8), sn(8)], "yx01", Rgb;
    R8Unorm = "R8_UNORM": Plain (1, 1) [un(8)], "x001", Rgb;
    R8Snorm = "R8_SNORM": Plain (1, 1) [sn(8)], "x001", Rgb;
    R8Uint = "R8_UINT": Plain (1, 1) [up(8)], "x001", Rgb;
    R8Sint = "R8_SINT": Plain (1, 1) [sp(8)], "x001", Rgb;
    R8Uscaled = "R8_USCALED": Plain (1, 1) [us(8)], "x001", Rgb;
    R8Sscaled = "R8_SSCALED": Plain (1, 1) [ss(8)], "x001", Rgb;
    R8Srgb = "R8_SRGB": Plain (1, 1) [un(8)], "x001", Srgb;

    // Alpha / luminance / intensity.
    A8Unorm = "A8_UNORM": Plain (1, 1) [un(8)], "000x", Rgb;
    L8Unorm = "L8_UNORM": Plain (1, 1) [un(8)], "xxx1", Rgb;
    I8Unorm = "I8_UNORM": Plain (1, 1) [un(8)], "xxxx", Rgb;
    L8A8Unorm = "L8A8_UNORM": Plain (1, 1) [un(8), un(8)], "xxxy", Rgb;
    L8Srgb = "L8_SRGB": Plain (1, 1) [un(8)], "xxx1", Srgb;
    L8A8Srgb = "L8A8_SRGB": Plain (1, 1) [un(8), un(8)], "xxxy", Srgb;
    A16Unorm = "A16_UNORM": Plain (1, 1) [un(16)], "000x", Rgb;
    L16Unorm = "L16_UNORM": Plain (1, 1) [un(16)], "xxx1", Rgb;
    L16A16Unorm = "L16A16_UNORM": Plain (1, 1) [un(16), un(16)], "xxxy", Rgb;

    // Mixed signedness (bump-map style).
    R8SG8SB8UX8UNorm = "R8SG8SB8UX8U_NORM": Plain (1, 1) [sn(8), sn(8), un(8), x(8)], "xyz1", Rgb;
    R5SG5SB6UNorm = "R5SG5SB6U_NORM": Plain (1, 1) [sn(5), sn(5), un(6)], "xyz1", Rgb;

    // 16-bit.
    R16Unorm = "R16_UNORM": Plain (1, 1) [un(16)], "x001", Rgb;
    R16Snorm = "R16_SNORM": Plain (1, 1) [sn(16)], "x001", Rgb;
    R16Uint = "R16_UINT": Plain (1, 1) [up(16)], "x001", Rgb;
    R16Sint = "R16_SINT": Plain (1, 1) [sp(16)], "x001", Rgb;
    R16Uscaled = "R16_USCALED": Plain (1, 1) [us(16)], "x001", Rgb;
    R16Sscaled = "R16_SSCALED": Plain (1, 1) [ss(16)], "x001", Rgb;
    R16Float = "R16_FLOAT": Plain (1, 1) [fl(16)], "x001", Rgb;
    R16G16Unorm = "R16G16_UNORM": Plain (1, 1) [un(16), un(16)], "xy01", Rgb;
    R16G16Snorm = "R16G16_SNORM": Plain (1, 1) [sn(16), sn(16)], "xy01", Rgb;
    R16G16Uint = "R16G16_UINT": Plain (1, 1) [up(16), up(16)], "xy01", Rgb;
    R16G16Sint = "R16G16_SINT": Plain (1, 1) [sp(16), sp(16)], "xy01", Rgb;
    R16G16Uscaled = "R16G16_USCALED": Plain (1, 1) [us(16), us(16)], "xy01", Rgb;
    R16G16Sscaled = "R16G16_SSCALED": Plain (1, 1) [ss(16), ss(16)], "xy01", Rgb;
    R16G16Float = "R16G16_FLOAT": Plain (1, 1) [fl(16), fl(16)], "xy01", Rgb;
    R16G16B16Unorm = "R16G16B16_UNORM": Plain (1, 1) [un(16), un(16), un(16)], "xyz1", Rgb;
    R16G16B16Snorm = "R16G16B16_SNORM": Plain (1, 1) [sn(16), sn(16), sn(16)], "xyz1", Rgb;
    R16G16B16Uint = "R16G16B16_UINT": Plain (1, 1) [up(16), up(16), up(16)], "xyz1", Rgb;
    R16G16B16Sint = "R16G16B16_SINT": Plain (1, 1) [sp(16), sp(16), sp(16)], "xyz1", Rgb;
    R16G16B16Uscaled = "R16G16B16_USCALED": Plain (1, 1) [us(16), us(16), us(16)], "xyz1", Rgb;
    R16G16B16Sscaled = "R16G16B16_SSCALED": Plain (1, 1) [ss(16), ss(16), ss(16)], "xyz1", Rgb;
    R16G16B16Float = "R16G16B16_FLOAT": Plain (1, 1) [fl(16), fl(16), fl(16)], "xyz1", Rgb;
    R16G16B16A16Unorm = "R16G16B16A16_UNORM": Plain (1, 1) [un(16), un(16), un(16), un(16)], "xyzw", Rgb;
    R16G16B16A16Snorm = "R16G16B16A16_SNORM": Plain (1, 1) [sn(16), sn(16), sn(16), sn(16)], "xyzw", Rgb;
    R16G16B16A16Uint = "R16G16B16A16_UINT": Plain (1, 1) [up(16), up(16), up(16), up(16)], "xyzw", Rgb;
    R16G16B16A16Sint = "R16G16B16A16_SINT": Plain (1, 1) [sp(16), sp(16), sp(16), sp(16)], "xyzw", Rgb;
    R16G16B16A16Uscaled = "R16G16B16A16_USCALED": Plain (1, 1) [us(16), us(16), us(16), us(16)], "xyzw", Rgb;
    R16G16B16A16Sscaled = "R16G16B16A16_SSCALED": Plain (1, 1) [ss(16), ss(16), ss(16), ss(16)], "xyzw", Rgb;
    R16G16B16A16Float = "R16G16B16A16_FLOAT": Plain (1, 1) [fl(16), fl(16), fl(16), fl(16)], "xyzw", Rgb;

    // 32-bit.
    R32Unorm = "R32_UNORM": Plain (1, 1) [un(32)], "x001", Rgb;
    R32Snorm = "R32_SNORM": Plain (1, 1) [sn(32)], "x001", Rgb;
    R32Uint = "R32_UINT": Plain (1, 1) [up(32)], "x001", Rgb;
    R32Sint = "R32_SINT": Plain (1, 1) [sp(32)], "x001", Rgb;
    R32Uscaled = "R32_USCALED": Plain (1, 1) [us(32)], "x001", Rgb;
    R32Sscaled = "R32_SSCALED": Plain (1, 1) [ss(32)], "x001", Rgb;
    R32Float = "R32_FLOAT": Plain (1, 1) [fl(32)], "x001", Rgb;
    R32Fixed = "R32_FIXED": Plain (1, 1) [fx(32)], "x001", Rgb;
    R32G32Unorm = "R32G32_UNORM": Plain (1, 1) [un(32), un(32)], "xy01", Rgb;
    R32G32Snorm = "R32G32_SNORM": Plain (1, 1) [sn(32), sn(32)], "xy01", Rgb;
    R32G32Uint = "R32G32_UINT": Plain (1, 1) [up(32), up(32)], "xy01", Rgb;
    R32G32Sint = "R32G32_SINT": Plain (1, 1) [sp(32), sp(32)], "xy01", Rgb;
    R32G32Uscaled = "R32G32_USCALED": Plain (1, 1) [us(32), us(32)], "xy01", Rgb;
    R32G32Sscaled = "R32G32_SSCALED": Plain (1, 1) [ss(32), ss(32)], "xy01", Rgb;
    R32G32Float = "R32G32_FLOAT": Plain (1, 1) [fl(32), fl(32)], "xy01", Rgb;
    R32G32Fixed = "R32G32_FIXED": Plain (1, 1) [fx(32), fx(32)], "xy01", Rgb;
    R32G32B32Unorm = "R32G32B32_UNORM": Plain (1, 1) [un(32), un(32), un(32)], "xyz1", Rgb;
    R32G32B32Snorm = "R32G32B32_SNORM": Plain (1, 1) [sn(32), sn(32), sn(32)], "xyz1", Rgb;
    R32G32B32Uint = "R32G32B32_UINT": Plain (1, 1) [up(32), up(32), up(32)], "xyz1", Rgb;
    R32G32B32Sint = "R32G32B32_SINT": Plain (1, 1) [sp(32), sp(32), sp(32)], "xyz1", Rgb;
    R32G32B32Uscaled = "R32G32B32_USCALED": Plain (1, 1) [us(32), us(32), us(32)], "xyz1", Rgb;
    R32G32B32Sscaled = "R32G32B32_SSCALED": Plain (1, 1) [ss(32), ss(32), ss(32)], "xyz1", Rgb;
    R32G32B32Float = "R32G32B32_FLOAT": Plain (1, 1) [fl(32), fl(32), fl(32)], "xyz1", Rgb;
    R32G32B32Fixed = "R32G32B32_FIXED": Plain (1, 1) [fx(32), fx(32), fx(32)], "xyz1", Rgb;
    R32G32B32A32Unorm = "R32G32B32A32_UNORM": Plain (1, 1) [un(32), un(32), un(32), un(32)], "xyzw", Rgb;
    R32G32B32A32Snorm = "R32G32B32A32_SNORM": Plain (1, 1) [sn(32), sn(32), sn(32), sn(32)], "xyzw", Rgb;
    R32G32B32A32Uint = "R32G32B32A32_UINT": Plain (1, 1) [up(32), up(32), up(32), up(32)], "xyzw", Rgb;
    R32G32B32A32Sint = "R32G32B32A32_SINT": Plain (1, 1) [sp(32), sp(32), sp(32), sp(32)], "xyzw", Rgb;
    R32G32B32A32Uscaled = "R32G32B32A32_USCALED": Plain (1, 1) [us(32), us(32), us(32), us(32)], "xyzw", Rgb;
    R32G32B32A32Sscaled = "R32G32B32A32_SSCALED": Plain (1, 1) [ss(32), ss(32), ss(32), ss(32)], "xyzw", Rgb;
    R32G32B32A32Float = "R32G32B32A32_FLOAT": Plain (1, 1) [fl(32), fl(32), fl(32), fl(32)], "xyzw", Rgb;
    R32G32B32A32Fixed = "R32G32B32A32_FIXED": Plain (1, 1) [fx(32), fx(32), fx(32), fx(32)], "xyzw", Rgb;
    R32G32B32X32Float = "R32G32B32X32_FLOAT": Plain (1, 1) [fl(32), fl(32), fl(32), x(32)], "xyz1", Rgb;

    // 64-bit.
    R64Float = "R64_FLOAT": Plain (1, 1) [fl(64)], "x001", Rgb;
    R64G64Float = "R64G64_FLOAT": Plain (1, 1) [fl(64), fl(64)], "xy01", Rgb;
    R64G64B64Float = "R64G64B64_FLOAT": Plain (1, 1) [fl(64), fl(64), fl(64)], "xyz1", Rgb;
    R64G64B64A64Float = "R64G64B64A64_FLOAT": Plain (1, 1) [fl(64), fl(64), fl(64), fl(64)], "xyzw", Rgb;
    R64Uint = "R64_UINT": Plain (1, 1) [up(64)], "x001", Rgb;
    R64Sint = "R64_SINT": Plain (1, 1) [sp(64)], "x001", Rgb;

    // Packed 16-bit.
    B5G6R5Unorm = "B5G6R5_UNORM": Plain (1, 1) [un(5), un(6), un(5)], "zyx1", Rgb;
    R5G6B5Unorm = "R5G6B5_UNORM": Plain (1, 1) [un(5), un(6), un(5)], "xyz1", Rgb;
    B5G5R5A1Unorm = "B5G5R5A1_UNORM": Plain (1, 1) [un(5), un(5), un(5), un(1)], "zyxw", Rgb;
    B5G5R5X1Unorm = "B5G5R5X1_UNORM": Plain (1, 1) [un(5), un(5), un(5), x(1)], "zyx1", Rgb;
    R5G5B5A1Unorm = "R5G5B5A1_UNORM": Plain (1, 1) [un(5), un(5), un(5), un(1)], "xyzw", Rgb;
    A1B5G5R5Unorm = "A1B5G5R5_UNORM": Plain (1, 1) [un(1), un(5), un(5), un(5)], "wzyx", Rgb;
    A1R5G5B5Unorm = "A1R5G5B5_UNORM": Plain (1, 1) [un(1), un(5), un(5), un(5)], "yzwx", Rgb;
    B4G4R4A4Unorm = "B4G4R4A4_UNORM": Plain (1, 1) [un(4), un(4), un(4), un(4)], "zyxw", Rgb;
    B4G4R4X4Unorm = "B4G4R4X4_UNORM": Plain (1, 1) [un(4), un(4), un(4), x(4)], "zyx1", Rgb;
    R4G4B4A4Unorm = "R4G4B4A4_UNORM": Plain (1, 1) [un(4), un(4), un(4), un(4)], "xyzw", Rgb;
    A4B4G4R4Unorm = "A4B4G4R4_UNORM": Plain (1, 1) [un(4), un(4), un(4), un(4)], "wzyx", Rgb;

    // Packed 32-bit.
    R10G10B10A2Unorm = "R10G10B10A2_UNORM": Plain (1, 1) [un(10), un(10), un(10), un(2)], "xyzw", Rgb;
    R10G10B10A2Snorm = "R10G10B10A2_SNORM": Plain (1, 1) [sn(10), sn(10), sn(10), sn(2)], "xyzw", Rgb;
    R10G10B10A2Uint = "R10G10B10A2_UINT": Plain (1, 1) [up(10), up(10), up(10), up(2)], "xyzw", Rgb;
    R10G10B10A2Sint = "R10G10B10A2_SINT": Plain (1, 1) [sp(10), sp(10), sp(10), sp(2)], "xyzw", Rgb;
    R10G10B10A2Uscaled = "R10G10B10A2_USCALED": Plain (1, 1) [us(10), us(10), us(10), us(2)], "xyzw", Rgb;
    R10G10B10A2Sscaled = "R10G10B10A2_SSCALED": Plain (1, 1) [ss(10), ss(10), ss(10), ss(2)], "xyzw", Rgb;
    R10G10B10X2Unorm = "R10G10B10X2_UNORM": Plain (1, 1) [un(10), un(10), un(10), x(2)], "xyz1", Rgb;
    B10G10R10A2Unorm = "B10G10R10A2_UNORM": Plain (1, 1) [un(10), un(10), un(10), un(2)], "zyxw", Rgb;
    B10G10R10A2Uint = "B10G10R10A2_UINT": Plain (1, 1) [up(10), up(10), up(10), up(2)], "zyxw", Rgb;
    A2R10G10B10Unorm = "A2R10G10B10_UNORM": Plain (1, 1) [un(2), un(10), un(10), un(10)], "yzwx", Rgb;
    A2B10G10R10Unorm = "A2B10G10R10_UNORM": Plain (1, 1) [un(2), un(10), un(10), un(10)], "wzyx", Rgb;
    R11G11B10Float = "R11G11B10_FLOAT": Other (1, 1) [x(32)], "xyz1", Rgb;
    R9G9B9E5Float = "R9G9B9E5_FLOAT": Other (1, 1) [x(32)], "xyz1", Rgb;

    // Depth / stencil.
    Z16Unorm = "Z16_UNORM": Plain (1, 1) [un(16)], "x___", Zs;
    Z32Unorm = "Z32_UNORM": Plain (1, 1) [un(32)], "x___", Zs;
    Z32Float = "Z32_FLOAT": Plain (1, 1) [fl(32)], "x___", Zs;
    Z24UnormS8Uint = "Z24_UNORM_S8_UINT": Plain (1, 1) [un(24), up(8)], "xy__", Zs;
    S8UintZ24Unorm = "S8_UINT_Z24_UNORM": Plain (1, 1) [up(8), un(24)], "yx__", Zs;
    X24S8Uint = "X24S8_UINT": Plain (1, 1) [x(24), up(8)], "_y__", Zs;
    S8X24Uint = "S8X24_UINT": Plain (1, 1) [up(8), x(24)], "_x__", Zs;
    Z24X8Unorm = "Z24X8_UNORM": Plain (1, 1) [un(24), x(8)], "x___", Zs;
    X8Z24Unorm = "X8Z24_UNORM": Plain (1, 1) [x(8), un(24)], "y___", Zs;
    S8Uint = "S8_UINT": Plain (1, 1) [up(8)], "_x__", Zs;
    Z32FloatS8X24Uint = "Z32_FLOAT_S8X24_UINT": Plain (1, 1) [fl(32), up(8), x(24)], "xy__", Zs;
    X32S8X24Uint = "X32_S8X24_UINT": Plain (1, 1) [x(32), up(8), x(24)], "_y__", Zs;
    Z16UnormS8Uint = "Z16_UNORM_S8_UINT": Plain (1, 1) [un(16), up(8)], "xy__", Zs;

    // S3TC.
    Dxt1Rgb = "DXT1_RGB": S3tc (4, 4) [x(64)], "xyz1", Rgb;
    Dxt1Rgba = "DXT1_RGBA": S3tc (4, 4) [x(64)], "xyzw", Rgb;
    Dxt3Rgba = "DXT3_RGBA": S3tc (4, 4) [x(128)], "xyzw", Rgb;
    Dxt5Rgba = "DXT5_RGBA": S3tc (4, 4) [x(128)], "xyzw", Rgb;
    Dxt1Srgb = "DXT1_SRGB": S3tc (4, 4) [x(64)], "xyz1", Srgb;
    Dxt1Srgba = "DXT1_SRGBA": S3tc (4, 4) [x(64)], "xyzw", Srgb;
    Dxt3Srgba = "DXT3_SRGBA": S3tc (4, 4) [x(128)], "xyzw", Srgb;
    Dxt5Srgba = "DXT5_SRGBA": S3tc (4, 4) [x(128)], "xyzw", Srgb;

    // RGTC / LATC.
    Rgtc1Unorm = "RGTC1_UNORM": Rgtc (4, 4) [x(64)], "x001", Rgb;
    Rgtc1Snorm = "RGTC1_SNORM": Rgtc (4, 4) [x(64)], "x001", Rgb;
    Rgtc2Unorm = "RGTC2_UNORM": Rgtc (4, 4) [x(128)], "xy01", Rgb;
    Rgtc2Snorm = "RGTC2_SNORM": Rgtc (4, 4) [x(128)], "xy01", Rgb;
    Latc1Unorm = "LATC1_UNORM": Rgtc (4, 4) [x(64)], "xxx1", Rgb;
    Latc1Snorm = "LATC1_SNORM": Rgtc (4, 4) [x(64)], "xxx1", Rgb;
    Latc2Unorm = "LATC2_UNORM": Rgtc (4, 4) [x(128)], "xxxy", Rgb;
    Latc2Snorm = "LATC2_SNORM": Rgtc (4, 4) [x(128)], "xxxy", Rgb;

    // BPTC.
    BptcRgbaUnorm = "BPTC_RGBA_UNORM": Bptc (4, 4) [x(128)], "xyzw", Rgb;
    BptcSrgba = "BPTC_SRGBA": Bptc (4, 4) [x(128)], "xyzw", Srgb;
    BptcRgbFloat = "BPTC_RGB_FLOAT": Bptc (4, 4) [x(128)], "xyz1", Rgb;
    BptcRgbUfloat = "BPTC_RGB_UFLOAT": Bptc (4, 4) [x(128)], "xyz1", Rgb;

    // ETC.
    Etc1Rgb8 = "ETC1_RGB8": Etc (4, 4) [x(64)], "xyz1", Rgb;
    Etc2Rgb8 = "ETC2_RGB8": Etc (4, 4) [x(64)], "xyz1", Rgb;
    Etc2Srgb8 = "ETC2_SRGB8": Etc (4, 4) [x(64)], "xyz1", Srgb;
    Etc2Rgb8A1 = "ETC2_RGB8A1": Etc (4, 4) [x(64)], "xyzw", Rgb;
    Etc2Srgb8A1 = "ETC2_SRGB8A1": Etc (4, 4) [x(64)], "xyzw", Srgb;
    Etc2Rgba8 = "ETC2_RGBA8": Etc (4, 4) [x(128)], "xyzw", Rgb;
    Etc2Srgba8 = "ETC2_SRGBA8": Etc (4, 4) [x(128)], "xyzw", Srgb;
    Etc2R11Unorm = "ETC2_R11_UNORM": Etc (4, 4) [x(64)], "x001", Rgb;
    Etc2R11Snorm = "ETC2_R11_SNORM": Etc (4, 4) [x(64)], "x001", Rgb;
    Etc2Rg11Unorm = "ETC2_RG11_UNORM": Etc (4, 4) [x(128)], "xy01", Rgb;
    Etc2Rg11Snorm = "ETC2_RG11_SNORM": Etc (4, 4) [x(128)], "xy01", Rgb;

    // ASTC.
    Astc4x4 = "ASTC_4x4": Astc (4, 4) [x(128)], "xyzw", Rgb;
    Astc4x4Srgb = "ASTC_4x4_SRGB": Astc (4, 4) [x(128)], "xyzw", Srgb;
    Astc8x8 = "ASTC_8x8": Astc (8, 8) [x(128)], "xyzw", Rgb;
    Astc8x8Srgb = "ASTC_8x8_SRGB": Astc (8, 8) [x(128)], "xyzw", Srgb;

    // Subsampled.
    Uyvy = "UYVY": Subsampled (2, 1) [x(32)], "xyz1", Yuv;
    Yuyv = "YUYV": Subsampled (2, 1) [x(32)], "xyz1", Yuv;
    R8G8B8G8Unorm = "R8G8_B8G8_UNORM": Subsampled (2, 1) [x(32)], "xyz1", Rgb;
    G8R8G8B8Unorm = "G8R8_G8B8_UNORM": Subsampled (2, 1) [x(32)], "xyz1", Rgb;
}

impl PipeFormat {
    /// Resolves the static channel description.
    #[inline]
    pub fn description(self) -> &'static FormatDescription {
        &DESCRIPTIONS[self as usize]
    }
}

impl fmt::Display for PipeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pipe format {0:?}")]
pub struct ParseFormatError(pub String);

impl FromStr for PipeFormat {
    type Err = ParseFormatError;

    /// Accepts the canonical name in any case, with or without a `PIPE_FORMAT_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = match trimmed.get(..12) {
            Some(prefix) if prefix.eq_ignore_ascii_case("PIPE_FORMAT_") => &trimmed[12..],
            _ => trimmed,
        };
        PipeFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PipeFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
