//! Image descriptor and sampler fields.

use gfxhw_format::{ChannelType, Colorspace, FormatDescription, Layout, PipeFormat, Swizzle};

use crate::regs::{BcSwizzle, ImgNumFormat};

/// `NUM_FORMAT` for sampling an image of `desc`.
pub fn translate_tex_numformat(desc: &FormatDescription) -> ImgNumFormat {
    if desc.format == PipeFormat::S8UintZ24Unorm {
        return ImgNumFormat::Unorm;
    }

    let Some(first) = desc.first_non_void_channel() else {
        return blocked_numformat(desc);
    };
    if desc.colorspace == Colorspace::Srgb {
        return ImgNumFormat::Srgb;
    }

    let chan = &desc.channels[first];
    match chan.kind {
        ChannelType::Float => ImgNumFormat::Float,
        ChannelType::Signed if chan.normalized => ImgNumFormat::Snorm,
        ChannelType::Signed if chan.pure_integer => ImgNumFormat::Sint,
        ChannelType::Signed => ImgNumFormat::Sscaled,
        ChannelType::Unsigned if chan.normalized => ImgNumFormat::Unorm,
        ChannelType::Unsigned if chan.pure_integer => ImgNumFormat::Uint,
        ChannelType::Unsigned => ImgNumFormat::Uscaled,
        ChannelType::Fixed | ChannelType::Void => ImgNumFormat::Unorm,
    }
}

/// Formats whose whole block is a single opaque channel.
fn blocked_numformat(desc: &FormatDescription) -> ImgNumFormat {
    if desc.is_compressed() {
        return match desc.format {
            PipeFormat::Dxt1Srgb
            | PipeFormat::Dxt1Srgba
            | PipeFormat::Dxt3Srgba
            | PipeFormat::Dxt5Srgba
            | PipeFormat::BptcSrgba
            | PipeFormat::Etc2Srgb8
            | PipeFormat::Etc2Srgb8A1
            | PipeFormat::Etc2Srgba8 => ImgNumFormat::Srgb,
            // BPTC float data is signed; the sign is carried by SNORM/UNORM.
            PipeFormat::Rgtc1Snorm
            | PipeFormat::Latc1Snorm
            | PipeFormat::Rgtc2Snorm
            | PipeFormat::Latc2Snorm
            | PipeFormat::Etc2R11Snorm
            | PipeFormat::Etc2Rg11Snorm
            | PipeFormat::BptcRgbFloat => ImgNumFormat::Snorm,
            _ => ImgNumFormat::Unorm,
        };
    }

    match desc.layout {
        Layout::Subsampled => ImgNumFormat::Unorm,
        _ => ImgNumFormat::Float,
    }
}

/// `BORDER_COLOR_SWIZZLE` for a sampler reading `desc`.
///
/// Only the destination of alpha matters for the predefined border colors, so several
/// swizzles share an encoding.
pub fn border_color_swizzle(desc: &FormatDescription) -> BcSwizzle {
    if desc.format == PipeFormat::S8Uint {
        // Described as `_x__`, sampled as XYZW.
        debug_assert_eq!(desc.swizzle[1], Swizzle::X);
        return BcSwizzle::Xyzw;
    }

    let [s0, s1, s2, s3] = desc.swizzle;
    if s3 == Swizzle::X {
        if s2 == Swizzle::Y {
            BcSwizzle::Wzyx
        } else {
            BcSwizzle::Wxyz
        }
    } else if s0 == Swizzle::X {
        if s1 == Swizzle::Y {
            BcSwizzle::Xyzw
        } else {
            BcSwizzle::Xwyz
        }
    } else if s1 == Swizzle::X {
        BcSwizzle::Yxwz
    } else if s2 == Swizzle::X {
        BcSwizzle::Zyxw
    } else {
        BcSwizzle::Xyzw
    }
}
