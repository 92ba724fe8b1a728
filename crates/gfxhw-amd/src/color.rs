//! Color-buffer (CB) state for render targets.

use gfxhw_format::{ChannelType, Colorspace, PipeFormat, Swizzle};
use tracing::{debug, trace};

use crate::gfx_level::GfxLevel;
use crate::regs::{ColorEndian, ColorFormat, ColorNumber, ColorSwap};

/// Shared-exponent formats became renderable with this generation.
const SHARED_EXPONENT_RT_LEVEL: GfxLevel = GfxLevel::Gfx10_3;

/// `CB_COLOR*_INFO.FORMAT` for rendering to `format`.
pub fn get_cb_format(gfx_level: GfxLevel, format: PipeFormat) -> ColorFormat {
    let desc = format.description();

    if format == PipeFormat::R11G11B10Float {
        return ColorFormat::Color10_11_11;
    }
    if gfx_level >= SHARED_EXPONENT_RT_LEVEL && format == PipeFormat::R9G9B9E5Float {
        return ColorFormat::Color5_9_9_9;
    }
    if !desc.is_plain() {
        trace!(%format, layout = ?desc.layout, "not a plain layout");
        return ColorFormat::Invalid;
    }

    // Stencil is never written through CB, so mixed depth/stencil layouts are fine.
    if desc.is_mixed && desc.colorspace != Colorspace::Zs {
        debug!(%format, "mixed channel encodings cannot be rendered");
        return ColorFormat::Invalid;
    }

    if let Some(first) = desc.first_non_void_channel() {
        let chan = &desc.channels[first];
        let scaled = matches!(chan.kind, ChannelType::Unsigned | ChannelType::Signed)
            && !chan.normalized
            && !chan.pure_integer;
        if scaled {
            debug!(%format, "scaled formats are not renderable");
            return ColorFormat::Invalid;
        }
    }

    let sizes = desc.channel_sizes();
    let color_format = match (desc.nr_channels, sizes) {
        (1, [8, ..]) => ColorFormat::Color8,
        (1, [16, ..]) => ColorFormat::Color16,
        (1, [32, ..]) => ColorFormat::Color32,
        (1, [64, ..]) => ColorFormat::Color32_32,

        (2, [8, 8, ..]) => ColorFormat::Color8_8,
        (2, [16, 16, ..]) => ColorFormat::Color16_16,
        (2, [32, 32, ..]) => ColorFormat::Color32_32,
        (2, [8, 24, 0, 0]) => ColorFormat::Color24_8,
        (2, [24, 8, 0, 0]) => ColorFormat::Color8_24,

        (3, [5, 6, 5, 0]) => ColorFormat::Color5_6_5,
        (3, [32, 8, 24, 0]) => ColorFormat::ColorX24_8_32Float,

        (4, [4, 4, 4, 4]) => ColorFormat::Color4_4_4_4,
        (4, [8, 8, 8, 8]) => ColorFormat::Color8_8_8_8,
        (4, [16, 16, 16, 16]) => ColorFormat::Color16_16_16_16,
        (4, [32, 32, 32, 32]) => ColorFormat::Color32_32_32_32,
        (4, [5, 5, 5, 1]) => ColorFormat::Color1_5_5_5,
        (4, [1, 5, 5, 5]) => ColorFormat::Color5_5_5_1,
        (4, [10, 10, 10, 2]) => ColorFormat::Color2_10_10_10,
        (4, [2, 10, 10, 10]) => ColorFormat::Color10_10_10_2,

        _ => ColorFormat::Invalid,
    };

    if color_format == ColorFormat::Invalid {
        debug!(%format, nr_channels = desc.nr_channels, ?sizes, "no color buffer format");
    }
    color_format
}

/// `CB_COLOR*_INFO.NUMBER_TYPE` for rendering to `format`.
pub fn get_cb_number_type(format: PipeFormat) -> ColorNumber {
    let desc = format.description();
    let Some(first) = desc.first_non_void_channel() else {
        return ColorNumber::Float;
    };

    let chan = &desc.channels[first];
    match chan.kind {
        ChannelType::Float => ColorNumber::Float,
        _ if desc.colorspace == Colorspace::Srgb => ColorNumber::Srgb,
        ChannelType::Signed if chan.pure_integer => ColorNumber::Sint,
        ChannelType::Signed => ColorNumber::Snorm,
        ChannelType::Unsigned if chan.pure_integer => ColorNumber::Uint,
        _ => ColorNumber::Unorm,
    }
}

/// `CB_COLOR*_INFO.COMP_SWAP` for rendering to `format`, or `None` when the channel order
/// cannot be expressed.
///
/// `do_endian_swap` selects the orderings used when the CB also byte-swaps on a big-endian
/// host.
pub fn translate_colorswap(
    gfx_level: GfxLevel,
    format: PipeFormat,
    do_endian_swap: bool,
) -> Option<ColorSwap> {
    use Swizzle::{None as N, X, Y, Z, W};

    let desc = format.description();

    if format == PipeFormat::R11G11B10Float {
        return Some(ColorSwap::Std);
    }
    if gfx_level >= SHARED_EXPONENT_RT_LEVEL && format == PipeFormat::R9G9B9E5Float {
        return Some(ColorSwap::Std);
    }
    if !desc.is_plain() {
        return None;
    }

    let s = desc.swizzle;
    let swap = match desc.nr_channels {
        1 => match s {
            [X, ..] => Some(ColorSwap::Std),
            [.., X] => Some(ColorSwap::AltRev),
            _ => None,
        },
        2 => match s {
            [X, Y, ..] | [X, N, ..] | [N, Y, ..] => Some(ColorSwap::Std),
            [Y, X, ..] | [Y, N, ..] | [N, X, ..] => Some(if do_endian_swap {
                ColorSwap::Std
            } else {
                ColorSwap::StdRev
            }),
            [X, _, _, Y] => Some(ColorSwap::Alt),
            [Y, _, _, X] => Some(ColorSwap::AltRev),
            _ => None,
        },
        3 => match s {
            [X, ..] => Some(if do_endian_swap {
                ColorSwap::StdRev
            } else {
                ColorSwap::Std
            }),
            [Z, ..] => Some(ColorSwap::StdRev),
            _ => None,
        },
        // The outer components may be NONE; only the middle pair decides.
        4 => match s {
            [_, Y, Z, _] => Some(ColorSwap::Std),
            [_, Z, Y, _] => Some(ColorSwap::StdRev),
            [_, Y, X, _] => Some(ColorSwap::Alt),
            [_, Z, W, _] if desc.is_array => Some(ColorSwap::AltRev),
            [_, Z, W, _] => Some(if do_endian_swap {
                ColorSwap::Alt
            } else {
                ColorSwap::AltRev
            }),
            _ => None,
        },
        _ => None,
    };

    if swap.is_none() {
        debug!(%format, swizzle = ?s, "no color swap for channel order");
    }
    swap
}

/// Whether `format` can be bound as a render target on `gfx_level`.
pub fn is_colorbuffer_format_supported(gfx_level: GfxLevel, format: PipeFormat) -> bool {
    get_cb_format(gfx_level, format) != ColorFormat::Invalid
        && translate_colorswap(gfx_level, format, false).is_some()
}

/// `CB_COLOR*_INFO.ENDIAN` for the host byte order.
pub const fn colorformat_endian_swap(color_format: ColorFormat) -> ColorEndian {
    colorformat_endian_swap_for(color_format, cfg!(target_endian = "big"))
}

/// `CB_COLOR*_INFO.ENDIAN` when the host byte order is given explicitly.
pub const fn colorformat_endian_swap_for(
    color_format: ColorFormat,
    big_endian: bool,
) -> ColorEndian {
    if !big_endian {
        return ColorEndian::None;
    }

    match color_format {
        ColorFormat::Color8 => ColorEndian::None,

        ColorFormat::Color5_6_5
        | ColorFormat::Color1_5_5_5
        | ColorFormat::Color4_4_4_4
        | ColorFormat::Color16
        | ColorFormat::Color8_8 => ColorEndian::Swap8In16,

        ColorFormat::Color8_8_8_8
        | ColorFormat::Color2_10_10_10
        | ColorFormat::Color10_10_10_2
        | ColorFormat::Color8_24
        | ColorFormat::Color24_8
        | ColorFormat::Color16_16 => ColorEndian::Swap8In32,

        ColorFormat::Color16_16_16_16 => ColorEndian::Swap8In16,
        ColorFormat::Color32_32 | ColorFormat::Color32_32_32_32 => ColorEndian::Swap8In32,

        // Includes COLOR_32, which has no swap encoding.
        _ => ColorEndian::None,
    }
}
