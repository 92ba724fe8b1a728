//! Vertex-fetch (typed buffer) descriptor fields.

use gfxhw_format::{ChannelType, FormatDescription, PipeFormat};
use tracing::debug;

use crate::regs::{BufDataFormat, BufNumFormat};

/// `NUM_FORMAT` for a typed buffer load of `desc`.
///
/// Every format except `R11G11B10_FLOAT` must have a non-void channel.
pub fn translate_buffer_numformat(desc: &FormatDescription) -> BufNumFormat {
    if desc.format == PipeFormat::R11G11B10Float {
        return BufNumFormat::Float;
    }

    let Some(first) = desc.first_non_void_channel() else {
        debug_assert!(false, "{} has no non-void channel", desc.name);
        return BufNumFormat::Float;
    };
    let chan = &desc.channels[first];
    let integer = chan.size >= 32 || chan.pure_integer;

    match chan.kind {
        ChannelType::Signed | ChannelType::Fixed => {
            if integer {
                BufNumFormat::Sint
            } else if chan.normalized {
                BufNumFormat::Snorm
            } else {
                BufNumFormat::Sscaled
            }
        }
        ChannelType::Unsigned => {
            if integer {
                BufNumFormat::Uint
            } else if chan.normalized {
                BufNumFormat::Unorm
            } else {
                BufNumFormat::Uscaled
            }
        }
        ChannelType::Float | ChannelType::Void => BufNumFormat::Float,
    }
}

/// `DATA_FORMAT` for a typed buffer load of `desc`.
///
/// Three-component 8/16-bit formats map to the single-component encoding and are fetched with
/// one load per component. 64-bit channels are fetched as pairs of dwords.
pub fn translate_buffer_dataformat(desc: &FormatDescription) -> BufDataFormat {
    if desc.format == PipeFormat::R11G11B10Float {
        return BufDataFormat::Format10_11_11;
    }

    let Some(first) = desc.first_non_void_channel() else {
        debug_assert!(false, "{} has no non-void channel", desc.name);
        return BufDataFormat::Invalid;
    };

    let sizes = desc.channel_sizes();
    if desc.nr_channels == 4 && sizes == [10, 10, 10, 2] {
        return BufDataFormat::Format2_10_10_10;
    }

    let size = sizes[first];
    let count = usize::from(desc.nr_channels);
    if sizes[..count].iter().any(|&s| s != size) {
        debug!(format = desc.name, ?sizes, "vertex format has unequal channel sizes");
        return BufDataFormat::Invalid;
    }

    match (size, count) {
        (8, 1 | 3) => BufDataFormat::Format8,
        (8, 2) => BufDataFormat::Format8_8,
        (8, 4) => BufDataFormat::Format8_8_8_8,
        (16, 1 | 3) => BufDataFormat::Format16,
        (16, 2) => BufDataFormat::Format16_16,
        (16, 4) => BufDataFormat::Format16_16_16_16,
        (32, 1) => BufDataFormat::Format32,
        (32, 2) => BufDataFormat::Format32_32,
        (32, 3) => BufDataFormat::Format32_32_32,
        (32, 4) => BufDataFormat::Format32_32_32_32,
        (64, 1 | 3) => BufDataFormat::Format32_32,
        (64, 2 | 4) => BufDataFormat::Format32_32_32_32,
        _ => {
            debug!(format = desc.name, size, count, "no vertex data format");
            BufDataFormat::Invalid
        }
    }
}
