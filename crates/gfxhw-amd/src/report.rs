//! Every register encoding of one format, gathered for inspection and tooling.

use gfxhw_format::PipeFormat;

use crate::buffer::{translate_buffer_dataformat, translate_buffer_numformat};
use crate::color::{
    colorformat_endian_swap_for, get_cb_format, get_cb_number_type,
    is_colorbuffer_format_supported, translate_colorswap,
};
use crate::config::TranslateConfig;
use crate::depth::translate_dbformat;
use crate::gfx_level::GfxLevel;
use crate::regs::{
    BcSwizzle, BufDataFormat, BufNumFormat, ColorEndian, ColorFormat, ColorNumber, ColorSwap,
    ImgNumFormat, ZFormat,
};
use crate::texture::{border_color_swizzle, translate_tex_numformat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BufferEncoding {
    pub num_format: BufNumFormat,
    pub data_format: BufDataFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorBufferEncoding {
    pub format: ColorFormat,
    pub number_type: ColorNumber,
    /// `None` when the channel order has no swap encoding.
    pub swap: Option<ColorSwap>,
    pub endian: ColorEndian,
    pub supported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatEncodings {
    pub format: PipeFormat,
    pub gfx_level: GfxLevel,
    /// Absent for block-compressed, subsampled and shared-exponent formats.
    pub buffer: Option<BufferEncoding>,
    pub tex_num_format: ImgNumFormat,
    pub color: ColorBufferEncoding,
    pub z_format: ZFormat,
    pub border_color_swizzle: BcSwizzle,
}

impl FormatEncodings {
    pub fn compute(config: &TranslateConfig, format: PipeFormat) -> Self {
        let desc = format.description();
        let gfx_level = config.gfx_level;

        let fetchable =
            format == PipeFormat::R11G11B10Float || desc.first_non_void_channel().is_some();
        let buffer = fetchable.then(|| BufferEncoding {
            num_format: translate_buffer_numformat(desc),
            data_format: translate_buffer_dataformat(desc),
        });

        let cb_format = get_cb_format(gfx_level, format);
        let color = ColorBufferEncoding {
            format: cb_format,
            number_type: get_cb_number_type(format),
            swap: translate_colorswap(gfx_level, format, config.big_endian),
            endian: colorformat_endian_swap_for(cb_format, config.big_endian),
            supported: is_colorbuffer_format_supported(gfx_level, format),
        };

        Self {
            format,
            gfx_level,
            buffer,
            tex_num_format: translate_tex_numformat(desc),
            color,
            z_format: translate_dbformat(format),
            border_color_swizzle: border_color_swizzle(desc),
        }
    }

    /// Reports for every known format, in table order.
    pub fn all(config: &TranslateConfig) -> impl Iterator<Item = Self> + '_ {
        PipeFormat::ALL
            .iter()
            .map(move |&format| Self::compute(config, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_formats_have_no_buffer_encoding() {
        let config = TranslateConfig::new(GfxLevel::Gfx9);
        let report = FormatEncodings::compute(&config, PipeFormat::Dxt1Srgb);
        assert_eq!(report.buffer, None);
        assert_eq!(report.tex_num_format, ImgNumFormat::Srgb);
        assert!(!report.color.supported);

        let report = FormatEncodings::compute(&config, PipeFormat::R11G11B10Float);
        assert_eq!(
            report.buffer,
            Some(BufferEncoding {
                num_format: BufNumFormat::Float,
                data_format: BufDataFormat::Format10_11_11,
            })
        );
    }

    #[test]
    fn big_endian_selects_swap_and_endian() {
        let config = TranslateConfig {
            gfx_level: GfxLevel::Gfx8,
            big_endian: true,
        };
        let report = FormatEncodings::compute(&config, PipeFormat::R8G8B8A8Unorm);
        assert_eq!(report.color.format, ColorFormat::Color8_8_8_8);
        assert_eq!(report.color.endian, ColorEndian::Swap8In32);
        assert_eq!(report.color.swap, Some(ColorSwap::Std));

        let report = FormatEncodings::compute(&config, PipeFormat::G8R8Unorm);
        assert_eq!(report.color.swap, Some(ColorSwap::Std));
        assert!(report.color.supported);
    }

    #[test]
    fn covers_every_format() {
        let config = TranslateConfig::new(GfxLevel::Gfx12);
        assert_eq!(FormatEncodings::all(&config).count(), PipeFormat::ALL.len());
    }
}
