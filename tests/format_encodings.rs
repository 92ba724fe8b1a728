use gfxhw_amd::{
    get_cb_format, is_colorbuffer_format_supported, is_zs_format_supported, translate_colorswap,
    ColorFormat, FormatEncodings, GfxLevel, TranslateConfig, ZFormat,
};
use gfxhw_format::{Layout, PipeFormat};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn configs() -> impl Iterator<Item = TranslateConfig> {
    GfxLevel::ALL.iter().flat_map(|&gfx_level| {
        [false, true].map(|big_endian| TranslateConfig {
            gfx_level,
            big_endian,
        })
    })
}

#[test]
fn reports_agree_with_classifiers() {
    for config in configs() {
        for report in FormatEncodings::all(&config) {
            let format = report.format;
            assert_eq!(report.gfx_level, config.gfx_level);
            assert_eq!(report.color.format, get_cb_format(config.gfx_level, format));
            assert_eq!(
                report.color.swap,
                translate_colorswap(config.gfx_level, format, config.big_endian),
                "{format} on {}",
                config.gfx_level
            );
            assert_eq!(
                report.color.supported,
                is_colorbuffer_format_supported(config.gfx_level, format)
            );
        }
    }
}

#[test]
fn supported_render_targets_have_complete_encodings() {
    for config in configs() {
        for report in FormatEncodings::all(&config).filter(|r| r.color.supported) {
            let desc = report.format.description();
            assert_ne!(report.color.format, ColorFormat::Invalid, "{}", report.format);
            assert!(!desc.is_compressed(), "{}", report.format);
            assert!(
                matches!(desc.layout, Layout::Plain | Layout::Other),
                "{} has layout {:?}",
                report.format,
                desc.layout
            );
        }
    }
}

#[test]
fn depth_attachments_match_descriptions() {
    for &format in PipeFormat::ALL {
        let desc = format.description();
        let report = FormatEncodings::compute(&TranslateConfig::new(GfxLevel::Gfx11), format);
        assert_eq!(report.z_format != ZFormat::Invalid, is_zs_format_supported(format));
        if is_zs_format_supported(format) {
            assert!(desc.has_depth(), "{format} is accepted but carries no depth");
        }
        if !desc.is_depth_or_stencil() {
            assert_eq!(report.z_format, ZFormat::Invalid, "{format}");
        }
    }
}

#[test]
fn buffer_encoding_tracks_fetchable_channels() {
    let config = TranslateConfig::new(GfxLevel::Gfx9);
    for report in FormatEncodings::all(&config) {
        let desc = report.format.description();
        let fetchable = report.format == PipeFormat::R11G11B10Float
            || desc.first_non_void_channel().is_some();
        assert_eq!(report.buffer.is_some(), fetchable, "{}", report.format);
    }
}

#[test]
fn json_uses_register_names() {
    let config = TranslateConfig {
        gfx_level: GfxLevel::Gfx10_3,
        big_endian: false,
    };
    let json = serde_json::to_value(FormatEncodings::compute(&config, PipeFormat::B8G8R8A8Srgb))
        .unwrap();

    let expected: Value = serde_json::json!({
        "format": "B8G8R8A8_SRGB",
        "gfx_level": "gfx10.3",
        "buffer": {
            "num_format": "BUF_NUM_FORMAT_UNORM",
            "data_format": "BUF_DATA_FORMAT_8_8_8_8",
        },
        "tex_num_format": "IMG_NUM_FORMAT_SRGB",
        "color": {
            "format": "COLOR_8_8_8_8",
            "number_type": "NUMBER_SRGB",
            "swap": "SWAP_ALT",
            "endian": "ENDIAN_NONE",
            "supported": true,
        },
        "z_format": "Z_INVALID",
        "border_color_swizzle": "BC_SWIZZLE_ZYXW",
    });
    assert_eq!(json, expected);
}

#[test]
fn every_report_serializes() {
    for config in configs() {
        for report in FormatEncodings::all(&config) {
            let json = serde_json::to_value(report).unwrap();
            assert_eq!(json["format"], report.format.name());
            assert!(json["color"]["format"].as_str().unwrap().starts_with("COLOR_"));
        }
    }
}
