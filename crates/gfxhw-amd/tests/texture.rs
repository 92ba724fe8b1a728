use gfxhw_amd::{border_color_swizzle, translate_tex_numformat, BcSwizzle, ImgNumFormat};
use gfxhw_format::PipeFormat;
use pretty_assertions::assert_eq;

#[test]
fn plain_numeric_formats() {
    let cases = [
        (PipeFormat::R8G8B8A8Unorm, ImgNumFormat::Unorm),
        (PipeFormat::R8Snorm, ImgNumFormat::Snorm),
        (PipeFormat::R8Uint, ImgNumFormat::Uint),
        (PipeFormat::R8Sint, ImgNumFormat::Sint),
        (PipeFormat::R8Uscaled, ImgNumFormat::Uscaled),
        (PipeFormat::R8Sscaled, ImgNumFormat::Sscaled),
        (PipeFormat::R16G16Float, ImgNumFormat::Float),
        // Unlike vertex fetch, wide channels keep their conversion.
        (PipeFormat::R32Unorm, ImgNumFormat::Unorm),
        (PipeFormat::R32Uint, ImgNumFormat::Uint),
        (PipeFormat::R32Fixed, ImgNumFormat::Unorm),
        (PipeFormat::R8G8B8A8Srgb, ImgNumFormat::Srgb),
        (PipeFormat::B8G8R8X8Srgb, ImgNumFormat::Srgb),
        (PipeFormat::L8Srgb, ImgNumFormat::Srgb),
    ];
    for (format, expected) in cases {
        assert_eq!(translate_tex_numformat(format.description()), expected, "{format}");
    }
}

#[test]
fn depth_stencil_numeric_formats() {
    let cases = [
        (PipeFormat::S8UintZ24Unorm, ImgNumFormat::Unorm),
        (PipeFormat::Z24UnormS8Uint, ImgNumFormat::Unorm),
        (PipeFormat::X24S8Uint, ImgNumFormat::Uint),
        (PipeFormat::S8Uint, ImgNumFormat::Uint),
        (PipeFormat::Z32Float, ImgNumFormat::Float),
    ];
    for (format, expected) in cases {
        assert_eq!(translate_tex_numformat(format.description()), expected, "{format}");
    }
}

#[test]
fn blocked_numeric_formats() {
    let cases = [
        (PipeFormat::Dxt1Rgb, ImgNumFormat::Unorm),
        (PipeFormat::Dxt1Srgb, ImgNumFormat::Srgb),
        (PipeFormat::Dxt3Srgba, ImgNumFormat::Srgb),
        (PipeFormat::Rgtc1Snorm, ImgNumFormat::Snorm),
        (PipeFormat::Rgtc2Unorm, ImgNumFormat::Unorm),
        (PipeFormat::Latc2Snorm, ImgNumFormat::Snorm),
        (PipeFormat::BptcSrgba, ImgNumFormat::Srgb),
        (PipeFormat::BptcRgbFloat, ImgNumFormat::Snorm),
        (PipeFormat::BptcRgbUfloat, ImgNumFormat::Unorm),
        (PipeFormat::Etc1Rgb8, ImgNumFormat::Unorm),
        (PipeFormat::Etc2Srgb8A1, ImgNumFormat::Srgb),
        (PipeFormat::Etc2R11Snorm, ImgNumFormat::Snorm),
        (PipeFormat::Astc8x8Srgb, ImgNumFormat::Unorm),
        (PipeFormat::Uyvy, ImgNumFormat::Unorm),
        (PipeFormat::R8G8B8G8Unorm, ImgNumFormat::Unorm),
        (PipeFormat::R9G9B9E5Float, ImgNumFormat::Float),
        (PipeFormat::R11G11B10Float, ImgNumFormat::Float),
    ];
    for (format, expected) in cases {
        assert_eq!(translate_tex_numformat(format.description()), expected, "{format}");
    }
}

#[test]
fn border_color_swizzles() {
    let cases = [
        (PipeFormat::R8G8B8A8Unorm, BcSwizzle::Xyzw),
        (PipeFormat::A8B8G8R8Unorm, BcSwizzle::Wzyx),
        (PipeFormat::A8R8G8B8Unorm, BcSwizzle::Wxyz),
        (PipeFormat::A8Unorm, BcSwizzle::Wxyz),
        (PipeFormat::I8Unorm, BcSwizzle::Wxyz),
        (PipeFormat::L8Unorm, BcSwizzle::Xwyz),
        (PipeFormat::L8A8Unorm, BcSwizzle::Xwyz),
        (PipeFormat::R8Unorm, BcSwizzle::Xwyz),
        (PipeFormat::G8R8Unorm, BcSwizzle::Yxwz),
        (PipeFormat::B8G8R8A8Unorm, BcSwizzle::Zyxw),
        (PipeFormat::B5G6R5Unorm, BcSwizzle::Zyxw),
        (PipeFormat::Z24UnormS8Uint, BcSwizzle::Xyzw),
        (PipeFormat::S8Uint, BcSwizzle::Xyzw),
        (PipeFormat::X24S8Uint, BcSwizzle::Xyzw),
    ];
    for (format, expected) in cases {
        assert_eq!(border_color_swizzle(format.description()), expected, "{format}");
    }
}
