//! Translation of format descriptions into AMD GCN/RDNA register encodings.
//!
//! All classifiers are pure functions of a [`gfxhw_format::PipeFormat`] (or its description),
//! the hardware generation and, for color swaps, whether the CB byte-swaps. They never fail:
//! unsupported inputs map to the hardware's `INVALID` value or `None`, and callers reject the
//! resource.

mod buffer;
mod color;
mod config;
mod depth;
mod gfx_level;
pub mod regs;
mod report;
mod texture;

pub use buffer::{translate_buffer_dataformat, translate_buffer_numformat};
pub use color::{
    colorformat_endian_swap, colorformat_endian_swap_for, get_cb_format, get_cb_number_type,
    is_colorbuffer_format_supported, translate_colorswap,
};
pub use config::{ConfigError, TranslateConfig, BIG_ENDIAN_ENV, GFX_LEVEL_ENV};
pub use depth::{is_zs_format_supported, translate_dbformat};
pub use gfx_level::{GfxLevel, ParseGfxLevelError};
pub use regs::{
    BcSwizzle, BufDataFormat, BufNumFormat, ColorEndian, ColorFormat, ColorNumber, ColorSwap,
    ImgNumFormat, ZFormat, COLOR_SWAP_UNSUPPORTED,
};
pub use report::{BufferEncoding, ColorBufferEncoding, FormatEncodings};
pub use texture::{border_color_swizzle, translate_tex_numformat};
