//! `gfxhw-format` describes pixel/vertex formats as channel layouts.
//!
//! Each [`PipeFormat`] resolves to a static [`FormatDescription`]: channel sizes and numeric
//! kinds in memory order, the swizzle that maps channels to RGBA (or depth/stencil), the layout
//! class and the colorspace. The hardware translation crates classify formats purely from this
//! data.

mod channel;
mod description;
mod pipe_format;

pub use channel::{Channel, ChannelType, Colorspace, Layout, Swizzle};
pub use description::{FormatBlock, FormatDescription};
pub use pipe_format::{ParseFormatError, PipeFormat};
