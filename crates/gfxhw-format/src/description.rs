use crate::channel::{Channel, Colorspace, Layout, Swizzle};
use crate::PipeFormat;

/// Block dimensions of a format. Plain formats use 1x1 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatBlock {
    pub width: u8,
    pub height: u8,
    /// Bits per block.
    pub bits: u16,
}

/// Channel layout of a [`PipeFormat`].
///
/// Channels are listed in memory order (least significant bits first for packed formats).
/// `swizzle[i]` names the channel that feeds output component `i` (R, G, B, A; or depth,
/// stencil for `Colorspace::Zs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescription {
    pub format: PipeFormat,
    pub name: &'static str,
    pub layout: Layout,
    pub block: FormatBlock,
    /// Channels with a non-zero size, padding included.
    pub nr_channels: u8,
    /// Every channel has the same byte-multiple size and encoding.
    pub is_array: bool,
    /// Non-void channels disagree on kind or conversion flags.
    pub is_mixed: bool,
    pub channels: [Channel; 4],
    pub swizzle: [Swizzle; 4],
    pub colorspace: Colorspace,
}

impl FormatDescription {
    pub(crate) const fn new(
        format: PipeFormat,
        name: &'static str,
        layout: Layout,
        block_size: (u8, u8),
        channels: [Channel; 4],
        swizzle: [Swizzle; 4],
        colorspace: Colorspace,
    ) -> Self {
        let mut bits = 0u16;
        let mut nr_channels = 0u8;
        let mut i = 0;
        while i < 4 {
            if channels[i].size != 0 {
                bits += channels[i].size as u16;
                nr_channels += 1;
            }
            i += 1;
        }

        let plain = matches!(layout, Layout::Plain);
        Self {
            format,
            name,
            layout,
            block: FormatBlock {
                width: block_size.0,
                height: block_size.1,
                bits,
            },
            nr_channels,
            is_array: plain && compute_is_array(&channels),
            is_mixed: plain && compute_is_mixed(&channels),
            channels,
            swizzle,
            colorspace,
        }
    }

    /// Index of the first channel carrying data, if any.
    ///
    /// Block-compressed, subsampled and shared-exponent formats describe their block as a
    /// single void channel and therefore return `None`.
    pub const fn first_non_void_channel(&self) -> Option<usize> {
        let mut i = 0;
        while i < 4 {
            if !self.channels[i].is_void() {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.layout.is_compressed()
    }

    #[inline]
    pub const fn is_plain(&self) -> bool {
        matches!(self.layout, Layout::Plain)
    }

    pub const fn is_depth_or_stencil(&self) -> bool {
        matches!(self.colorspace, Colorspace::Zs)
    }

    /// Depth lives in output component 0 of a Zs format.
    pub const fn has_depth(&self) -> bool {
        self.is_depth_or_stencil() && !matches!(self.swizzle[0], Swizzle::None)
    }

    /// Stencil lives in output component 1 of a Zs format.
    pub const fn has_stencil(&self) -> bool {
        self.is_depth_or_stencil() && !matches!(self.swizzle[1], Swizzle::None)
    }

    /// Sizes of all four channels, absent ones reported as 0.
    pub const fn channel_sizes(&self) -> [u8; 4] {
        [
            self.channels[0].size,
            self.channels[1].size,
            self.channels[2].size,
            self.channels[3].size,
        ]
    }
}

/// The channel the other channels are compared against: channel 0, or channel 1 when
/// channel 0 is padding.
const fn reference_channel(channels: &[Channel; 4]) -> &Channel {
    if channels[0].is_void() {
        &channels[1]
    } else {
        &channels[0]
    }
}

const fn compute_is_array(channels: &[Channel; 4]) -> bool {
    let reference = reference_channel(channels);
    let mut i = 0;
    while i < 4 {
        let c = &channels[i];
        if c.size != 0 && (c.size != reference.size || c.size % 8 != 0) {
            return false;
        }
        if !c.is_void() && !c.same_encoding(reference) {
            return false;
        }
        i += 1;
    }
    true
}

const fn compute_is_mixed(channels: &[Channel; 4]) -> bool {
    let reference = reference_channel(channels);
    let mut i = 1;
    while i < 4 {
        let c = &channels[i];
        if !c.is_void() && !c.same_encoding(reference) {
            return true;
        }
        i += 1;
    }
    false
}
