//! Per-channel attributes of a format description.

/// Numeric kind stored in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    /// Padding, or no channel at all.
    Void,
    Unsigned,
    Signed,
    /// Signed 16.16 fixed point.
    Fixed,
    Float,
}

/// One component of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    pub kind: ChannelType,
    pub normalized: bool,
    pub pure_integer: bool,
    /// Width in bits. Zero for absent channels.
    pub size: u8,
}

impl Channel {
    /// Placeholder for channels past `nr_channels`.
    pub const NONE: Self = Self::void(0);

    pub const fn void(size: u8) -> Self {
        Self {
            kind: ChannelType::Void,
            normalized: false,
            pure_integer: false,
            size,
        }
    }

    pub const fn unorm(size: u8) -> Self {
        Self {
            kind: ChannelType::Unsigned,
            normalized: true,
            pure_integer: false,
            size,
        }
    }

    pub const fn snorm(size: u8) -> Self {
        Self {
            kind: ChannelType::Signed,
            normalized: true,
            pure_integer: false,
            size,
        }
    }

    pub const fn uint(size: u8) -> Self {
        Self {
            kind: ChannelType::Unsigned,
            normalized: false,
            pure_integer: true,
            size,
        }
    }

    pub const fn sint(size: u8) -> Self {
        Self {
            kind: ChannelType::Signed,
            normalized: false,
            pure_integer: true,
            size,
        }
    }

    /// Unsigned integer converted to float without normalization.
    pub const fn uscaled(size: u8) -> Self {
        Self {
            kind: ChannelType::Unsigned,
            normalized: false,
            pure_integer: false,
            size,
        }
    }

    /// Signed integer converted to float without normalization.
    pub const fn sscaled(size: u8) -> Self {
        Self {
            kind: ChannelType::Signed,
            normalized: false,
            pure_integer: false,
            size,
        }
    }

    pub const fn float(size: u8) -> Self {
        Self {
            kind: ChannelType::Float,
            normalized: false,
            pure_integer: false,
            size,
        }
    }

    pub const fn fixed(size: u8) -> Self {
        Self {
            kind: ChannelType::Fixed,
            normalized: false,
            pure_integer: false,
            size,
        }
    }

    #[inline]
    pub const fn is_void(&self) -> bool {
        matches!(self.kind, ChannelType::Void)
    }

    /// Same kind and conversion flags; size is ignored.
    pub(crate) const fn same_encoding(&self, other: &Channel) -> bool {
        self.kind as u8 == other.kind as u8
            && self.normalized == other.normalized
            && self.pure_integer == other.pure_integer
    }
}

/// Source of one output component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    X,
    Y,
    Z,
    W,
    Zero,
    One,
    /// Don't care.
    None,
}

impl Swizzle {
    /// Parses the compact `xyzw01_` notation, one character per output component.
    ///
    /// Panics (at compile time when used in a constant) on any other character.
    pub const fn parse4(s: &str) -> [Swizzle; 4] {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 4, "swizzle must have four components");
        let mut out = [Swizzle::None; 4];
        let mut i = 0;
        while i < 4 {
            out[i] = match bytes[i] {
                b'x' => Swizzle::X,
                b'y' => Swizzle::Y,
                b'z' => Swizzle::Z,
                b'w' => Swizzle::W,
                b'0' => Swizzle::Zero,
                b'1' => Swizzle::One,
                b'_' => Swizzle::None,
                _ => panic!("invalid swizzle character"),
            };
            i += 1;
        }
        out
    }
}

/// Memory layout class of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Simple per-channel bit fields.
    Plain,
    /// Chroma shared between horizontally adjacent pixels (e.g. YUYV).
    Subsampled,
    S3tc,
    Rgtc,
    Etc,
    Bptc,
    Astc,
    /// Shared-exponent and other special packings.
    Other,
}

impl Layout {
    /// Block-compressed layouts.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Layout::S3tc | Layout::Rgtc | Layout::Etc | Layout::Bptc | Layout::Astc
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colorspace {
    Rgb,
    Srgb,
    Yuv,
    /// Depth and/or stencil.
    Zs,
}
