use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// GPU hardware generation. Later generations compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GfxLevel {
    Gfx6,
    Gfx7,
    Gfx8,
    Gfx9,
    Gfx10,
    Gfx10_3,
    Gfx11,
    Gfx11_5,
    Gfx12,
}

impl GfxLevel {
    pub const ALL: [GfxLevel; 9] = [
        GfxLevel::Gfx6,
        GfxLevel::Gfx7,
        GfxLevel::Gfx8,
        GfxLevel::Gfx9,
        GfxLevel::Gfx10,
        GfxLevel::Gfx10_3,
        GfxLevel::Gfx11,
        GfxLevel::Gfx11_5,
        GfxLevel::Gfx12,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GfxLevel::Gfx6 => "gfx6",
            GfxLevel::Gfx7 => "gfx7",
            GfxLevel::Gfx8 => "gfx8",
            GfxLevel::Gfx9 => "gfx9",
            GfxLevel::Gfx10 => "gfx10",
            GfxLevel::Gfx10_3 => "gfx10.3",
            GfxLevel::Gfx11 => "gfx11",
            GfxLevel::Gfx11_5 => "gfx11.5",
            GfxLevel::Gfx12 => "gfx12",
        }
    }
}

impl fmt::Display for GfxLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown gfx level {0:?} (expected e.g. gfx9, gfx10.3, gfx11_5)")]
pub struct ParseGfxLevelError(pub String);

impl FromStr for GfxLevel {
    type Err = ParseGfxLevelError;

    /// Accepts `gfx10.3`, `gfx10_3`, `GFX10_3` and the bare `10.3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let version = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("gfx") => &trimmed[3..],
            _ => trimmed,
        };
        let level = match version.replace('_', ".").as_str() {
            "6" => GfxLevel::Gfx6,
            "7" => GfxLevel::Gfx7,
            "8" => GfxLevel::Gfx8,
            "9" => GfxLevel::Gfx9,
            "10" => GfxLevel::Gfx10,
            "10.3" => GfxLevel::Gfx10_3,
            "11" => GfxLevel::Gfx11,
            "11.5" => GfxLevel::Gfx11_5,
            "12" => GfxLevel::Gfx12,
            _ => return Err(ParseGfxLevelError(s.to_string())),
        };
        Ok(level)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GfxLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
