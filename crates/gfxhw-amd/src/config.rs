use std::env::VarError;

use thiserror::Error;
use tracing::debug;

use crate::gfx_level::{GfxLevel, ParseGfxLevelError};

/// Selects the hardware generation (e.g. `gfx10.3`).
pub const GFX_LEVEL_ENV: &str = "GFXHW_GFX_LEVEL";
/// Truthy (`1`/`true`/`yes`/`on`) when the host stores multi-byte values big-endian.
pub const BIG_ENDIAN_ENV: &str = "GFXHW_BIG_ENDIAN";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}")]
    InvalidGfxLevel {
        var: &'static str,
        #[source]
        source: ParseGfxLevelError,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: String },
}

/// Inputs shared by every classifier call of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TranslateConfig {
    pub gfx_level: GfxLevel,
    pub big_endian: bool,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self::new(GfxLevel::Gfx6)
    }
}

impl TranslateConfig {
    /// Config for `gfx_level` on the current host byte order.
    pub const fn new(gfx_level: GfxLevel) -> Self {
        Self {
            gfx_level,
            big_endian: cfg!(target_endian = "big"),
        }
    }

    /// Reads [`GFX_LEVEL_ENV`] and [`BIG_ENDIAN_ENV`] over [`TranslateConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                var: name.to_string(),
            }),
        })
    }

    /// Same as [`TranslateConfig::from_env`] with a caller-provided variable source.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(GFX_LEVEL_ENV)? {
            config.gfx_level = raw
                .parse()
                .map_err(|source| ConfigError::InvalidGfxLevel {
                    var: GFX_LEVEL_ENV,
                    source,
                })?;
        }
        if let Some(raw) = lookup(BIG_ENDIAN_ENV)? {
            config.big_endian = is_truthy(&raw);
        }

        debug!(gfx_level = %config.gfx_level, big_endian = config.big_endian, "translate config");
        Ok(config)
    }
}

fn is_truthy(raw: &str) -> bool {
    let v = raw.trim();
    v == "1"
        || v.eq_ignore_ascii_case("true")
        || v.eq_ignore_ascii_case("yes")
        || v.eq_ignore_ascii_case("on")
}
