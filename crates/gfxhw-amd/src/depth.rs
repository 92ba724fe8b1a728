//! Depth/stencil buffer (DB) state.

use gfxhw_format::PipeFormat;

use crate::regs::ZFormat;

/// `DB_Z_INFO.FORMAT` for a depth/stencil attachment of `format`.
///
/// The 24-bit depth group is returned on every generation, including Gfx12 where the
/// hardware dropped `Z_24`; callers targeting Gfx12 must promote those formats themselves.
pub const fn translate_dbformat(format: PipeFormat) -> ZFormat {
    match format {
        PipeFormat::Z16Unorm | PipeFormat::Z16UnormS8Uint => ZFormat::Z16,
        PipeFormat::S8UintZ24Unorm
        | PipeFormat::X8Z24Unorm
        | PipeFormat::Z24X8Unorm
        | PipeFormat::Z24UnormS8Uint => ZFormat::Z24,
        PipeFormat::Z32Float | PipeFormat::Z32FloatS8X24Uint => ZFormat::Z32Float,
        _ => ZFormat::Invalid,
    }
}

pub const fn is_zs_format_supported(format: PipeFormat) -> bool {
    !matches!(translate_dbformat(format), ZFormat::Invalid)
}
