//! Binary records shared between the AGX driver and its GPU-side tessellation kernels.

mod tess;

pub use tess::{FieldLayout, TessArgs, TessArgsError, TessMode, TessPartitioning, TessPoint};
