use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

macro_rules! field_layout {
    ($ty:ty { $($field:ident: $field_ty:ty),+ $(,)? }) => {
        &[$(FieldLayout {
            name: stringify!($field),
            offset: offset_of!($ty, $field),
            size: size_of::<$field_ty>(),
        },)+]
    };
}

/// Placement of one field inside a binary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

/// Spacing of generated vertices along a tessellated edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TessPartitioning {
    FractionalOdd = 0,
    FractionalEven = 1,
    Integer = 2,
}

impl TessPartitioning {
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::FractionalOdd),
            1 => Some(Self::FractionalEven),
            2 => Some(Self::Integer),
            _ => None,
        }
    }
}

/// Which pass of the tessellator kernel runs.
///
/// Passed to the kernel at launch alongside the record; [`TessArgs`] has no field for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TessMode {
    /// Only write per-patch index counts.
    Count = 0,
    /// Tessellate into index ranges allocated from the prefix-summed counts.
    WithCounts = 1,
}

impl TessMode {
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Count),
            1 => Some(Self::WithCounts),
            _ => None,
        }
    }
}

/// One tessellation coordinate as written to the patch coordinate buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TessPoint {
    pub u: u32,
    pub v: u32,
}

impl TessPoint {
    pub const SIZE_BYTES: usize = size_of::<Self>();
    pub const FIELDS: &'static [FieldLayout] = field_layout!(TessPoint { u: u32, v: u32 });
}

const _: () = assert!(size_of::<TessPoint>() == 8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TessArgsError {
    #[error("tessellator arguments are {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("unknown tessellator partitioning {0}")]
    Partitioning(u32),
    #[error("{field} must be 0 or 1, got {value}")]
    Flag { field: &'static str, value: u32 },
}

/// Arguments shared by the tessellation setup and tessellator kernels.
///
/// Byte-packed; the layout is consumed by GPU code and must not change. All `u64` fields up to
/// `vertex_output_buffer_ptr` are GPU virtual addresses, zero when unused. Fields of a packed
/// struct must be copied out before borrowing (`{ args.heap }`).
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TessArgs {
    /// Heap the tessellator allocates its outputs from.
    pub heap: u64,
    /// [`TessPoint`]s, indexed by `coord_allocs[patch] + vertex_in_patch`.
    pub patch_coord_buffer: u64,
    /// Per-patch base index into `patch_coord_buffer`, written by the tessellator.
    pub coord_allocs: u64,
    pub out_draws: u64,
    /// TCS output buffer.
    pub tcs_buffer: u64,
    /// Per-patch index counts, prefix-summed in place.
    pub counts: u64,
    pub index_buffer: u64,
    /// TES invocation counter for pipeline statistics.
    pub statistic: u64,
    /// TCS invocation counter for pipeline statistics.
    pub tcs_statistic: u64,
    /// Indirect dispatch grids: VS, then TCS, then tessellator.
    pub grids: u64,
    /// Input-assembly descriptor written for indirect draws.
    pub ia: u64,
    pub indirect: u64,
    pub vertex_output_buffer_ptr: u64,

    pub in_index_buffer: u64,
    pub in_index_buffer_range_el: u32,
    pub in_index_size_b: u32,

    /// TES outputs when a geometry shader follows tessellation.
    pub tes_buffer: u64,
    /// Bitfield of VS outputs for indirect draws.
    pub vertex_outputs: u64,
    /// Bitfield of TCS per-vertex outputs.
    pub tcs_per_vertex_outputs: u64,

    /// Levels used by OpenGL when the pipeline has no TCS.
    pub tess_level_outer_default: [f32; 4],
    pub tess_level_inner_default: [f32; 2],

    pub input_patch_size: u32,
    pub output_patch_size: u32,
    pub tcs_patch_constants: u32,
    pub patches_per_instance: u32,
    /// Stride between tessellation factors in the TCS output buffer, in elements.
    pub tcs_stride_el: u32,
    pub nr_patches: u32,

    /// Raw [`TessPartitioning`].
    pub partitioning: u32,
    pub points_mode: u32,
    /// Emit counter-clockwise triangles.
    pub ccw: u32,
}

const _: () = assert!(size_of::<TessArgs>() == 51 * 4);

impl TessArgs {
    pub const SIZE_BYTES: usize = size_of::<Self>();
    pub const SIZE_DWORDS: usize = Self::SIZE_BYTES / 4;

    /// Every field in declaration order.
    pub const FIELDS: &'static [FieldLayout] = field_layout!(TessArgs {
        heap: u64,
        patch_coord_buffer: u64,
        coord_allocs: u64,
        out_draws: u64,
        tcs_buffer: u64,
        counts: u64,
        index_buffer: u64,
        statistic: u64,
        tcs_statistic: u64,
        grids: u64,
        ia: u64,
        indirect: u64,
        vertex_output_buffer_ptr: u64,
        in_index_buffer: u64,
        in_index_buffer_range_el: u32,
        in_index_size_b: u32,
        tes_buffer: u64,
        vertex_outputs: u64,
        tcs_per_vertex_outputs: u64,
        tess_level_outer_default: [f32; 4],
        tess_level_inner_default: [f32; 2],
        input_patch_size: u32,
        output_patch_size: u32,
        tcs_patch_constants: u32,
        patches_per_instance: u32,
        tcs_stride_el: u32,
        nr_patches: u32,
        partitioning: u32,
        points_mode: u32,
        ccw: u32,
    });

    /// Zeroed arguments with the OpenGL default tessellation levels.
    pub fn gl_defaults() -> Self {
        Self {
            tess_level_outer_default: [1.0; 4],
            tess_level_inner_default: [1.0; 2],
            ..Self::zeroed()
        }
    }

    /// View this struct as raw bytes, each field in host byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a host-byte-order record from `bytes`, which need not be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TessArgsError> {
        if bytes.len() != Self::SIZE_BYTES {
            return Err(TessArgsError::Length {
                expected: Self::SIZE_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    pub fn partitioning(&self) -> Result<TessPartitioning, TessArgsError> {
        let raw = self.partitioning;
        TessPartitioning::from_u32(raw).ok_or(TessArgsError::Partitioning(raw))
    }

    pub fn set_partitioning(&mut self, partitioning: TessPartitioning) {
        self.partitioning = partitioning as u32;
    }

    #[inline]
    pub fn points_mode(&self) -> bool {
        self.points_mode != 0
    }

    pub fn set_points_mode(&mut self, enabled: bool) {
        self.points_mode = u32::from(enabled);
    }

    #[inline]
    pub fn ccw(&self) -> bool {
        self.ccw != 0
    }

    pub fn set_ccw(&mut self, ccw: bool) {
        self.ccw = u32::from(ccw);
    }

    /// Checks the fields the kernels interpret as enums or booleans.
    pub fn validate(&self) -> Result<(), TessArgsError> {
        self.partitioning()?;
        for (field, value) in [("points_mode", self.points_mode), ("ccw", self.ccw)] {
            if value > 1 {
                return Err(TessArgsError::Flag { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tess_args_layout() {
        assert_eq!(size_of::<TessArgs>(), 204);
        assert_eq!(TessArgs::SIZE_DWORDS, 51);
        assert_eq!(core::mem::align_of::<TessArgs>(), 1);

        assert_eq!(offset_of!(TessArgs, heap), 0);
        assert_eq!(offset_of!(TessArgs, patch_coord_buffer), 8);
        assert_eq!(offset_of!(TessArgs, coord_allocs), 16);
        assert_eq!(offset_of!(TessArgs, out_draws), 24);
        assert_eq!(offset_of!(TessArgs, tcs_buffer), 32);
        assert_eq!(offset_of!(TessArgs, counts), 40);
        assert_eq!(offset_of!(TessArgs, index_buffer), 48);
        assert_eq!(offset_of!(TessArgs, statistic), 56);
        assert_eq!(offset_of!(TessArgs, tcs_statistic), 64);
        assert_eq!(offset_of!(TessArgs, grids), 72);
        assert_eq!(offset_of!(TessArgs, ia), 80);
        assert_eq!(offset_of!(TessArgs, indirect), 88);
        assert_eq!(offset_of!(TessArgs, vertex_output_buffer_ptr), 96);
        assert_eq!(offset_of!(TessArgs, in_index_buffer), 104);
        assert_eq!(offset_of!(TessArgs, in_index_buffer_range_el), 112);
        assert_eq!(offset_of!(TessArgs, in_index_size_b), 116);
        assert_eq!(offset_of!(TessArgs, tes_buffer), 120);
        assert_eq!(offset_of!(TessArgs, vertex_outputs), 128);
        assert_eq!(offset_of!(TessArgs, tcs_per_vertex_outputs), 136);
        assert_eq!(offset_of!(TessArgs, tess_level_outer_default), 144);
        assert_eq!(offset_of!(TessArgs, tess_level_inner_default), 160);
        assert_eq!(offset_of!(TessArgs, input_patch_size), 168);
        assert_eq!(offset_of!(TessArgs, output_patch_size), 172);
        assert_eq!(offset_of!(TessArgs, tcs_patch_constants), 176);
        assert_eq!(offset_of!(TessArgs, patches_per_instance), 180);
        assert_eq!(offset_of!(TessArgs, tcs_stride_el), 184);
        assert_eq!(offset_of!(TessArgs, nr_patches), 188);
        assert_eq!(offset_of!(TessArgs, partitioning), 192);
        assert_eq!(offset_of!(TessArgs, points_mode), 196);
        assert_eq!(offset_of!(TessArgs, ccw), 200);
    }

    #[test]
    fn tess_point_layout() {
        assert_eq!(size_of::<TessPoint>(), 8);
        assert_eq!(offset_of!(TessPoint, u), 0);
        assert_eq!(offset_of!(TessPoint, v), 4);
    }

    #[test]
    fn field_table_tiles_the_record() {
        let mut end = 0;
        for field in TessArgs::FIELDS {
            assert_eq!(field.offset, end, "{} is not contiguous", field.name);
            end = field.offset + field.size;
        }
        assert_eq!(end, TessArgs::SIZE_BYTES);
        assert_eq!(TessArgs::FIELDS.len(), 30);
    }

    #[test]
    fn enum_values() {
        assert_eq!(TessPartitioning::Integer as u32, 2);
        assert_eq!(TessPartitioning::from_u32(1), Some(TessPartitioning::FractionalEven));
        assert_eq!(TessPartitioning::from_u32(3), None);
        assert_eq!(TessMode::from_u32(1), Some(TessMode::WithCounts));
        assert_eq!(TessMode::from_u32(2), None);
    }
}
