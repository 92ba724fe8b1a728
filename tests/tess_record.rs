use gfxhw_agx::{TessArgs, TessArgsError, TessPartitioning, TessPoint};
use pretty_assertions::assert_eq;

fn field_range(name: &str) -> std::ops::Range<usize> {
    let field = TessArgs::FIELDS
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field {name}"));
    field.offset..field.offset + field.size
}

#[test]
fn field_table_locates_raw_bytes() {
    let mut bytes = [0u8; TessArgs::SIZE_BYTES];
    bytes[field_range("ccw")].copy_from_slice(&7u32.to_ne_bytes());
    bytes[field_range("tcs_buffer")].copy_from_slice(&0xdead_beef_0000u64.to_ne_bytes());
    bytes[field_range("partitioning")].copy_from_slice(&2u32.to_ne_bytes());

    let args = TessArgs::from_bytes(&bytes).unwrap();
    assert_eq!({ args.tcs_buffer }, 0xdead_beef_0000);
    assert_eq!(args.partitioning(), Ok(TessPartitioning::Integer));
    assert_eq!(
        args.validate(),
        Err(TessArgsError::Flag {
            field: "ccw",
            value: 7
        })
    );
}

#[test]
fn points_pack_into_coordinate_buffers() {
    let points = [TessPoint { u: 0, v: 0 }, TessPoint { u: 0x8000, v: 0x1_0000 }];
    let bytes: &[u8] = bytemuck::cast_slice(&points[..]);
    assert_eq!(bytes.len(), 2 * TessPoint::SIZE_BYTES);
    assert_eq!(&bytes[8..12], &0x8000u32.to_ne_bytes());
    assert_eq!(&bytes[12..16], &0x1_0000u32.to_ne_bytes());
}
