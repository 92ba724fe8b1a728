#![cfg(not(target_arch = "wasm32"))]

use std::fs;

use assert_cmd::Command;
use gfxhw_amd::{FormatEncodings, GfxLevel, TranslateConfig};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn dump() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gfxhw-dump");
    cmd.env_remove("GFXHW_GFX_LEVEL")
        .env_remove("GFXHW_BIG_ENDIAN")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn formats_reports_requested_formats() {
    let json = stdout_json(dump().args([
        "formats",
        "--gfx-level",
        "gfx9",
        "--format",
        "R8G8B8A8_UNORM",
        "--format",
        "pipe_format_b5g6r5_unorm",
    ]));
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let rgba = &entries[0];
    assert_eq!(rgba["format"], "R8G8B8A8_UNORM");
    assert_eq!(rgba["gfx_level"], "gfx9");
    assert_eq!(rgba["buffer"]["num_format"], "BUF_NUM_FORMAT_UNORM");
    assert_eq!(rgba["buffer"]["data_format"], "BUF_DATA_FORMAT_8_8_8_8");
    assert_eq!(rgba["tex_num_format"], "IMG_NUM_FORMAT_UNORM");
    assert_eq!(rgba["color"]["format"], "COLOR_8_8_8_8");
    assert_eq!(rgba["color"]["swap"], "SWAP_STD");
    assert_eq!(rgba["color"]["endian"], "ENDIAN_NONE");
    assert_eq!(rgba["color"]["supported"], true);
    assert_eq!(rgba["z_format"], "Z_INVALID");
    assert_eq!(rgba["border_color_swizzle"], "BC_SWIZZLE_XYZW");

    let rgb565 = &entries[1];
    assert_eq!(rgb565["format"], "B5G6R5_UNORM");
    assert_eq!(rgb565["buffer"]["data_format"], "BUF_DATA_FORMAT_INVALID");
    assert_eq!(rgb565["color"]["format"], "COLOR_5_6_5");
    assert_eq!(rgb565["color"]["swap"], "SWAP_STD_REV");
}

#[test]
fn formats_big_endian_flag() {
    let json = stdout_json(dump().args([
        "formats",
        "--big-endian",
        "--format",
        "R8G8B8A8_UNORM",
        "--format",
        "DXT1_RGB",
    ]));
    let entries = json.as_array().unwrap();
    assert_eq!(entries[0]["color"]["endian"], "ENDIAN_8IN32");
    assert_eq!(entries[1]["buffer"], Value::Null);
    assert_eq!(entries[1]["color"]["swap"], Value::Null);
    assert_eq!(entries[1]["color"]["supported"], false);
}

#[test]
fn supported_only_matches_library() {
    let json = stdout_json(dump().args(["formats", "--gfx-level", "gfx10.3", "--supported-only"]));
    let entries = json.as_array().unwrap();
    assert!(entries.iter().all(|e| e["color"]["supported"] == true));

    let config = TranslateConfig {
        gfx_level: GfxLevel::Gfx10_3,
        big_endian: false,
    };
    let expected = FormatEncodings::all(&config)
        .filter(|r| r.color.supported)
        .count();
    assert_eq!(entries.len(), expected);
}

#[test]
fn gfx_level_comes_from_environment() {
    let json = stdout_json(
        dump()
            .env("GFXHW_GFX_LEVEL", "gfx10_3")
            .args(["formats", "--format", "R9G9B9E5_FLOAT"]),
    );
    assert_eq!(json[0]["gfx_level"], "gfx10.3");
    assert_eq!(json[0]["color"]["format"], "COLOR_5_9_9_9");

    // The flag wins over the environment.
    let json = stdout_json(
        dump()
            .env("GFXHW_GFX_LEVEL", "gfx10_3")
            .args(["formats", "--gfx-level", "gfx10", "--format", "R9G9B9E5_FLOAT"]),
    );
    assert_eq!(json[0]["color"]["format"], "COLOR_INVALID");
}

#[test]
fn bad_inputs_fail() {
    dump()
        .args(["formats", "--format", "R8G8B8A8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pipe format"));

    dump()
        .args(["formats", "--gfx-level", "gfx13"])
        .assert()
        .failure();

    dump()
        .env("GFXHW_GFX_LEVEL", "navi")
        .args(["formats"])
        .assert()
        .failure();
}

#[test]
fn tess_layout_writes_output_file() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("tess.json");

    dump()
        .args(["tess-layout", "--output", out_path.to_str().unwrap()])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&fs::read(&out_path).unwrap()).unwrap();
    let args = &json[0];
    assert_eq!(args["name"], "tess_args");
    assert_eq!(args["size_bytes"], 204);
    let fields = args["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 30);
    assert_eq!(fields[13]["name"], "in_index_buffer");
    assert_eq!(fields[13]["offset"], 104);
    assert_eq!(fields[29]["name"], "ccw");
    assert_eq!(fields[29]["offset"], 200);

    let point = &json[1];
    assert_eq!(point["name"], "tess_point");
    assert_eq!(point["size_bytes"], 8);
}
