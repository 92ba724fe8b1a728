// Kept as the only test in this binary: it mutates the process environment.

use gfxhw_amd::{GfxLevel, TranslateConfig, BIG_ENDIAN_ENV, GFX_LEVEL_ENV};

#[test]
fn from_env_reads_process_environment() {
    std::env::set_var(GFX_LEVEL_ENV, "GFX10_3");
    std::env::set_var(BIG_ENDIAN_ENV, "on");
    let config = TranslateConfig::from_env().unwrap();
    assert_eq!(
        config,
        TranslateConfig {
            gfx_level: GfxLevel::Gfx10_3,
            big_endian: true,
        }
    );

    std::env::set_var(GFX_LEVEL_ENV, "gfx5");
    let err = TranslateConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(GFX_LEVEL_ENV), "{err}");

    std::env::remove_var(GFX_LEVEL_ENV);
    std::env::remove_var(BIG_ENDIAN_ENV);
    assert_eq!(TranslateConfig::from_env().unwrap(), TranslateConfig::default());
}
