// Host-side checks for the page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;

#[test]
fn sound_icons_are_distinct_assets() {
    assert_ne!(ICON_MUTE_SRC, ICON_UNMUTE_SRC);
    for src in [ICON_MUTE_SRC, ICON_UNMUTE_SRC, CART_SRC] {
        assert!(src.starts_with("Assets/"), "unexpected asset path {src}");
        assert!(src.ends_with(".png"));
    }
    assert!(BGM_SRC.ends_with(".mp3"));
}

#[test]
fn walker_asset_set_matches_the_variant_count() {
    assert_eq!(WALKER_SRCS.len(), scene::WALKER_VARIANTS);
    for src in WALKER_SRCS {
        assert!(src.starts_with("Assets/"));
    }
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(SOUND_KEY, TIME_KEY);
    assert_ne!(SOUND_KEY, NIGHT_KEY);
    assert_ne!(TIME_KEY, NIGHT_KEY);
}
