/// Page wiring constants: storage keys, asset paths and the element ids the
/// host page is expected to provide.
// localStorage keys (origin-scoped, best-effort)
pub const SOUND_KEY: &str = "mb_sound";
pub const TIME_KEY: &str = "mb_bgm_time";
pub const NIGHT_KEY: &str = "mb_night";

// Assets
pub const BGM_SRC: &str = "Assets/page1/bgm.mp3";
pub const CART_SRC: &str = "Assets/page1/gerobak.png";
pub const ICON_MUTE_SRC: &str = "Assets/page1/mute.png";
pub const ICON_UNMUTE_SRC: &str = "Assets/page1/unmute.png";
pub const WALKER_SRCS: [&str; 5] = [
    "Assets/page1/walker/walker1.png",
    "Assets/page1/walker/walker2.png",
    "Assets/page1/walker/walker3.png",
    "Assets/page1/walker/walker4.png",
    "Assets/page1/walker/walker5.png",
];

pub const BGM_VOLUME: f64 = 0.2;

// Required DOM collaborators
pub const STAGE_ID: &str = "stage";
pub const WALKERS_LAYER_ID: &str = "walkers-layer";
pub const SOUND_BTN_ID: &str = "btn-sound";
pub const NIGHT_TOGGLE_ID: &str = "night-toggle";
pub const ROTATE_OVERLAY_ID: &str = "rotate-overlay";
