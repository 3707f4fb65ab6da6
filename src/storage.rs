use crate::constants::{NIGHT_KEY, SOUND_KEY, TIME_KEY};
use crate::core::playback::{persistable_offset, sanitize_offset, SoundPref};
use web_sys as web;

// Best-effort localStorage adapter. Storage can be disabled or full; every
// read falls back to a default and every write failure is swallowed, so no
// storage error ever reaches a caller.

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok()).flatten()
}

fn read(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok()).flatten()
}

fn write(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        _ = s.set_item(key, value);
    }
}

pub fn sound_pref() -> SoundPref {
    SoundPref::parse(read(SOUND_KEY).as_deref())
}

pub fn set_sound_pref(pref: SoundPref) {
    write(SOUND_KEY, pref.as_str());
}

pub fn saved_offset_secs() -> f64 {
    sanitize_offset(read(TIME_KEY).as_deref())
}

/// Persist the playback offset. Non-finite or negative candidates are
/// skipped and the store keeps its previous value.
pub fn save_offset_secs(t: f64) {
    if let Some(t) = persistable_offset(t) {
        write(TIME_KEY, &t.to_string());
    }
}

pub fn night_mode() -> bool {
    read(NIGHT_KEY).as_deref() == Some("1")
}

pub fn set_night_mode(on: bool) {
    write(NIGHT_KEY, if on { "1" } else { "0" });
}
