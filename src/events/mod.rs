use crate::audio::Bgm;
use crate::constants::{ICON_MUTE_SRC, ICON_UNMUTE_SRC, NIGHT_TOGGLE_ID, SOUND_BTN_ID};
use crate::core::playback::SoundPref;
use crate::dom;
use crate::storage;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swap the button art between the mute and unmute icons. The button may be
/// a bare `<img>` or any element showing the icon as a background.
fn set_sound_icon(document: &web::Document, on: bool) {
    if let Some(el) = document.get_element_by_id(SOUND_BTN_ID) {
        let src = if on { ICON_UNMUTE_SRC } else { ICON_MUTE_SRC };
        if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(src);
        } else if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("background-image", &format!("url('{src}')"));
        }
    }
}

/// Restore the persisted sound preference and wire the toggle button. The
/// preference flips first, then playback follows; a blocked autoplay leaves
/// the preference "on" so the next click retries.
pub fn wire_sound_button(document: &web::Document, bgm: &Rc<Bgm>) {
    let pref = storage::sound_pref();
    set_sound_icon(document, pref == SoundPref::On);
    if pref == SoundPref::On {
        bgm.play();
    }

    let bgm = bgm.clone();
    let doc = document.clone();
    dom::add_click_listener(document, SOUND_BTN_ID, move || {
        let next = storage::sound_pref().toggled();
        storage::set_sound_pref(next);
        match next {
            SoundPref::On => bgm.play(),
            SoundPref::Off => bgm.stop(),
        }
        set_sound_icon(&doc, next == SoundPref::On);
    });
}

fn set_night(document: &web::Document, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        if on {
            _ = cl.add_1("night");
        } else {
            _ = cl.remove_1("night");
        }
    }
    if let Some(el) = document.get_element_by_id(NIGHT_TOGGLE_ID) {
        el.set_text_content(Some(if on { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }));
    }
    storage::set_night_mode(on);
}

/// Day/night toggle. Purely cosmetic, but it shares the storage adapter so
/// the choice survives reloads.
pub fn wire_night_toggle(document: &web::Document) {
    set_night(document, storage::night_mode());
    let doc = document.clone();
    dom::add_click_listener(document, NIGHT_TOGGLE_ID, move || {
        let on = !storage::night_mode();
        set_night(&doc, on);
    });
}

/// Final offset persistence at page teardown boundaries. `pagehide` and
/// `beforeunload` both flush because neither fires reliably everywhere;
/// a hidden tab also writes once in case the page never comes back.
pub fn wire_lifecycle_persistence(document: &web::Document, bgm: &Rc<Bgm>) {
    let b = bgm.clone();
    dom::add_window_listener("pagehide", move || b.flush());
    let b = bgm.clone();
    dom::add_window_listener("beforeunload", move || b.flush());

    let b = bgm.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.visibility_state() == web::VisibilityState::Hidden {
            b.save_now();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
