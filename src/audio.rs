use crate::constants::{BGM_SRC, BGM_VOLUME};
use crate::core::playback::{PlaybackSession, SaveTimer, SAVE_INTERVAL_MS};
use crate::storage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background-music controller. One audio element, created lazily on
/// the first play/toggle, never torn down. The playback offset is persisted
/// on a fixed cadence while playing and at every pause boundary, so a reload
/// resumes close to where the track left off.
pub struct Bgm {
    el: RefCell<Option<web::HtmlAudioElement>>,
    session: RefCell<PlaybackSession>,
    save_timer: Cell<Option<i32>>,
}

impl Bgm {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            el: RefCell::new(None),
            session: RefCell::new(PlaybackSession::new()),
            save_timer: Cell::new(None),
        })
    }

    /// Persist the current offset immediately (best-effort).
    pub fn save_now(&self) {
        if let Some(el) = self.el.borrow().as_ref() {
            storage::save_offset_secs(el.current_time());
        }
    }

    /// Final-persist boundary (pagehide / beforeunload / tab hidden): write
    /// the offset and drop the periodic timer.
    pub fn flush(&self) {
        self.save_now();
        self.apply_timer(SaveTimer::Stop);
    }

    /// Attempt playback. A saved offset is applied first if the element is
    /// still at the start. Host autoplay policy may reject the play call;
    /// that is non-fatal and only logged, so a later user gesture retries.
    pub fn play(self: &Rc<Self>) {
        let Some(el) = self.ensure_audio() else {
            return;
        };

        let saved = storage::saved_offset_secs();
        if let Some(seek) = self.session.borrow().seek_before_play(saved, el.current_time()) {
            el.set_current_time(seek);
        }

        match el.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[bgm] play() blocked or failed: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[bgm] play() call failed: {:?}", e),
        }
    }

    /// Pause and persist. The offset is kept so the next play resumes.
    pub fn stop(&self) {
        if let Some(el) = self.el.borrow().as_ref() {
            _ = el.pause();
            storage::save_offset_secs(el.current_time());
        }
    }

    /// Build the audio element on first use and wire its lifecycle events:
    /// a one-shot metadata restore plus play/pause edges that start and stop
    /// the periodic offset save.
    fn ensure_audio(self: &Rc<Self>) -> Option<web::HtmlAudioElement> {
        if let Some(el) = self.el.borrow().as_ref() {
            return Some(el.clone());
        }

        let el = match web::HtmlAudioElement::new_with_src(BGM_SRC) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[bgm] audio element error: {:?}", e);
                return None;
            }
        };
        el.set_loop(true);
        el.set_preload("auto");
        el.set_volume(BGM_VOLUME);

        {
            let bgm = self.clone();
            let el_meta = el.clone();
            let closure = Closure::wrap(Box::new(move || {
                let saved = storage::saved_offset_secs();
                let d = el_meta.duration();
                let duration = (d.is_finite() && d > 0.0).then_some(d);
                if let Some(seek) = bgm.session.borrow_mut().on_metadata(saved, duration) {
                    el_meta.set_current_time(seek);
                }
            }) as Box<dyn FnMut()>);
            let opts = web::AddEventListenerOptions::new();
            opts.set_once(true);
            _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                "loadedmetadata",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
            closure.forget();
        }

        {
            let bgm = self.clone();
            let closure = Closure::wrap(Box::new(move || {
                let action = bgm.session.borrow_mut().on_play();
                bgm.apply_timer(action);
            }) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("play", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let bgm = self.clone();
            let closure = Closure::wrap(Box::new(move || {
                bgm.save_now();
                let action = bgm.session.borrow_mut().on_pause();
                bgm.apply_timer(action);
            }) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("pause", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        *self.el.borrow_mut() = Some(el.clone());
        Some(el)
    }

    fn apply_timer(&self, action: SaveTimer) {
        if let (Some(window), Some(id)) = (web::window(), self.save_timer.take()) {
            window.clear_interval_with_handle(id);
        }
        if action == SaveTimer::Stop {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let el = self.el.borrow().clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(el) = el.as_ref() {
                storage::save_offset_secs(el.current_time());
            }
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SAVE_INTERVAL_MS,
        ) {
            Ok(id) => self.save_timer.set(Some(id)),
            Err(e) => log::warn!("[bgm] save timer error: {:?}", e),
        }
        closure.forget();
    }
}
