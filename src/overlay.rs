use crate::constants::ROTATE_OVERLAY_ID;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

// Landscape-only gate. The overlay markup and CSS live in the host page;
// this module only decides when it blocks.

#[inline]
pub fn is_portrait() -> bool {
    dom::viewport_height() > dom::viewport_width()
}

fn set_blocked(document: &web::Document, block: bool) {
    if let Some(el) = document.get_element_by_id(ROTATE_OVERLAY_ID) {
        if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
            _ = el
                .style()
                .set_property("display", if block { "flex" } else { "none" });
        }
    }
    // Freeze scroll and gestures while blocked.
    if let Some(body) = document.body() {
        let style = body.style();
        _ = style.set_property("overflow", if block { "hidden" } else { "" });
        _ = style.set_property("touch-action", if block { "none" } else { "" });
    }
    if let Some(root) = document.document_element() {
        if let Some(root) = root.dyn_ref::<web::HtmlElement>() {
            _ = root
                .style()
                .set_property("overflow", if block { "hidden" } else { "" });
        }
    }
}

/// Apply the gate for the current orientation.
pub fn sync(document: &web::Document) {
    set_blocked(document, is_portrait());
}

/// Keep the gate synced across resizes and orientation flips.
pub fn wire(document: &web::Document) {
    sync(document);
    let doc = document.clone();
    dom::add_window_listener("resize", move || sync(&doc));
    let doc = document.clone();
    dom::add_window_listener("orientationchange", move || sync(&doc));
}
