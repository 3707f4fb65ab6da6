#![cfg(target_arch = "wasm32")]
use crate::constants::{STAGE_ID, WALKERS_LAYER_ID, WALKER_SRCS};
use crate::core::cart::CartScheduler;
use crate::core::scene::{Scene, WALKER_BASE_H, WALKER_BASE_W};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("booth-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HtmlElement: {:?}", e))
}

/// One absolutely-positioned div per pooled walker, styled from its lane and
/// sprite variant. The elements live for the life of the page, like the pool
/// slots they mirror.
fn build_walker_sprites(
    document: &web::Document,
    layer: &web::HtmlElement,
    scene: &Scene,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut els = Vec::with_capacity(scene.walkers.len());
    for w in &scene.walkers {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create walker div: {:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("walker div cast: {:?}", e))?;
        el.set_class_name("walker");

        let scale = w.lane.scale();
        let style = el.style();
        _ = style.set_property("width", &format!("{}px", WALKER_BASE_W * scale));
        _ = style.set_property("height", &format!("{}px", WALKER_BASE_H * scale));
        _ = style.set_property("bottom", &format!("{}px", w.lane.bottom_px()));
        _ = style.set_property("z-index", &w.lane.z_index().to_string());
        _ = style.set_property(
            "background-image",
            &format!("url('{}')", WALKER_SRCS[w.variant % WALKER_SRCS.len()]),
        );

        layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("attach walker: {:?}", e))?;
        els.push(el);
    }
    Ok(els)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::wire(&document);

    let stage = require_element(&document, STAGE_ID)?;
    let layer = require_element(&document, WALKERS_LAYER_ID)?;

    let seed = js_sys::Date::now() as u64;
    let viewport_w = dom::viewport_width();
    let scene = Scene::new(seed, viewport_w);
    let walker_els = build_walker_sprites(&document, &layer, &scene)?;

    // The frame clock starts at zero, so the first cart becomes due one
    // minimum interval plus a random extra after load.
    let cart = CartScheduler::new(0.0, seed.rotate_left(17) ^ 0x9E37_79B9_7F4A_7C15);

    let bgm = audio::Bgm::new();
    events::wire_sound_button(&document, &bgm);
    events::wire_night_toggle(&document);
    events::wire_lifecycle_persistence(&document, &bgm);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, walker_els, cart, stage,
    )));
    let ctx_resize = frame_ctx.clone();
    dom::add_window_listener("resize", move || {
        ctx_resize.borrow_mut().reseat_primary_walkers();
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
