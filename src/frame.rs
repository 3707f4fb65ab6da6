use crate::constants::CART_SRC;
use crate::core::cart::{CartScheduler, Traversal};
use crate::core::scene::{Scene, Side};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame driver. Owns the walker scene, the cart scheduler and their DOM
/// sprites; one `requestAnimationFrame` callback advances everything, so all
/// mutation stays on the single browser thread. Walker updates always run
/// before the cart-due check within a frame.
pub struct FrameContext {
    pub scene: Scene,
    pub walker_els: Vec<web::HtmlElement>,

    pub cart: CartScheduler,
    pub cart_active: Option<Traversal>,
    pub cart_el: Option<web::HtmlElement>,
    pub stage: web::HtmlElement,

    pub last_instant: Instant,
    // Monotonic ms clock accumulated from frame deltas; feeds the cart
    // scheduler so it never touches a wall clock directly.
    pub clock_ms: f64,
}

impl FrameContext {
    pub fn new(
        scene: Scene,
        walker_els: Vec<web::HtmlElement>,
        cart: CartScheduler,
        stage: web::HtmlElement,
    ) -> Self {
        Self {
            scene,
            walker_els,
            cart,
            cart_active: None,
            cart_el: None,
            stage,
            last_instant: Instant::now(),
            clock_ms: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f64();
        self.clock_ms += dt_sec * 1000.0;

        // Band geometry depends on a responsive layout formula, so the live
        // viewport width is re-read every frame.
        let viewport_w = dom::viewport_width();

        self.scene.tick(dt_sec, viewport_w);
        for (w, el) in self.scene.walkers.iter().zip(&self.walker_els) {
            dom::set_sprite_transform(el, w.x, w.dir);
        }

        self.step_cart(viewport_w);
    }

    /// Resize recovery: pull the two primary walkers back inside the band so
    /// a layout change never leaves the scene suddenly empty.
    pub fn reseat_primary_walkers(&mut self) {
        let viewport_w = dom::viewport_width();
        self.scene.force_spawn_inside(0, Side::Left, viewport_w);
        self.scene.force_spawn_inside(1, Side::Right, viewport_w);
    }

    fn step_cart(&mut self, viewport_w: f64) {
        let now_ms = self.clock_ms;
        if let Some(tr) = self.cart_active {
            if let Some(el) = &self.cart_el {
                dom::set_sprite_transform(el, tr.position(now_ms), tr.flip_x());
            }
            if tr.finished(now_ms) {
                if let Some(el) = &self.cart_el {
                    _ = el.style().set_property("display", "none");
                }
                self.cart_active = None;
                self.cart.finish(now_ms);
            }
            return;
        }

        if let Some(tr) = self.cart.try_start(now_ms, viewport_w) {
            if let Some(el) = self.ensure_cart_el() {
                _ = el.style().set_property("display", "block");
                dom::set_sprite_transform(&el, tr.position(now_ms), tr.flip_x());
                self.cart_active = Some(tr);
            } else {
                // No element to animate; give the slot back.
                self.cart.finish(now_ms);
            }
        }
    }

    /// The cart element is created lazily on the first crossing and then
    /// reused (hidden/shown) for every later one.
    fn ensure_cart_el(&mut self) -> Option<web::HtmlElement> {
        if let Some(el) = &self.cart_el {
            return Some(el.clone());
        }
        let document = dom::window_document()?;
        let el: web::HtmlElement = document
            .create_element("img")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        if let Ok(img) = el.clone().dyn_into::<web::HtmlImageElement>() {
            img.set_src(CART_SRC);
            img.set_alt("gerobak");
        }
        el.set_class_name("gerobak");
        _ = el.style().set_property("display", "none");
        _ = self.stage.append_child(&el);
        self.cart_el = Some(el.clone());
        Some(el)
    }
}

/// Register the self-rescheduling `requestAnimationFrame` callback.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
