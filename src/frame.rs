use crate::audio::AudioEngine;
use crate::core::{camera, field, hud, MotionState, PointerState, RenderOutput, WorldItem};
use crate::dom;
use crate::overlay;
use crate::scroll::SmoothScroll;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one tick touches, owned in one place so the loop closure stays
/// a single borrow.
pub struct FrameContext {
    pub document: web::Document,
    pub viewport_el: web::HtmlElement,
    pub world_el: web::HtmlElement,

    pub items: Vec<WorldItem>,
    pub slots: Vec<Option<web::HtmlElement>>,
    pub outputs: Vec<RenderOutput>,

    pub provider: SmoothScroll,
    pub motion: MotionState,
    pub pointer: Rc<RefCell<PointerState>>,
    pub audio: Rc<RefCell<AudioEngine>>,

    pub frame_count: u64,
    pub last_instant: Instant,
    pub started_at: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let delta_ms = (now - self.last_instant).as_secs_f32() * 1000.0;
        self.last_instant = now;
        let time_sec = (now - self.started_at).as_secs_f32();

        // Pump the provider, then fold its latest pair into the motion state.
        // The smoothed velocity only ever advances here, inside the tick.
        self.provider.pump();
        self.motion.scroll = self.provider.scroll();
        self.motion.target_velocity = self.provider.velocity();
        let velocity = self.motion.advance();

        let cam = camera::compute(*self.pointer.borrow(), velocity);
        dom::apply_camera(&self.viewport_el, &self.world_el, &cam);

        field::place_all(
            &self.items,
            self.motion.scroll,
            velocity,
            time_sec,
            &mut self.outputs,
        );
        dom::apply_outputs(&self.slots, &self.items, &self.outputs);

        self.audio.borrow().modulate(velocity);

        self.frame_count += 1;
        if hud::due(self.frame_count) {
            let snap = hud::snapshot(delta_ms, velocity, self.motion.scroll);
            overlay::update_hud(&self.document, &snap);
        }
    }
}

/// Handle on a running loop. Keeps the RAF id and the tick closure so the
/// loop can actually be cancelled instead of leaked.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Stop scheduling, cancel the pending tick and drop the closure. No
    /// frame runs after this returns.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
    LoopHandle {
        running,
        raf_id,
        tick,
    }
}
