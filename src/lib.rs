#![cfg(target_arch = "wasm32")]
//! WASM entry point: builds the world, wires input and the start gate, and
//! owns the running app handle so `shutdown` can tear everything down.

use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod scroll;

/// A started session: the loop plus the two detachable subscriptions.
struct App {
    loop_handle: frame::LoopHandle,
    pointer: events::PointerHandle,
    ctx: Rc<RefCell<frame::FrameContext>>,
}

impl App {
    /// Ordered teardown: stop ticking, then detach the pointer listener,
    /// then release the scroll provider. Shared state is never touched
    /// again after this returns.
    fn shutdown(mut self) {
        self.loop_handle.stop();
        if let Some(w) = web::window() {
            self.pointer.detach(&w);
            self.ctx.borrow_mut().provider.destroy(&w);
        }
        log::info!("[teardown] loop stopped, listeners detached");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("warpfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the running loop, if any. Safe to call repeatedly.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            app.shutdown();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport_el: web::HtmlElement = document
        .get_element_by_id("viewport")
        .ok_or_else(|| anyhow::anyhow!("missing #viewport"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let world_el: web::HtmlElement = document
        .get_element_by_id("world")
        .ok_or_else(|| anyhow::anyhow!("missing #world"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Fixed population for the session; card metadata and particle spread
    // come from an entropy-seeded generator (tests inject fixed seeds).
    let (vw, vh) = dom::viewport_size(&window);
    let items = crate::core::generate_field(Vec2::new(vw, vh), &mut StdRng::from_entropy());
    let slots = dom::spawn_items(&document, &world_el, &items);
    log::info!(
        "[world] {} items spawned ({} slots live)",
        items.len(),
        slots.iter().filter(|s| s.is_some()).count()
    );

    let audio = Rc::new(RefCell::new(audio::AudioEngine::new()));
    events::wire_hover_chirps(&items, &slots, &audio);
    events::wire_mute_toggle(&document, &audio);

    let pointer = Rc::new(RefCell::new(crate::core::PointerState::default()));
    let pointer_handle = events::wire_pointermove(&window, pointer.clone());
    let provider = scroll::SmoothScroll::attach(&window);

    let outputs = Vec::with_capacity(items.len());
    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        viewport_el,
        world_el,
        items,
        slots,
        outputs,
        provider,
        motion: crate::core::MotionState::default(),
        pointer,
        audio: audio.clone(),
        frame_count: 0,
        last_instant: Instant::now(),
        started_at: Instant::now(),
    }));

    // Hold at the gate until the user opts in; audio cannot start without a
    // gesture anyway.
    overlay::show(&document);

    // Start gate: the first click unlocks audio (user-gesture requirement)
    // and moves the scheduler from idle to running, exactly once.
    static STARTED: AtomicBool = AtomicBool::new(false);
    {
        let audio_start = audio.clone();
        let ctx_start = ctx.clone();
        let mut pointer_slot = Some(pointer_handle);
        dom::add_click_listener(&document, "start-button", move || {
            if STARTED.swap(true, Ordering::SeqCst) {
                log::warn!("[gesture] start already triggered; ignoring extra click");
                return;
            }
            audio_start.borrow_mut().initialize();
            if let Some(doc) = dom::window_document() {
                overlay::hide(&doc);
            }
            let now = Instant::now();
            {
                let mut c = ctx_start.borrow_mut();
                c.last_instant = now;
                c.started_at = now;
            }
            // The STARTED guard means the handle is still here on the first
            // (and only) pass.
            let Some(pointer) = pointer_slot.take() else {
                return;
            };
            log::info!("[gesture] starting frame loop");
            let loop_handle = frame::start_loop(ctx_start.clone());
            let app = App {
                loop_handle,
                pointer,
                ctx: ctx_start.clone(),
            };
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        });
    }

    Ok(())
}
