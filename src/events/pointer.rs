use crate::core::PointerState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live pointer-move subscription. Unlike one-shot wiring, the closure is
/// retained so teardown can remove the listener again.
pub struct PointerHandle {
    closure: Option<Closure<dyn FnMut(web::PointerEvent)>>,
}

impl PointerHandle {
    pub fn detach(&mut self, window: &web::Window) {
        if let Some(c) = self.closure.take() {
            _ = window
                .remove_event_listener_with_callback("pointermove", c.as_ref().unchecked_ref());
        }
    }
}

/// Subscribe to global pointer movement, normalizing to [-1, 1] per axis
/// against the viewport size at event time. Between ticks only the latest
/// event survives.
pub fn wire_pointermove(
    window: &web::Window,
    pointer: Rc<RefCell<PointerState>>,
) -> PointerHandle {
    let window_for_move = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (w, h) = dom::viewport_size(&window_for_move);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let mut p = pointer.borrow_mut();
        p.x = (ev.client_x() as f32 / w - 0.5) * 2.0;
        p.y = (ev.client_y() as f32 / h - 0.5) * 2.0;
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    PointerHandle {
        closure: Some(closure),
    }
}
