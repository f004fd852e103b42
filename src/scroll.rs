use crate::constants::SCROLL_LERP;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel-driven smooth scroll source.
///
/// The wheel handler only accumulates a target position; `pump` advances the
/// interpolation exactly once per frame, so however many wheel events land
/// between ticks, a tick sees one consistent `(scroll, velocity)` pair.
pub struct SmoothScroll {
    target: Rc<Cell<f32>>,
    position: f32,
    velocity: f32,
    wheel_closure: Option<Closure<dyn FnMut(web::WheelEvent)>>,
}

impl SmoothScroll {
    pub fn attach(window: &web::Window) -> Self {
        let target = Rc::new(Cell::new(0.0_f32));
        let target_for_wheel = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            target_for_wheel.set(target_for_wheel.get() + ev.delta_y() as f32);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        Self {
            target,
            position: 0.0,
            velocity: 0.0,
            wheel_closure: Some(closure),
        }
    }

    /// Advance the interpolation one step toward the accumulated target.
    pub fn pump(&mut self) {
        let prev = self.position;
        self.position += (self.target.get() - self.position) * SCROLL_LERP;
        self.velocity = self.position - prev;
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.position
    }

    /// Smoothed position delta of the latest pump, in px per frame.
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Detach the wheel listener. The last pumped values stay readable but
    /// nothing mutates this provider afterwards.
    pub fn destroy(&mut self, window: &web::Window) {
        if let Some(c) = self.wheel_closure.take() {
            _ = window.remove_event_listener_with_callback("wheel", c.as_ref().unchecked_ref());
        }
    }
}
