mod pointer;

pub use pointer::*;

use crate::audio::AudioEngine;
use crate::core::{ItemKind, WorldItem};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a hover chirp to every card slot. The engine rate-limits rapid
/// sweeps itself, so the listeners fire unconditionally.
pub fn wire_hover_chirps(
    items: &[WorldItem],
    slots: &[Option<web::HtmlElement>],
    audio: &Rc<RefCell<AudioEngine>>,
) {
    for (item, slot) in items.iter().zip(slots) {
        if !matches!(item.kind, ItemKind::Card { .. }) {
            continue;
        }
        let Some(el) = slot else { continue };
        let audio = audio.clone();
        let closure = Closure::wrap(Box::new(move || {
            audio.borrow_mut().trigger_chirp();
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Global keydown: `m` toggles the master mute.
pub fn wire_mute_toggle(document: &web::Document, audio: &Rc<RefCell<AudioEngine>>) {
    let audio = audio.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if matches!(ev.key().as_str(), "m" | "M") {
            audio.borrow_mut().toggle_muted();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
