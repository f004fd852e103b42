use crate::core::{CameraFrame, ItemKind, RenderOutput, TransformOp, WorldItem};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Build one element per item under the world element. A slot stays `None`
/// if the platform refuses the element; placement simply skips it until a
/// rebuild, the same way an unattached item is skipped per frame.
pub fn spawn_items(
    document: &web::Document,
    world_el: &web::Element,
    items: &[WorldItem],
) -> Vec<Option<web::HtmlElement>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let el = match &item.kind {
                ItemKind::Heading { label } => {
                    let el = document.create_element("div").ok()?;
                    el.set_class_name("item");
                    el.set_inner_html(&format!("<div class=\"big-text\">{}</div>", label));
                    el
                }
                ItemKind::Card {
                    label,
                    card_id,
                    grid,
                    data_size_mb,
                } => {
                    let el = document.create_element("div").ok()?;
                    el.set_class_name("item");
                    el.set_inner_html(&format!(
                        "<div class=\"card\">\
                         <div class=\"card-header\"><span class=\"card-id\">ID-{}</span><div class=\"card-dot\"></div></div>\
                         <h2>{}</h2>\
                         <div class=\"card-footer\"><span>GRID: {}x{}</span><span>DATA_SIZE: {:.1}MB</span></div>\
                         <div class=\"card-index\">0{}</div>\
                         </div>",
                        card_id, label, grid.0, grid.1, data_size_mb, index
                    ));
                    el
                }
                ItemKind::Particle => {
                    let el = document.create_element("div").ok()?;
                    el.set_class_name("star");
                    el
                }
            };
            world_el.append_child(&el).ok()?;
            el.dyn_into::<web::HtmlElement>().ok()
        })
        .collect()
}

/// Apply the camera to the scene anchors: tilt on the world element,
/// perspective distance on the viewport element.
pub fn apply_camera(viewport_el: &web::HtmlElement, world_el: &web::HtmlElement, cam: &CameraFrame) {
    set_style(
        world_el,
        "transform",
        &format!("rotateX({}deg) rotateY({}deg)", cam.tilt_x_deg, cam.tilt_y_deg),
    );
    set_style(viewport_el, "perspective", &format!("{}px", cam.fov_px));
}

fn transform_css(ops: &[TransformOp]) -> String {
    let mut css = String::new();
    for op in ops {
        if !css.is_empty() {
            css.push(' ');
        }
        match op {
            TransformOp::Translate3d { x, y, z } => {
                css.push_str(&format!("translate3d({}px, {}px, {}px)", x, y, z));
            }
            TransformOp::RotateZ(deg) => css.push_str(&format!("rotateZ({}deg)", deg)),
            TransformOp::RotateY(deg) => css.push_str(&format!("rotateY({}deg)", deg)),
            TransformOp::ScaleZ(s) => css.push_str(&format!("scale3d(1, 1, {})", s)),
        }
    }
    css
}

/// Push this frame's placement onto the DOM. Missing slots are skipped; the
/// next frame recomputes everything anyway.
pub fn apply_outputs(
    slots: &[Option<web::HtmlElement>],
    items: &[WorldItem],
    outputs: &[RenderOutput],
) {
    for ((slot, item), out) in slots.iter().zip(items).zip(outputs) {
        let Some(el) = slot else { continue };
        set_style(el, "opacity", &format!("{}", out.opacity));
        if !out.ops.is_empty() {
            set_style(el, "transform", &transform_css(&out.ops));
        }
        if matches!(item.kind, ItemKind::Heading { .. }) {
            match out.chroma_px {
                Some(off) => set_style(
                    el,
                    "text-shadow",
                    &format!("{}px 0 red, {}px 0 cyan", off, -off),
                ),
                None => set_style(el, "text-shadow", "none"),
            }
        }
    }
}
