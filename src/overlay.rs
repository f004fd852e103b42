use crate::core::HudSnapshot;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Write a published snapshot into the HUD fields. Fields are addressed by
/// id so markup can restyle freely around them.
pub fn update_hud(document: &web::Document, snap: &HudSnapshot) {
    if let Some(el) = document.get_element_by_id("hud-fps") {
        el.set_text_content(Some(&snap.fps.to_string()));
    }
    if let Some(el) = document.get_element_by_id("hud-velocity") {
        el.set_text_content(Some(&snap.velocity));
    }
    if let Some(el) = document.get_element_by_id("hud-coord") {
        el.set_text_content(Some(&snap.coord.to_string()));
    }
}
