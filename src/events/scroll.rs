use crate::constants::{EV_CONTENT_LOADED, EV_SCROLL};
use crate::dom::{self, DomClassList};
use nav_core::{NavConfig, NavError, ScrollNavController};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up the navigation element, measure it, and start tracking scrolls.
///
/// The height is read once; later layout changes do not move the threshold.
pub fn mount_nav(window: &web::Window, config: &NavConfig) -> Result<(), NavError> {
    config.validate()?;
    let document = window.document().ok_or(NavError::MissingDocument)?;
    let nav = dom::nav_element(&document, &config.nav_id)?;
    let threshold = f64::from(nav.client_height());

    let mut controller = ScrollNavController::new(threshold, config.classes.clone());
    let mut nav_classes = DomClassList::new(&nav);
    log::info!("[nav] mounted on #{} threshold={}", config.nav_id, threshold);

    let closure = Closure::wrap(Box::new(move || match dom::scroll_offset(&document) {
        Ok(offset) => {
            controller.on_scroll(offset, &mut nav_classes);
        }
        Err(e) => log::error!("[nav] {}", e),
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(EV_SCROLL, closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}

/// Defer [`mount_nav`] until the document is parsed. A missing navigation
/// element is thrown as a JS exception from the event callback.
pub fn wire_mount_on_content_loaded(
    window: &web::Window,
    config: NavConfig,
) -> Result<(), NavError> {
    let win = window.clone();
    let closure = Closure::once(move || {
        if let Err(e) = mount_nav(&win, &config) {
            log::error!("[nav] mount failed: {}", e);
            wasm_bindgen::throw_str(&e.to_string());
        }
    });
    window
        .add_event_listener_with_callback(EV_CONTENT_LOADED, closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}
