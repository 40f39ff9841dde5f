use crate::constants::EV_PAGE_SHOW;
use crate::dom::{self, LocationReloader};
use nav_core::{on_page_show, NavError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Force a server round-trip when the page comes back from the bfcache
pub fn wire_page_show(window: &web::Window) -> Result<(), NavError> {
    let reloader = LocationReloader::new(window);
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if let Err(e) = on_page_show(ev.persisted(), &reloader) {
            log::error!("[restore] {}", e);
        }
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback(EV_PAGE_SHOW, closure.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(())
}
