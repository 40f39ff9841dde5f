#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use nav_core::{mount_immediately, NavConfig, NavError};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blog-nav starting");

    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(NavError::MissingWindow)?;
    let document = window.document().ok_or(NavError::MissingDocument)?;

    events::wire_page_show(&window).context("wiring pageshow")?;

    let config = NavConfig::default();
    if mount_immediately(&document.ready_state()) {
        events::mount_nav(&window, &config)?;
    } else {
        events::wire_mount_on_content_loaded(&window, config)?;
    }
    Ok(())
}
