//! Reload-on-restore: a page shown from the back/forward cache is refetched.

use crate::error::NavError;

/// Something that can force a full reload of the current location.
pub trait Reload {
    fn reload(&self) -> Result<(), NavError>;
}

/// Handle a `pageshow` event. Returns whether a reload was requested.
pub fn on_page_show(persisted: bool, reloader: &impl Reload) -> Result<bool, NavError> {
    if !persisted {
        return Ok(false);
    }
    log::info!("[restore] page restored from cache, reloading");
    reloader.reload()?;
    Ok(true)
}
