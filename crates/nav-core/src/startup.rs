use crate::constants::READY_STATE_LOADING;

/// Whether the controller can mount right away for the given
/// `document.readyState`, or must wait for `DOMContentLoaded`.
///
/// A WASM module can finish loading after the event has already fired, in
/// which case waiting would never mount.
#[inline]
pub fn mount_immediately(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}
