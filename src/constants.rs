// DOM event names the front-end subscribes to.

// Fired once the document has been parsed; the controller mounts here
pub const EV_CONTENT_LOADED: &str = "DOMContentLoaded";
// Fired on every viewport scroll, no throttling applied
pub const EV_SCROLL: &str = "scroll";
// Fired on every page display, including back/forward cache restores
pub const EV_PAGE_SHOW: &str = "pageshow";
