// Defaults for the navigation element and its state classes.

// Element looked up at startup
pub const DEFAULT_NAV_ID: &str = "mainNav";

// Present while the bar is pinned to the viewport
pub const FIXED_CLASS: &str = "is-fixed";
// Present while the pinned bar is slid into view
pub const VISIBLE_CLASS: &str = "is-visible";

// Offset at which scrolling up always resets the bar (top of the page)
pub const TOP_OFFSET: f64 = 0.0;

// `document.readyState` while the parser is still running
pub const READY_STATE_LOADING: &str = "loading";
