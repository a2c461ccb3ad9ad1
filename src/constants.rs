/// DOM wiring constants for the browser overlay.
///
/// Tuning values for the cursor itself (springs, sizes, thresholds) live in
/// `core::constants`; this file only names the browser-side plumbing.
// Overlay root element
pub const OVERLAY_ID: &str = "cursor-trail-overlay";
pub const OVERLAY_Z_INDEX: u32 = 1_000_000; // above all page content

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Media query evaluated once at mount
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Host event names per listener kind
pub const EVENT_MOVE: &str = "mousemove";
pub const EVENT_OVER: &str = "mouseover";
pub const EVENT_OUT: &str = "mouseout";
pub const EVENT_LEAVE_DOCUMENT: &str = "mouseleave";
