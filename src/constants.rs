// DOM wiring constants for the web frontend.

// Host page
pub const SVG_CANVAS_ID: &str = "svgCanvas"; // <svg> the grid is drawn into
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Classes applied to generated nodes
pub const CIRCLE_CLASS: &str = "circle";
pub const CAPTION_CLASS: &str = "caption";

// Event names
pub const EV_RESIZE: &str = "resize";
pub const EV_MOUSEMOVE: &str = "mousemove";
pub const EV_ENTER: &str = "mouseenter";
pub const EV_LEAVE: &str = "mouseleave";
pub const EV_CLICK: &str = "click";

// Frame clock: clamp long gaps (background tab) so tweens finish instead of
// being stepped with a huge delta mid-flight
pub const MAX_FRAME_DT_MS: u64 = 250;
