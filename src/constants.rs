// DOM hooks the web front-end looks for.
// Cards opt in with `data-tilt-card`; everything else is optional.

// Elements mounted automatically on start
pub const CARD_SELECTOR: &str = "[data-tilt-card]";

// Inner element that receives pointer events and provides geometry.
// Falls back to the card element itself when absent.
pub const SHELL_SELECTOR: &str = ".pc-card-shell";

// Per-card attributes
pub const CONFIG_ATTR: &str = "data-tilt-config"; // TiltConfig as JSON
pub const STYLE_ATTR: &str = "data-tilt-style"; // CardStyle as JSON
pub const ENABLED_ATTR: &str = "data-tilt-enabled"; // "false" / "0" / "off" disables

// Touch-primary device detection
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Pointer events wired on the shell
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const POINTER_LEAVE_EVENT: &str = "pointerleave";
