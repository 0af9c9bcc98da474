// DOM hooks for the drawing surface. Button ids live next to the actions
// they trigger in `actions.rs`.

pub const SVG_ELEMENT_ID: &str = "pattern";
pub const SVG_FALLBACK_STYLE: &str = "display:block;width:100vw;height:100vh";
pub const ACTIVE_CLASS: &str = "active";
