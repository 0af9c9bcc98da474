// Shared generation/rendering constants used by both web and native frontends.

// Grid sizing
pub const CELL_SIZE_MIN: f64 = 60.0; // inclusive
pub const CELL_SIZE_SPAN: f64 = 40.0; // cell size is drawn from [MIN, MIN + SPAN)
pub const GRID_OVERSCAN: usize = 4; // extra cols/rows so jitter never exposes an edge

pub const MAX_VIEWPORT_EXTENT: f64 = 16384.0; // per side; larger sizes are clamped

// Vertical jitter
pub const GAP_MIN: f64 = 80.0;
pub const GAP_SPAN: f64 = 40.0;
pub const JITTER_BIAS: f64 = 0.5; // (random + bias) * gap
pub const TOP_BIAS_CELLS: f64 = 4.0; // whole grid is lifted by this many cells

// Container styling applied once on the group
pub const GROUP_FILL: &str = "none";
pub const GROUP_STROKE: &str = "black";
pub const GROUP_STROKE_LINECAP: &str = "round";
pub const GROUP_STROKE_LINEJOIN: &str = "round";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Export
pub const EXPORT_FILE_STEM: &str = "pattern";

// Native defaults
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
