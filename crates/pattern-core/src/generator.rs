//! Randomized grid layout.

use crate::color::{ColorFunction, Hsl};
use crate::constants::{
    CELL_SIZE_MIN, CELL_SIZE_SPAN, GAP_MIN, GAP_SPAN, GRID_OVERSCAN, JITTER_BIAS,
    MAX_VIEWPORT_EXTENT, TOP_BIAS_CELLS,
};
use crate::preset::LayoutPreset;
use glam::DVec2;
use rand::prelude::*;

/// Visible drawing area in document units. Each side lies in
/// `[0, MAX_VIEWPORT_EXTENT]`; non-finite sizes count as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[inline]
fn clamp_extent(len: f64) -> f64 {
    if len.is_finite() {
        len.clamp(0.0, MAX_VIEWPORT_EXTENT)
    } else {
        0.0
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }
}

/// One grid cell's shape, ready to be rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub position: DVec2,
    pub radius: f64,
    pub fill: Hsl,
    pub preset: LayoutPreset,
}

impl ShapeDescriptor {
    pub fn fill_color(&self) -> String {
        self.fill.to_string()
    }
}

/// Output of one generation pass.
#[derive(Clone, Debug)]
pub struct Generation {
    pub cell_size: f64,
    pub gap: f64,
    pub cols: usize,
    pub rows: usize,
    pub color_function: ColorFunction,
    pub shapes: Vec<ShapeDescriptor>,
}

/// Number of cells needed to cover `len` plus the fixed overscan.
#[inline]
pub fn grid_extent(len: f64, cell_size: f64) -> usize {
    let whole = (clamp_extent(len) / cell_size).floor();
    whole as usize + GRID_OVERSCAN
}

pub struct PatternGenerator<R = StdRng> {
    rng: R,
}

impl PatternGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PatternGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Lay out a fresh grid for `viewport` using `preset`.
    ///
    /// Random draws happen in a fixed order: cell size, gap, color strategy,
    /// then per cell (column-major) the vertical jitter followed by the
    /// strategy's own draws.
    pub fn generate(&mut self, viewport: Viewport, preset: LayoutPreset) -> Generation {
        let rng = &mut self.rng;
        let cell_size = CELL_SIZE_MIN + rng.gen::<f64>() * CELL_SIZE_SPAN;
        let cols = grid_extent(viewport.width, cell_size);
        let rows = grid_extent(viewport.height, cell_size);
        let gap = GAP_MIN + rng.gen::<f64>() * GAP_SPAN;
        let color_function = ColorFunction::choose(rng);

        let radius = cell_size / 2.0;
        let mut shapes = Vec::with_capacity(cols * rows);
        for x in 0..cols {
            for y in 0..rows {
                let jitter = (rng.gen::<f64>() + JITTER_BIAS) * gap;
                let position = DVec2::new(
                    x as f64 * cell_size - cell_size / 2.0,
                    y as f64 * cell_size + jitter - cell_size * TOP_BIAS_CELLS,
                );
                let fill = color_function.apply(position.x, position.y, rng);
                shapes.push(ShapeDescriptor {
                    position,
                    radius,
                    fill,
                    preset,
                });
            }
        }

        Generation {
            cell_size,
            gap,
            cols,
            rows,
            color_function,
            shapes,
        }
    }
}
