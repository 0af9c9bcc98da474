//! Redraw state shared by the web and native frontends.
//!
//! `PatternState` is the only owner of mutable settings and of the current
//! frame. Every setter that changes what is on screen regenerates the whole
//! frame; a new frame is fully built before it replaces the old one.

use crate::export::{Export, ExportError, ExportFormat, Rasterizer};
use crate::generator::{Generation, PatternGenerator, Viewport};
use crate::preset::LayoutPreset;
use crate::shape::ShapeRenderer;
use crate::svg::{Group, SvgDocument};
use rand::prelude::*;

/// User-selected options. Exclusivity of preset and format is carried by
/// the enum values themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub preset: LayoutPreset,
    pub export: ExportFormat,
}

/// Everything produced by one redraw.
#[derive(Clone, Debug)]
pub struct Frame {
    pub generation: Generation,
    pub document: SvgDocument,
}

pub struct PatternState<R = StdRng> {
    settings: Settings,
    viewport: Viewport,
    generator: PatternGenerator<R>,
    frame: Frame,
    redraws: u64,
}

impl<R: Rng> PatternState<R> {
    /// Create the state and draw the first frame.
    pub fn new(viewport: Viewport, settings: Settings, mut generator: PatternGenerator<R>) -> Self {
        let frame = build_frame(&mut generator, viewport, settings.preset);
        Self {
            settings,
            viewport,
            generator,
            frame,
            redraws: 1,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn document(&self) -> &SvgDocument {
        &self.frame.document
    }

    /// Number of frames drawn so far, including the initial one.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn resize(&mut self, viewport: Viewport) -> &Frame {
        self.viewport = viewport;
        self.redraw()
    }

    pub fn set_preset(&mut self, preset: LayoutPreset) -> &Frame {
        self.settings.preset = preset;
        self.redraw()
    }

    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.settings.export = format;
    }

    pub fn redraw(&mut self) -> &Frame {
        let frame = build_frame(&mut self.generator, self.viewport, self.settings.preset);
        self.frame = frame;
        self.redraws += 1;
        &self.frame
    }

    /// Encode the current document in the selected export format.
    pub fn export(&self, rasterizer: &dyn Rasterizer) -> Result<Export, ExportError> {
        Export::encode(&self.frame.document, self.settings.export, rasterizer)
    }
}

fn build_frame<R: Rng>(
    generator: &mut PatternGenerator<R>,
    viewport: Viewport,
    preset: LayoutPreset,
) -> Frame {
    let generation = generator.generate(viewport, preset);
    let nodes = ShapeRenderer::new(viewport.height).render_all(&generation.shapes);
    log::debug!(
        "[redraw] preset={} cell={:.1} gap={:.1} grid={}x{} colors={} nodes={}",
        preset,
        generation.cell_size,
        generation.gap,
        generation.cols,
        generation.rows,
        generation.color_function,
        nodes.len()
    );
    let document = SvgDocument::new(viewport, Group::new(nodes));
    Frame {
        generation,
        document,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Primitive;

    fn state() -> PatternState {
        PatternState::new(
            Viewport::new(400.0, 300.0),
            Settings::default(),
            PatternGenerator::seeded(11),
        )
    }

    #[test]
    fn initial_draw_happens_on_construction() {
        let s = state();
        assert_eq!(s.redraws(), 1);
        let g = &s.frame().generation;
        assert_eq!(s.document().group.nodes.len(), g.cols * g.rows * 2);
    }

    #[test]
    fn resize_regenerates_for_new_viewport() {
        let mut s = state();
        let frame = s.resize(Viewport::new(0.0, 0.0));
        assert_eq!((frame.generation.cols, frame.generation.rows), (4, 4));
        assert_eq!(s.document().view_box(), "0 0 0 0");
        assert_eq!(s.redraws(), 2);
    }

    #[test]
    fn preset_change_applies_to_every_shape() {
        let mut s = state();
        s.set_preset(LayoutPreset::Flat);
        assert_eq!(s.settings().preset, LayoutPreset::Flat);
        assert!(s
            .frame()
            .generation
            .shapes
            .iter()
            .all(|d| d.preset == LayoutPreset::Flat));
        for node in &s.document().group.nodes {
            if let Primitive::Disc(d) = node {
                assert_eq!(d.r, 0.0);
            }
        }
    }

    #[test]
    fn resize_to_same_viewport_still_regenerates() {
        let mut s = state();
        let before = s.document().clone();
        s.resize(s.viewport());
        assert_eq!(s.redraws(), 2);
        assert_eq!(s.viewport(), before.viewport);
        assert_ne!(s.document(), &before);
    }

    #[test]
    fn export_format_change_does_not_redraw() {
        let mut s = state();
        s.set_export_format(ExportFormat::Png);
        assert_eq!(s.redraws(), 1);
        assert_eq!(s.settings().export, ExportFormat::Png);
    }
}
