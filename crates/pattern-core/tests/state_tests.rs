// Redraw cycle and export behaviour of the state holder.

mod common;

use common::ScriptedRng;
use pattern_core::*;

struct StubRaster(Result<Vec<u8>, &'static str>);

impl Rasterizer for StubRaster {
    fn rasterize(&self, _doc: &SvgDocument) -> Result<Vec<u8>, ExportError> {
        self.0.clone().map_err(|e| ExportError::Raster(e.to_string()))
    }
}

fn state() -> PatternState {
    PatternState::new(
        Viewport::new(800.0, 600.0),
        Settings::default(),
        PatternGenerator::seeded(42),
    )
}

#[test]
fn selecting_a_preset_replaces_the_previous_one() {
    let mut s = state();
    for preset in LayoutPreset::ALL {
        s.set_preset(preset);
        assert_eq!(s.settings().preset, preset);
        let frame = s.frame();
        assert!(frame.generation.shapes.iter().all(|d| d.preset == preset));
    }
    assert_eq!(s.redraws(), 1 + LayoutPreset::ALL.len() as u64);
}

#[test]
fn redraw_swaps_in_a_whole_new_frame() {
    let mut s = PatternState::new(
        Viewport::new(300.0, 200.0),
        Settings::default(),
        PatternGenerator::new(ScriptedRng::new(&[0.0, 0.5, 0.25, 0.75])),
    );
    let before = s.document().clone();
    let after = s.redraw().document.clone();
    assert_ne!(before, after);
    let g = &s.frame().generation;
    assert_eq!(after.group.nodes.len(), g.shapes.len() * 2);
}

#[test]
fn svg_export_uses_current_document() {
    let mut s = state();
    s.set_preset(LayoutPreset::Semi);
    let out = s.export(&StubRaster(Err("unused"))).unwrap();
    assert_eq!(out.filename, "pattern.svg");
    assert_eq!(out.bytes, s.document().to_markup().into_bytes());
}

#[test]
fn png_export_delegates_to_rasterizer() {
    let mut s = state();
    s.set_export_format(ExportFormat::Png);
    let out = s.export(&StubRaster(Ok(vec![0x89, b'P', b'N', b'G']))).unwrap();
    assert_eq!(out.filename, "pattern.png");
    assert_eq!(out.mime, "image/png");
    assert_eq!(out.bytes, vec![0x89, b'P', b'N', b'G']);
}

#[test]
fn failed_export_leaves_state_untouched() {
    let mut s = state();
    s.set_export_format(ExportFormat::Png);
    let before = s.document().clone();
    assert!(s.export(&StubRaster(Err("boom"))).is_err());
    assert_eq!(s.document(), &before);
    assert_eq!(s.redraws(), 1);
}
