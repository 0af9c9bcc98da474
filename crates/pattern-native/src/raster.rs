//! CPU rasterizer for pattern documents.
//!
//! Documents only ever contain filled discs and bars, so they are painted
//! straight from the primitive list rather than by parsing markup.

use pattern_core::{ExportError, Hsl, Primitive, Rasterizer, SvgDocument};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRasterizer {
    /// Opaque background; transparent when `None`.
    pub background: Option<[u8; 3]>,
}

impl SkiaRasterizer {
    pub fn paint(&self, doc: &SvgDocument) -> Result<Pixmap, ExportError> {
        let (width, height) = (doc.viewport.width, doc.viewport.height);
        if width < 1.0 || height < 1.0 {
            return Err(ExportError::EmptyViewport { width, height });
        }
        let mut pixmap = Pixmap::new(width as u32, height as u32).ok_or_else(|| {
            ExportError::Raster(format!("cannot allocate {}x{} pixmap", width, height))
        })?;
        if let Some([r, g, b]) = self.background {
            pixmap.fill(Color::from_rgba8(r, g, b, 255));
        }

        let mut skipped = 0usize;
        for node in &doc.group.nodes {
            let paint = fill_paint(node.fill());
            let drawn = match node {
                Primitive::Disc(d) => PathBuilder::from_circle(d.cx as f32, d.cy as f32, d.r as f32)
                    .map(|path| {
                        pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        )
                    })
                    .is_some(),
                Primitive::Bar(b) => Rect::from_xywh(
                    b.x as f32,
                    b.y as f32,
                    b.width as f32,
                    b.height as f32,
                )
                .map(|rect| pixmap.fill_rect(rect, &paint, Transform::identity(), None))
                .is_some(),
            };
            if !drawn {
                skipped += 1;
            }
        }
        if skipped > 0 {
            // zero-radius discs (Flat preset) land here
            log::debug!("[raster] skipped {} degenerate primitives", skipped);
        }
        Ok(pixmap)
    }
}

impl Rasterizer for SkiaRasterizer {
    fn rasterize(&self, doc: &SvgDocument) -> Result<Vec<u8>, ExportError> {
        self.paint(doc)?
            .encode_png()
            .map_err(|e| ExportError::Raster(e.to_string()))
    }
}

fn fill_paint(fill: &str) -> Paint<'static> {
    let [r, g, b] = parse_hsl(fill).map(|c| c.to_rgb8()).unwrap_or([0, 0, 0]);
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

/// Parse the `hsl(H, S%, L%)` form written by [`Hsl`]'s `Display`.
pub fn parse_hsl(s: &str) -> Option<Hsl> {
    let inner = s.trim().strip_prefix("hsl(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().trim_end_matches('%'));
    let hue = parts.next()?.parse().ok()?;
    let saturation = parts.next()?.parse().ok()?;
    let lightness = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Hsl::new(hue, saturation, lightness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattern_core::{Bar, Disc, Group, Viewport};

    fn doc(nodes: Vec<Primitive>) -> SvgDocument {
        SvgDocument::new(Viewport::new(20.0, 10.0), Group::new(nodes))
    }

    #[test]
    fn parses_display_output() {
        let c = Hsl::new(-12.5, 40.0, 33.25);
        assert_eq!(parse_hsl(&c.to_string()), Some(c));
        assert_eq!(parse_hsl("rgb(1,2,3)"), None);
        assert_eq!(parse_hsl("hsl(1, 2%)"), None);
    }

    #[test]
    fn bar_pixels_take_fill_color() {
        let d = doc(vec![Primitive::Bar(Bar {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 10.0,
            fill: "hsl(0, 100%, 50%)".to_string(),
        })]);
        let pixmap = SkiaRasterizer::default().paint(&d).unwrap();
        let px = pixmap.pixel(10, 5).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 0, 0, 255));
    }

    #[test]
    fn zero_radius_disc_is_skipped() {
        let d = doc(vec![Primitive::Disc(Disc {
            cx: 5.0,
            cy: 5.0,
            r: 0.0,
            fill: "hsl(0, 0%, 0%)".to_string(),
        })]);
        let pixmap = SkiaRasterizer::default().paint(&d).unwrap();
        assert_eq!(pixmap.pixel(5, 5).unwrap().alpha(), 0);
    }

    #[test]
    fn png_bytes_have_signature() {
        let bytes = SkiaRasterizer {
            background: Some([255, 255, 255]),
        }
        .rasterize(&doc(Vec::new()))
        .unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn empty_viewport_is_an_error() {
        let empty = SvgDocument::new(Viewport::new(0.0, 0.0), Group::default());
        assert!(matches!(
            SkiaRasterizer::default().rasterize(&empty),
            Err(ExportError::EmptyViewport { .. })
        ));
    }
}
