//! Descriptor -> primitive mapping.

use crate::generator::ShapeDescriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// A filled shape with no stroke of its own.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Disc(Disc),
    Bar(Bar),
}

impl Primitive {
    /// SVG element name.
    pub fn tag(&self) -> &'static str {
        match self {
            Primitive::Disc(_) => "circle",
            Primitive::Bar(_) => "rect",
        }
    }

    pub fn fill(&self) -> &str {
        match self {
            Primitive::Disc(d) => &d.fill,
            Primitive::Bar(b) => &b.fill,
        }
    }

    /// Attribute list shared by the markup serializer and the DOM builder.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = match self {
            Primitive::Disc(d) => vec![
                ("cx", d.cx.to_string()),
                ("cy", d.cy.to_string()),
                ("r", d.r.to_string()),
            ],
            Primitive::Bar(b) => vec![
                ("x", b.x.to_string()),
                ("y", b.y.to_string()),
                ("width", b.width.to_string()),
                ("height", b.height.to_string()),
            ],
        };
        attrs.push(("fill", self.fill().to_string()));
        attrs.push(("stroke", "none".to_string()));
        attrs
    }
}

/// Turns descriptors into a disc and a full-height bar.
#[derive(Clone, Copy, Debug)]
pub struct ShapeRenderer {
    pub viewport_height: f64,
}

impl ShapeRenderer {
    pub fn new(viewport_height: f64) -> Self {
        Self { viewport_height }
    }

    pub fn render(&self, shape: &ShapeDescriptor) -> [Primitive; 2] {
        let params = shape.preset.params();
        let fill = shape.fill_color();
        let disc = Disc {
            cx: shape.position.x,
            cy: shape.position.y,
            r: shape.radius * params.circle_radius_offset,
            fill: fill.clone(),
        };
        let bar = Bar {
            x: shape.position.x - shape.radius * params.position_factor(),
            y: shape.position.y,
            width: shape.radius * 2.0 * params.rect_radius_offset,
            height: self.viewport_height,
            fill,
        };
        [Primitive::Disc(disc), Primitive::Bar(bar)]
    }

    pub fn render_all<'a>(
        &self,
        shapes: impl IntoIterator<Item = &'a ShapeDescriptor>,
    ) -> Vec<Primitive> {
        shapes.into_iter().flat_map(|s| self.render(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use crate::preset::LayoutPreset;
    use glam::DVec2;

    fn descriptor(preset: LayoutPreset) -> ShapeDescriptor {
        ShapeDescriptor {
            position: DVec2::new(100.0, 50.0),
            radius: 30.0,
            fill: Hsl::new(200.0, 40.0, 35.0),
            preset,
        }
    }

    #[test]
    fn disc_then_bar_share_fill() {
        let [disc, bar] = ShapeRenderer::new(600.0).render(&descriptor(LayoutPreset::Normal));
        assert_eq!(disc.tag(), "circle");
        assert_eq!(bar.tag(), "rect");
        assert_eq!(disc.fill(), "hsl(200, 40%, 35%)");
        assert_eq!(disc.fill(), bar.fill());
    }

    #[test]
    fn puzzle_halves_disc() {
        let [disc, _] = ShapeRenderer::new(600.0).render(&descriptor(LayoutPreset::Puzzle));
        match disc {
            Primitive::Disc(d) => assert_eq!(d.r, 15.0),
            other => panic!("expected disc, got {other:?}"),
        }
    }

    #[test]
    fn bar_spans_viewport_height() {
        let [_, bar] = ShapeRenderer::new(321.0).render(&descriptor(LayoutPreset::Circles));
        match bar {
            Primitive::Bar(b) => {
                assert_eq!(b.height, 321.0);
                assert_eq!(b.width, 120.0);
                assert_eq!(b.y, 50.0);
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn attributes_end_with_fill_and_no_stroke() {
        let [disc, _] = ShapeRenderer::new(10.0).render(&descriptor(LayoutPreset::Normal));
        let attrs = disc.attributes();
        assert_eq!(attrs[0], ("cx", "100".to_string()));
        assert_eq!(attrs[attrs.len() - 1], ("stroke", "none".to_string()));
    }
}
