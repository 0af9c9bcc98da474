//! In-memory SVG document for one frame.
//!
//! The web frontend mirrors this structure into live DOM nodes; the native
//! frontend and the vector export serialize it with [`SvgDocument::to_markup`].

use crate::constants::{
    GROUP_FILL, GROUP_STROKE, GROUP_STROKE_LINECAP, GROUP_STROKE_LINEJOIN, SVG_NS,
};
use crate::generator::Viewport;
use crate::shape::Primitive;
use std::fmt::Write;

/// Presentation defaults applied once on the container.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_linecap: String,
    pub stroke_linejoin: String,
}

impl Default for GroupStyle {
    fn default() -> Self {
        Self {
            fill: GROUP_FILL.to_string(),
            stroke: GROUP_STROKE.to_string(),
            stroke_linecap: GROUP_STROKE_LINECAP.to_string(),
            stroke_linejoin: GROUP_STROKE_LINEJOIN.to_string(),
        }
    }
}

impl GroupStyle {
    pub fn attributes(&self) -> [(&'static str, &str); 4] {
        [
            ("fill", self.fill.as_str()),
            ("stroke", self.stroke.as_str()),
            ("stroke-linecap", self.stroke_linecap.as_str()),
            ("stroke-linejoin", self.stroke_linejoin.as_str()),
        ]
    }
}

/// The single replaceable container holding a frame's primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub style: GroupStyle,
    pub nodes: Vec<Primitive>,
}

impl Group {
    pub fn new(nodes: Vec<Primitive>) -> Self {
        Self {
            style: GroupStyle::default(),
            nodes,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgDocument {
    pub viewport: Viewport,
    pub group: Group,
}

impl SvgDocument {
    pub fn new(viewport: Viewport, group: Group) -> Self {
        Self { viewport, group }
    }

    /// `viewBox` attribute value for the root element.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.viewport.width, self.viewport.height)
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(64 + self.group.nodes.len() * 96);
        _ = write!(
            out,
            r#"<svg xmlns="{}" viewBox="{}" width="{}" height="{}">"#,
            SVG_NS,
            self.view_box(),
            self.viewport.width,
            self.viewport.height
        );
        out.push_str("<g");
        for (name, value) in self.group.style.attributes() {
            _ = write!(out, r#" {}="{}""#, name, value);
        }
        out.push('>');
        for node in &self.group.nodes {
            _ = write!(out, "<{}", node.tag());
            for (name, value) in node.attributes() {
                _ = write!(out, r#" {}="{}""#, name, value);
            }
            out.push_str("/>");
        }
        out.push_str("</g></svg>");
        out
    }
}
