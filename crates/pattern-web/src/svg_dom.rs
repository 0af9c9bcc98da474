//! Mirrors the core `SvgDocument` into live SVG nodes.

use crate::constants::{SVG_ELEMENT_ID, SVG_FALLBACK_STYLE};
use crate::dom::js_err;
use pattern_core::{Group, SvgDocument, SVG_NS};
use web_sys as web;

/// The page's `<svg id="pattern">`, created under `<body>` when absent.
pub fn find_or_create_root(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(SVG_ELEMENT_ID) {
        return Ok(el);
    }
    let svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .map_err(js_err)?;
    svg.set_id(SVG_ELEMENT_ID);
    svg.set_attribute("style", SVG_FALLBACK_STYLE).map_err(js_err)?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    body.append_child(&svg).map_err(js_err)?;
    log::info!("created #{} surface", SVG_ELEMENT_ID);
    Ok(svg)
}

pub fn set_view_box(svg: &web::Element, doc: &SvgDocument) -> anyhow::Result<()> {
    svg.set_attribute("viewBox", &doc.view_box()).map_err(js_err)
}

/// Build a detached `<g>` holding every primitive of `group`.
pub fn build_group(document: &web::Document, group: &Group) -> anyhow::Result<web::Element> {
    let g = document.create_element_ns(Some(SVG_NS), "g").map_err(js_err)?;
    for (name, value) in group.style.attributes() {
        g.set_attribute(name, value).map_err(js_err)?;
    }
    for node in &group.nodes {
        let el = document
            .create_element_ns(Some(SVG_NS), node.tag())
            .map_err(js_err)?;
        for (name, value) in node.attributes() {
            el.set_attribute(name, &value).map_err(js_err)?;
        }
        g.append_child(&el).map_err(js_err)?;
    }
    Ok(g)
}

/// Put `next` on screen in a single DOM operation.
pub fn swap_group(
    svg: &web::Element,
    current: Option<&web::Element>,
    next: &web::Element,
) -> anyhow::Result<()> {
    match current {
        Some(old) if old.parent_node().is_some() => {
            old.replace_with_with_node_1(next).map_err(js_err)
        }
        _ => svg.append_child(next).map(|_| ()).map_err(js_err),
    }
}
