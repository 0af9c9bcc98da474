//! Save the current frame as `pattern.svg` or `pattern.png`.
//!
//! Failures are logged and dropped: the user simply gets no file.

use crate::dom::js_err;
use pattern_core::{ExportFormat, PatternState, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn save(document: &web::Document, state: &PatternState) -> anyhow::Result<()> {
    let format = state.settings().export;
    let markup = state.document().to_markup();
    log::info!("[save] {} ({} bytes of markup)", format.filename(), markup.len());
    match format {
        ExportFormat::Svg => trigger_download(document, &format.filename(), &svg_data_url(&markup)),
        ExportFormat::Png => rasterize_png(document, &markup, state.viewport(), format.filename()),
    }
}

fn svg_data_url(markup: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(markup).into();
    format!("data:{};charset=utf-8,{}", ExportFormat::Svg.mime(), encoded)
}

fn trigger_download(document: &web::Document, filename: &str, href: &str) -> anyhow::Result<()> {
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|_| anyhow::anyhow!("<a> is not an HtmlAnchorElement"))?;
    anchor.set_download(filename);
    anchor.set_href(href);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(js_err)?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;
    Ok(())
}

/// Load the markup into an image, paint it on an offscreen canvas sized to
/// the viewport and download the canvas as PNG once the image is decoded.
fn rasterize_png(
    document: &web::Document,
    markup: &str,
    viewport: Viewport,
    filename: String,
) -> anyhow::Result<()> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("<canvas> is not an HtmlCanvasElement"))?;
    canvas.set_width((viewport.width as u32).max(1));
    canvas.set_height((viewport.height as u32).max(1));

    let img = web::HtmlImageElement::new().map_err(js_err)?;
    let doc_load = document.clone();
    let img_load = img.clone();
    let onload = Closure::once_into_js(move || {
        if let Err(e) = paint_and_download(&doc_load, &canvas, &img_load, &filename) {
            log::warn!("[save] png export failed: {:?}", e);
        }
    });
    img.set_onload(Some(onload.unchecked_ref()));
    let onerror = Closure::once_into_js(move || {
        log::warn!("[save] svg did not decode as an image; no file produced");
    });
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(&svg_data_url(markup));
    Ok(())
}

fn paint_and_download(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    img: &web::HtmlImageElement,
    filename: &str,
) -> anyhow::Result<()> {
    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("context is not 2d"))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(js_err)?;
    let href = canvas
        .to_data_url_with_type(ExportFormat::Png.mime())
        .map_err(js_err)?;
    trigger_download(document, filename, &href)
}
