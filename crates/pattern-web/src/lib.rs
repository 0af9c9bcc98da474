#![cfg(target_arch = "wasm32")]
use pattern_core::{PatternGenerator, PatternState, Settings};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod actions;
mod app;
mod constants;
mod dom;
mod download;
mod panel;
mod svg_dom;

use app::App;

fn wire_resize(app: Rc<RefCell<App>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let viewport = dom::window_viewport(&window);
            app.borrow_mut().resize(viewport);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pattern-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let svg = svg_dom::find_or_create_root(&document)?;
    let viewport = dom::window_viewport(&window);
    let settings = Settings::default();
    let state = PatternState::new(viewport, settings, PatternGenerator::from_entropy());

    let app = Rc::new(RefCell::new(App::new(document.clone(), svg, state)));
    app.borrow_mut().present()?;
    panel::sync_active(&document, settings);

    wire_resize(app.clone());
    panel::wire(&document, app);
    Ok(())
}
