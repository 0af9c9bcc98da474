use crate::actions::{action_for_key, button_actions, element_id, PanelAction};
use crate::app::App;
use crate::constants::ACTIVE_CLASS;
use crate::dom;
use pattern_core::{ExportFormat, LayoutPreset, Settings};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind every panel button present in the page plus the keyboard shortcuts.
pub fn wire(document: &web::Document, app: Rc<RefCell<App>>) {
    let mut bound = 0;
    for action in button_actions() {
        let app_click = app.clone();
        if dom::add_click_listener(document, &element_id(action), move || {
            app_click.borrow_mut().apply(action);
        }) {
            bound += 1;
        }
    }
    log::info!("[panel] {} buttons bound", bound);
    wire_keydown(app);
}

fn wire_keydown(app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = action_for_key(&ev.key()) {
            ev.prevent_default();
            app.borrow_mut().apply(action);
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Highlight exactly the selected preset and export format.
pub fn sync_active(document: &web::Document, settings: Settings) {
    for preset in LayoutPreset::ALL {
        toggle(document, PanelAction::SelectPreset(preset), preset == settings.preset);
    }
    for format in [ExportFormat::Svg, ExportFormat::Png] {
        toggle(document, PanelAction::SelectFormat(format), format == settings.export);
    }
}

fn toggle(document: &web::Document, action: PanelAction, on: bool) {
    if let Some(el) = document.get_element_by_id(&element_id(action)) {
        dom::set_class(&el, ACTIVE_CLASS, on);
    }
}
