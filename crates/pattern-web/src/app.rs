use crate::actions::PanelAction;
use crate::download;
use crate::panel;
use crate::svg_dom;
use instant::Instant;
use pattern_core::{PatternState, Viewport};
use web_sys as web;

/// Owns the pattern state and the DOM nodes currently showing it.
pub struct App {
    pub document: web::Document,
    pub state: PatternState,
    svg: web::Element,
    group: Option<web::Element>,
}

impl App {
    pub fn new(document: web::Document, svg: web::Element, state: PatternState) -> Self {
        Self {
            document,
            state,
            svg,
            group: None,
        }
    }

    /// Mirror the state's current document into the page.
    pub fn present(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();
        let doc = self.state.document();
        svg_dom::set_view_box(&self.svg, doc)?;
        let next = svg_dom::build_group(&self.document, &doc.group)?;
        svg_dom::swap_group(&self.svg, self.group.as_ref(), &next)?;
        self.group = Some(next);
        log::debug!(
            "[present] frame #{} nodes={} in {:?}",
            self.state.redraws(),
            doc.group.nodes.len(),
            started.elapsed()
        );
        Ok(())
    }

    /// Every resize event regenerates, even when the size is unchanged.
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.resize(viewport);
        self.present_or_log();
    }

    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::SelectPreset(preset) => {
                self.state.set_preset(preset);
                log::info!("[panel] preset -> {}", preset.label());
            }
            PanelAction::Redraw => {
                self.state.redraw();
            }
            PanelAction::SelectFormat(format) => {
                self.state.set_export_format(format);
                log::info!("[panel] save as -> {}", format.extension());
            }
            PanelAction::Save => {
                if let Err(e) = download::save(&self.document, &self.state) {
                    log::warn!("[save] no file produced: {:?}", e);
                }
            }
        }
        if action.redraws() {
            self.present_or_log();
        }
        panel::sync_active(&self.document, self.state.settings());
    }

    fn present_or_log(&mut self) {
        if let Err(e) = self.present() {
            log::error!("[present] {:?}", e);
        }
    }
}
