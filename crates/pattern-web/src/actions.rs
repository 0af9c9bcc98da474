// Pure mapping from panel inputs (buttons, keys) to state changes.

use pattern_core::{ExportFormat, LayoutPreset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    SelectPreset(LayoutPreset),
    Redraw,
    SelectFormat(ExportFormat),
    Save,
}

impl PanelAction {
    /// Whether the action changes what is on screen.
    pub fn redraws(self) -> bool {
        matches!(self, PanelAction::SelectPreset(_) | PanelAction::Redraw)
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<PanelAction> {
    if let Some(preset) = LayoutPreset::for_digit(key) {
        return Some(PanelAction::SelectPreset(preset));
    }
    if let Some(format) = ExportFormat::for_key(key) {
        return Some(PanelAction::SelectFormat(format));
    }
    match key {
        "r" | "R" => Some(PanelAction::Redraw),
        "s" | "S" => Some(PanelAction::Save),
        _ => None,
    }
}

/// Id of the optional button bound to `action`.
pub fn element_id(action: PanelAction) -> String {
    match action {
        PanelAction::SelectPreset(p) => format!("preset-{}", p.id()),
        PanelAction::Redraw => "redraw".to_string(),
        PanelAction::SelectFormat(f) => format!("format-{}", f.extension()),
        PanelAction::Save => "save".to_string(),
    }
}

/// Every action that has a button in the panel.
pub fn button_actions() -> Vec<PanelAction> {
    let mut out: Vec<PanelAction> = LayoutPreset::ALL
        .iter()
        .map(|p| PanelAction::SelectPreset(*p))
        .collect();
    out.push(PanelAction::Redraw);
    out.push(PanelAction::SelectFormat(ExportFormat::Svg));
    out.push(PanelAction::SelectFormat(ExportFormat::Png));
    out.push(PanelAction::Save);
    out
}
