// Host-side tests for the pure panel mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod actions {
    include!("../src/actions.rs");
}

use actions::*;
use pattern_core::{ExportFormat, LayoutPreset};
use std::collections::HashSet;

#[test]
fn digits_select_presets() {
    assert_eq!(
        action_for_key("1"),
        Some(PanelAction::SelectPreset(LayoutPreset::Normal))
    );
    assert_eq!(
        action_for_key("5"),
        Some(PanelAction::SelectPreset(LayoutPreset::Semi))
    );
    assert_eq!(action_for_key("0"), None);
}

#[test]
fn letters_map_to_commands() {
    assert_eq!(action_for_key("r"), Some(PanelAction::Redraw));
    assert_eq!(action_for_key("S"), Some(PanelAction::Save));
    assert_eq!(
        action_for_key("v"),
        Some(PanelAction::SelectFormat(ExportFormat::Svg))
    );
    assert_eq!(
        action_for_key("P"),
        Some(PanelAction::SelectFormat(ExportFormat::Png))
    );
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key("Enter"), None);
}

#[test]
fn only_preset_and_redraw_trigger_redraw() {
    assert!(PanelAction::Redraw.redraws());
    assert!(PanelAction::SelectPreset(LayoutPreset::Flat).redraws());
    assert!(!PanelAction::Save.redraws());
    assert!(!PanelAction::SelectFormat(ExportFormat::Png).redraws());
}

#[test]
fn button_ids_are_unique_and_stable() {
    let actions = button_actions();
    let ids: HashSet<String> = actions.iter().map(|a| element_id(*a)).collect();
    assert_eq!(ids.len(), actions.len());
    assert!(ids.contains("preset-normal"));
    assert!(ids.contains("preset-semi"));
    assert!(ids.contains("format-png"));
    assert!(ids.contains("redraw"));
    assert!(ids.contains("save"));
}
