//! Layout presets.
//!
//! A preset scales the two primitives each grid cell is drawn with. Exactly one
//! preset is active at a time; that is a property of the type, a
//! `LayoutPreset` value is the selection.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutPreset {
    #[default]
    Normal,
    Puzzle,
    Circles,
    Flat,
    Semi,
}

/// Shape-scaling parameters carried by a preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetParams {
    pub circle_radius_offset: f64,
    pub rect_radius_offset: f64,
    pub rect_position_factor: Option<f64>,
}

impl PresetParams {
    /// Horizontal anchor factor for the bar, 1 when the preset leaves it unset.
    #[inline]
    pub fn position_factor(&self) -> f64 {
        self.rect_position_factor.unwrap_or(1.0)
    }
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 5] = [
        LayoutPreset::Normal,
        LayoutPreset::Puzzle,
        LayoutPreset::Circles,
        LayoutPreset::Flat,
        LayoutPreset::Semi,
    ];

    pub fn params(self) -> PresetParams {
        let (circle, rect, position) = match self {
            LayoutPreset::Normal => (1.0, 1.0, None),
            LayoutPreset::Puzzle => (0.5, 1.0, None),
            LayoutPreset::Circles => (2.0, 2.0, None),
            LayoutPreset::Flat => (0.0, 2.0, None),
            LayoutPreset::Semi => (4.0, 4.0, Some(4.0)),
        };
        PresetParams {
            circle_radius_offset: circle,
            rect_radius_offset: rect,
            rect_position_factor: position,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutPreset::Normal => "Normal",
            LayoutPreset::Puzzle => "Puzzle",
            LayoutPreset::Circles => "Circles",
            LayoutPreset::Flat => "Flat",
            LayoutPreset::Semi => "Semi",
        }
    }

    /// Lower-case identifier used by the CLI and DOM element ids.
    pub fn id(self) -> &'static str {
        match self {
            LayoutPreset::Normal => "normal",
            LayoutPreset::Puzzle => "puzzle",
            LayoutPreset::Circles => "circles",
            LayoutPreset::Flat => "flat",
            LayoutPreset::Semi => "semi",
        }
    }

    #[inline]
    pub fn for_digit(key: &str) -> Option<LayoutPreset> {
        match key {
            "1" => Some(LayoutPreset::Normal),
            "2" => Some(LayoutPreset::Puzzle),
            "3" => Some(LayoutPreset::Circles),
            "4" => Some(LayoutPreset::Flat),
            "5" => Some(LayoutPreset::Semi),
            _ => None,
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{0}` (expected normal, puzzle, circles, flat or semi)")]
pub struct ParsePresetError(pub String);

impl FromStr for LayoutPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "long" => Ok(LayoutPreset::Normal),
            "puzzle" => Ok(LayoutPreset::Puzzle),
            "circles" => Ok(LayoutPreset::Circles),
            "flat" => Ok(LayoutPreset::Flat),
            "semi" => Ok(LayoutPreset::Semi),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}
