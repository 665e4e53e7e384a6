use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Page margin preset understood by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginPreset {
    Compact,
    #[default]
    Normal,
    Wide,
}

impl MarginPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            MarginPreset::Compact => "compact",
            MarginPreset::Normal => "normal",
            MarginPreset::Wide => "wide",
        }
    }
}

impl fmt::Display for MarginPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single spacing control shown to the user. Collapses `compact_mode` and
/// `margin_preset` into one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingMode {
    Tight,
    #[default]
    Normal,
    Wide,
}

impl SpacingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingMode::Tight => "tight",
            SpacingMode::Normal => "normal",
            SpacingMode::Wide => "wide",
        }
    }
}

impl fmt::Display for SpacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpacingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tight" => Ok(SpacingMode::Tight),
            "normal" => Ok(SpacingMode::Normal),
            "wide" => Ok(SpacingMode::Wide),
            _ => Err(AppError::InvalidSpacingMode(s.to_string())),
        }
    }
}

/// Presentation parameters that decide whether a resume fits one page.
///
/// The planner and the font override keep `font_scale` within [`MIN_FONT_SCALE`,
/// `MAX_FONT_SCALE`]. Deserialized values are unchecked until [`LayoutParams::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub font_scale: f64,
    pub compact_mode: bool,
    pub margin_preset: MarginPreset,
}

pub const MIN_FONT_SCALE: f64 = 0.80;
pub const MAX_FONT_SCALE: f64 = 1.20;

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            compact_mode: false,
            margin_preset: MarginPreset::Normal,
        }
    }
}

impl LayoutParams {
    /// Font scale as a whole percentage, for display ("92% font").
    pub fn font_percent(&self) -> u32 {
        (self.font_scale * 100.0).round() as u32
    }

    /// Pulls `font_scale` back into the supported range; NaN becomes the default scale.
    pub fn clamped(self) -> Self {
        let font_scale = if self.font_scale.is_nan() {
            Self::default().font_scale
        } else {
            self.font_scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
        };
        Self { font_scale, ..self }
    }
}

/// The spacing half of [`LayoutParams`]; leaves `font_scale` untouched when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingPatch {
    pub compact_mode: bool,
    pub margin_preset: MarginPreset,
}

impl SpacingPatch {
    pub fn apply_to(self, params: LayoutParams) -> LayoutParams {
        LayoutParams {
            compact_mode: self.compact_mode,
            margin_preset: self.margin_preset,
            ..params
        }
    }
}
