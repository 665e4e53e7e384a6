//! Direct user overrides for the layout: the font-size slider and the spacing selector.

use crate::errors::AppError;
use crate::layout::params::{LayoutParams, MarginPreset, SpacingMode, SpacingPatch};

pub const MIN_FONT_PERCENT: f64 = 80.0;
pub const MAX_FONT_PERCENT: f64 = 120.0;

/// Converts a slider percentage into a font scale ratio, clamping to 80–120%.
///
/// NaN cannot be clamped meaningfully and is rejected at this boundary.
pub fn font_scale_from_percent(percent: f64) -> Result<f64, AppError> {
    if percent.is_nan() {
        return Err(AppError::InvalidPercent(percent.to_string()));
    }
    Ok(percent.clamp(MIN_FONT_PERCENT, MAX_FONT_PERCENT) / 100.0)
}

/// Parses a user-entered percentage (e.g. `"95"`, `" 110.5 "`).
pub fn parse_font_percent(raw: &str) -> Result<f64, AppError> {
    let percent = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidPercent(raw.to_string()))?;
    font_scale_from_percent(percent)
}

/// The spacing fields a mode selects. Font scale is not part of the patch.
pub fn spacing_from_mode(mode: SpacingMode) -> SpacingPatch {
    match mode {
        SpacingMode::Tight => SpacingPatch {
            compact_mode: true,
            margin_preset: MarginPreset::Compact,
        },
        SpacingMode::Wide => SpacingPatch {
            compact_mode: false,
            margin_preset: MarginPreset::Wide,
        },
        SpacingMode::Normal => SpacingPatch {
            compact_mode: false,
            margin_preset: MarginPreset::Normal,
        },
    }
}

/// The mode displayed for a given pair of flags.
///
/// Many-to-one: `compact_mode` alone is enough to show `tight`, whatever the margins.
pub fn mode_from_spacing(params: &LayoutParams) -> SpacingMode {
    if params.compact_mode || params.margin_preset == MarginPreset::Compact {
        SpacingMode::Tight
    } else if params.margin_preset == MarginPreset::Wide {
        SpacingMode::Wide
    } else {
        SpacingMode::Normal
    }
}
