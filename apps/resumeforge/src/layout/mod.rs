// Adaptive one-page fit: content-volume signal, tier table, and manual overrides.
// Pure functions; no state is kept between calls.

pub mod fit;
pub mod params;
pub mod spacing;

pub use fit::{compute_signal, plan_for_form, plan_from_signal, plan_layout, FitCounts};
pub use params::{LayoutParams, MarginPreset, SpacingMode, SpacingPatch};
pub use spacing::{font_scale_from_percent, mode_from_spacing, parse_font_percent, spacing_from_mode};
