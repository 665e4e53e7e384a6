//! Template visual resolver — maps a template id (plus optional catalog entry) to the
//! tone, badge and colours used for cards and previews.
//!
//! # Fallback chain
//! - Lookup key: `entry.settings.template`, else the given id, else `modern`; lowercased.
//! - Tone/badge: fixed table; unknown keys get `modern` / `Template`.
//! - Palette: the entry's palette when it has at least two colours (third padded with
//!   white), else `#0f766e, #ecfeff, #ffffff`.
//! - Accent: `entry.settings.accent`, else the first palette colour.
//!
//! Resolution never fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::templates::catalog::{non_blank, TemplateDescriptor};

pub const DEFAULT_TEMPLATE: &str = "modern";
pub const DEFAULT_TONE: &str = "modern";
pub const DEFAULT_BADGE: &str = "Template";
pub const DEFAULT_PALETTE: [&str; 3] = ["#0f766e", "#ecfeff", "#ffffff"];

/// (template key, tone, badge)
const TEMPLATE_VISUALS: [(&str, &str, &str); 18] = [
    ("modern", "modern", "Modern"),
    ("corporate", "corporate", "Corporate"),
    ("classic", "classic", "Classic"),
    ("compact", "compact", "Compact"),
    ("executive", "executive", "Executive"),
    ("snack_gray", "snack", "Creative"),
    ("vision_blue", "vision", "Academic"),
    ("harsh_minimal", "minimal", "Minimal"),
    ("javid_split", "split", "Two-Column"),
    ("teal_modern", "teal", "Fresh"),
    ("astra_clean", "astra", "ATS Friendly"),
    ("metro_sidebar", "metro", "Sidebar"),
    ("executive_slate", "slate", "Executive"),
    ("creative_split", "creative", "Creative"),
    ("mono_compact", "mono", "Mono"),
    ("classic_clarity", "clarity", "Classic"),
    ("impact_panel", "impact", "Impact"),
    ("contemporary_photo", "photo", "Photo"),
];

/// On-screen presentation of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVisualProfile {
    pub tone: String,
    pub badge: String,
    pub accent_color: String,
    /// [primary, secondary, tertiary]
    pub palette: [String; 3],
}

impl TemplateVisualProfile {
    /// CSS custom properties consumed by template cards and the preview pane.
    pub fn css_vars(&self) -> [(&'static str, &str); 4] {
        [
            ("--tpl-accent", self.accent_color.as_str()),
            ("--tpl-bg1", self.palette[0].as_str()),
            ("--tpl-bg2", self.palette[1].as_str()),
            ("--tpl-bg3", self.palette[2].as_str()),
        ]
    }
}

/// Normalized lookup key for a template id and optional catalog entry.
pub fn lookup_key(template_id: &str, entry: Option<&TemplateDescriptor>) -> String {
    entry
        .and_then(TemplateDescriptor::template_key)
        .or_else(|| non_blank(Some(template_id)))
        .unwrap_or(DEFAULT_TEMPLATE)
        .to_lowercase()
}

/// Tone and badge for a normalized key, if it is a known template.
pub fn tone_and_badge(key: &str) -> Option<(&'static str, &'static str)> {
    TEMPLATE_VISUALS
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|&(_, tone, badge)| (tone, badge))
}

pub fn is_known_template(key: &str) -> bool {
    tone_and_badge(key).is_some()
}

/// Resolves the visual profile for a template.
pub fn resolve_visual(template_id: &str, entry: Option<&TemplateDescriptor>) -> TemplateVisualProfile {
    let key = lookup_key(template_id, entry);
    let (tone, badge) = tone_and_badge(&key).unwrap_or_else(|| {
        debug!(template = %key, "unknown template id, using fallback visuals");
        (DEFAULT_TONE, DEFAULT_BADGE)
    });

    let palette = resolve_palette(entry.and_then(|e| e.palette.as_deref()));
    let accent_color = entry
        .and_then(|e| non_blank(e.settings.accent.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| palette[0].clone());

    TemplateVisualProfile {
        tone: tone.to_string(),
        badge: badge.to_string(),
        accent_color,
        palette,
    }
}

/// Uses the catalog palette only when it names at least two colours.
/// Blank slots and a missing third slot take the default palette's colour.
fn resolve_palette(custom: Option<&[String]>) -> [String; 3] {
    let custom = custom.filter(|p| p.len() >= 2).unwrap_or_default();
    std::array::from_fn(|i| {
        non_blank(custom.get(i).map(String::as_str))
            .unwrap_or(DEFAULT_PALETTE[i])
            .to_string()
    })
}
