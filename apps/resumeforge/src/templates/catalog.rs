//! Template catalog — typed descriptors, the built-in fallback catalog, lookup and search.
//!
//! Catalog files are JSON arrays of descriptors. Every field is optional on the wire;
//! missing strings deserialize as empty and missing settings as `None`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeConfig;
use crate::templates::visuals::DEFAULT_PALETTE;

/// The built-in template identifiers, in display order.
pub const TEMPLATE_CHOICES: [&str; 18] = [
    "modern",
    "corporate",
    "classic",
    "compact",
    "executive",
    "snack_gray",
    "vision_blue",
    "harsh_minimal",
    "javid_split",
    "teal_modern",
    "astra_clean",
    "metro_sidebar",
    "executive_slate",
    "creative_split",
    "mono_compact",
    "classic_clarity",
    "impact_panel",
    "contemporary_photo",
];

pub const BUILTIN_CATEGORY: &str = "Built-in";
pub const BUILTIN_MOOD: &str = "Balanced";
pub const BUILTIN_TAGLINE: &str = "ResumeForge template";
pub const BUILTIN_PAGE_SIZE: &str = "letter";
pub const BUILTIN_FONT: &str = "Helvetica";

/// Renderer settings a template applies when selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateSettings {
    pub template: Option<String>,
    pub page_size: Option<String>,
    pub font: Option<String>,
    pub accent: Option<String>,
    pub compact_mode: Option<bool>,
    pub ats_safe_mode: Option<bool>,
    pub page_layout: Option<String>,
    pub header_layout: Option<String>,
    pub heading_align: Option<String>,
    pub body_align: Option<String>,
}

/// One catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub mood: String,
    pub tagline: String,
    pub settings: TemplateSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl TemplateDescriptor {
    /// The built-in descriptor for a template name.
    pub fn builtin(name: &str) -> Self {
        TemplateDescriptor {
            id: format!("tpl-{name}"),
            name: title_case(name),
            category: BUILTIN_CATEGORY.to_string(),
            mood: BUILTIN_MOOD.to_string(),
            tagline: BUILTIN_TAGLINE.to_string(),
            settings: TemplateSettings {
                template: Some(name.to_string()),
                page_size: Some(BUILTIN_PAGE_SIZE.to_string()),
                font: Some(BUILTIN_FONT.to_string()),
                accent: Some(DEFAULT_PALETTE[0].to_string()),
                ..TemplateSettings::default()
            },
            palette: None,
            thumbnail: None,
        }
    }

    /// `settings.template`, if set and non-blank.
    pub fn template_key(&self) -> Option<&str> {
        non_blank(self.settings.template.as_deref())
    }

    fn matches_template(&self, template_name: &str) -> bool {
        self.template_key()
            .is_some_and(|k| k.eq_ignore_ascii_case(template_name.trim()))
    }

    fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.category, self.mood, self.tagline
        )
        .to_lowercase()
    }
}

/// Ordered, read-only set of template descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    entries: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    pub fn new(entries: Vec<TemplateDescriptor>) -> Self {
        Self { entries }
    }

    /// The catalog used when no external catalog is available.
    pub fn builtin() -> Self {
        Self::new(TEMPLATE_CHOICES.iter().map(|n| TemplateDescriptor::builtin(n)).collect())
    }

    /// Parses a JSON array of descriptors. An empty array yields the built-in catalog.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let entries: Vec<TemplateDescriptor> =
            serde_json::from_str(json).map_err(|e| AppError::Catalog(e.to_string()))?;
        if entries.is_empty() {
            return Ok(Self::builtin());
        }
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Loads `path` when given, falling back to the built-in catalog on any failure.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(catalog) => {
                info!("Loaded {} templates from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                warn!(
                    "Template catalog {} unavailable ({e}); using built-in catalog",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    pub fn entries(&self) -> &[TemplateDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose `settings.template` matches, ignoring ASCII case.
    pub fn find(&self, template_name: &str) -> Option<&TemplateDescriptor> {
        self.entries.iter().find(|t| t.matches_template(template_name))
    }

    /// Case-insensitive substring search over name, category, mood and tagline.
    /// A blank query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&TemplateDescriptor> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|t| t.search_haystack().contains(&q))
            .collect()
    }

    /// The descriptor used to preview the template currently chosen in `config`.
    ///
    /// Chain: this catalog, then the built-in catalog, then a descriptor synthesized
    /// from the config's template name and accent override.
    pub fn select_for(&self, config: &ResumeConfig) -> TemplateDescriptor {
        if let Some(found) = self.find(&config.template_name) {
            return found.clone();
        }
        if let Some(found) = Self::builtin().find(&config.template_name) {
            return found.clone();
        }

        let accent = non_blank(Some(config.accent_color_override.as_str()))
            .unwrap_or(DEFAULT_PALETTE[0])
            .to_string();
        TemplateDescriptor {
            settings: TemplateSettings {
                template: Some(config.template_name.clone()),
                accent: non_blank(Some(config.accent_color_override.as_str())).map(str::to_string),
                ..TemplateSettings::default()
            },
            palette: Some(vec![
                accent,
                DEFAULT_PALETTE[1].to_string(),
                DEFAULT_PALETTE[2].to_string(),
            ]),
            ..TemplateDescriptor::default()
        }
    }
}

/// `snack_gray` → `Snack Gray`.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}
