use serde::{Deserialize, Serialize};

use crate::templates::catalog::TemplateDescriptor;
use crate::templates::thumbnail::resolve_thumbnail;
use crate::templates::visuals::{lookup_key, resolve_visual, TemplateVisualProfile};

/// Everything a template card or preview pane needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePreview {
    pub template: String,
    pub profile: TemplateVisualProfile,
    pub thumbnail: String,
}

pub fn preview(
    template_id: &str,
    entry: Option<&TemplateDescriptor>,
    asset_base: Option<&str>,
) -> TemplatePreview {
    TemplatePreview {
        template: lookup_key(template_id, entry),
        profile: resolve_visual(template_id, entry),
        thumbnail: resolve_thumbnail(template_id, entry, asset_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::catalog::TemplateCatalog;

    #[test]
    fn test_preview_of_builtin_entry() {
        let catalog = TemplateCatalog::builtin();
        let entry = catalog.find("vision_blue");
        let p = preview("vision_blue", entry, None);
        assert_eq!(p.template, "vision_blue");
        assert_eq!(p.profile.badge, "Academic");
        // built-in entries carry an accent but no palette
        assert_eq!(p.profile.accent_color, "#0f766e");
        assert!(p.thumbnail.starts_with("data:image/svg+xml;base64,"));
    }
}
