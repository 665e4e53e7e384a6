use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::layout::{
    font_scale_from_percent, mode_from_spacing, plan_for_form, spacing_from_mode, LayoutParams,
    MarginPreset, SpacingMode,
};
use crate::records::{
    decode_records, encode_records, join_lines, split_lines, Education, Experience, Project,
};
use crate::templates::catalog::{non_blank, TemplateCatalog, TemplateDescriptor};
use crate::templates::preview::{preview, TemplatePreview};
use crate::templates::visuals::DEFAULT_PALETTE;

/// Contact and header fields, shared by the editable form and the assembled document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub full_name: String,
    pub profile_title: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub profile_pic: String,
}

impl ResumeProfile {
    /// `email | phone | city | address`, skipping blanks.
    pub fn contact_line(&self) -> String {
        [&self.email, &self.phone, &self.city, &self.address]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// The user's editable resume content, with list sections as raw line-oriented text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    #[serde(flatten)]
    pub profile: ResumeProfile,
    pub summary: String,
    pub experiences: String,
    pub educations: String,
    pub projects: String,
    /// One skill per line.
    pub skills: String,
}

impl ResumeForm {
    /// Rebuilds editable text from a saved document.
    pub fn from_document(doc: &ResumeDocument) -> Self {
        ResumeForm {
            profile: doc.profile.clone(),
            summary: doc.summary.clone(),
            experiences: encode_records(&doc.experiences),
            educations: encode_records(&doc.educations),
            projects: encode_records(&doc.projects),
            skills: join_lines(&doc.skills),
        }
    }

    pub fn skill_list(&self) -> Vec<String> {
        split_lines(&self.skills)
    }
}

/// Presentation settings chosen for a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub template_name: String,
    pub page_size: String,
    pub accent_color_override: String,
    pub font_override: String,
    pub compact_mode: bool,
    pub ats_safe_mode: bool,
    pub font_scale: f64,
    pub margin_preset: MarginPreset,
    pub header_layout: String,
    pub layout_override: String,
    pub heading_align_override: String,
    pub body_align_override: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            template_name: "modern".to_string(),
            page_size: "letter".to_string(),
            accent_color_override: DEFAULT_PALETTE[0].to_string(),
            font_override: "Helvetica".to_string(),
            compact_mode: false,
            ats_safe_mode: false,
            font_scale: 1.0,
            margin_preset: MarginPreset::Normal,
            header_layout: "default".to_string(),
            layout_override: String::new(),
            heading_align_override: String::new(),
            body_align_override: String::new(),
        }
    }
}

impl ResumeConfig {
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            font_scale: self.font_scale,
            compact_mode: self.compact_mode,
            margin_preset: self.margin_preset,
        }
    }

    pub fn with_layout(self, params: LayoutParams) -> Self {
        Self {
            font_scale: params.font_scale,
            compact_mode: params.compact_mode,
            margin_preset: params.margin_preset,
            ..self
        }
    }

    /// Applies the auto one-page fit computed from `form`.
    pub fn fitted_to(self, form: &ResumeForm) -> Self {
        self.with_layout(plan_for_form(form))
    }

    pub fn with_spacing(self, mode: SpacingMode) -> Self {
        let params = spacing_from_mode(mode).apply_to(self.layout_params());
        self.with_layout(params)
    }

    pub fn with_font_percent(self, percent: f64) -> Result<Self, AppError> {
        let font_scale = font_scale_from_percent(percent)?;
        Ok(Self { font_scale, ..self })
    }

    pub fn spacing_mode(&self) -> SpacingMode {
        mode_from_spacing(&self.layout_params())
    }

    /// Copies a template's settings onto this config.
    ///
    /// Template, accent, font, page size, page layout and header layout are only
    /// replaced when the template sets them. Compact/ATS flags and alignment overrides
    /// always follow the template (absent means off / empty).
    pub fn apply_template(self, template: &TemplateDescriptor) -> Self {
        let s = &template.settings;
        let pick = |value: &Option<String>, current: String| {
            non_blank(value.as_deref()).map(str::to_string).unwrap_or(current)
        };

        Self {
            template_name: pick(&s.template, self.template_name),
            accent_color_override: pick(&s.accent, self.accent_color_override),
            font_override: pick(&s.font, self.font_override),
            page_size: non_blank(s.page_size.as_deref())
                .map(str::to_lowercase)
                .unwrap_or(self.page_size),
            compact_mode: s.compact_mode.unwrap_or(false),
            ats_safe_mode: s.ats_safe_mode.unwrap_or(false),
            layout_override: pick(&s.page_layout, self.layout_override),
            header_layout: pick(&s.header_layout, self.header_layout),
            heading_align_override: s.heading_align.clone().unwrap_or_default(),
            body_align_override: s.body_align.clone().unwrap_or_default(),
            ..self
        }
    }

    /// Card/preview data for the currently selected template.
    pub fn template_preview(&self, catalog: &TemplateCatalog, asset_base: Option<&str>) -> TemplatePreview {
        let entry = catalog.select_for(self);
        preview(&self.template_name, Some(&entry), asset_base)
    }
}

/// Plain-data resume payload handed to a storage or export backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub title: String,
    #[serde(flatten)]
    pub profile: ResumeProfile,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub certifications: Vec<Value>,
    pub languages: Vec<Value>,
    pub achievements: Vec<Value>,
    pub references: Vec<Value>,
    pub custom_sections: Vec<Value>,
    #[serde(flatten)]
    pub config: ResumeConfig,
}

impl ResumeDocument {
    pub fn assemble(form: &ResumeForm, config: &ResumeConfig) -> Self {
        let title = non_blank(Some(form.profile.full_name.as_str()))
            .unwrap_or("Untitled")
            .to_string();
        ResumeDocument {
            title,
            profile: form.profile.clone(),
            summary: form.summary.clone(),
            experiences: decode_records(&form.experiences),
            educations: decode_records(&form.educations),
            projects: decode_records(&form.projects),
            skills: form.skill_list(),
            config: config.clone().with_layout(config.layout_params().clamped()),
            ..ResumeDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::catalog::TemplateSettings;

    fn sample_form() -> ResumeForm {
        ResumeForm {
            profile: ResumeProfile {
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                city: "London".into(),
                ..ResumeProfile::default()
            },
            summary: "Analyst".into(),
            experiences: "Engineer | Acme | 2020 | 2023 | Built things\nIntern | Acme".into(),
            educations: "BSc, Cambridge, 2015, 2019".into(),
            projects: "Engine | Author | Rust | 2021 | | Difference engine | https://e.x".into(),
            skills: "Rust\n\n SQL ".into(),
        }
    }

    #[test]
    fn test_contact_line_skips_blanks() {
        assert_eq!(sample_form().profile.contact_line(), "ada@example.com | London");
    }

    #[test]
    fn test_assemble_decodes_every_section() {
        let doc = ResumeDocument::assemble(&sample_form(), &ResumeConfig::default());
        assert_eq!(doc.title, "Ada Lovelace");
        assert_eq!(doc.experiences.len(), 2);
        assert_eq!(doc.experiences[1].company, "Acme");
        assert_eq!(doc.educations[0].institution, "Cambridge");
        assert_eq!(doc.projects[0].link, "https://e.x");
        assert_eq!(doc.skills, vec!["Rust", "SQL"]);
        assert!(doc.certifications.is_empty());
    }

    #[test]
    fn test_untitled_when_name_blank() {
        let doc = ResumeDocument::assemble(&ResumeForm::default(), &ResumeConfig::default());
        assert_eq!(doc.title, "Untitled");
    }

    #[test]
    fn test_document_json_is_flat() {
        let doc = ResumeDocument::assemble(&sample_form(), &ResumeConfig::default());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["full_name"], "Ada Lovelace");
        assert_eq!(json["template_name"], "modern");
        assert_eq!(json["margin_preset"], "normal");
        assert_eq!(json["experiences"][0]["job_title"], "Engineer");
    }

    #[test]
    fn test_load_path_round_trips_content() {
        let form = sample_form();
        let doc = ResumeDocument::assemble(&form, &ResumeConfig::default());
        let reloaded = ResumeForm::from_document(&doc);
        assert_eq!(reloaded.skills, "Rust\nSQL");
        let again = ResumeDocument::assemble(&reloaded, &ResumeConfig::default());
        assert_eq!(again.experiences, doc.experiences);
        assert_eq!(again.educations, doc.educations);
        assert_eq!(again.projects, doc.projects);
    }

    #[test]
    fn test_assemble_clamps_out_of_range_font_scale() {
        let config = ResumeConfig {
            font_scale: 5.0,
            ..ResumeConfig::default()
        };
        let doc = ResumeDocument::assemble(&sample_form(), &config);
        assert_eq!(doc.config.font_scale, 1.2);
        assert_eq!(doc.config.template_name, "modern");
    }

    #[test]
    fn test_spacing_and_font_overrides() {
        let config = ResumeConfig::default()
            .with_spacing(SpacingMode::Wide)
            .with_font_percent(130.0)
            .unwrap();
        assert_eq!(config.margin_preset, MarginPreset::Wide);
        assert!(!config.compact_mode);
        assert_eq!(config.font_scale, 1.2);
        assert_eq!(config.spacing_mode(), SpacingMode::Wide);
    }

    #[test]
    fn test_fitted_to_dense_form_goes_compact() {
        let form = ResumeForm {
            experiences: (0..8).map(|i| format!("Role {i} | Co")).collect::<Vec<_>>().join("\n"),
            projects: "a\nb\nc".into(),
            ..ResumeForm::default()
        };
        // 8*18 + 3*14 = 186 → second tier
        let config = ResumeConfig::default().fitted_to(&form);
        assert_eq!(config.font_scale, 0.92);
        assert_eq!(config.spacing_mode(), SpacingMode::Tight);
    }

    #[test]
    fn test_apply_template_copies_present_settings() {
        let template = TemplateDescriptor {
            settings: TemplateSettings {
                template: Some("executive".into()),
                page_size: Some("A4".into()),
                accent: Some("#111827".into()),
                compact_mode: Some(true),
                heading_align: Some("center".into()),
                ..TemplateSettings::default()
            },
            ..TemplateDescriptor::default()
        };
        let base = ResumeConfig {
            ats_safe_mode: true,
            heading_align_override: "left".into(),
            body_align_override: "justify".into(),
            ..ResumeConfig::default()
        };
        let config = base.apply_template(&template);
        assert_eq!(config.template_name, "executive");
        assert_eq!(config.page_size, "a4");
        assert_eq!(config.accent_color_override, "#111827");
        assert_eq!(config.font_override, "Helvetica", "unset font keeps current");
        assert!(config.compact_mode);
        assert!(!config.ats_safe_mode, "absent flag resets to off");
        assert_eq!(config.heading_align_override, "center");
        assert_eq!(config.body_align_override, "", "absent alignment clears override");
    }

    #[test]
    fn test_template_preview_for_unknown_template_uses_config_accent() {
        let config = ResumeConfig {
            template_name: "homebrew".into(),
            accent_color_override: "#ff00aa".into(),
            ..ResumeConfig::default()
        };
        let p = config.template_preview(&TemplateCatalog::builtin(), None);
        assert_eq!(p.profile.badge, "Template");
        assert_eq!(p.profile.accent_color, "#ff00aa");
        assert_eq!(p.profile.palette[1], "#ecfeff");
    }
}
