//! Template thumbnails — catalog asset paths, or a procedurally drawn placeholder.
//!
//! Placeholders are SVG sketches of a page layout, tinted with the template's assigned
//! accent and returned as a base64 `data:` URI. Same key in, same URI out, so every
//! known template has a renderable card with no asset server reachable.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::templates::catalog::{non_blank, title_case, TemplateDescriptor};
use crate::templates::visuals::{is_known_template, lookup_key, DEFAULT_PALETTE, DEFAULT_TEMPLATE};

/// Sketch style of a placeholder thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbVariant {
    Modern,
    Corporate,
    Classic,
    Compact,
    Executive,
    Minimal,
    Sidebar,
    Creative,
    Impact,
    Photo,
}

/// (template key, placeholder accent, sketch)
const THUMB_STYLES: [(&str, &str, ThumbVariant); 18] = [
    ("modern", "#0f766e", ThumbVariant::Modern),
    ("corporate", "#1e3a8a", ThumbVariant::Corporate),
    ("classic", "#374151", ThumbVariant::Classic),
    ("compact", "#0f766e", ThumbVariant::Compact),
    ("executive", "#111827", ThumbVariant::Executive),
    ("snack_gray", "#ea580c", ThumbVariant::Creative),
    ("vision_blue", "#2563eb", ThumbVariant::Modern),
    ("harsh_minimal", "#1f2937", ThumbVariant::Minimal),
    ("javid_split", "#6b7280", ThumbVariant::Sidebar),
    ("teal_modern", "#0d9488", ThumbVariant::Modern),
    ("astra_clean", "#0f766e", ThumbVariant::Minimal),
    ("metro_sidebar", "#155e75", ThumbVariant::Sidebar),
    ("executive_slate", "#1f2937", ThumbVariant::Executive),
    ("creative_split", "#9333ea", ThumbVariant::Creative),
    ("mono_compact", "#111827", ThumbVariant::Compact),
    ("classic_clarity", "#2563eb", ThumbVariant::Classic),
    ("impact_panel", "#6b7280", ThumbVariant::Impact),
    ("contemporary_photo", "#1d4ed8", ThumbVariant::Photo),
];

const INK: &str = "#111827";
const MUTED: &str = "#64748b";
const LINE_DARK: &str = "#94a3b8";
const LINE: &str = "#cbd5e1";
const LINE_LIGHT: &str = "#e2e8f0";
const LINE_PALE: &str = "#dbe4ee";
const WHITE: &str = "#ffffff";

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Thumbnail for a template: the catalog's own asset when it has one, otherwise the
/// placeholder for the template key (unknown keys get the `modern` placeholder).
pub fn resolve_thumbnail(
    template_id: &str,
    entry: Option<&TemplateDescriptor>,
    asset_base: Option<&str>,
) -> String {
    if let Some(path) = entry.and_then(|e| non_blank(e.thumbnail.as_deref())) {
        return to_absolute_asset(path, asset_base);
    }
    placeholder_thumbnail(&lookup_key(template_id, entry))
}

/// Absolute URLs, `data:` URIs and relative paths pass through. Root-relative paths
/// are prefixed with `asset_base` when the frontend runs detached from the asset server.
pub fn to_absolute_asset(raw: &str, asset_base: Option<&str>) -> String {
    let path = raw.trim();
    let passthrough = path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
        || !path.starts_with('/');
    match asset_base {
        Some(base) if !passthrough => format!("{}{path}", base.trim_end_matches('/')),
        _ => path.to_string(),
    }
}

pub fn thumb_style(key: &str) -> Option<(&'static str, ThumbVariant)> {
    THUMB_STYLES
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|&(_, accent, variant)| (accent, variant))
}

/// Placeholder `data:` URI for a normalized template key.
pub fn placeholder_thumbnail(key: &str) -> String {
    let key = if is_known_template(key) { key } else { DEFAULT_TEMPLATE };
    let (accent, variant) = thumb_style(key).unwrap_or((DEFAULT_PALETTE[0], ThumbVariant::Modern));
    svg_data_uri(&render_placeholder_svg(key, accent, variant))
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing
// ────────────────────────────────────────────────────────────────────────────

/// Draws the full 600×360 placeholder card.
pub fn render_placeholder_svg(label: &str, accent: &str, variant: ThumbVariant) -> String {
    let mut sketch = Sketch::new(accent);
    sketch.draw(variant);
    let label = escape_xml(&title_case(label));

    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="360" viewBox="0 0 600 360">"##,
            r##"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"##,
            r##"<stop offset="0%" stop-color="{accent}" stop-opacity="0.20"/>"##,
            r##"<stop offset="100%" stop-color="#ffffff"/></linearGradient></defs>"##,
            r##"<rect x="0" y="0" width="600" height="360" fill="#f8fafc"/>"##,
            r##"<rect x="16" y="16" width="568" height="328" rx="12" fill="url(#g)" stroke="{accent}" stroke-opacity="0.35"/>"##,
            "{body}",
            r##"<rect x="38" y="274" width="160" height="42" rx="9" fill="{accent}" fill-opacity="0.88"/>"##,
            r##"<text x="300" y="328" text-anchor="middle" font-family="Segoe UI, Arial" font-size="16" fill="#334155">{label}</text>"##,
            "</svg>"
        ),
        accent = accent,
        body = sketch.out,
        label = label,
    )
}

struct Sketch<'a> {
    accent: &'a str,
    out: String,
}

impl<'a> Sketch<'a> {
    fn new(accent: &'a str) -> Self {
        Self {
            accent,
            out: String::new(),
        }
    }

    /// Rounded bar (pill) in a fixed colour.
    fn bar(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str, opacity: f32) {
        self.out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{}" fill="{fill}" fill-opacity="{opacity}"/>"#,
            h / 2.0
        ));
    }

    fn accent_bar(&mut self, x: f32, y: f32, w: f32, h: f32, opacity: f32) {
        let accent = self.accent;
        self.bar(x, y, w, h, accent, opacity);
    }

    /// Square-cornered accent wash.
    fn wash(&mut self, x: f32, y: f32, w: f32, h: f32, opacity: f32) {
        self.out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{}" fill-opacity="{opacity}"/>"#,
            self.accent
        ));
    }

    /// Tinted column with an accent outline.
    fn column(&mut self, x: f32, w: f32) {
        self.out.push_str(&format!(
            r#"<rect x="{x}" y="24" width="{w}" height="312" rx="10" fill="{a}" fill-opacity="0.14" stroke="{a}" stroke-opacity="0.3"/>"#,
            a = self.accent
        ));
    }

    /// White card with a faint accent outline.
    fn card(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="8" fill="{WHITE}" stroke="{}" stroke-opacity="0.35"/>"#,
            self.accent
        ));
    }

    fn avatar(&mut self, cx: f32, cy: f32, r: f32) {
        self.out.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{WHITE}" stroke="{}" stroke-opacity="0.7" stroke-width="2"/>"#,
            self.accent
        ));
    }

    /// Name line plus subtitle line.
    fn heading(&mut self, x: f32, y: f32, w: f32) {
        self.bar(x, y, w, 12.0, INK, 0.88);
        self.bar(x, y + 20.0, w * 0.7, 8.0, MUTED, 0.75);
    }

    /// `count` sections, each a divider rule followed by two text lines.
    fn sections(&mut self, x: f32, y: f32, w: f32, count: usize) {
        for i in 0..count {
            let top = y + 66.0 * i as f32;
            let rule = if i == 0 { LINE } else { LINE_LIGHT };
            self.bar(x, top, w, 5.0, rule, 1.0);
            self.bar(x, top + 20.0, w * (0.48 - 0.03 * i as f32), 8.0, LINE_DARK, 1.0);
            self.bar(x, top + 36.0, w * (0.36 - 0.02 * i as f32), 8.0, LINE, 1.0);
        }
    }

    fn draw(&mut self, variant: ThumbVariant) {
        match variant {
            ThumbVariant::Modern => {
                self.accent_bar(38.0, 40.0, 220.0, 12.0, 0.85);
                self.bar(38.0, 60.0, 160.0, 8.0, MUTED, 0.75);
                self.sections(38.0, 90.0, 524.0, 3);
                self.card(318.0, 110.0, 244.0, 90.0);
            }
            ThumbVariant::Corporate => {
                self.column(26.0, 120.0);
                self.accent_bar(42.0, 46.0, 90.0, 10.0, 0.9);
                self.bar(42.0, 68.0, 74.0, 7.0, MUTED, 1.0);
                self.accent_bar(164.0, 40.0, 398.0, 14.0, 0.8);
                self.bar(164.0, 66.0, 230.0, 8.0, MUTED, 1.0);
                self.sections(164.0, 92.0, 398.0, 3);
            }
            ThumbVariant::Classic => {
                self.accent_bar(38.0, 44.0, 524.0, 2.5, 0.6);
                self.accent_bar(38.0, 54.0, 524.0, 1.4, 0.35);
                self.bar(188.0, 70.0, 224.0, 13.0, INK, 0.88);
                self.bar(232.0, 92.0, 136.0, 8.0, MUTED, 1.0);
                self.sections(38.0, 122.0, 524.0, 2);
            }
            ThumbVariant::Compact => {
                self.accent_bar(38.0, 38.0, 240.0, 11.0, 0.88);
                self.bar(38.0, 56.0, 170.0, 7.0, MUTED, 1.0);
                for i in 0..12 {
                    let fill = if i % 2 == 0 { LINE } else { LINE_PALE };
                    self.bar(38.0, 76.0 + 16.0 * i as f32, 524.0, 4.0, fill, 1.0);
                }
            }
            ThumbVariant::Executive => {
                self.accent_bar(24.0, 24.0, 552.0, 36.0, 0.82);
                self.bar(200.0, 36.0, 200.0, 12.0, WHITE, 0.95);
                self.heading(38.0, 82.0, 320.0);
                self.sections(38.0, 126.0, 524.0, 2);
                self.card(380.0, 82.0, 182.0, 112.0);
            }
            ThumbVariant::Minimal => {
                self.bar(180.0, 48.0, 240.0, 12.0, INK, 0.88);
                self.bar(220.0, 72.0, 160.0, 7.0, MUTED, 1.0);
                self.bar(38.0, 102.0, 524.0, 2.0, LINE_DARK, 1.0);
                for i in 0..3 {
                    let top = 124.0 + 48.0 * i as f32;
                    self.bar(80.0, top, 440.0, 6.0, LINE, 1.0);
                    self.bar(110.0, top + 16.0, 380.0, 6.0, LINE_PALE, 1.0);
                }
            }
            ThumbVariant::Sidebar => {
                self.column(24.0, 170.0);
                self.avatar(109.0, 62.0, 24.0);
                self.accent_bar(52.0, 96.0, 114.0, 9.0, 0.9);
                self.bar(52.0, 114.0, 84.0, 7.0, MUTED, 1.0);
                for (i, w) in [120.0, 105.0, 95.0].into_iter().enumerate() {
                    self.bar(52.0, 148.0 + 12.0 * i as f32, w, 4.0, LINE_DARK, 1.0);
                }
                self.heading(212.0, 42.0, 348.0);
                self.sections(212.0, 92.0, 348.0, 3);
            }
            ThumbVariant::Creative => {
                self.accent_bar(24.0, 24.0, 180.0, 26.0, 0.78);
                self.accent_bar(396.0, 24.0, 180.0, 26.0, 0.4);
                self.heading(38.0, 66.0, 230.0);
                self.sections(38.0, 112.0, 524.0, 2);
                self.card(318.0, 132.0, 244.0, 62.0);
                self.accent_bar(456.0, 312.0, 120.0, 24.0, 0.45);
            }
            ThumbVariant::Impact => {
                self.wash(0.0, 0.0, 600.0, 52.0, 0.12);
                self.wash(0.0, 52.0, 66.0, 308.0, 0.26);
                self.heading(86.0, 22.0, 224.0);
                self.sections(86.0, 72.0, 490.0, 3);
            }
            ThumbVariant::Photo => {
                self.accent_bar(38.0, 34.0, 524.0, 12.0, 0.58);
                self.avatar(96.0, 86.0, 36.0);
                self.heading(148.0, 72.0, 220.0);
                self.sections(38.0, 132.0, 524.0, 2);
                self.card(398.0, 154.0, 164.0, 96.0);
            }
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
