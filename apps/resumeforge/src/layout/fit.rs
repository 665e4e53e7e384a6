//! Adaptive one-page fit — derives font scale and spacing from content volume.
//!
//! # Fit signal
//! `18·experiences + 10·educations + 14·projects + 3·skills + ⌊summary_chars / 26⌋`
//!
//! The weights approximate the vertical space each entity takes on a rendered page.
//! They are fixed policy values and must not be tuned independently of the renderer.
//!
//! # Tiers (first match wins, evaluated top-down)
//! - signal > 190 → 0.86, compact, compact margins
//! - signal > 145 → 0.92, compact, compact margins
//! - signal > 110 → 0.96, normal
//! - otherwise    → 1.00, normal

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::params::{LayoutParams, MarginPreset};
use crate::models::resume::ResumeForm;
use crate::records::split_lines;

// ────────────────────────────────────────────────────────────────────────────
// Signal weights
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_WEIGHT: u64 = 18;
pub const EDUCATION_WEIGHT: u64 = 10;
pub const PROJECT_WEIGHT: u64 = 14;
pub const SKILL_WEIGHT: u64 = 3;
/// Summary characters that count as one signal unit.
pub const SUMMARY_CHARS_PER_UNIT: u64 = 26;

/// (exclusive lower bound, font_scale, compact_mode, margin_preset)
const FIT_TIERS: [(u64, f64, bool, MarginPreset); 3] = [
    (190, 0.86, true, MarginPreset::Compact),
    (145, 0.92, true, MarginPreset::Compact),
    (110, 0.96, false, MarginPreset::Normal),
];

/// Entity counts feeding the fit signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitCounts {
    pub experiences: usize,
    pub educations: usize,
    pub projects: usize,
    pub skills: usize,
}

impl FitCounts {
    /// Counts non-empty lines in each of the form's list fields.
    pub fn from_form(form: &ResumeForm) -> Self {
        Self {
            experiences: split_lines(&form.experiences).len(),
            educations: split_lines(&form.educations).len(),
            projects: split_lines(&form.projects).len(),
            skills: split_lines(&form.skills).len(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Planner
// ────────────────────────────────────────────────────────────────────────────

/// Computes the scalar "how much must fit on the page" signal.
///
/// Monotone non-decreasing in every count and in `summary_len`.
pub fn compute_signal(counts: &FitCounts, summary_len: usize) -> u64 {
    EXPERIENCE_WEIGHT * counts.experiences as u64
        + EDUCATION_WEIGHT * counts.educations as u64
        + PROJECT_WEIGHT * counts.projects as u64
        + SKILL_WEIGHT * counts.skills as u64
        + summary_len as u64 / SUMMARY_CHARS_PER_UNIT
}

/// Maps a signal onto the tier table.
pub fn plan_from_signal(signal: u64) -> LayoutParams {
    FIT_TIERS
        .iter()
        .find(|(floor, ..)| signal > *floor)
        .map(|&(_, font_scale, compact_mode, margin_preset)| LayoutParams {
            font_scale,
            compact_mode,
            margin_preset,
        })
        .unwrap_or_default()
}

/// Computes layout parameters from entity counts and summary length.
pub fn plan_layout(counts: &FitCounts, summary_len: usize) -> LayoutParams {
    let signal = compute_signal(counts, summary_len);
    let params = plan_from_signal(signal);
    debug!(
        signal,
        font_percent = params.font_percent(),
        compact = params.compact_mode,
        margins = %params.margin_preset,
        "auto one-page fit planned"
    );
    params
}

/// Plans straight from raw form text. Summary length is the trimmed summary's
/// character count.
pub fn plan_for_form(form: &ResumeForm) -> LayoutParams {
    let summary_len = form.summary.trim().chars().count();
    plan_layout(&FitCounts::from_form(form), summary_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(experiences: usize, educations: usize, projects: usize, skills: usize) -> FitCounts {
        FitCounts {
            experiences,
            educations,
            projects,
            skills,
        }
    }

    #[test]
    fn test_signal_weights() {
        // 18*2 + 10*1 + 14*3 + 3*10 + 130/26 = 36 + 10 + 42 + 30 + 5 = 123
        assert_eq!(compute_signal(&counts(2, 1, 3, 10), 130), 123);
    }

    #[test]
    fn test_summary_contribution_floors() {
        assert_eq!(compute_signal(&FitCounts::default(), 25), 0);
        assert_eq!(compute_signal(&FitCounts::default(), 26), 1);
        assert_eq!(compute_signal(&FitCounts::default(), 51), 1);
    }

    #[test]
    fn test_signal_monotone_in_each_count() {
        let base = counts(3, 2, 2, 8);
        let s = compute_signal(&base, 200);
        assert!(compute_signal(&counts(4, 2, 2, 8), 200) >= s);
        assert!(compute_signal(&counts(3, 3, 2, 8), 200) >= s);
        assert!(compute_signal(&counts(3, 2, 3, 8), 200) >= s);
        assert!(compute_signal(&counts(3, 2, 2, 9), 200) >= s);
        assert!(compute_signal(&base, 400) >= s);
    }

    #[test]
    fn test_tier_boundaries() {
        let top = plan_from_signal(191);
        assert_eq!(
            (top.font_scale, top.compact_mode, top.margin_preset),
            (0.86, true, MarginPreset::Compact)
        );

        let at_190 = plan_from_signal(190);
        assert_eq!(
            (at_190.font_scale, at_190.compact_mode, at_190.margin_preset),
            (0.92, true, MarginPreset::Compact)
        );

        let at_145 = plan_from_signal(145);
        assert_eq!(at_145.font_scale, 0.96);
        assert!(!at_145.compact_mode);

        let at_110 = plan_from_signal(110);
        assert_eq!(at_110, LayoutParams::default());

        let zero = plan_from_signal(0);
        assert_eq!(
            (zero.font_scale, zero.compact_mode, zero.margin_preset),
            (1.0, false, MarginPreset::Normal)
        );
    }

    #[test]
    fn test_plan_for_form_counts_lines() {
        let form = ResumeForm {
            experiences: "a | b\n\nc | d\ne\nf\ng\nh\ni\nj\nk\nl".to_string(), // 10 lines → 180
            skills: "Rust\nGo\nSQL\nC".to_string(),                             // 4 → 12
            summary: "  short  ".to_string(),
            ..ResumeForm::default()
        };
        // 180 + 12 = 192 > 190
        let params = plan_for_form(&form);
        assert_eq!(params.font_scale, 0.86);
        assert_eq!(params.margin_preset, MarginPreset::Compact);
    }

    #[test]
    fn test_empty_form_is_full_size() {
        assert_eq!(plan_for_form(&ResumeForm::default()), LayoutParams::default());
    }
}
