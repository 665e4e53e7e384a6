//! Command-line caller for the core: reads plain text or JSON, prints JSON (or text for
//! `encode`). Stands in for the wizard UI / backend that normally drives the core.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::layout::{compute_signal, mode_from_spacing, plan_layout, FitCounts, LayoutParams, SpacingMode};
use crate::models::resume::{ResumeConfig, ResumeDocument, ResumeForm};
use crate::records::{
    decode_records, encode_records, Education, Experience, LineRecord, Project, RecordKind,
};
use crate::templates::{preview, TemplateCatalog};

#[derive(Debug, Parser)]
#[command(name = "resumeforge", version, about = "Resume line-record codec, one-page fit planner and template visuals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode line-oriented text into records (JSON array).
    Decode {
        #[arg(long)]
        kind: RecordKind,
        /// Input file; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Encode a JSON array of records back into editable text.
    Encode {
        #[arg(long)]
        kind: RecordKind,
        input: Option<PathBuf>,
    },
    /// Plan font scale and spacing for a resume form (JSON).
    Plan { input: Option<PathBuf> },
    /// Resolve a template's visual profile and thumbnail.
    Resolve { template: String },
    /// Search the template catalog by name, category, mood or tagline.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Assemble a storable resume document from `{form, config}` JSON.
    Assemble { input: Option<PathBuf> },
}

/// Input for `assemble`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleRequest {
    pub form: ResumeForm,
    pub config: ResumeConfig,
    /// Apply the auto one-page fit before assembling.
    pub auto_fit: bool,
    /// Spacing override applied after the fit.
    pub spacing: Option<SpacingMode>,
    /// Font slider override (percent) applied last.
    pub font_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub counts: FitCounts,
    pub summary_length: usize,
    pub signal: u64,
    pub layout: LayoutParams,
    pub spacing_mode: SpacingMode,
}

pub fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let output = match &cli.command {
        Command::Decode { kind, input } => {
            let text = read_input(input.as_deref())?;
            serde_json::to_string_pretty(&decode_as_json(*kind, &text)?)?
        }
        Command::Encode { kind, input } => {
            let json = read_input(input.as_deref())?;
            encode_from_json(*kind, &json)?
        }
        Command::Plan { input } => {
            let form: ResumeForm = serde_json::from_str(&read_input(input.as_deref())?)?;
            serde_json::to_string_pretty(&plan(&form))?
        }
        Command::Resolve { template } => {
            let catalog = TemplateCatalog::load_or_builtin(config.catalog_path.as_deref());
            let entry = catalog.find(template);
            let p = preview(template, entry, config.asset_base.as_deref());
            serde_json::to_string_pretty(&p)?
        }
        Command::Search { query } => {
            let catalog = TemplateCatalog::load_or_builtin(config.catalog_path.as_deref());
            serde_json::to_string_pretty(&catalog.search(query))?
        }
        Command::Assemble { input } => {
            let request: AssembleRequest = serde_json::from_str(&read_input(input.as_deref())?)?;
            serde_json::to_string_pretty(&assemble(request)?)?
        }
    };
    Ok(output)
}

pub fn decode_as_json(kind: RecordKind, text: &str) -> Result<Value, AppError> {
    let value = match kind {
        RecordKind::Experience => serde_json::to_value(decode_records::<Experience>(text))?,
        RecordKind::Education => serde_json::to_value(decode_records::<Education>(text))?,
        RecordKind::Project => serde_json::to_value(decode_records::<Project>(text))?,
    };
    Ok(value)
}

pub fn encode_from_json(kind: RecordKind, json: &str) -> Result<String, AppError> {
    match kind {
        RecordKind::Experience => encode_json_as::<Experience>(json),
        RecordKind::Education => encode_json_as::<Education>(json),
        RecordKind::Project => encode_json_as::<Project>(json),
    }
}

fn encode_json_as<R>(json: &str) -> Result<String, AppError>
where
    R: LineRecord + for<'de> Deserialize<'de>,
{
    let records: Vec<R> = serde_json::from_str(json)?;
    Ok(encode_records(&records))
}

pub fn plan(form: &ResumeForm) -> PlanResponse {
    let counts = FitCounts::from_form(form);
    let summary_length = form.summary.trim().chars().count();
    let layout = plan_layout(&counts, summary_length);
    info!(
        "Auto 1-Page Fit applied: {}% font, {} mode",
        layout.font_percent(),
        if layout.compact_mode { "compact" } else { "normal" }
    );
    PlanResponse {
        counts,
        summary_length,
        signal: compute_signal(&counts, summary_length),
        layout,
        spacing_mode: mode_from_spacing(&layout),
    }
}

pub fn assemble(request: AssembleRequest) -> Result<ResumeDocument, AppError> {
    let mut config = request.config;
    if request.auto_fit {
        config = config.fitted_to(&request.form);
    }
    if let Some(mode) = request.spacing {
        config = config.with_spacing(mode);
    }
    if let Some(percent) = request.font_percent {
        config = config.with_font_percent(percent)?;
    }
    Ok(ResumeDocument::assemble(&request.form, &config))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .map_err(AppError::from)
            .with_context(|| format!("failed to read input file {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(AppError::from)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Error body printed by the binary on failure.
pub fn error_json(err: &anyhow::Error) -> Value {
    let code = err
        .downcast_ref::<AppError>()
        .map(AppError::code)
        .unwrap_or("INTERNAL_ERROR");
    json!({
        "error": {
            "code": code,
            "message": format!("{err:#}")
        }
    })
}
