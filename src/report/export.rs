//! Summary export functionality
//!
//! The export is the one explicit, user-triggered side effect of the
//! questionnaire: a human-readable text file (and optionally a structured
//! JSON file) written under fixed filenames into a chosen directory. The
//! file handle is written once, flushed and released immediately.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pathway::{Answers, Guidance, RecommendationView};

/// Fixed filename of the text summary.
pub const TEXT_FILENAME: &str = "pathway-summary.txt";

/// Fixed filename of the JSON summary.
pub const JSON_FILENAME: &str = "pathway-summary.json";

/// Metadata stamped into the JSON export
#[derive(Serialize)]
struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    timestamp: String,
    /// Pathfinder version
    pathfinder_version: String,
}

/// Complete JSON export: metadata, the raw answers and the resolved view
#[derive(Serialize)]
struct SummaryExport<'a> {
    metadata: ExportMetadata,
    profile: &'a Answers,
    recommendations: &'a RecommendationView,
}

fn metadata() -> ExportMetadata {
    ExportMetadata {
        timestamp: Utc::now().to_rfc3339(),
        pathfinder_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Build the human-readable summary text.
pub fn summary_text(answers: &Answers, view: &RecommendationView) -> String {
    let mut out = String::new();
    let line = "=".repeat(64);

    out.push_str(&format!(
        "Pathfinder summary \u{2014} generated {} (v{})\n{line}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC"),
        env!("CARGO_PKG_VERSION"),
    ));

    let fmt = |value: Option<String>| value.unwrap_or_else(|| "not specified yet".to_string());
    out.push_str("Profile\n");
    out.push_str(&format!(
        "  Home country:        {}\n",
        fmt(answers.home_country.map(|v| v.label().to_string()))
    ));
    out.push_str(&format!(
        "  Qualification level: {} ({})\n",
        view.level_label, view.equivalent_label
    ));
    out.push_str(&format!(
        "  Study mode:          {}\n",
        fmt(answers.study_mode.map(|v| v.label().to_string()))
    ));
    out.push_str(&format!(
        "  Funding:             {}\n",
        fmt(answers.funding.map(|v| v.label().to_string()))
    ));
    out.push_str(&format!(
        "  Cost preference:     {}\n",
        fmt(answers.cost.map(|v| v.label().to_string()))
    ));
    let list = |items: Vec<String>| {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    };
    out.push_str(&format!(
        "  Circumstances:       {}\n",
        list(answers.support.iter().map(|v| v.label().to_string()).collect())
    ));
    out.push_str(&format!(
        "  Accommodation:       {}\n",
        list(
            answers
                .accommodation
                .iter()
                .map(|v| v.label().to_string())
                .collect()
        )
    ));
    out.push_str(&format!(
        "  Interests:           {}\n",
        list(answers.interests.iter().map(|v| v.label().to_string()).collect())
    ));

    out.push_str(&format!("\n{}\n", view.headline));
    if view.used_default_destinations {
        out.push_str("Destinations below are the default suggestions.\n");
    }

    for block in &view.blocks {
        out.push_str(&format!("\n{}\n{}\n", block.country.label(), "-".repeat(32)));
        out.push_str(&format!("  Cost of living: {}\n", block.cost_of_living));
        match &block.guidance {
            Guidance::Bundle(bundle) => {
                let categories: [(&str, &Vec<String>); 6] = [
                    ("Qualification routes", &bundle.qualification_routes),
                    ("Accommodation", &bundle.accommodation),
                    ("Work & study", &bundle.work_and_study),
                    ("EU funding", &bundle.eu_funding),
                    ("National funding", &bundle.national_funding),
                    ("Low-income support", &bundle.low_income_support),
                ];
                for (name, items) in categories {
                    out.push_str(&format!("  {}:\n", name));
                    for item in items {
                        out.push_str(&format!("    - {}\n", item));
                    }
                }
                if let Some(note) = &bundle.note {
                    out.push_str(&format!("  Note: {}\n", note));
                }
            }
            Guidance::Unavailable(message) => {
                out.push_str(&format!("  {}\n", message));
            }
        }
    }

    out.push_str("\nHelpful tips\n");
    for tip in &view.tips {
        out.push_str(&format!("  - {}\n", tip));
    }

    out
}

/// Write the text summary into `output_dir` under the fixed filename.
pub fn write_text_summary(
    answers: &Answers,
    view: &RecommendationView,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(TEXT_FILENAME);
    let text = summary_text(answers, view);

    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create summary file: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write summary file: {}", path.display()))?;

    Ok(path)
}

/// Write the JSON summary into `output_dir` under the fixed filename.
pub fn write_json_summary(
    answers: &Answers,
    view: &RecommendationView,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(JSON_FILENAME);
    let export = SummaryExport {
        metadata: metadata(),
        profile: answers,
        recommendations: view,
    };

    let json = serde_json::to_string_pretty(&export).context("Failed to serialize summary")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write JSON summary: {}", path.display()))?;

    Ok(path)
}
