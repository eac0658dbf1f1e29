use std::fs;
use std::path::{Path, PathBuf};

use bd_core::domain::Domain;
use bd_core::types::{RuleDocument, RuleRecord, RULESET_VERSION, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use log::info;

use crate::error::{CompileError, Result};

/// Appended to the input stem when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_chromium_rules.json";

/// One block rule per domain, ids 1..=N in order.
pub fn build_rules(domains: &[Domain]) -> Vec<RuleRecord> {
    domains
        .iter()
        .enumerate()
        .map(|(idx, domain)| RuleRecord::block(idx + 1, domain))
        .collect()
}

pub fn build_document(domains: &[Domain], source_name: &str, generated_at: NaiveDateTime) -> RuleDocument {
    RuleDocument {
        version: RULESET_VERSION.to_string(),
        name: format!("Blocklist generated from {}", source_name),
        description: format!("Generated on {}", generated_at.format(TIMESTAMP_FORMAT)),
        rules: build_rules(domains),
    }
}

/// Pretty-printed JSON, two-space indent, non-ASCII left unescaped.
pub fn render_document(document: &RuleDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn write_document(path: &Path, document: &RuleDocument) -> Result<()> {
    let json = render_document(document)?;
    fs::write(path, json).map_err(|source| CompileError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {} rules to {}", document.rules.len(), path.display());
    Ok(())
}

/// `<input without extension>_chromium_rules.json`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, DEFAULT_OUTPUT_SUFFIX))
}

/// Base name of the input, as shown in the document name.
pub fn source_display_name(input: &Path) -> String {
    input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
