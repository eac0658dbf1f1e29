use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::debug;

use crate::builder::{build_document, default_output_path, source_display_name, write_document};
use crate::error::{CompileError, Result};
use crate::optimizer::normalize;
use crate::parser::SkippedLine;
use crate::report::RunSummary;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Derived from `input` when unset
    pub output: Option<PathBuf>,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub output: PathBuf,
    pub rules: usize,
    pub duplicates: usize,
    pub total_lines: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ConvertOutcome {
    pub fn summary(&self) -> RunSummary<'_> {
        RunSummary {
            rules: self.rules,
            output: &self.output,
            skipped: &self.skipped,
        }
    }
}

pub fn read_domain_list(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CompileError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CompileError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read a blocklist, normalize it, and write the rule document.
///
/// Nothing is written if the input cannot be read.
pub fn convert_file(opts: &ConvertOptions) -> Result<ConvertOutcome> {
    let content = read_domain_list(&opts.input)?;
    let normalized = normalize(&content);
    debug!(
        "{}: {} lines, {} domains, {} duplicates, {} skipped",
        opts.input.display(),
        normalized.total_lines,
        normalized.domains.len(),
        normalized.duplicates,
        normalized.skipped.len()
    );

    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&opts.input));
    let document = build_document(&normalized.domains, &source_display_name(&opts.input), opts.generated_at);
    write_document(&output, &document)?;

    Ok(ConvertOutcome {
        output,
        rules: document.rules.len(),
        duplicates: normalized.duplicates,
        total_lines: normalized.total_lines,
        skipped: normalized.skipped,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::Value;

    use super::*;

    const SAMPLE: &str = "# list\nexample.com\nEXAMPLE.com\n:: bad-site.net\n0.0.0.0 tracker.io\ngarbage line\n";

    fn options(input: PathBuf, output: Option<PathBuf>) -> ConvertOptions {
        ConvertOptions {
            input,
            output,
            generated_at: NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        }
    }

    #[test]
    fn converts_sample_list() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("domains.txt");
        fs::write(&input, SAMPLE).unwrap();

        let outcome = convert_file(&options(input, None)).unwrap();
        assert_eq!(outcome.output, dir.path().join("domains_chromium_rules.json"));
        assert_eq!(outcome.rules, 3);
        assert_eq!(outcome.duplicates, 1);
        assert_eq!(outcome.skipped, vec![SkippedLine { line: 6, text: "garbage line".to_string() }]);

        let value: Value = serde_json::from_str(&fs::read_to_string(&outcome.output).unwrap()).unwrap();
        assert_eq!(value["name"], "Blocklist generated from domains.txt");
        assert_eq!(value["description"], "Generated on 2025-01-02 03:04:05");

        let rules = value["rules"].as_array().unwrap();
        let pairs: Vec<(u64, &str)> = rules
            .iter()
            .map(|r| (r["id"].as_u64().unwrap(), r["condition"]["urlFilter"].as_str().unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![(1, "||example.com^"), (2, "||bad-site.net^"), (3, "||tracker.io^")]
        );

        let summary = outcome.summary().to_string();
        assert!(summary.contains("Converted 3 domains"));
        assert!(summary.contains("   Line 6: garbage line"));
    }

    #[test]
    fn honors_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hosts");
        let output = dir.path().join("rules.json");
        fs::write(&input, "0.0.0.0 ads.example.com\n").unwrap();

        let outcome = convert_file(&options(input, Some(output.clone()))).unwrap();
        assert_eq!(outcome.output, output);
        assert!(output.exists());
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.txt");

        let err = convert_file(&options(input, None)).unwrap_err();
        assert!(matches!(err, CompileError::InputNotFound { .. }));
        assert!(!dir.path().join("absent_chromium_rules.json").exists());
    }

    #[test]
    fn non_utf8_input_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("binary.txt");
        fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = convert_file(&options(input, None)).unwrap_err();
        assert!(matches!(err, CompileError::InputRead { .. }));
    }
}
