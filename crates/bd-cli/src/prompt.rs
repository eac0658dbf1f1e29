//! Prompt-driven conversion over any line reader, so piped stdin works the
//! same as a terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use bd_compiler::{convert_file, CompileError, ConvertOptions};
use chrono::NaiveDateTime;

use crate::scaffold::{self, ScaffoldOptions, DEFAULT_EXTENSION_DIR};

pub struct PromptDefaults {
    pub input: PathBuf,
    pub extension_dir: PathBuf,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            input: PathBuf::from("domains.txt"),
            extension_dir: PathBuf::from(DEFAULT_EXTENSION_DIR),
        }
    }
}

const EXAMPLE_FORMAT: &str = "Example format:\n  example.com\n  :: bad-site.net\n  # This is a comment\n";

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    defaults: &PromptDefaults,
    generated_at: NaiveDateTime,
) -> Result<(), String> {
    let io_err = |e: std::io::Error| format!("Failed to write prompt: {}", e);

    writeln!(out, "Text to Chromium Rules Converter").map_err(io_err)?;
    writeln!(out, "{}", "=".repeat(50)).map_err(io_err)?;

    let answer = ask(&mut input, &mut out, "Enter path to domains text file: ")?;
    let input_path = if answer.is_empty() {
        writeln!(out, "Using default: {}", defaults.input.display()).map_err(io_err)?;
        defaults.input.clone()
    } else {
        PathBuf::from(answer)
    };

    if !input_path.exists() {
        writeln!(out, "File '{}' not found!", input_path.display()).map_err(io_err)?;
        writeln!(out, "Please create a text file with domains (one per line)").map_err(io_err)?;
        write!(out, "{}", EXAMPLE_FORMAT).map_err(io_err)?;
        return Err(CompileError::InputNotFound { path: input_path }.to_string());
    }

    let answer = ask(&mut input, &mut out, "Enter output JSON file (press Enter for auto-name): ")?;
    let output = (!answer.is_empty()).then(|| PathBuf::from(answer));

    let opts = ConvertOptions {
        input: input_path,
        output,
        generated_at,
    };
    let outcome = convert_file(&opts).map_err(|e| e.to_string())?;
    writeln!(out, "{}", outcome.summary()).map_err(io_err)?;

    let answer = ask(&mut input, &mut out, "\nCreate Chromium extension structure? (y/N): ")?;
    if answer.eq_ignore_ascii_case("y") {
        let dir = defaults.extension_dir.clone();
        scaffold::write_extension(&ScaffoldOptions { dir: dir.clone() })?;
        writeln!(out, "Chromium extension structure created in: {}", dir.display()).map_err(io_err)?;
        writeln!(out).map_err(io_err)?;
        write!(out, "{}", scaffold::load_instructions(&dir)).map_err(io_err)?;
    }

    Ok(())
}

/// Print `question` and read one trimmed answer. End of input is an empty answer.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String, String> {
    write!(out, "{}", question)
        .and_then(|_| out.flush())
        .map_err(|e| format!("Failed to write prompt: {}", e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read answer: {}", e))?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn run_with(answers: &str, defaults: &PromptDefaults) -> (Result<(), String>, String) {
        let mut out = Vec::new();
        let result = run(Cursor::new(answers.as_bytes()), &mut out, defaults, at());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn converts_with_derived_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("list.txt");
        fs::write(&input, "example.com\nnope nope\n").unwrap();

        let answers = format!("{}\n\nn\n", input.display());
        let (result, text) = run_with(&answers, &PromptDefaults::default());

        assert_eq!(result, Ok(()));
        assert!(dir.path().join("list_chromium_rules.json").is_file());
        assert!(text.contains("Converted 1 domains to Chromium rules"));
        assert!(text.contains("Line 2: nope nope"));
        assert!(!text.contains("extension structure created"));
    }

    #[test]
    fn scaffolds_on_yes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("list.txt");
        let output = dir.path().join("rules.json");
        fs::write(&input, "example.com\n").unwrap();

        let defaults = PromptDefaults {
            input: PathBuf::from("unused.txt"),
            extension_dir: dir.path().join("ext"),
        };
        let answers = format!("{}\n{}\nY\n", input.display(), output.display());
        let (result, text) = run_with(&answers, &defaults);

        assert_eq!(result, Ok(()));
        assert!(output.is_file());
        assert!(dir.path().join("ext").join("manifest.json").is_file());
        assert!(text.contains("Load unpacked"));
    }

    #[test]
    fn missing_input_prints_help() {
        let dir = tempfile::tempdir().unwrap();
        let defaults = PromptDefaults {
            input: dir.path().join("domains.txt"),
            extension_dir: dir.path().join("ext"),
        };

        let (result, text) = run_with("\n", &defaults);

        assert!(result.unwrap_err().contains("not found"));
        assert!(text.contains("Using default:"));
        assert!(text.contains(&format!("File '{}' not found!", defaults.input.display())));
        assert!(text.contains(":: bad-site.net"));
        assert!(!dir.path().join("domains_chromium_rules.json").exists());
    }

    #[test]
    fn end_of_input_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("list.txt");
        fs::write(&input, "example.com\n").unwrap();

        let defaults = PromptDefaults {
            input: input.clone(),
            extension_dir: dir.path().join("ext"),
        };
        let (result, _) = run_with("", &defaults);

        assert_eq!(result, Ok(()));
        assert!(dir.path().join("list_chromium_rules.json").is_file());
        assert!(!dir.path().join("ext").exists());
    }
}
