use std::fmt;
use std::path::Path;

use crate::parser::SkippedLine;

/// Number of skipped lines listed individually in a summary.
pub const SKIP_PREVIEW_LIMIT: usize = 5;

/// Operator-facing summary of one conversion.
pub struct RunSummary<'a> {
    pub rules: usize,
    pub output: &'a Path,
    pub skipped: &'a [SkippedLine],
}

impl fmt::Display for RunSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Converted {} domains to Chromium rules", self.rules)?;
        write!(f, "Output file: {}", self.output.display())?;

        if self.skipped.is_empty() {
            return Ok(());
        }

        write!(f, "\nSkipped {} invalid lines:", self.skipped.len())?;
        for skipped in self.skipped.iter().take(SKIP_PREVIEW_LIMIT) {
            write!(f, "\n   Line {}: {}", skipped.line, skipped.text)?;
        }
        if self.skipped.len() > SKIP_PREVIEW_LIMIT {
            write!(f, "\n   ... and {} more", self.skipped.len() - SKIP_PREVIEW_LIMIT)?;
        }

        Ok(())
    }
}
