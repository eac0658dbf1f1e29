use std::collections::HashSet;

use bd_core::domain::Domain;
use log::debug;

use crate::parser::{parse_domain_list, DomainEntry, SkippedLine};

pub struct DedupeOutcome {
    pub domains: Vec<Domain>,
    pub duplicates: usize,
}

/// Keep the first occurrence of each domain, in encounter order.
pub fn dedupe_domains(entries: Vec<DomainEntry>) -> DedupeOutcome {
    let mut seen: HashSet<Domain> = HashSet::with_capacity(entries.len());
    let mut domains = Vec::with_capacity(entries.len());
    let mut duplicates = 0usize;

    for entry in entries {
        if seen.contains(&entry.domain) {
            debug!("line {}: duplicate {}", entry.line, entry.domain);
            duplicates += 1;
            continue;
        }
        seen.insert(entry.domain.clone());
        domains.push(entry.domain);
    }

    DedupeOutcome { domains, duplicates }
}

/// Result of normalizing a whole blocklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Unique domains in first-seen order
    pub domains: Vec<Domain>,
    pub skipped: Vec<SkippedLine>,
    pub duplicates: usize,
    pub total_lines: usize,
}

pub fn normalize(text: &str) -> Normalized {
    let parsed = parse_domain_list(text);
    let deduped = dedupe_domains(parsed.entries);

    Normalized {
        domains: deduped.domains,
        skipped: parsed.skipped,
        duplicates: deduped.duplicates,
        total_lines: parsed.total_lines,
    }
}
