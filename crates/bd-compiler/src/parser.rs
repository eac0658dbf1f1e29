use std::sync::OnceLock;

use bd_core::domain::Domain;
use log::trace;
use regex::Regex;

/// Leading marker from a common blocklist convention. At most one is removed:
/// `::`, a hosts-file IPv4 address followed by whitespace, or `||`.
const NOISE_PREFIX_PATTERN: &str = r"^(?:::|\d+\.\d+\.\d+\.\d+\s+|\|\|)";

static NOISE_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn noise_prefix_re() -> &'static Regex {
    NOISE_PREFIX_RE.get_or_init(|| Regex::new(NOISE_PREFIX_PATTERN).expect("noise prefix pattern is valid"))
}

/// A domain accepted from a specific input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    pub line: usize,
    pub domain: Domain,
}

/// A non-blank, non-comment line that did not clean up to a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Line text without its terminator
    pub text: String,
}

/// Per-line parse result, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub entries: Vec<DomainEntry>,
    pub skipped: Vec<SkippedLine>,
    pub total_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Domain(Domain),
    Invalid,
}

pub fn parse_domain_list(text: &str) -> ParsedList {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parsed = ParsedList::default();

    for (idx, raw_line) in split_lines(text).enumerate() {
        let line_num = idx + 1;
        parsed.total_lines = line_num;

        match classify_line(raw_line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Domain(domain) => {
                trace!("line {}: accepted {}", line_num, domain);
                parsed.entries.push(DomainEntry { line: line_num, domain });
            }
            LineKind::Invalid => {
                trace!("line {}: skipped {:?}", line_num, raw_line);
                parsed.skipped.push(SkippedLine {
                    line: line_num,
                    text: raw_line.to_string(),
                });
            }
        }
    }

    parsed
}

/// Split on `\r\n`, a lone `\r`, or `\n`. A final terminator does not start
/// another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

pub fn classify_line(raw_line: &str) -> LineKind {
    let line = raw_line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if is_comment_line(line) {
        return LineKind::Comment;
    }

    match Domain::parse(clean_line(line)) {
        Ok(domain) => LineKind::Domain(domain),
        Err(_) => LineKind::Invalid,
    }
}

/// Strip one noise prefix and any trailing `#` comment from a trimmed line.
pub fn clean_line(line: &str) -> &str {
    let rest = match noise_prefix_re().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    let rest = rest.trim();

    match rest.find('#') {
        Some(pos) => rest[..pos].trim_end(),
        None => rest,
    }
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
}
