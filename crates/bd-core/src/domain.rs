//! Validated domain names.
//!
//! A domain is one or more dot-separated labels followed by an alphabetic
//! top-level label. Each leading label is 1-63 ASCII alphanumerics or hyphens
//! and may not start or end with a hyphen. The TLD has at least two letters.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const DOMAIN_PATTERN: &str = r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$";

static DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn domain_re() -> &'static Regex {
    DOMAIN_RE.get_or_init(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern is valid"))
}

/// Error returned when text cannot be interpreted as a domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Empty domain")]
    Empty,
    #[error("Invalid domain: {0}")]
    InvalidShape(String),
}

/// A validated domain, always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Validate `text` as a whole and lowercase it.
    ///
    /// The match is anchored on both ends, so a domain-shaped substring
    /// followed by other text is rejected.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if text.is_empty() {
            return Err(DomainError::Empty);
        }

        if !domain_re().is_match(text) {
            return Err(DomainError::InvalidShape(text.to_string()));
        }

        Ok(Self(text.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname-anchored filter for this domain (`||domain^`).
    pub fn url_filter(&self) -> String {
        format!("||{}^", self.0)
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
