//! BlockDNR Blocklist Compiler
//!
//! This crate compiles plaintext domain blocklists into browser
//! `declarativeNetRequest` rule set documents.

pub mod parser;
pub mod optimizer;
pub mod builder;
pub mod report;
pub mod convert;
pub mod error;

pub use builder::{build_document, build_rules, default_output_path, render_document, write_document};
pub use convert::{convert_file, ConvertOptions, ConvertOutcome};
pub use error::{CompileError, Result};
pub use optimizer::{dedupe_domains, normalize, Normalized};
pub use parser::{parse_domain_list, ParsedList, SkippedLine};
pub use report::RunSummary;
