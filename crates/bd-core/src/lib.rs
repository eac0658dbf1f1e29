//! BlockDNR Core Library
//!
//! Shared types for turning plaintext blocklists into browser
//! `declarativeNetRequest` rule sets.
//!
//! # Modules
//!
//! - `domain`: Validated, lowercase domain names
//! - `types`: Rule set wire types and the resource type catalogue

pub mod domain;
pub mod types;

// Re-export commonly used types
pub use domain::{Domain, DomainError};
pub use types::{ResourceType, RuleAction, RuleCondition, RuleDocument, RuleRecord};
