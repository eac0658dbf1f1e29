//! Rule set type definitions for BlockDNR
//!
//! These types map directly to the browser `declarativeNetRequest` rule
//! JSON. Field declaration order is the serialized key order.

use serde::Serialize;

use crate::domain::Domain;

/// Version string written into every generated rule document.
pub const RULESET_VERSION: &str = "1.0.0";

/// Priority assigned to every generated rule.
pub const DEFAULT_PRIORITY: u32 = 1;

/// `strftime` format of the generation timestamp in the document description.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Resource Types
// =============================================================================

/// Request category a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MainFrame,
    SubFrame,
    Stylesheet,
    Script,
    Image,
    Font,
    Object,
    Xmlhttprequest,
    Ping,
    CspReport,
    Media,
    Websocket,
    Webtransport,
    Webbundle,
    Other,
}

impl ResourceType {
    /// Every resource type, in the order written to rule conditions.
    pub const ALL: [ResourceType; 15] = [
        Self::MainFrame,
        Self::SubFrame,
        Self::Stylesheet,
        Self::Script,
        Self::Image,
        Self::Font,
        Self::Object,
        Self::Xmlhttprequest,
        Self::Ping,
        Self::CspReport,
        Self::Media,
        Self::Websocket,
        Self::Webtransport,
        Self::Webbundle,
        Self::Other,
    ];
}

// =============================================================================
// Rule Records
// =============================================================================

/// Action taken when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RuleAction {
    /// Cancel the request
    Block,
}

/// Request conditions for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub url_filter: String,
    pub resource_types: Vec<ResourceType>,
}

/// A single blocking rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    /// 1-based, unique within a document
    pub id: usize,
    pub priority: u32,
    pub action: RuleAction,
    pub condition: RuleCondition,
}

impl RuleRecord {
    /// Block every resource type on `domain` and its subdomains.
    pub fn block(id: usize, domain: &Domain) -> Self {
        Self {
            id,
            priority: DEFAULT_PRIORITY,
            action: RuleAction::Block,
            condition: RuleCondition {
                url_filter: domain.url_filter(),
                resource_types: ResourceType::ALL.to_vec(),
            },
        }
    }
}

// =============================================================================
// Rule Document
// =============================================================================

/// Top-level rule set artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDocument {
    pub version: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<RuleRecord>,
}
