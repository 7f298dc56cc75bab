//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here; adapters map into these.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated lookup query. Text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    text: String,
}

impl WordQuery {
    /// Validate raw user input. Whitespace-only input is rejected before any I/O.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::Validation);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Trimmed, original-case text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Normalized dictionary entry. Arrays are always present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    pub compliment: Option<String>,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    /// Empty string is the degraded fallback.
    pub definition: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub etymology: Option<String>,
    pub example_sentences: Vec<String>,
    pub sources: Vec<Source>,
}

/// Web source the service used to ground its answer. Unique by `uri` within an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: Option<String>,
}

/// How the language service is asked for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Free-form text plus web-grounding metadata; no schema.
    Grounded,
    /// JSON constrained to the entry schema.
    #[default]
    Structured,
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMode::Grounded => write!(f, "grounded"),
            LookupMode::Structured => write!(f, "structured"),
        }
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grounded" | "text" => Ok(LookupMode::Grounded),
            "structured" | "json" => Ok(LookupMode::Structured),
            other => Err(format!("unknown lookup mode: {other}")),
        }
    }
}

/// Request sent to the language service. Built by the query builder, consumed by adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub mode: LookupMode,
    /// The looked-up word, for logging and test doubles. Not sent on the wire.
    pub word: String,
    pub prompt: String,
    /// JSON response schema (structured mode only).
    pub response_schema: Option<serde_json::Value>,
    /// Ask the service to supplement its answer with web search.
    pub use_search_grounding: bool,
}

/// Raw reply from the language service, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReply {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// Grounding chunk as returned by the service. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Identifies one accepted submit. Only the latest token may commit a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// UI state. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading {
        word: String,
    },
    Result(DictionaryEntry),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }
}
