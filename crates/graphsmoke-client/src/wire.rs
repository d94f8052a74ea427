//! Request and response JSON for the transactional Cypher endpoint.
//!
//! The endpoint accepts a `{"statements": [...]}` batch per POST and
//! answers with a `results` / `errors` envelope. This module provides typed
//! serde structs for both directions. Deserialization is tolerant: every
//! field defaults when absent and unknown fields are ignored, so any
//! well-formed server response parses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::GraphError;

// ── Request ──────────────────────────────────────────────────────

/// A batch of statements executed as a single transaction.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRequest {
    pub statements: Vec<Statement>,
}

/// One Cypher statement plus its parameters.
///
/// A bare statement serializes to exactly `{"statement": "<cypher>"}`;
/// `parameters` and `includeStats` only appear on the wire when set.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(rename = "includeStats", skip_serializing_if = "is_false")]
    pub include_stats: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Statement {
    pub fn new(cypher: impl Into<String>) -> Self {
        Self {
            statement: cypher.into(),
            parameters: None,
            include_stats: false,
        }
    }

    /// Attach a named parameter.
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Ask the endpoint for update counters on this statement.
    pub fn with_stats(mut self) -> Self {
        self.include_stats = true;
        self
    }
}

// ── Response ─────────────────────────────────────────────────────

/// Response envelope: one result per submitted statement, plus any errors.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitResponse {
    #[serde(default)]
    pub results: Vec<StatementResult>,
    #[serde(default)]
    pub errors: Vec<ServerError>,
    #[serde(rename = "lastBookmarks", default)]
    pub last_bookmarks: Vec<String>,
}

/// Columns and rows produced by one statement.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<ResultRow>,
    pub stats: Option<QueryStats>,
}

/// One result row in the endpoint's `row` format.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRow {
    #[serde(default)]
    pub row: Vec<Value>,
    #[serde(default)]
    pub meta: Vec<Value>,
}

/// A Cypher-level failure. The endpoint reports these inside an HTTP 200
/// response, never through the status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerError {
    pub code: String,
    pub message: String,
}

/// Update counters, returned when a statement sets `includeStats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryStats {
    #[serde(default)]
    pub contains_updates: bool,
    #[serde(default)]
    pub nodes_created: u64,
    #[serde(default)]
    pub nodes_deleted: u64,
    #[serde(default)]
    pub properties_set: u64,
    #[serde(default)]
    pub relationships_created: u64,
    /// The endpoint sends the singular key for deletions.
    #[serde(default)]
    pub relationship_deleted: u64,
    #[serde(default)]
    pub labels_added: u64,
    #[serde(default)]
    pub labels_removed: u64,
    #[serde(default)]
    pub indexes_added: u64,
    #[serde(default)]
    pub indexes_removed: u64,
    #[serde(default)]
    pub constraints_added: u64,
    #[serde(default)]
    pub constraints_removed: u64,
    #[serde(default)]
    pub contains_system_updates: bool,
    #[serde(default)]
    pub system_updates: u64,
}

impl CommitResponse {
    /// True when the transaction reported at least one error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The first reported error, if any.
    pub fn first_error(&self) -> Option<&ServerError> {
        self.errors.first()
    }

    /// Update counters for the statement at `index`, when requested.
    pub fn stats(&self, index: usize) -> Option<&QueryStats> {
        self.results.get(index).and_then(|r| r.stats.as_ref())
    }
}

/// Parse a response body into the typed envelope.
pub fn parse_commit_response(body: &str) -> Result<CommitResponse, GraphError> {
    serde_json::from_str(body).map_err(|e| GraphError::Serialization(e.to_string()))
}
