//! graphsmoke-client: HTTP client for the Neo4j transactional Cypher endpoint.
//!
//! Every request the graphsmoke tools send goes through this crate. The
//! commit URL is built once from configuration, statements serialize to the
//! endpoint's `{"statements": [...]}` shape, and responses come back with
//! both the raw body (for printing) and the parsed envelope (for failure
//! detection).

pub mod client;
pub mod mutations;
pub mod queries;
pub mod wire;

pub use client::{CommitOutcome, GraphClient, GraphConfig, GraphError};
pub use wire::Statement;
