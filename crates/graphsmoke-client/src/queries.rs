//! Read statements over the graph.

use serde_json::Value;

use crate::client::{GraphClient, GraphError};
use crate::wire::Statement;

/// `MATCH (n) RETURN n`: every node in the database.
pub fn all_nodes() -> Statement {
    Statement::new("MATCH (n) RETURN n")
}

/// Total node count.
pub fn node_count() -> Statement {
    Statement::new("MATCH (n) RETURN count(n) AS cnt")
}

impl GraphClient {
    /// Count all nodes in the database.
    pub async fn count_nodes(&self) -> Result<i64, GraphError> {
        let outcome = self.commit(vec![node_count()]).await?;
        outcome.ensure_ok()?;

        outcome
            .response
            .as_ref()
            .and_then(|r| r.results.first())
            .and_then(|result| result.data.first())
            .and_then(|row| row.row.first())
            .and_then(|value| value.as_i64())
            .ok_or_else(|| GraphError::Serialization("count query returned no rows".to_string()))
    }

    /// Fetch every node as raw JSON values, exactly as the endpoint
    /// returned them. Nothing is mapped into domain types.
    pub async fn list_nodes(&self) -> Result<Vec<Value>, GraphError> {
        let outcome = self.commit(vec![all_nodes()]).await?;
        outcome.ensure_ok()?;

        let rows = outcome
            .response
            .as_ref()
            .and_then(|r| r.results.first())
            .map(|result| {
                result
                    .data
                    .iter()
                    .filter_map(|row| row.row.first().cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }
}
