//! Write statements: the smoke-cycle mutations and the demo seed batches.
//!
//! Seed writes use plain CREATE with UNWIND batching, one transaction per
//! batch. Re-running the seeder duplicates data rather than upserting;
//! every row carries a freshly generated id.

use serde_json::{json, Value};

use graphsmoke_core::types::{Follow, User};

use crate::client::{GraphClient, GraphError};
use crate::wire::{QueryStats, Statement};

// ── Smoke statements ─────────────────────────────────────────────

/// `CREATE (n)`: one empty, unlabeled node.
pub fn create_empty_node() -> Statement {
    Statement::new("CREATE (n)")
}

/// `MATCH (n) DETACH DELETE n`: remove every node and its relationships.
pub fn detach_delete_all() -> Statement {
    Statement::new("MATCH (n) DETACH DELETE n")
}

// ── Seed batches ─────────────────────────────────────────────────

/// UNWIND batch creating one `User` node per entry, with update counters.
pub fn create_users(users: &[User]) -> Statement {
    let rows: Vec<Value> = users.iter().map(user_row).collect();
    Statement::new(
        "UNWIND $users AS user
         CREATE (u:User)
         SET u = user.properties
         RETURN u",
    )
    .param("users", rows)
    .with_stats()
}

/// UNWIND batch creating one `FOLLOWS` relationship per entry. Both
/// endpoints are matched by their `user_id` property and must already
/// exist; rows whose endpoints are missing create nothing.
pub fn create_follows(follows: &[Follow]) -> Statement {
    let rows: Vec<Value> = follows.iter().map(follow_row).collect();
    Statement::new(
        "UNWIND $follows AS follow
         MATCH (start:User {user_id: follow.start_user_id})
         MATCH (end:User {user_id: follow.end_user_id})
         CREATE (start)-[f:FOLLOWS]->(end)
         SET f = follow.properties
         RETURN f, start, end",
    )
    .param("follows", rows)
    .with_stats()
}

fn user_row(user: &User) -> Value {
    json!({
        "properties": {
            "user_id": user.id.0,
            "name": user.name,
            "birth_date": user.birth_date,
            "gender": user.gender,
        }
    })
}

fn follow_row(follow: &Follow) -> Value {
    json!({
        "start_user_id": follow.start.0,
        "end_user_id": follow.end.0,
        "properties": {
            "relationship_id": follow.id.0,
            "since": follow.since,
        }
    })
}

// ── Typed execute helpers ────────────────────────────────────────

impl GraphClient {
    /// Create the given users in one transaction and return the endpoint's
    /// update counters for the batch.
    pub async fn create_users(&self, users: &[User]) -> Result<QueryStats, GraphError> {
        let outcome = self.commit(vec![create_users(users)]).await?;
        outcome.ensure_ok()?;
        Ok(outcome.stats(0).cloned().unwrap_or_default())
    }

    /// Create the given `FOLLOWS` relationships in one transaction and
    /// return the endpoint's update counters for the batch.
    pub async fn create_follows(&self, follows: &[Follow]) -> Result<QueryStats, GraphError> {
        let outcome = self.commit(vec![create_follows(follows)]).await?;
        outcome.ensure_ok()?;
        Ok(outcome.stats(0).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use graphsmoke_core::types::{FollowId, Gender, UserId};

    use super::*;

    #[test]
    fn smoke_statements_are_fixed() {
        assert_eq!(
            serde_json::to_string(&create_empty_node()).unwrap(),
            r#"{"statement":"CREATE (n)"}"#
        );
        assert_eq!(
            serde_json::to_string(&detach_delete_all()).unwrap(),
            r#"{"statement":"MATCH (n) DETACH DELETE n"}"#
        );
    }

    #[test]
    fn user_batch_parameters() {
        let users = vec![
            User {
                id: UserId::new(),
                name: "Alice".to_string(),
                birth_date: None,
                gender: None,
            },
            User {
                id: UserId::new(),
                name: "Charlie".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2000, 10, 11),
                gender: Some(Gender::Female),
            },
        ];

        let value = serde_json::to_value(create_users(&users)).unwrap();
        let cypher = value["statement"].as_str().unwrap();
        assert!(cypher.starts_with("UNWIND $users AS user"));
        assert_eq!(value["includeStats"], serde_json::json!(true));

        let rows = value["parameters"]["users"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["properties"]["name"], "Alice");
        assert!(rows[0]["properties"]["birth_date"].is_null());
        assert!(rows[0]["properties"]["gender"].is_null());
        assert_eq!(rows[1]["properties"]["birth_date"], "2000-10-11");
        assert_eq!(rows[1]["properties"]["gender"], "female");
        assert_eq!(
            rows[1]["properties"]["user_id"],
            users[1].id.0.to_string().as_str()
        );
    }

    #[test]
    fn follow_batch_parameters() {
        let alice = UserId::new();
        let bob = UserId::new();
        let follow = Follow {
            id: FollowId::new(),
            start: alice.clone(),
            end: bob.clone(),
            since: "2024-01-02T00:00:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(create_follows(std::slice::from_ref(&follow))).unwrap();
        let cypher = value["statement"].as_str().unwrap();
        assert!(cypher.contains("MATCH (start:User {user_id: follow.start_user_id})"));
        assert!(cypher.contains("CREATE (start)-[f:FOLLOWS]->(end)"));

        let rows = value["parameters"]["follows"].as_array().unwrap();
        assert_eq!(rows[0]["start_user_id"], alice.0.to_string().as_str());
        assert_eq!(rows[0]["end_user_id"], bob.0.to_string().as_str());
        assert_eq!(rows[0]["properties"]["since"], "2024-01-02T00:00:00Z");
        assert_eq!(
            rows[0]["properties"]["relationship_id"],
            follow.id.0.to_string().as_str()
        );
    }
}
