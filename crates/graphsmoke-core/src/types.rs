//! Domain types for the demo social graph.
//!
//! `User` and `Follow` describe the dataset the seeder writes. They build
//! request parameters only; nothing here is reconstructed from responses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Identifiers ───────────────────────────────────────────────────

/// Unique identifier for a `User` node, persisted as its `user_id` property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a `FOLLOWS` relationship, persisted as its
/// `relationship_id` property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FollowId(pub Uuid);

impl FollowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FollowId {
    fn default() -> Self {
        Self::new()
    }
}

// ── Nodes ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A person in the demo social graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
}

// ── Relationships ─────────────────────────────────────────────────

/// A directed `FOLLOWS` edge between two users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: FollowId,
    pub start: UserId,
    pub end: UserId,
    pub since: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");

        let json = serde_json::to_string(&Gender::Other).unwrap();
        assert_eq!(json, "\"other\"");
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = User {
            id: UserId::new(),
            name: "Bob".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 2),
            gender: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.id, deserialized.id);
        assert_eq!(deserialized.birth_date, NaiveDate::from_ymd_opt(1990, 1, 2));
    }

    #[test]
    fn dates_serialize_iso8601() {
        let user = User {
            id: UserId::new(),
            name: "Charlie".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 10, 11),
            gender: Some(Gender::Female),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"2000-10-11\""));
        assert!(json.contains("\"female\""));
    }

    #[test]
    fn follow_since_serializes_rfc3339() {
        let follow = Follow {
            id: FollowId::new(),
            start: UserId::new(),
            end: UserId::new(),
            since: "2024-01-02T00:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_string(&follow).unwrap();
        assert!(json.contains("\"2024-01-02T00:00:00Z\""));
    }
}
