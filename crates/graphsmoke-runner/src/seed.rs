//! Demo dataset seeding: a tiny social graph to poke at by hand.
//!
//! Creates three `:User` nodes and three `FOLLOWS` relationships through
//! the batch UNWIND statements. Ids are freshly generated on every run and
//! nothing is merged, so repeated seeding piles up duplicate users.

use chrono::{DateTime, NaiveDate, Utc};

use graphsmoke_client::GraphClient;
use graphsmoke_core::types::{Follow, FollowId, Gender, User, UserId};

use crate::error::Result;

/// Totals reported after a seed run.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users_created: u64,
    pub follows_created: u64,
}

/// The fixed demo roster: Alice with no optional fields, Bob with a birth
/// date, Charlie with both.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(),
            name: "Alice".to_string(),
            birth_date: None,
            gender: None,
        },
        User {
            id: UserId::new(),
            name: "Bob".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 2),
            gender: None,
        },
        User {
            id: UserId::new(),
            name: "Charlie".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 10, 11),
            gender: Some(Gender::Female),
        },
    ]
}

/// The full demo dataset: the roster plus Alice → Bob, Bob → Charlie and
/// Charlie → Bob follow edges.
pub fn demo_dataset() -> (Vec<User>, Vec<Follow>) {
    let users = demo_users();
    let follows = vec![
        follow(&users[0], &users[1], midnight(2024, 1, 2)),
        follow(&users[1], &users[2], midnight(2025, 3, 4)),
        follow(&users[2], &users[1], midnight(2026, 5, 6)),
    ];
    (users, follows)
}

fn follow(start: &User, end: &User, since: DateTime<Utc>) -> Follow {
    Follow {
        id: FollowId::new(),
        start: start.id.clone(),
        end: end.id.clone(),
        since,
    }
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Seed the demo dataset: one user batch, then one relationship batch.
///
/// The relationship batch MATCHes users by id, so it only runs after the
/// user batch committed cleanly. Any failed commit aborts the seed.
pub async fn run_seed(client: &GraphClient) -> Result<SeedSummary> {
    let (users, follows) = demo_dataset();

    tracing::info!(count = users.len(), "Seeding users");
    let stats = client.create_users(&users).await?;
    tracing::info!(
        nodes_created = stats.nodes_created,
        properties_set = stats.properties_set,
        "User batch committed"
    );
    let users_created = stats.nodes_created;

    tracing::info!(count = follows.len(), "Seeding FOLLOWS relationships");
    let stats = client.create_follows(&follows).await?;
    tracing::info!(
        relationships_created = stats.relationships_created,
        "Relationship batch committed"
    );

    Ok(SeedSummary {
        users_created,
        follows_created: stats.relationships_created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_matches_demo_data() {
        let users = demo_users();
        assert_eq!(users.len(), 3);

        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[0].birth_date, None);
        assert_eq!(users[0].gender, None);

        assert_eq!(users[1].name, "Bob");
        assert_eq!(users[1].birth_date, NaiveDate::from_ymd_opt(1990, 1, 2));
        assert_eq!(users[1].gender, None);

        assert_eq!(users[2].name, "Charlie");
        assert_eq!(users[2].birth_date, NaiveDate::from_ymd_opt(2000, 10, 11));
        assert_eq!(users[2].gender, Some(Gender::Female));
    }

    #[test]
    fn follows_wire_the_roster_in_order() {
        let (users, follows) = demo_dataset();
        assert_eq!(follows.len(), 3);

        assert_eq!(follows[0].start, users[0].id);
        assert_eq!(follows[0].end, users[1].id);
        assert_eq!(follows[0].since, midnight(2024, 1, 2));

        assert_eq!(follows[1].start, users[1].id);
        assert_eq!(follows[1].end, users[2].id);
        assert_eq!(follows[1].since, midnight(2025, 3, 4));

        assert_eq!(follows[2].start, users[2].id);
        assert_eq!(follows[2].end, users[1].id);
        assert_eq!(follows[2].since, midnight(2026, 5, 6));
    }

    #[test]
    fn fresh_ids_on_every_run() {
        let first = demo_users();
        let second = demo_users();
        assert_ne!(first[0].id, second[0].id);
    }
}
