//! graphsmoke-core: Shared domain types for the graphsmoke tools.
//!
//! This crate holds the demo social-graph types the seeder loads:
//! - `User` nodes and their optional profile properties
//! - `Follow` edges (`FOLLOWS` relationships) between users
//!
//! The types only ever build request parameters; responses from the
//! database are printed or inspected as JSON, never mapped back.

pub mod types;
