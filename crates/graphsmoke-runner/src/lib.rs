//! graphsmoke-runner: Smoke-test driver for the transactional Cypher endpoint.
//!
//! Commits a fixed create → read → delete statement sequence against a live
//! Neo4j server, printing each raw response body to stdout, and can seed a
//! small demo social graph for exercising the endpoint by hand.

pub mod config;
pub mod error;
pub mod runner;
pub mod seed;
