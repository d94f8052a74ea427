//! Configuration for the graphsmoke smoke-test driver.
//!
//! Settings are layered: built-in defaults, then a `graphsmoke.toml` file
//! (if present), then `GRAPHSMOKE__`-prefixed environment variables, then
//! command-line flags applied by the binary.

use serde::Deserialize;

use graphsmoke_client::GraphConfig;

use crate::error::{Result, RunnerError};

/// Runner behavior, loaded from the `[runner]` section or
/// `GRAPHSMOKE_RUNNER__` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerConfig {
    /// Abort the statement sequence at the first failed step.
    #[serde(default)]
    pub fail_fast: bool,

    /// Ask the server for update counters on every statement.
    #[serde(default)]
    pub include_stats: bool,
}

/// Load connection settings for the graph endpoint.
///
/// Missing files and missing keys fall back to [`GraphConfig::default`]
/// values key by key.
pub fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("GRAPHSMOKE")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| "http://localhost:7474".to_string()),
            database: c
                .get_string("neo4j.database")
                .unwrap_or_else(|_| "neo4j".to_string()),
            user: c.get_string("neo4j.user").ok(),
            password: c.get_string("neo4j.password").ok(),
            timeout_secs: c.get_int("neo4j.timeout_secs").map(|v| v as u64).unwrap_or(30),
        },
        Err(_) => GraphConfig::default(),
    }
}

/// Load the `[runner]` section, falling back to defaults when the file or
/// the section is absent.
pub fn load_runner_config(file_prefix: &str) -> Result<RunnerConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("GRAPHSMOKE_RUNNER")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| RunnerError::Config(e.to_string()))?;

    match cfg.get::<RunnerConfig>("runner") {
        Ok(c) => Ok(c),
        Err(_) => Ok(RunnerConfig::default()),
    }
}
