//! Endpoint configuration and the shared commit client.

use std::time::Duration;

use crate::wire::{
    parse_commit_response, CommitRequest, CommitResponse, QueryStats, ServerError, Statement,
};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid endpoint configuration: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server reported {code}: {message}")]
    Server { code: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for reaching the transactional Cypher endpoint.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub database: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "http://localhost:7474".to_string(),
            database: "neo4j".to_string(),
            user: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

/// Outcome of one commit call: the HTTP status, the raw body exactly as
/// received, and the parsed envelope when the body is valid JSON.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    pub status: u16,
    pub body: String,
    pub response: Option<CommitResponse>,
}

impl CommitOutcome {
    /// True when the exchange fully succeeded: a 2xx status and an envelope
    /// with an empty `errors` array.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
            && self.response.as_ref().is_some_and(|r| !r.has_errors())
    }

    /// The first server-reported error, if any.
    pub fn first_error(&self) -> Option<&ServerError> {
        self.response.as_ref().and_then(|r| r.first_error())
    }

    /// Update counters for the statement at `index`, when requested.
    pub fn stats(&self, index: usize) -> Option<&QueryStats> {
        self.response.as_ref().and_then(|r| r.stats(index))
    }

    /// Promote a failed outcome to an error, for callers that want typed
    /// results instead of raw bodies.
    pub fn ensure_ok(&self) -> Result<(), GraphError> {
        if self.is_ok() {
            return Ok(());
        }
        match self.first_error() {
            Some(err) => Err(GraphError::Server {
                code: err.code.clone(),
                message: err.message.clone(),
            }),
            None => Err(GraphError::Server {
                code: format!("HTTP {}", self.status),
                message: "no commit envelope in response".to_string(),
            }),
        }
    }
}

/// Client for the transactional Cypher endpoint.
///
/// This is the single point of access to the database; every request the
/// tools send goes through [`GraphClient::commit`]. Clone is cheap (the
/// inner reqwest client is an Arc).
#[derive(Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    commit_url: String,
    auth: Option<(String, String)>,
}

impl GraphClient {
    /// Build a client for the given endpoint configuration.
    pub fn new(config: &GraphConfig) -> Result<Self, GraphError> {
        let base = reqwest::Url::parse(&config.uri)
            .map_err(|e| GraphError::Config(format!("invalid uri {}: {e}", config.uri)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(GraphError::Config(format!(
                "unsupported scheme {}: the transactional endpoint speaks HTTP",
                base.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let commit_url = format!(
            "{}/db/{}/tx/commit",
            config.uri.trim_end_matches('/'),
            config.database
        );

        // Basic auth only when both halves are configured.
        let auth = match (&config.user, &config.password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };

        tracing::info!(url = %commit_url, "Using transactional endpoint");
        Ok(Self {
            http,
            commit_url,
            auth,
        })
    }

    /// Submit a batch of statements to the commit endpoint.
    ///
    /// Transport failures are `Err`. Any received response, including non-2xx
    /// statuses and envelopes with errors, is an `Ok` outcome so the caller
    /// can print the body before judging it.
    pub async fn commit(&self, statements: Vec<Statement>) -> Result<CommitOutcome, GraphError> {
        let request = CommitRequest { statements };

        let mut builder = self.http.post(&self.commit_url).json(&request);
        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, Some(password));
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let parsed = match parse_commit_response(&body) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::warn!(status, error = %e, "Response body is not a commit envelope");
                None
            }
        };

        Ok(CommitOutcome {
            status,
            body,
            response: parsed,
        })
    }

    /// The full URL statements are committed to.
    pub fn commit_url(&self) -> &str {
        &self.commit_url
    }
}
