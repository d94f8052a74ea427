//! Error types for the graphsmoke-runner crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Graph error: {0}")]
    Graph(#[from] graphsmoke_client::GraphError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
