// src/errors.rs

//! Crate-wide error type.
//!
//! Scope lookups never produce one of these; they return `None`. Everything
//! that does end up here aborts the build.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobflowError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(
        "unresolved dependency '{dependency}' of job '{job}' in workflow '{workflow}'"
    )]
    UnresolvedDependency {
        workflow: String,
        job: String,
        dependency: String,
    },

    #[error("build_default called on workflow '{0}', which is not the default workflow")]
    NotDefaultWorkflow(String),

    #[error("Not found: {0}")]
    EntityNotFound(String),

    #[error("Cycle detected in workflow: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, JobflowError>;
