//! Error types for edit-script reconstruction and delta isolation

use crate::oracle::TestResult;
use std::fmt;
use thiserror::Error;

/// Errors raised while applying an edit script to a base configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    #[error("edit operation at location {location} is out of order (cursor already at {cursor})")]
    OutOfOrder { location: usize, cursor: usize },

    #[error("location index {location} out of bounds for base of length {len}")]
    LocationOutOfBounds { location: usize, len: usize },

    #[error("source index {source_index} out of bounds for target of length {len}")]
    SourceOutOfBounds { source_index: usize, len: usize },
}

/// Which frontier of the minimizer an oracle answer was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationRole {
    /// The configuration that must keep passing
    Passing,
    /// The configuration that must keep failing
    Failing,
}

impl fmt::Display for ConfigurationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationRole::Passing => write!(f, "passing"),
            ConfigurationRole::Failing => write!(f, "failing"),
        }
    }
}

/// The oracle disagreed with the classification the minimizer relies on
///
/// Fatal to the current minimization call. The repeater treats it as a
/// signal to stop and keep what it has accumulated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{role} configuration expected {expected:?}, oracle returned {observed:?}")]
pub struct PreconditionError {
    pub role: ConfigurationRole,
    pub expected: TestResult,
    pub observed: TestResult,
}

/// Errors from the isolation pipeline and the artifact filter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsolationError {
    #[error("precondition violated: {0}")]
    Precondition(#[from] PreconditionError),

    #[error("delta store of {size} deltas exceeds artifact filter limit of {limit}")]
    StoreTooLarge { size: usize, limit: usize },

    #[error("invalid isolation config: {0}")]
    InvalidConfig(String),
}
