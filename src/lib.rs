//! Aislar - Probabilistic delta debugging for noisy, three-valued test oracles
//!
//! This library isolates the minimal set of changes between a passing base
//! configuration and a failing target configuration when the only test
//! signal is a statistical oracle that may answer Passed, Failed, or
//! Inconclusive. Configurations are ordered sequences of opaque elements.

pub mod config;
pub mod dd;
pub mod delta;
pub mod error;
pub mod oracle;
pub mod report;
pub mod stats;

pub use config::IsolationConfig;
pub use delta::EditOperation;
pub use error::{DeltaError, IsolationError, PreconditionError};
pub use oracle::{TestOracle, TestResult};
pub use report::{isolate, IsolationReport};
