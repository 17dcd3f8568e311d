// Test Oracles with Three-Valued Outcomes
//
// The minimizer never looks at configurations directly. It hands a delta
// subset to an oracle and gets back Passed, Failed, or Inconclusive. An
// Inconclusive answer carries no information: the minimizer moves on to the
// next candidate instead of guessing a direction.
//
// Scientific Foundation:
// [1] Zeller, A., & Hildebrandt, R. (2002). Simplifying and isolating
//     failure-inducing input. IEEE TSE 28(2). Unresolved test outcomes.
//
// [2] Holm, S. (1979). A simple sequentially rejective multiple test
//     procedure. Scandinavian Journal of Statistics 6(2).
//
// Implementation:
// - TestOracle is implemented for any FnMut(&[E]) -> TestResult closure
// - CachedOracle memoizes answers in an explicit, caller-owned OracleCache
// - PropertyBasedOracle turns measurement p-values into verdicts with two
//   rounds of Holm-Bonferroni correction

mod cache;
mod property;

pub use cache::{CachedOracle, OracleCache};
pub use property::{Measurement, MeasurementSource, PropertyBasedOracle};

use crate::delta::EditOperation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of testing one candidate configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestResult {
    /// No failure observed
    Passed,
    /// Failure observed
    Failed,
    /// Unresolved: the candidate could not be classified
    Inconclusive,
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Passed => write!(f, "PASS"),
            TestResult::Failed => write!(f, "FAIL"),
            TestResult::Inconclusive => write!(f, "UNRESOLVED"),
        }
    }
}

/// Classifies delta subsets
///
/// The subset is always in the canonical order of the full delta list when it
/// comes from the minimizer. Implementations are expected to answer Passed
/// for the empty subset and Failed for the full list; anything else is
/// reported by the minimizer as a precondition violation.
pub trait TestOracle<E = EditOperation> {
    fn evaluate(&mut self, subset: &[E]) -> TestResult;
}

impl<E, F> TestOracle<E> for F
where
    F: FnMut(&[E]) -> TestResult,
{
    fn evaluate(&mut self, subset: &[E]) -> TestResult {
        self(subset)
    }
}
